//! Heap-based single-source shortest paths over a dense adjacency matrix.
//!
//! A narrow contract consumed independently of the adjacency-list toolkit:
//! one "shortest distances from source" query. Weights must be
//! non-negative; negative inputs are Bellman-Ford's territory.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::INF;
use crate::error::{GraphError, Result};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: i64,
    vertex: usize,
}

// Reversed so the std max-heap pops the smallest cost first.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest distances from `source` over a dense matrix (0 diagonal, INF
/// where no edge exists). INF entries in the result mark unreachable
/// vertices. O((V + E) log V).
pub fn shortest_paths(matrix: &[Vec<i64>], source: usize) -> Result<Vec<i64>> {
    let v = matrix.len();
    for row in matrix {
        if row.len() != v {
            return Err(GraphError::NonSquareMatrix {
                rows: v,
                cols: row.len(),
            });
        }
    }
    if source >= v {
        return Err(GraphError::VertexOutOfRange {
            vertex: source,
            vertices: v,
        });
    }

    let mut dist = vec![INF; v];
    let mut heap = BinaryHeap::new();

    dist[source] = 0;
    heap.push(State {
        cost: 0,
        vertex: source,
    });

    while let Some(State { cost, vertex }) = heap.pop() {
        if cost > dist[vertex] {
            continue; // stale entry
        }

        for (next, &weight) in matrix[vertex].iter().enumerate() {
            if next == vertex || weight == INF {
                continue;
            }
            let candidate = cost + weight;
            if candidate < dist[next] {
                dist[next] = candidate;
                heap.push(State {
                    cost: candidate,
                    vertex: next,
                });
            }
        }
    }

    Ok(dist)
}
