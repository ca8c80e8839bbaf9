//! Floyd-Warshall all-pairs shortest paths with path reconstruction.
//!
//! Input is a dense V x V weight matrix: 0 on the diagonal, INF where no
//! edge exists (`Graph::to_adjacency_matrix` produces this form). After the
//! k-loop, dist[i][j] is the true shortest distance and next[i][j] the
//! first hop on one such path.
//!
//! Negative cycles are not rejected here: one surfaces as dist[i][i] < 0,
//! which callers can test with `has_negative_cycle`. O(V^3).

use serde::{Deserialize, Serialize};

use super::INF;
use crate::error::{GraphError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllPairs {
    /// dist[i][j] = shortest distance i -> j, INF when unreachable.
    pub dist: Vec<Vec<i64>>,
    next: Vec<Vec<Option<usize>>>,
}

impl AllPairs {
    /// Shortest distance i -> j, None when unreachable or out of range.
    pub fn distance(&self, i: usize, j: usize) -> Option<i64> {
        match self.dist.get(i).and_then(|row| row.get(j)) {
            Some(&d) if d != INF => Some(d),
            _ => None,
        }
    }

    /// Vertex sequence start -> end (inclusive), following first hops.
    /// None when no path exists.
    pub fn path(&self, start: usize, end: usize) -> Option<Vec<usize>> {
        if start >= self.dist.len() || end >= self.dist.len() {
            return None;
        }
        if start == end {
            return Some(vec![start]);
        }

        let mut path = vec![start];
        let mut v = start;
        while v != end {
            v = self.next[v][end]?;
            path.push(v);
        }
        Some(path)
    }

    /// True iff some diagonal entry went negative, i.e. a negative cycle
    /// exists somewhere in the input.
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.dist.len()).any(|i| self.dist[i][i] < 0)
    }
}

/// All-pairs shortest distances over a dense weight matrix.
pub fn floyd_warshall(matrix: &[Vec<i64>]) -> Result<AllPairs> {
    let v = matrix.len();
    for row in matrix {
        if row.len() != v {
            return Err(GraphError::NonSquareMatrix {
                rows: v,
                cols: row.len(),
            });
        }
    }

    let mut dist = matrix.to_vec();
    let mut next = vec![vec![None; v]; v];

    for i in 0..v {
        for j in 0..v {
            if i != j && matrix[i][j] != INF {
                next[i][j] = Some(j);
            }
        }
    }

    for k in 0..v {
        for i in 0..v {
            if dist[i][k] == INF {
                continue;
            }
            for j in 0..v {
                if dist[k][j] == INF {
                    continue;
                }
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                    next[i][j] = next[i][k];
                }
            }
        }
    }

    Ok(AllPairs { dist, next })
}
