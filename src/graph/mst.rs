//! Minimum spanning tree (Kruskal).

use serde::{Deserialize, Serialize};

use super::store::{Edge, Graph};
use crate::data_structures::disjoint_set::DisjointSet;

/// Spanning forest selected by Kruskal's algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    pub edges: Vec<Edge>,
    pub total_weight: i64,
}

impl SpanningTree {
    /// True iff V-1 edges were selected, i.e. the input graph was
    /// connected and the result spans it. Callers must check this before
    /// treating the forest as a tree.
    pub fn spans(&self, vertices: usize) -> bool {
        vertices == 0 || self.edges.len() == vertices - 1
    }
}

/// Kruskal: extract each undirected edge once, sort ascending by weight,
/// select greedily under union-find. Stops once V-1 edges are chosen or
/// the candidates run out (a short result signals a disconnected graph).
/// Equal weights keep extraction order, which is deterministic but not
/// contractual. O(E log E).
pub fn kruskal_mst(graph: &Graph) -> SpanningTree {
    let v = graph.vertex_count();

    let mut candidates = graph.undirected_edges();
    candidates.sort_by_key(|e| e.weight);

    let mut ds = DisjointSet::new(v);
    let mut edges = Vec::new();
    let mut total_weight = 0;

    for e in candidates {
        if edges.len() + 1 == v {
            break;
        }
        if ds.union(e.source, e.destination) {
            total_weight += e.weight;
            edges.push(e);
        }
    }

    SpanningTree {
        edges,
        total_weight,
    }
}
