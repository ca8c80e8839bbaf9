//! Weighted adjacency-list graph store.
//!
//! Variables:
//!   V       = number of vertices, indices 0..V
//!   adj[u]  = Vec<(v, w)> of outgoing edges u -> v with weight w
//!   E       = logical edge count (an undirected edge counts once)
//!
//! Equations:
//!   add_edge(u, v, w):            adj[u].push((v, w)),               E += 1
//!   add_undirected_edge(u, v, w): adj[u].push((v, w)),
//!                                 adj[v].push((u, w)),               E += 1
//!   transpose:                    edge (u, v, w)  =>  edge (v, u, w)
//!
//! Traversal scratch state (visited sets, finish stacks) lives with the
//! algorithms, not here, so independent calls on the same graph never
//! interfere. Edges append in insertion order; there is no removal.

use serde::{Deserialize, Serialize};

use super::INF;
use crate::error::{GraphError, Result};

/// A directed weighted edge. Weights may be negative; Kruskal's minimality
/// guarantee assumes non-negative weights but the structure does not
/// enforce this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub destination: usize,
    pub weight: i64,
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    adj: Vec<Vec<(usize, i64)>>,
    edges: usize,
}

impl Graph {
    /// An empty graph with `vertices` vertices and no edges.
    pub fn new(vertices: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertices],
            edges: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Logical edge count: an undirected edge contributes one.
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex >= self.adj.len() {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertices: self.adj.len(),
            });
        }
        Ok(())
    }

    /// Add a directed edge src -> dst. Self-loops and duplicates are
    /// accepted; out-of-range endpoints are not.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: i64) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        self.adj[src].push((dst, weight));
        self.edges += 1;
        Ok(())
    }

    /// Add an undirected edge as two directed edges of equal weight,
    /// counted as one logical edge.
    pub fn add_undirected_edge(&mut self, a: usize, b: usize, weight: i64) -> Result<()> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        self.adj[a].push((b, weight));
        self.adj[b].push((a, weight));
        self.edges += 1;
        Ok(())
    }

    /// Outgoing `(destination, weight)` pairs of `v` in insertion order.
    pub fn neighbours(&self, v: usize) -> &[(usize, i64)] {
        &self.adj[v]
    }

    /// Every directed edge, vertex-major in insertion order.
    pub fn edges(&self) -> Vec<Edge> {
        let mut out = Vec::new();
        for (source, list) in self.adj.iter().enumerate() {
            for &(destination, weight) in list {
                out.push(Edge {
                    source,
                    destination,
                    weight,
                });
            }
        }
        out
    }

    /// Each undirected edge exactly once: of the two stored directions only
    /// `source < destination` is emitted. Self-loops never qualify.
    pub fn undirected_edges(&self) -> Vec<Edge> {
        let mut out = Vec::new();
        for (source, list) in self.adj.iter().enumerate() {
            for &(destination, weight) in list {
                if source < destination {
                    out.push(Edge {
                        source,
                        destination,
                        weight,
                    });
                }
            }
        }
        out
    }

    /// A new graph with every edge direction reversed.
    pub fn transpose(&self) -> Graph {
        let mut rev = vec![Vec::new(); self.adj.len()];
        for (u, list) in self.adj.iter().enumerate() {
            for &(v, w) in list {
                rev[v].push((u, w));
            }
        }
        Graph {
            adj: rev,
            edges: self.edges,
        }
    }

    /// Dense V x V matrix form: 0 on the diagonal, INF where no edge
    /// exists. Parallel edges collapse to the minimum weight.
    pub fn to_adjacency_matrix(&self) -> Vec<Vec<i64>> {
        let v = self.adj.len();
        let mut matrix = vec![vec![INF; v]; v];
        for (i, row) in matrix.iter_mut().enumerate() {
            row[i] = 0;
        }
        for (u, list) in self.adj.iter().enumerate() {
            for &(w, weight) in list {
                if weight < matrix[u][w] {
                    matrix[u][w] = weight;
                }
            }
        }
        matrix
    }
}
