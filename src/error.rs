//! Error taxonomy for the graph toolkit.
//!
//! Unreachable vertices and disconnected spanning forests are not errors:
//! the former is the INF sentinel in distance vectors, the latter an edge
//! count below V-1 (see `SpanningTree::spans`).

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    VertexOutOfRange { vertex: usize, vertices: usize },

    NegativeCycle { source: usize },

    NonSquareMatrix { rows: usize, cols: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::VertexOutOfRange { vertex, vertices } => write!(
                f,
                "vertex {vertex} out of range for a graph with {vertices} vertices"
            ),
            GraphError::NegativeCycle { source } => {
                write!(f, "negative-weight cycle reachable from source {source}")
            }
            GraphError::NonSquareMatrix { rows, cols } => {
                write!(f, "adjacency matrix row has {cols} columns, expected {rows}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

pub type Result<T> = std::result::Result<T, GraphError>;
