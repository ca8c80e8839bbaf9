//! # graphkit
//!
//! Classic graph algorithms over one shared weighted-graph representation.
//!
//! ## Modules
//!
//! - `graph` – the weighted adjacency-list store and the algorithms that
//!   consume it (Bellman-Ford, Floyd-Warshall, topological sort, Kosaraju
//!   SCC, Kruskal MST), plus a dense-matrix Dijkstra utility
//! - `data_structures` – union-find, and the prefix-sum structures
//!   (Fenwick tree, segment tree) exposed as independent range-query
//!   utilities
//! - `error` – the crate-wide error taxonomy
//!
//! Every algorithm runs to completion over a snapshot of the graph supplied
//! at call time and returns a self-contained result. Traversal scratch
//! state is allocated per call, so independent calls on the same graph
//! never interfere.
//!
//! ## Usage Example
//!
//! ```rust
//! use graphkit::graph::{bellman_ford::bellman_ford, Graph};
//!
//! let mut g = Graph::new(3);
//! g.add_edge(0, 1, 4)?;
//! g.add_edge(1, 2, -2)?;
//!
//! let tree = bellman_ford(&g, 0)?;
//! assert_eq!(tree.dist[2], 2);
//! # Ok::<(), graphkit::error::GraphError>(())
//! ```

pub mod data_structures;
pub mod error;
pub mod graph;
