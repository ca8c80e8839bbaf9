//! Bellman-Ford single-source shortest paths.
//!
//! Variables:
//!   V         = number of vertices
//!   E         = directed edge list extracted from the graph
//!   dist[v]   = shortest known distance source -> v   (INF = unreachable)
//!   parent[v] = predecessor of v on that path
//!
//! Equations:
//!   Initialise: dist[source] = 0,  dist[v] = INF  for v != source
//!
//!   Relax (repeated V-1 times, early exit when a round changes nothing):
//!     for each (u, v, w) in E with dist[u] != INF:
//!       dist[u] + w < dist[v]  =>  dist[v] = dist[u] + w,  parent[v] = u
//!
//!   Detection (pass V):
//!     any edge still relaxes  =>  negative cycle reachable from source
//!
//!   Complexity: O(V * E)

use serde::{Deserialize, Serialize};

use super::store::Graph;
use super::INF;
use crate::error::{GraphError, Result};

/// Shortest-path tree rooted at `source`. `dist` holds INF for vertices the
/// source cannot reach; `parent` links walk back towards the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTree {
    pub source: usize,
    pub dist: Vec<i64>,
    pub parent: Vec<Option<usize>>,
}

impl ShortestPathTree {
    /// Vertex sequence source -> target, both endpoints included.
    /// None if `target` is unreachable or out of range.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if target >= self.dist.len() || self.dist[target] == INF {
            return None;
        }

        let mut path = vec![target];
        let mut v = target;
        while let Some(p) = self.parent[v] {
            path.push(p);
            v = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Shortest distances and predecessor links from `source`, tolerating
/// negative edge weights. Fails with `NegativeCycle` when one is reachable
/// from the source: the distances would be meaningless and are not
/// returned.
pub fn bellman_ford(graph: &Graph, source: usize) -> Result<ShortestPathTree> {
    graph.check_vertex(source)?;

    let v = graph.vertex_count();
    let edges = graph.edges();

    let mut dist = vec![INF; v];
    let mut parent = vec![None; v];
    dist[source] = 0;

    for _ in 1..v {
        let mut updated = false;

        for e in &edges {
            if dist[e.source] == INF {
                continue;
            }
            let candidate = dist[e.source] + e.weight;
            if candidate < dist[e.destination] {
                dist[e.destination] = candidate;
                parent[e.destination] = Some(e.source);
                updated = true;
            }
        }

        if !updated {
            break;
        }
    }

    // Pass V: anything that still relaxes sits on a negative cycle.
    for e in &edges {
        if dist[e.source] != INF && dist[e.source] + e.weight < dist[e.destination] {
            return Err(GraphError::NegativeCycle { source });
        }
    }

    Ok(ShortestPathTree {
        source,
        dist,
        parent,
    })
}
