use super::store::Graph;
use super::visit;

/// DFS-based topological ordering: every vertex appears before the
/// vertices reachable from it. Valid for DAGs only; cyclic input still
/// terminates but the order carries no meaning (no cycle check is
/// performed). O(V + E).
pub fn topological_sort(graph: &Graph) -> Vec<usize> {
    let v = graph.vertex_count();
    let mut visited = vec![false; v];
    let mut order = Vec::with_capacity(v);

    for u in 0..v {
        if !visited[u] {
            visit::post_order(graph, u, &mut visited, &mut order);
        }
    }

    order.reverse();
    order
}
