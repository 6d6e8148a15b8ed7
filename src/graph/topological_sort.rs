use std::collections::VecDeque;

use crate::containers::graph::Graph;
use crate::error::{Error, Result};

/// Kahn's algorithm: repeatedly emit a zero-in-degree vertex and retire
/// its out-edges. If the order cannot cover every vertex, some in-degree
/// never reached zero, which is exactly a cycle.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn topological_sort(graph: &Graph) -> Result<Vec<usize>> {
    let n = graph.vertex_count();
    let mut indegree = vec![0usize; n];
    for (_, v, _) in graph.edges() {
        indegree[v] += 1;
    }
    let mut queue: VecDeque<usize> = (0..n).filter(|&v| indegree[v] == 0).collect();
    let mut order = Vec::with_capacity(n);
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &(v, _) in graph.neighbors(u) {
            indegree[v] -= 1;
            if indegree[v] == 0 {
                queue.push_back(v);
            }
        }
    }
    if order.len() != n {
        tracing::debug!(ordered = order.len(), total = n, "cycle blocks topological order");
        return Err(Error::CycleDetected);
    }
    Ok(order)
}
