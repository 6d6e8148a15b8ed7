use std::collections::VecDeque;

use crate::containers::graph::Graph;
use crate::error::{Error, Result};

/// Breadth-first visit order from `start`; neighbors enqueue in
/// adjacency order, so the order is fully determined by insertion.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn bfs(graph: &Graph, start: usize) -> Result<Vec<usize>> {
    let n = graph.vertex_count();
    if start >= n {
        return Err(Error::OutOfRange { index: start, len: n });
    }
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();
    let mut order = Vec::new();
    visited[start] = true;
    queue.push_back(start);
    while let Some(u) = queue.pop_front() {
        order.push(u);
        for &(v, _) in graph.neighbors(u) {
            if !visited[v] {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }
    tracing::trace!(reached = order.len(), "bfs finished");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_by_level_order() {
        let mut g = Graph::new();
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(1, 3);
        g.add_edge(2, 3);
        assert_eq!(bfs(&g, 0), Ok(vec![0, 1, 2, 3]));
    }

    #[test]
    fn unreachable_vertices_excluded() {
        let mut g = Graph::with_vertices(4);
        g.add_edge(0, 1);
        assert_eq!(bfs(&g, 0), Ok(vec![0, 1]));
    }

    #[test]
    fn self_loops_and_duplicate_edges() {
        let mut g = Graph::new();
        g.add_edge(0, 0);
        g.add_edge(0, 1);
        g.add_edge(0, 1);
        assert_eq!(bfs(&g, 0), Ok(vec![0, 1]));
    }

    #[test]
    fn start_out_of_range() {
        let g = Graph::with_vertices(2);
        assert_eq!(bfs(&g, 5), Err(Error::OutOfRange { index: 5, len: 2 }));
    }
}
