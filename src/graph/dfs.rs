use crate::containers::graph::Graph;
use crate::error::{Error, Result};

/// Depth-first visit order from `start` with an explicit stack, so deep
/// graphs cannot exhaust the call stack. Neighbors are pushed in
/// reverse, which makes the visit order match the recursive convention
/// of exploring adjacency order first.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dfs(graph: &Graph, start: usize) -> Result<Vec<usize>> {
    let n = graph.vertex_count();
    if start >= n {
        return Err(Error::OutOfRange { index: start, len: n });
    }
    let mut visited = vec![false; n];
    let mut stack = vec![start];
    let mut order = Vec::new();
    while let Some(u) = stack.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        order.push(u);
        for &(v, _) in graph.neighbors(u).iter().rev() {
            if !visited[v] {
                stack.push(v);
            }
        }
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explores_depth_first() {
        let mut g = Graph::new();
        g.add_edge(0, 1);
        g.add_edge(0, 2);
        g.add_edge(1, 3);
        assert_eq!(dfs(&g, 0), Ok(vec![0, 1, 3, 2]));
    }

    #[test]
    fn visited_set_matches_reachability() {
        let mut g = Graph::with_vertices(5);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(3, 4);
        let mut order = dfs(&g, 0).unwrap();
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn cycle_terminates() {
        let mut g = Graph::new();
        g.add_edge(0, 1);
        g.add_edge(1, 0);
        assert_eq!(dfs(&g, 0), Ok(vec![0, 1]));
    }

    #[test]
    fn start_out_of_range() {
        let g = Graph::new();
        assert_eq!(dfs(&g, 0), Err(Error::OutOfRange { index: 0, len: 0 }));
    }
}
