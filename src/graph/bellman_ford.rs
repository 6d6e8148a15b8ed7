//! Bellman-Ford single-source shortest paths.
//!
//! Variables:
//!   dist[v] : Option<i64>  — shortest known distance, None = unreachable
//!
//! Equations:
//!   Initialise: dist[start] = 0, dist[v] = None otherwise
//!   Relax, V-1 rounds (early exit when a round changes nothing):
//!     for each edge (u, v, w): dist[v] = min(dist[v], dist[u] + w)
//!   Round V: any further improvement proves a reachable negative cycle.
//!
//!   Complexity: O(V * E)

use crate::containers::graph::Graph;
use crate::error::{Error, Result};

/// Handles negative edge weights, unlike Dijkstra; a reachable
/// negative-weight cycle makes distances undefined and fails instead of
/// returning a partial result.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn bellman_ford(graph: &Graph, start: usize) -> Result<Vec<Option<i64>>> {
    let n = graph.vertex_count();
    if start >= n {
        return Err(Error::OutOfRange { index: start, len: n });
    }
    let mut dist: Vec<Option<i64>> = vec![None; n];
    dist[start] = Some(0);
    for _ in 1..n {
        let mut updated = false;
        for (u, v, w) in graph.edges() {
            if let Some(du) = dist[u] {
                let cand = du + w;
                if dist[v].map_or(true, |dv| cand < dv) {
                    dist[v] = Some(cand);
                    updated = true;
                }
            }
        }
        if !updated {
            break;
        }
    }
    for (u, v, w) in graph.edges() {
        if let Some(du) = dist[u] {
            if dist[v].map_or(true, |dv| du + w < dv) {
                return Err(Error::NegativeCycleDetected);
            }
        }
    }
    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::dijkstra::dijkstra;

    #[test]
    fn negative_edges_without_cycle() {
        let mut g = Graph::new();
        g.add_weighted_edge(0, 1, 4);
        g.add_weighted_edge(0, 2, 5);
        g.add_weighted_edge(1, 2, -2);
        let dist = bellman_ford(&g, 0).unwrap();
        assert_eq!(dist, vec![Some(0), Some(4), Some(2)]);
    }

    #[test]
    fn negative_cycle_detected() {
        let mut g = Graph::new();
        g.add_weighted_edge(0, 1, 1);
        g.add_weighted_edge(1, 2, -3);
        g.add_weighted_edge(2, 1, 1);
        assert_eq!(bellman_ford(&g, 0), Err(Error::NegativeCycleDetected));
    }

    #[test]
    fn unreachable_negative_cycle_ignored() {
        // the negative cycle sits in a component the source never reaches
        let mut g = Graph::with_vertices(4);
        g.add_weighted_edge(0, 1, 1);
        g.add_weighted_edge(2, 3, -5);
        g.add_weighted_edge(3, 2, 1);
        let dist = bellman_ford(&g, 0).unwrap();
        assert_eq!(dist, vec![Some(0), Some(1), None, None]);
    }

    #[test]
    fn negative_self_loop() {
        let mut g = Graph::new();
        g.add_weighted_edge(0, 0, -1);
        assert_eq!(bellman_ford(&g, 0), Err(Error::NegativeCycleDetected));
    }

    #[test]
    fn agrees_with_dijkstra_on_non_negative_weights() {
        let mut g = Graph::new();
        g.add_weighted_edge(0, 1, 7);
        g.add_weighted_edge(0, 2, 9);
        g.add_weighted_edge(0, 5, 14);
        g.add_weighted_edge(1, 2, 10);
        g.add_weighted_edge(1, 3, 15);
        g.add_weighted_edge(2, 3, 11);
        g.add_weighted_edge(2, 5, 2);
        g.add_weighted_edge(3, 4, 6);
        g.add_weighted_edge(5, 4, 9);
        assert_eq!(bellman_ford(&g, 0).unwrap(), dijkstra(&g, 0).unwrap());
    }

    #[test]
    fn start_out_of_range() {
        assert_eq!(
            bellman_ford(&Graph::new(), 0),
            Err(Error::OutOfRange { index: 0, len: 0 })
        );
    }
}
