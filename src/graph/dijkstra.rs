use std::cmp::Ordering;

use crate::containers::graph::Graph;
use crate::containers::heap::MinHeap;
use crate::error::{Error, Result};

/// Pending expansion ordered by tentative distance, vertex id breaking
/// ties so the ordering is total.
#[derive(PartialEq, Eq)]
struct Visit {
    dist: i64,
    vertex: usize,
}

impl Ord for Visit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .cmp(&other.dist)
            .then(self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for Visit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest paths by greedy expansion of the closest
/// unsettled vertex. `None` marks an unreachable vertex. Every edge
/// weight must be non-negative; a negative weight fails up front rather
/// than producing silently wrong distances.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dijkstra(graph: &Graph, start: usize) -> Result<Vec<Option<i64>>> {
    let n = graph.vertex_count();
    if start >= n {
        return Err(Error::OutOfRange { index: start, len: n });
    }
    if graph.edges().any(|(_, _, w)| w < 0) {
        return Err(Error::InvalidInput("negative edge weight"));
    }
    let mut dist: Vec<Option<i64>> = vec![None; n];
    let mut heap = MinHeap::new();
    dist[start] = Some(0);
    heap.push(Visit { dist: 0, vertex: start });
    while let Some(Visit { dist: d, vertex: u }) = heap.pop() {
        if dist[u] != Some(d) {
            // superseded by a shorter path found before this entry popped
            continue;
        }
        for &(v, w) in graph.neighbors(u) {
            let cand = d + w;
            if dist[v].map_or(true, |cur| cand < cur) {
                dist[v] = Some(cand);
                heap.push(Visit { dist: cand, vertex: v });
            }
        }
    }
    tracing::trace!(
        settled = dist.iter().filter(|d| d.is_some()).count(),
        "dijkstra finished"
    );
    Ok(dist)
}
