use std::collections::{HashMap, VecDeque};

use crate::containers::graph::Graph;
use crate::error::{Error, Result};

/// Clone the component reachable from `start`. Clone ids are handed out
/// in first-visit order through a lazily built old -> new map, so cycles
/// and shared references terminate instead of cloning twice. Returns the
/// clone and the id mapping.
pub fn clone_reachable(graph: &Graph, start: usize) -> Result<(Graph, HashMap<usize, usize>)> {
    let n = graph.vertex_count();
    if start >= n {
        return Err(Error::OutOfRange { index: start, len: n });
    }
    let mut map: HashMap<usize, usize> = HashMap::new();
    let mut clone = Graph::new();
    let mut queue = VecDeque::new();
    map.insert(start, 0);
    queue.push_back(start);
    let mut next_id = 1;
    while let Some(u) = queue.pop_front() {
        let cu = map[&u];
        clone.add_vertex(cu);
        for &(v, w) in graph.neighbors(u) {
            let cv = match map.get(&v) {
                Some(&id) => id,
                None => {
                    let id = next_id;
                    next_id += 1;
                    map.insert(v, id);
                    queue.push_back(v);
                    id
                }
            };
            clone.add_weighted_edge(cu, cv, w);
        }
    }
    Ok((clone, map))
}
