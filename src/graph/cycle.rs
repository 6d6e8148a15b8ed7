use crate::containers::graph::Graph;

#[derive(Clone, Copy, PartialEq)]
enum Color {
    White, // unvisited
    Gray,  // on the current exploration path
    Black, // fully explored
}

/// Directed-cycle test by three-color depth-first search: an edge into a
/// gray vertex points back into the path currently being explored, which
/// is exactly a cycle. Iterative, with explicit enter/exit frames.
/// Distinct from the linked-list Floyd detector in `lists::cycle`.
pub fn has_cycle(graph: &Graph) -> bool {
    let n = graph.vertex_count();
    let mut color = vec![Color::White; n];
    for root in 0..n {
        if color[root] != Color::White {
            continue;
        }
        let mut stack = vec![(root, false)];
        while let Some((u, exiting)) = stack.pop() {
            if exiting {
                color[u] = Color::Black;
                continue;
            }
            if color[u] != Color::White {
                // stale frame from a duplicate discovery
                continue;
            }
            color[u] = Color::Gray;
            stack.push((u, true));
            for &(v, _) in graph.neighbors(u) {
                match color[v] {
                    Color::Gray => return true,
                    Color::White => stack.push((v, false)),
                    Color::Black => {}
                }
            }
        }
    }
    false
}
