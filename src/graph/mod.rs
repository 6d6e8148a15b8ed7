pub mod bellman_ford;
pub mod bfs;
pub mod clone;
pub mod cycle;
pub mod dfs;
pub mod dijkstra;
pub mod grid;
pub mod islands;
pub mod topological_sort;
