//! # Algokit
//!
//! Interview-algorithm toolkit organized by category.
//!
//! ## Modules
//!
//! - `containers` – Foundational structures (dynamic array, linked list, binary tree, graph, min-heap, interval)
//! - `arrays` – Array & string algorithms (two-pointer, sliding window, prefix products, hashing)
//! - `lists` – Linked-list algorithms (reversal, cycle detection, merges, nth-from-end removal)
//! - `searching` – Binary-search family (exact match, boundary, rotated, peak)
//! - `sorting` – Ordering and selection (bubble, merge, quick, kth-largest)
//! - `trees` – Binary-tree algorithms (traversals, depth, BST validation, LCA, level order, inversion)
//! - `graph` – Traversal & pathfinding (BFS, DFS, cycle detection, islands, cloning, topological sort, Dijkstra, Bellman-Ford, grid paths)
//! - `dynamic_programming` – Tabulated recurrences (stairs, coin change, LCS, house robber)
//! - `backtracking` – Exhaustive search with pruning (permutations, combination sum)
//!
//! Every fallible operation returns [`error::Result`]; the failure kinds
//! form the closed set in [`error::Error`]. Algorithms either read-only
//! inspect their input or document in-place mutation; none retains a
//! reference to caller data past its return.
//!
//! ## Usage Example
//!
//! ```rust
//! use algokit::sorting::merge_sort::merge_sort;
//!
//! let sorted = merge_sort(&[3, 1, 2]);
//! assert_eq!(sorted, vec![1, 2, 3]);
//! ```

pub mod arrays;
pub mod backtracking;
pub mod catalog;
pub mod containers;
pub mod dynamic_programming;
pub mod error;
pub mod graph;
pub mod lists;
pub mod searching;
pub mod sorting;
pub mod trees;

pub use error::{Error, Result};
