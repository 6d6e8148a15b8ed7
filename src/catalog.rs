/// Mapping of algorithm modules in src/ to their computation class and
/// mutation contract: `Pure` operations only inspect their input,
/// `InPlace` operations document mutation of the caller's container.
pub const TOOLKIT_COMPUTATION_MAP: &[(&str, &str, &str)] = &[
    // Arrays & strings
    ("arrays/two_sum.rs", "Hash lookup", "Pure"),
    ("arrays/dedup.rs", "Two-pointer compaction", "InPlace"),
    ("arrays/contains_duplicate.rs", "Hash lookup", "Pure"),
    ("arrays/kadane.rs", "Linear scan", "Pure"),
    ("arrays/move_zeroes.rs", "Two-pointer partition", "InPlace"),
    ("arrays/group_anagrams.rs", "Hash grouping", "Pure"),
    ("arrays/sliding_window.rs", "Window scan", "Pure"),
    ("arrays/product_except_self.rs", "Prefix-suffix scan", "Pure"),
    ("arrays/longest_consecutive.rs", "Hash scan", "Pure"),
    ("arrays/merge_intervals.rs", "Sort and fold", "Pure"),
    ("arrays/frequency.rs", "Frequency counting", "Pure"),
    // Linked lists
    ("lists/reverse.rs", "Pointer rewiring", "InPlace"),
    ("lists/cycle.rs", "Pointer race", "Pure"),
    ("lists/merge.rs", "Node relinking", "InPlace"),
    ("lists/merge_k.rs", "Heap-driven relinking", "InPlace"),
    ("lists/remove_nth.rs", "Cursor unlinking", "InPlace"),
    // Searching
    ("searching/binary_search.rs", "Binary search", "Pure"),
    ("searching/boundary.rs", "Binary search", "Pure"),
    ("searching/rotated.rs", "Binary search", "Pure"),
    ("searching/peak.rs", "Binary search", "Pure"),
    // Sorting & selection
    ("sorting/bubble_sort.rs", "Sorting", "InPlace"),
    ("sorting/merge_sort.rs", "Sorting", "Pure"),
    ("sorting/quick_sort.rs", "Sorting", "InPlace"),
    ("sorting/kth_largest.rs", "Selection", "Pure"),
    // Trees
    ("trees/traversal.rs", "Tree traversal", "Pure"),
    ("trees/depth.rs", "Tree traversal", "Pure"),
    ("trees/validate_bst.rs", "Tree traversal", "Pure"),
    ("trees/lca.rs", "Tree traversal", "Pure"),
    ("trees/level_order.rs", "Tree traversal", "Pure"),
    ("trees/invert.rs", "Tree restructuring", "InPlace"),
    // Graphs
    ("graph/bfs.rs", "Graph traversal", "Pure"),
    ("graph/dfs.rs", "Graph traversal", "Pure"),
    ("graph/cycle.rs", "Graph traversal", "Pure"),
    ("graph/islands.rs", "Flood fill", "Pure"),
    ("graph/clone.rs", "Graph copying", "Pure"),
    ("graph/topological_sort.rs", "Topological ordering", "Pure"),
    ("graph/dijkstra.rs", "Shortest path", "Pure"),
    ("graph/bellman_ford.rs", "Shortest path", "Pure"),
    ("graph/grid.rs", "Shortest path", "Pure"),
    // Dynamic programming
    ("dynamic_programming/climbing_stairs.rs", "DP computation", "Pure"),
    ("dynamic_programming/coin_change.rs", "DP computation", "Pure"),
    ("dynamic_programming/lcs.rs", "DP computation", "Pure"),
    ("dynamic_programming/house_robber.rs", "DP computation", "Pure"),
    // Backtracking
    ("backtracking/permutations.rs", "Combinatorial search", "Pure"),
    ("backtracking/combination_sum.rs", "Combinatorial search", "Pure"),
];
