//! Binary tree node with exclusively owned children.
//!
//! Acyclic by construction: a child box has exactly one parent and no
//! algorithm here shares subtrees.

#[derive(Debug)]
pub struct TreeNode<T> {
    pub val: T,
    pub left: Option<Box<TreeNode<T>>>,
    pub right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    pub fn leaf(val: T) -> Box<Self> {
        Box::new(Self {
            val,
            left: None,
            right: None,
        })
    }
}

/// Build from a level array: children of index i sit at 2i+1 and 2i+2,
/// `None` marks an absent node. Built bottom-up, so no recursion depth
/// to worry about on large fixtures.
pub fn from_slice<T: Clone>(vals: &[Option<T>]) -> Option<Box<TreeNode<T>>> {
    let n = vals.len();
    let mut nodes: Vec<Option<Box<TreeNode<T>>>> = Vec::new();
    nodes.resize_with(n, || None);
    for i in (0..n).rev() {
        if let Some(val) = vals[i].clone() {
            let left = if 2 * i + 1 < n { nodes[2 * i + 1].take() } else { None };
            let right = if 2 * i + 2 < n { nodes[2 * i + 2].take() } else { None };
            nodes[i] = Some(Box::new(TreeNode { val, left, right }));
        }
    }
    nodes.into_iter().next().flatten()
}
