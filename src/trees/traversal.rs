//! Depth-first traversals, all with explicit stacks so skewed trees
//! cannot exhaust the call stack.

use crate::containers::tree::TreeNode;

/// Visit order: node, left subtree, right subtree.
pub fn preorder<T: Clone>(root: &Option<Box<TreeNode<T>>>) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = Vec::new();
    if let Some(node) = root.as_deref() {
        stack.push(node);
    }
    while let Some(node) = stack.pop() {
        out.push(node.val.clone());
        if let Some(r) = node.right.as_deref() {
            stack.push(r);
        }
        if let Some(l) = node.left.as_deref() {
            stack.push(l);
        }
    }
    out
}

/// Visit order: left subtree, node, right subtree. On a binary search
/// tree this yields the values in sorted order.
pub fn inorder<T: Clone>(root: &Option<Box<TreeNode<T>>>) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = Vec::new();
    let mut cur = root.as_deref();
    while cur.is_some() || !stack.is_empty() {
        while let Some(node) = cur {
            stack.push(node);
            cur = node.left.as_deref();
        }
        if let Some(node) = stack.pop() {
            out.push(node.val.clone());
            cur = node.right.as_deref();
        }
    }
    out
}

/// Visit order: left subtree, right subtree, node. Implemented as the
/// reverse of a node-right-left preorder.
pub fn postorder<T: Clone>(root: &Option<Box<TreeNode<T>>>) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = Vec::new();
    if let Some(node) = root.as_deref() {
        stack.push(node);
    }
    while let Some(node) = stack.pop() {
        out.push(node.val.clone());
        if let Some(l) = node.left.as_deref() {
            stack.push(l);
        }
        if let Some(r) = node.right.as_deref() {
            stack.push(r);
        }
    }
    out.reverse();
    out
}
