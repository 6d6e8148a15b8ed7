use crate::containers::tree::TreeNode;

/// Swap left and right children at every node; returns the same, now
/// mutated, root. Explicit stack, O(width) at the widest level.
pub fn invert<T>(mut root: Option<Box<TreeNode<T>>>) -> Option<Box<TreeNode<T>>> {
    let mut stack: Vec<&mut TreeNode<T>> = Vec::new();
    if let Some(node) = root.as_deref_mut() {
        stack.push(node);
    }
    while let Some(node) = stack.pop() {
        std::mem::swap(&mut node.left, &mut node.right);
        if let Some(l) = node.left.as_deref_mut() {
            stack.push(l);
        }
        if let Some(r) = node.right.as_deref_mut() {
            stack.push(r);
        }
    }
    root
}
