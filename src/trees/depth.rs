use crate::containers::tree::TreeNode;

/// Maximum depth: number of nodes on the longest root-to-leaf path,
/// 0 for an absent tree. Explicit stack of (node, depth).
pub fn max_depth<T>(root: &Option<Box<TreeNode<T>>>) -> usize {
    let mut best = 0;
    let mut stack: Vec<(&TreeNode<T>, usize)> = Vec::new();
    if let Some(node) = root.as_deref() {
        stack.push((node, 1));
    }
    while let Some((node, depth)) = stack.pop() {
        best = best.max(depth);
        if let Some(l) = node.left.as_deref() {
            stack.push((l, depth + 1));
        }
        if let Some(r) = node.right.as_deref() {
            stack.push((r, depth + 1));
        }
    }
    best
}
