use crate::containers::tree::TreeNode;

/// Strict binary-search-tree check. Each node must fit the open interval
/// inherited from all of its ancestors; comparing a node only to its
/// immediate children misses deep violations of an ancestor's bound.
pub fn is_valid_bst<T: Ord>(root: &Option<Box<TreeNode<T>>>) -> bool {
    let mut stack: Vec<(&TreeNode<T>, Option<&T>, Option<&T>)> = Vec::new();
    if let Some(node) = root.as_deref() {
        stack.push((node, None, None));
    }
    while let Some((node, low, high)) = stack.pop() {
        if let Some(l) = low {
            if node.val <= *l {
                return false;
            }
        }
        if let Some(h) = high {
            if node.val >= *h {
                return false;
            }
        }
        if let Some(left) = node.left.as_deref() {
            stack.push((left, low, Some(&node.val)));
        }
        if let Some(right) = node.right.as_deref() {
            stack.push((right, Some(&node.val), high));
        }
    }
    true
}
