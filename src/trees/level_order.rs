use std::collections::VecDeque;

use crate::containers::tree::TreeNode;

/// Values grouped by depth, top to bottom, left to right within each
/// level. The queue never holds more than one level plus its children.
pub fn level_order<T: Clone>(root: &Option<Box<TreeNode<T>>>) -> Vec<Vec<T>> {
    let mut levels = Vec::new();
    let mut queue: VecDeque<&TreeNode<T>> = VecDeque::new();
    if let Some(node) = root.as_deref() {
        queue.push_back(node);
    }
    while !queue.is_empty() {
        let width = queue.len();
        let mut level = Vec::with_capacity(width);
        for _ in 0..width {
            if let Some(node) = queue.pop_front() {
                level.push(node.val.clone());
                if let Some(l) = node.left.as_deref() {
                    queue.push_back(l);
                }
                if let Some(r) = node.right.as_deref() {
                    queue.push_back(r);
                }
            }
        }
        levels.push(level);
    }
    levels
}
