use std::cmp::Ordering;

use crate::containers::tree::TreeNode;
use crate::error::{Error, Result};

/// Lowest common ancestor in a general binary tree: the deepest node
/// whose subtree contains both targets (a target counts as its own
/// ancestor). Root-to-target paths are found iteratively, then compared;
/// the last shared path node is the answer. Values are assumed unique.
pub fn lowest_common_ancestor<'a, T: PartialEq>(
    root: &'a Option<Box<TreeNode<T>>>,
    p: &T,
    q: &T,
) -> Result<&'a T> {
    let path_p = find_path(root, p).ok_or(Error::NotFound)?;
    let path_q = find_path(root, q).ok_or(Error::NotFound)?;
    let mut lca = None;
    for (a, b) in path_p.iter().zip(path_q.iter()) {
        if std::ptr::eq(*a, *b) {
            lca = Some(*a);
        } else {
            break;
        }
    }
    lca.map(|node| &node.val).ok_or(Error::NotFound)
}

/// BST specialization: descend from the root and stop at the first node
/// lying between the targets; the subtree below it must still contain
/// both for the ancestor to be real.
pub fn lowest_common_ancestor_bst<'a, T: Ord>(
    root: &'a Option<Box<TreeNode<T>>>,
    p: &T,
    q: &T,
) -> Result<&'a T> {
    let (lo, hi) = if p <= q { (p, q) } else { (q, p) };
    let mut cur = root.as_deref();
    while let Some(node) = cur {
        if *hi < node.val {
            cur = node.left.as_deref();
        } else if node.val < *lo {
            cur = node.right.as_deref();
        } else {
            if contains(Some(node), p) && contains(Some(node), q) {
                return Ok(&node.val);
            }
            return Err(Error::NotFound);
        }
    }
    Err(Error::NotFound)
}

fn contains<T: Ord>(mut cur: Option<&TreeNode<T>>, target: &T) -> bool {
    while let Some(node) = cur {
        match target.cmp(&node.val) {
            Ordering::Equal => return true,
            Ordering::Less => cur = node.left.as_deref(),
            Ordering::Greater => cur = node.right.as_deref(),
        }
    }
    false
}

/// Iterative root-to-target path. Stack frames carry how far each node's
/// children have been explored: 0 = none, 1 = left done, 2 = both done.
fn find_path<'a, T: PartialEq>(
    root: &'a Option<Box<TreeNode<T>>>,
    target: &T,
) -> Option<Vec<&'a TreeNode<T>>> {
    let mut path: Vec<(&TreeNode<T>, u8)> = Vec::new();
    if let Some(node) = root.as_deref() {
        path.push((node, 0));
    }
    while !path.is_empty() {
        let top = path.len() - 1;
        let (node, state) = path[top];
        path[top].1 = state + 1;
        match state {
            0 => {
                if node.val == *target {
                    return Some(path.iter().map(|&(n, _)| n).collect());
                }
                if let Some(l) = node.left.as_deref() {
                    path.push((l, 0));
                }
            }
            1 => {
                if let Some(r) = node.right.as_deref() {
                    path.push((r, 0));
                }
            }
            _ => {
                path.pop();
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::tree::from_slice;

    fn sample() -> Option<Box<TreeNode<i32>>> {
        // 3
        // ├── 5: 6, 2 (2: 7, 4)
        // └── 1: 0, 8
        from_slice(&[
            Some(3),
            Some(5),
            Some(1),
            Some(6),
            Some(2),
            Some(0),
            Some(8),
            None,
            None,
            Some(7),
            Some(4),
        ])
    }

    #[test]
    fn targets_in_different_subtrees() {
        assert_eq!(lowest_common_ancestor(&sample(), &5, &1), Ok(&3));
        assert_eq!(lowest_common_ancestor(&sample(), &6, &4), Ok(&5));
    }

    #[test]
    fn target_is_its_own_ancestor() {
        assert_eq!(lowest_common_ancestor(&sample(), &5, &4), Ok(&5));
    }

    #[test]
    fn missing_target() {
        assert_eq!(lowest_common_ancestor(&sample(), &5, &99), Err(Error::NotFound));
    }

    #[test]
    fn bst_descent() {
        let bst = from_slice(&[Some(6), Some(2), Some(8), Some(0), Some(4), Some(7), Some(9)]);
        assert_eq!(lowest_common_ancestor_bst(&bst, &2, &8), Ok(&6));
        assert_eq!(lowest_common_ancestor_bst(&bst, &0, &4), Ok(&2));
        assert_eq!(lowest_common_ancestor_bst(&bst, &2, &4), Ok(&2));
    }

    #[test]
    fn bst_missing_target() {
        let bst = from_slice(&[Some(6), Some(2), Some(8)]);
        assert_eq!(lowest_common_ancestor_bst(&bst, &2, &5), Err(Error::NotFound));
    }

    #[test]
    fn bst_agrees_with_general_form() {
        let bst = from_slice(&[Some(6), Some(2), Some(8), Some(0), Some(4), Some(7), Some(9)]);
        for (p, q) in [(0, 4), (0, 9), (7, 9), (2, 2)] {
            assert_eq!(
                lowest_common_ancestor(&bst, &p, &q),
                lowest_common_ancestor_bst(&bst, &p, &q),
            );
        }
    }
}
