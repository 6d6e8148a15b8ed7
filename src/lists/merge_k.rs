use std::cmp::Ordering;

use crate::containers::heap::MinHeap;
use crate::containers::linked_list::{Link, ListNode};

/// A chain head waiting in the heap, keyed on (value, source list) so
/// ties resolve toward the earlier list.
struct Head<T: Ord> {
    node: Box<ListNode<T>>,
    src: usize,
}

impl<T: Ord> PartialEq for Head<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: Ord> Eq for Head<T> {}
impl<T: Ord> PartialOrd for Head<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: Ord> Ord for Head<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .val
            .cmp(&other.node.val)
            .then(self.src.cmp(&other.src))
    }
}

/// Merge k sorted chains by always relinking the smallest waiting head;
/// O(N log k) for N total nodes.
pub fn merge_k<T: Ord>(lists: Vec<Link<T>>) -> Link<T> {
    let mut heap: MinHeap<Head<T>> = MinHeap::with_capacity(lists.len());
    for (src, head) in lists.into_iter().enumerate() {
        if let Some(node) = head {
            heap.push(Head { node, src });
        }
    }
    let mut out: Link<T> = None;
    let mut tail = &mut out;
    while let Some(Head { mut node, src }) = heap.pop() {
        if let Some(next) = node.next.take() {
            heap.push(Head { node: next, src });
        }
        let placed = tail.insert(node);
        tail = &mut placed.next;
    }
    out
}
