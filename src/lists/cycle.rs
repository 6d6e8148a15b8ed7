use std::rc::Rc;

use crate::containers::shared_list::SharedLink;

/// Floyd's race over a shared-node chain: fast advances two nodes per
/// round, slow one; they can only meet again on a cycle. Read-only,
/// O(1) space. Distinct from the directed-graph cycle detector in
/// `graph::cycle`.
pub fn has_cycle<T>(head: &SharedLink<T>) -> bool {
    let mut slow = head.clone();
    let mut fast = head.clone();
    loop {
        fast = step(&fast);
        fast = step(&fast);
        slow = step(&slow);
        match (&slow, &fast) {
            (Some(s), Some(f)) => {
                if Rc::ptr_eq(s, f) {
                    return true;
                }
            }
            _ => return false,
        }
    }
}

fn step<T>(link: &SharedLink<T>) -> SharedLink<T> {
    link.as_ref().and_then(|node| node.borrow().next.clone())
}
