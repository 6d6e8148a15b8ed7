use std::cmp::Ordering;

use crate::containers::heap::MinHeap;
use crate::error::{Error, Result};
use crate::sorting::quick_sort::partition;

/// Kth largest element (k = 1 is the maximum) by quickselect: partition,
/// then recurse into the single side holding the target rank. Average
/// O(n) on a scratch copy of the input.
pub fn kth_largest_quickselect(nums: &[i64], k: usize) -> Result<i64> {
    if k == 0 || k > nums.len() {
        return Err(Error::OutOfRange { index: k, len: nums.len() });
    }
    let mut work = nums.to_vec();
    let target = work.len() - k;
    let (mut low, mut high) = (0, work.len());
    loop {
        let p = low + partition(&mut work[low..high]);
        match p.cmp(&target) {
            Ordering::Equal => return Ok(work[p]),
            Ordering::Less => low = p + 1,
            Ordering::Greater => high = p,
        }
    }
}

/// Same selection through a min-heap of at most k elements; the heap
/// root after one pass is the kth largest. O(n log k).
pub fn kth_largest_heap(nums: &[i64], k: usize) -> Result<i64> {
    if k == 0 || k > nums.len() {
        return Err(Error::OutOfRange { index: k, len: nums.len() });
    }
    let mut heap = MinHeap::with_capacity(k + 1);
    for &n in nums {
        heap.push(n);
        if heap.len() > k {
            heap.pop();
        }
    }
    heap.pop().ok_or(Error::NotFound)
}
