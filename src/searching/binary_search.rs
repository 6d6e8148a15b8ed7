use std::cmp::Ordering;

use crate::error::{Error, Result};

/// Index of `target` in a sorted slice. Midpoint computed as
/// low + (high - low) / 2 so the sum can never overflow.
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Result<usize> {
    let (mut low, mut high) = (0, arr.len());
    while low < high {
        let mid = low + (high - low) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => return Ok(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    Err(Error::NotFound)
}
