use std::collections::HashMap;

use crate::error::{Error, Result};

/// First pair of indices whose values sum to `target`, single pass over
/// a value -> index map.
pub fn two_sum(nums: &[i64], target: i64) -> Result<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::with_capacity(nums.len());
    for (i, &n) in nums.iter().enumerate() {
        if let Some(&j) = seen.get(&(target - n)) {
            return Ok((j, i));
        }
        seen.insert(n, i);
    }
    Err(Error::NotFound)
}
