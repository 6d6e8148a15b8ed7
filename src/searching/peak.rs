use crate::error::{Error, Result};

/// Index of some peak: an element no smaller than its neighbors. Walks
/// toward the rising side, so it converges to a peak (not necessarily
/// the global maximum) in O(log n).
pub fn find_peak(nums: &[i64]) -> Result<usize> {
    if nums.is_empty() {
        return Err(Error::InvalidInput("empty sequence"));
    }
    let (mut low, mut high) = (0, nums.len() - 1);
    while low < high {
        let mid = low + (high - low) / 2;
        if nums[mid] < nums[mid + 1] {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    Ok(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_peak() {
        assert_eq!(find_peak(&[1, 2, 3, 1]), Ok(2));
    }

    #[test]
    fn any_peak_is_valid() {
        let nums = [1, 2, 1, 3, 5, 6, 4];
        let i = find_peak(&nums).unwrap();
        let left_ok = i == 0 || nums[i - 1] < nums[i];
        let right_ok = i == nums.len() - 1 || nums[i + 1] < nums[i];
        assert!(left_ok && right_ok, "index {i} is not a peak");
    }

    #[test]
    fn monotonic_edges() {
        assert_eq!(find_peak(&[1, 2, 3]), Ok(2));
        assert_eq!(find_peak(&[3, 2, 1]), Ok(0));
        assert_eq!(find_peak(&[7]), Ok(0));
    }

    #[test]
    fn empty_is_invalid() {
        assert_eq!(find_peak(&[]), Err(Error::InvalidInput("empty sequence")));
    }
}
