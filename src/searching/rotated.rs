use crate::error::{Error, Result};

/// Search a sorted slice that was rotated at an unknown pivot. At every
/// window one half is contiguously sorted; keep whichever half could
/// hold the target. O(log n) despite the rotation.
pub fn search_rotated(nums: &[i64], target: i64) -> Result<usize> {
    let (mut low, mut high) = (0, nums.len());
    while low < high {
        let mid = low + (high - low) / 2;
        if nums[mid] == target {
            return Ok(mid);
        }
        if nums[low] <= nums[mid] {
            // left half sorted
            if nums[low] <= target && target < nums[mid] {
                high = mid;
            } else {
                low = mid + 1;
            }
        } else {
            // right half sorted
            if nums[mid] < target && target <= nums[high - 1] {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
    }
    Err(Error::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_in_back_half() {
        assert_eq!(search_rotated(&[4, 5, 6, 7, 0, 1, 2], 0), Ok(4));
    }

    #[test]
    fn target_in_front_half() {
        assert_eq!(search_rotated(&[4, 5, 6, 7, 0, 1, 2], 5), Ok(1));
    }

    #[test]
    fn missing() {
        assert_eq!(search_rotated(&[4, 5, 6, 7, 0, 1, 2], 3), Err(Error::NotFound));
        assert_eq!(search_rotated(&[], 3), Err(Error::NotFound));
    }

    #[test]
    fn unrotated_input() {
        assert_eq!(search_rotated(&[1, 2, 3, 4], 4), Ok(3));
    }

    #[test]
    fn rotation_by_one() {
        assert_eq!(search_rotated(&[5, 1, 2, 3, 4], 1), Ok(1));
    }
}
