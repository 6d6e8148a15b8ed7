/// Product of every element except self, no division. Prefix products
/// go in on the left-to-right pass, suffix products multiply in on the
/// way back; only the output buffer is allocated.
pub fn product_except_self(nums: &[i64]) -> Vec<i64> {
    let n = nums.len();
    let mut out = vec![1i64; n];
    let mut prefix = 1;
    for i in 0..n {
        out[i] = prefix;
        prefix *= nums[i];
    }
    let mut suffix = 1;
    for i in (0..n).rev() {
        out[i] *= suffix;
        suffix *= nums[i];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic() {
        assert_eq!(product_except_self(&[1, 2, 3, 4]), vec![24, 12, 8, 6]);
    }

    #[test]
    fn with_zero() {
        assert_eq!(product_except_self(&[1, 0, 3]), vec![0, 3, 0]);
    }

    #[test]
    fn two_zeros_all_zero() {
        assert_eq!(product_except_self(&[0, 4, 0]), vec![0, 0, 0]);
    }

    #[test]
    fn empty_and_single() {
        assert!(product_except_self(&[]).is_empty());
        assert_eq!(product_except_self(&[9]), vec![1]);
    }
}
