/// All orderings of the input, each exactly once: n! results. Positions
/// before `k` are fixed; each remaining element takes a turn at `k` by
/// swapping in, recursing, and swapping back. Kept recursive as the
/// documented dual of the iterative production forms; depth equals the
/// input length.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    fn backtrack<T: Clone>(work: &mut Vec<T>, k: usize, out: &mut Vec<Vec<T>>) {
        if k == work.len() {
            out.push(work.clone());
            return;
        }
        for i in k..work.len() {
            work.swap(k, i);
            backtrack(work, k + 1, out);
            work.swap(k, i);
        }
    }

    let mut work = items.to_vec();
    let mut out = Vec::new();
    backtrack(&mut work, 0, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_elements() {
        let mut perms = permutations(&[1, 2, 3]);
        perms.sort();
        assert_eq!(
            perms,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[test]
    fn counts_are_factorial_and_unique() {
        let perms = permutations(&[1, 2, 3, 4]);
        assert_eq!(perms.len(), 24);
        let mut sorted = perms.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 24);
    }

    #[test]
    fn each_result_is_a_permutation() {
        let perms = permutations(&[7, 8, 9]);
        for p in &perms {
            let mut sorted = p.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![7, 8, 9]);
        }
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(permutations::<i32>(&[]), vec![Vec::<i32>::new()]);
        assert_eq!(permutations(&[1]), vec![vec![1]]);
    }
}
