/// Maximum sum over picks where no two picked values are adjacent.
/// Rolling pair: best so far excluding the previous value, and best
/// including it.
pub fn house_robber(values: &[u64]) -> u64 {
    let (mut skip, mut take) = (0u64, 0u64);
    for &v in values {
        let take_here = skip + v;
        skip = skip.max(take);
        take = take_here;
    }
    skip.max(take)
}
