use crate::error::{Error, Result};

/// All distinct combinations of candidates (unlimited reuse) summing to
/// `target`. Candidates are sorted and scanned forward only, so the same
/// multiset can never appear in two orders; a branch is pruned as soon
/// as the remaining target drops below the next candidate.
pub fn combination_sum(candidates: &[u64], target: u64) -> Result<Vec<Vec<u64>>> {
    if candidates.iter().any(|&c| c == 0) {
        return Err(Error::InvalidInput("zero-valued candidate"));
    }
    fn backtrack(
        cands: &[u64],
        start: usize,
        remaining: u64,
        current: &mut Vec<u64>,
        out: &mut Vec<Vec<u64>>,
    ) {
        if remaining == 0 {
            out.push(current.clone());
            return;
        }
        for i in start..cands.len() {
            if cands[i] > remaining {
                break;
            }
            current.push(cands[i]);
            backtrack(cands, i, remaining - cands[i], current, out);
            current.pop();
        }
    }

    let mut cands = candidates.to_vec();
    cands.sort_unstable();
    cands.dedup();
    let mut out = Vec::new();
    backtrack(&cands, 0, target, &mut Vec::new(), &mut out);
    Ok(out)
}
