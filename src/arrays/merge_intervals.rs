use crate::containers::interval::Interval;

/// Merge overlapping intervals. Sorts by start, then folds each interval
/// into the previous one while `next.start <= current.end`. Output is
/// sorted by start and pairwise disjoint.
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_by_key(Interval::start);
    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for iv in intervals {
        match merged.last_mut() {
            Some(last) if iv.start() <= last.end() => *last = last.hull(&iv),
            _ => merged.push(iv),
        }
    }
    merged
}
