//! Closed interval [start, end], start <= end enforced at construction.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    start: i64,
    end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidInput("interval start exceeds end"));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i64 {
        self.start
    }
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Closed-interval overlap: touching endpoints count.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Smallest interval covering both.
    pub fn hull(&self, other: &Interval) -> Interval {
        Interval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_bounds() {
        assert_eq!(
            Interval::new(5, 3),
            Err(Error::InvalidInput("interval start exceeds end"))
        );
        assert!(Interval::new(3, 3).is_ok());
    }

    #[test]
    fn overlap_includes_touching_endpoints() {
        let a = Interval::new(1, 3).unwrap();
        let b = Interval::new(3, 6).unwrap();
        let c = Interval::new(7, 9).unwrap();
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn hull_covers_both() {
        let a = Interval::new(1, 3).unwrap();
        let b = Interval::new(2, 6).unwrap();
        assert_eq!(a.hull(&b), Interval::new(1, 6).unwrap());
    }
}
