use serde::{Deserialize, Serialize};

/// Discrete chart time unit shared by sampling and interval bounds.
pub type Tick = i32;

/// Stand-in for "end of chart" when composing open-ended ranges.
pub const TICK_INF: Tick = 999_999_999;

/// Half-open tick range `[start, end)`.
///
/// Operations return new values; an interval is never mutated in
/// place. An interval with `start >= end` is degenerate and is dropped
/// wherever intervals are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub start: Tick,
    pub end: Tick,
}

impl Interval {
    /// Canonical empty interval; also what masking disjoint intervals
    /// yields.
    pub const EMPTY: Interval = Interval { start: 0, end: 0 };

    pub fn new(start: Tick, end: Tick) -> Self {
        Self { start, end }
    }

    /// A valid interval is non-empty: `start < end`.
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    pub fn duration(&self) -> Tick {
        self.end - self.start
    }

    /// Whether the whole interval lies at or before `tick`.
    pub fn is_before(&self, tick: Tick) -> bool {
        self.end <= tick
    }

    /// Whether the whole interval lies strictly after `tick`.
    pub fn is_after(&self, tick: Tick) -> bool {
        tick < self.start
    }

    /// Whether `tick` falls inside the interval.
    pub fn is_inside(&self, tick: Tick) -> bool {
        self.start <= tick && tick < self.end
    }

    /// Two intervals are mergeable when they overlap or touch.
    pub fn can_merge(&self, other: Interval) -> bool {
        if other.end < self.start {
            return false;
        }
        if self.end < other.start {
            return false;
        }
        true
    }

    /// Union of two mergeable intervals.
    ///
    /// Callers check `can_merge` first; merging intervals with a gap
    /// between them is a contract violation.
    pub fn merge(&self, other: Interval) -> Interval {
        assert!(
            self.can_merge(other),
            "merging disjoint intervals {:?} and {:?}",
            self,
            other
        );
        Interval::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Two intervals can mask only under strict overlap; touching is
    /// not enough.
    pub fn can_mask(&self, other: Interval) -> bool {
        if other.end <= self.start {
            return false;
        }
        if self.end <= other.start {
            return false;
        }
        true
    }

    /// Intersection; the empty interval when the two do not overlap.
    pub fn mask(&self, other: Interval) -> Interval {
        if !self.can_mask(other) {
            return Interval::EMPTY;
        }
        Interval::new(self.start.max(other.start), self.end.min(other.end))
    }
}

impl From<(Tick, Tick)> for Interval {
    fn from((start, end): (Tick, Tick)) -> Self {
        Interval::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validity() {
        assert!(Interval::new(0, 1).is_valid());
        assert!(!Interval::new(5, 5).is_valid());
        assert!(!Interval::new(7, 3).is_valid());
    }

    #[test]
    fn test_duration() {
        assert_eq!(Interval::new(10, 25).duration(), 15);
        assert_eq!(Interval::EMPTY.duration(), 0);
    }

    #[test]
    fn test_position_predicates() {
        let interval = Interval::new(10, 20);
        assert!(interval.is_before(20));
        assert!(!interval.is_before(19));
        assert!(interval.is_after(9));
        assert!(!interval.is_after(10));
        assert!(interval.is_inside(10));
        assert!(interval.is_inside(19));
        assert!(!interval.is_inside(20));
    }

    #[test]
    fn test_can_merge_touching_and_overlapping() {
        let interval = Interval::new(10, 20);
        assert!(interval.can_merge(Interval::new(20, 30)));
        assert!(interval.can_merge(Interval::new(0, 10)));
        assert!(interval.can_merge(Interval::new(15, 25)));
        assert!(!interval.can_merge(Interval::new(21, 30)));
        assert!(!interval.can_merge(Interval::new(0, 9)));
    }

    #[test]
    fn test_merge_is_convex_hull() {
        let merged = Interval::new(10, 20).merge(Interval::new(15, 30));
        assert_eq!(merged, Interval::new(10, 30));
    }

    #[test]
    #[should_panic(expected = "merging disjoint intervals")]
    fn test_merge_with_gap_panics() {
        let _ = Interval::new(0, 5).merge(Interval::new(7, 10));
    }

    #[test]
    fn test_can_mask_requires_strict_overlap() {
        let interval = Interval::new(10, 20);
        assert!(interval.can_mask(Interval::new(19, 30)));
        assert!(!interval.can_mask(Interval::new(20, 30)));
        assert!(!interval.can_mask(Interval::new(0, 10)));
    }

    #[test]
    fn test_mask_disjoint_yields_empty() {
        assert_eq!(
            Interval::new(0, 5).mask(Interval::new(5, 10)),
            Interval::EMPTY
        );
    }

    #[test]
    fn test_mask_is_intersection() {
        let masked = Interval::new(10, 25).mask(Interval::new(15, 30));
        assert_eq!(masked, Interval::new(15, 25));
    }

    fn arb_interval() -> impl Strategy<Value = Interval> {
        (-200i32..200, 1i32..60).prop_map(|(start, len)| Interval::new(start, start + len))
    }

    proptest! {
        #![proptest_config(ProptestConfig { max_global_rejects: 100_000, ..ProptestConfig::default() })]

        #[test]
        fn prop_can_merge_matches_gap_formula(a in arb_interval(), b in arb_interval()) {
            let reachable = !(b.end < a.start || a.end < b.start);
            prop_assert_eq!(a.can_merge(b), reachable);
            prop_assert_eq!(a.can_merge(b), b.can_merge(a));
        }

        #[test]
        fn prop_merge_commutative_hull(a in arb_interval(), b in arb_interval()) {
            prop_assume!(a.can_merge(b));
            let merged = a.merge(b);
            prop_assert_eq!(merged, b.merge(a));
            prop_assert_eq!(merged.start, a.start.min(b.start));
            prop_assert_eq!(merged.end, a.end.max(b.end));
        }

        #[test]
        fn prop_can_mask_matches_overlap_formula(a in arb_interval(), b in arb_interval()) {
            let overlapping = b.end > a.start && a.end > b.start;
            prop_assert_eq!(a.can_mask(b), overlapping);
            prop_assert_eq!(a.mask(b), b.mask(a));
        }
    }
}
