use super::interval::{Interval, Tick};

/// Ordered, coalesced set of press intervals for a single channel.
///
/// Invariant after [`Lane::add_intervals`]: ascending by end tick with
/// no two entries mergeable (no overlap, no touch). Windowed queries
/// keep two cursor indices that follow a sliding viewport, so the
/// scrolling editor pays amortized O(1) per query; a random jump
/// degrades to one O(n) cursor walk.
#[derive(Debug, Clone, Default)]
pub struct Lane {
    intervals: Vec<Interval>,
    start_index: usize,
    end_index: usize,
}

impl Lane {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full ordered sequence.
    pub fn all_intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Merge a batch of intervals into the set.
    ///
    /// Degenerate intervals are dropped, the rest is re-sorted by end
    /// tick and swept left to right, repeatedly folding each interval
    /// into the previously emitted one while the two stay mergeable.
    /// Feeding a lane its own contents leaves it unchanged.
    pub fn add_intervals<I>(&mut self, batch: I)
    where
        I: IntoIterator<Item = Interval>,
    {
        let incoming: Vec<Interval> = batch.into_iter().collect();
        if incoming.is_empty() {
            return;
        }

        let mut all: Vec<Interval> = self
            .intervals
            .iter()
            .copied()
            .chain(incoming)
            .filter(Interval::is_valid)
            .collect();
        all.sort_by_key(|interval| interval.end);

        let mut cleaned: Vec<Interval> = Vec::with_capacity(all.len());
        for interval in all {
            let mut accumulator = interval;
            while let Some(&last) = cleaned.last() {
                if !last.can_merge(accumulator) {
                    break;
                }
                accumulator = last.merge(accumulator);
                cleaned.pop();
            }
            cleaned.push(accumulator);
        }

        self.intervals = cleaned;
        // The sweep rebuilt the vector; the window cursors restart
        // from zero instead of pointing into the old layout.
        self.start_index = 0;
        self.end_index = 0;
    }

    /// Intervals intersecting `viewport`, the first and last clipped
    /// to its bounds. An invalid viewport yields nothing.
    ///
    /// The cursors only ever step to adjacent intervals, so a query
    /// window that slides (scrolling) is cheap in both directions.
    pub fn visible_intervals(&mut self, viewport: Interval) -> Vec<Interval> {
        if !viewport.is_valid() {
            return Vec::new();
        }

        while self.start_index != 0
            && !self.intervals[self.start_index - 1].is_before(viewport.start)
        {
            self.start_index -= 1;
        }
        while self.start_index < self.intervals.len()
            && self.intervals[self.start_index].is_before(viewport.start)
        {
            self.start_index += 1;
        }
        while self.end_index != 0 && self.intervals[self.end_index - 1].is_after(viewport.end) {
            self.end_index -= 1;
        }
        while self.end_index < self.intervals.len()
            && !self.intervals[self.end_index].is_after(viewport.end)
        {
            self.end_index += 1;
        }

        let mut slice: Vec<Interval> = self.intervals[self.start_index..self.end_index].to_vec();
        if let Some(head) = slice.first_mut() {
            head.start = head.start.max(viewport.start);
        }
        if let Some(tail) = slice.last_mut() {
            tail.end = tail.end.min(viewport.end);
        }
        slice
    }

    /// Empty the lane and reset both cursors.
    pub fn clear(&mut self) {
        self.intervals.clear();
        self.start_index = 0;
        self.end_index = 0;
    }

    /// Append an interval known to start at or after every stored one.
    /// Entries appended this way may touch their predecessor; queries
    /// only need the ordering.
    pub(crate) fn push_back(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    /// Move the end of the most recent interval to `end`.
    pub(crate) fn extend_last(&mut self, end: Tick) {
        if let Some(last) = self.intervals.last_mut() {
            last.end = end;
        }
    }
}
