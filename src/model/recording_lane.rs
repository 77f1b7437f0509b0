use super::interval::{Interval, Tick};
use super::lane::Lane;

/// Lane that accumulates the interval currently being pressed from a
/// boolean sample stream.
///
/// Lives for one recording session: at stop time its contents are
/// folded into the matching persistent lane, and it is cleared before
/// the next session starts.
#[derive(Debug, Clone, Default)]
pub struct RecordingLane {
    lane: Lane,
    tracking: bool,
}

impl RecordingLane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one sample.
    ///
    /// A rising edge opens a provisional `(tick - 1, tick)` interval so
    /// even a press sampled at a single tick stays non-degenerate;
    /// while the press lasts, the interval's end follows the sample
    /// tick. A falling edge only drops the flag; the interval was
    /// already closed by the extension above.
    pub fn update(&mut self, tick: Tick, active: bool) {
        if active && !self.tracking {
            self.tracking = true;
            self.lane.push_back(Interval::new(tick - 1, tick));
        }

        if self.tracking {
            self.lane.extend_last(tick);
        }

        if !active && self.tracking {
            self.tracking = false;
        }
    }

    pub fn all_intervals(&self) -> &[Interval] {
        self.lane.all_intervals()
    }

    pub fn visible_intervals(&mut self, viewport: Interval) -> Vec<Interval> {
        self.lane.visible_intervals(viewport)
    }

    pub fn add_intervals<I>(&mut self, batch: I)
    where
        I: IntoIterator<Item = Interval>,
    {
        self.lane.add_intervals(batch);
    }

    /// Reset for the next session: intervals, cursors and the tracking
    /// flag.
    pub fn clear(&mut self) {
        self.lane.clear();
        self.tracking = false;
    }
}
