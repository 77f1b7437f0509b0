//! Recording session orchestration across all 38 channels.

use macroquad::prelude::KeyCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::input::{InputMode, RecorderInput};
use crate::model::{CHANNEL_COUNT, Interval, Lane, RecordingLane, TICK_INF, Tick};

/// How a finished session reconciles with the persistent lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingMode {
    /// Recording cannot start.
    Disabled,
    /// Session data replaces everything inside the session window;
    /// everything outside is preserved exactly.
    Overwrite,
    /// Session data unions with existing data; nothing is removed.
    Add,
}

/// Captures controller input into per-channel press timelines.
///
/// Owns 38 persistent lanes, their per-session recording counterparts
/// and the active input backend. Driven once per tick from the owning
/// thread: `start`/`update`/`stop` for the session lifecycle,
/// [`Recorder::get_recorded_data`] for the renderer's viewport reads.
/// Redundant lifecycle calls (update or stop while idle, start while
/// disabled) are tolerated as no-ops; the UI gates them, the core does
/// not insist.
pub struct Recorder {
    recording: bool,
    session: Interval,
    recording_mode: RecordingMode,
    input_mode: InputMode,
    input: Box<dyn RecorderInput>,
    playback_lanes: Vec<Lane>,
    recording_lanes: Vec<RecordingLane>,
    fetched: Option<(Interval, Vec<Vec<Interval>>)>,
}

impl Recorder {
    pub fn new() -> Self {
        let input_mode = InputMode::KeyboardYuancon;
        Self {
            recording: false,
            session: Interval::EMPTY,
            recording_mode: RecordingMode::Overwrite,
            input_mode,
            input: input_mode.create_backend(),
            playback_lanes: (0..CHANNEL_COUNT).map(|_| Lane::new()).collect(),
            recording_lanes: (0..CHANNEL_COUNT).map(|_| RecordingLane::new()).collect(),
            fetched: None,
        }
    }

    pub fn recording_mode(&self) -> RecordingMode {
        self.recording_mode
    }

    pub fn set_recording_mode(&mut self, mode: RecordingMode) {
        self.recording_mode = mode;
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    /// Select a standard backend. Switching tears the previous backend
    /// down before installing the new one; reselecting the current
    /// mode keeps the backend as is.
    pub fn set_input_mode(&mut self, mode: InputMode) {
        if self.input_mode != mode {
            self.input.stop();
            self.input = mode.create_backend();
        }
        self.input_mode = mode;
    }

    /// Install a custom backend (scripted input, a bespoke device
    /// profile). The previous backend is stopped first.
    pub fn set_backend(&mut self, backend: Box<dyn RecorderInput>) {
        self.input.stop();
        self.input = backend;
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Whether the host UI should suppress its own handling of `key`.
    pub fn should_intercept_key(&self, key: KeyCode) -> bool {
        self.input.should_intercept_key(key)
    }

    /// Begin a session at `tick`. No-op while the mode is
    /// [`RecordingMode::Disabled`].
    pub fn start(&mut self, tick: Tick) {
        if self.recording_mode == RecordingMode::Disabled {
            return;
        }

        self.recording = true;
        self.session = Interval::new(tick, tick);
        for lane in &mut self.recording_lanes {
            lane.clear();
        }
        self.input.start();
        debug!("recording started at tick {tick}");
    }

    /// Advance the session to `tick`: sample the backend once and feed
    /// every channel's hold state into its recording lane. No-op while
    /// idle.
    pub fn update(&mut self, tick: Tick) {
        if !self.recording {
            return;
        }

        self.session.end = tick;
        let frame = self.input.sample();
        for (lane, &active) in self.recording_lanes.iter_mut().zip(frame.iter()) {
            lane.update(tick, active);
        }
    }

    /// Finish the session and reconcile it into the persistent lanes
    /// under the current mode. No-op while idle.
    pub fn stop(&mut self) {
        if !self.recording {
            return;
        }
        self.recording = false;
        self.input.stop();

        for index in 0..CHANNEL_COUNT {
            self.recording_lanes[index].update(self.session.end, false);
            match self.recording_mode {
                RecordingMode::Overwrite => {
                    // The recording lane absorbs the untouched edges,
                    // then replaces the persistent lane wholesale.
                    let head = self.playback_lanes[index]
                        .visible_intervals(Interval::new(0, self.session.start));
                    let tail = self.playback_lanes[index]
                        .visible_intervals(Interval::new(self.session.end, TICK_INF));
                    self.recording_lanes[index].add_intervals(head);
                    self.recording_lanes[index].add_intervals(tail);

                    let mut replacement = Lane::new();
                    replacement
                        .add_intervals(self.recording_lanes[index].all_intervals().iter().copied());
                    self.playback_lanes[index] = replacement;
                }
                RecordingMode::Add => {
                    let recorded: Vec<Interval> =
                        self.recording_lanes[index].all_intervals().to_vec();
                    self.playback_lanes[index].add_intervals(recorded);
                }
                RecordingMode::Disabled => {}
            }
        }

        self.session = Interval::EMPTY;
        self.fetched = None;
        debug!("recording stopped");
    }

    /// Empty every persistent and recording lane.
    pub fn clear(&mut self) {
        self.fetched = None;
        for index in 0..CHANNEL_COUNT {
            self.recording_lanes[index].clear();
            self.playback_lanes[index].clear();
        }
    }

    /// Per-channel intervals visible in `[from_tick, to_tick)`,
    /// composing persistent data with the live state of an in-progress
    /// session.
    ///
    /// While idle, the result for the most recently requested viewport
    /// is memoized and handed back untouched; any mutation of the
    /// lanes (stop, clear) drops the memo.
    pub fn get_recorded_data(&mut self, from_tick: Tick, to_tick: Tick) -> &[Vec<Interval>] {
        let viewport = Interval::new(from_tick, to_tick);
        let cache_hit = !self.recording
            && self
                .fetched
                .as_ref()
                .is_some_and(|(cached, _)| *cached == viewport);

        if !cache_hit {
            let data = self.compose_viewport(viewport);
            self.fetched = Some((viewport, data));
        }

        let (_, data) = self.fetched.as_ref().expect("viewport cache filled above");
        data
    }

    /// Build the per-channel interval lists for one viewport.
    ///
    /// The viewport is partitioned against the session interval: the
    /// slice overlapping the session comes from the recording lanes (a
    /// live preview), the rest from the persistent lanes (all of it
    /// for ADD/DISABLED, which never hide persistent data).
    fn compose_viewport(&mut self, viewport: Interval) -> Vec<Vec<Interval>> {
        let pre = Interval::new(viewport.start, self.session.start.min(viewport.end));
        let during = Interval::new(
            self.session.start.max(viewport.start),
            self.session.end.min(viewport.end),
        );
        let post = Interval::new(self.session.end.max(viewport.start), viewport.end);

        let mut data = Vec::with_capacity(CHANNEL_COUNT);
        for index in 0..CHANNEL_COUNT {
            let mut composed = Lane::new();
            composed.add_intervals(self.recording_lanes[index].visible_intervals(during));
            match self.recording_mode {
                RecordingMode::Overwrite => {
                    composed.add_intervals(self.playback_lanes[index].visible_intervals(pre));
                    composed.add_intervals(self.playback_lanes[index].visible_intervals(post));
                }
                RecordingMode::Add | RecordingMode::Disabled => {
                    composed.add_intervals(self.playback_lanes[index].visible_intervals(viewport));
                }
            }
            data.push(composed.all_intervals().to_vec());
        }
        data
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}
