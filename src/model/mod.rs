//! Interval-based per-lane data model for recorded input.
//!
//! This module provides:
//! - [`Interval`]: immutable half-open tick range with merge/mask algebra
//! - [`Lane`]: ordered coalesced interval set with windowed queries
//! - [`RecordingLane`]: a lane fed live from a boolean sample stream
//! - channel-count constants shared with the input backends

pub mod channel;
pub mod interval;
pub mod lane;
pub mod recording_lane;

pub use channel::{AIR_CHANNELS, CHANNEL_COUNT, ChannelFrame, EMPTY_FRAME, GROUND_CHANNELS};
pub use interval::{Interval, TICK_INF, Tick};
pub use lane::Lane;
pub use recording_lane::RecordingLane;
