//! Practice-mode input recording for a rhythm game chart editor.
//!
//! Captures per-lane button presses from a controller (keyboard
//! emulation or a raw USB HID device) while the user plays along to a
//! chart, stores them as half-open tick intervals, and merges them
//! into persistent per-lane timelines under selectable recording
//! policies. Recorded data is an editor-side overlay for the renderer;
//! it never enters the chart file itself.

pub mod config;
pub mod input;
pub mod model;
pub mod recorder;
pub mod util;
