//! Controller input backends for the recorder.
//!
//! This module provides:
//! - [`RecorderInput`]: the capability every backend implements
//! - [`KeyboardBackend`]: polls a fixed 38-key layout
//! - [`HidBackend`]: decodes USB HID reports on a reader thread
//! - [`ScriptedInput`]: deterministic input for tests and demos

mod hid;
mod key_source;
mod keyboard;
mod layout;
mod report;
mod scripted;

pub use hid::HidBackend;
pub use key_source::{KeySource, MacroquadKeySource};
pub use keyboard::KeyboardBackend;
pub use layout::KeyLayout;
pub use report::{DeviceProfile, PRESSURE_THRESHOLD, ReportDecoder};
pub use scripted::{ScriptedHandle, ScriptedInput};

use macroquad::prelude::KeyCode;
use serde::{Deserialize, Serialize};

use crate::model::ChannelFrame;

/// Capability implemented by every input backend.
///
/// `sample` is a non-blocking snapshot of all 38 channels in lane
/// order; it never waits for hardware. `stop` must be safe on a
/// backend that never successfully started.
pub trait RecorderInput {
    /// Acquire the underlying device, if any.
    fn start(&mut self);

    /// Release the underlying device. Idempotent.
    fn stop(&mut self);

    /// Snapshot the current hold state of every channel.
    fn sample(&self) -> ChannelFrame;

    /// Whether the host UI should suppress its own handling of `key`
    /// because this backend reads it as game input.
    fn should_intercept_key(&self, _key: KeyCode) -> bool {
        false
    }
}

/// Selectable input backend variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    KeyboardYuancon,
    KeyboardTasoller,
    KeyboardOpenithm,
    HidYuancon,
    HidTasollerTwo,
    HidTasollerIsno,
}

impl InputMode {
    /// Build the standard backend for this mode.
    pub fn create_backend(self) -> Box<dyn RecorderInput> {
        match self {
            InputMode::KeyboardYuancon => Box::new(KeyboardBackend::new(KeyLayout::yuancon())),
            InputMode::KeyboardTasoller => Box::new(KeyboardBackend::new(KeyLayout::tasoller())),
            InputMode::KeyboardOpenithm => Box::new(KeyboardBackend::new(KeyLayout::openithm())),
            InputMode::HidYuancon => Box::new(HidBackend::new(DeviceProfile::yuancon())),
            InputMode::HidTasollerTwo => Box::new(HidBackend::new(DeviceProfile::tasoller_two())),
            InputMode::HidTasollerIsno => Box::new(HidBackend::new(DeviceProfile::tasoller_isno())),
        }
    }
}
