use std::sync::{Arc, Mutex};

use super::RecorderInput;
use crate::model::{ChannelFrame, EMPTY_FRAME};

/// Backend fed programmatically; the backend and its handle share one
/// frame slot.
///
/// Deterministic stand-in for hardware in tests and demos.
pub struct ScriptedInput {
    frame: Arc<Mutex<ChannelFrame>>,
}

/// Writer side of a [`ScriptedInput`].
#[derive(Clone)]
pub struct ScriptedHandle {
    frame: Arc<Mutex<ChannelFrame>>,
}

impl ScriptedInput {
    /// Create a backend plus the handle that drives it.
    pub fn new() -> (Self, ScriptedHandle) {
        let frame = Arc::new(Mutex::new(EMPTY_FRAME));
        (
            Self {
                frame: frame.clone(),
            },
            ScriptedHandle { frame },
        )
    }
}

impl RecorderInput for ScriptedInput {
    fn start(&mut self) {}

    fn stop(&mut self) {}

    fn sample(&self) -> ChannelFrame {
        *self.frame.lock().unwrap()
    }
}

impl ScriptedHandle {
    /// Press or release a single channel.
    pub fn set_channel(&self, channel: usize, active: bool) {
        self.frame.lock().unwrap()[channel] = active;
    }

    /// Replace the whole frame.
    pub fn set_frame(&self, frame: ChannelFrame) {
        *self.frame.lock().unwrap() = frame;
    }

    /// Release every channel.
    pub fn release_all(&self) {
        *self.frame.lock().unwrap() = EMPTY_FRAME;
    }
}
