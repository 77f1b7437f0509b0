use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::input::InputMode;
use crate::recorder::{Recorder, RecordingMode};

const RECORDER_CONFIG_FILE: &str = "recorder.json";

/// Persisted practice-mode recorder settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecorderConfig {
    pub input_mode: InputMode,
    pub recording_mode: RecordingMode,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            input_mode: InputMode::KeyboardYuancon,
            recording_mode: RecordingMode::Overwrite,
        }
    }
}

impl RecorderConfig {
    /// Load configuration from the default file.
    pub fn load() -> Result<Self> {
        Self::load_from(RECORDER_CONFIG_FILE)
    }

    /// Load configuration from a specific path; a missing file yields
    /// the defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to the default file.
    pub fn save(&self) -> Result<()> {
        self.save_to(RECORDER_CONFIG_FILE)
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply the settings to a recorder.
    pub fn apply(&self, recorder: &mut Recorder) {
        recorder.set_input_mode(self.input_mode);
        recorder.set_recording_mode(self.recording_mode);
    }
}
