use macroquad::prelude::KeyCode;

use super::RecorderInput;
use super::key_source::{KeySource, MacroquadKeySource};
use super::layout::KeyLayout;
use crate::model::{ChannelFrame, EMPTY_FRAME};

/// Keyboard-polling backend.
///
/// Samples the live hold state of the 38 keys in its layout. Holds no
/// state between samples and cannot fail, so `start`/`stop` have
/// nothing to do.
pub struct KeyboardBackend {
    layout: KeyLayout,
    source: Box<dyn KeySource>,
}

impl KeyboardBackend {
    /// Backend polling the running window.
    pub fn new(layout: KeyLayout) -> Self {
        Self::with_source(layout, Box::new(MacroquadKeySource))
    }

    /// Backend polling a caller-supplied key source.
    pub fn with_source(layout: KeyLayout, source: Box<dyn KeySource>) -> Self {
        Self { layout, source }
    }
}

impl RecorderInput for KeyboardBackend {
    fn start(&mut self) {}

    fn stop(&mut self) {}

    fn sample(&self) -> ChannelFrame {
        let mut frame = EMPTY_FRAME;
        for (channel, state) in frame.iter_mut().enumerate() {
            *state = self.source.is_down(self.layout.key(channel));
        }
        frame
    }

    fn should_intercept_key(&self, key: KeyCode) -> bool {
        self.layout.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct FixedKeys(HashSet<KeyCode>);

    impl KeySource for FixedKeys {
        fn is_down(&self, key: KeyCode) -> bool {
            self.0.contains(&key)
        }
    }

    fn backend_with_keys(layout: KeyLayout, keys: &[KeyCode]) -> KeyboardBackend {
        KeyboardBackend::with_source(layout, Box::new(FixedKeys(keys.iter().copied().collect())))
    }

    #[test]
    fn test_sample_maps_keys_to_channels() {
        let backend = backend_with_keys(KeyLayout::yuancon(), &[KeyCode::Key1, KeyCode::Minus]);
        let frame = backend.sample();
        assert!(frame[5]); // Key1 is the sixth slider cell
        assert!(frame[32]); // Minus is the first air sensor
        assert_eq!(frame.iter().filter(|&&held| held).count(), 2);
    }

    #[test]
    fn test_sample_with_nothing_held() {
        let backend = backend_with_keys(KeyLayout::tasoller(), &[]);
        assert_eq!(backend.sample(), EMPTY_FRAME);
    }

    #[test]
    fn test_intercepts_only_layout_keys() {
        let backend = backend_with_keys(KeyLayout::openithm(), &[]);
        assert!(backend.should_intercept_key(KeyCode::A));
        assert!(backend.should_intercept_key(KeyCode::Slash));
        assert!(!backend.should_intercept_key(KeyCode::Enter));
    }
}
