use macroquad::prelude::KeyCode;

use crate::model::CHANNEL_COUNT;

/// Physical key table for one controller skin: one key per channel,
/// ground channels first, then air.
///
/// Layouts are fixed per skin and injected into the keyboard backend
/// at construction; there is no global table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLayout {
    keys: [KeyCode; CHANNEL_COUNT],
}

impl KeyLayout {
    pub fn new(keys: [KeyCode; CHANNEL_COUNT]) -> Self {
        Self { keys }
    }

    /// Key bound to `channel`.
    pub fn key(&self, channel: usize) -> KeyCode {
        self.keys[channel]
    }

    /// Whether `key` is bound to any channel.
    pub fn contains(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    /// Yuancon keyboard firmware: digit row then the alphabet in
    /// reverse for the slider, punctuation row for the air sensors.
    pub fn yuancon() -> Self {
        Self::new([
            KeyCode::Key6,
            KeyCode::Key5,
            KeyCode::Key4,
            KeyCode::Key3,
            KeyCode::Key2,
            KeyCode::Key1,
            KeyCode::Z,
            KeyCode::Y,
            KeyCode::X,
            KeyCode::W,
            KeyCode::V,
            KeyCode::U,
            KeyCode::T,
            KeyCode::S,
            KeyCode::R,
            KeyCode::Q,
            KeyCode::P,
            KeyCode::O,
            KeyCode::N,
            KeyCode::M,
            KeyCode::L,
            KeyCode::K,
            KeyCode::J,
            KeyCode::I,
            KeyCode::H,
            KeyCode::G,
            KeyCode::F,
            KeyCode::E,
            KeyCode::D,
            KeyCode::C,
            KeyCode::B,
            KeyCode::A,
            KeyCode::Minus,
            KeyCode::Equal,
            KeyCode::LeftBracket,
            KeyCode::RightBracket,
            KeyCode::Backslash,
            KeyCode::Semicolon,
        ])
    }

    /// Tasoller keyboard firmware: columns interleave a letter pair
    /// with a digit per slider cell.
    pub fn tasoller() -> Self {
        Self::new([
            KeyCode::A,
            KeyCode::Key1,
            KeyCode::Z,
            KeyCode::Q,
            KeyCode::S,
            KeyCode::Key2,
            KeyCode::X,
            KeyCode::W,
            KeyCode::D,
            KeyCode::Key3,
            KeyCode::C,
            KeyCode::E,
            KeyCode::F,
            KeyCode::Key4,
            KeyCode::V,
            KeyCode::R,
            KeyCode::G,
            KeyCode::Key5,
            KeyCode::B,
            KeyCode::T,
            KeyCode::H,
            KeyCode::Key6,
            KeyCode::N,
            KeyCode::Y,
            KeyCode::J,
            KeyCode::Key7,
            KeyCode::M,
            KeyCode::U,
            KeyCode::K,
            KeyCode::Key8,
            KeyCode::Comma,
            KeyCode::I,
            KeyCode::Slash,
            KeyCode::Apostrophe,
            KeyCode::Period,
            KeyCode::Semicolon,
            KeyCode::RightBracket,
            KeyCode::LeftBracket,
        ])
    }

    /// Openithm firmware: same slider grid as the Tasoller, air
    /// sensors wired in a different order.
    pub fn openithm() -> Self {
        Self::new([
            KeyCode::A,
            KeyCode::Key1,
            KeyCode::Z,
            KeyCode::Q,
            KeyCode::S,
            KeyCode::Key2,
            KeyCode::X,
            KeyCode::W,
            KeyCode::D,
            KeyCode::Key3,
            KeyCode::C,
            KeyCode::E,
            KeyCode::F,
            KeyCode::Key4,
            KeyCode::V,
            KeyCode::R,
            KeyCode::G,
            KeyCode::Key5,
            KeyCode::B,
            KeyCode::T,
            KeyCode::H,
            KeyCode::Key6,
            KeyCode::N,
            KeyCode::Y,
            KeyCode::J,
            KeyCode::Key7,
            KeyCode::M,
            KeyCode::U,
            KeyCode::K,
            KeyCode::Key8,
            KeyCode::Comma,
            KeyCode::I,
            KeyCode::Slash,
            KeyCode::Period,
            KeyCode::Apostrophe,
            KeyCode::Semicolon,
            KeyCode::RightBracket,
            KeyCode::LeftBracket,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_all_distinct(layout: &KeyLayout) {
        let distinct: HashSet<_> = (0..CHANNEL_COUNT).map(|ch| layout.key(ch)).collect();
        assert_eq!(distinct.len(), CHANNEL_COUNT);
    }

    #[test]
    fn test_layouts_bind_distinct_keys() {
        assert_all_distinct(&KeyLayout::yuancon());
        assert_all_distinct(&KeyLayout::tasoller());
        assert_all_distinct(&KeyLayout::openithm());
    }

    #[test]
    fn test_contains_reports_membership() {
        let layout = KeyLayout::yuancon();
        assert!(layout.contains(KeyCode::A));
        assert!(layout.contains(KeyCode::Minus));
        assert!(!layout.contains(KeyCode::Space));
    }

    #[test]
    fn test_yuancon_channel_order() {
        let layout = KeyLayout::yuancon();
        assert_eq!(layout.key(0), KeyCode::Key6);
        assert_eq!(layout.key(5), KeyCode::Key1);
        assert_eq!(layout.key(31), KeyCode::A);
        assert_eq!(layout.key(32), KeyCode::Minus);
        assert_eq!(layout.key(37), KeyCode::Semicolon);
    }
}
