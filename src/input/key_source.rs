use macroquad::prelude::{KeyCode, is_key_down};

/// Source of live key hold-state.
///
/// Implementations: [`MacroquadKeySource`] (the running window),
/// scripted key sets in tests.
pub trait KeySource {
    /// Whether `key` is currently held down.
    fn is_down(&self, key: KeyCode) -> bool;
}

/// Polls the macroquad window's keyboard state.
#[derive(Debug, Default)]
pub struct MacroquadKeySource;

impl KeySource for MacroquadKeySource {
    fn is_down(&self, key: KeyCode) -> bool {
        is_key_down(key)
    }
}
