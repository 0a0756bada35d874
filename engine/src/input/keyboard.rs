//! Keyboard State Module
//!
//! Tracks which canonical keys are currently held down.
//! Keyed by canonical name, so it never sees raw platform codes.

use std::collections::HashMap;

/// Pressed state per canonical key name.
///
/// Entries are created on the first press of a key. A missing entry reads
/// as "not pressed", so a key that was never touched and a key that was
/// released look the same to callers.
#[derive(Debug, Clone, Default)]
pub struct PressedKeys {
    keys: HashMap<String, bool>,
}

impl PressedKeys {
    /// Create a new state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release of `key`.
    pub fn set(&mut self, key: &str, pressed: bool) {
        match self.keys.get_mut(key) {
            Some(state) => *state = pressed,
            None => {
                self.keys.insert(key.to_string(), pressed);
            }
        }
    }

    /// Check if `key` is currently held.
    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// Names of all keys currently held.
    pub fn iter_pressed(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys
            .iter()
            .filter(|(_, pressed)| **pressed)
            .map(|(key, _)| key.as_str())
    }

    /// Check if any key is currently held.
    pub fn any_pressed(&self) -> bool {
        self.keys.values().any(|pressed| *pressed)
    }

    /// Release every key at once (focus loss).
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
