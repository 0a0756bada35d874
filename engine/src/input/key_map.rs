//! Key Map
//!
//! Maps raw platform key codes (W3C `KeyboardEvent.code` names such as
//! `"KeyA"` or `"Numpad5"`) to the canonical key names game code uses
//! (`"a"`, `"5"`). The table is plain data so callers can extend it at
//! runtime, e.g. `key_map.insert("ControlRight", "ctrl")`.

use std::collections::HashMap;

/// Raw codes recognized before initialization.
pub const NAMED_KEYS: [(&str, &str); 7] = [
    ("Enter", "enter"),
    ("Escape", "esc"),
    ("Space", "space"),
    ("ArrowLeft", "arrowleft"),
    ("ArrowUp", "arrowup"),
    ("ArrowRight", "arrowright"),
    ("ArrowDown", "arrowdown"),
];

/// Mutable mapping from raw key code to canonical key name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    codes: HashMap<String, String>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyMap {
    /// Create a key map holding only the named keys
    /// (enter, esc, space and the four arrows).
    pub fn new() -> Self {
        let mut map = Self::empty();
        for (code, name) in NAMED_KEYS {
            map.insert(code, name);
        }
        map
    }

    /// Create a key map with no entries at all.
    pub fn empty() -> Self {
        Self {
            codes: HashMap::new(),
        }
    }

    /// Add `KeyA`..`KeyZ` -> `a`..`z`, and `Digit0`..`Digit9` plus
    /// `Numpad0`..`Numpad9` -> `0`..`9`.
    ///
    /// Existing entries for these codes are overwritten; everything else is left alone.
    pub fn extend_alphanumeric(&mut self) {
        for letter in b'a'..=b'z' {
            let name = char::from(letter);
            let code = format!("Key{}", name.to_ascii_uppercase());
            self.insert(code, name.to_string());
        }

        for digit in 0..10 {
            let name = digit.to_string();
            self.insert(format!("Digit{digit}"), name.clone());
            self.insert(format!("Numpad{digit}"), name);
        }
    }

    /// Map `code` to `name`, returning the name it replaced.
    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) -> Option<String> {
        self.codes.insert(code.into(), name.into())
    }

    /// Remove the mapping for `code`.
    pub fn remove(&mut self, code: &str) -> Option<String> {
        self.codes.remove(code)
    }

    /// Canonical name for a raw code, if the code is recognized.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.codes.get(code).map(String::as_str)
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.codes.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// All `(code, name)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.codes.iter().map(|(c, n)| (c.as_str(), n.as_str()))
    }

    /// Every raw code that maps to `name` (e.g. `"5"` -> `Digit5`, `Numpad5`).
    pub fn codes_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.codes
            .iter()
            .filter(move |(_, n)| n.as_str() == name)
            .map(|(c, _)| c.as_str())
    }
}

impl<C: Into<String>, N: Into<String>> Extend<(C, N)> for KeyMap {
    fn extend<T: IntoIterator<Item = (C, N)>>(&mut self, iter: T) {
        for (code, name) in iter {
            self.insert(code, name);
        }
    }
}
