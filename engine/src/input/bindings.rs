//! Key Bindings Module
//!
//! Callback registries for key-down and key-up transitions, keyed by
//! canonical key name. One callback per key and registry: binding a key
//! again replaces whatever was bound before.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::event::KeyEvent;

/// Shared callback handle. The same callback can be bound to several keys.
pub type KeyCallback = Rc<RefCell<dyn FnMut(&mut KeyEvent)>>;

/// Which transition a callback is registered for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeyHandler {
    #[default]
    KeyDown,
    KeyUp,
}

/// Options for [`KeyboardInput::on_key`](super::KeyboardInput::on_key).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnKeyOptions {
    /// Registry to bind into (default: key-down)
    pub handler: KeyHandler,
    /// Suppress the platform's default handling before the callback runs (default: true)
    pub prevent_default: bool,
}

impl Default for OnKeyOptions {
    fn default() -> Self {
        Self {
            handler: KeyHandler::KeyDown,
            prevent_default: true,
        }
    }
}

impl OnKeyOptions {
    /// Default options, bound to key-up instead of key-down.
    pub fn key_up() -> Self {
        Self {
            handler: KeyHandler::KeyUp,
            ..Self::default()
        }
    }

    pub fn with_prevent_default(mut self, prevent_default: bool) -> Self {
        self.prevent_default = prevent_default;
        self
    }
}

/// Options for [`KeyboardInput::off_key`](super::KeyboardInput::off_key).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffKeyOptions {
    /// Registry to remove from (default: key-down)
    pub handler: KeyHandler,
}

impl OffKeyOptions {
    pub fn key_up() -> Self {
        Self {
            handler: KeyHandler::KeyUp,
        }
    }
}

/// A stored callback plus its suppress-default preference.
#[derive(Clone)]
pub struct Binding {
    callback: KeyCallback,
    prevent_default: bool,
}

impl Binding {
    pub fn new(callback: KeyCallback, prevent_default: bool) -> Self {
        Self {
            callback,
            prevent_default,
        }
    }

    /// Run the callback, marking the event default-prevented first if requested.
    pub fn call(&self, evt: &mut KeyEvent) {
        if self.prevent_default {
            evt.prevent_default();
        }
        let mut callback = self.callback.borrow_mut();
        (&mut *callback)(evt);
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("prevent_default", &self.prevent_default)
            .finish_non_exhaustive()
    }
}

/// Canonical key name -> single callback.
#[derive(Debug, Clone, Default)]
pub struct CallbackRegistry {
    bindings: HashMap<String, Binding>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key`, returning the binding it replaced.
    pub fn bind(&mut self, key: impl Into<String>, binding: Binding) -> Option<Binding> {
        self.bindings.insert(key.into(), binding)
    }

    /// Remove the binding for `key`. No-op when nothing is bound.
    pub fn unbind(&mut self, key: &str) -> Option<Binding> {
        self.bindings.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Binding> {
        self.bindings.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// One canonical key name or a list of them.
///
/// Lets `on_key("p", ..)` and `on_key(["enter", "space"], ..)` share one signature.
pub trait IntoKeys {
    fn into_keys(self) -> Vec<String>;
}

impl IntoKeys for &str {
    fn into_keys(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoKeys for String {
    fn into_keys(self) -> Vec<String> {
        vec![self]
    }
}

impl<T: AsRef<str>> IntoKeys for &[T] {
    fn into_keys(self) -> Vec<String> {
        self.iter().map(|k| k.as_ref().to_string()).collect()
    }
}

impl<T: AsRef<str>, const N: usize> IntoKeys for [T; N] {
    fn into_keys(self) -> Vec<String> {
        self.iter().map(|k| k.as_ref().to_string()).collect()
    }
}

impl<T: AsRef<str>> IntoKeys for Vec<T> {
    fn into_keys(self) -> Vec<String> {
        self.iter().map(|k| k.as_ref().to_string()).collect()
    }
}
