//! Input Handler
//!
//! The keyboard tracker context: translates raw key events into canonical
//! key names, keeps the pressed-key state and runs bound callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, trace, warn};

use super::bindings::{
    Binding, CallbackRegistry, IntoKeys, KeyCallback, KeyHandler, OffKeyOptions, OnKeyOptions,
};
use super::config::KeyboardConfig;
use super::event::{InputEvent, KeyEvent};
use super::key_map::KeyMap;
use super::keyboard::PressedKeys;
use super::source::InputSource;

/// Keyboard input tracker.
///
/// Owned by the caller; independent instances share nothing.
///
/// ```rust,ignore
/// let mut keys = KeyboardInput::new();
/// keys.init_keys();
///
/// keys.on_key("p", |_evt| toggle_pause(), OnKeyOptions::default());
/// keys.on_key(["enter", "space"], |_evt| fire(), OnKeyOptions::default());
///
/// // in update()
/// if keys.key_pressed("arrowleft") {
///     // move left
/// }
/// ```
#[derive(Debug, Default)]
pub struct KeyboardInput {
    key_map: KeyMap,
    pressed: PressedKeys,
    keydown_callbacks: CallbackRegistry,
    keyup_callbacks: CallbackRegistry,
    listening: bool,
}

impl KeyboardInput {
    /// Create a tracker that knows the named keys and is not yet listening.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker with a caller-supplied key map.
    pub fn with_key_map(key_map: KeyMap) -> Self {
        Self {
            key_map,
            ..Self::default()
        }
    }

    /// Add letter and digit keys to the key map and start listening for
    /// key-down, key-up and focus-loss events.
    ///
    /// Must be called before events have any effect. Calling it again only
    /// logs a warning; listeners are never attached twice.
    pub fn init_keys(&mut self) {
        if self.listening {
            warn!("init_keys called more than once; keyboard listeners already attached");
            return;
        }

        self.key_map.extend_alphanumeric();
        self.listening = true;
        debug!("Keyboard listeners attached ({} key codes mapped)", self.key_map.len());
    }

    pub fn is_initialized(&self) -> bool {
        self.listening
    }

    /// Insert every extra key-map entry from `config`.
    pub fn apply_config(&mut self, config: &KeyboardConfig) {
        for (code, name) in &config.key_map {
            if let Some(previous) = self.key_map.insert(code.as_str(), name.as_str()) {
                debug!("Key code {code} remapped from '{previous}' to '{name}'");
            }
        }
    }

    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    /// Mutable key map, e.g. `keys.key_map_mut().insert("ControlRight", "ctrl")`.
    pub fn key_map_mut(&mut self) -> &mut KeyMap {
        &mut self.key_map
    }

    // Dispatch

    /// Deliver one event from the input source.
    ///
    /// The event is taken by mutable reference so the caller can inspect
    /// [`InputEvent::default_prevented`] afterwards.
    pub fn handle_event(&mut self, event: &mut InputEvent) {
        if !self.listening {
            trace!("Ignoring {:?}: keyboard not initialized", event.kind());
            return;
        }

        match event {
            InputEvent::KeyDown(evt) => self.key_down(evt),
            InputEvent::KeyUp(evt) => self.key_up(evt),
            InputEvent::Blur => self.blur(),
        }
    }

    /// Drain `source`, handling events in the order it yields them.
    ///
    /// Returns the number of events processed.
    pub fn pump<S: InputSource + ?Sized>(&mut self, source: &mut S) -> usize {
        let mut count = 0;
        while let Some(mut event) = source.poll_event() {
            self.handle_event(&mut event);
            count += 1;
        }
        count
    }

    fn key_down(&mut self, evt: &mut KeyEvent) {
        self.transition(evt, KeyHandler::KeyDown);
    }

    fn key_up(&mut self, evt: &mut KeyEvent) {
        self.transition(evt, KeyHandler::KeyUp);
    }

    fn transition(&mut self, evt: &mut KeyEvent, handler: KeyHandler) {
        let Some(key) = self.key_map.get(&evt.code) else {
            trace!("Unmapped key code {}", evt.code);
            return;
        };
        let key = key.to_string();

        self.pressed.set(&key, handler == KeyHandler::KeyDown);

        // Cloned so the callback runs without borrowing the registry.
        let binding = self.registry(handler).get(&key).cloned();
        if let Some(binding) = binding {
            trace!("Dispatching {handler:?} callback for '{key}'");
            binding.call(evt);
        }
    }

    /// Focus lost: release every key so nothing stays stuck.
    fn blur(&mut self) {
        trace!("Focus lost, releasing all keys");
        self.pressed.clear();
    }

    // Registration

    /// Bind `callback` to each of `keys`, replacing existing bindings in
    /// the chosen registry.
    pub fn on_key<K, F>(&mut self, keys: K, callback: F, options: OnKeyOptions)
    where
        K: IntoKeys,
        F: FnMut(&mut KeyEvent) + 'static,
    {
        let callback: KeyCallback = Rc::new(RefCell::new(callback));
        self.on_key_shared(keys, callback, options);
    }

    /// Like [`on_key`](Self::on_key), for a callback handle the caller keeps.
    pub fn on_key_shared<K: IntoKeys>(
        &mut self,
        keys: K,
        callback: KeyCallback,
        options: OnKeyOptions,
    ) {
        let registry = self.registry_mut(options.handler);
        for key in keys.into_keys() {
            debug!("Binding {:?} callback to '{key}'", options.handler);
            let binding = Binding::new(Rc::clone(&callback), options.prevent_default);
            registry.bind(key, binding);
        }
    }

    /// Remove the bindings for each of `keys` from the chosen registry.
    pub fn off_key<K: IntoKeys>(&mut self, keys: K, options: OffKeyOptions) {
        let registry = self.registry_mut(options.handler);
        for key in keys.into_keys() {
            if registry.unbind(&key).is_some() {
                debug!("Unbound {:?} callback from '{key}'", options.handler);
            }
        }
    }

    pub fn has_binding(&self, key: &str, handler: KeyHandler) -> bool {
        self.registry(handler).contains(key)
    }

    // Query methods

    /// Check if a key is currently pressed. Unknown keys are never pressed.
    pub fn key_pressed(&self, key: &str) -> bool {
        self.pressed.is_pressed(key)
    }

    /// Canonical names of all keys currently held.
    pub fn pressed_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.pressed.iter_pressed()
    }

    fn registry(&self, handler: KeyHandler) -> &CallbackRegistry {
        match handler {
            KeyHandler::KeyDown => &self.keydown_callbacks,
            KeyHandler::KeyUp => &self.keyup_callbacks,
        }
    }

    fn registry_mut(&mut self, handler: KeyHandler) -> &mut CallbackRegistry {
        match handler {
            KeyHandler::KeyDown => &mut self.keydown_callbacks,
            KeyHandler::KeyUp => &mut self.keyup_callbacks,
        }
    }
}
