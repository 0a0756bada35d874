//! Input Module
//!
//! Keyboard input tracking: which keys are held right now, plus callbacks
//! for key-down and key-up transitions. Platform events come in as raw key
//! codes and are translated to canonical key names through a mutable
//! [`KeyMap`].
//!
//! # Example
//!
//! ```rust,ignore
//! use pixel_keys_engine::input::{KeyboardInput, OnKeyOptions, InputEvent};
//!
//! let mut keys = KeyboardInput::new();
//! keys.init_keys();
//!
//! keys.on_key("p", |_evt| { /* pause */ }, OnKeyOptions::default());
//!
//! keys.handle_event(&mut InputEvent::key_down("KeyP"));
//! assert!(keys.key_pressed("p"));
//! ```

pub mod bindings;
pub mod config;
pub mod event;
pub mod handler;
pub mod key_map;
pub mod keyboard;
pub mod movement;
pub mod source;
pub mod winit_source;

// Re-export commonly used types at module level
pub use bindings::{IntoKeys, KeyCallback, KeyHandler, OffKeyOptions, OnKeyOptions};
pub use config::{ConfigError, KeyboardConfig};
pub use event::{EventKind, InputEvent, KeyEvent};
pub use handler::KeyboardInput;
pub use key_map::KeyMap;
pub use keyboard::PressedKeys;
pub use source::{InputSource, QueuedSource};
pub use winit_source::translate_window_event;
