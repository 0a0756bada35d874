//! Pixel Keys Engine Library
//!
//! Keyboard input for lightweight 2D games: held-key queries and
//! per-key callbacks, driven by platform key events.
//!
//! # Modules
//!
//! - [`input`] - Key map, pressed-key tracking, callback registries and winit glue
//!
//! # Example
//!
//! ```ignore
//! use pixel_keys_engine::{KeyboardInput, OnKeyOptions};
//!
//! let mut keys = KeyboardInput::new();
//! keys.init_keys();
//!
//! keys.on_key(["enter", "space"], |_evt| fire_gun(), OnKeyOptions::default());
//!
//! fn update(keys: &KeyboardInput) {
//!     if keys.key_pressed("arrowleft") {
//!         // move left
//!     }
//! }
//! ```

pub mod input;

// Re-export commonly used input types
pub use input::{
    InputEvent, KeyEvent, KeyHandler, KeyMap, KeyboardInput, OffKeyOptions, OnKeyOptions,
};
