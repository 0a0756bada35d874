//! winit Integration
//!
//! Converts winit window events into [`InputEvent`]s. winit names its
//! physical key codes after the W3C `KeyboardEvent.code` values, so the
//! variant name is used as the raw code directly (`KeyCode::KeyA` -> `"KeyA"`).

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::event::{InputEvent, KeyEvent};

/// Raw code string for a physical key, `None` for keys winit could not identify.
pub fn raw_key_code(key: PhysicalKey) -> Option<String> {
    match key {
        PhysicalKey::Code(code) => Some(format!("{code:?}")),
        PhysicalKey::Unidentified(_) => None,
    }
}

/// Build a key-down/key-up event from winit key data.
pub fn translate_key(key: PhysicalKey, state: ElementState, repeat: bool) -> Option<InputEvent> {
    let evt = KeyEvent::new(raw_key_code(key)?).with_repeat(repeat);
    Some(match state {
        ElementState::Pressed => InputEvent::KeyDown(evt),
        ElementState::Released => InputEvent::KeyUp(evt),
    })
}

/// Translate a window event the keyboard tracker cares about.
///
/// Keyboard input becomes key-down/key-up, `Focused(false)` becomes
/// [`InputEvent::Blur`]. Everything else yields `None`.
pub fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            translate_key(event.physical_key, event.state, event.repeat)
        }
        WindowEvent::Focused(false) => Some(InputEvent::Blur),
        _ => None,
    }
}
