//! Keyboard Tests - End-to-End Tracking and Callbacks
//!
//! Drives `KeyboardInput` through a `QueuedSource` the way a game loop would.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pixel_keys_engine::input::{
    InputEvent, KeyEvent, KeyHandler, KeyboardConfig, KeyboardInput, OffKeyOptions, OnKeyOptions,
    QueuedSource,
};

fn initialized() -> KeyboardInput {
    let mut keys = KeyboardInput::new();
    keys.init_keys();
    keys
}

fn run(keys: &mut KeyboardInput, events: Vec<InputEvent>) {
    let mut source: QueuedSource = events.into_iter().collect();
    keys.pump(&mut source);
}

// ============================================================================
// Pressed State Tests
// ============================================================================

#[test]
fn test_every_mapped_key_starts_released() {
    let keys = initialized();
    for (_, name) in keys.key_map().iter() {
        assert!(!keys.key_pressed(name), "{name} should start released");
    }
}

#[test]
fn test_press_release_cycle() {
    let mut keys = initialized();

    run(&mut keys, vec![InputEvent::key_down("KeyA")]);
    assert!(keys.key_pressed("a"));

    run(&mut keys, vec![InputEvent::key_up("KeyA")]);
    assert!(!keys.key_pressed("a"));
}

#[test]
fn test_held_key_survives_other_events() {
    let mut keys = initialized();
    run(
        &mut keys,
        vec![
            InputEvent::key_down("ArrowUp"),
            InputEvent::key_down("KeyQ"),
            InputEvent::key_up("KeyQ"),
            InputEvent::key_down("F5"),
        ],
    );

    assert!(keys.key_pressed("arrowup"));
    assert!(!keys.key_pressed("q"));
    assert_eq!(keys.pressed_keys().collect::<Vec<_>>(), vec!["arrowup"]);
}

#[test]
fn test_focus_loss_releases_everything() {
    let mut keys = initialized();
    run(
        &mut keys,
        vec![
            InputEvent::key_down("KeyW"),
            InputEvent::key_down("Digit3"),
            InputEvent::key_down("Escape"),
            InputEvent::Blur,
        ],
    );

    assert!(!keys.key_pressed("w"));
    assert!(!keys.key_pressed("3"));
    assert!(!keys.key_pressed("esc"));

    // A release arriving after focus returns changes nothing.
    run(&mut keys, vec![InputEvent::key_up("KeyW")]);
    assert!(!keys.key_pressed("w"));
}

#[test]
fn test_main_row_and_numpad_digits() {
    let mut keys = initialized();
    run(&mut keys, vec![InputEvent::key_down("Numpad7")]);
    assert!(keys.key_pressed("7"));

    run(&mut keys, vec![InputEvent::key_up("Digit7")]);
    assert!(!keys.key_pressed("7"));
}

// ============================================================================
// Callback Tests
// ============================================================================

#[test]
fn test_default_binding_fires_once_and_prevents_default() {
    let mut keys = initialized();
    let calls = Rc::new(Cell::new(0));
    let inner = Rc::clone(&calls);
    keys.on_key(
        "space",
        move |_: &mut KeyEvent| inner.set(inner.get() + 1),
        OnKeyOptions::default(),
    );

    let mut event = InputEvent::key_down("Space");
    keys.handle_event(&mut event);

    assert_eq!(calls.get(), 1);
    assert!(event.default_prevented());
}

#[test]
fn test_binding_without_prevent_default() {
    let mut keys = initialized();
    keys.on_key(
        "enter",
        |_: &mut KeyEvent| {},
        OnKeyOptions::default().with_prevent_default(false),
    );

    let mut event = InputEvent::key_down("Enter");
    keys.handle_event(&mut event);
    assert!(!event.default_prevented());
}

#[test]
fn test_keydown_and_keyup_registries_are_separate() {
    let mut keys = initialized();
    let log = Rc::new(RefCell::new(Vec::new()));

    let downs = Rc::clone(&log);
    keys.on_key(
        "x",
        move |_: &mut KeyEvent| downs.borrow_mut().push("down"),
        OnKeyOptions::default(),
    );
    let ups = Rc::clone(&log);
    keys.on_key("x", move |_: &mut KeyEvent| ups.borrow_mut().push("up"), OnKeyOptions::key_up());

    run(
        &mut keys,
        vec![
            InputEvent::key_down("KeyX"),
            InputEvent::key_down("KeyX"),
            InputEvent::key_up("KeyX"),
        ],
    );
    assert_eq!(*log.borrow(), vec!["down", "down", "up"]);

    keys.off_key("x", OffKeyOptions::default());
    assert!(!keys.has_binding("x", KeyHandler::KeyDown));
    assert!(keys.has_binding("x", KeyHandler::KeyUp));
}

#[test]
fn test_last_registration_wins() {
    let mut keys = initialized();
    let winner = Rc::new(Cell::new(""));

    let first = Rc::clone(&winner);
    keys.on_key(["a", "b"], move |_: &mut KeyEvent| first.set("first"), OnKeyOptions::default());
    let second = Rc::clone(&winner);
    keys.on_key("b", move |_: &mut KeyEvent| second.set("second"), OnKeyOptions::default());

    run(&mut keys, vec![InputEvent::key_down("KeyB")]);
    assert_eq!(winner.get(), "second");

    run(&mut keys, vec![InputEvent::key_down("KeyA")]);
    assert_eq!(winner.get(), "first");
}

#[test]
fn test_unregistered_key_fires_nothing() {
    let mut keys = initialized();
    let calls = Rc::new(Cell::new(0));
    let inner = Rc::clone(&calls);
    keys.on_key(
        ["a", "b"],
        move |_: &mut KeyEvent| inner.set(inner.get() + 1),
        OnKeyOptions::key_up(),
    );
    keys.off_key(["a", "b"], OffKeyOptions::key_up());

    run(
        &mut keys,
        vec![
            InputEvent::key_down("KeyA"),
            InputEvent::key_up("KeyA"),
            InputEvent::key_down("KeyB"),
            InputEvent::key_up("KeyB"),
        ],
    );
    assert_eq!(calls.get(), 0);
}

// ============================================================================
// Key Map Extension Tests
// ============================================================================

#[test]
fn test_config_extends_recognized_keys() {
    let config =
        KeyboardConfig::from_json_str(r#"{ "key_map": { "ControlRight": "ctrl", "Tab": "tab" } }"#)
            .unwrap();
    let mut keys = initialized();
    keys.apply_config(&config);

    let calls = Rc::new(Cell::new(0));
    let inner = Rc::clone(&calls);
    keys.on_key(
        "ctrl",
        move |_: &mut KeyEvent| inner.set(inner.get() + 1),
        OnKeyOptions::default(),
    );

    run(&mut keys, vec![InputEvent::key_down("ControlRight"), InputEvent::key_down("Tab")]);
    assert_eq!(calls.get(), 1);
    assert!(keys.key_pressed("ctrl"));
    assert!(keys.key_pressed("tab"));
}
