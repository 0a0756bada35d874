//! Movement Axes
//!
//! Direction vectors from held keys, for moving a sprite from `update()`.
//! Screen space: +x is right, +y is down.

use glam::Vec2;

use super::handler::KeyboardInput;

/// Normalized direction from four canonical key names.
///
/// Opposite keys held together cancel out. Returns `Vec2::ZERO` when
/// nothing relevant is held.
pub fn axis(keys: &KeyboardInput, left: &str, right: &str, up: &str, down: &str) -> Vec2 {
    let mut dir = Vec2::ZERO;

    if keys.key_pressed(left) { dir.x -= 1.0; }
    if keys.key_pressed(right) { dir.x += 1.0; }
    if keys.key_pressed(up) { dir.y -= 1.0; }
    if keys.key_pressed(down) { dir.y += 1.0; }

    dir.normalize_or_zero()
}

/// Direction from the arrow keys.
pub fn arrow_axis(keys: &KeyboardInput) -> Vec2 {
    axis(keys, "arrowleft", "arrowright", "arrowup", "arrowdown")
}

/// Direction from W/A/S/D.
pub fn wasd_axis(keys: &KeyboardInput) -> Vec2 {
    axis(keys, "a", "d", "w", "s")
}
