//! Key Viewer Demo
//!
//! Run with: `RUST_LOG=debug cargo run --bin key_viewer [config.json]`
//!
//! Opens a window and drives a `KeyboardInput` from winit events. A virtual
//! sprite moves with the arrow keys or WASD; its position is logged.
//!
//! Controls:
//! - Arrows / WASD: Move sprite
//! - P: Pause / resume movement
//! - Enter / Space: Fire
//! - ESC: Exit (unless a callback suppressed it)

use std::cell::Cell;
use std::error::Error;
use std::rc::Rc;
use std::time::{Duration, Instant};

use glam::Vec2;
use log::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use pixel_keys_engine::input::movement::{arrow_axis, wasd_axis};
use pixel_keys_engine::input::{
    InputEvent, KeyEvent, KeyboardConfig, KeyboardInput, OnKeyOptions, translate_window_event,
};

/// Sprite speed in pixels per second
const SPRITE_SPEED: f32 = 240.0;

const FRAME_TIME: Duration = Duration::from_millis(16);

// ============================================================================
// APPLICATION HANDLER
// ============================================================================

struct App {
    window: Option<Window>,
    keys: KeyboardInput,
    paused: Rc<Cell<bool>>,
    sprite: Vec2,
    last_frame: Instant,
}

impl App {
    fn new(config: Option<&KeyboardConfig>) -> Self {
        let mut keys = KeyboardInput::new();
        keys.init_keys();
        if let Some(config) = config {
            keys.apply_config(config);
        }

        let paused = Rc::new(Cell::new(false));
        let pause_flag = Rc::clone(&paused);
        keys.on_key(
            "p",
            move |_: &mut KeyEvent| {
                pause_flag.set(!pause_flag.get());
                info!("Paused: {}", pause_flag.get());
            },
            OnKeyOptions::default(),
        );

        let shots = Rc::new(Cell::new(0u32));
        keys.on_key(
            ["enter", "space"],
            move |evt: &mut KeyEvent| {
                if !evt.repeat {
                    shots.set(shots.get() + 1);
                    info!("Fire! ({} shots, via {})", shots.get(), evt.code);
                }
            },
            OnKeyOptions::default().with_prevent_default(false),
        );

        keys.on_key(
            "space",
            |_: &mut KeyEvent| debug!("Space released"),
            OnKeyOptions::key_up(),
        );

        Self {
            window: None,
            keys,
            paused,
            sprite: Vec2::new(320.0, 240.0),
            last_frame: Instant::now(),
        }
    }

    /// Host behavior that runs unless a callback suppressed it.
    fn default_action(&self, event: &InputEvent, event_loop: &ActiveEventLoop) {
        if let InputEvent::KeyDown(evt) = event {
            if evt.code == "Escape" && !evt.default_prevented() {
                info!("Escape pressed, exiting");
                event_loop.exit();
            }
        }
    }

    fn update(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        if self.paused.get() {
            return;
        }

        let mut dir = arrow_axis(&self.keys) + wasd_axis(&self.keys);
        dir = dir.normalize_or_zero();
        if dir != Vec2::ZERO {
            self.sprite += dir * SPRITE_SPEED * dt;
            debug!(
                "Sprite at ({:.1}, {:.1}), held: {:?}",
                self.sprite.x,
                self.sprite.y,
                self.keys.pressed_keys().collect::<Vec<_>>()
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = WindowAttributes::default()
            .with_title("Key Viewer - arrows/WASD to move, P to pause, ESC to exit")
            .with_inner_size(PhysicalSize::new(640, 480));

        match event_loop.create_window(window_attrs) {
            Ok(window) => {
                info!("Window created");
                self.window = Some(window);
            }
            Err(err) => {
                error!("Failed to create window: {err}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::CloseRequested = event {
            event_loop.exit();
            return;
        }

        if let Some(mut input) = translate_window_event(&event) {
            self.keys.handle_event(&mut input);
            self.default_action(&input, event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.update();
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + FRAME_TIME));
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== Key Viewer ===");
    println!("  Arrows/WASD - Move sprite");
    println!("  P - Pause");
    println!("  Enter/Space - Fire");
    println!("  ESC - Exit");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let config = KeyboardConfig::load(&path)?;
            info!("Loaded {} extra key mappings from {path}", config.key_map.len());
            Some(config)
        }
        None => None,
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config.as_ref());
    event_loop.run_app(&mut app)?;
    Ok(())
}
