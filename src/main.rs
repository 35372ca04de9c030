//! Desktop simulator for the profile circle intro screen.
//!
//! Opens a 360×640 window and runs the frame loop at ~60 FPS.
//!
//! # Controls
//!
//! | Input              | Action                     |
//! |--------------------|----------------------------|
//! | Click on button    | Press "Connect"            |
//! | `Enter` / `Space`  | Press "Connect"            |
//! | Close window       | Quit                       |
//!
//! Log verbosity follows `RUST_LOG`; without it, this crate logs at `debug`
//! and everything else at `warn`.

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use env_logger::{Builder, Target};
use log::{LevelFilter, debug, info};
use profile_circle::assets::{bundled_profile_paths, load_profile_images};
use profile_circle::colors::BLACK;
use profile_circle::config::{FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use profile_circle::render::RenderState;
use profile_circle::screens::Screen;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("profile_circle", LevelFilter::Debug)
        .init();
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let images = load_profile_images(&bundled_profile_paths());
    info!("Loaded {} profile images", images.len());
    let mut screen = Screen::new(images);

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("Profile Circle", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut render_state = RenderState::new();
    let start = Instant::now();
    let mut last_frame = start;

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    point,
                } => {
                    if !screen.click(point) {
                        debug!("Click at ({}, {}) missed the button", point.x, point.y);
                    }
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat so holding a key presses once
                    if repeat {
                        continue;
                    }
                    if matches!(keycode, Keycode::RETURN | Keycode::SPACE) && !screen.activate() {
                        debug!("Nothing to activate yet");
                    }
                }
                _ => {}
            }
        }

        let elapsed_ms = frame_start.duration_since(start).as_millis() as u64;
        let dt = frame_start.duration_since(last_frame).as_secs_f32();
        last_frame = frame_start;

        let changed = screen.update(elapsed_ms, dt);

        if render_state.needs_redraw(changed) {
            screen.draw(&mut display);
        }
        render_state.end_frame();

        window.update(&display);

        // Frame rate limiting
        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
