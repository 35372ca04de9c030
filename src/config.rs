//! Application configuration constants.
//!
//! Everything the screen needs to know about geometry and timing is fixed at
//! compile time. Positions that depend on other constants (canvas origin, text
//! slots, button bounds) are pre-computed here as `const` so the render loop
//! only does per-image trigonometry.
//!
//! # Screen Layout
//!
//! ```text
//! ┌──────────────────────────────┐
//! │                              │  top margin
//! │   ┌──────────────────────┐   │
//! │   │   profile canvas     │   │  320 x 320
//! │   │   (ring radius 110)  │   │
//! │   └──────────────────────┘   │
//! │                              │  48
//! │      main text (2 lines)     │  48
//! │                              │  24
//! │        [  Connect  ]         │  52
//! │                              │  24
//! │    secondary text (2 lines)  │  36
//! │                              │  bottom margin
//! └──────────────────────────────┘
//! ```

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Window width in pixels (portrait phone-like aspect).
pub const SCREEN_WIDTH: u32 = 360;

/// Window height in pixels.
pub const SCREEN_HEIGHT: u32 = 640;

/// Horizontal padding of the content column.
pub const COLUMN_PADDING: u32 = 24;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Canvas Geometry
// =============================================================================

/// Side length of the square profile canvas.
pub const CANVAS_SIZE: u32 = 320;

/// Center of the ring in canvas coordinates.
pub const CANVAS_CENTER: f32 = 160.0;

/// Radius of the ring the profile images sit on.
pub const RING_RADIUS: f32 = 110.0;

/// Base avatar diameter before any stage scaling.
pub const IMAGE_SIZE: f32 = 64.0;

/// Scale applied to avatars sitting on the ring.
pub const RING_IMAGE_SCALE: f32 = 0.64;

/// Angle of ring slot 0 (12 o'clock).
pub const START_ANGLE_DEG: f32 = -90.0;

/// Fraction of the global reveal progress each ring image waits for.
pub const STAGGER_STEP: f32 = 0.15;

/// Upper bound on loaded images. Placement buffers are sized from this.
pub const MAX_PROFILE_IMAGES: usize = 12;

// =============================================================================
// Avatar Styling
// =============================================================================

/// Border ring stroke width.
pub const BORDER_WIDTH: u32 = 2;

/// Glow ring stroke width (drawn under the border).
pub const GLOW_WIDTH: u32 = 6;

/// Border opacity at full image alpha (out of 255).
pub const BORDER_ALPHA: f32 = 200.0 / 255.0;

/// Glow opacity at full image alpha (out of 255).
pub const GLOW_ALPHA: f32 = 120.0 / 255.0;

/// Gap between the border ring center line and the clipped bitmap.
pub const IMAGE_INSET: f32 = 1.25;

// =============================================================================
// Column Layout (pre-computed)
// =============================================================================

/// Gap between canvas and main text.
const CANVAS_GAP: u32 = 48;

/// Height reserved for the two-line main text.
pub const MAIN_TEXT_HEIGHT: u32 = 48;

/// Gap between reveal elements.
const ELEMENT_GAP: u32 = 24;

/// Connect button height.
pub const BUTTON_HEIGHT: u32 = 52;

/// Connect button width (55% of the padded column).
pub const BUTTON_WIDTH: u32 = (SCREEN_WIDTH - 2 * COLUMN_PADDING) * 55 / 100;

/// Connect button corner radius.
pub const BUTTON_CORNER_RADIUS: u32 = 24;

/// Height reserved for the two secondary text lines.
pub const SECONDARY_TEXT_HEIGHT: u32 = 36;

/// Total column height; the column is vertically centered.
const COLUMN_HEIGHT: u32 = CANVAS_SIZE
    + CANVAS_GAP
    + MAIN_TEXT_HEIGHT
    + ELEMENT_GAP
    + BUTTON_HEIGHT
    + ELEMENT_GAP
    + SECONDARY_TEXT_HEIGHT;

/// Top of the column.
const COLUMN_TOP: u32 = (SCREEN_HEIGHT - COLUMN_HEIGHT) / 2;

/// Top-left corner of the canvas on screen (x).
pub const CANVAS_ORIGIN_X: i32 = ((SCREEN_WIDTH - CANVAS_SIZE) / 2) as i32;

/// Top-left corner of the canvas on screen (y).
pub const CANVAS_ORIGIN_Y: i32 = COLUMN_TOP as i32;

/// Top of the main text slot.
pub const MAIN_TEXT_TOP: i32 = (COLUMN_TOP + CANVAS_SIZE + CANVAS_GAP) as i32;

/// Top of the button slot.
pub const BUTTON_TOP: i32 = MAIN_TEXT_TOP + (MAIN_TEXT_HEIGHT + ELEMENT_GAP) as i32;

/// Left edge of the button (horizontally centered).
pub const BUTTON_LEFT: i32 = CENTER_X - (BUTTON_WIDTH / 2) as i32;

/// Top of the secondary text slot.
pub const SECONDARY_TEXT_TOP: i32 = BUTTON_TOP + (BUTTON_HEIGHT + ELEMENT_GAP) as i32;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~60 FPS). The frame loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(16);

/// Period of one full ring revolution.
pub const ROTATION_PERIOD_MS: u64 = 25_000;

// =============================================================================
// Assets
// =============================================================================

/// Directory holding the bundled profile images.
pub const PROFILE_ASSET_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/profiles");

/// Profile image file names, in display order (first one is the hero).
pub const PROFILE_IMAGE_FILES: [&str; 8] = [
    "profile1.ppm",
    "profile2.ppm",
    "profile3.ppm",
    "profile4.ppm",
    "profile5.ppm",
    "profile6.ppm",
    "profile7.ppm",
    "profile8.ppm",
];
