//! Color palette and alpha blending.
//!
//! `Rgb565` has no alpha channel, so translucency (fade-ins, the avatar glow)
//! is rendered by blending the foreground color toward the color underneath.
//! The screen background is always black, which makes black the blend base for
//! everything the screen draws.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{IntoStorage, RgbColor};

/// Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Text color.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Avatar border and glow color, RGB888 (135, 206, 235).
pub const SKY_BLUE: Rgb565 = Rgb565::new(135 >> 3, 206 >> 2, 235 >> 3);

/// Connect button fill, RGB888 (42, 42, 42).
pub const BUTTON_GRAY: Rgb565 = Rgb565::new(42 >> 3, 42 >> 2, 42 >> 3);

/// Convert 8-bit RGB components to `Rgb565` by truncating the low bits.
#[inline]
pub const fn rgb888_to_565(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

/// Blend `to` over `from` with opacity `alpha` (clamped to 0.0-1.0).
///
/// Works on the raw 5-6-5 components with 8-bit fixed-point weights, so
/// `alpha = 0.0` returns `from` and `alpha = 1.0` returns `to` exactly.
pub fn blend_rgb565(from: Rgb565, to: Rgb565, alpha: f32) -> Rgb565 {
    let weight = (alpha.clamp(0.0, 1.0) * 256.0) as i32;

    let from_raw = from.into_storage();
    let to_raw = to.into_storage();

    let from_r = i32::from((from_raw >> 11) & 0x1F);
    let from_g = i32::from((from_raw >> 5) & 0x3F);
    let from_b = i32::from(from_raw & 0x1F);

    let to_r = i32::from((to_raw >> 11) & 0x1F);
    let to_g = i32::from((to_raw >> 5) & 0x3F);
    let to_b = i32::from(to_raw & 0x1F);

    let mix = |a: i32, b: i32| a + (((b - a) * weight) >> 8);

    let r = mix(from_r, to_r).clamp(0, 31);
    let g = mix(from_g, to_g).clamp(0, 63);
    let b = mix(from_b, to_b).clamp(0, 31);

    Rgb565::new(r as u8, g as u8, b as u8)
}

/// Fade `color` in over the black background.
#[inline]
pub fn fade(color: Rgb565, alpha: f32) -> Rgb565 {
    blend_rgb565(BLACK, color, alpha)
}
