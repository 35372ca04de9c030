// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32/u64->f32 in animation and layout math
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // f32->u32 where we know the value is positive

//! Animated profile circle intro screen.
//!
//! A hero profile image rises from the center of a square canvas and shrinks
//! while the remaining images pop onto a circle around it with a staggered,
//! springy overshoot. Once all images sit on the ring it starts rotating
//! slowly and a headline, a "Connect" button and a short tagline fade in
//! below. With no images available a static placeholder message is shown.
//!
//! # Timeline
//!
//! | Time   | Event                              |
//! |--------|------------------------------------|
//! | 0.5s   | Hero starts moving up              |
//! | 1.3s   | Ring images start appearing        |
//! | 3.1s   | Ring starts rotating               |
//! | 4.1s   | Headline fades in                  |
//! | 4.7s   | Connect button fades in            |
//! | 5.2s   | Secondary text fades in            |
//! | 5.5s   | Sequence complete (ring keeps turning) |
//!
//! # Modules
//!
//! | Module          | Role                                                    |
//! |-----------------|---------------------------------------------------------|
//! | [`sequencer`]   | Timeline of stage changes and reveal flags              |
//! | [`stage`]       | Ordered animation stages                                |
//! | [`animations`]  | Springs, easing, bounce and rotation math               |
//! | [`params`]      | Stage-driven spring parameters                          |
//! | [`layout`]      | Hero and ring placements on the canvas                  |
//! | [`assets`]      | Profile image decoding                                  |
//! | [`widgets`]     | Avatar, text and button drawing                         |
//! | [`screens`]     | Profile circle and placeholder screens                  |
//! | [`render`]      | Redraw tracking for the frame loop                      |
//!
//! Everything draws to a generic `DrawTarget<Color = Rgb565>`, so the screens
//! render the same way into the desktop simulator window and into an in-memory
//! target in tests.

pub mod animations;
pub mod assets;
pub mod colors;
pub mod config;
pub mod layout;
pub mod params;
pub mod render;
pub mod screens;
pub mod sequencer;
pub mod stage;
pub mod styles;
pub mod widgets;

#[cfg(test)]
mod test_display;
