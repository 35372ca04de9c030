//! Top-level screens.
//!
//! - **Profile circle** ([`profile_circle`]): the animated hero, ring and
//!   reveals, shown when at least one profile image loaded
//! - **Placeholder** ([`placeholder`]): static "no images" message
//!
//! [`Screen`] picks one of them from the loaded image set and gives the frame
//! loop a single surface for updating, drawing and input.

mod placeholder;
mod profile_circle;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::warn;

use crate::assets::ProfileImage;

pub use placeholder::{PLACEHOLDER_TEXT, draw_placeholder};
pub use profile_circle::ProfileCircleScreen;

/// The screen being shown.
#[derive(Debug)]
pub enum Screen {
    /// No images: static message.
    Placeholder,
    /// Animated profile circle.
    ProfileCircle(ProfileCircleScreen),
}

impl Screen {
    /// Choose the screen for `images`: placeholder when empty.
    pub fn new(images: Vec<ProfileImage>) -> Self {
        if images.is_empty() {
            warn!("No profile images available, showing placeholder");
            Self::Placeholder
        } else {
            Self::ProfileCircle(ProfileCircleScreen::new(images))
        }
    }

    /// Advance to `elapsed_ms` after start; `dt` is the frame delta in seconds.
    ///
    /// Returns `true` if the frame content changed.
    pub fn update(&mut self, elapsed_ms: u64, dt: f32) -> bool {
        match self {
            Self::Placeholder => false,
            Self::ProfileCircle(screen) => screen.update(elapsed_ms, dt),
        }
    }

    /// Clear the display and draw the current frame.
    pub fn draw<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match self {
            Self::Placeholder => draw_placeholder(display),
            Self::ProfileCircle(screen) => screen.draw(display),
        }
    }

    /// Handle a click at `point`. Returns `true` if it activated the button.
    pub fn click(&self, point: Point) -> bool {
        match self {
            Self::Placeholder => false,
            Self::ProfileCircle(screen) => screen.button_hit(point) && screen.press_button(),
        }
    }

    /// Handle the keyboard activation key. Returns `true` if it activated the button.
    pub fn activate(&self) -> bool {
        match self {
            Self::Placeholder => false,
            Self::ProfileCircle(screen) => screen.press_button(),
        }
    }
}
