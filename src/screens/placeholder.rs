//! Static screen shown when no profile image could be loaded.
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │                                    │
//! │    No profile images available     │  White, centered
//! │                                    │
//! └────────────────────────────────────┘
//! ```
//!
//! Nothing animates and the canvas is never drawn.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::colors::BLACK;
use crate::config::{CENTER_X, CENTER_Y};
use crate::styles::{CENTERED_MIDDLE, PLACEHOLDER_STYLE};

/// Placeholder message.
pub const PLACEHOLDER_TEXT: &str = "No profile images available";

/// Clear the display and draw the placeholder message.
pub fn draw_placeholder<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();
    Text::with_text_style(
        PLACEHOLDER_TEXT,
        Point::new(CENTER_X, CENTER_Y),
        PLACEHOLDER_STYLE,
        CENTERED_MIDDLE,
    )
    .draw(display)
    .ok();
}
