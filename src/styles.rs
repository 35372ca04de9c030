//! Pre-computed text styles.
//!
//! Alignment styles are `const`, so they cost nothing per frame. Character
//! styles for revealed text change color every frame while fading in, so only
//! the fonts are exposed and callers build `MonoTextStyle::new(FONT, color)`.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, LineHeight, TextStyle, TextStyleBuilder};
use profont::{PROFONT_10_POINT, PROFONT_12_POINT, PROFONT_14_POINT};

use crate::colors::WHITE;

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Horizontally centered, positioned by the top of the first line.
pub const CENTERED_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Centered block with the headline's 24px line spacing.
pub const HEADLINE_BLOCK: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .line_height(LineHeight::Pixels(24))
    .build();

/// Centered on both axes (button label, placeholder message).
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Fonts
// =============================================================================

/// Headline font.
pub const HEADLINE_FONT: &MonoFont = &PROFONT_14_POINT;

/// Button label font.
pub const BUTTON_FONT: &MonoFont = &PROFONT_14_POINT;

/// Secondary text font.
pub const SECONDARY_FONT: &MonoFont = &PROFONT_10_POINT;

/// Placeholder message font.
pub const PLACEHOLDER_FONT: &MonoFont = &PROFONT_12_POINT;

// =============================================================================
// Static Character Styles
// =============================================================================

/// White placeholder message style.
pub const PLACEHOLDER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(PLACEHOLDER_FONT, WHITE);
