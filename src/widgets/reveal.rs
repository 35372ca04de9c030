//! Text and button reveals below the canvas.
//!
//! Each element owns a [`Reveal`]: a progress spring that drives both the fade
//! and the upward slide, plus a scale spring used by the button. Elements sit
//! in fixed slots (see [`crate::config`]) so revealing one never shifts the
//! others.
//!
//! ```text
//!         ┌──────────────────────────────┐
//!         │            canvas            │
//!         └──────────────────────────────┘
//!      Get to know the UI/UX wizards          ← main text   (slide 1/3)
//!    crafting pixel-perfect experiences
//!               ╭───────────╮
//!               │  Connect  │                 ← button      (slide 1/2, scale 0.8 → 1)
//!               ╰───────────╯
//!   The next wave of creativity is brewing.   ← secondary   (slide 1/4)
//!               Be part of it.
//! ```

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::Text;

use crate::animations::{
    DAMPING_RATIO_LOW_BOUNCY,
    DAMPING_RATIO_MEDIUM_BOUNCY,
    STIFFNESS_LOW,
    STIFFNESS_MEDIUM,
    Spring,
    SpringSpec,
};
use crate::colors::{BUTTON_GRAY, WHITE, fade};
use crate::config::{
    BUTTON_CORNER_RADIUS,
    BUTTON_HEIGHT,
    BUTTON_LEFT,
    BUTTON_TOP,
    BUTTON_WIDTH,
    CENTER_X,
    MAIN_TEXT_HEIGHT,
    MAIN_TEXT_TOP,
    SECONDARY_TEXT_HEIGHT,
    SECONDARY_TEXT_TOP,
};
use crate::styles::{BUTTON_FONT, CENTERED_MIDDLE, CENTERED_TOP, HEADLINE_BLOCK, HEADLINE_FONT, SECONDARY_FONT};

// =============================================================================
// Content
// =============================================================================

/// Headline shown under the canvas.
pub const MAIN_TEXT: &str = "Get to know the UI/UX wizards\ncrafting pixel-perfect experiences";

/// Button label.
pub const BUTTON_LABEL: &str = "Connect";

/// First secondary line, drawn slightly dimmer than the second.
pub const SECONDARY_LINE_1: &str = "The next wave of creativity is brewing.";

/// Second secondary line.
pub const SECONDARY_LINE_2: &str = "Be part of it.";

const SECONDARY_LINE_1_ALPHA: f32 = 0.9;

/// Vertical distance between the two secondary lines.
const SECONDARY_LINE_SPACING: i32 = 18;

// =============================================================================
// Reveal Animation
// =============================================================================

const TEXT_SPRING: SpringSpec = SpringSpec::new(DAMPING_RATIO_MEDIUM_BOUNCY, STIFFNESS_LOW);
const BUTTON_SPRING: SpringSpec = SpringSpec::new(DAMPING_RATIO_MEDIUM_BOUNCY, STIFFNESS_MEDIUM);
const BUTTON_SCALE_SPRING: SpringSpec = SpringSpec::new(DAMPING_RATIO_LOW_BOUNCY, STIFFNESS_MEDIUM);

/// Fade, slide and scale state of one revealed element.
///
/// Hidden elements are not drawn at all. Once shown, progress springs from
/// 0 to 1; the element slides up from `slide_fraction` of its height and
/// scales from `initial_scale` to 1.
#[derive(Clone, Debug)]
pub struct Reveal {
    visible: bool,
    slide_fraction: f32,
    progress: Spring,
    scale: Spring,
}

impl Reveal {
    /// Create a hidden reveal.
    pub const fn new(motion: SpringSpec, scale: SpringSpec, slide_fraction: f32, initial_scale: f32) -> Self {
        Self {
            visible: false,
            slide_fraction,
            progress: Spring::new(motion, 0.0),
            scale: Spring::new(scale, initial_scale),
        }
    }

    /// Reveal for the headline: slides up from a third of its height.
    pub const fn main_text() -> Self {
        Self::new(TEXT_SPRING, TEXT_SPRING, 1.0 / 3.0, 1.0)
    }

    /// Reveal for the button: slides up from half its height and grows from 0.8.
    pub const fn button() -> Self {
        Self::new(BUTTON_SPRING, BUTTON_SCALE_SPRING, 0.5, 0.8)
    }

    /// Reveal for the secondary text: slides up from a quarter of its height.
    pub const fn secondary_text() -> Self {
        Self::new(TEXT_SPRING, TEXT_SPRING, 0.25, 1.0)
    }

    /// Start revealing. Repeated calls are no-ops.
    pub const fn show(&mut self) {
        self.visible = true;
        self.progress.set_target(1.0);
        self.scale.set_target(1.0);
    }

    /// Whether the element has been shown.
    #[inline]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Advance by `dt` seconds. Returns `true` if anything moved.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.visible {
            return false;
        }
        let progress_moved = self.progress.update(dt);
        let scale_moved = self.scale.update(dt);
        progress_moved || scale_moved
    }

    /// Whether the reveal has finished animating (hidden counts as settled).
    pub fn is_settled(&self) -> bool {
        !self.visible || (self.progress.is_settled() && self.scale.is_settled())
    }

    /// Current opacity, 0.0-1.0.
    #[inline]
    pub fn alpha(&self) -> f32 {
        if self.visible { self.progress.value().clamp(0.0, 1.0) } else { 0.0 }
    }

    /// Current downward offset for an element `height` pixels tall.
    #[inline]
    pub fn slide_offset(&self, height: u32) -> f32 {
        (1.0 - self.progress.value()) * self.slide_fraction * height as f32
    }

    /// Current scale factor.
    #[inline]
    pub const fn scale(&self) -> f32 {
        self.scale.value()
    }
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw the two-line headline.
pub fn draw_main_text<D>(display: &mut D, reveal: &Reveal)
where
    D: DrawTarget<Color = Rgb565>,
{
    let alpha = reveal.alpha();
    if alpha <= 0.0 {
        return;
    }

    let y = MAIN_TEXT_TOP + reveal.slide_offset(MAIN_TEXT_HEIGHT).round() as i32;
    let style = MonoTextStyle::new(HEADLINE_FONT, fade(WHITE, alpha));
    Text::with_text_style(MAIN_TEXT, Point::new(CENTER_X, y), style, HEADLINE_BLOCK)
        .draw(display)
        .ok();
}

/// Resting bounds of the button, used for hit-testing.
pub const fn button_bounds() -> Rectangle {
    Rectangle::new(
        Point::new(BUTTON_LEFT, BUTTON_TOP),
        Size::new(BUTTON_WIDTH, BUTTON_HEIGHT),
    )
}

/// Whether `point` activates the button. Hidden buttons never do.
pub fn button_hit(reveal: &Reveal, point: Point) -> bool {
    reveal.is_visible() && button_bounds().contains(point)
}

/// Draw the rounded "Connect" button, scaled around its center.
pub fn draw_connect_button<D>(display: &mut D, reveal: &Reveal)
where
    D: DrawTarget<Color = Rgb565>,
{
    let alpha = reveal.alpha();
    if alpha <= 0.0 {
        return;
    }

    let scale = reveal.scale().max(0.0);
    let center = button_bounds().center() + Point::new(0, reveal.slide_offset(BUTTON_HEIGHT).round() as i32);
    let size = Size::new(
        (BUTTON_WIDTH as f32 * scale).round() as u32,
        (BUTTON_HEIGHT as f32 * scale).round() as u32,
    );
    let corner = (BUTTON_CORNER_RADIUS as f32 * scale).round() as u32;

    RoundedRectangle::with_equal_corners(Rectangle::with_center(center, size), Size::new(corner, corner))
        .into_styled(PrimitiveStyle::with_fill(fade(BUTTON_GRAY, alpha)))
        .draw(display)
        .ok();

    let label_style = MonoTextStyle::new(BUTTON_FONT, fade(WHITE, alpha));
    Text::with_text_style(BUTTON_LABEL, center, label_style, CENTERED_MIDDLE)
        .draw(display)
        .ok();
}

/// Draw both secondary lines.
pub fn draw_secondary_text<D>(display: &mut D, reveal: &Reveal)
where
    D: DrawTarget<Color = Rgb565>,
{
    let alpha = reveal.alpha();
    if alpha <= 0.0 {
        return;
    }

    let y = SECONDARY_TEXT_TOP + reveal.slide_offset(SECONDARY_TEXT_HEIGHT).round() as i32;

    let first = MonoTextStyle::new(SECONDARY_FONT, fade(WHITE, alpha * SECONDARY_LINE_1_ALPHA));
    Text::with_text_style(SECONDARY_LINE_1, Point::new(CENTER_X, y), first, CENTERED_TOP)
        .draw(display)
        .ok();

    let second = MonoTextStyle::new(SECONDARY_FONT, fade(WHITE, alpha));
    Text::with_text_style(
        SECONDARY_LINE_2,
        Point::new(CENTER_X, y + SECONDARY_LINE_SPACING),
        second,
        CENTERED_TOP,
    )
    .draw(display)
    .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
