//! Visual components of the profile circle screen.
//!
//! - [`avatar`]: Circular profile image with border and glow
//! - [`reveal`]: Headline, Connect button and secondary text, with their
//!   fade/slide/scale reveal state
//!
//! Widgets are stateless drawing functions over a generic
//! `DrawTarget<Color = Rgb565>`; animation state is passed in by the screen.

mod avatar;
mod reveal;

pub use avatar::draw_avatar;
pub use reveal::{
    BUTTON_LABEL,
    MAIN_TEXT,
    Reveal,
    SECONDARY_LINE_1,
    SECONDARY_LINE_2,
    button_bounds,
    button_hit,
    draw_connect_button,
    draw_main_text,
    draw_secondary_text,
};
