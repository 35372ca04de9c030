//! Circular profile avatar.
//!
//! Each avatar is drawn in three passes, back to front:
//!
//! 1. **Glow**: a wide, dim sky-blue ring that reads as a soft halo
//! 2. **Border**: a thin sky-blue ring on the avatar outline
//! 3. **Image**: the bitmap, nearest-neighbour scaled into a circle inset
//!    slightly within the border
//!
//! Every pass is blended over the black background by the placement's alpha,
//! so a popping avatar fades in as it grows.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};

use crate::assets::ProfileImage;
use crate::colors::{SKY_BLUE, fade};
use crate::config::{BORDER_ALPHA, BORDER_WIDTH, GLOW_ALPHA, GLOW_WIDTH, IMAGE_INSET};
use crate::layout::Placement;

/// Draw one avatar at `placement`, with canvas coordinates offset by `origin`.
///
/// Does nothing when the placement is invisible (alpha or size ≤ 0).
pub fn draw_avatar<D>(
    display: &mut D,
    image: &ProfileImage,
    placement: &Placement,
    origin: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if !placement.is_visible() {
        return;
    }

    // Overshoot makes the avatar bigger, never more than opaque
    let alpha = placement.alpha.min(1.0);
    let center_x = origin.x as f32 + placement.center.x;
    let center_y = origin.y as f32 + placement.center.y;
    let center = Point::new(center_x.round() as i32, center_y.round() as i32);
    let diameter = placement.size.round() as u32;
    if diameter == 0 {
        return;
    }

    Circle::with_center(center, diameter)
        .into_styled(PrimitiveStyle::with_stroke(fade(SKY_BLUE, GLOW_ALPHA * alpha), GLOW_WIDTH))
        .draw(display)
        .ok();

    Circle::with_center(center, diameter)
        .into_styled(PrimitiveStyle::with_stroke(fade(SKY_BLUE, BORDER_ALPHA * alpha), BORDER_WIDTH))
        .draw(display)
        .ok();

    let radius = placement.size / 2.0 - IMAGE_INSET;
    draw_clipped_image(display, image, center_x, center_y, radius, alpha);
}

/// Draw `image` scaled into the circle of `radius` around (`center_x`, `center_y`).
///
/// A pixel belongs to the circle when its center lies inside it.
fn draw_clipped_image<D>(
    display: &mut D,
    image: &ProfileImage,
    center_x: f32,
    center_y: f32,
    radius: f32,
    alpha: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if radius <= 0.0 {
        return;
    }

    let left = center_x - radius;
    let top = center_y - radius;
    let diameter = radius * 2.0;
    let radius_sq = radius * radius;

    let x_start = left.floor() as i32;
    let x_end = (center_x + radius).ceil() as i32;
    let y_start = top.floor() as i32;
    let y_end = (center_y + radius).ceil() as i32;

    let pixels = (y_start..y_end).flat_map(move |y| {
        (x_start..x_end).filter_map(move |x| {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let dx = px - center_x;
            let dy = py - center_y;
            if dx.mul_add(dx, dy * dy) > radius_sq {
                return None;
            }
            let color = image.sample((px - left) / diameter, (py - top) / diameter);
            Some(Pixel(Point::new(x, y), fade(color, alpha)))
        })
    });

    display.draw_iter(pixels).ok();
}
