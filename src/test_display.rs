//! In-memory draw target for rendering tests.
//!
//! Records the last color written to every pixel (out-of-bounds writes are
//! dropped, like the simulator display) and counts writes so tests can assert
//! that nothing was drawn at all.

use std::collections::HashMap;
use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

pub struct RecordingDisplay {
    size: Size,
    pixels: HashMap<Point, Rgb565>,
    writes: usize,
}

impl RecordingDisplay {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: HashMap::new(),
            writes: 0,
        }
    }

    /// Last color written at `point`, `None` if never touched.
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        self.pixels.get(&point).copied()
    }

    pub fn pixels(&self) -> impl Iterator<Item = (&Point, &Rgb565)> {
        self.pixels.iter()
    }

    /// Number of pixels whose current color is `color`.
    pub fn count_color(&self, color: Rgb565) -> usize {
        self.pixels.values().filter(|&&c| c == color).count()
    }

    /// Number of in-bounds pixel writes since creation.
    pub const fn pixel_writes(&self) -> usize {
        self.writes
    }
}

impl OriginDimensions for RecordingDisplay {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for RecordingDisplay {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                self.pixels.insert(point, color);
                self.writes += 1;
            }
        }
        Ok(())
    }
}
