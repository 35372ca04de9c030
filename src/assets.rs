//! Profile image loading.
//!
//! Images are decoded once at startup with the `image` crate and converted to
//! `Rgb565` so the render loop only copies pixels. A file that cannot be read
//! or decoded is skipped with a warning; the rest of the set is still used.
//! Order is preserved, so the first successfully loaded image becomes the
//! hero.

use std::path::{Path, PathBuf};

use embedded_graphics::pixelcolor::Rgb565;
use log::{debug, warn};
use thiserror::Error;

use crate::colors::rgb888_to_565;
use crate::config::{MAX_PROFILE_IMAGES, PROFILE_ASSET_DIR, PROFILE_IMAGE_FILES};

/// Reasons a profile image could not be loaded.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a supported image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The image decoded to zero pixels.
    #[error("image has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },
}

/// A decoded, immutable profile bitmap.
#[derive(Clone, PartialEq, Eq)]
pub struct ProfileImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
}

impl std::fmt::Debug for ProfileImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl ProfileImage {
    /// Decode an image from encoded bytes (PNG, PPM, ... as supported by `image`).
    pub fn decode(bytes: &[u8]) -> Result<Self, AssetError> {
        let decoded = image::load_from_memory(bytes)?.into_rgb8();
        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(AssetError::Empty { width, height });
        }

        let pixels = decoded.pixels().map(|p| rgb888_to_565(p[0], p[1], p[2])).collect();
        Ok(Self { width, height, pixels })
    }

    /// Read and decode an image file.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::decode(&bytes)
    }

    /// Build an image from raw pixels (row-major). `None` if sizes disagree or are zero.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb565>) -> Option<Self> {
        let expected = (width as usize).checked_mul(height as usize)?;
        (expected > 0 && pixels.len() == expected).then_some(Self { width, height, pixels })
    }

    /// Width in pixels.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (`x`, `y`), clamped to the image bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb565 {
        let x = x.min(self.width - 1) as usize;
        let y = y.min(self.height - 1) as usize;
        self.pixels[y * self.width as usize + x]
    }

    /// Nearest-neighbour sample at normalized coordinates (0.0-1.0).
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> Rgb565 {
        let x = (u.clamp(0.0, 1.0) * self.width as f32) as u32;
        let y = (v.clamp(0.0, 1.0) * self.height as f32) as u32;
        self.pixel(x, y)
    }
}

/// Paths of the bundled profile images, in display order.
pub fn bundled_profile_paths() -> Vec<PathBuf> {
    let dir = Path::new(PROFILE_ASSET_DIR);
    PROFILE_IMAGE_FILES.iter().map(|name| dir.join(name)).collect()
}

/// Load every image in `paths`, skipping (and logging) the ones that fail.
///
/// At most [`MAX_PROFILE_IMAGES`] images are kept: per-frame placements live
/// in a fixed-capacity buffer of that size. Images past the cap are dropped
/// with a warning, keeping the first ones in order.
pub fn load_profile_images<P: AsRef<Path>>(paths: &[P]) -> Vec<ProfileImage> {
    let mut images = Vec::with_capacity(paths.len().min(MAX_PROFILE_IMAGES));

    for path in paths {
        let path = path.as_ref();
        match ProfileImage::load(path) {
            Ok(image) => {
                debug!("Loaded {} ({}x{})", path.display(), image.width(), image.height());
                images.push(image);
            }
            Err(err) => warn!("Could not load profile image {}: {err}", path.display()),
        }
    }

    if images.len() > MAX_PROFILE_IMAGES {
        warn!(
            "{} profile images loaded, only the first {MAX_PROFILE_IMAGES} are shown",
            images.len()
        );
        images.truncate(MAX_PROFILE_IMAGES);
    }

    images
}
