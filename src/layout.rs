//! Per-frame placement of profile images on the ring.
//!
//! Given the image count, the stage and the current [`AnimationParams`], this
//! module decides where each avatar goes, how big it is and how opaque. It
//! does no drawing; [`crate::widgets::draw_avatar`] turns placements into pixels.
//!
//! # Render Modes
//!
//! - **Reveal** (Initial, FirstImageMovingUp, ImagesAppearing): the hero
//!   (image 0) floats at the canvas center shifted by its animated offset and
//!   scale. Images 1..N sit on `M = N − 1` evenly spaced ring slots and pop in
//!   one after another.
//! - **Ring** (RotationStarted, Complete): all `M = N` images share the ring at
//!   a fixed size and full opacity, rotated together by the ring angle.
//!
//! # Geometry
//!
//! ```text
//! angle(i) = −90° + i · 360°/M  (+ rotation in ring mode)
//! pos(i)   = C + R · (cos angle, sin angle)
//! ```
//!
//! Slot 0 is at 12 o'clock and slots proceed clockwise (screen Y points down).
//!
//! # Staggered Pop-in
//!
//! Ring image `k` (0-based among ring images) waits for `k · 0.15` of the
//! global progress, then runs its own progress over the remaining range:
//!
//! ```text
//! p(k) = clamp((global − k·0.15) / (1 − k·0.15), 0, 1)
//! e    = ease_out_back(p)
//! size = base · 0.64 · e · bounce(e)      alpha = e
//! ```

use heapless::Vec;

use crate::animations::{bounce_scale, ease_out_back};
use crate::config::{
    CANVAS_CENTER,
    IMAGE_SIZE,
    MAX_PROFILE_IMAGES,
    RING_IMAGE_SCALE,
    RING_RADIUS,
    STAGGER_STEP,
    START_ANGLE_DEG,
};
use crate::params::AnimationParams;
use crate::stage::AnimationStage;

/// A point in canvas coordinates (sub-pixel precision).
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

impl CanvasPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    pub fn distance(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Center of the ring in canvas coordinates.
pub const RING_CENTER: CanvasPoint = CanvasPoint::new(CANVAS_CENTER, CANVAS_CENTER);

/// Which of the two layouts the current stage uses.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RenderMode {
    /// Hero at the center, remaining images popping onto the ring.
    Reveal,
    /// Every image on the rotating ring.
    Ring,
}

impl RenderMode {
    /// Layout used for `stage`.
    #[inline]
    pub const fn for_stage(stage: AnimationStage) -> Self {
        if stage.is_rotating() { Self::Ring } else { Self::Reveal }
    }
}

/// Role an image plays in the current frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ImageRole {
    /// Image 0 floating on its own before the ring rotates.
    Hero,
    /// Image sitting on a ring slot.
    Ring,
}

/// Where and how to draw one image this frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Placement {
    /// Index into the loaded image list.
    pub image_index: usize,
    /// Hero or ring image.
    pub role: ImageRole,
    /// Avatar center in canvas coordinates.
    pub center: CanvasPoint,
    /// Avatar diameter in pixels.
    pub size: f32,
    /// Opacity, 0.0 (invisible) upward. May exceed 1.0 during the pop overshoot.
    pub alpha: f32,
}

impl Placement {
    /// Whether drawing this placement would produce any pixels.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0 && self.size > 0.0
    }
}

/// Placements for one frame, at most one per loaded image.
pub type Placements = Vec<Placement, MAX_PROFILE_IMAGES>;

// =============================================================================
// Geometry Helpers
// =============================================================================

/// Angle in degrees of ring slot `index` out of `slots`, before rotation.
#[inline]
pub fn slot_angle(index: usize, slots: usize) -> f32 {
    if slots == 0 {
        return START_ANGLE_DEG;
    }
    (360.0 / slots as f32).mul_add(index as f32, START_ANGLE_DEG)
}

/// Point on a circle of `radius` around `center` at `angle_deg`.
#[inline]
pub fn point_on_circle(center: CanvasPoint, radius: f32, angle_deg: f32) -> CanvasPoint {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    CanvasPoint::new(radius.mul_add(cos, center.x), radius.mul_add(sin, center.y))
}

/// Individual pop-in progress of ring image `ring_index`.
///
/// Non-decreasing in `global` and always within 0.0-1.0. Once the delay
/// reaches the whole range (index 7 and up) the span turns negative and the
/// clamp pins the image at 1.0, so it shows at full size from the start.
#[inline]
pub fn stagger_progress(global: f32, ring_index: usize) -> f32 {
    let delay = ring_index as f32 * STAGGER_STEP;
    let span = 1.0 - delay;
    if span == 0.0 {
        return if global >= delay { 1.0 } else { 0.0 };
    }
    ((global - delay) / span).clamp(0.0, 1.0)
}

// =============================================================================
// Placement Computation
// =============================================================================

/// Compute placements for `count` images.
///
/// Reveal mode yields one hero placement followed by `count − 1` ring
/// placements; ring mode yields `count` ring placements. Images past
/// [`MAX_PROFILE_IMAGES`] are ignored.
pub fn compute_placements(count: usize, stage: AnimationStage, params: &AnimationParams) -> Placements {
    let count = count.min(MAX_PROFILE_IMAGES);
    let mut placements = Placements::new();
    if count == 0 {
        return placements;
    }

    let ring_size = IMAGE_SIZE * RING_IMAGE_SCALE;

    match RenderMode::for_stage(stage) {
        RenderMode::Ring => {
            for index in 0..count {
                let angle = slot_angle(index, count) + params.rotation_angle;
                placements
                    .push(Placement {
                        image_index: index,
                        role: ImageRole::Ring,
                        center: point_on_circle(RING_CENTER, RING_RADIUS, angle),
                        size: ring_size,
                        alpha: 1.0,
                    })
                    .ok();
            }
        }
        RenderMode::Reveal => {
            placements
                .push(Placement {
                    image_index: 0,
                    role: ImageRole::Hero,
                    center: CanvasPoint::new(RING_CENTER.x, RING_CENTER.y + params.first_image_offset_y),
                    size: IMAGE_SIZE * params.first_image_scale,
                    alpha: 1.0,
                })
                .ok();

            let slots = count - 1;
            for ring_index in 0..slots {
                let progress = stagger_progress(params.images_appear_progress, ring_index);
                let eased = ease_out_back(progress);
                placements
                    .push(Placement {
                        image_index: ring_index + 1,
                        role: ImageRole::Ring,
                        center: point_on_circle(RING_CENTER, RING_RADIUS, slot_angle(ring_index, slots)),
                        size: ring_size * eased * bounce_scale(eased),
                        alpha: eased,
                    })
                    .ok();
            }
        }
    }

    placements
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn params(progress: f32, rotation: f32) -> AnimationParams {
        AnimationParams {
            first_image_offset_y: -110.0,
            first_image_scale: 0.8,
            images_appear_progress: progress,
            rotation_angle: rotation,
        }
    }

    /// Normalize an angle difference into 0..360.
    fn wrap(angle: f32) -> f32 {
        angle.rem_euclid(360.0)
    }

    /// Angle of a placement around the ring center, in degrees.
    fn angle_of(point: CanvasPoint) -> f32 {
        (point.y - RING_CENTER.y).atan2(point.x - RING_CENTER.x).to_degrees()
    }

    // -------------------------------------------------------------------------
    // Geometry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_slot_angle_starts_at_twelve_oclock() {
        for slots in 1..=MAX_PROFILE_IMAGES {
            assert_eq!(slot_angle(0, slots), -90.0, "Slot 0 should be at -90° for {slots} slots");
        }
    }

    #[test]
    fn test_slot_angles_evenly_spaced() {
        for slots in 1..=MAX_PROFILE_IMAGES {
            let step = 360.0 / slots as f32;
            for i in 0..slots {
                let diff = wrap(slot_angle(i + 1, slots) - slot_angle(i, slots));
                assert!(
                    (diff - wrap(step)).abs() < EPSILON,
                    "Slots {i}->{} of {slots} should be {step}° apart, got {diff}",
                    i + 1
                );
            }
        }
    }

    #[test]
    fn test_point_on_circle_top() {
        let top = point_on_circle(RING_CENTER, RING_RADIUS, -90.0);
        assert!((top.x - 160.0).abs() < EPSILON);
        assert!((top.y - 50.0).abs() < EPSILON, "12 o'clock is above the center");
    }

    #[test]
    fn test_point_on_circle_keeps_radius() {
        for step in 0..36 {
            let point = point_on_circle(RING_CENTER, RING_RADIUS, step as f32 * 10.0);
            assert!((point.distance(RING_CENTER) - RING_RADIUS).abs() < EPSILON);
        }
    }

    // -------------------------------------------------------------------------
    // Stagger Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_stagger_progress_clamped() {
        for ring_index in 0..MAX_PROFILE_IMAGES {
            for step in -10..=20 {
                let progress = stagger_progress(step as f32 / 10.0, ring_index);
                assert!((0.0..=1.0).contains(&progress), "Out of range: {progress}");
            }
        }
    }

    #[test]
    fn test_stagger_progress_monotonic() {
        for ring_index in 0..MAX_PROFILE_IMAGES {
            let mut previous = 0.0;
            for step in 0..=100 {
                let progress = stagger_progress(step as f32 / 100.0, ring_index);
                assert!(progress >= previous, "Ring image {ring_index} went backward at step {step}");
                previous = progress;
            }
        }
    }

    #[test]
    fn test_stagger_progress_delays_later_images() {
        assert_eq!(stagger_progress(0.0, 0), 0.0);
        assert_eq!(stagger_progress(1.0, 0), 1.0);
        assert_eq!(stagger_progress(0.15, 1), 0.0, "Second image waits for 15%");
        assert!((stagger_progress(0.575, 1) - 0.5).abs() < EPSILON);
        assert_eq!(stagger_progress(1.0, 6), 1.0, "Every image completes at full progress");
    }

    #[test]
    fn test_stagger_past_range_shows_full_size() {
        // Delay ≥ 1 makes the span negative; the clamp pins progress at 1
        for ring_index in 7..MAX_PROFILE_IMAGES {
            for global in [0.0, 0.5, 1.0] {
                assert_eq!(
                    stagger_progress(global, ring_index),
                    1.0,
                    "Ring image {ring_index} at progress {global} should be fully shown"
                );
            }
        }
    }

    #[test]
    fn test_nine_images_all_visible_after_reveal() {
        let placements = compute_placements(9, AnimationStage::ImagesAppearing, &params(1.0, 0.0));
        assert_eq!(placements.len(), 9);
        assert!(
            placements.iter().all(Placement::is_visible),
            "Every image should be visible once the reveal completes"
        );
        assert!(placements[8].is_visible(), "Ring index 7 must not stay hidden");
    }

    // -------------------------------------------------------------------------
    // Placement Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_no_images_no_placements() {
        assert!(compute_placements(0, AnimationStage::Initial, &params(0.0, 0.0)).is_empty());
        assert!(compute_placements(0, AnimationStage::Complete, &params(1.0, 0.0)).is_empty());
    }

    #[test]
    fn test_reveal_mode_counts() {
        for count in 1..=MAX_PROFILE_IMAGES {
            let placements = compute_placements(count, AnimationStage::ImagesAppearing, &params(0.5, 0.0));
            let heroes = placements.iter().filter(|p| p.role == ImageRole::Hero).count();
            let ring = placements.iter().filter(|p| p.role == ImageRole::Ring).count();
            assert_eq!(heroes, 1, "Exactly one hero for {count} images");
            assert_eq!(ring, count - 1, "N-1 ring placements for {count} images");
            assert_eq!(placements[0].image_index, 0, "Hero is image 0");
        }
    }

    #[test]
    fn test_ring_mode_counts() {
        for count in 1..=MAX_PROFILE_IMAGES {
            let placements = compute_placements(count, AnimationStage::RotationStarted, &params(1.0, 0.0));
            assert_eq!(placements.len(), count, "N ring placements for {count} images");
            assert!(placements.iter().all(|p| p.role == ImageRole::Ring));
        }
    }

    #[test]
    fn test_hero_follows_offset_and_scale() {
        let placements = compute_placements(8, AnimationStage::FirstImageMovingUp, &params(0.0, 0.0));
        let hero = placements[0];
        assert!((hero.center.x - 160.0).abs() < EPSILON);
        assert!((hero.center.y - 50.0).abs() < EPSILON, "Hero offset -110 puts it at y=50");
        assert!((hero.size - 64.0 * 0.8).abs() < EPSILON);
        assert_eq!(hero.alpha, 1.0);
    }

    #[test]
    fn test_reveal_images_invisible_before_progress() {
        let placements = compute_placements(8, AnimationStage::FirstImageMovingUp, &params(0.0, 0.0));
        assert!(placements[0].is_visible(), "Hero is always visible");
        for placement in placements.iter().skip(1) {
            assert!(!placement.is_visible(), "Ring image {} should be hidden", placement.image_index);
        }
    }

    #[test]
    fn test_reveal_images_settle_at_ring_size() {
        let placements = compute_placements(8, AnimationStage::ImagesAppearing, &params(1.0, 0.0));
        for placement in placements.iter().skip(1) {
            assert!((placement.size - 64.0 * 0.64).abs() < EPSILON);
            assert!((placement.alpha - 1.0).abs() < EPSILON);
            assert!((placement.center.distance(RING_CENTER) - RING_RADIUS).abs() < EPSILON);
        }
    }

    #[test]
    fn test_reveal_ring_spacing_uses_n_minus_one_slots() {
        let placements = compute_placements(8, AnimationStage::ImagesAppearing, &params(1.0, 0.0));
        let first = angle_of(placements[1].center);
        let second = angle_of(placements[2].center);
        assert!((first + 90.0).abs() < EPSILON, "First ring image at 12 o'clock");
        assert!(
            (wrap(second - first) - 360.0 / 7.0).abs() < EPSILON,
            "7 ring images are spaced 360/7 apart"
        );
    }

    #[test]
    fn test_eight_images_rotating_ring() {
        let rotation = 14.4;
        let placements = compute_placements(8, AnimationStage::RotationStarted, &params(1.0, rotation));
        assert_eq!(placements.len(), 8);

        for (i, placement) in placements.iter().enumerate() {
            assert_eq!(placement.image_index, i);
            assert!((placement.center.distance(RING_CENTER) - RING_RADIUS).abs() < EPSILON);
            assert!((placement.size - 64.0 * 0.64).abs() < EPSILON);
            assert_eq!(placement.alpha, 1.0);

            let expected = wrap(-90.0 + 45.0 * i as f32 + rotation);
            let actual = wrap(angle_of(placement.center));
            let diff = (actual - expected).abs();
            assert!(
                diff < EPSILON || (360.0 - diff) < EPSILON,
                "Image {i} expected at {expected}°, found {actual}°"
            );
        }
    }

    #[test]
    fn test_single_image_ring() {
        let placements = compute_placements(1, AnimationStage::Complete, &params(1.0, 0.0));
        assert_eq!(placements.len(), 1);
        assert!((placements[0].center.y - 50.0).abs() < EPSILON, "Lone image sits at 12 o'clock");
    }

    #[test]
    fn test_render_mode_for_stage() {
        assert_eq!(RenderMode::for_stage(AnimationStage::Initial), RenderMode::Reveal);
        assert_eq!(RenderMode::for_stage(AnimationStage::ImagesAppearing), RenderMode::Reveal);
        assert_eq!(RenderMode::for_stage(AnimationStage::RotationStarted), RenderMode::Ring);
        assert_eq!(RenderMode::for_stage(AnimationStage::Complete), RenderMode::Ring);
    }
}
