//! Continuous animation parameters derived from the stage.
//!
//! Each parameter has a target that is a pure function of [`AnimationStage`].
//! When the stage changes, the matching spring is retargeted and glides there;
//! the renderer only ever reads the current spring values.
//!
//! | Parameter              | Initial | MovingUp | Appearing | Rotation/Complete | Spring          |
//! |------------------------|---------|----------|-----------|-------------------|-----------------|
//! | `first_image_offset_y` | 0       | −110     | −110      | −110              | ζ 0.5, k 1500   |
//! | `first_image_scale`    | 1.2     | 1.0      | 0.8       | 0.64              | ζ 0.75, k 1500  |
//! | `images_appear_progress` | 0     | 0        | 1         | 1                 | ζ 0.5, k 200    |
//!
//! The rotation angle is not a spring: it is a function of elapsed time and is
//! only reported as non-zero once the stage is rotating.

use crate::animations::{
    DAMPING_RATIO_LOW_BOUNCY,
    DAMPING_RATIO_MEDIUM_BOUNCY,
    STIFFNESS_LOW,
    STIFFNESS_MEDIUM,
    Spring,
    SpringSpec,
    rotation_angle,
};
use crate::stage::AnimationStage;

const OFFSET_SPRING: SpringSpec = SpringSpec::new(DAMPING_RATIO_MEDIUM_BOUNCY, STIFFNESS_MEDIUM);
const SCALE_SPRING: SpringSpec = SpringSpec::new(DAMPING_RATIO_LOW_BOUNCY, STIFFNESS_MEDIUM);
const APPEAR_SPRING: SpringSpec = SpringSpec::new(DAMPING_RATIO_MEDIUM_BOUNCY, STIFFNESS_LOW);

/// How far the hero image travels up, in pixels.
pub const HERO_RISE: f32 = -110.0;

/// Snapshot of every parameter the renderer needs for one frame.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AnimationParams {
    /// Vertical offset of the hero image from the canvas center.
    pub first_image_offset_y: f32,
    /// Hero image scale relative to the base avatar size.
    pub first_image_scale: f32,
    /// Global ring reveal progress, 0.0-1.0.
    pub images_appear_progress: f32,
    /// Ring rotation in degrees; 0 until the ring starts rotating.
    pub rotation_angle: f32,
}

// =============================================================================
// Stage Targets
// =============================================================================

/// Target hero offset for a stage.
#[inline]
pub const fn offset_y_target(stage: AnimationStage) -> f32 {
    match stage {
        AnimationStage::Initial => 0.0,
        _ => HERO_RISE,
    }
}

/// Target hero scale for a stage.
#[inline]
pub const fn scale_target(stage: AnimationStage) -> f32 {
    match stage {
        AnimationStage::Initial => 1.2,
        AnimationStage::FirstImageMovingUp => 1.0,
        AnimationStage::ImagesAppearing => 0.8,
        AnimationStage::RotationStarted | AnimationStage::Complete => 0.64,
    }
}

/// Target ring reveal progress for a stage.
#[inline]
pub const fn appear_target(stage: AnimationStage) -> f32 {
    if stage.images_revealed() { 1.0 } else { 0.0 }
}

// =============================================================================
// Parameter Animator
// =============================================================================

/// Owns the springs behind the stage-driven parameters.
#[derive(Clone, Debug)]
pub struct ParamAnimator {
    stage: AnimationStage,
    offset_y: Spring,
    scale: Spring,
    appear: Spring,
}

impl ParamAnimator {
    /// Create an animator resting at the `Initial` targets.
    pub const fn new() -> Self {
        let stage = AnimationStage::Initial;
        Self {
            stage,
            offset_y: Spring::new(OFFSET_SPRING, offset_y_target(stage)),
            scale: Spring::new(SCALE_SPRING, scale_target(stage)),
            appear: Spring::new(APPEAR_SPRING, appear_target(stage)),
        }
    }

    /// Retarget every spring for `stage`.
    pub const fn set_stage(&mut self, stage: AnimationStage) {
        self.stage = stage;
        self.offset_y.set_target(offset_y_target(stage));
        self.scale.set_target(scale_target(stage));
        self.appear.set_target(appear_target(stage));
    }

    /// Stage the springs are currently heading for.
    #[inline]
    pub const fn stage(&self) -> AnimationStage {
        self.stage
    }

    /// Advance all springs by `dt` seconds. Returns `true` if any moved.
    pub fn update(&mut self, dt: f32) -> bool {
        let offset_moved = self.offset_y.update(dt);
        let scale_moved = self.scale.update(dt);
        let appear_moved = self.appear.update(dt);
        offset_moved || scale_moved || appear_moved
    }

    /// Whether every spring rests on its target.
    pub fn is_settled(&self) -> bool {
        self.offset_y.is_settled() && self.scale.is_settled() && self.appear.is_settled()
    }

    /// Parameters for a frame rendered `elapsed_ms` after screen start.
    pub fn params(&self, elapsed_ms: u64) -> AnimationParams {
        AnimationParams {
            first_image_offset_y: self.offset_y.value(),
            first_image_scale: self.scale.value(),
            images_appear_progress: self.appear.value().clamp(0.0, 1.0),
            rotation_angle: if self.stage.is_rotating() {
                rotation_angle(elapsed_ms)
            } else {
                0.0
            },
        }
    }
}

impl Default for ParamAnimator {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
