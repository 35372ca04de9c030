//! Discrete stages of the intro animation.
//!
//! The stage only ever moves forward:
//!
//! ```text
//! Initial → FirstImageMovingUp → ImagesAppearing → RotationStarted → Complete
//! ```
//!
//! Every visual parameter (hero offset and scale, ring reveal progress,
//! whether the rotation is applied) is derived from the current stage.

/// Phase of the scripted animation timeline.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub enum AnimationStage {
    /// Hero image alone in the center, slightly enlarged.
    #[default]
    Initial,

    /// Hero image moves up to the top of the ring.
    FirstImageMovingUp,

    /// Remaining images pop onto the ring one after another.
    ImagesAppearing,

    /// Hero joins the ring and all images rotate together.
    RotationStarted,

    /// Timeline finished; rotation continues indefinitely.
    Complete,
}

impl AnimationStage {
    /// The stage that follows this one, or `None` for [`Self::Complete`].
    #[inline]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Initial => Some(Self::FirstImageMovingUp),
            Self::FirstImageMovingUp => Some(Self::ImagesAppearing),
            Self::ImagesAppearing => Some(Self::RotationStarted),
            Self::RotationStarted => Some(Self::Complete),
            Self::Complete => None,
        }
    }

    /// Whether all images sit on the ring and rotate (ring mode).
    #[inline]
    pub const fn is_rotating(self) -> bool {
        matches!(self, Self::RotationStarted | Self::Complete)
    }

    /// Whether the ring images have started (or finished) appearing.
    #[inline]
    pub const fn images_revealed(self) -> bool {
        matches!(self, Self::ImagesAppearing | Self::RotationStarted | Self::Complete)
    }
}
