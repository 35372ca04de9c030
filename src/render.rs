//! Render state tracking for display updates.
//!
//! # Update Strategy
//!
//! | Screen         | Update Frequency             | Strategy                   |
//! |----------------|------------------------------|----------------------------|
//! | Placeholder    | Once                         | Draw on the first frame    |
//! | Profile circle | While anything moves         | Clear and redraw on change |
//!
//! The frame loop passes the `changed` flag returned by the screen's update.
//! The placeholder never reports a change, so it is drawn on the first frame
//! and then left on the display. The profile circle reports a change whenever
//! a timeline step fires, a spring moves or the ring rotates; the quiet half
//! second before the hero starts moving is not redrawn.

/// Tracks whether the next frame needs a redraw.
#[derive(Debug)]
pub struct RenderState {
    /// Whether this is the first frame (need full redraw).
    first_frame: bool,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self {
        Self { first_frame: true }
    }

    /// Whether the frame must be redrawn, given whether the screen changed.
    #[inline]
    pub const fn needs_redraw(&self, changed: bool) -> bool {
        changed || self.first_frame
    }

    /// Call at end of frame to reset per-frame state.
    pub const fn end_frame(&mut self) {
        self.first_frame = false;
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
