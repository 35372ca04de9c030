//! Animated profile circle screen.
//!
//! # Visual Layout
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │  ┌──────────── canvas ──────────┐  │
//! │  │              (1)             │  │  Hero rises, shrinks to ring size
//! │  │        (8)          (2)      │  │
//! │  │      (7)     ·       (3)     │  │  Ring pops in, then rotates
//! │  │        (6)          (4)      │  │
//! │  │              (5)             │  │
//! │  └──────────────────────────────┘  │
//! │    Get to know the UI/UX wizards   │
//! │ crafting pixel-perfect experiences │
//! │            ( Connect )             │
//! │ The next wave of creativity is ... │
//! │           Be part of it.           │
//! └────────────────────────────────────┘
//! ```
//!
//! # Frame Flow
//!
//! 1. [`Sequencer::poll`] fires every timeline step that is due
//! 2. Fired actions update [`ScreenState`]; stage changes retarget the
//!    parameter springs, reveal flags start the matching [`Reveal`]
//! 3. All springs advance by the frame delta
//! 4. [`compute_placements`] turns stage and parameters into avatar positions
//!
//! Drawing reads the state only, so a frame can be drawn any number of times.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::info;

use crate::assets::ProfileImage;
use crate::colors::BLACK;
use crate::config::{CANVAS_ORIGIN_X, CANVAS_ORIGIN_Y};
use crate::layout::{Placements, compute_placements};
use crate::params::{AnimationParams, ParamAnimator};
use crate::sequencer::{ScreenState, Sequencer, TimelineAction};
use crate::widgets::{
    Reveal,
    button_hit,
    draw_avatar,
    draw_connect_button,
    draw_main_text,
    draw_secondary_text,
};

/// Canvas origin on screen.
const CANVAS_ORIGIN: Point = Point::new(CANVAS_ORIGIN_X, CANVAS_ORIGIN_Y);

/// The animated screen shown when at least one profile image loaded.
#[derive(Debug)]
pub struct ProfileCircleScreen {
    images: Vec<ProfileImage>,
    sequencer: Sequencer,
    state: ScreenState,
    animator: ParamAnimator,
    main_text: Reveal,
    button: Reveal,
    secondary_text: Reveal,
    elapsed_ms: u64,
}

impl ProfileCircleScreen {
    /// Create the screen at its initial pose. The first image is the hero.
    pub fn new(images: Vec<ProfileImage>) -> Self {
        info!("Profile circle screen with {} images", images.len());
        Self {
            images,
            sequencer: Sequencer::new(),
            state: ScreenState::new(),
            animator: ParamAnimator::new(),
            main_text: Reveal::main_text(),
            button: Reveal::button(),
            secondary_text: Reveal::secondary_text(),
            elapsed_ms: 0,
        }
    }

    /// Advance to `elapsed_ms` after screen start; `dt` is the frame delta in seconds.
    ///
    /// Returns `true` if anything changed.
    pub fn update(&mut self, elapsed_ms: u64, dt: f32) -> bool {
        self.elapsed_ms = elapsed_ms;

        let mut changed = false;
        for action in self.sequencer.poll(elapsed_ms) {
            if self.state.apply(action) {
                self.on_action(action);
                changed = true;
            }
        }

        let params_moved = self.animator.update(dt);
        let main_moved = self.main_text.update(dt);
        let button_moved = self.button.update(dt);
        let secondary_moved = self.secondary_text.update(dt);

        changed || params_moved || main_moved || button_moved || secondary_moved || self.state.stage.is_rotating()
    }

    fn on_action(&mut self, action: TimelineAction) {
        match action {
            TimelineAction::SetStage(stage) => self.animator.set_stage(stage),
            TimelineAction::ShowMainText => self.main_text.show(),
            TimelineAction::ShowButton => self.button.show(),
            TimelineAction::ShowSecondaryText => self.secondary_text.show(),
        }
    }

    /// Current stage and reveal flags.
    #[inline]
    pub const fn state(&self) -> &ScreenState {
        &self.state
    }

    /// Whether the scripted part of the animation has finished.
    #[inline]
    pub const fn sequence_finished(&self) -> bool {
        self.sequencer.finished()
    }

    /// Number of images on the ring (hero included).
    #[inline]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Parameters for the current frame.
    pub fn params(&self) -> AnimationParams {
        self.animator.params(self.elapsed_ms)
    }

    /// Avatar placements for the current frame.
    pub fn placements(&self) -> Placements {
        compute_placements(self.images.len(), self.state.stage, &self.params())
    }

    /// Whether a click at `point` lands on the visible Connect button.
    pub fn button_hit(&self, point: Point) -> bool {
        button_hit(&self.button, point)
    }

    /// Activate the Connect button. Returns `false` (and does nothing) while it is hidden.
    pub fn press_button(&self) -> bool {
        if !self.button.is_visible() {
            return false;
        }
        info!("Connect button clicked");
        true
    }

    /// Clear the display and draw the full frame.
    pub fn draw<D>(&self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        display.clear(BLACK).ok();

        for placement in &self.placements() {
            if let Some(image) = self.images.get(placement.image_index) {
                draw_avatar(display, image, placement, CANVAS_ORIGIN);
            }
        }

        draw_main_text(display, &self.main_text);
        draw_connect_button(display, &self.button);
        draw_secondary_text(display, &self.secondary_text);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{SKY_BLUE, WHITE, fade};
    use crate::config::{BORDER_ALPHA, IMAGE_SIZE, RING_IMAGE_SCALE, SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::layout::{ImageRole, RING_CENTER};
    use crate::stage::AnimationStage;
    use crate::test_display::RecordingDisplay;
    use crate::widgets::button_bounds;

    const FRAME_MS: u64 = 16;

    fn images(count: usize) -> Vec<ProfileImage> {
        (0..count)
            .map(|_| ProfileImage::from_pixels(2, 2, vec![WHITE; 4]).unwrap())
            .collect()
    }

    /// Run the screen frame by frame up to `until_ms`.
    fn run(screen: &mut ProfileCircleScreen, until_ms: u64) {
        let mut ms = 0;
        while ms <= until_ms {
            screen.update(ms, FRAME_MS as f32 / 1000.0);
            ms += FRAME_MS;
        }
    }

    // -------------------------------------------------------------------------
    // Timeline
    // -------------------------------------------------------------------------

    #[test]
    fn test_initial_pose() {
        let screen = ProfileCircleScreen::new(images(8));
        assert_eq!(screen.state().stage, AnimationStage::Initial);

        let placements = screen.placements();
        assert_eq!(placements.len(), 8, "Hero plus seven hidden ring slots");
        assert_eq!(placements[0].role, ImageRole::Hero);
        assert_eq!(placements[0].center, RING_CENTER);
        assert!((placements[0].size - IMAGE_SIZE * 1.2).abs() < 1e-3, "Hero starts enlarged");
        assert!(placements[1..].iter().all(|p| !p.is_visible()), "Ring starts hidden");
    }

    #[test]
    fn test_stage_progression() {
        let mut screen = ProfileCircleScreen::new(images(8));

        run(&mut screen, 400);
        assert_eq!(screen.state().stage, AnimationStage::Initial);

        run(&mut screen, 600);
        assert_eq!(screen.state().stage, AnimationStage::FirstImageMovingUp);

        run(&mut screen, 1_400);
        assert_eq!(screen.state().stage, AnimationStage::ImagesAppearing);

        run(&mut screen, 3_200);
        assert_eq!(screen.state().stage, AnimationStage::RotationStarted);
        assert!(!screen.state().show_main_text, "Headline waits for the ring to turn");

        run(&mut screen, 4_200);
        assert!(screen.state().show_main_text);
        assert!(!screen.state().show_button);

        run(&mut screen, 5_600);
        assert_eq!(screen.state().stage, AnimationStage::Complete);
        assert!(screen.state().show_button);
        assert!(screen.state().show_secondary_text);
        assert!(screen.sequence_finished());
    }

    #[test]
    fn test_ring_after_rotation_started() {
        let mut screen = ProfileCircleScreen::new(images(8));
        run(&mut screen, 3_200);

        let placements = screen.placements();
        assert_eq!(placements.len(), 8, "All eight images sit on the ring");
        let ring_size = IMAGE_SIZE * RING_IMAGE_SCALE;
        for placement in &placements {
            assert_eq!(placement.role, ImageRole::Ring);
            assert!((placement.center.distance(RING_CENTER) - 110.0).abs() < 1e-2);
            assert!((placement.size - ring_size).abs() < 1e-3);
            assert_eq!(placement.alpha, 1.0);
        }
    }

    #[test]
    fn test_ring_keeps_rotating_after_complete() {
        let mut screen = ProfileCircleScreen::new(images(3));
        run(&mut screen, 6_000);
        let before = screen.params().rotation_angle;

        assert!(screen.update(7_000, 1.0), "Rotation keeps the screen changing");
        let after = screen.params().rotation_angle;
        assert!((after - before - 14.4).abs() < 0.5, "Ring turns 14.4° per second, got {}", after - before);
    }

    #[test]
    fn test_single_image_has_no_ring_slots() {
        let mut screen = ProfileCircleScreen::new(images(1));
        run(&mut screen, 2_000);
        let placements = screen.placements();
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].role, ImageRole::Hero);
    }

    // -------------------------------------------------------------------------
    // Button
    // -------------------------------------------------------------------------

    #[test]
    fn test_button_inactive_until_revealed() {
        let mut screen = ProfileCircleScreen::new(images(8));
        let center = button_bounds().center();

        run(&mut screen, 4_600);
        assert!(!screen.button_hit(center), "Hidden button ignores clicks");
        assert!(!screen.press_button());

        run(&mut screen, 4_800);
        assert!(screen.button_hit(center));
        assert!(screen.press_button());
    }

    // -------------------------------------------------------------------------
    // Drawing
    // -------------------------------------------------------------------------

    #[test]
    fn test_draw_initial_frame_shows_hero_only() {
        let screen = ProfileCircleScreen::new(images(8));
        let mut display = RecordingDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        screen.draw(&mut display);

        let hero_center = CANVAS_ORIGIN + Point::new(160, 160);
        assert_eq!(display.pixel(hero_center), Some(WHITE), "Hero bitmap at canvas center");
        assert_eq!(display.pixel(button_bounds().center()), Some(BLACK), "Button not revealed yet");
    }

    #[test]
    fn test_draw_complete_frame() {
        let mut screen = ProfileCircleScreen::new(images(8));
        run(&mut screen, 8_000);
        let mut display = RecordingDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        screen.draw(&mut display);

        assert!(display.count_color(fade(SKY_BLUE, BORDER_ALPHA)) > 0, "Avatar borders drawn");
        assert_eq!(display.pixel(CANVAS_ORIGIN + Point::new(160, 160)), Some(BLACK), "Ring center is empty");
        let edge = button_bounds().top_left + Point::new(2, 26);
        assert_ne!(display.pixel(edge), Some(BLACK), "Button filled in");
    }
}
