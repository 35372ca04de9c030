//! Scripted animation timeline.
//!
//! The intro is a fixed list of "wait, then do" steps. Instead of suspending
//! between steps, the frame loop polls [`Sequencer::poll`] with the time
//! elapsed since the screen started; every step whose deadline has passed
//! fires, in order, exactly once.
//!
//! # Timeline
//!
//! | Step | Wait   | At (cumulative) | Action                      |
//! |------|--------|-----------------|-----------------------------|
//! | 1    | 500ms  | 500ms           | stage = FirstImageMovingUp  |
//! | 2    | 800ms  | 1300ms          | stage = ImagesAppearing     |
//! | 3    | 1800ms | 3100ms          | stage = RotationStarted     |
//! | 4    | 1000ms | 4100ms          | show main text              |
//! | 5    | 600ms  | 4700ms          | show Connect button         |
//! | 6    | 500ms  | 5200ms          | show secondary text         |
//! | 7    | 300ms  | 5500ms          | stage = Complete            |
//!
//! A slow frame can make several deadlines pass at once; the returned actions
//! are then applied in timeline order within the same frame.

use heapless::Vec;
use log::{debug, info};

use crate::stage::AnimationStage;

// =============================================================================
// Timeline Definition
// =============================================================================

/// Number of steps in the intro timeline.
pub const TIMELINE_LEN: usize = 7;

/// What a timeline step does once its delay has elapsed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimelineAction {
    /// Advance the animation stage.
    SetStage(AnimationStage),
    /// Reveal the main headline text.
    ShowMainText,
    /// Reveal the Connect button.
    ShowButton,
    /// Reveal the secondary text block.
    ShowSecondaryText,
}

/// One "wait, then act" entry of the timeline.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimelineStep {
    /// Wait after the previous step, in milliseconds.
    pub delay_ms: u32,
    /// Action fired once the wait is over.
    pub action: TimelineAction,
}

/// The intro timeline, in firing order.
pub const TIMELINE: [TimelineStep; TIMELINE_LEN] = [
    TimelineStep {
        delay_ms: 500,
        action: TimelineAction::SetStage(AnimationStage::FirstImageMovingUp),
    },
    TimelineStep {
        delay_ms: 800,
        action: TimelineAction::SetStage(AnimationStage::ImagesAppearing),
    },
    TimelineStep {
        delay_ms: 1800,
        action: TimelineAction::SetStage(AnimationStage::RotationStarted),
    },
    TimelineStep {
        delay_ms: 1000,
        action: TimelineAction::ShowMainText,
    },
    TimelineStep {
        delay_ms: 600,
        action: TimelineAction::ShowButton,
    },
    TimelineStep {
        delay_ms: 500,
        action: TimelineAction::ShowSecondaryText,
    },
    TimelineStep {
        delay_ms: 300,
        action: TimelineAction::SetStage(AnimationStage::Complete),
    },
];

/// Absolute firing time of each step, measured from screen start.
pub const STEP_OFFSETS_MS: [u32; TIMELINE_LEN] = cumulative_offsets(&TIMELINE);

/// Total duration of the scripted part of the intro.
pub const TIMELINE_DURATION_MS: u32 = STEP_OFFSETS_MS[TIMELINE_LEN - 1];

/// Running sum of step delays.
const fn cumulative_offsets(steps: &[TimelineStep; TIMELINE_LEN]) -> [u32; TIMELINE_LEN] {
    let mut offsets = [0u32; TIMELINE_LEN];
    let mut total = 0u32;
    let mut i = 0;
    while i < TIMELINE_LEN {
        total += steps[i].delay_ms;
        offsets[i] = total;
        i += 1;
    }
    offsets
}

// =============================================================================
// Sequencer
// =============================================================================

/// Walks the timeline once. Not restartable.
#[derive(Debug, Default)]
pub struct Sequencer {
    /// Index of the next step to fire.
    next_step: usize,
}

impl Sequencer {
    /// Create a sequencer positioned before the first step.
    pub const fn new() -> Self {
        Self { next_step: 0 }
    }

    /// Fire every step whose deadline is at or before `elapsed_ms`.
    ///
    /// Returns the fired actions in timeline order (empty if none are due).
    pub fn poll(&mut self, elapsed_ms: u64) -> Vec<TimelineAction, TIMELINE_LEN> {
        let mut fired = Vec::new();

        while self.next_step < TIMELINE_LEN && u64::from(STEP_OFFSETS_MS[self.next_step]) <= elapsed_ms {
            let step = TIMELINE[self.next_step];
            info!(
                "Timeline step {}/{} at {}ms: {:?}",
                self.next_step + 1,
                TIMELINE_LEN,
                STEP_OFFSETS_MS[self.next_step],
                step.action
            );
            // Capacity equals the timeline length, so this never fails
            fired.push(step.action).ok();
            self.next_step += 1;
        }

        if !fired.is_empty() && self.finished() {
            info!("Animation sequence complete");
        }
        fired
    }

    /// Whether every step has fired.
    #[inline]
    pub const fn finished(&self) -> bool {
        self.next_step >= TIMELINE_LEN
    }

    /// Deadline of the next pending step, if any.
    #[inline]
    pub const fn next_deadline_ms(&self) -> Option<u32> {
        if self.finished() {
            None
        } else {
            Some(STEP_OFFSETS_MS[self.next_step])
        }
    }
}

// =============================================================================
// Screen State
// =============================================================================

/// Stage and reveal flags mutated by the timeline and read by the renderer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScreenState {
    /// Current animation stage.
    pub stage: AnimationStage,
    /// Headline text visible.
    pub show_main_text: bool,
    /// Connect button visible.
    pub show_button: bool,
    /// Secondary text visible.
    pub show_secondary_text: bool,
}

impl ScreenState {
    /// Initial state: stage `Initial`, nothing revealed.
    pub const fn new() -> Self {
        Self {
            stage: AnimationStage::Initial,
            show_main_text: false,
            show_button: false,
            show_secondary_text: false,
        }
    }

    /// Apply a fired timeline action.
    ///
    /// Stage changes only move forward; an action that would not change the
    /// state is ignored. Returns `true` if the state changed.
    pub fn apply(&mut self, action: TimelineAction) -> bool {
        let changed = match action {
            TimelineAction::SetStage(stage) if stage > self.stage => {
                self.stage = stage;
                true
            }
            TimelineAction::SetStage(_) => false,
            TimelineAction::ShowMainText => !std::mem::replace(&mut self.show_main_text, true),
            TimelineAction::ShowButton => !std::mem::replace(&mut self.show_button, true),
            TimelineAction::ShowSecondaryText => !std::mem::replace(&mut self.show_secondary_text, true),
        };

        if changed {
            debug!("Screen state changed to: {self:?}");
        }
        changed
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Poll once per millisecond and record when each stage change fired.
    fn stage_change_times() -> std::vec::Vec<(u64, AnimationStage)> {
        let mut sequencer = Sequencer::new();
        let mut changes = std::vec::Vec::new();
        for ms in 0..=6_000u64 {
            for action in sequencer.poll(ms) {
                if let TimelineAction::SetStage(stage) = action {
                    changes.push((ms, stage));
                }
            }
        }
        changes
    }

    #[test]
    fn test_step_offsets() {
        assert_eq!(STEP_OFFSETS_MS, [500, 1300, 3100, 4100, 4700, 5200, 5500]);
        assert_eq!(TIMELINE_DURATION_MS, 5500, "Scripted part should last 5.5s");
    }

    #[test]
    fn test_stage_transitions_in_order_without_skips() {
        let changes = stage_change_times();
        assert_eq!(
            changes,
            vec![
                (500, AnimationStage::FirstImageMovingUp),
                (1300, AnimationStage::ImagesAppearing),
                (3100, AnimationStage::RotationStarted),
                (5500, AnimationStage::Complete),
            ]
        );

        let mut stage = AnimationStage::Initial;
        for (_, next) in changes {
            assert_eq!(stage.next(), Some(next), "Stage {next:?} should directly follow {stage:?}");
            stage = next;
        }
    }

    #[test]
    fn test_flags_fire_at_cumulative_times() {
        let mut sequencer = Sequencer::new();
        let mut fired_at = std::vec::Vec::new();
        for ms in 0..=6_000u64 {
            for action in sequencer.poll(ms) {
                if !matches!(action, TimelineAction::SetStage(_)) {
                    fired_at.push((ms, action));
                }
            }
        }
        assert_eq!(
            fired_at,
            vec![
                (4100, TimelineAction::ShowMainText),
                (4700, TimelineAction::ShowButton),
                (5200, TimelineAction::ShowSecondaryText),
            ]
        );
    }

    #[test]
    fn test_nothing_fires_before_first_deadline() {
        let mut sequencer = Sequencer::new();
        assert!(sequencer.poll(0).is_empty());
        assert!(sequencer.poll(499).is_empty(), "First step is due at 500ms");
        assert_eq!(sequencer.next_deadline_ms(), Some(500));
    }

    #[test]
    fn test_late_poll_fires_backlog_in_order() {
        let mut sequencer = Sequencer::new();
        let fired = sequencer.poll(4_200);
        assert_eq!(
            fired.as_slice(),
            &[
                TimelineAction::SetStage(AnimationStage::FirstImageMovingUp),
                TimelineAction::SetStage(AnimationStage::ImagesAppearing),
                TimelineAction::SetStage(AnimationStage::RotationStarted),
                TimelineAction::ShowMainText,
            ]
        );
        assert_eq!(sequencer.next_deadline_ms(), Some(4700));
    }

    #[test]
    fn test_each_step_fires_once() {
        let mut sequencer = Sequencer::new();
        assert_eq!(sequencer.poll(10_000).len(), TIMELINE_LEN);
        assert!(sequencer.finished());
        assert!(sequencer.poll(20_000).is_empty(), "Finished sequencer must not fire again");
        assert_eq!(sequencer.next_deadline_ms(), None);
    }

    #[test]
    fn test_screen_state_applies_timeline() {
        let mut state = ScreenState::new();
        let mut sequencer = Sequencer::new();
        for action in sequencer.poll(10_000) {
            assert!(state.apply(action), "Every timeline action should change state once");
        }
        assert_eq!(
            state,
            ScreenState {
                stage: AnimationStage::Complete,
                show_main_text: true,
                show_button: true,
                show_secondary_text: true,
            }
        );
    }

    #[test]
    fn test_screen_state_rejects_backward_stage() {
        let mut state = ScreenState::new();
        assert!(state.apply(TimelineAction::SetStage(AnimationStage::RotationStarted)));
        assert!(
            !state.apply(TimelineAction::SetStage(AnimationStage::ImagesAppearing)),
            "Stage must never move backward"
        );
        assert!(!state.apply(TimelineAction::SetStage(AnimationStage::RotationStarted)));
        assert_eq!(state.stage, AnimationStage::RotationStarted);
    }

    #[test]
    fn test_screen_state_flags_are_idempotent() {
        let mut state = ScreenState::new();
        assert!(state.apply(TimelineAction::ShowButton));
        assert!(!state.apply(TimelineAction::ShowButton), "Second reveal is a no-op");
        assert!(state.show_button);
        assert!(!state.show_main_text);
    }
}
