//! Robot-style driver for a single swipe row.
//!
//! ```
//! use mailrow_testing::SwipeRobot;
//!
//! let mut robot = SwipeRobot::with_sides(true, true);
//! robot.drag_through(&[20.0, 50.0, 85.0]);
//! robot.release(85.0);
//! robot.advance_time(150);
//! assert_eq!(robot.leading_calls(), 1);
//! ```

use std::rc::Rc;

use mailrow_core::Runtime;
use mailrow_foundation::{DragSample, HapticFeedback, PointerEvent};
use mailrow_swipe::{
    SwipeAction, SwipeActions, SwipeCommitController, SwipeConfig, SwipeConfigError, SwipeRow,
};
use mailrow_ui_graphics::Color;

use crate::clock::ManualClock;
use crate::recording::{CallCounter, RecordingHaptics};

/// Owns a row, its runtime and a manual clock, and records what the row did.
pub struct SwipeRobot {
    clock: Rc<ManualClock>,
    runtime: Runtime,
    haptics: Rc<RecordingHaptics>,
    leading: CallCounter,
    trailing: CallCounter,
    row: SwipeRow,
}

impl SwipeRobot {
    /// Default thresholds; `leading`/`trailing` choose which sides get a
    /// counting action.
    pub fn with_sides(leading: bool, trailing: bool) -> Self {
        match Self::with_config(SwipeConfig::default(), leading, trailing) {
            Ok(robot) => robot,
            Err(err) => panic!("default config rejected: {err}"),
        }
    }

    pub fn with_config(
        config: SwipeConfig,
        leading: bool,
        trailing: bool,
    ) -> Result<Self, SwipeConfigError> {
        let clock = ManualClock::new();
        let runtime = clock.runtime();
        let haptics = RecordingHaptics::new();
        let leading_calls = CallCounter::new();
        let trailing_calls = CallCounter::new();

        let mut actions = SwipeActions::none();
        if leading {
            actions = actions.with_leading(SwipeAction::new(
                "archivebox",
                "Archive",
                Color::ARCHIVE,
                leading_calls.callback(),
            ));
        }
        if trailing {
            actions = actions.with_trailing(SwipeAction::new(
                "trash",
                "Trash",
                Color::TRASH,
                trailing_calls.callback(),
            ));
        }

        let controller =
            SwipeCommitController::with_config(config, actions, haptics.clone(), runtime.handle())?;
        Ok(Self {
            clock,
            runtime,
            haptics,
            leading: leading_calls,
            trailing: trailing_calls,
            row: SwipeRow::new(controller),
        })
    }

    pub fn controller(&self) -> &SwipeCommitController {
        self.row.controller()
    }

    pub fn row_mut(&mut self) -> &mut SwipeRow {
        &mut self.row
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    /// Sends one horizontal drag frame and returns the resulting effective
    /// offset.
    pub fn drag(&mut self, dx: f32) -> f32 {
        self.drag_sample(DragSample::horizontal(dx))
    }

    pub fn drag_sample(&mut self, sample: DragSample) -> f32 {
        self.controller().on_drag_changed(sample);
        self.controller().effective_offset()
    }

    /// Sends each translation in turn and collects the effective offsets.
    pub fn drag_through(&mut self, translations: &[f32]) -> Vec<f32> {
        translations.iter().map(|dx| self.drag(*dx)).collect()
    }

    pub fn release(&mut self, final_dx: f32) {
        self.controller().on_drag_ended(final_dx);
    }

    /// Presses at `x`, moves through `steps` evenly spaced points to
    /// `x + distance`, and lifts there. Returns whether the row claimed the
    /// gesture.
    pub fn swipe_pointer(&mut self, x: f32, distance: f32, steps: usize) -> bool {
        let y = 20.0;
        let mut claimed = self.row.on_pointer_event(&PointerEvent::down(x, y));
        let steps = steps.max(1);
        for step in 1..=steps {
            let px = x + distance * step as f32 / steps as f32;
            claimed |= self.row.on_pointer_event(&PointerEvent::moved(px, y));
        }
        claimed |= self.row.on_pointer_event(&PointerEvent::up(x + distance, y));
        claimed
    }

    /// Moves the clock forward and runs every timer that became due.
    pub fn advance_time(&mut self, millis: u64) -> usize {
        self.clock.advance(millis);
        self.runtime.run_due_timers()
    }

    pub fn haptics(&self) -> Vec<HapticFeedback> {
        self.haptics.events()
    }

    pub fn haptic_count(&self, feedback: HapticFeedback) -> usize {
        self.haptics.count(feedback)
    }

    pub fn leading_calls(&self) -> usize {
        self.leading.count()
    }

    pub fn trailing_calls(&self) -> usize {
        self.trailing.count()
    }

    pub fn has_pending_timers(&self) -> bool {
        self.runtime.has_pending_timers()
    }
}
