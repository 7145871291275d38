use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use mailrow_core::Runtime;
use mailrow_foundation::HapticFeedback::{ActionCommitted, ThresholdCrossed};
use mailrow_testing::{CallCounter, ManualClock, RecordingHaptics};

struct Fixture {
    clock: Rc<ManualClock>,
    runtime: Runtime,
    haptics: Rc<RecordingHaptics>,
    leading: CallCounter,
    trailing: CallCounter,
    controller: SwipeCommitController,
}

impl Fixture {
    fn new(leading: bool, trailing: bool) -> Self {
        let clock = ManualClock::new();
        let runtime = clock.runtime();
        let haptics = RecordingHaptics::new();
        let leading_calls = CallCounter::new();
        let trailing_calls = CallCounter::new();
        let mut actions = SwipeActions::none();
        if leading {
            actions = actions.with_leading(presets::archive(leading_calls.callback()));
        }
        if trailing {
            actions = actions.with_trailing(presets::trash(trailing_calls.callback()));
        }
        let controller = SwipeCommitController::new(actions, haptics.clone(), runtime.handle());
        Self {
            clock,
            runtime,
            haptics,
            leading: leading_calls,
            trailing: trailing_calls,
            controller,
        }
    }

    fn drag(&self, dx: f32) -> f32 {
        self.controller.on_drag_changed(DragSample::horizontal(dx));
        self.controller.effective_offset()
    }

    fn advance(&self, millis: u64) -> usize {
        self.clock.advance(millis);
        self.runtime.run_due_timers()
    }
}

#[test]
fn effective_offset_is_clamped_to_max_distance() {
    let fixture = Fixture::new(true, true);
    for dx in [-1.0e6, -500.0, -101.0, -100.0, -3.0, 0.0, 3.0, 99.0, 100.0, 250.0, 1.0e6] {
        let offset = fixture.drag(dx);
        assert!(offset.abs() <= 100.0, "offset {offset} for dx {dx}");
    }
    assert_eq!(fixture.drag(250.0), 100.0);
    assert_eq!(fixture.drag(-250.0), -100.0);
    assert_eq!(fixture.drag(42.0), 42.0);
}

#[test]
fn offset_stays_clamped_while_commit_is_in_flight() {
    let fixture = Fixture::new(true, true);
    fixture.drag(90.0);
    fixture.controller.on_drag_ended(90.0);
    assert_eq!(fixture.controller.state().committed_offset, 150.0);
    assert_eq!(fixture.controller.effective_offset(), 100.0);
    assert_eq!(fixture.drag(400.0), 100.0);
}

#[test]
fn one_sided_row_never_moves_towards_missing_side() {
    let fixture = Fixture::new(true, false);
    for dx in [-5.0, -50.0, -90.0, -300.0] {
        assert_eq!(fixture.drag(dx), 0.0);
        assert!(!fixture.controller.is_at_trailing_threshold());
    }
    fixture.controller.on_drag_ended(-300.0);

    assert_eq!(fixture.advance(1_000), 0);
    assert_eq!(fixture.leading.count(), 0);
    assert!(fixture.haptics.events().is_empty());
    assert_eq!(fixture.controller.state().committed_offset, 0.0);
}

#[test]
fn leading_commit_fires_exactly_once_even_if_end_repeats() {
    let fixture = Fixture::new(true, true);
    fixture.drag(85.0);
    fixture.controller.on_drag_ended(85.0);
    fixture.controller.on_drag_ended(85.0);
    assert!(fixture.controller.state().has_committed_leading);

    fixture.advance(150);
    fixture.advance(1_000);
    assert_eq!(fixture.leading.count(), 1);
    assert_eq!(fixture.trailing.count(), 0);
    assert_eq!(fixture.haptics.count(ActionCommitted), 1);
}

#[test]
fn commit_threshold_is_inclusive() {
    let fixture = Fixture::new(true, true);
    fixture.controller.on_drag_ended(80.0);
    assert!(fixture.controller.state().has_committed_leading);
    fixture.advance(150);
    assert_eq!(fixture.leading.count(), 1);

    let fixture = Fixture::new(true, true);
    fixture.drag(80.0 - 0.001);
    fixture.controller.on_drag_ended(80.0 - 0.001);
    let state = fixture.controller.state();
    assert!(!state.has_committed_leading);
    assert_eq!(state.committed_offset, 0.0);
    assert_eq!(fixture.transition_target(), 0.0);
    fixture.advance(1_000);
    assert_eq!(fixture.leading.count(), 0);
}

#[test]
fn threshold_haptic_fires_once_per_crossing() {
    let fixture = Fixture::new(true, true);
    fixture.drag(60.0);
    fixture.drag(85.0);
    fixture.drag(95.0);
    fixture.drag(100.0);
    assert_eq!(fixture.haptics.events(), vec![ThresholdCrossed]);

    fixture.drag(70.0);
    assert!(!fixture.controller.state().has_triggered_threshold_haptic);
    fixture.drag(85.0);
    assert_eq!(fixture.haptics.events(), vec![ThresholdCrossed, ThresholdCrossed]);
}

#[test]
fn threshold_haptic_ignores_side_without_action() {
    let fixture = Fixture::new(false, true);
    fixture.controller.check_threshold_crossing(90.0);
    assert!(fixture.haptics.events().is_empty());

    fixture.controller.check_threshold_crossing(-80.0);
    fixture.controller.check_threshold_crossing(-95.0);
    assert_eq!(fixture.haptics.events(), vec![ThresholdCrossed]);
    fixture.controller.check_threshold_crossing(-10.0);
    fixture.controller.check_threshold_crossing(-80.0);
    assert_eq!(fixture.haptics.count(ThresholdCrossed), 2);
}

#[test]
fn end_to_end_leading_commit() {
    let fixture = Fixture::new(true, true);

    let mut offsets = Vec::new();
    let mut armed = Vec::new();
    let mut crossings = Vec::new();
    for dx in [20.0, 50.0, 85.0] {
        offsets.push(fixture.drag(dx));
        armed.push(fixture.controller.is_at_leading_threshold());
        crossings.push(fixture.haptics.count(ThresholdCrossed));
    }
    assert_eq!(offsets, vec![20.0, 50.0, 85.0]);
    assert_eq!(armed, vec![false, false, true]);
    assert_eq!(crossings, vec![0, 0, 1]);

    fixture.controller.on_drag_ended(85.0);
    assert_eq!(fixture.haptics.events(), vec![ThresholdCrossed, ActionCommitted]);
    assert!(!fixture.controller.state().is_dragging);
    assert!(fixture.controller.has_pending_commit());

    fixture.advance(149);
    assert_eq!(fixture.leading.count(), 0);

    fixture.advance(1);
    assert_eq!(fixture.leading.count(), 1);
    assert!(fixture.controller.state().is_at_rest());
    assert_eq!(fixture.controller.effective_offset(), 0.0);
    assert!(!fixture.controller.has_pending_commit());
}

#[test]
fn trailing_commit_is_symmetric() {
    let fixture = Fixture::new(true, true);
    fixture.drag(-40.0);
    fixture.drag(-90.0);
    assert!(fixture.controller.is_at_trailing_threshold());

    fixture.controller.on_drag_ended(-90.0);
    let state = fixture.controller.state();
    assert!(state.has_committed_trailing);
    assert!(!state.has_committed_leading);
    assert_eq!(state.committed_offset, -150.0);
    assert_eq!(fixture.controller.effective_offset(), -100.0);

    fixture.advance(150);
    assert_eq!(fixture.trailing.count(), 1);
    assert_eq!(fixture.leading.count(), 0);
    assert!(fixture.controller.state().is_at_rest());
}

#[test]
fn release_below_threshold_cancels() {
    let fixture = Fixture::new(true, true);
    fixture.drag(50.0);
    fixture.controller.on_drag_ended(50.0);

    let state = fixture.controller.state();
    assert_eq!(state.committed_offset, 0.0);
    assert_eq!(state.live_drag_delta, 0.0);
    assert!(!state.has_triggered_threshold_haptic);
    assert!(!state.is_dragging);
    assert_eq!(fixture.transition_target(), 0.0);

    assert_eq!(fixture.advance(1_000), 0);
    assert_eq!(fixture.leading.count(), 0);
    assert!(fixture.haptics.events().is_empty());
}

#[test]
fn release_after_backing_off_clears_armed_haptic() {
    let fixture = Fixture::new(true, true);
    fixture.drag(90.0);
    assert!(fixture.controller.state().has_triggered_threshold_haptic);
    fixture.controller.on_drag_ended(60.0);
    assert!(!fixture.controller.state().has_triggered_threshold_haptic);

    fixture.drag(90.0);
    assert_eq!(fixture.haptics.count(ThresholdCrossed), 2);
}

#[test]
fn vertical_samples_are_ignored() {
    let fixture = Fixture::new(true, true);
    fixture
        .controller
        .on_drag_changed(DragSample::new(30.0, 40.0));
    fixture
        .controller
        .on_drag_changed(DragSample::new(-30.0, 30.0));
    let state = fixture.controller.state();
    assert!(!state.is_dragging);
    assert_eq!(state.live_drag_delta, 0.0);
    assert_eq!(fixture.controller.effective_offset(), 0.0);
}

#[test]
fn inert_row_never_reacts() {
    let fixture = Fixture::new(false, false);
    for dx in [-200.0, -80.0, 80.0, 200.0] {
        assert_eq!(fixture.drag(dx), 0.0);
    }
    fixture.controller.on_drag_ended(200.0);
    fixture.controller.on_drag_ended(-200.0);

    assert!(fixture.haptics.events().is_empty());
    assert!(!fixture.runtime.has_pending_timers());
    assert!(!fixture.controller.state().has_commit_in_flight());
}

#[test]
fn opposite_commit_is_blocked_while_one_is_in_flight() {
    let fixture = Fixture::new(true, true);
    fixture.controller.on_drag_ended(90.0);
    fixture.controller.on_drag_ended(-90.0);

    let state = fixture.controller.state();
    assert!(state.has_committed_leading);
    assert!(!state.has_committed_trailing);

    fixture.advance(150);
    assert_eq!(fixture.leading.count(), 1);
    assert_eq!(fixture.trailing.count(), 0);
}

#[test]
fn reset_during_commit_delay_keeps_pending_action() {
    let fixture = Fixture::new(true, true);
    fixture.drag(90.0);
    fixture.controller.on_drag_ended(90.0);
    fixture.controller.reset_state();
    assert!(!fixture.controller.state().has_commit_in_flight());
    assert!(fixture.controller.has_pending_commit());

    // The flags are clear, but the leading action has not run yet.
    fixture.drag(-90.0);
    fixture.controller.on_drag_ended(-90.0);
    assert!(!fixture.controller.state().has_committed_trailing);

    fixture.advance(1_000);
    assert_eq!(fixture.leading.count(), 1);
    assert_eq!(fixture.trailing.count(), 0);
    assert_eq!(fixture.haptics.count(ActionCommitted), 1);
    assert!(fixture.controller.state().is_at_rest());

    fixture.drag(-90.0);
    fixture.controller.on_drag_ended(-90.0);
    fixture.advance(150);
    assert_eq!(fixture.trailing.count(), 1);
}

#[test]
fn gesture_started_during_commit_delay_survives_reset() {
    let fixture = Fixture::new(true, true);
    fixture.drag(90.0);
    fixture.controller.on_drag_ended(90.0);
    fixture.advance(50);

    fixture.drag(40.0);
    fixture.drag(90.0);
    assert_eq!(fixture.controller.effective_offset(), 100.0);

    fixture.advance(100);
    assert_eq!(fixture.leading.count(), 1);
    let state = fixture.controller.state();
    assert_eq!(state.committed_offset, 0.0);
    assert_eq!(state.live_drag_delta, 90.0);
    assert!(!state.has_commit_in_flight());
    assert!(!fixture.controller.has_pending_commit());
    assert_eq!(fixture.controller.effective_offset(), 90.0);
    assert_eq!(fixture.transition_target(), 90.0);

    fixture.controller.on_drag_ended(90.0);
    assert!(fixture.controller.state().has_committed_leading);
    fixture.advance(150);
    assert_eq!(fixture.leading.count(), 2);
    assert_eq!(fixture.haptics.count(ActionCommitted), 2);
    assert!(fixture.controller.state().is_at_rest());
}

#[test]
fn teardown_cancels_pending_commit() {
    let fixture = Fixture::new(true, true);
    fixture.drag(90.0);
    fixture.controller.on_drag_ended(90.0);
    fixture.controller.cancel();
    let frozen = fixture.controller.state();

    assert_eq!(fixture.advance(500), 0);
    assert_eq!(fixture.leading.count(), 0);
    assert!(fixture.controller.is_disposed());
    assert!(!fixture.controller.has_pending_commit());

    fixture.drag(-90.0);
    fixture.controller.on_drag_ended(-90.0);
    fixture.controller.reset_state();
    assert_eq!(fixture.controller.state(), frozen);
    assert_eq!(fixture.trailing.count(), 0);
}

#[test]
fn dropping_controller_cancels_pending_commit() {
    let fixture = Fixture::new(true, true);
    fixture.controller.on_drag_ended(90.0);
    assert!(fixture.runtime.has_pending_timers());

    let Fixture {
        clock,
        runtime,
        leading,
        controller,
        ..
    } = fixture;
    drop(controller);

    assert!(!runtime.has_pending_timers());
    clock.advance(500);
    assert_eq!(runtime.run_due_timers(), 0);
    assert_eq!(leading.count(), 0);
}

#[test]
fn action_may_tear_down_its_own_row() {
    let clock = ManualClock::new();
    let runtime = clock.runtime();
    let slot: Rc<RefCell<Option<SwipeCommitController>>> = Rc::new(RefCell::new(None));
    let calls = CallCounter::new();
    let action = {
        let slot = Rc::clone(&slot);
        let count = calls.callback();
        move || {
            count();
            if let Some(controller) = slot.borrow().as_ref() {
                controller.cancel();
            }
        }
    };
    let controller = SwipeCommitController::new(
        SwipeActions::none().with_leading(presets::archive(action)),
        Rc::new(mailrow_foundation::NoHaptics),
        runtime.handle(),
    );
    slot.borrow_mut().replace(controller.clone());

    controller.on_drag_ended(120.0);
    clock.advance(150);
    assert_eq!(runtime.run_due_timers(), 1);

    assert_eq!(calls.count(), 1);
    assert!(controller.is_disposed());
    assert!(
        controller.state().has_committed_leading,
        "reset must not run after teardown"
    );
    slot.borrow_mut().take();
}

#[test]
fn system_cancel_snaps_back_without_commit() {
    let fixture = Fixture::new(true, true);
    fixture.drag(95.0);
    fixture.controller.on_drag_cancelled();

    assert!(fixture.controller.state().is_at_rest());
    fixture.advance(1_000);
    assert_eq!(fixture.leading.count(), 0);
    assert_eq!(fixture.haptics.events(), vec![ThresholdCrossed]);
}

#[test]
fn commit_animation_slides_past_max_distance() {
    let fixture = Fixture::new(true, true);
    fixture.drag(85.0);
    fixture.controller.on_drag_ended(85.0);

    let transition = fixture.controller.transition();
    assert_eq!(transition.from, 85.0);
    assert_eq!(transition.to, 150.0);
    assert_eq!(fixture.controller.presentation_offset(), 85.0);

    fixture.advance(100);
    let mid = fixture.controller.presentation_offset();
    assert!(mid > 85.0 && mid < 150.0, "mid-slide offset {mid}");

    fixture.advance(50);
    assert_eq!(fixture.transition_target(), 0.0);
    fixture.advance(5_000);
    assert_eq!(fixture.controller.presentation_offset(), 0.0);
}

#[test]
fn custom_config_is_validated() {
    let clock = ManualClock::new();
    let runtime = clock.runtime();
    let result = SwipeCommitController::with_config(
        SwipeConfig::default().with_thresholds(90.0, 80.0, 100.0),
        SwipeActions::none(),
        RecordingHaptics::new(),
        runtime.handle(),
    );
    assert!(matches!(result, Err(SwipeConfigError::ThresholdOrder { .. })));

    let controller = SwipeCommitController::with_config(
        SwipeConfig::default()
            .with_thresholds(20.0, 50.0, 60.0)
            .with_commit_delay_millis(10),
        SwipeActions::none().with_leading(presets::star(|| {})),
        RecordingHaptics::new(),
        runtime.handle(),
    )
    .expect("valid config");
    controller.on_drag_changed(DragSample::horizontal(55.0));
    assert!(controller.is_at_leading_threshold());
    controller.on_drag_ended(55.0);
    assert_eq!(controller.state().committed_offset, 110.0);
    clock.advance(10);
    assert_eq!(runtime.run_due_timers(), 1);
    assert!(controller.state().is_at_rest());
}

impl Fixture {
    fn transition_target(&self) -> f32 {
        self.controller.transition().to
    }
}
