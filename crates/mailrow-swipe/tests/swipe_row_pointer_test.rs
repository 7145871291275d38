//! End-to-end tests driving a swipe row with raw pointer events.

use mailrow_foundation::{HapticFeedback, PointerEvent};
use mailrow_testing::prelude::*;

#[test]
fn pointer_swipe_past_threshold_commits_leading_action() {
    let mut robot = SwipeRobot::with_sides(true, true);

    let claimed = robot.swipe_pointer(10.0, 120.0, 6);
    assert!(claimed, "horizontal swipe should be claimed");
    assert_eq!(
        robot.haptics(),
        vec![HapticFeedback::ThresholdCrossed, HapticFeedback::ActionCommitted]
    );

    robot.advance_time(150);
    assert_eq!(robot.leading_calls(), 1);
    assert_at_rest(robot.controller(), "after commit");
}

#[test]
fn short_pointer_swipe_snaps_back() {
    let mut robot = SwipeRobot::with_sides(true, true);

    robot.swipe_pointer(200.0, -60.0, 4);
    robot.advance_time(1_000);

    assert_eq!(robot.trailing_calls(), 0);
    assert!(robot.haptics().is_empty());
    assert_at_rest(robot.controller(), "after snap back");
}

#[test]
fn vertical_scroll_is_not_hijacked() {
    let mut robot = SwipeRobot::with_sides(true, true);
    let row = robot.row_mut();

    let down = PointerEvent::down(50.0, 10.0);
    let scroll = PointerEvent::moved(52.0, 90.0);
    assert!(!row.on_pointer_event(&down));
    assert!(!row.on_pointer_event(&scroll));
    assert!(!scroll.is_consumed());

    // Lifting far to the right after a vertical scroll must not commit.
    let up = PointerEvent::up(150.0, 300.0);
    assert!(!row.on_pointer_event(&up));

    robot.advance_time(500);
    assert_eq!(robot.leading_calls(), 0);
    assert_eq!(robot.controller().effective_offset(), 0.0);
}

#[test]
fn claimed_moves_are_consumed() {
    let mut robot = SwipeRobot::with_sides(true, false);
    let row = robot.row_mut();

    row.on_pointer_event(&PointerEvent::down(0.0, 0.0));
    let inside_slop = PointerEvent::moved(5.0, 0.0);
    assert!(!row.on_pointer_event(&inside_slop));
    assert!(!inside_slop.is_consumed());

    let swipe = PointerEvent::moved(30.0, 2.0);
    assert!(row.on_pointer_event(&swipe));
    assert!(swipe.is_consumed());
    assert_eq!(row.controller().effective_offset(), 30.0);
}

#[test]
fn pointer_cancel_releases_without_commit() {
    let mut robot = SwipeRobot::with_sides(true, true);
    let row = robot.row_mut();
    row.on_pointer_event(&PointerEvent::down(0.0, 0.0));
    row.on_pointer_event(&PointerEvent::moved(95.0, 0.0));
    row.on_pointer_event(&PointerEvent::cancel());

    robot.advance_time(500);
    assert_eq!(robot.leading_calls(), 0);
    assert_at_rest(robot.controller(), "after cancel");
}

#[test]
fn disposing_row_mid_delay_drops_action() {
    let mut robot = SwipeRobot::with_sides(true, true);
    robot.swipe_pointer(0.0, -110.0, 3);
    assert!(robot.has_pending_timers());

    robot.row_mut().dispose();
    assert!(!robot.has_pending_timers());
    robot.advance_time(500);
    assert_eq!(robot.trailing_calls(), 0);
}

#[test]
fn second_swipe_during_commit_delay_commits_again() {
    let mut robot = SwipeRobot::with_sides(true, true);
    assert!(robot.swipe_pointer(10.0, 90.0, 3));
    robot.advance_time(50);

    let row = robot.row_mut();
    row.on_pointer_event(&PointerEvent::down(10.0, 20.0));
    row.on_pointer_event(&PointerEvent::moved(50.0, 20.0));
    row.on_pointer_event(&PointerEvent::moved(100.0, 20.0));

    // The first action fires while the finger is still down.
    robot.advance_time(100);
    assert_eq!(robot.leading_calls(), 1);
    let state = robot.controller().state();
    assert_eq!(state.live_drag_delta, 90.0);
    assert_eq!(robot.controller().effective_offset(), 90.0);

    let up = PointerEvent::up(100.0, 20.0);
    assert!(robot.row_mut().on_pointer_event(&up));
    assert!(robot.controller().state().has_committed_leading);

    robot.advance_time(150);
    assert_eq!(robot.leading_calls(), 2);
    assert_at_rest(robot.controller(), "after second commit");
}

#[test]
fn reset_during_commit_delay_keeps_pending_action() {
    let mut robot = SwipeRobot::with_sides(true, true);
    robot.swipe_pointer(10.0, 90.0, 3);
    robot.controller().reset_state();

    robot.swipe_pointer(200.0, -90.0, 3);
    robot.advance_time(1_000);

    assert_eq!(robot.leading_calls(), 1);
    assert_eq!(robot.trailing_calls(), 0);
    assert_eq!(robot.haptic_count(HapticFeedback::ActionCommitted), 1);
    assert_at_rest(robot.controller(), "after the pending action ran");
}
