//! Assertion helpers for swipe row tests.

use mailrow_swipe::SwipeCommitController;
use mailrow_ui_graphics::Rect;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that every offset and flag of the controller is back to zero.
pub fn assert_at_rest(controller: &SwipeCommitController, msg: &str) {
    let state = controller.state();
    assert!(state.is_at_rest(), "{}: state not at rest: {:?}", msg, state);
    assert_eq!(
        controller.effective_offset(),
        0.0,
        "{}: effective offset",
        msg
    );
}
