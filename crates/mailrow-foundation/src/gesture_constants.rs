//! Shared gesture constants for swipe rows.
//!
//! All values are in logical points. The swipe thresholds must keep the
//! ordering `REVEAL_THRESHOLD < COMMIT_THRESHOLD < MAX_SWIPE_DISTANCE`.

/// Touch slop in logical points.
///
/// A row only claims a gesture once it has travelled further than this
/// horizontally, so taps and small jitters still reach the row's content.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Offset past which the action icon and label are revealed.
pub const REVEAL_THRESHOLD: f32 = 40.0;

/// Offset at which releasing the gesture commits the action.
pub const COMMIT_THRESHOLD: f32 = 80.0;

/// Furthest the row content follows the finger.
pub const MAX_SWIPE_DISTANCE: f32 = 100.0;

/// How far beyond `MAX_SWIPE_DISTANCE` a committed row slides off.
pub const COMMIT_OVERSHOOT: f32 = 50.0;

/// Delay between the commit haptic and the action callback.
pub const COMMIT_DELAY_MILLIS: u64 = 150;
