//! Foundation elements for mailrow: pointer input, drag detection and the
//! haptic feedback contract.

pub mod gesture_constants;
pub mod gestures;
pub mod haptics;
pub mod input;

pub use gestures::{DragSample, DragUpdate, HorizontalDragDetector};
pub use haptics::{HapticFeedback, HapticSink, NoHaptics};
pub use input::{PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::gestures::*;
    pub use crate::haptics::*;
    pub use crate::input::*;
}

#[cfg(test)]
#[path = "tests/drag_detector_tests.rs"]
mod drag_detector_tests;
