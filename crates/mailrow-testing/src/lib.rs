//! Testing utilities and harness for mailrow

pub mod clock;
pub mod recording;
pub mod robot;
pub mod robot_assertions;

pub use clock::ManualClock;
pub use recording::{CallCounter, RecordingHaptics};
pub use robot::SwipeRobot;

pub mod prelude {
    pub use crate::clock::ManualClock;
    pub use crate::recording::{CallCounter, RecordingHaptics};
    pub use crate::robot::SwipeRobot;
    pub use crate::robot_assertions::*;
}
