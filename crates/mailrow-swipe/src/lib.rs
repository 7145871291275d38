//! Swipe-to-act rows for the mailrow inbox.
//!
//! [`SwipeCommitController`] turns a horizontal drag into at most one
//! committed leading or trailing action per gesture. [`SwipeRow`] wires it to
//! raw pointer events, and [`SwipeIndicator`] tells a renderer what to draw
//! behind the row content.

mod action;
mod config;
mod controller;
mod indicator;
mod row;

pub use action::{presets, ActionStyle, SwipeAction, SwipeActions, SwipeEdge};
pub use config::{SwipeConfig, SwipeConfigError};
pub use controller::{ControllerState, SwipeCommitController};
pub use indicator::{RevealPhase, SwipeIndicator};
pub use row::SwipeRow;

pub use mailrow_foundation::{DragSample, HapticFeedback, HapticSink};

pub mod prelude {
    pub use crate::action::{presets, SwipeAction, SwipeActions, SwipeEdge};
    pub use crate::config::SwipeConfig;
    pub use crate::controller::{ControllerState, SwipeCommitController};
    pub use crate::indicator::{RevealPhase, SwipeIndicator};
    pub use crate::row::SwipeRow;
    pub use mailrow_foundation::{DragSample, HapticFeedback, HapticSink};
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod controller_tests;

#[cfg(test)]
#[path = "tests/indicator_tests.rs"]
mod indicator_tests;
