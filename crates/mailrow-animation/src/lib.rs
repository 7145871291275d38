//! Presentation animations for mailrow.
//!
//! State machines in this workspace change their values instantly and emit
//! an [`OffsetTransition`] describing how the renderer should tween from the
//! old value to the new one. Sampling a transition is a pure function of the
//! clock, so the renderer can interpolate without calling back into the
//! controller.

mod easing;
mod transition;

pub use easing::Easing;
pub use transition::{AnimationSpec, AnimationType, OffsetTransition, SpringSpec};

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
