//! Core runtime for mailrow.
//!
//! Everything here is UI-thread affine: handles are `Rc` based and must never
//! cross threads. The host drives time by calling
//! [`RuntimeHandle::run_due_timers`] once per frame.

pub mod platform;
mod timer;

pub use platform::Clock;
pub use timer::{Runtime, RuntimeHandle, TimerId, TimerRegistration};

#[cfg(test)]
#[path = "tests/timer_tests.rs"]
mod timer_tests;
