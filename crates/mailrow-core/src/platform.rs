//! Platform abstraction traits for mailrow runtime services.
//!
//! These traits allow the runtime to delegate clock responsibilities to the
//! host platform, so timers can run against a real monotonic clock in the app
//! and a manually advanced one in tests.

/// Provides timing information for the runtime.
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary fixed origin. Must never go
    /// backwards.
    fn now_millis(&self) -> u64;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: u64) -> u64 {
        self.now_millis().saturating_sub(since)
    }
}
