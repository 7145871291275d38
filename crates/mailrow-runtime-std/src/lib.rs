//! Standard library backed runtime services for mailrow.

use mailrow_core::{Clock, Runtime};
use std::rc::Rc;
use web_time::Instant;

/// Monotonic clock measuring milliseconds since its creation.
#[derive(Clone, Copy, Debug)]
pub struct StdClock {
    origin: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Runtime backed by the host's monotonic clock.
pub fn std_runtime() -> Runtime {
    Runtime::new(Rc::new(StdClock::new()))
}
