use mailrow_core::{Clock, Runtime};
use std::cell::Cell;
use std::rc::Rc;

/// Clock that only moves when a test advances it.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn starting_at(millis: u64) -> Rc<Self> {
        Rc::new(Self {
            now: Cell::new(millis),
        })
    }

    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get() + millis);
    }

    pub fn set(&self, millis: u64) {
        assert!(millis >= self.now.get(), "ManualClock must not go backwards");
        self.now.set(millis);
    }

    /// A runtime driven by this clock.
    pub fn runtime(self: &Rc<Self>) -> Runtime {
        Runtime::new(Rc::clone(self) as Rc<dyn Clock>)
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}
