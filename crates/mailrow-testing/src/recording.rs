use mailrow_foundation::{HapticFeedback, HapticSink};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Haptic sink that remembers every event in order.
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    events: RefCell<SmallVec<[HapticFeedback; 8]>>,
}

impl RecordingHaptics {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn events(&self) -> Vec<HapticFeedback> {
        self.events.borrow().to_vec()
    }

    pub fn count(&self, feedback: HapticFeedback) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| **event == feedback)
            .count()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl HapticSink for RecordingHaptics {
    fn perform(&self, feedback: HapticFeedback) {
        self.events.borrow_mut().push(feedback);
    }
}

/// Counts how many times the callbacks it hands out were invoked.
#[derive(Clone, Debug, Default)]
pub struct CallCounter {
    calls: Rc<Cell<usize>>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callback(&self) -> impl Fn() + 'static {
        let calls = Rc::clone(&self.calls);
        move || calls.set(calls.get() + 1)
    }

    pub fn count(&self) -> usize {
        self.calls.get()
    }
}
