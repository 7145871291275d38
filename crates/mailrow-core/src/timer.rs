use crate::platform::Clock;
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub type TimerId = u64;

struct TimerEntry {
    id: TimerId,
    due_millis: u64,
    callback: Box<dyn FnOnce() + 'static>,
}

struct RuntimeInner {
    clock: Rc<dyn Clock>,
    // Rows rarely hold more than one pending commit each.
    timers: RefCell<SmallVec<[TimerEntry; 4]>>,
    next_timer_id: Cell<TimerId>,
}

impl RuntimeInner {
    fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            timers: RefCell::new(SmallVec::new()),
            next_timer_id: Cell::new(1),
        }
    }

    fn schedule_after(&self, delay_millis: u64, callback: Box<dyn FnOnce() + 'static>) -> TimerId {
        let id = self.next_timer_id.get();
        self.next_timer_id.set(id + 1);
        let due_millis = self.clock.now_millis().saturating_add(delay_millis);
        self.timers.borrow_mut().push(TimerEntry {
            id,
            due_millis,
            callback,
        });
        id
    }

    fn cancel_timer(&self, id: TimerId) -> bool {
        let mut timers = self.timers.borrow_mut();
        match timers.iter().position(|entry| entry.id == id) {
            Some(index) => {
                timers.remove(index);
                log::trace!("timer {id} cancelled");
                true
            }
            None => false,
        }
    }

    fn is_pending(&self, id: TimerId) -> bool {
        self.timers.borrow().iter().any(|entry| entry.id == id)
    }

    fn take_due(&self) -> SmallVec<[TimerEntry; 4]> {
        let now = self.clock.now_millis();
        let mut timers = self.timers.borrow_mut();
        let mut due = SmallVec::new();
        let mut index = 0;
        while index < timers.len() {
            if timers[index].due_millis <= now {
                due.push(timers.remove(index));
            } else {
                index += 1;
            }
        }
        // Ids grow monotonically, so they break ties in schedule order.
        due.sort_by_key(|entry: &TimerEntry| (entry.due_millis, entry.id));
        due
    }

    fn next_due_millis(&self) -> Option<u64> {
        self.timers.borrow().iter().map(|entry| entry.due_millis).min()
    }
}

/// Owner of the timer queue. Dropping it drops every pending callback.
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(clock)),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn now_millis(&self) -> u64 {
        self.inner.clock.now_millis()
    }

    pub fn run_due_timers(&self) -> usize {
        self.handle().run_due_timers()
    }

    pub fn has_pending_timers(&self) -> bool {
        !self.inner.timers.borrow().is_empty()
    }
}

#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    /// Current clock reading, or 0 once the runtime is gone.
    pub fn now_millis(&self) -> u64 {
        self.inner
            .upgrade()
            .map(|inner| inner.clock.now_millis())
            .unwrap_or(0)
    }

    /// Schedules a one-shot callback `delay_millis` from now.
    ///
    /// The returned registration cancels the callback when cancelled or
    /// dropped. If the runtime is already gone the registration is inactive
    /// and the callback never runs.
    pub fn schedule_after(
        &self,
        delay_millis: u64,
        callback: impl FnOnce() + 'static,
    ) -> TimerRegistration {
        match self.inner.upgrade() {
            Some(inner) => {
                let id = inner.schedule_after(delay_millis, Box::new(callback));
                TimerRegistration::new(self.clone(), id)
            }
            None => TimerRegistration::inactive(self.clone()),
        }
    }

    pub fn cancel_timer(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.cancel_timer(id))
            .unwrap_or(false)
    }

    /// Runs every timer whose due time has passed and returns how many ran.
    ///
    /// Due callbacks are removed from the queue before any of them runs, so
    /// a callback may freely schedule or cancel timers. Timers scheduled by a
    /// callback wait for the next call even when already due.
    pub fn run_due_timers(&self) -> usize {
        let Some(inner) = self.inner.upgrade() else {
            return 0;
        };
        let due = inner.take_due();
        drop(inner);
        let count = due.len();
        for entry in due {
            (entry.callback)();
        }
        count
    }

    pub fn has_pending_timers(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| !inner.timers.borrow().is_empty())
            .unwrap_or(false)
    }

    pub fn next_due_millis(&self) -> Option<u64> {
        self.inner.upgrade().and_then(|inner| inner.next_due_millis())
    }

    fn is_pending(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.is_pending(id))
            .unwrap_or(false)
    }
}

/// Handle to a scheduled one-shot timer.
pub struct TimerRegistration {
    runtime: RuntimeHandle,
    id: Option<TimerId>,
}

impl TimerRegistration {
    fn new(runtime: RuntimeHandle, id: TimerId) -> Self {
        Self {
            runtime,
            id: Some(id),
        }
    }

    fn inactive(runtime: RuntimeHandle) -> Self {
        Self { runtime, id: None }
    }

    pub fn id(&self) -> Option<TimerId> {
        self.id
    }

    /// Whether the callback is still waiting to run.
    pub fn is_active(&self) -> bool {
        self.id.is_some_and(|id| self.runtime.is_pending(id))
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_timer(id);
        }
    }
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_timer(id);
        }
    }
}
