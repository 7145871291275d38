//! Haptic feedback contract.
//!
//! Feedback is fire-and-forget: sinks return nothing and must not call back
//! into the controller that emitted the event.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HapticFeedback {
    /// The swipe offset crossed the commit threshold.
    ThresholdCrossed,
    /// A swipe action was committed.
    ActionCommitted,
}

pub trait HapticSink {
    fn perform(&self, feedback: HapticFeedback);
}

/// Sink for platforms without a haptic engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl HapticSink for NoHaptics {
    fn perform(&self, feedback: HapticFeedback) {
        log::trace!("haptic {feedback:?} dropped");
    }
}

/// Any `Fn(HapticFeedback)` closure can serve as a sink.
impl<F> HapticSink for F
where
    F: Fn(HapticFeedback),
{
    fn perform(&self, feedback: HapticFeedback) {
        self(feedback)
    }
}
