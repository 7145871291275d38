//! The swipe commit state machine.
//!
//! The controller owns a handful of floats and flags per row. Every mutator
//! re-derives the effective offset and runs the threshold check before
//! returning, and every state change records an [`OffsetTransition`] that the
//! renderer interpolates on its own clock.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use mailrow_animation::{AnimationType, OffsetTransition};
use mailrow_core::{RuntimeHandle, TimerRegistration};
use mailrow_foundation::{DragSample, HapticFeedback, HapticSink};
use smallvec::SmallVec;

use crate::action::{SwipeActions, SwipeEdge};
use crate::config::{SwipeConfig, SwipeConfigError};
use crate::indicator::SwipeIndicator;

type Feedback = SmallVec<[HapticFeedback; 2]>;

/// Mutable per-row state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerState {
    /// Offset that persists between gestures. Reset to 0 after every commit
    /// or cancel.
    pub committed_offset: f32,
    /// Translation of the gesture in progress; 0 when no gesture is active.
    pub live_drag_delta: f32,
    pub has_committed_leading: bool,
    pub has_committed_trailing: bool,
    /// Set while the offset sits past the commit threshold.
    pub has_triggered_threshold_haptic: bool,
    pub is_dragging: bool,
}

impl ControllerState {
    pub fn has_commit_in_flight(&self) -> bool {
        self.has_committed_leading || self.has_committed_trailing
    }

    /// All offsets zero and all flags cleared.
    pub fn is_at_rest(&self) -> bool {
        *self == ControllerState::default()
    }
}

struct PendingCommit {
    edge: SwipeEdge,
    registration: TimerRegistration,
}

struct ControllerInner {
    config: SwipeConfig,
    actions: SwipeActions,
    haptics: Rc<dyn HapticSink>,
    runtime: RuntimeHandle,
    state: ControllerState,
    transition: OffsetTransition,
    pending_commit: Option<PendingCommit>,
    disposed: bool,
}

impl ControllerInner {
    fn clamp_offset(&self, raw: f32) -> f32 {
        let max = self.config.max_swipe_distance;
        if raw > 0.0 {
            if self.actions.leading.is_some() {
                raw.min(max)
            } else {
                0.0
            }
        } else if self.actions.trailing.is_some() {
            raw.max(-max)
        } else {
            0.0
        }
    }

    fn effective_offset(&self) -> f32 {
        self.clamp_offset(self.state.committed_offset + self.state.live_drag_delta)
    }

    fn check_threshold_crossing(&mut self, offset: f32, feedback: &mut Feedback) {
        let threshold = self.config.commit_threshold;
        let armed = self.state.has_triggered_threshold_haptic;
        if offset >= threshold && self.actions.leading.is_some() && !armed {
            log::trace!("leading threshold crossed at {offset}");
            feedback.push(HapticFeedback::ThresholdCrossed);
            self.state.has_triggered_threshold_haptic = true;
        } else if offset <= -threshold && self.actions.trailing.is_some() && !armed {
            log::trace!("trailing threshold crossed at {offset}");
            feedback.push(HapticFeedback::ThresholdCrossed);
            self.state.has_triggered_threshold_haptic = true;
        } else if offset.abs() < threshold {
            self.state.has_triggered_threshold_haptic = false;
        }
    }

    fn animate_to(&mut self, target: f32, animation: AnimationType) {
        let now = self.runtime.now_millis();
        let from = self.transition.value_at(now);
        self.transition = OffsetTransition::new(from, target, animation, now);
    }

    fn track_finger(&mut self) {
        let now = self.runtime.now_millis();
        self.transition = OffsetTransition::snap(self.effective_offset(), now);
    }

    fn settle(&mut self, feedback: &mut Feedback) {
        self.state.committed_offset = 0.0;
        self.state.has_triggered_threshold_haptic = false;
        let animation = self.config.settle_animation;
        self.animate_to(0.0, animation);
        let offset = self.effective_offset();
        self.check_threshold_crossing(offset, feedback);
    }

    // A gesture may already be under way when the post-commit reset lands;
    // its live delta survives so the row keeps following the finger.
    fn reset(&mut self, feedback: &mut Feedback) {
        self.state = ControllerState {
            live_drag_delta: self.state.live_drag_delta,
            ..ControllerState::default()
        };
        let animation = self.config.settle_animation;
        let offset = self.effective_offset();
        self.animate_to(offset, animation);
        self.check_threshold_crossing(offset, feedback);
    }

    /// A commit counts as in flight until its action has run, even if
    /// `reset_state` already cleared the flags.
    fn commit_in_flight(&self) -> bool {
        self.state.has_commit_in_flight() || self.pending_commit.is_some()
    }
}

/// Converts a horizontal drag into at most one committed action per gesture.
///
/// The controller is a cheap handle; clones share the same row state. It is
/// bound to the UI thread and must never be touched from anywhere else.
#[derive(Clone)]
pub struct SwipeCommitController {
    inner: Rc<RefCell<ControllerInner>>,
}

impl SwipeCommitController {
    /// Creates a controller with the default thresholds.
    pub fn new(
        actions: SwipeActions,
        haptics: Rc<dyn HapticSink>,
        runtime: RuntimeHandle,
    ) -> Self {
        Self::build(SwipeConfig::default(), actions, haptics, runtime)
    }

    pub fn with_config(
        config: SwipeConfig,
        actions: SwipeActions,
        haptics: Rc<dyn HapticSink>,
        runtime: RuntimeHandle,
    ) -> Result<Self, SwipeConfigError> {
        config.validate()?;
        Ok(Self::build(config, actions, haptics, runtime))
    }

    fn build(
        config: SwipeConfig,
        actions: SwipeActions,
        haptics: Rc<dyn HapticSink>,
        runtime: RuntimeHandle,
    ) -> Self {
        let transition = OffsetTransition::snap(0.0, runtime.now_millis());
        let inner = ControllerInner {
            config,
            actions,
            haptics,
            runtime,
            state: ControllerState::default(),
            transition,
            pending_commit: None,
            disposed: false,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn config(&self) -> SwipeConfig {
        self.inner.borrow().config
    }

    pub fn state(&self) -> ControllerState {
        self.inner.borrow().state
    }

    /// `committed + live` clamped to the configured sides.
    ///
    /// Stays within `±max_swipe_distance` and is 0 on a side without an
    /// action.
    pub fn effective_offset(&self) -> f32 {
        self.inner.borrow().effective_offset()
    }

    pub fn is_at_leading_threshold(&self) -> bool {
        let inner = self.inner.borrow();
        inner.effective_offset() >= inner.config.commit_threshold
    }

    pub fn is_at_trailing_threshold(&self) -> bool {
        let inner = self.inner.borrow();
        inner.effective_offset() <= -inner.config.commit_threshold
    }

    /// The tween the renderer should be playing.
    pub fn transition(&self) -> OffsetTransition {
        self.inner.borrow().transition
    }

    /// Offset to draw the row content at right now.
    ///
    /// Unlike [`effective_offset`](Self::effective_offset) this follows the
    /// commit animation past `max_swipe_distance` while the row slides off.
    pub fn presentation_offset(&self) -> f32 {
        let inner = self.inner.borrow();
        inner.transition.value_at(inner.runtime.now_millis())
    }

    pub fn indicator(&self) -> SwipeIndicator {
        let inner = self.inner.borrow();
        SwipeIndicator::resolve(inner.effective_offset(), &inner.config, &inner.actions)
    }

    pub fn has_pending_commit(&self) -> bool {
        self.inner
            .borrow()
            .pending_commit
            .as_ref()
            .is_some_and(|pending| pending.registration.is_active())
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.borrow().disposed
    }

    /// Feeds one gesture frame. Samples that are not horizontal-dominant are
    /// ignored so vertical list scrolling is never hijacked.
    pub fn on_drag_changed(&self, sample: DragSample) {
        let mut feedback = Feedback::new();
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                log::debug!("drag sample after teardown ignored");
                return;
            }
            if !sample.is_horizontal() {
                return;
            }
            inner.state.live_drag_delta = sample.dx;
            inner.state.is_dragging = true;
            inner.track_finger();
            let offset = inner.effective_offset();
            inner.check_threshold_crossing(offset, &mut feedback);
        }
        self.emit(feedback);
    }

    /// Runs the threshold check against `offset` and fires the crossing
    /// haptic when it arms.
    pub fn check_threshold_crossing(&self, offset: f32) {
        let mut feedback = Feedback::new();
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.check_threshold_crossing(offset, &mut feedback);
        }
        self.emit(feedback);
    }

    /// Terminal event of a gesture: commits or snaps back.
    pub fn on_drag_ended(&self, final_translation_x: f32) {
        let mut feedback = Feedback::new();
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                log::debug!("drag end after teardown ignored");
                return;
            }
            inner.state.is_dragging = false;
            inner.state.live_drag_delta = 0.0;

            let current = inner.clamp_offset(inner.state.committed_offset + final_translation_x);
            let threshold = inner.config.commit_threshold;
            let in_flight = inner.commit_in_flight();

            let edge = if current >= threshold
                && inner.actions.leading.is_some()
                && !inner.state.has_committed_leading
                && !in_flight
            {
                Some(SwipeEdge::Leading)
            } else if current <= -threshold
                && inner.actions.trailing.is_some()
                && !inner.state.has_committed_trailing
                && !in_flight
            {
                Some(SwipeEdge::Trailing)
            } else {
                None
            };

            match edge {
                Some(edge) => {
                    log::debug!("swipe committed on {edge:?} edge at offset {current}");
                    self.begin_commit(&mut inner, edge, &mut feedback);
                }
                None => {
                    log::debug!("swipe cancelled at offset {current}");
                    inner.settle(&mut feedback);
                }
            }
        }
        self.emit(feedback);
    }

    /// The gesture was taken away by the system; snap back without
    /// committing.
    pub fn on_drag_cancelled(&self) {
        let mut feedback = Feedback::new();
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.state.is_dragging = false;
            inner.state.live_drag_delta = 0.0;
            log::debug!("swipe gesture cancelled by the system");
            inner.settle(&mut feedback);
        }
        self.emit(feedback);
    }

    /// Returns the committed offset to 0 and clears every flag. A gesture in
    /// progress keeps its live delta. A pending commit still fires.
    pub fn reset_state(&self) {
        let mut feedback = Feedback::new();
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            log::debug!("swipe state reset");
            inner.reset(&mut feedback);
        }
        self.emit(feedback);
    }

    /// Teardown hook for when the row is unmounted.
    ///
    /// Cancels a pending commit and makes every later call a no-op, so no
    /// action or reset can run after this returns.
    pub fn cancel(&self) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.disposed = true;
            inner.pending_commit.take()
        };
        if let Some(pending) = pending {
            log::debug!("pending {:?} commit cancelled by teardown", pending.edge);
            pending.registration.cancel();
        }
    }

    fn begin_commit(&self, inner: &mut ControllerInner, edge: SwipeEdge, feedback: &mut Feedback) {
        match edge {
            SwipeEdge::Leading => inner.state.has_committed_leading = true,
            SwipeEdge::Trailing => inner.state.has_committed_trailing = true,
        }
        let target = edge.sign() * inner.config.commit_target();
        inner.state.committed_offset = target;
        let animation = inner.config.commit_animation;
        inner.animate_to(target, animation);
        let offset = inner.effective_offset();
        inner.check_threshold_crossing(offset, feedback);
        feedback.push(HapticFeedback::ActionCommitted);

        let weak = Rc::downgrade(&self.inner);
        let delay = inner.config.commit_delay_millis;
        let registration = inner
            .runtime
            .schedule_after(delay, move || Self::finish_commit(&weak, edge));
        inner.pending_commit = Some(PendingCommit { edge, registration });
    }

    fn finish_commit(weak: &Weak<RefCell<ControllerInner>>, edge: SwipeEdge) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let this = Self { inner };

        let callback = {
            let mut inner = this.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.pending_commit = None;
            inner.actions.get(edge).map(|action| action.callback())
        };
        if let Some(callback) = callback {
            callback();
        }
        // The action may have torn the row down; reset_state is a no-op then.
        this.reset_state();
    }

    fn emit(&self, feedback: Feedback) {
        if feedback.is_empty() {
            return;
        }
        let haptics = Rc::clone(&self.inner.borrow().haptics);
        for event in feedback {
            haptics.perform(event);
        }
    }
}
