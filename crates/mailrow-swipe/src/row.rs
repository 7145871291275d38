use mailrow_foundation::{DragUpdate, HorizontalDragDetector, PointerEvent, PointerEventKind};

use crate::controller::SwipeCommitController;

/// Binds a [`SwipeCommitController`] to raw pointer input for one row.
pub struct SwipeRow {
    detector: HorizontalDragDetector,
    controller: SwipeCommitController,
    // Set once the current gesture delivered a horizontal sample.
    accepted_horizontal: bool,
}

impl SwipeRow {
    pub fn new(controller: SwipeCommitController) -> Self {
        Self {
            detector: HorizontalDragDetector::new(),
            controller,
            accepted_horizontal: false,
        }
    }

    pub fn controller(&self) -> &SwipeCommitController {
        &self.controller
    }

    /// Routes one pointer event. Returns `true` and consumes the event once
    /// the gesture has been claimed as a horizontal swipe.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if event.kind == PointerEventKind::Down {
            self.accepted_horizontal = false;
        }
        let Some(update) = self.detector.on_pointer_event(event) else {
            return false;
        };
        match update {
            DragUpdate::Changed(sample) => {
                self.accepted_horizontal |= sample.is_horizontal();
                self.controller.on_drag_changed(sample);
            }
            DragUpdate::Ended(sample) => {
                // A release at the end of a vertical scroll must not commit.
                if std::mem::take(&mut self.accepted_horizontal) {
                    self.controller.on_drag_ended(sample.dx);
                } else {
                    self.controller.on_drag_cancelled();
                }
            }
            DragUpdate::Cancelled => {
                self.accepted_horizontal = false;
                self.controller.on_drag_cancelled();
            }
        }
        let claimed = self.detector.is_claimed();
        if claimed {
            event.consume();
        }
        claimed
    }

    /// Unmount hook: drops any pending commit.
    pub fn dispose(&mut self) {
        self.detector.reset();
        self.accepted_horizontal = false;
        self.controller.cancel();
    }
}

impl Drop for SwipeRow {
    fn drop(&mut self) {
        self.controller.cancel();
    }
}
