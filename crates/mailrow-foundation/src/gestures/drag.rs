//! Drag recognition for swipe rows.

use crate::gesture_constants::DRAG_THRESHOLD;
use crate::input::{PointerEvent, PointerEventKind};
use mailrow_ui_graphics::Point;

/// Translation since the gesture started, in points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSample {
    pub dx: f32,
    pub dy: f32,
}

impl DragSample {
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    pub const fn horizontal(dx: f32) -> Self {
        Self { dx, dy: 0.0 }
    }

    /// True when the horizontal component dominates.
    ///
    /// Ties count as vertical so a diagonal drag keeps scrolling the list.
    pub fn is_horizontal(&self) -> bool {
        self.dx.abs() > self.dy.abs()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    Changed(DragSample),
    Ended(DragSample),
    Cancelled,
}

/// Turns raw pointer events into a drag stream for one row.
///
/// Emits `Changed` for every move after `Down`, then exactly one terminal
/// `Ended` or `Cancelled`. Events outside a press are ignored.
#[derive(Clone, Debug, Default)]
pub struct HorizontalDragDetector {
    start: Option<Point>,
    claimed: bool,
}

impl HorizontalDragDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Whether the current gesture has become a horizontal drag past the
    /// touch slop. Stays true until the gesture ends.
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    pub fn reset(&mut self) {
        self.start = None;
        self.claimed = false;
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<DragUpdate> {
        match event.kind {
            PointerEventKind::Down => {
                if self.start.is_some() {
                    log::debug!("pointer down while a drag is tracked; restarting");
                }
                self.start = Some(event.position);
                self.claimed = false;
                None
            }
            PointerEventKind::Move => {
                let sample = self.sample(event.position)?;
                if !self.claimed && sample.is_horizontal() && sample.dx.abs() > DRAG_THRESHOLD {
                    self.claimed = true;
                }
                Some(DragUpdate::Changed(sample))
            }
            PointerEventKind::Up => {
                let sample = self.sample(event.position)?;
                self.start = None;
                Some(DragUpdate::Ended(sample))
            }
            PointerEventKind::Cancel => {
                self.start.take()?;
                Some(DragUpdate::Cancelled)
            }
        }
    }

    fn sample(&self, position: Point) -> Option<DragSample> {
        let start = self.start?;
        let delta = position - start;
        Some(DragSample::new(delta.x, delta.y))
    }
}
