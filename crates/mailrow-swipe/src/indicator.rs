use mailrow_ui_graphics::{Rect, Size};

use crate::action::{ActionStyle, SwipeActions, SwipeEdge};
use crate::config::SwipeConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealPhase {
    /// Inside the dead zone; no icon or label is shown.
    Hidden,
    /// Between the reveal and commit thresholds. `progress` runs from 0 at
    /// the reveal threshold to 1 at the commit threshold.
    Revealing { progress: f32 },
    /// Past the commit threshold; releasing commits.
    Armed,
}

/// Everything a renderer needs to draw the background behind a row.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeIndicator {
    pub offset: f32,
    pub edge: Option<SwipeEdge>,
    pub phase: RevealPhase,
    /// Style of the action being revealed, if any.
    pub style: Option<ActionStyle>,
}

impl SwipeIndicator {
    pub fn resolve(offset: f32, config: &SwipeConfig, actions: &SwipeActions) -> Self {
        let edge = SwipeEdge::from_offset(offset);
        let style = edge
            .and_then(|edge| actions.get(edge))
            .map(|action| action.style().clone());
        let distance = offset.abs();
        let phase = if style.is_none() || distance < config.reveal_threshold {
            RevealPhase::Hidden
        } else if distance >= config.commit_threshold {
            RevealPhase::Armed
        } else {
            let span = config.commit_threshold - config.reveal_threshold;
            RevealPhase::Revealing {
                progress: ((distance - config.reveal_threshold) / span).clamp(0.0, 1.0),
            }
        };
        Self {
            offset,
            edge,
            phase,
            style,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.phase == RevealPhase::Armed
    }

    /// Whether the icon and label should be drawn.
    pub fn shows_action(&self) -> bool {
        self.phase != RevealPhase::Hidden
    }

    /// Area uncovered by the translated content, anchored to the swiped
    /// edge.
    pub fn background_rect(&self, row: Size) -> Rect {
        let width = self.offset.abs().min(row.width);
        match self.edge {
            Some(SwipeEdge::Leading) => Rect {
                x: 0.0,
                y: 0.0,
                width,
                height: row.height,
            },
            Some(SwipeEdge::Trailing) => Rect {
                x: row.width - width,
                y: 0.0,
                width,
                height: row.height,
            },
            None => Rect::ZERO,
        }
    }

    /// Where the row content is drawn.
    pub fn content_rect(&self, row: Size) -> Rect {
        Rect::from_size(row).translate(self.offset, 0.0)
    }
}
