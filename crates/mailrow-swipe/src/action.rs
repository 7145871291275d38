use mailrow_ui_graphics::Color;
use std::fmt;
use std::rc::Rc;

/// Side of the row an action is revealed from.
///
/// Leading actions are revealed by dragging towards positive offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeEdge {
    Leading,
    Trailing,
}

impl SwipeEdge {
    pub fn from_offset(offset: f32) -> Option<Self> {
        if offset > 0.0 {
            Some(SwipeEdge::Leading)
        } else if offset < 0.0 {
            Some(SwipeEdge::Trailing)
        } else {
            None
        }
    }

    /// `1.0` for leading, `-1.0` for trailing.
    pub fn sign(self) -> f32 {
        match self {
            SwipeEdge::Leading => 1.0,
            SwipeEdge::Trailing => -1.0,
        }
    }
}

/// What the renderer draws for an action: an opaque icon identifier, a label
/// and a tint.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionStyle {
    pub icon: String,
    pub label: String,
    pub color: Color,
}

/// An action a row can commit to, together with how it is presented.
#[derive(Clone)]
pub struct SwipeAction {
    style: ActionStyle,
    action: Rc<dyn Fn()>,
}

impl SwipeAction {
    pub fn new(
        icon: impl Into<String>,
        label: impl Into<String>,
        color: Color,
        action: impl Fn() + 'static,
    ) -> Self {
        Self {
            style: ActionStyle {
                icon: icon.into(),
                label: label.into(),
                color,
            },
            action: Rc::new(action),
        }
    }

    pub fn icon(&self) -> &str {
        &self.style.icon
    }

    pub fn label(&self) -> &str {
        &self.style.label
    }

    pub fn color(&self) -> Color {
        self.style.color
    }

    pub fn style(&self) -> &ActionStyle {
        &self.style
    }

    pub(crate) fn callback(&self) -> Rc<dyn Fn()> {
        Rc::clone(&self.action)
    }

    pub fn perform(&self) {
        (self.action)()
    }
}

impl fmt::Debug for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeAction")
            .field("icon", &self.style.icon)
            .field("label", &self.style.label)
            .field("color", &self.style.color)
            .finish_non_exhaustive()
    }
}

/// The optional leading/trailing pair configured on a row.
///
/// A missing side is a valid configuration: the row never reveals or
/// commits in that direction.
#[derive(Clone, Debug, Default)]
pub struct SwipeActions {
    pub leading: Option<SwipeAction>,
    pub trailing: Option<SwipeAction>,
}

impl SwipeActions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn both(leading: SwipeAction, trailing: SwipeAction) -> Self {
        Self {
            leading: Some(leading),
            trailing: Some(trailing),
        }
    }

    pub fn with_leading(mut self, action: SwipeAction) -> Self {
        self.leading = Some(action);
        self
    }

    pub fn with_trailing(mut self, action: SwipeAction) -> Self {
        self.trailing = Some(action);
        self
    }

    pub fn get(&self, edge: SwipeEdge) -> Option<&SwipeAction> {
        match edge {
            SwipeEdge::Leading => self.leading.as_ref(),
            SwipeEdge::Trailing => self.trailing.as_ref(),
        }
    }

    pub fn has(&self, edge: SwipeEdge) -> bool {
        self.get(edge).is_some()
    }

    /// No action on either side: the row never moves.
    pub fn is_inert(&self) -> bool {
        self.leading.is_none() && self.trailing.is_none()
    }
}

/// Stock inbox actions. The callbacks are supplied by the owning screen,
/// which is responsible for the actual mailbox operation.
pub mod presets {
    use super::SwipeAction;
    use mailrow_ui_graphics::Color;

    pub fn archive(action: impl Fn() + 'static) -> SwipeAction {
        SwipeAction::new("archivebox", "Archive", Color::ARCHIVE, action)
    }

    pub fn trash(action: impl Fn() + 'static) -> SwipeAction {
        SwipeAction::new("trash", "Trash", Color::TRASH, action)
    }

    pub fn star(action: impl Fn() + 'static) -> SwipeAction {
        SwipeAction::new("star", "Star", Color::STAR, action)
    }

    pub fn mark_read(action: impl Fn() + 'static) -> SwipeAction {
        SwipeAction::new("envelope.open", "Read", Color::MARK_READ, action)
    }

    pub fn snooze(action: impl Fn() + 'static) -> SwipeAction {
        SwipeAction::new("clock", "Snooze", Color::SNOOZE, action)
    }
}
