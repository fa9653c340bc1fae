//! Open/closed state shared with the outside-dismissal handler

use ratatui::layout::{Position, Rect};

/// Whether the option list is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

impl DropdownState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Snapshot of a dropdown's selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DropdownSelection {
    pub open: bool,
    pub value: Option<String>,
}

/// State reachable from the pointer bus handler
///
/// Holds the screen areas recorded by the last render so containment can be
/// checked without access to the dropdown itself.
#[derive(Debug, Default)]
pub(crate) struct Surface {
    pub(crate) state: DropdownState,
    pub(crate) trigger: Option<Rect>,
    pub(crate) list: Option<Rect>,
}

impl Surface {
    pub(crate) fn contains(&self, position: Position) -> bool {
        self.trigger.is_some_and(|area| area.contains(position))
            || self.list.is_some_and(|area| area.contains(position))
    }

    pub(crate) fn close(&mut self) {
        self.state = DropdownState::Closed;
        self.list = None;
    }

    /// Close when `position` falls outside; returns whether it closed
    pub(crate) fn dismiss_outside(&mut self, position: Position) -> bool {
        if self.state != DropdownState::Open || self.contains(position) {
            return false;
        }
        self.close();
        tracing::debug!(x = position.x, y = position.y, "dropdown dismissed by outside pointer");
        true
    }
}
