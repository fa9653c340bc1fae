//! Focus zone shared by the sub-parts of one composite control
//!
//! The composite itself never holds focus. Its control and slots report
//! focus/blur through the [`FocusHandle`] they receive at construction, and
//! the zone records which kind of part currently has it.

use std::cell::Cell;
use std::rc::Rc;

/// Kind of sub-part reporting focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusPart {
    Control,
    Slot,
}

/// Focus state of one composite control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusZoneState {
    #[default]
    Idle,
    FocusedControl,
    FocusedSlot,
}

impl FocusZoneState {
    fn entered(part: FocusPart) -> Self {
        match part {
            FocusPart::Control => Self::FocusedControl,
            FocusPart::Slot => Self::FocusedSlot,
        }
    }

    pub fn focused_part(self) -> Option<FocusPart> {
        match self {
            Self::Idle => None,
            Self::FocusedControl => Some(FocusPart::Control),
            Self::FocusedSlot => Some(FocusPart::Slot),
        }
    }
}

/// Coordinator for one composite instance
///
/// Clones share state; hand clones (or [`FocusHandle`]s) to sub-parts.
#[derive(Debug, Clone, Default)]
pub struct FocusZone {
    state: Rc<Cell<FocusZoneState>>,
}

impl FocusZone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `part` as focused; entering while another part is focused is
    /// a direct transfer
    pub fn enter(&self, part: FocusPart) {
        self.transition(FocusZoneState::entered(part));
    }

    pub fn leave(&self) {
        self.transition(FocusZoneState::Idle);
    }

    fn transition(&self, next: FocusZoneState) {
        let previous = self.state.replace(next);
        if previous != next {
            tracing::trace!(?previous, ?next, "focus zone transition");
        }
    }

    pub fn state(&self) -> FocusZoneState {
        self.state.get()
    }

    pub fn focused_part(&self) -> Option<FocusPart> {
        self.state.get().focused_part()
    }

    /// Focus ring is shown only while the control itself has focus
    pub fn shows_ring(&self) -> bool {
        self.state.get() == FocusZoneState::FocusedControl
    }

    /// Callbacks for a sub-part of the given kind
    pub fn handle(&self, part: FocusPart) -> FocusHandle {
        FocusHandle {
            zone: self.clone(),
            part,
        }
    }
}

/// Focus/blur callbacks bound to one sub-part
#[derive(Debug, Clone)]
pub struct FocusHandle {
    zone: FocusZone,
    part: FocusPart,
}

impl FocusHandle {
    pub fn focus(&self) {
        self.zone.enter(self.part);
    }

    pub fn blur(&self) {
        self.zone.leave();
    }

    pub fn part(&self) -> FocusPart {
        self.part
    }
}
