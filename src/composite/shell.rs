//! Shared shell of every composite control

use crate::error::Result;
use crate::field::FieldScope;
use crate::focus::{FocusHandle, FocusPart, FocusZone};
use crate::position::{EdgePadding, PositionInfo};
use ratatui::text::Span;
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// How the control-level disabled flag combines with the field-level one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisabledPolicy {
    /// Once the control reports a disabled value, keep it even after the
    /// control stops specifying one
    #[default]
    Sticky,
    /// Control-level value while present, field-level otherwise
    Live,
}

/// Resolves the effective disabled flag of one composite
#[derive(Debug, Default)]
pub struct DisabledResolver {
    policy: DisabledPolicy,
    observed: Cell<Option<bool>>,
}

impl DisabledResolver {
    pub fn new(policy: DisabledPolicy) -> Self {
        Self {
            policy,
            observed: Cell::new(None),
        }
    }

    /// Record a control-level value as soon as it is set
    pub fn observe(&self, control: Option<bool>) {
        if self.policy == DisabledPolicy::Sticky && control.is_some() {
            self.observed.set(control);
        }
    }

    pub fn resolve(&self, control: Option<bool>, field: bool) -> bool {
        match self.policy {
            DisabledPolicy::Live => control.unwrap_or(field),
            DisabledPolicy::Sticky => {
                self.observe(control);
                self.observed.get().unwrap_or(field)
            }
        }
    }

    pub fn policy(&self) -> DisabledPolicy {
        self.policy
    }
}

/// Reference to one sub-part of a composite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartRef {
    Control,
    /// Index into [`Shell::slots`]
    Slot(usize),
}

/// Declaration of a slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotProps {
    pub content: String,
    pub interactive: bool,
}

impl SlotProps {
    /// Decorative slot (prefix, suffix, icon)
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            interactive: false,
        }
    }

    /// Focusable slot (icon button)
    pub fn button(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            interactive: true,
        }
    }
}

/// A mounted slot
#[derive(Debug, Clone)]
pub struct Slot {
    props: SlotProps,
    position: PositionInfo,
    focus: FocusHandle,
}

impl Slot {
    pub fn content(&self) -> &str {
        &self.props.content
    }

    pub fn is_interactive(&self) -> bool {
        self.props.interactive
    }

    pub fn position(&self) -> PositionInfo {
        self.position
    }

    pub fn padding(&self) -> EdgePadding {
        self.position.padding()
    }

    /// Rendered width in cells including edge padding
    pub fn width(&self) -> u16 {
        let content = u16::try_from(Span::raw(self.content()).width()).unwrap_or(u16::MAX);
        content.saturating_add(self.padding().horizontal())
    }

    pub fn focus(&self) {
        self.focus.focus();
    }

    pub fn blur(&self) {
        self.focus.blur();
    }
}

/// Attributes bound onto the control sub-part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlBinding {
    pub id: String,
    pub name: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub aria_invalid: bool,
    pub aria_describedby: Vec<String>,
}

/// Signals handed to the styling layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompositeSignals {
    pub disabled: bool,
    pub error_present: bool,
    pub focused_part: Option<FocusPart>,
    /// Focus ring; only while the control has focus
    pub ring: bool,
}

#[derive(Debug, Clone)]
enum Entry {
    Control,
    Slot(SlotProps),
}

/// Ordered part declarations collected by the composite builders
#[derive(Debug, Clone, Default)]
pub(crate) struct PartsBuilder {
    entries: Vec<Entry>,
}

impl PartsBuilder {
    pub(crate) fn control(&mut self) {
        self.entries.push(Entry::Control);
    }

    pub(crate) fn slot(&mut self, props: SlotProps) {
        self.entries.push(Entry::Slot(props));
    }
}

/// Common state of a composite control
#[derive(Debug)]
pub struct Shell {
    scope: FieldScope,
    zone: FocusZone,
    disabled: DisabledResolver,
    parts: Vec<PartRef>,
    slots: Vec<Slot>,
    control_position: PositionInfo,
    control_focus: FocusHandle,
}

impl Shell {
    /// Mount the declared parts; fails when there is no enclosing field
    ///
    /// A composite holds exactly one control: without one, a control is
    /// appended; extra controls after the first are dropped.
    pub(crate) fn assemble(
        scope: FieldScope,
        parts: PartsBuilder,
        policy: DisabledPolicy,
    ) -> Result<Self> {
        let descriptor = scope.read()?;

        let mut entries = Vec::with_capacity(parts.entries.len() + 1);
        let mut has_control = false;
        for entry in parts.entries {
            match entry {
                Entry::Control if has_control => {
                    tracing::warn!(field_id = descriptor.id(), "extra control ignored");
                }
                Entry::Control => {
                    has_control = true;
                    entries.push(Entry::Control);
                }
                slot => entries.push(slot),
            }
        }
        if !has_control {
            entries.push(Entry::Control);
        }

        let zone = FocusZone::new();
        let total = entries.len();
        let mut order = Vec::with_capacity(total);
        let mut slots = Vec::new();
        let mut control_position = PositionInfo::default();

        for (index, entry) in entries.into_iter().enumerate() {
            let position = PositionInfo::resolve(index, total);
            match entry {
                Entry::Control => {
                    control_position = position;
                    order.push(PartRef::Control);
                }
                Entry::Slot(props) => {
                    order.push(PartRef::Slot(slots.len()));
                    slots.push(Slot {
                        props,
                        position,
                        focus: zone.handle(FocusPart::Slot),
                    });
                }
            }
        }

        tracing::debug!(
            field_id = descriptor.id(),
            slots = slots.len(),
            "composite mounted"
        );

        Ok(Self {
            scope,
            control_focus: zone.handle(FocusPart::Control),
            zone,
            disabled: DisabledResolver::new(policy),
            parts: order,
            slots,
            control_position,
        })
    }

    pub fn field(&self) -> &FieldScope {
        &self.scope
    }

    pub fn zone(&self) -> &FocusZone {
        &self.zone
    }

    /// Parts in declaration order
    pub fn parts(&self) -> &[PartRef] {
        &self.parts
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn control_position(&self) -> PositionInfo {
        self.control_position
    }

    /// Parts that can take focus: the control and interactive slots
    pub fn focusable_parts(&self) -> Vec<PartRef> {
        self.parts
            .iter()
            .copied()
            .filter(|part| match part {
                PartRef::Control => true,
                PartRef::Slot(index) => self.slots[*index].is_interactive(),
            })
            .collect()
    }

    pub fn focus(&self, part: PartRef) {
        match part {
            PartRef::Control => self.control_focus.focus(),
            PartRef::Slot(index) => {
                if let Some(slot) = self.slots.get(index) {
                    slot.focus();
                }
            }
        }
    }

    pub fn blur(&self, part: PartRef) {
        match part {
            PartRef::Control => self.control_focus.blur(),
            PartRef::Slot(index) => {
                if let Some(slot) = self.slots.get(index) {
                    slot.blur();
                }
            }
        }
    }

    /// Note a control-level disabled value (at mount and on every change)
    pub fn observe_control_disabled(&self, control: Option<bool>) {
        self.disabled.observe(control);
    }

    pub fn effective_disabled(&self, control: Option<bool>) -> Result<bool> {
        let descriptor = self.scope.read()?;
        Ok(self.disabled.resolve(control, descriptor.disabled()))
    }

    pub fn binding(&self, control: Option<bool>) -> Result<ControlBinding> {
        let descriptor = self.scope.read()?;
        let disabled = self.disabled.resolve(control, descriptor.disabled());

        let mut aria_describedby = Vec::new();
        if descriptor.description().is_some() {
            aria_describedby.push(descriptor.description_id());
        }
        if descriptor.has_error() {
            aria_describedby.push(descriptor.error_id());
        }

        Ok(ControlBinding {
            id: descriptor.id().to_string(),
            name: descriptor.name().map(str::to_string),
            required: descriptor.required(),
            disabled,
            aria_invalid: descriptor.has_error(),
            aria_describedby,
        })
    }

    pub fn signals(&self, control: Option<bool>) -> Result<CompositeSignals> {
        let descriptor = self.scope.read()?;
        Ok(CompositeSignals {
            disabled: self.disabled.resolve(control, descriptor.disabled()),
            error_present: descriptor.has_error(),
            focused_part: self.zone.focused_part(),
            ring: self.zone.shows_ring(),
        })
    }
}
