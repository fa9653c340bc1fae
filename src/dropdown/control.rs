//! Dropdown composite and its selection state machine

use super::machine::{DropdownSelection, DropdownState, Surface};
use crate::composite::{
    ChangeListener, CompositeSignals, ControlBinding, DisabledPolicy, PartRef, PartsBuilder,
    Shell, SlotProps,
};
use crate::error::{FieldError, Result};
use crate::events::{PointerBus, Subscription};
use crate::field::FieldScope;
use crate::options::{DuplicatePolicy, OptionItem, OptionList};
use ratatui::layout::{Margin, Position, Rect};
use std::cell::RefCell;
use std::rc::Rc;

/// Properties of the dropdown trigger
#[derive(Debug, Clone, Copy, Default)]
pub struct DropdownControlProps {
    pub disabled: Option<bool>,
}

impl DropdownControlProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }
}

/// Outcome of routing a pointer-down to a dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownHit {
    /// The trigger was pressed; carries the new state
    Toggled(DropdownState),
    /// An option was committed
    Selected(String),
    /// Outside the dropdown, or nothing to do
    Ignored,
}

pub struct DropdownBuilder {
    scope: FieldScope,
    bus: PointerBus,
    parts: PartsBuilder,
    control: DropdownControlProps,
    options: Vec<OptionItem>,
    duplicates: DuplicatePolicy,
    value: Option<String>,
    on_change: Option<Box<dyn ChangeListener>>,
    policy: DisabledPolicy,
}

impl DropdownBuilder {
    pub fn control(mut self, props: DropdownControlProps) -> Self {
        self.parts.control();
        self.control = props;
        self
    }

    pub fn slot(mut self, props: SlotProps) -> Self {
        self.parts.slot(props);
        self
    }

    pub fn option(mut self, option: OptionItem) -> Self {
        self.options.push(option);
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = OptionItem>) -> Self {
        self.options.extend(options);
        self
    }

    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Externally supplied initial value; must match one of the options
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn on_change(mut self, listener: impl ChangeListener + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    pub fn disabled_policy(mut self, policy: DisabledPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Mount the dropdown and subscribe it to the pointer bus
    pub fn build(self) -> Result<Dropdown> {
        let shell = Shell::assemble(self.scope, self.parts, self.policy)?;
        shell.observe_control_disabled(self.control.disabled);
        let options = OptionList::new(self.options, self.duplicates)?;
        if let Some(value) = &self.value {
            if !options.contains(value) {
                return Err(FieldError::UnknownOption {
                    value: value.clone(),
                });
            }
        }

        let surface = Rc::new(RefCell::new(Surface::default()));
        let weak = Rc::downgrade(&surface);
        let subscription = self.bus.subscribe(move |event| {
            if let Some(surface) = weak.upgrade() {
                if let Ok(mut surface) = surface.try_borrow_mut() {
                    surface.dismiss_outside(event.position);
                }
            }
        });

        Ok(Dropdown {
            shell,
            control: self.control,
            options,
            value: self.value,
            on_change: self.on_change,
            surface,
            _subscription: subscription,
        })
    }
}

/// Pointer-driven dropdown with a floating option list
pub struct Dropdown {
    shell: Shell,
    control: DropdownControlProps,
    options: OptionList,
    value: Option<String>,
    on_change: Option<Box<dyn ChangeListener>>,
    surface: Rc<RefCell<Surface>>,
    _subscription: Subscription,
}

impl Dropdown {
    pub fn builder(scope: FieldScope, bus: &PointerBus) -> DropdownBuilder {
        DropdownBuilder {
            scope,
            bus: bus.clone(),
            parts: PartsBuilder::default(),
            control: DropdownControlProps::default(),
            options: Vec::new(),
            duplicates: DuplicatePolicy::default(),
            value: None,
            on_change: None,
            policy: DisabledPolicy::default(),
        }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    pub fn state(&self) -> DropdownState {
        self.surface.borrow().state
    }

    pub fn is_open(&self) -> bool {
        self.state() == DropdownState::Open
    }

    /// Displayed value: the committed or supplied value, otherwise the
    /// first option's value
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref().or_else(|| self.options.first_value())
    }

    /// Value committed by the user or supplied by the caller, if any
    pub fn committed_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn selection(&self) -> DropdownSelection {
        DropdownSelection {
            open: self.is_open(),
            value: self.value().map(str::to_string),
        }
    }

    /// Text shown on the trigger
    pub fn displayed_text(&self) -> &str {
        self.value()
            .and_then(|value| self.options.text_for(value))
            .unwrap_or_default()
    }

    /// Options to render; `None` while closed
    pub fn visible_options(&self) -> Option<&OptionList> {
        self.is_open().then_some(&self.options)
    }

    pub fn set_control_disabled(&mut self, disabled: Option<bool>) {
        self.shell.observe_control_disabled(disabled);
        self.control.disabled = disabled;
    }

    pub fn is_disabled(&self) -> Result<bool> {
        self.shell.effective_disabled(self.control.disabled)
    }

    pub fn binding(&self) -> Result<ControlBinding> {
        self.shell.binding(self.control.disabled)
    }

    pub fn signals(&self) -> Result<CompositeSignals> {
        self.shell.signals(self.control.disabled)
    }

    /// Pointer-down on the trigger: toggles the list
    ///
    /// A disabled dropdown does not open, but an open one can always close.
    pub fn activate(&mut self) -> Result<DropdownState> {
        if !self.is_open() && self.is_disabled()? {
            return Ok(DropdownState::Closed);
        }

        let mut surface = self.surface.borrow_mut();
        match surface.state.toggled() {
            DropdownState::Open => surface.state = DropdownState::Open,
            DropdownState::Closed => surface.close(),
        }
        tracing::debug!(state = ?surface.state, "dropdown activated");
        Ok(surface.state)
    }

    /// Commit `value` from the open list; ignored while closed
    pub fn select(&mut self, value: &str) -> Result<bool> {
        if !self.is_open() {
            tracing::debug!(value, "select ignored while closed");
            return Ok(false);
        }
        if !self.options.contains(value) {
            return Err(FieldError::UnknownOption {
                value: value.to_string(),
            });
        }

        self.value = Some(value.to_string());
        self.surface.borrow_mut().close();
        tracing::debug!(value, "dropdown value committed");

        if let Some(listener) = self.on_change.as_mut() {
            listener.value_changed(value);
        }
        Ok(true)
    }

    /// Write (or clear) the value from the owning form; no change notification
    pub fn set_value(&mut self, value: Option<String>) -> Result<()> {
        if let Some(value) = &value {
            if !self.options.contains(value) {
                return Err(FieldError::UnknownOption {
                    value: value.clone(),
                });
            }
        }
        self.value = value;
        Ok(())
    }

    /// Remember where the trigger and list were drawn
    pub fn record_layout(&self, trigger: Rect, list: Option<Rect>) {
        let mut surface = self.surface.borrow_mut();
        let open = surface.state == DropdownState::Open;
        surface.trigger = Some(trigger);
        surface.list = list.filter(|_| open);
    }

    pub fn trigger_area(&self) -> Option<Rect> {
        self.surface.borrow().trigger
    }

    pub fn list_area(&self) -> Option<Rect> {
        self.surface.borrow().list
    }

    /// Index of the option drawn at `position` inside the bordered list
    pub fn option_at(&self, position: Position) -> Option<usize> {
        let list = self.list_area()?;
        let inner = list.inner(Margin::new(1, 1));
        if !inner.contains(position) {
            return None;
        }
        let index = usize::from(position.y - inner.y);
        (index < self.options.len()).then_some(index)
    }

    /// Route a pointer-down that the host found on or near this dropdown
    pub fn pointer_down(&mut self, position: Position) -> Result<DropdownHit> {
        if self.is_open() {
            if let Some(index) = self.option_at(position) {
                let value = match self.options.get(index) {
                    Some(option) => option.effective_value().to_string(),
                    None => return Ok(DropdownHit::Ignored),
                };
                self.select(&value)?;
                return Ok(DropdownHit::Selected(value));
            }
        }

        if self.trigger_area().is_some_and(|area| area.contains(position)) {
            return Ok(DropdownHit::Toggled(self.activate()?));
        }

        Ok(DropdownHit::Ignored)
    }

    pub fn focus(&self, part: PartRef) {
        self.shell.focus(part);
    }

    pub fn blur(&self, part: PartRef) {
        self.shell.blur(part);
    }
}
