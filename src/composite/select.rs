//! Native-shaped select: a closed option list cycled in place

use super::shell::{
    CompositeSignals, ControlBinding, DisabledPolicy, PartsBuilder, Shell, SlotProps,
};
use super::{ChangeListener, PartRef};
use crate::error::{FieldError, Result};
use crate::field::FieldScope;
use crate::options::{DuplicatePolicy, OptionItem, OptionList};

/// Properties of the select control sub-part
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectControlProps {
    pub disabled: Option<bool>,
}

impl SelectControlProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }
}

pub struct SelectBuilder {
    scope: FieldScope,
    parts: PartsBuilder,
    control: SelectControlProps,
    options: Vec<OptionItem>,
    duplicates: DuplicatePolicy,
    value: Option<String>,
    on_change: Option<Box<dyn ChangeListener>>,
    policy: DisabledPolicy,
}

impl SelectBuilder {
    pub fn control(mut self, props: SelectControlProps) -> Self {
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

    /// Initial value; must match one of the options
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

    pub fn build(self) -> Result<Select> {
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

        let current = self
            .value
            .as_deref()
            .and_then(|value| options.position(value))
            .unwrap_or(0);

        Ok(Select {
            shell,
            control: self.control,
            options,
            value: self.value,
            current,
            on_change: self.on_change,
        })
    }
}

/// Select whose option list is never expanded in place
///
/// The value steps through the options; every step notifies the listener.
pub struct Select {
    shell: Shell,
    control: SelectControlProps,
    options: OptionList,
    value: Option<String>,
    /// Option the value was taken from; steps start here
    current: usize,
    on_change: Option<Box<dyn ChangeListener>>,
}

impl Select {
    pub fn builder(scope: FieldScope) -> SelectBuilder {
        SelectBuilder {
            scope,
            parts: PartsBuilder::default(),
            control: SelectControlProps::default(),
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

    /// Current value; the first option's value until one is chosen
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref().or_else(|| self.options.first_value())
    }

    /// Display text of the current option
    pub fn selected_text(&self) -> &str {
        self.value()
            .and_then(|value| self.options.text_for(value))
            .unwrap_or_default()
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

    /// Write a value from the owning form; no change notification
    pub fn set_value(&mut self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        let Some(index) = self.options.position(&value) else {
            return Err(FieldError::UnknownOption { value });
        };
        if self.value() != Some(value.as_str()) {
            self.current = index;
        }
        self.value = Some(value);
        Ok(())
    }

    /// User choice of `value`; returns whether the value changed
    pub fn choose(&mut self, value: &str) -> Result<bool> {
        if self.is_disabled()? {
            return Ok(false);
        }
        let Some(index) = self.options.position(value) else {
            return Err(FieldError::UnknownOption {
                value: value.to_string(),
            });
        };
        if self.value() == Some(value) {
            return Ok(false);
        }

        self.current = index;
        Ok(self.commit(value))
    }

    /// Store `value` and notify when it differs from the current one
    fn commit(&mut self, value: &str) -> bool {
        if self.value() == Some(value) {
            return false;
        }
        self.value = Some(value.to_string());
        if let Some(listener) = self.on_change.as_mut() {
            listener.value_changed(value);
        }
        true
    }

    pub fn select_next(&mut self) -> Result<bool> {
        self.step(1)
    }

    pub fn select_prev(&mut self) -> Result<bool> {
        self.step(-1)
    }

    /// Move by option position, so options sharing a value are stepped over
    /// one at a time
    fn step(&mut self, delta: isize) -> Result<bool> {
        let count = self.options.len();
        if count == 0 || self.is_disabled()? {
            return Ok(false);
        }

        let next = (self.current as isize + delta).rem_euclid(count as isize) as usize;
        let value = match self.options.get(next) {
            Some(option) => option.effective_value().to_string(),
            None => return Ok(false),
        };
        self.current = next;
        Ok(self.commit(&value))
    }

    pub fn focus(&self, part: PartRef) {
        self.shell.focus(part);
    }

    pub fn blur(&self, part: PartRef) {
        self.shell.blur(part);
    }
}
