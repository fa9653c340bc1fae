//! Text input composite

use super::shell::{
    CompositeSignals, ControlBinding, DisabledPolicy, PartsBuilder, Shell, SlotProps,
};
use super::{ChangeListener, PartRef};
use crate::error::Result;
use crate::field::FieldScope;

/// Pure transform applied to every user edit (e.g. phone formatting)
pub type ValueTransform = fn(&str) -> String;

/// Input flavour of the control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Tel,
}

/// Properties of the text control sub-part
#[derive(Debug, Clone, Default)]
pub struct TextControlProps {
    pub disabled: Option<bool>,
    pub placeholder: Option<String>,
    pub value: String,
    pub kind: InputKind,
}

impl TextControlProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Builder collecting the parts of a [`TextInput`] in order
pub struct TextInputBuilder {
    scope: FieldScope,
    parts: PartsBuilder,
    control: TextControlProps,
    on_change: Option<Box<dyn ChangeListener>>,
    transform: Option<ValueTransform>,
    policy: DisabledPolicy,
}

impl TextInputBuilder {
    pub fn control(mut self, props: TextControlProps) -> Self {
        self.parts.control();
        self.control = props;
        self
    }

    pub fn slot(mut self, props: SlotProps) -> Self {
        self.parts.slot(props);
        self
    }

    pub fn on_change(mut self, listener: impl ChangeListener + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    pub fn transform(mut self, transform: ValueTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn disabled_policy(mut self, policy: DisabledPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn build(self) -> Result<TextInput> {
        let shell = Shell::assemble(self.scope, self.parts, self.policy)?;
        shell.observe_control_disabled(self.control.disabled);
        let mut control = self.control;
        if let Some(transform) = self.transform {
            control.value = transform(&control.value);
        }

        Ok(TextInput {
            shell,
            control,
            on_change: self.on_change,
            transform: self.transform,
        })
    }
}

/// Single-line text input with optional slots
pub struct TextInput {
    shell: Shell,
    control: TextControlProps,
    on_change: Option<Box<dyn ChangeListener>>,
    transform: Option<ValueTransform>,
}

impl TextInput {
    pub fn builder(scope: FieldScope) -> TextInputBuilder {
        TextInputBuilder {
            scope,
            parts: PartsBuilder::default(),
            control: TextControlProps::default(),
            on_change: None,
            transform: None,
            policy: DisabledPolicy::default(),
        }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn value(&self) -> &str {
        &self.control.value
    }

    /// Value as shown on screen (masked for passwords)
    pub fn display_value(&self) -> String {
        match self.control.kind {
            InputKind::Password => "•".repeat(self.control.value.chars().count()),
            _ => self.control.value.clone(),
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.control.placeholder.as_deref()
    }

    pub fn kind(&self) -> InputKind {
        self.control.kind
    }

    /// Control-level disabled prop; `None` means unspecified
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
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.control.value = value.into();
    }

    pub fn insert_char(&mut self, c: char) -> Result<bool> {
        let mut next = self.control.value.clone();
        next.push(c);
        self.commit(next)
    }

    pub fn backspace(&mut self) -> Result<bool> {
        let mut next = self.control.value.clone();
        next.pop();
        self.commit(next)
    }

    pub fn clear(&mut self) -> Result<bool> {
        self.commit(String::new())
    }

    /// Apply a user edit; returns whether the value changed
    fn commit(&mut self, raw: String) -> Result<bool> {
        if self.is_disabled()? {
            return Ok(false);
        }

        let next = match self.transform {
            Some(transform) => transform(&raw),
            None => raw,
        };
        if next == self.control.value {
            return Ok(false);
        }

        self.control.value = next;
        if let Some(listener) = self.on_change.as_mut() {
            listener.value_changed(&self.control.value);
        }
        Ok(true)
    }

    pub fn focus(&self, part: PartRef) {
        self.shell.focus(part);
    }

    pub fn blur(&self, part: PartRef) {
        self.shell.blur(part);
    }
}
