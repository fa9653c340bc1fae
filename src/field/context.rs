//! Field declaration and scoped read access

use crate::error::{FieldError, Result};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use uuid::Uuid;

/// Metadata shared by every sub-component of one field
///
/// Only [`Field::declare`] creates descriptors; consumers get copies through
/// [`FieldScope::read`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    id: String,
    name: Option<String>,
    required: bool,
    disabled: bool,
    error: Option<String>,
    description: Option<String>,
}

impl FieldDescriptor {
    /// Identifier binding label, description and error to the control
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Current error message, if any (empty messages count as no error)
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    pub fn has_error(&self) -> bool {
        self.error().is_some()
    }

    /// Element id of the description text
    pub fn description_id(&self) -> String {
        format!("{}-description", self.id)
    }

    /// Element id of the error message
    pub fn error_id(&self) -> String {
        format!("{}-error", self.id)
    }
}

/// Declaration-time properties of a field
#[derive(Debug, Clone, Default)]
pub struct FieldProps {
    pub id: Option<String>,
    pub name: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub error: Option<String>,
    pub description: Option<String>,
}

impl FieldProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Owner of one field's descriptor
///
/// The descriptor lives exactly as long as the `Field`. Scopes handed out by
/// [`Field::scope`] stop resolving once the field is dropped.
#[derive(Debug)]
pub struct Field {
    descriptor: Rc<RefCell<FieldDescriptor>>,
}

impl Field {
    /// Declare a field, generating an id when none (or an empty one) is given
    pub fn declare(props: FieldProps) -> Self {
        let id = props
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(generate_id);

        tracing::debug!(field_id = %id, name = ?props.name, "field declared");

        Self {
            descriptor: Rc::new(RefCell::new(FieldDescriptor {
                id,
                name: props.name,
                required: props.required,
                disabled: props.disabled,
                error: props.error,
                description: props.description,
            })),
        }
    }

    /// Read-only accessor to hand to sub-components
    pub fn scope(&self) -> FieldScope {
        FieldScope {
            descriptor: Some(Rc::downgrade(&self.descriptor)),
        }
    }

    pub fn id(&self) -> String {
        self.descriptor.borrow().id.clone()
    }

    /// Snapshot of the current descriptor
    pub fn descriptor(&self) -> FieldDescriptor {
        self.descriptor.borrow().clone()
    }

    /// Replace the error message (validation results from the owning form)
    pub fn set_error(&self, error: Option<String>) {
        let mut descriptor = self.descriptor.borrow_mut();
        if descriptor.error != error {
            tracing::debug!(field_id = %descriptor.id, ?error, "field error updated");
            descriptor.error = error;
        }
    }

    pub fn set_disabled(&self, disabled: bool) {
        let mut descriptor = self.descriptor.borrow_mut();
        if descriptor.disabled != disabled {
            tracing::debug!(field_id = %descriptor.id, disabled, "field disabled updated");
            descriptor.disabled = disabled;
        }
    }
}

fn generate_id() -> String {
    format!("field-{}", Uuid::new_v4().simple())
}

/// Capability to read the enclosing field's descriptor
///
/// A detached scope (or one whose field has been dropped) fails every read
/// with [`FieldError::ContextMissing`].
#[derive(Debug, Clone, Default)]
pub struct FieldScope {
    descriptor: Option<Weak<RefCell<FieldDescriptor>>>,
}

impl FieldScope {
    /// A scope with no enclosing field
    pub fn detached() -> Self {
        Self::default()
    }

    /// Current descriptor of the enclosing field
    pub fn read(&self) -> Result<FieldDescriptor> {
        self.descriptor
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|descriptor| descriptor.borrow().clone())
            .ok_or(FieldError::ContextMissing)
    }

    pub fn is_attached(&self) -> bool {
        self.descriptor
            .as_ref()
            .is_some_and(|descriptor| descriptor.strong_count() > 0)
    }
}
