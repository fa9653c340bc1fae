//! Field context and the sub-components that read it
//!
//! A [`Field`] is declared once per logical form field. Every sub-component
//! (label, description, error message, composite controls) receives a
//! [`FieldScope`] at construction and reads the current [`FieldDescriptor`]
//! through it.

mod context;
mod parts;

pub use context::{Field, FieldDescriptor, FieldProps, FieldScope};
pub use parts::{Description, DescriptionView, ErrorMessage, ErrorMessageView, Label, LabelView};
