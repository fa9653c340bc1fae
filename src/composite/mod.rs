//! Composite controls: one control plus optional slots acting as one unit
//!
//! [`Shell`] carries everything the TextInput, Select and Dropdown shapes
//! share: field binding, the focus zone, sub-part positions and the
//! effective disabled flag.

mod select;
mod shell;
mod text_input;

pub use select::{Select, SelectBuilder, SelectControlProps};
pub use shell::{
    CompositeSignals, ControlBinding, DisabledPolicy, DisabledResolver, PartRef, Shell, Slot,
    SlotProps,
};
pub(crate) use shell::PartsBuilder;
pub use text_input::{InputKind, TextControlProps, TextInput, TextInputBuilder, ValueTransform};

/// Receives committed value changes from a control
#[cfg_attr(test, mockall::automock)]
pub trait ChangeListener {
    fn value_changed(&mut self, value: &str);
}

impl<F: FnMut(&str)> ChangeListener for F {
    fn value_changed(&mut self, value: &str) {
        self(value)
    }
}
