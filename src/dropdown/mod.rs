//! Custom dropdown: composite shell plus an open/closed selection machine
//!
//! The option list is a floating overlay that exists only while the dropdown
//! is open. Each instance subscribes to the [`PointerBus`](crate::events::PointerBus)
//! for as long as it lives and closes itself on pointer-downs outside its
//! trigger and list.

mod control;
mod machine;

pub use control::{Dropdown, DropdownBuilder, DropdownControlProps, DropdownHit};
pub use machine::{DropdownSelection, DropdownState};
