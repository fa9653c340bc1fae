//! Reusable UI components

mod button;
mod composite;
mod field_text;
mod option_list;

pub use button::{render_button, BUTTON_HEIGHT};
pub use composite::{border_style, part_areas, part_at, render_composite};
pub use field_text::{label_line, message_line, render_label, render_message};
pub use option_list::render_option_list;
