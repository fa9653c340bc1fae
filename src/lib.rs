//! Rosetta Forms - composable form controls for the terminal
//!
//! A field publishes its metadata to the controls declared inside it; a
//! composite control joins one input with prefix/suffix slots into a single
//! focusable unit; a dropdown layers a floating option list on top. Every
//! piece renders with Ratatui.

pub mod app;
pub mod composite;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod events;
pub mod field;
pub mod focus;
pub mod options;
pub mod phone;
pub mod platform;
pub mod position;
pub mod ui;

pub use error::{FieldError, Result};
