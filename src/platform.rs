//! Platform-specific key hints

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the submit shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the help line
/// Ctrl+S is accepted on all platforms
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

pub const QUIT_SHORTCUT: &str = "Esc";

/// Full help line shown under the form
pub fn help_line() -> String {
    format!(
        "Tab/Shift+Tab: move  ←/→: change select  click: pick plan  {}: submit  {}: quit",
        SUBMIT_SHORTCUT, QUIT_SHORTCUT
    )
}
