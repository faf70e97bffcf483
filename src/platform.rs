//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the copy shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Key pressed together with [`COPY_MODIFIER`] to copy the prompt
pub const COPY_KEY: char = 'y';

/// Copy shortcut display
/// - macOS: "Cmd+Y"
/// - Linux/Windows: "Ctrl+Y"
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "Ctrl+Y";

/// Whether `modifiers` trigger the copy shortcut.
/// Ctrl is accepted everywhere since many macOS terminals never report Cmd.
pub fn is_copy_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.contains(COPY_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}
