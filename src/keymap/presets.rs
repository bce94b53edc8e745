//! Preset keymaps: Standard, Emacs
//!
//! Each preset provides a complete set of key bindings for all actions.
//! Presets only bind non-printable keys so every printable key stays
//! available as text in the name field.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Standard keyboard navigation (arrows, Enter, Esc)
    #[default]
    Standard,
    /// Emacs-style line editing (Ctrl+A/E/B/F, etc.)
    Emacs,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

/// Standard keyboard bindings (arrows, Enter, Esc)
fn standard_bindings() -> Vec<KeyBinding> {
    vec![
        // Submission
        KeyBinding::new("enter", Action::Confirm),
        // Global
        KeyBinding::new("esc", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        // Focus
        KeyBinding::new("tab", Action::NextField),
        KeyBinding::new("shift+tab", Action::PrevField),
        KeyBinding::new("backtab", Action::PrevField),
        // Text editing
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
    ]
}

/// Emacs-style bindings: the standard set plus control-key line editing
fn emacs_bindings() -> Vec<KeyBinding> {
    let mut bindings = standard_bindings();
    bindings.extend([
        KeyBinding::new("ctrl+g", Action::Quit),
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("ctrl+a", Action::Home),
        KeyBinding::new("ctrl+e", Action::End),
        KeyBinding::new("ctrl+h", Action::Backspace),
        KeyBinding::new("ctrl+d", Action::DeleteChar),
    ]);
    bindings
}
