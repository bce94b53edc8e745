//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, emacs)
//! and per-action overrides loaded from the config file.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

/// Whether a key event produces text rather than a command.
///
/// Plain and shifted characters are text. Anything chorded with Ctrl, Alt or
/// Super is a command.
pub fn is_text_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(code, KeyCode::Char(_))
        && !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset
    /// Note: If an action is overridden, preset bindings for that action are ignored
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Like [`Keymap::get_action`], but text keys never resolve to an action.
    ///
    /// Used while a text field has focus so that a user override such as
    /// `q = quit` cannot swallow typed characters.
    pub fn get_action_for_text_input(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<Action> {
        if is_text_key(code, modifiers) {
            return None;
        }
        self.get_action(code, modifiers)
    }

    /// Get all bindings (overrides + preset) for display in help
    /// Overrides shadow preset bindings for the same action
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();

        for preset_binding in self.preset.bindings() {
            let is_overridden = self
                .overrides
                .iter()
                .any(|o| o.action == preset_binding.action);
            if !is_overridden {
                bindings.push(preset_binding);
            }
        }

        bindings
    }

    /// Log overrides whose key strings do not parse. They never match.
    pub fn validate(&self) -> usize {
        let mut invalid = 0;
        for binding in &self.overrides {
            if let Err(e) = binding.parse() {
                warn!(
                    "Ignoring keymap override {:?} for {:?}: {}",
                    binding.key, binding.action, e
                );
                invalid += 1;
            }
        }
        invalid
    }

    /// The binding that answers to `action`: the first override, else the
    /// first preset binding.
    pub fn binding_for_action(&self, action: Action) -> Option<KeyBinding> {
        self.overrides
            .iter()
            .find(|b| b.action == action)
            .cloned()
            .or_else(|| {
                self.preset
                    .bindings()
                    .into_iter()
                    .find(|b| b.action == action)
            })
    }

    /// Get the display string for a specific action (e.g., Action::Quit -> "Esc")
    /// Checks overrides first, then preset. Returns generic fallback if not found.
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.binding_for_action(action)
            .map_or_else(|| format!("{:?}", action), |binding| binding.display())
    }

    /// `Label: Keys` footer hint. An override's description replaces the label.
    fn hint(&self, action: Action) -> String {
        match self.binding_for_action(action) {
            Some(binding) => format!("{}: {}", binding.get_description(), binding.display()),
            None => format!("{}: {:?}", action.description(), action),
        }
    }

    /// Footer text for the input view
    pub fn footer_editing(&self) -> String {
        format!(
            "{} | Focus: {} | {}",
            self.hint(Action::Confirm),
            self.get_key_display_for_action(Action::NextField),
            self.hint(Action::Quit)
        )
    }

    /// Footer text for the greeting view
    pub fn footer_submitted(&self) -> String {
        self.hint(Action::Quit)
    }
}
