//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions on the greeting screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Submission ============
    /// Submit the name (confirm-action on the field, or activate the button)
    Confirm,

    // ============ Global ============
    /// Quit the application
    Quit,

    // ============ Focus ============
    /// Move focus to the next control
    NextField,
    /// Move focus to the previous control
    PrevField,

    // ============ Text editing ============
    /// Move the cursor left
    MoveLeft,
    /// Move the cursor right
    MoveRight,
    /// Jump to start of input
    Home,
    /// Jump to end of input
    End,
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::Confirm => "Submit",
            Action::Quit => "Quit",
            Action::NextField => "Next control",
            Action::PrevField => "Previous control",
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::Home => "Home",
            Action::End => "End",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
        }
    }
}
