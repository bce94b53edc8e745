//! Greeting screen state machine.
//!
//! The screen is either collecting a name or showing the greeting. The
//! [`ScreenState`] enum makes the two views mutually exclusive: the name
//! field only exists while editing, and the submitted name is frozen.

use crate::utils::text_input::{KeyboardOptions, TextInput};
use std::fmt;
use tracing::{debug, info};

/// Literal greeting for a submitted name.
///
/// Never localized and never validated: an empty name yields `"Hello !"`.
pub fn greeting_for(name: &str) -> String {
    format!("Hello {}!", name)
}

/// Which affordance fired a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// Confirm action while the name field has focus (Enter by default).
    ConfirmAction,
    /// The submit button was activated by key or mouse.
    SubmitControl,
}

impl fmt::Display for SubmitTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitTrigger::ConfirmAction => f.write_str("confirm action"),
            SubmitTrigger::SubmitControl => f.write_str("submit control"),
        }
    }
}

/// Result of feeding an event into the controller.
///
/// Anything other than `None` means the screen must be redrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    /// The text or the cursor changed; still editing.
    Edited,
    /// Editing -> Submitted.
    Submitted(SubmitTrigger),
}

impl Transition {
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Transition::None)
    }
}

/// The two view states of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    /// Collecting a name.
    Editing(TextInput),
    /// Terminal: the greeting for `name` is shown.
    Submitted { name: String },
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::Editing(TextInput::new().with_options(KeyboardOptions::name_field()))
    }
}

/// Owns the entered name and the submission flag for one screen instance.
#[derive(Debug, Clone, Default)]
pub struct ScreenController {
    state: ScreenState,
}

impl ScreenController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// The submission flag.
    pub fn is_submitted(&self) -> bool {
        matches!(self.state, ScreenState::Submitted { .. })
    }

    /// Current name: the live field value, or the frozen submitted value.
    pub fn name(&self) -> &str {
        match &self.state {
            ScreenState::Editing(input) => input.text(),
            ScreenState::Submitted { name } => name,
        }
    }

    /// The name field, while editing.
    pub fn input(&self) -> Option<&TextInput> {
        match &self.state {
            ScreenState::Editing(input) => Some(input),
            ScreenState::Submitted { .. } => None,
        }
    }

    /// Greeting text, once submitted.
    pub fn greeting(&self) -> Option<String> {
        match &self.state {
            ScreenState::Editing(_) => None,
            ScreenState::Submitted { name } => Some(greeting_for(name)),
        }
    }

    /// Replace the whole field value, as a text-change event does.
    pub fn set_name(&mut self, text: impl Into<String>) -> Transition {
        self.edit(|input| input.set_text(text))
    }

    /// Apply an edit to the name field.
    ///
    /// Ignored once submitted. Returns `Edited` when the text or cursor moved.
    pub fn edit<F>(&mut self, f: F) -> Transition
    where
        F: FnOnce(&mut TextInput),
    {
        let ScreenState::Editing(input) = &mut self.state else {
            return Transition::None;
        };

        let old_text = input.text().to_string();
        let old_cursor = input.cursor();
        f(input);

        if input.text() != old_text {
            debug!(chars = input.text().chars().count(), "Name changed");
            Transition::Edited
        } else if input.cursor() != old_cursor {
            Transition::Edited
        } else {
            Transition::None
        }
    }

    /// Fire a submit trigger. The first one wins; later ones are no-ops.
    pub fn submit(&mut self, trigger: SubmitTrigger) -> Transition {
        let ScreenState::Editing(input) = &mut self.state else {
            return Transition::None;
        };

        let name = std::mem::take(input).into_text();
        info!(
            trigger = %trigger,
            empty = name.is_empty(),
            "Name submitted"
        );
        self.state = ScreenState::Submitted { name };
        Transition::Submitted(trigger)
    }
}
