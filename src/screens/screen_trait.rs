//! Screen trait and associated types.
//!
//! Screens own their state, draw themselves from a read-only
//! [`RenderContext`], and answer events with a [`ScreenAction`] instead of
//! mutating application state directly.

use crate::keymap::Keymap;
use crate::strings::StringTable;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Localized labels.
    pub strings: &'a StringTable,
    /// Active keymap, used for footer hints.
    pub keymap: &'a Keymap,
}

impl<'a> RenderContext<'a> {
    pub fn new(strings: &'a StringTable, keymap: &'a Keymap) -> Self {
        Self { strings, keymap }
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    /// Active keymap.
    pub keymap: &'a Keymap,
}

impl<'a> ScreenContext<'a> {
    pub fn new(keymap: &'a Keymap) -> Self {
        Self { keymap }
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// Nothing changed.
    #[default]
    None,
    /// Visible state changed; redraw.
    Update,
    /// Request to quit the application.
    Quit,
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// impl Screen for MyScreen {
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         Ok(ScreenAction::None)
///     }
/// }
/// ```
pub trait Screen {
    /// Render the screen into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Check if a text input is currently focused.
    ///
    /// When true, printable keys are text rather than shortcuts.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called when the screen becomes active.
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
