//! Push button widget.
//!
//! A bordered, single-line label. Focus inverts the face so keyboard users
//! can see which control Enter/Space will activate.

use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Horizontal padding inside the border on each side of the label
const LABEL_PADDING: u16 = 2;

pub struct Button<'a> {
    label: &'a str,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Columns needed to draw `label` with borders and padding.
    pub fn width_for(label: &str) -> u16 {
        let label_width = Line::from(label).width() as u16;
        label_width.saturating_add(2 * LABEL_PADDING + 2)
    }

    /// Rows needed: one label line between two borders.
    pub const HEIGHT: u16 = 3;
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let border_style = if self.focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        let label = Line::from(Span::styled(
            format!(" {} ", self.label),
            t.button_style(self.focused),
        ));

        Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
