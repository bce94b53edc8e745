//! Text input widget for rendering TextInput instances.
//!
//! Draws a rounded, bordered single-line field with placeholder support and
//! places the terminal cursor when focused.

use crate::styles::theme;
use crate::utils::text_input::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// A widget for rendering TextInput with consistent styling.
///
/// # Example
/// ```
/// use welcome_hello::widgets::TextInputWidget;
/// use welcome_hello::utils::TextInput;
///
/// let input = TextInput::with_text("hello");
/// let widget = TextInputWidget::new(&input)
///     .placeholder("Your name")
///     .focused(true);
/// // frame.render_text_input_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    /// Reference to the text input state
    input: &'a TextInput,
    /// Placeholder text when empty
    placeholder: Option<&'a str>,
    /// Whether the input is focused
    focused: bool,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            placeholder: None,
            focused: false,
        }
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Set whether the input is focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// The text to draw: the value, or the placeholder when empty.
    fn display_text(&self) -> &'a str {
        let text = self.input.text();
        if text.is_empty() {
            self.placeholder.unwrap_or("")
        } else {
            text
        }
    }

    fn text_style(&self) -> Style {
        let t = theme();
        if self.input.is_empty() {
            t.placeholder_style()
        } else {
            t.text_style()
        }
    }

    fn create_block(&self) -> Block<'a> {
        let t = theme();
        let border_style = if self.focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
    }

    /// Display widths of the characters before the cursor.
    fn widths_before_cursor(&self) -> Vec<usize> {
        self.input
            .text()
            .chars()
            .take(self.input.cursor())
            .map(char_width)
            .collect()
    }

    /// Characters scrolled off the left so the cursor cell fits in `width`
    /// columns.
    fn scroll_offset(&self, width: u16) -> usize {
        let width = usize::from(width);
        if width == 0 {
            return 0;
        }
        let widths = self.widths_before_cursor();
        let mut visible: usize = widths.iter().sum();
        let mut skipped = 0;
        while visible + 1 > width && skipped < widths.len() {
            visible -= widths[skipped];
            skipped += 1;
        }
        skipped
    }

    /// Cursor position inside the field's inner area.
    fn cursor_position(&self, inner: Rect) -> Position {
        let offset = self.scroll_offset(inner.width);
        let column: usize = self.widths_before_cursor().iter().skip(offset).sum();
        let column = u16::try_from(column).unwrap_or(u16::MAX);
        Position::new(
            inner.x + column.min(inner.width.saturating_sub(1)),
            inner.y,
        )
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.create_block();
        let inner = block.inner(area);
        let offset = if self.input.is_empty() {
            0
        } else {
            self.scroll_offset(inner.width)
        };
        let visible: String = self.display_text().chars().skip(offset).collect();

        Paragraph::new(visible)
            .block(block)
            .style(self.text_style())
            .render(area, buf);
    }
}

/// Terminal columns taken by `c` (2 for CJK and most emoji).
fn char_width(c: char) -> usize {
    let mut buf = [0; 4];
    Span::raw(&*c.encode_utf8(&mut buf)).width()
}

/// Extension trait for Frame to render TextInputWidget with cursor support.
///
/// The Widget trait has no access to Frame, so the cursor is placed here.
pub trait TextInputWidgetExt {
    /// Render a TextInputWidget and set cursor position if focused.
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let inner = widget.create_block().inner(area);
        let cursor = widget.focused.then(|| widget.cursor_position(inner));

        self.render_widget(widget, area);

        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_widget_builder() {
        let input = TextInput::with_text("test");
        let widget = TextInputWidget::new(&input)
            .placeholder("Enter text")
            .focused(true);
        assert!(widget.focused);
        assert_eq!(widget.placeholder, Some("Enter text"));
    }

    #[test]
    fn test_display_text_empty_with_placeholder() {
        let input = TextInput::new();
        let widget = TextInputWidget::new(&input).placeholder("Your name");
        assert_eq!(widget.display_text(), "Your name");
    }

    #[test]
    fn test_display_text_normal() {
        let input = TextInput::with_text("hello");
        let widget = TextInputWidget::new(&input).placeholder("Your name");
        assert_eq!(widget.display_text(), "hello");
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        let input = TextInput::with_text("abcdefghij");
        let widget = TextInputWidget::new(&input);
        assert_eq!(widget.scroll_offset(4), 7);
        assert_eq!(widget.scroll_offset(20), 0);
        assert_eq!(widget.scroll_offset(0), 0);
    }

    #[test]
    fn test_renders_placeholder_inside_border() {
        let input = TextInput::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 14, 3));
        TextInputWidget::new(&input)
            .placeholder("Your name")
            .render(buf.area, &mut buf);

        assert_eq!(row(&buf, 1), "│Your name   │");
    }

    #[test]
    fn test_focused_render_places_cursor() {
        let mut terminal = Terminal::new(TestBackend::new(12, 3)).unwrap();
        let input = TextInput::with_text("Ana");
        terminal
            .draw(|frame| {
                let area = frame.area();
                let widget = TextInputWidget::new(&input).focused(true);
                frame.render_text_input_widget(widget, area);
            })
            .unwrap();

        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(4, 1));
    }

    #[test]
    fn test_scroll_counts_display_columns() {
        let input = TextInput::with_text("山田太郎");
        let widget = TextInputWidget::new(&input);
        // 8 columns of text plus the cursor cell in a 4-column field
        assert_eq!(widget.scroll_offset(4), 3);
        assert_eq!(widget.scroll_offset(9), 0);
        assert_eq!(
            widget.cursor_position(Rect::new(1, 1, 4, 1)),
            Position::new(3, 1)
        );
    }

    #[test]
    fn test_cursor_after_wide_glyphs() {
        let mut terminal = Terminal::new(TestBackend::new(12, 3)).unwrap();
        let input = TextInput::with_text("山田");
        terminal
            .draw(|frame| {
                let area = frame.area();
                let widget = TextInputWidget::new(&input).focused(true);
                frame.render_text_input_widget(widget, area);
            })
            .unwrap();

        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(5, 1));
    }
}
