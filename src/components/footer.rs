use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common footer component
pub struct Footer;

impl Footer {
    /// Height used by the footer (1 for border, 1 for text)
    pub const HEIGHT: u16 = 2;

    /// Render a footer of `Label: Keys` hints separated by ` | `.
    pub fn render(frame: &mut Frame, area: Rect, text: &str) {
        let (block, line) = Self::build(text);
        let inner = block.inner(area);

        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), inner);
    }

    fn build(text: &str) -> (Block<'static>, Line<'_>) {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }

            // Split on ": " to separate label from keys
            if let Some((label, keys)) = part.split_once(": ") {
                spans.push(Span::styled(format!("{}: ", label), t.title_style()));
                spans.push(Span::styled(
                    keys,
                    t.text_style().add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(part, t.text_style()));
            }
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style())
            .style(t.background_style());

        (block, Line::from(spans))
    }
}
