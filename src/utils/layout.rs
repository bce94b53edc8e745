use ratatui::prelude::*;

/// Split an area into content and a footer of `footer_height` rows
pub fn split_footer(area: Rect, footer_height: u16) -> (Rect, Rect) {
    let [content, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(footer_height)]).areas(area);
    (content, footer)
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(center_rect(area, 20, 4), Rect::new(30, 10, 20, 4));
    }

    #[test]
    fn test_center_rect_clamps() {
        let area = Rect::new(5, 5, 10, 3);
        assert_eq!(center_rect(area, 40, 10), area);
    }

    #[test]
    fn test_split_footer() {
        let (content, footer) = split_footer(Rect::new(0, 0, 80, 24), 2);
        assert_eq!(content, Rect::new(0, 0, 80, 22));
        assert_eq!(footer, Rect::new(0, 22, 80, 2));
    }
}
