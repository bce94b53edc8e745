//! Shared test utilities for greeting screen integration tests.
//!
//! Provides `TestScreen` - a `HelloScreen` driven by synthetic crossterm
//! events and rendered into a `TestBackend`.

#![allow(dead_code)]

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use welcome_hello::screens::{HelloScreen, RenderContext, Screen, ScreenAction, ScreenContext};
use welcome_hello::strings::{Locale, StringTable};
use welcome_hello::Keymap;

pub const WIDTH: u16 = 64;
pub const HEIGHT: u16 = 16;

pub struct TestScreen {
    pub screen: HelloScreen,
    pub keymap: Keymap,
    pub strings: StringTable,
}

impl TestScreen {
    pub fn new() -> Self {
        Self::with_keymap(Keymap::default())
    }

    pub fn with_keymap(keymap: Keymap) -> Self {
        Self {
            screen: HelloScreen::new(),
            keymap,
            strings: StringTable::new(Locale::English),
        }
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.strings = StringTable::new(locale);
        self
    }

    pub fn send(&mut self, event: Event) -> ScreenAction {
        let ctx = ScreenContext::new(&self.keymap);
        self.screen.handle_event(event, &ctx).unwrap()
    }

    pub fn press(&mut self, code: KeyCode) -> ScreenAction {
        self.send(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    pub fn chord(&mut self, code: KeyCode, modifiers: KeyModifiers) -> ScreenAction {
        self.send(Event::Key(KeyEvent::new(code, modifiers)))
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    pub fn click(&mut self, column: u16, row: u16) -> ScreenAction {
        self.send(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    /// Render one frame and return it as text rows.
    pub fn render(&mut self) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        let ctx = RenderContext::new(&self.strings, &self.keymap);
        let screen = &mut self.screen;
        terminal
            .draw(|frame| {
                let area = frame.area();
                screen.render(frame, area, &ctx).unwrap();
            })
            .unwrap();

        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    pub fn render_text(&mut self) -> String {
        self.render().join("\n")
    }

    /// Screen coordinates of the first cell showing `needle`.
    pub fn find(&mut self, needle: &str) -> Option<(u16, u16)> {
        self.render().iter().enumerate().find_map(|(y, row)| {
            row.find(needle).map(|byte| {
                let column = row[..byte].chars().count();
                (column as u16, y as u16)
            })
        })
    }

    /// Non-whitespace characters of the screen above the footer, in
    /// reading order. Wrapped lines and wide-glyph padding cells collapse.
    pub fn content_compact(&mut self) -> String {
        let rows = self.render();
        rows[..rows.len() - 2]
            .concat()
            .split_whitespace()
            .collect()
    }
}

/// `text` without whitespace, for comparison with [`TestScreen::content_compact`].
pub fn compact(text: &str) -> String {
    text.split_whitespace().collect()
}
