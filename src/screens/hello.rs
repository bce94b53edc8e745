//! Greeting screen.
//!
//! Shows a welcome label above a name field and a submit button. Either
//! the confirm action on the field or activating the button replaces the
//! whole view with `Hello <name>!`.

use crate::components::Footer;
use crate::keymap::{is_text_key, Action};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::{ScreenController, SubmitTrigger, Transition};
use crate::strings::StringKey;
use crate::styles::theme;
use crate::utils::{center_rect, split_footer};
use crate::widgets::{Button, TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Wrap};

/// Widest the form grows on large terminals
const MAX_FORM_WIDTH: u16 = 56;
/// Welcome label, a blank row, then the field/button row
const FORM_HEIGHT: u16 = 5;

/// Which control receives keyboard input while editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Field,
    Button,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Field => Focus::Button,
            Focus::Button => Focus::Field,
        }
    }
}

/// The single screen of the application.
#[derive(Debug, Default)]
pub struct HelloScreen {
    controller: ScreenController,
    focus: Focus,
    /// Hit areas from the last render, for mouse clicks
    field_area: Option<Rect>,
    button_area: Option<Rect>,
}

impl HelloScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controller(&self) -> &ScreenController {
        &self.controller
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    fn render_editing(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let Some(input) = self.controller.input() else {
            return;
        };
        let t = theme();

        let width = area.width.saturating_sub(4).min(MAX_FORM_WIDTH);
        let form = center_rect(area, width, FORM_HEIGHT);
        let [welcome_area, _, row_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(Button::HEIGHT),
        ])
        .areas(form);

        frame.render_widget(
            Paragraph::new(ctx.strings.get(StringKey::Welcome))
                .style(t.title_style())
                .alignment(Alignment::Center),
            welcome_area,
        );

        let done = ctx.strings.get(StringKey::Done);
        let [field_area, button_area] = Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(Button::width_for(done)),
        ])
        .spacing(1)
        .areas(row_area);

        let field = TextInputWidget::new(input)
            .placeholder(ctx.strings.get(StringKey::Hint))
            .focused(self.focus == Focus::Field);
        frame.render_text_input_widget(field, field_area);
        frame.render_widget(
            Button::new(done).focused(self.focus == Focus::Button),
            button_area,
        );

        self.field_area = Some(field_area);
        self.button_area = Some(button_area);
    }

    fn render_submitted(&mut self, frame: &mut Frame, area: Rect) {
        self.field_area = None;
        self.button_area = None;

        let greeting = self.controller.greeting().unwrap_or_default();
        let text_width = Line::from(greeting.as_str()).width();
        let width = u16::try_from(text_width)
            .unwrap_or(u16::MAX)
            .min(area.width);

        // Long names wrap instead of being cut at the terminal edge
        let paragraph = Paragraph::new(greeting)
            .style(theme().title_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        let height = u16::try_from(paragraph.line_count(width))
            .unwrap_or(u16::MAX)
            .min(area.height);

        frame.render_widget(paragraph, center_rect(area, width, height));
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        if key.kind != KeyEventKind::Press {
            return ScreenAction::None;
        }

        if self.controller.is_submitted() {
            return match ctx.keymap.get_action(key.code, key.modifiers) {
                Some(Action::Quit) => ScreenAction::Quit,
                _ => ScreenAction::None,
            };
        }

        match self.focus {
            Focus::Field => self.handle_field_key(key, ctx),
            Focus::Button => self.handle_button_key(key, ctx),
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        match ctx.keymap.get_action_for_text_input(key.code, key.modifiers) {
            Some(Action::Confirm) => self.submit(SubmitTrigger::ConfirmAction),
            Some(Action::Quit) => ScreenAction::Quit,
            Some(Action::NextField | Action::PrevField) => self.toggle_focus(),
            Some(action) => {
                Self::to_action(self.controller.edit(|input| {
                    input.handle_action(action);
                }))
            }
            None => match key.code {
                KeyCode::Char(c) if is_text_key(key.code, key.modifiers) => {
                    Self::to_action(self.controller.edit(|input| input.insert_char(c)))
                }
                _ => ScreenAction::None,
            },
        }
    }

    fn handle_button_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        match ctx.keymap.get_action(key.code, key.modifiers) {
            Some(Action::Confirm) => self.submit(SubmitTrigger::SubmitControl),
            Some(Action::Quit) => ScreenAction::Quit,
            Some(Action::NextField | Action::PrevField) => self.toggle_focus(),
            Some(_) => ScreenAction::None,
            None if key.code == KeyCode::Char(' ')
                && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.submit(SubmitTrigger::SubmitControl)
            }
            None => ScreenAction::None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> ScreenAction {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || self.controller.is_submitted()
        {
            return ScreenAction::None;
        }

        let position = Position::new(mouse.column, mouse.row);
        if self.button_area.is_some_and(|r| r.contains(position)) {
            self.focus = Focus::Button;
            return self.submit(SubmitTrigger::SubmitControl);
        }
        if self.field_area.is_some_and(|r| r.contains(position)) && self.focus != Focus::Field {
            self.focus = Focus::Field;
            return ScreenAction::Update;
        }
        ScreenAction::None
    }

    fn handle_paste(&mut self, text: &str) -> ScreenAction {
        if self.controller.is_submitted() {
            return ScreenAction::None;
        }
        let refocused = self.focus != Focus::Field;
        self.focus = Focus::Field;
        match self.controller.edit(|input| input.insert_str(text)) {
            Transition::None if !refocused => ScreenAction::None,
            _ => ScreenAction::Update,
        }
    }

    fn submit(&mut self, trigger: SubmitTrigger) -> ScreenAction {
        Self::to_action(self.controller.submit(trigger))
    }

    fn toggle_focus(&mut self) -> ScreenAction {
        self.focus = self.focus.toggle();
        ScreenAction::Update
    }

    fn to_action(transition: Transition) -> ScreenAction {
        if transition.needs_redraw() {
            ScreenAction::Update
        } else {
            ScreenAction::None
        }
    }
}

impl Screen for HelloScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        frame.render_widget(Block::default().style(theme().background_style()), area);

        let (content, footer) = split_footer(area, Footer::HEIGHT);
        if self.controller.is_submitted() {
            self.render_submitted(frame, content);
            Footer::render(frame, footer, &ctx.keymap.footer_submitted());
        } else {
            self.render_editing(frame, content, ctx);
            Footer::render(frame, footer, &ctx.keymap.footer_editing());
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        Ok(match event {
            Event::Key(key) => self.handle_key(key, ctx),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => self.handle_paste(&text),
            Event::Resize(_, _) => ScreenAction::Update,
            _ => ScreenAction::None,
        })
    }

    fn is_input_focused(&self) -> bool {
        !self.controller.is_submitted() && self.focus == Focus::Field
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        self.focus = Focus::Field;
        Ok(())
    }
}
