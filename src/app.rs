use crate::config::Config;
use crate::screens::{HelloScreen, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::strings::StringTable;
use crate::styles::init_theme;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Main application state
pub struct App {
    config: Config,
    config_path: PathBuf,
    tui: Tui,
    strings: StringTable,
    screen: HelloScreen,
    should_quit: bool,
}

impl App {
    /// Build the app from an already resolved configuration.
    pub fn new(config: Config, config_path: PathBuf) -> Result<Self> {
        init_theme(config.theme_type());
        let invalid = config.keymap.validate();
        let strings = StringTable::new(config.locale());
        let tui = Tui::new()?;

        info!(
            config = ?config_path,
            locale = %strings.locale(),
            theme = config.theme_type().name(),
            keymap = config.keymap.preset.name(),
            invalid_overrides = invalid,
            "Starting welcome-hello"
        );

        Ok(Self {
            config,
            config_path,
            tui,
            strings,
            screen: HelloScreen::new(),
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        self.screen
            .on_enter(&ScreenContext::new(&self.config.keymap))?;

        // Main event loop
        loop {
            self.draw()?;

            if self.should_quit {
                break;
            }

            // Poll for events with 250ms timeout
            if let Some(event) = self.tui.poll_event(Duration::from_millis(250))? {
                self.handle_event(event)?;
            }
        }

        self.tui.exit()?;
        info!(
            submitted = self.screen.controller().is_submitted(),
            "Exiting welcome-hello"
        );
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let ctx = RenderContext::new(&self.strings, &self.config.keymap);
        let screen = &mut self.screen;
        let mut result = Ok(());
        self.tui.draw(|frame| {
            let area = frame.area();
            result = screen.render(frame, area, &ctx);
        })?;
        result
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        let ctx = ScreenContext::new(&self.config.keymap);
        match self.screen.handle_event(event, &ctx)? {
            ScreenAction::Quit => {
                debug!(config = ?self.config_path, "Quit requested");
                self.should_quit = true;
            }
            ScreenAction::Update | ScreenAction::None => {}
        }
        Ok(())
    }
}
