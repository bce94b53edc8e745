//! welcome-hello - a one-screen terminal greeter
//!
//! Asks for a name in a single-line field and, once submitted through the
//! confirm key or the Done button, replaces the form with `Hello <name>!`.

// Core modules
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod screens;
pub mod state;
pub mod strings;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use screens::HelloScreen;
pub use state::{greeting_for, ScreenController, ScreenState};
pub use strings::{StringKey, StringTable};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
