//! Screen controllers for the application.
//!
//! Each screen implements [`Screen`]: it owns its state and handles both
//! rendering and events. The app draws the active screen every frame and
//! routes terminal events to it.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │                   App                    │
//! │   poll event ─▶ screen.handle_event()    │
//! │                    │                     │
//! │        ScreenAction::{None,Update,Quit}  │
//! │                    ▼                     │
//! │   tui.draw(|f| screen.render(f, ...))    │
//! └──────────────────────────────────────────┘
//! ```

pub mod hello;
pub mod screen_trait;

pub use hello::{Focus, HelloScreen};
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
