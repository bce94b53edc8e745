//! Screen state management.
//!
//! The greeting screen owns a single [`ScreenController`]. Its
//! [`ScreenState`] enum guarantees exactly one of the two views is active:
//!
//! ```text
//!   Editing(TextInput) ──submit trigger──▶ Submitted { name }
//!        │    ▲
//!        └────┘ text change
//! ```
//!
//! `Submitted` is terminal for the lifetime of the screen.

pub mod screen;

pub use screen::{greeting_for, ScreenController, ScreenState, SubmitTrigger, Transition};
