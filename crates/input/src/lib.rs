//! Terminal input mapping.
//!
//! Turns `crossterm` key events into [`InputEvent`]s: one of the eight player
//! intents, or a front-end command (reset, quit) the rules engine never sees.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, InputEvent};
