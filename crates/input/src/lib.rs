//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every key
//! press becomes at most one action; there is no key repeat handling beyond
//! what the terminal itself sends.

pub mod map;

pub use tetris_sprint_types as types;

pub use map::{handle_key_event, should_quit};
