//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Every key
//! press is one discrete action; 2048 has no auto-repeat or timing.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
