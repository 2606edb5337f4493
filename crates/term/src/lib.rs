//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It renders game snapshots
//! into a framebuffer that is then flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and free of any drawing
//! - Re-render from snapshots after every state change
//! - Allow precise control over tile size (e.g. 6 columns by 3 rows)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
