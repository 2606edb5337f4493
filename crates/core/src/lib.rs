//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for 2048.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Randomness is injected through [`rand::Rng`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: validated 4x4 board and line access in traversal order
//! - [`merge`]: compaction and single-pass merging of one line
//! - [`rng`]: random tile spawning (2 at 90%, 4 at 10%)
//! - [`game_state`]: score, status, lifecycle and turn sequencing
//! - [`snapshot`]: read-only view for frontends
//!
//! # Game Rules
//!
//! - A move slides every row (Left/Right) or column (Up/Down) toward the
//!   move direction, merging equal neighbours once per tile per move
//! - Each merge adds the new tile's value to the score
//! - Reaching a 2048 tile wins; a full board loses
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, Status};
//!
//! let mut game = GameState::with_initial(
//!     [[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]],
//!     12345,
//! )
//! .unwrap();
//! game.start();
//!
//! let outcome = game.play_turn(Direction::Left);
//! assert!(outcome.changed);
//! assert!(game.score() >= 4);
//! assert_eq!(game.status(), Status::Playing);
//! ```

pub mod board;
pub mod game_state;
pub mod merge;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Line};
pub use game_state::{GameState, MoveSummary, TurnOutcome};
pub use merge::{merge_line, LineMerge};
pub use rng::Spawn;
pub use snapshot::GameSnapshot;
