//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures, usable from the engine, the terminal
//! frontend and tests alike.
//!
//! # Board Dimensions
//!
//! The board is a fixed 4x4 grid addressed row-major as `grid[row][col]`.
//! A cell holds `0` (empty) or a power of two `>= 2` (a tile).
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIZE` | 4 | Rows and columns of the board |
//! | `WIN_TILE` | 2048 | Tile value that wins the game |
//! | `SPAWN_TWO_PROBABILITY` | 0.9 | Chance a spawned tile is a 2 (otherwise 4) |
//! | `START_TILES` | 2 | Tiles spawned by `start` |
//! | `MAX_TILE` | 2^30 | Largest tile a cell may hold; merges stop there |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Status, BOARD_SIZE, WIN_TILE};
//!
//! // Parse a direction (case-insensitive)
//! let dir: Direction = "Left".parse().unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert!("sideways".parse::<Direction>().is_err());
//!
//! // Status strings match the classic game's vocabulary
//! assert_eq!(Status::Playing.as_str(), "playing");
//!
//! let action = GameAction::Move(Direction::Up);
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(BOARD_SIZE, 4);
//! assert_eq!(WIN_TILE, 2048);
//! ```

use std::fmt;
use std::str::FromStr;

/// Board side length (4 rows, 4 columns)
pub const BOARD_SIZE: usize = 4;

/// Number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Tile value that wins the game
pub const WIN_TILE: u32 = 2048;

/// Probability that a spawned tile is a 2 (the rest are 4s)
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Number of tiles placed when a game starts
pub const START_TILES: usize = 2;

/// Largest tile value a cell may hold.
///
/// Two tiles only merge if the result stays at or below this value, so tile
/// arithmetic never overflows `u32`.
pub const MAX_TILE: u32 = 1 << 30;

/// Row-major 4x4 grid of cell values (`grid[row][col]`)
pub type Grid = [[u32; BOARD_SIZE]; BOARD_SIZE];

/// The all-empty grid
pub const EMPTY_GRID: Grid = [[0; BOARD_SIZE]; BOARD_SIZE];

/// Largest tile in `grid` (0 when empty)
pub fn max_tile(grid: &Grid) -> u32 {
    grid.iter().flatten().copied().max().unwrap_or(0)
}

/// Returns true if `value` may appear in a cell: 0, or a power of two in
/// `2..=MAX_TILE`.
///
/// Takes `i64` so that untrusted input (including negatives) can be checked
/// before it is narrowed into a [`Grid`].
///
/// ```
/// use tui_2048_types::is_tile_value;
///
/// assert!(is_tile_value(0));
/// assert!(is_tile_value(2));
/// assert!(is_tile_value(2048));
/// assert!(!is_tile_value(1));
/// assert!(!is_tile_value(6));
/// assert!(!is_tile_value(-2));
/// assert!(!is_tile_value(1 << 31));
/// ```
pub fn is_tile_value(value: i64) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE as i64 && (value & (value - 1)) == 0)
}

/// Errors raised by the board engine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Direction string did not name one of the four directions
    #[error("invalid direction {0:?}: expected left, right, up or down")]
    InvalidDirection(String),

    /// Grid did not have exactly four rows
    #[error("grid must have {expected} rows, got {actual}")]
    RowCount { expected: usize, actual: usize },

    /// A row did not have exactly four cells
    #[error("row {row} must have {expected} cells, got {actual}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A cell held a negative value or a non power of two
    #[error("cell ({row}, {col}) holds {value}, expected 0 or a power of two >= 2")]
    InvalidTile { row: usize, col: usize, value: i64 },

    /// A cell in a textual grid was not an integer
    #[error("cannot parse grid cell {0:?}")]
    ParseCell(String),
}

/// The four move directions
///
/// Left/Right slide rows, Up/Down slide columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in a stable order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// True for Left/Right (the move operates on rows)
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True for Right/Down (tiles slide toward the high index)
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    /// Parse a direction, case-insensitive
    ///
    /// Accepts full names or single letters: "left" | "l", "right" | "r",
    /// "up" | "u", "down" | "d".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            _ => Err(EngineError::InvalidDirection(s.to_string())),
        }
    }
}

/// Coarse lifecycle phase of a game
///
/// - **Idle**: not started yet (or just restarted)
/// - **Playing**: in progress
/// - **Win**: a 2048 tile was reached
/// - **Lose**: the board filled up
///
/// Transitions: Idle → Playing → {Win, Lose}; restart returns to Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Idle,
    Playing,
    Win,
    Lose,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Playing => "playing",
            Status::Win => "win",
            Status::Lose => "lose",
        }
    }

    /// True once the game has been decided
    pub fn is_over(&self) -> bool {
        matches!(self, Status::Win | Status::Lose)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actions a frontend can apply to a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in a direction (one full turn)
    Move(Direction),
    /// Start an idle game
    Start,
    /// Reset to the initial grid
    Restart,
}
