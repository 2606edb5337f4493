//! Read-only view of a game for frontends.
//!
//! Frontends render from snapshots and detect changes by comparing them;
//! the engine itself never draws anything.

use crate::types::{self, Grid, Status, EMPTY_GRID};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub score: u64,
    pub status: Status,
    /// Turns that changed the board since the last restart.
    pub moves: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = EMPTY_GRID;
        self.score = 0;
        self.status = Status::Idle;
        self.moves = 0;
    }

    pub fn playable(&self) -> bool {
        self.status == Status::Playing
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> u32 {
        types::max_tile(&self.grid)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: EMPTY_GRID,
            score: 0,
            status: Status::Idle,
            moves: 0,
        }
    }
}
