//! RNG module - random tile spawning
//!
//! The only source of randomness in the engine. Everything here is generic
//! over [`rand::Rng`] so callers can inject a seeded generator and replay a
//! game exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::types::SPAWN_TWO_PROBABILITY;

/// A tile placed by the spawner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Seeded default generator used by [`crate::GameState::new`]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Value of a newly spawned tile: 2 with probability 0.9, otherwise 4
pub fn spawn_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.random_bool(SPAWN_TWO_PROBABILITY) {
        2
    } else {
        4
    }
}

/// Pick an empty cell uniformly at random, `None` if the board is full
pub fn pick_empty<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }
    let i = rng.random_range(0..empty.len());
    empty.get(i).copied()
}

/// Place a random tile on the board, returning what was placed
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<Spawn> {
    let (row, col) = pick_empty(board, rng)?;
    let value = spawn_value(rng);
    board.place(row, col, value);
    Some(Spawn { row, col, value })
}
