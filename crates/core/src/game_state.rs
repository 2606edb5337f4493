//! Game state module - manages the complete game state
//!
//! This module ties together the board, the line merge and the tile spawner.
//! It owns the live board, the initial board used by `restart`, the score,
//! the lifecycle status and the injected random source.
//!
//! The engine never evaluates win/lose or spawns tiles on its own inside
//! [`GameState::move_tiles`]; callers sequence those steps, either by hand or
//! through [`GameState::play_turn`].

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info};

use crate::board::Board;
use crate::merge::merge_line;
use crate::rng::{seeded, spawn_tile, Spawn};
use crate::snapshot::GameSnapshot;
use crate::types::{
    Direction, EngineError, GameAction, Grid, Status, BOARD_SIZE, START_TILES, WIN_TILE,
};

/// What a single `move_tiles` call did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveSummary {
    /// Whether any cell changed
    pub changed: bool,
    /// Score added by this move (sum of merged tile values)
    pub gained: u64,
    /// Number of merges across all four lines
    pub merges: u32,
}

/// Result of a full turn (move, change detection, spawn, win/lose checks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnOutcome {
    pub changed: bool,
    pub gained: u64,
    /// Tile spawned after the move, if any
    pub spawned: Option<Spawn>,
    pub won: bool,
    pub lost: bool,
}

impl TurnOutcome {
    /// Outcome of a turn that was not played (game not in progress)
    pub fn ignored() -> Self {
        Self::default()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    board: Board,
    initial: Board,
    score: u64,
    status: Status,
    /// Turns that changed the board since the last restart.
    moves: u32,
    rng: R,
}

impl GameState<StdRng> {
    /// Create a new game on an empty board with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Board::new(), seeded(seed))
    }

    /// Create a new game from an initial grid, validating it first
    pub fn with_initial(grid: Grid, seed: u64) -> Result<Self, EngineError> {
        let initial = Board::try_from(grid)?;
        Ok(Self::with_rng(initial, seeded(seed)))
    }
}

impl<R: Rng> GameState<R> {
    /// Create a game from a validated initial board and any random source
    pub fn with_rng(initial: Board, rng: R) -> Self {
        Self {
            board: initial,
            initial,
            score: 0,
            status: Status::Idle,
            moves: 0,
            rng,
        }
    }

    /// Current grid (a copy; mutating it does not affect the game)
    pub fn state(&self) -> Grid {
        self.board.grid()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.board.grid();
        out.score = self.score;
        out.status = self.status;
        out.moves = self.moves;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Slide every line of the board in `dir`, merging equal neighbours.
    ///
    /// Runs on all four lines even when nothing moves. Adds merged values to
    /// the score. Does not spawn tiles or evaluate win/lose.
    pub fn move_tiles(&mut self, dir: Direction) -> MoveSummary {
        let before = self.board;
        let mut gained = 0;
        let mut merges = 0;

        for i in 0..BOARD_SIZE {
            let m = merge_line(self.board.read_line(dir, i));
            self.board.write_line(dir, i, m.line);
            gained += m.gained;
            merges += m.merges;
        }

        self.score = self.score.saturating_add(gained);
        let changed = self.board != before;
        debug!(direction = dir.as_str(), gained, merges, changed, "move");

        MoveSummary {
            changed,
            gained,
            merges,
        }
    }

    /// Place a 2 (90%) or 4 (10%) in a uniformly chosen empty cell.
    ///
    /// No-op returning `None` when the board is full.
    pub fn add_random_tile(&mut self) -> Option<Spawn> {
        let spawn = spawn_tile(&mut self.board, &mut self.rng);
        match spawn {
            Some(s) => debug!(row = s.row, col = s.col, value = s.value, "spawn"),
            None => debug!("spawn skipped: board full"),
        }
        spawn
    }

    /// Set status to Win if any tile equals 2048
    pub fn check_win(&mut self) -> bool {
        if self.board.contains(WIN_TILE) {
            self.status = Status::Win;
            info!(score = self.score, "game won");
            return true;
        }
        false
    }

    /// Set status to Lose if the board has no empty cell.
    ///
    /// A full board loses even if a merge is still possible.
    pub fn check_lose(&mut self) -> bool {
        if !self.board.is_full() {
            return false;
        }
        self.status = Status::Lose;
        info!(score = self.score, max_tile = self.board.max_tile(), "game lost");
        true
    }

    /// Start the game: status Playing and two random tiles
    pub fn start(&mut self) {
        self.status = Status::Playing;
        for _ in 0..START_TILES {
            self.add_random_tile();
        }
        info!("game started");
    }

    /// Restore the initial board, zero the score and go back to Idle.
    ///
    /// The random source is kept as-is, so a restarted game does not replay
    /// the same spawns.
    pub fn restart(&mut self) {
        self.board = self.initial;
        self.score = 0;
        self.moves = 0;
        self.status = Status::Idle;
        info!("game restarted");
    }

    /// Play one full turn in `dir`.
    ///
    /// Moves, then spawns a tile if the board changed and the game was not
    /// won; if nothing changed, checks for a loss. Ignored unless Playing.
    pub fn play_turn(&mut self, dir: Direction) -> TurnOutcome {
        if self.status != Status::Playing {
            return TurnOutcome::ignored();
        }

        let before = self.board.grid();
        let summary = self.move_tiles(dir);
        let changed = before != self.board.grid();

        let mut outcome = TurnOutcome {
            changed,
            gained: summary.gained,
            ..TurnOutcome::default()
        };

        if changed {
            self.moves += 1;
            outcome.won = self.check_win();
            if !outcome.won {
                outcome.spawned = self.add_random_tile();
            }
        } else {
            outcome.lost = self.check_lose();
        }

        outcome
    }

    /// Apply a frontend action. Returns whether the game state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(dir) => self.play_turn(dir).changed,
            GameAction::Start => {
                if self.status != Status::Idle {
                    return false;
                }
                self.start();
                true
            }
            GameAction::Restart => {
                let before = self.snapshot();
                self.restart();
                before != self.snapshot()
            }
        }
    }
}
