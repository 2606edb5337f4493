//! Runtime configuration, read from the environment (and an optional `.env`).
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `TUI2048_SEED` | RNG seed; random when unset |
//! | `TUI2048_INITIAL_GRID` | initial grid, e.g. `2,2,0,0/0,0,0,0/0,0,0,0/0,0,0,4` |
//! | `TUI2048_LOG_FILE` | write `tracing` output to this file |
//! | `RUST_LOG` | log filter directives (default `info`) |

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::{Board, GameState};

pub const SEED_VAR: &str = "TUI2048_SEED";
pub const INITIAL_GRID_VAR: &str = "TUI2048_INITIAL_GRID";
pub const LOG_FILE_VAR: &str = "TUI2048_LOG_FILE";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u64,
    pub initial: Board,
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let seed = match get(SEED_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got {raw:?}"))?,
            None => rand::random(),
        };

        let initial = match get(INITIAL_GRID_VAR) {
            Some(raw) => raw
                .parse::<Board>()
                .with_context(|| format!("{INITIAL_GRID_VAR} is not a valid 4x4 grid"))?,
            None => Board::new(),
        };

        Ok(Self {
            seed,
            initial,
            log_file: get(LOG_FILE_VAR).map(PathBuf::from),
            log_filter: get(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    pub fn new_game(&self) -> GameState {
        GameState::with_rng(self.initial, crate::core::rng::seeded(self.seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.initial, Board::new());
        assert_eq!(cfg.log_file, None);
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn reads_all_values() {
        let cfg = AppConfig::from_lookup(lookup(&[
            (SEED_VAR, " 42 "),
            (INITIAL_GRID_VAR, "2,2,0,0/0,0,0,0/0,0,0,0/0,0,0,4"),
            (LOG_FILE_VAR, "/tmp/2048.log"),
            (LOG_FILTER_VAR, "debug"),
        ]))
        .unwrap();

        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.initial.grid()[0], [2, 2, 0, 0]);
        assert_eq!(cfg.initial.grid()[3], [0, 0, 0, 4]);
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/2048.log")));
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn empty_values_count_as_unset() {
        let cfg = AppConfig::from_lookup(lookup(&[(LOG_FILE_VAR, ""), (INITIAL_GRID_VAR, "  ")]))
            .unwrap();
        assert_eq!(cfg.log_file, None);
        assert_eq!(cfg.initial, Board::new());
    }

    #[test]
    fn rejects_bad_seed_and_grid() {
        assert!(AppConfig::from_lookup(lookup(&[(SEED_VAR, "-1")])).is_err());
        let bad_tile = "3,0,0,0/0,0,0,0/0,0,0,0/0,0,0,0";
        assert!(AppConfig::from_lookup(lookup(&[(INITIAL_GRID_VAR, bad_tile)])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[(INITIAL_GRID_VAR, "2,2,2,2")])).is_err());
    }

    #[test]
    fn same_seed_same_game() {
        let cfg = AppConfig::from_lookup(lookup(&[(SEED_VAR, "7")])).unwrap();
        let mut a = cfg.new_game();
        let mut b = cfg.new_game();
        a.start();
        b.start();
        assert_eq!(a.state(), b.state());
    }
}
