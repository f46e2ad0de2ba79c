//! JSON-backed store of per-position move statistics
//!
//! Every board position is keyed by its 36-character string form; under
//! each position, moves are keyed as `"row,col"` and carry win/play
//! counters. During a game the engine logs each move it plays; when the
//! game ends the log is folded into the counters and the whole map is
//! rewritten to disk.
//!
//! The store degrades silently on load: an absent or unreadable file
//! simply yields an empty store, so a corrupted memory file can never
//! prevent the engine from moving. Write failures do surface, but the
//! engine treats them as non-fatal.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Pos, BOARD_SIZE};

/// A move is recommended only while its win ratio is strictly above this
pub const RATIO_THRESHOLD: f64 = 0.4;

/// Errors from persisting the store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Win/play counters for one move in one position
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MoveStat {
    pub wins: u32,
    pub plays: u32,
}

impl MoveStat {
    #[inline]
    #[must_use]
    pub fn ratio(self) -> f64 {
        if self.plays == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.plays)
        }
    }
}

/// Move statistics across games, optionally persisted to a JSON file.
pub struct LearningStore {
    path: Option<PathBuf>,
    states: HashMap<String, HashMap<String, MoveStat>>,
    game_log: Vec<(String, Pos)>,
}

impl LearningStore {
    /// Open a store backed by `path`, loading any existing statistics.
    ///
    /// A missing or malformed file yields an empty store.
    #[must_use]
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let states = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self {
            path: Some(path),
            states,
            game_log: Vec::new(),
        }
    }

    /// Store with no backing file; statistics live for the process only.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            path: None,
            states: HashMap::new(),
            game_log: Vec::new(),
        }
    }

    /// Log a move played from `board` (the position before the move).
    pub fn record_move(&mut self, board: &Board, mov: Pos) {
        self.game_log.push((board.key(), mov));
    }

    /// Number of moves logged for the game in progress
    #[must_use]
    pub fn pending_moves(&self) -> usize {
        self.game_log.len()
    }

    /// Number of distinct positions with recorded statistics
    #[must_use]
    pub fn known_positions(&self) -> usize {
        self.states.len()
    }

    /// Fold the finished game's log into the counters and persist.
    ///
    /// Every logged move gets a play; `won` additionally credits a win.
    /// The log is cleared whether or not the flush succeeds.
    pub fn learn_from_game(&mut self, won: bool) -> Result<(), StoreError> {
        for (key, mov) in self.game_log.drain(..) {
            let stat = self
                .states
                .entry(key)
                .or_default()
                .entry(move_key(mov))
                .or_default();
            stat.plays += 1;
            if won {
                stat.wins += 1;
            }
        }
        self.flush()
    }

    /// Write the full statistics map to the backing file.
    ///
    /// Writes to a temporary sibling first and renames it into place, so
    /// a crash mid-write never leaves a truncated store behind. A store
    /// with no backing file is a no-op.
    pub fn flush(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(&self.states)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Best remembered move for this position, if one has earned trust.
    ///
    /// Considers only moves with at least one recorded play whose win
    /// ratio is strictly above [`RATIO_THRESHOLD`] and whose target cell
    /// is still empty on `board`. Ties on the best ratio are broken at
    /// random. Unparseable move keys are skipped.
    #[must_use]
    pub fn learned_move(&self, board: &Board) -> Option<Pos> {
        let moves = self.states.get(&board.key())?;

        let mut best_ratio = RATIO_THRESHOLD;
        let mut best_moves: Vec<Pos> = Vec::new();
        for (key, stat) in moves {
            if stat.plays == 0 {
                continue;
            }
            let Some(pos) = parse_move_key(key) else {
                continue;
            };
            if !board.is_empty(pos) {
                continue;
            }
            let ratio = stat.ratio();
            if ratio > best_ratio {
                best_ratio = ratio;
                best_moves.clear();
                best_moves.push(pos);
            } else if ratio == best_ratio && !best_moves.is_empty() {
                best_moves.push(pos);
            }
        }

        best_moves.choose(&mut rand::thread_rng()).copied()
    }
}

#[inline]
fn move_key(pos: Pos) -> String {
    format!("{},{}", pos.row, pos.col)
}

fn parse_move_key(key: &str) -> Option<Pos> {
    let (row, col) = key.split_once(',')?;
    let row: u8 = row.trim().parse().ok()?;
    let col: u8 = col.trim().parse().ok()?;
    if row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8 {
        Some(Pos::new(row, col))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;
    use tempfile::tempdir;

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("memory.json");

        let board = Board::new();
        let mut store = LearningStore::load(&path);
        store.record_move(&board, Pos::new(2, 2));
        store.learn_from_game(true).expect("flush");

        let reloaded = LearningStore::load(&path);
        assert_eq!(reloaded.known_positions(), 1);
        assert_eq!(
            reloaded.learned_move(&board),
            Some(Pos::new(2, 2)),
            "a 1/1 move is above threshold and must be recalled"
        );
    }

    #[test]
    fn test_missing_file_yields_empty_store() {
        let dir = tempdir().expect("tempdir");
        let store = LearningStore::load(dir.path().join("nope.json"));
        assert_eq!(store.known_positions(), 0);
        assert_eq!(store.learned_move(&Board::new()), None);
    }

    #[test]
    fn test_malformed_file_yields_empty_store() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("memory.json");
        fs::write(&path, "{not json at all").expect("write garbage");

        let store = LearningStore::load(&path);
        assert_eq!(store.known_positions(), 0);
    }

    #[test]
    fn test_losses_push_ratio_below_threshold() {
        let board = Board::new();
        let mut store = LearningStore::in_memory();

        // One win then two losses for the same move: ratio 1/3
        store.record_move(&board, Pos::new(3, 3));
        store.learn_from_game(true).expect("flush");
        for _ in 0..2 {
            store.record_move(&board, Pos::new(3, 3));
            store.learn_from_game(false).expect("flush");
        }

        assert_eq!(store.learned_move(&board), None);
    }

    #[test]
    fn test_threshold_is_strict() {
        // 2 wins out of 5 plays is exactly 0.4 and must not qualify
        let board = Board::new();
        let mut store = LearningStore::in_memory();
        for i in 0..5 {
            store.record_move(&board, Pos::new(2, 3));
            store.learn_from_game(i < 2).expect("flush");
        }
        assert_eq!(store.learned_move(&board), None);
    }

    #[test]
    fn test_stale_stats_skip_taken_cell() {
        let mut store = LearningStore::in_memory();
        let before = Board::new();
        store.record_move(&before, Pos::new(2, 2));
        store.learn_from_game(true).expect("flush");

        // Force the stored key to describe a board where (2,2) is taken
        let key = before.key();
        let stats = store.states.remove(&key).expect("stats recorded");
        let mut taken = Board::new();
        taken.place(Pos::new(2, 2), Mark::Ai);
        store.states.insert(taken.key(), stats);

        assert_eq!(store.learned_move(&taken), None);
    }

    #[test]
    fn test_log_cleared_after_learning() {
        let board = Board::new();
        let mut store = LearningStore::in_memory();
        store.record_move(&board, Pos::new(1, 1));
        store.record_move(&board, Pos::new(4, 4));
        assert_eq!(store.pending_moves(), 2);

        store.learn_from_game(false).expect("flush");
        assert_eq!(store.pending_moves(), 0);
    }

    #[test]
    fn test_move_key_parsing() {
        assert_eq!(parse_move_key("2,3"), Some(Pos::new(2, 3)));
        assert_eq!(parse_move_key("0,5"), Some(Pos::new(0, 5)));
        assert_eq!(parse_move_key("6,0"), None);
        assert_eq!(parse_move_key("2"), None);
        assert_eq!(parse_move_key("a,b"), None);
    }
}
