//! Move-decision orchestrator
//!
//! `Engine` owns the learning store and the searcher and decides each
//! move through a fixed cascade of tiers, cheapest first:
//!
//! 1. Center-threat block
//! 2. Remembered move from earlier games, re-validated against the
//!    current position
//! 3. Immediate win
//! 4. Immediate block
//! 5. Opening book
//! 6. Alpha-beta search
//!
//! Whichever tier resolves the move, the choice is logged against the
//! pre-move position so the end-of-game outcome can be credited to it.

use std::fmt;
use std::path::Path;
use std::time::Instant;

use crate::board::{Board, Mark, Pos};
use crate::eval::evaluate;
use crate::learn::LearningStore;
use crate::search::alphabeta::WIN_SCORE;
use crate::search::{
    find_center_threat, find_immediate_win, find_opening_move, SearchResult, Searcher,
};

/// Which decision tier produced a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    CenterBlock,
    Learned,
    ImmediateWin,
    ImmediateBlock,
    Opening,
    AlphaBeta,
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchType::CenterBlock => "center-block",
            SearchType::Learned => "learned",
            SearchType::ImmediateWin => "immediate-win",
            SearchType::ImmediateBlock => "immediate-block",
            SearchType::Opening => "opening",
            SearchType::AlphaBeta => "alpha-beta",
        };
        f.write_str(name)
    }
}

/// Result of a move decision with timing and search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub best_move: Option<Pos>,
    pub score: i32,
    pub search_type: SearchType,
    pub time_ms: u64,
    pub nodes: u64,
}

impl MoveResult {
    fn center_block(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type: SearchType::CenterBlock,
            time_ms,
            nodes: 0,
        }
    }

    fn learned(pos: Pos, score: i32, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score,
            search_type: SearchType::Learned,
            time_ms,
            nodes: 0,
        }
    }

    fn immediate_win(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: WIN_SCORE,
            search_type: SearchType::ImmediateWin,
            time_ms,
            nodes: 0,
        }
    }

    fn immediate_block(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type: SearchType::ImmediateBlock,
            time_ms,
            nodes: 0,
        }
    }

    fn opening(pos: Pos, time_ms: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type: SearchType::Opening,
            time_ms,
            nodes: 0,
        }
    }

    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }

    fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::AlphaBeta,
            time_ms: 0,
            nodes: 0,
        }
    }
}

/// How a finished game ended, from the automated side's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Loss,
    Draw,
}

/// The move-decision engine for the automated side.
pub struct Engine {
    store: LearningStore,
    searcher: Searcher,
}

impl Engine {
    /// Engine with no persistent memory
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: LearningStore::in_memory(),
            searcher: Searcher::new(),
        }
    }

    /// Engine remembering outcomes in the JSON file at `path`
    #[must_use]
    pub fn with_memory_file(path: impl AsRef<Path>) -> Self {
        Self {
            store: LearningStore::load(path),
            searcher: Searcher::new(),
        }
    }

    /// Decide the next move for the automated side.
    #[must_use]
    pub fn get_move(&mut self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Decide the next move, reporting which tier resolved it.
    ///
    /// Returns `best_move: None` only on a full board. The chosen move is
    /// logged against the pre-move position for end-of-game learning.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        if board.is_full() {
            return MoveResult::no_move();
        }

        let start = Instant::now();
        let mut scratch = board.clone();

        let result = self.decide(&mut scratch, start);
        if let Some(pos) = result.best_move {
            self.store.record_move(board, pos);
        }
        result
    }

    fn decide(&mut self, board: &mut Board, start: Instant) -> MoveResult {
        if let Some(pos) = find_center_threat(board) {
            return MoveResult::center_block(pos, elapsed_ms(start));
        }

        // A remembered move must still make sense here: the position may
        // recur with the surrounding game in a different state of trust.
        if let Some(pos) = self.store.learned_move(board) {
            board.place(pos, Mark::Ai);
            let score = evaluate(board);
            board.clear(pos);
            if score > 0 {
                return MoveResult::learned(pos, score, elapsed_ms(start));
            }
        }

        if let Some(pos) = find_immediate_win(board, Mark::Ai) {
            return MoveResult::immediate_win(pos, elapsed_ms(start));
        }

        if let Some(pos) = find_immediate_win(board, Mark::Human) {
            return MoveResult::immediate_block(pos, elapsed_ms(start));
        }

        if let Some(pos) = find_opening_move(board) {
            return MoveResult::opening(pos, elapsed_ms(start));
        }

        let result = self.searcher.search(board);
        MoveResult::from_search(result, elapsed_ms(start))
    }

    /// Report how the game ended so the logged moves earn their credit.
    ///
    /// A draw counts as a win: not losing on a board this small is the
    /// behavior worth reinforcing. Persistence failures are swallowed;
    /// losing the memory file must never break play.
    pub fn learn_outcome(&mut self, outcome: GameOutcome) {
        let won = outcome != GameOutcome::Loss;
        let _ = self.store.learn_from_game(won);
    }

    /// Moves logged for the game in progress
    #[must_use]
    pub fn pending_moves(&self) -> usize {
        self.store.pending_moves()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
