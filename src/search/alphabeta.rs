//! Depth-limited minimax search with alpha-beta pruning
//!
//! The searcher maximizes for the automated side over all available moves
//! in row-major order, recursing a fixed number of plies past each root
//! move. Marks are placed directly on the caller's board and retracted
//! unconditionally on every exit path, so the board handed back is
//! bit-for-bit identical to the input.
//!
//! At the root only, moves landing in the interior region pick up a small
//! additive bonus from the placed-cell threat measurement. This biases
//! which near-equal move gets selected without altering any value inside
//! the recursion.

use rand::seq::SliceRandom;

use crate::board::{Board, Mark, Pos};
use crate::eval::{evaluate, threat_pressure};
use crate::rules::check_winner;

/// Plies searched beyond each root move
pub const SEARCH_DEPTH: u8 = 3;

/// Score for a won game at a search node; loss is the negation.
/// Deliberately on a different scale than the heuristic.
pub const WIN_SCORE: i32 = 10;

/// Infinity for the alpha-beta window, above any reachable value
const INF: i32 = 1_000_000;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Adjusted minimax value of the chosen move
    pub score: i32,
    /// Total nodes visited
    pub nodes: u64,
}

/// Minimax searcher for the automated side.
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Search for the best move for the automated side.
    ///
    /// Returns `best_move: None` on a full board. Ties on the adjusted
    /// value are broken uniformly at random so the engine is not
    /// deterministically exploitable.
    #[must_use]
    pub fn search(&mut self, board: &mut Board) -> SearchResult {
        self.nodes = 0;

        let moves = board.available_moves();
        if moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: 0,
                nodes: 0,
            };
        }

        let mut best_score = -INF;
        let mut best_moves: Vec<Pos> = Vec::new();

        for mov in moves {
            board.place(mov, Mark::Ai);
            let mut value = self.minimax(board, SEARCH_DEPTH, false, -INF, INF);
            if is_interior(mov) {
                value += threat_pressure(board, mov);
            }
            board.clear(mov);

            if value > best_score {
                best_score = value;
                best_moves.clear();
                best_moves.push(mov);
            } else if value == best_score {
                best_moves.push(mov);
            }
        }

        SearchResult {
            best_move: best_moves.choose(&mut rand::thread_rng()).copied(),
            score: best_score,
            nodes: self.nodes,
        }
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// Terminal order: a completed four wins/loses before move or depth
    /// exhaustion is considered; both of the latter fall back to the
    /// heuristic. The placed mark is retracted before the cutoff break so
    /// the board is restored on every path out of the loop.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if let Some(winner) = check_winner(board) {
            return if winner == Mark::Ai { WIN_SCORE } else { -WIN_SCORE };
        }

        let moves = board.available_moves();
        if depth == 0 || moves.is_empty() {
            return evaluate(board);
        }

        if maximizing {
            let mut best = -INF;
            for mov in moves {
                board.place(mov, Mark::Ai);
                let value = self.minimax(board, depth - 1, false, alpha, beta);
                board.clear(mov);

                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for mov in moves {
                board.place(mov, Mark::Human);
                let value = self.minimax(board, depth - 1, true, alpha, beta);
                board.clear(mov);

                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Interior region: rows and columns 1..=4. Only interior root moves
/// receive the threat-pressure selection bonus.
#[inline]
fn is_interior(pos: Pos) -> bool {
    (1..=4).contains(&pos.row) && (1..=4).contains(&pos.col)
}
