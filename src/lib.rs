//! Four-in-a-row decision engine for a 6x6 board
//!
//! The crate decides moves for the automated side (`O`) against a human
//! opponent (`X`) and remembers how its choices worked out across games.
//!
//! # Architecture
//!
//! - [`board`]: the 6x6 grid, marks, positions, and the canonical
//!   36-character board key
//! - [`rules`]: four-in-a-row detection over rows, columns, and both
//!   diagonals
//! - [`eval`]: the positional heuristic scoring runs, center control,
//!   and placed-cell threat pressure
//! - [`search`]: depth-limited alpha-beta plus the pre-search tactical
//!   shortcuts (center-threat block, immediate win/block, opening book)
//! - [`learn`]: the JSON-backed store of per-position move statistics
//! - [`engine`]: the orchestrator running the decision tiers in order
//!
//! # Example
//!
//! ```
//! use fourline::{Board, Engine, GameOutcome, Mark};
//!
//! let mut engine = Engine::new();
//! let mut board = Board::new();
//!
//! let mov = engine.get_move(&board).expect("board is not full");
//! board.place(mov, Mark::Ai);
//!
//! // ... play out the game, then report how it ended:
//! engine.learn_outcome(GameOutcome::Draw);
//! ```

pub mod board;
pub mod engine;
pub mod eval;
pub mod learn;
pub mod rules;
pub mod search;

pub use board::{Board, Mark, Pos, BOARD_SIZE};
pub use engine::{Engine, GameOutcome, MoveResult, SearchType};
pub use learn::LearningStore;
