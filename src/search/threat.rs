//! Pre-search tactical shortcuts
//!
//! Cheap, search-free checks the orchestrator runs before committing to
//! the full alpha-beta search. Each tier either resolves the move outright
//! or falls through to the next:
//!
//! 1. Center-threat scan: block an opponent pair growing along a center
//!    line or main diagonal.
//! 2. (Learned move: handled by the engine against the learning store.)
//! 3. Immediate win: complete an own four right now.
//! 4. Immediate block: occupy the cell that would complete the
//!    opponent's four.
//! 5. Opening book: grab center territory during the first few plies.
//!
//! Helpers here place hypothetical marks on the caller's board and always
//! retract them before returning.

use rand::seq::SliceRandom;

use crate::board::{Board, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::eval::evaluate;
use crate::rules::has_four_at;

/// The opening book applies while at least this many cells are empty
/// (at most 4 plies into the game).
pub const OPENING_MIN_EMPTY: u32 = 32;

/// An off-center opening cell must evaluate above this bar to be taken
pub const OPENING_SCORE_BAR: i32 = 5;

/// The four central cells, preferred while the board is young
const CENTER_CELLS: [Pos; 4] = [
    Pos { row: 2, col: 2 },
    Pos { row: 2, col: 3 },
    Pos { row: 3, col: 2 },
    Pos { row: 3, col: 3 },
];

/// The eight cells orthogonally adjacent to the central block, row-major
const CENTER_ADJACENT: [Pos; 8] = [
    Pos { row: 1, col: 2 },
    Pos { row: 1, col: 3 },
    Pos { row: 2, col: 1 },
    Pos { row: 2, col: 4 },
    Pos { row: 3, col: 1 },
    Pos { row: 3, col: 4 },
    Pos { row: 4, col: 2 },
    Pos { row: 4, col: 3 },
];

/// Find an opponent pair on a center line with an extendable open end.
///
/// Scans the two middle rows, the two middle columns, and both main
/// diagonals for a run of exactly two opponent marks; if the cell just
/// beyond either end of the pair (on the scanned line) is open, returns
/// it as the block. A lone pair this central is the cheapest threat worth
/// answering before any deeper work.
#[must_use]
pub fn find_center_threat(board: &Board) -> Option<Pos> {
    let mut lines: Vec<Vec<Pos>> = Vec::with_capacity(6);
    for line in [2u8, 3] {
        lines.push((0..BOARD_SIZE as u8).map(|c| Pos::new(line, c)).collect());
        lines.push((0..BOARD_SIZE as u8).map(|r| Pos::new(r, line)).collect());
    }
    lines.push((0..BOARD_SIZE as u8).map(|i| Pos::new(i, i)).collect());
    lines.push(
        (0..BOARD_SIZE as u8)
            .map(|i| Pos::new(i, BOARD_SIZE as u8 - 1 - i))
            .collect(),
    );

    for line in &lines {
        if let Some(block) = pair_block_on_line(board, line) {
            return Some(block);
        }
    }
    None
}

/// Blocking cell for a run of exactly two opponent marks on one line
fn pair_block_on_line(board: &Board, line: &[Pos]) -> Option<Pos> {
    for i in 0..line.len() - 1 {
        let run_here = board.get(line[i]) == Mark::Human && board.get(line[i + 1]) == Mark::Human;
        if !run_here {
            continue;
        }
        // Exactly two: no third mark on either side
        if i > 0 && board.get(line[i - 1]) == Mark::Human {
            continue;
        }
        if i + 2 < line.len() && board.get(line[i + 2]) == Mark::Human {
            continue;
        }

        if i + 2 < line.len() && board.is_empty(line[i + 2]) {
            return Some(line[i + 2]);
        }
        if i > 0 && board.is_empty(line[i - 1]) {
            return Some(line[i - 1]);
        }
    }
    None
}

/// Find a move that completes a four for `mark` right now.
///
/// Tries every available move in row-major order with a hypothetical
/// placement; the board is restored before returning. Called with the
/// opponent's mark this doubles as the immediate-block scan.
#[must_use]
pub fn find_immediate_win(board: &mut Board, mark: Mark) -> Option<Pos> {
    for mov in board.available_moves() {
        board.place(mov, mark);
        let wins = has_four_at(board, mov, mark);
        board.clear(mov);
        if wins {
            return Some(mov);
        }
    }
    None
}

/// Opening-book move for a young board.
///
/// While at least [`OPENING_MIN_EMPTY`] cells are empty: a random open
/// central cell if any remain, otherwise the first block-adjacent cell
/// whose hypothetical placement evaluates above [`OPENING_SCORE_BAR`].
#[must_use]
pub fn find_opening_move(board: &mut Board) -> Option<Pos> {
    if TOTAL_CELLS as u32 - board.mark_count() < OPENING_MIN_EMPTY {
        return None;
    }

    let open_centers: Vec<Pos> = CENTER_CELLS
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect();
    if let Some(&pos) = open_centers.choose(&mut rand::thread_rng()) {
        return Some(pos);
    }

    for &pos in &CENTER_ADJACENT {
        if !board.is_empty(pos) {
            continue;
        }
        board.place(pos, Mark::Ai);
        let score = evaluate(board);
        board.clear(pos);
        if score > OPENING_SCORE_BAR {
            return Some(pos);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_threat_on_middle_row() {
        let mut board = Board::new();
        board.place(Pos::new(2, 2), Mark::Human);
        board.place(Pos::new(2, 3), Mark::Human);

        let block = find_center_threat(&board).expect("pair on center row must be seen");
        assert!(block == Pos::new(2, 4) || block == Pos::new(2, 1));
    }

    #[test]
    fn test_center_threat_on_middle_column() {
        let mut board = Board::new();
        board.place(Pos::new(0, 3), Mark::Human);
        board.place(Pos::new(1, 3), Mark::Human);

        let block = find_center_threat(&board).expect("pair on center column must be seen");
        assert_eq!(block, Pos::new(2, 3));
    }

    #[test]
    fn test_center_threat_on_diagonal() {
        let mut board = Board::new();
        board.place(Pos::new(4, 4), Mark::Human);
        board.place(Pos::new(5, 5), Mark::Human);

        let block = find_center_threat(&board).expect("pair on main diagonal must be seen");
        assert_eq!(block, Pos::new(3, 3));
    }

    #[test]
    fn test_center_threat_ignores_own_pairs() {
        let mut board = Board::new();
        board.place(Pos::new(2, 2), Mark::Ai);
        board.place(Pos::new(2, 3), Mark::Ai);
        assert_eq!(find_center_threat(&board), None);
    }

    #[test]
    fn test_center_threat_ignores_runs_of_three() {
        // Three is past the "growing pair" stage; later tiers handle it
        let mut board = Board::new();
        board.place(Pos::new(3, 1), Mark::Human);
        board.place(Pos::new(3, 2), Mark::Human);
        board.place(Pos::new(3, 3), Mark::Human);
        assert_eq!(find_center_threat(&board), None);
    }

    #[test]
    fn test_center_threat_ignores_off_center_pairs() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), Mark::Human);
        board.place(Pos::new(0, 1), Mark::Human);
        assert_eq!(find_center_threat(&board), None);
    }

    #[test]
    fn test_center_threat_fully_blocked_pair() {
        // X at both ends of the pair leaves nothing to block
        let mut board = Board::new();
        board.place(Pos::new(2, 1), Mark::Ai);
        board.place(Pos::new(2, 2), Mark::Human);
        board.place(Pos::new(2, 3), Mark::Human);
        board.place(Pos::new(2, 4), Mark::Ai);
        assert_eq!(find_center_threat(&board), None);
    }

    #[test]
    fn test_immediate_win_found() {
        let mut board = Board::new();
        for i in 0..3 {
            board.place(Pos::new(4, i), Mark::Ai);
        }

        let before = board.clone();
        let win = find_immediate_win(&mut board, Mark::Ai);
        assert_eq!(win, Some(Pos::new(4, 3)));
        assert_eq!(board, before, "hypothetical placements must be retracted");
    }

    #[test]
    fn test_immediate_win_for_opponent_is_block_target() {
        let mut board = Board::new();
        board.place(Pos::new(1, 1), Mark::Human);
        board.place(Pos::new(2, 2), Mark::Human);
        board.place(Pos::new(3, 3), Mark::Human);

        let block = find_immediate_win(&mut board, Mark::Human);
        assert!(block == Some(Pos::new(0, 0)) || block == Some(Pos::new(4, 4)));
    }

    #[test]
    fn test_immediate_win_none_without_three() {
        let mut board = Board::new();
        board.place(Pos::new(4, 0), Mark::Ai);
        board.place(Pos::new(4, 1), Mark::Ai);
        assert_eq!(find_immediate_win(&mut board, Mark::Ai), None);
    }

    #[test]
    fn test_opening_empty_board_takes_center() {
        let mut board = Board::new();
        let mov = find_opening_move(&mut board).expect("empty board is opening territory");
        assert!(CENTER_CELLS.contains(&mov));
    }

    #[test]
    fn test_opening_skips_taken_centers() {
        let mut board = Board::new();
        board.place(Pos::new(2, 2), Mark::Human);
        board.place(Pos::new(3, 3), Mark::Ai);

        let mov = find_opening_move(&mut board).expect("two centers still open");
        assert!(mov == Pos::new(2, 3) || mov == Pos::new(3, 2));
    }

    #[test]
    fn test_opening_expires_after_four_plies() {
        let mut board = Board::new();
        // 5 marks down: 31 empty cells, below the opening window
        board.place(Pos::new(2, 2), Mark::Ai);
        board.place(Pos::new(2, 3), Mark::Human);
        board.place(Pos::new(3, 2), Mark::Ai);
        board.place(Pos::new(3, 3), Mark::Human);
        board.place(Pos::new(1, 1), Mark::Ai);

        assert_eq!(find_opening_move(&mut board), None);
    }

    #[test]
    fn test_opening_falls_back_to_block_adjacent() {
        // All four centers taken after 4 plies; the ring is next
        let mut board = Board::new();
        board.place(Pos::new(2, 2), Mark::Ai);
        board.place(Pos::new(2, 3), Mark::Human);
        board.place(Pos::new(3, 2), Mark::Ai);
        board.place(Pos::new(3, 3), Mark::Human);

        let before_count = board.mark_count();
        let mov = find_opening_move(&mut board);
        assert_eq!(board.mark_count(), before_count, "probe marks must be retracted");
        if let Some(pos) = mov {
            assert!(CENTER_ADJACENT.contains(&pos));
        }
    }
}
