//! Win condition checking
//!
//! The game is won by four or more same-mark cells in an unbroken line
//! along a row, column, or either diagonal.

use crate::board::{Board, Mark, Pos, BOARD_SIZE, WIN_LENGTH};

/// Direction vectors for line checking (4 directions).
/// Each direction is scanned both ways from the origin cell, so the four
/// canonical vectors cover all eight rays without double-counting.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check for a winner.
///
/// Returns `Some(Mark)` for the side holding a line of length >= 4,
/// `None` otherwise. Pure function of the board.
pub fn check_winner(board: &Board) -> Option<Mark> {
    for r in 0..BOARD_SIZE as u8 {
        for c in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(r, c);
            let mark = board.get(pos);
            if mark == Mark::Empty {
                continue;
            }

            for &(dr, dc) in &DIRECTIONS {
                let mut count = 1;

                // Positive direction
                let mut nr = i32::from(r) + dr;
                let mut nc = i32::from(c) + dc;
                while Pos::is_valid(nr, nc) && board.get(Pos::new(nr as u8, nc as u8)) == mark {
                    count += 1;
                    nr += dr;
                    nc += dc;
                }

                // Negative direction
                nr = i32::from(r) - dr;
                nc = i32::from(c) - dc;
                while Pos::is_valid(nr, nc) && board.get(Pos::new(nr as u8, nc as u8)) == mark {
                    count += 1;
                    nr -= dr;
                    nc -= dc;
                }

                if count >= WIN_LENGTH {
                    return Some(mark);
                }
            }
        }
    }
    None
}

/// Fast four-in-a-row check at a specific position.
///
/// Only checks the 4 directions through the given cell. No allocation.
/// Used by the shortcut tiers right after a hypothetical placement, where
/// any new line must pass through the placed cell.
#[inline]
pub fn has_four_at(board: &Board, pos: Pos, mark: Mark) -> bool {
    for &(dr, dc) in &DIRECTIONS {
        let mut count = 1;

        let mut r = i32::from(pos.row) + dr;
        let mut c = i32::from(pos.col) + dc;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == mark {
            count += 1;
            r += dr;
            c += dc;
        }

        r = i32::from(pos.row) - dr;
        c = i32::from(pos.col) - dc;
        while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == mark {
            count += 1;
            r -= dr;
            c -= dc;
        }

        if count >= WIN_LENGTH {
            return true;
        }
    }
    false
}
