//! Heuristic evaluation for non-terminal positions
//!
//! The evaluator layers three signals:
//! - Run scoring: every (cell, direction) origin bearing a mark measures
//!   its contiguous run and how many of its two ends are open.
//! - Directional weighting: runs along the middle rows/columns count more.
//! - Positional bonuses: center control, scored per occupied cell plus a
//!   connectedness bonus for adjacent central pairs.
//!
//! Scores are signed from the automated side's perspective: positive
//! favors `Mark::Ai`. The evaluator never mutates the board.

use crate::board::{Board, Mark, Pos, BOARD_SIZE, WIN_LENGTH};
use crate::rules::DIRECTIONS;

use super::patterns::{PatternScore, PositionScore, ThreatPressure};

/// The two middle rows/columns
const CENTER_LINES: [u8; 2] = [2, 3];
/// Rows/columns one step off the middle
const NEAR_CENTER_LINES: [u8; 2] = [1, 4];

/// The central 2x2 block
const CENTER_CELLS: [Pos; 4] = [
    Pos { row: 2, col: 2 },
    Pos { row: 2, col: 3 },
    Pos { row: 3, col: 2 },
    Pos { row: 3, col: 3 },
];

/// Evaluate the board from the automated side's perspective.
///
/// Returns a signed score: positive favors `Mark::Ai`, negative favors the
/// opponent. A run of four found here returns terminal-magnitude values
/// (+/-1000 per origin) even though the search checks the winner first, so
/// a missed terminal still dominates ordering.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;

    for r in 0..BOARD_SIZE as u8 {
        for c in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(r, c);
            let mark = board.get(pos);
            if mark == Mark::Empty {
                continue;
            }

            for &(dr, dc) in &DIRECTIONS {
                let (count, empty_ends) = measure_run(board, pos, dr, dc, mark);
                let base = run_score(mark, count, empty_ends);
                if base != 0 {
                    score += base * line_multiplier(pos, dr, dc);
                }
            }
        }
    }

    score + position_score(board)
}

/// Contiguous run length through `pos` along one direction, plus how many
/// of the two ends are open (adjacent cell Empty and in-bounds).
///
/// Counted from the (cell, direction) origin: a run of three contributes
/// from each of its three cells.
fn measure_run(board: &Board, pos: Pos, dr: i32, dc: i32, mark: Mark) -> (usize, u32) {
    let mut count = 1;
    let mut empty_ends = 0;

    let mut r = i32::from(pos.row) + dr;
    let mut c = i32::from(pos.col) + dc;
    while Pos::is_valid(r, c) {
        match board.get(Pos::new(r as u8, c as u8)) {
            m if m == mark => count += 1,
            Mark::Empty => {
                empty_ends += 1;
                break;
            }
            _ => break,
        }
        r += dr;
        c += dc;
    }

    r = i32::from(pos.row) - dr;
    c = i32::from(pos.col) - dc;
    while Pos::is_valid(r, c) {
        match board.get(Pos::new(r as u8, c as u8)) {
            m if m == mark => count += 1,
            Mark::Empty => {
                empty_ends += 1;
                break;
            }
            _ => break,
        }
        r -= dr;
        c -= dc;
    }

    (count, empty_ends)
}

/// Score one measured run. Own runs add, opponent runs subtract with the
/// heavier blocking ladder.
fn run_score(mark: Mark, count: usize, empty_ends: u32) -> i32 {
    match mark {
        Mark::Ai => match (count, empty_ends) {
            (n, _) if n >= WIN_LENGTH => PatternScore::FOUR,
            (3, 2) => PatternScore::OPEN_THREE,
            (3, 1) => PatternScore::HALF_OPEN_THREE,
            (2, 2) => PatternScore::OPEN_TWO,
            (2, 1) => PatternScore::HALF_OPEN_TWO,
            _ => 0,
        },
        Mark::Human => match (count, empty_ends) {
            (n, _) if n >= WIN_LENGTH => -PatternScore::BLOCK_FOUR,
            (3, 2) => -PatternScore::BLOCK_OPEN_THREE,
            (3, 1) => -PatternScore::BLOCK_HALF_OPEN_THREE,
            (2, 2) => -PatternScore::BLOCK_OPEN_TWO,
            (2, 1) => -PatternScore::BLOCK_HALF_OPEN_TWO,
            _ => 0,
        },
        Mark::Empty => 0,
    }
}

/// Directional weight for a run origin.
///
/// A horizontal run in a middle row (or vertical run in a middle column)
/// travels a center line. One step off gets the moderate weight; diagonals
/// and outer lines are unweighted.
fn line_multiplier(pos: Pos, dr: i32, dc: i32) -> i32 {
    let fixed = match (dr, dc) {
        (0, 1) => Some(pos.row),
        (1, 0) => Some(pos.col),
        _ => None,
    };
    match fixed {
        Some(line) if CENTER_LINES.contains(&line) => PatternScore::CENTER_LINE_MULT,
        Some(line) if NEAR_CENTER_LINES.contains(&line) => PatternScore::NEAR_CENTER_MULT,
        _ => 1,
    }
}

/// Positional bonuses layered independently of run scoring.
fn position_score(board: &Board) -> i32 {
    let mut score = 0;

    for r in 0..BOARD_SIZE as u8 {
        for c in 0..BOARD_SIZE as u8 {
            let central_row = CENTER_LINES.contains(&r);
            let central_col = CENTER_LINES.contains(&c);
            score += match board.get(Pos::new(r, c)) {
                Mark::Ai if central_row && central_col => PositionScore::CENTER,
                Mark::Ai if central_row || central_col => PositionScore::SEMI_CENTER,
                Mark::Ai => PositionScore::EDGE,
                Mark::Human if central_row && central_col => -PositionScore::CENTER_OPPONENT,
                Mark::Human if central_row || central_col => -PositionScore::SEMI_CENTER_OPPONENT,
                Mark::Human => -PositionScore::EDGE_OPPONENT,
                _ => 0,
            };
        }
    }

    // Connected center control: every touching same-mark pair inside the
    // 2x2 block counts once.
    for (i, &a) in CENTER_CELLS.iter().enumerate() {
        for &b in &CENTER_CELLS[i + 1..] {
            match (board.get(a), board.get(b)) {
                (Mark::Ai, Mark::Ai) => score += PositionScore::CENTER_PAIR,
                (Mark::Human, Mark::Human) => score -= PositionScore::CENTER_PAIR_OPPONENT,
                _ => {}
            }
        }
    }

    score
}

/// Opponent-only threat measurement from the perspective of a placed cell.
///
/// For each direction, counts the contiguous opponent marks immediately on
/// both sides of `pos` (the cell itself is the blocker) and whether the
/// cells beyond them are open. Used by the search root to bias selection
/// toward interior cells that sit on live opponent lines; never called
/// inside the recursion.
#[must_use]
pub fn threat_pressure(board: &Board, pos: Pos) -> i32 {
    let mut pressure = 0;

    for &(dr, dc) in &DIRECTIONS {
        let (fwd, fwd_open) = count_opponent_ray(board, pos, dr, dc);
        let (bwd, bwd_open) = count_opponent_ray(board, pos, -dr, -dc);
        let count = fwd + bwd;
        let open_ends = u32::from(fwd_open) + u32::from(bwd_open);

        pressure += match (count, open_ends) {
            (n, _) if n >= 3 => ThreatPressure::BREAKS_THREE,
            (2, 2) => ThreatPressure::BREAKS_OPEN_TWO,
            (2, 1) => ThreatPressure::BREAKS_HALF_TWO,
            (1, 2) => ThreatPressure::TOUCHES_ONE,
            _ => 0,
        };
    }

    pressure
}

/// Contiguous opponent marks along one ray from `pos` (exclusive), and
/// whether the cell just beyond them is open.
fn count_opponent_ray(board: &Board, pos: Pos, dr: i32, dc: i32) -> (u32, bool) {
    let mut count = 0;
    let mut r = i32::from(pos.row) + dr;
    let mut c = i32::from(pos.col) + dc;

    while Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == Mark::Human {
        count += 1;
        r += dr;
        c += dc;
    }

    let open = Pos::is_valid(r, c) && board.get(Pos::new(r as u8, c as u8)) == Mark::Empty;
    (count, open)
}
