//! Board structure and move enumeration

use std::fmt;

use super::{Mark, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Game board: a fixed 6x6 grid of cells, row-major.
///
/// The board is owned by the caller; the search places and retracts marks
/// transiently but must hand the board back bit-for-bit unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; TOTAL_CELLS],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get the mark at a position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Check if a position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cells[pos.to_index()] == Mark::Empty
    }

    /// Place a mark
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        self.cells[pos.to_index()] = mark;
    }

    /// Retract a mark
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.cells[pos.to_index()] = Mark::Empty;
    }

    /// All empty positions in row-major order.
    ///
    /// The order is deterministic on purpose: downstream tie-breaking and
    /// the recorded move log both depend on it.
    pub fn available_moves(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &m)| m == Mark::Empty)
            .map(|(idx, _)| Pos::from_index(idx))
            .collect()
    }

    /// True when no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&m| m != Mark::Empty)
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> u32 {
        self.cells.iter().filter(|&&m| m != Mark::Empty).count() as u32
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&m| m == Mark::Empty)
    }

    /// Canonical 36-character key: one character per cell, row by row.
    ///
    /// Two boards are learning-equivalent iff their keys match exactly.
    /// Rotations and reflections produce distinct keys.
    pub fn key(&self) -> String {
        self.cells.iter().map(|m| m.to_key_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {c}")?;
        }
        writeln!(f)?;
        for r in 0..BOARD_SIZE {
            write!(f, "{r} ")?;
            for c in 0..BOARD_SIZE {
                let ch = match self.get(Pos::new(r as u8, c as u8)) {
                    Mark::Ai => 'O',
                    Mark::Human => 'X',
                    Mark::Empty => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
