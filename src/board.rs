//! Row-major game board of `size * size` cells.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{Cell, GameError, Mark};

/// Square board snapshot. Cells are stored row-major, index
/// `row * size + col`; the length is always `size * size`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with `size` rows and columns.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidBoardSize` when `size` is zero.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 {
            return Err(GameError::InvalidBoardSize { size });
        }
        Ok(Self::empty(size))
    }

    /// Infallible constructor for sizes already validated as nonzero.
    pub(crate) fn empty(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size * size`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major cell index for (`row`, `col`).
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Cell at `idx`, or `None` when out of range.
    pub fn get(&self, idx: usize) -> Option<Cell> {
        self.cells.get(idx).copied()
    }

    /// Cell at (`row`, `col`), or `None` when either coordinate is out of range.
    pub fn get_rc(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.get(self.index(row, col))
    }

    /// Replace the cell at `idx`. Returns `false` when `idx` is out of range.
    pub fn set(&mut self, idx: usize, cell: Cell) -> bool {
        match self.cells.get_mut(idx) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Returns `true` when `idx` is in range and unoccupied.
    pub fn is_cell_empty(&self, idx: usize) -> bool {
        matches!(self.get(idx), Some(Cell::Empty))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn marks_placed(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    write!(f, " ")?;
                }
                let ch = match self.cells[self.index(row, col)] {
                    Cell::Empty => '.',
                    Cell::Marked(Mark::X) => 'X',
                    Cell::Marked(Mark::O) => 'O',
                };
                write!(f, "{}", ch)?;
            }
            if row + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
