//! Common types for the game core: marks, cells, and session errors.

/// One of the two exclusive player symbols placed into board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    /// Moves on even move indices (goes first).
    X,
    /// Moves on odd move indices.
    O,
}

impl Mark {
    /// The mark belonging to the other player.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol used by text renderers.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl core::fmt::Display for Mark {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell held by a player.
    Marked(Mark),
}

impl Cell {
    /// Returns `true` when no mark occupies the cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(m) => Some(m),
        }
    }
}

/// Errors returned by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// `jump_to` index is outside the recorded history.
    InvalidMoveIndex { index: usize, len: usize },
    /// Board size must be at least one row.
    InvalidBoardSize { size: usize },
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidMoveIndex { index, len } => {
                write!(
                    f,
                    "move index {} out of range (history has {} entries)",
                    index, len
                )
            }
            GameError::InvalidBoardSize { size } => {
                write!(f, "invalid board size {}, must be positive", size)
            }
        }
    }
}
