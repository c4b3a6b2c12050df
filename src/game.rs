//! Session state machine: board history with time travel and derived turns.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::board::Board;
use crate::common::{Cell, GameError, Mark};
use crate::config::DEFAULT_BOARD_SIZE;
use crate::rules::detect_winner;

/// Display names for the two player roles. Purely cosmetic, never consulted
/// by the game logic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerNames {
    x: String,
    o: String,
}

impl PlayerNames {
    /// Display name for the player holding `mark`.
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Replace the display name for the player holding `mark`.
    pub fn set_name(&mut self, mark: Mark, name: String) {
        match mark {
            Mark::X => self.x = name,
            Mark::O => self.o = name,
        }
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        PlayerNames {
            x: String::from("Player 1"),
            o: String::from("Player 2"),
        }
    }
}

/// Whether the session is still accepting moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// No complete line yet; the next move is open.
    InProgress,
    /// A complete line is held by this mark.
    Won(Mark),
}

/// Result of an `apply_move` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was recorded and the cursor advanced.
    Applied,
    /// Occupied cell, out-of-range index, or finished game; state unchanged.
    Ignored,
}

/// One interactive game session.
///
/// State is the pair `(history, cursor)`: a snapshot per move with move 0
/// the empty starting board, and the cursor pointing at the currently
/// displayed move. The turn is always derived from cursor parity rather
/// than stored, so it cannot drift out of sync with the history.
#[derive(Debug, Clone)]
pub struct GameSession {
    history: Vec<Board>,
    cursor: usize,
    names: PlayerNames,
}

impl GameSession {
    /// New session with the default board size.
    pub fn new() -> Self {
        Self::from_board(Board::empty(DEFAULT_BOARD_SIZE))
    }

    /// New session with `size` rows and columns.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidBoardSize` when `size` is zero.
    pub fn with_size(size: usize) -> Result<Self, GameError> {
        Ok(Self::from_board(Board::new(size)?))
    }

    fn from_board(board: Board) -> Self {
        GameSession {
            history: vec![board],
            cursor: 0,
            names: PlayerNames::default(),
        }
    }

    /// Board snapshot at the cursor.
    pub fn current_board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Currently displayed move index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded snapshots, including the empty starting board.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Mark to move at the cursor: X on even move indices, O on odd.
    pub fn turn_mark(&self) -> Mark {
        if self.cursor % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Winner on the board at the cursor, if any.
    pub fn winner(&self) -> Option<Mark> {
        detect_winner(self.current_board())
    }

    /// Session status at the cursor.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(mark) => GameStatus::Won(mark),
            None => GameStatus::InProgress,
        }
    }

    /// Player display names.
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    /// Mutable access to the player display names.
    pub fn names_mut(&mut self) -> &mut PlayerNames {
        &mut self.names
    }

    /// Place the mark whose turn it is at `cell`.
    ///
    /// Callers may invoke this speculatively on every click: an occupied
    /// cell, an out-of-range index, or a finished game leaves the session
    /// untouched and reports `MoveOutcome::Ignored`. An applied move clones
    /// the current board, truncates any snapshots after the cursor, appends
    /// the new board, and advances the cursor to the new last index, which
    /// flips the derived turn.
    pub fn apply_move(&mut self, cell: usize) -> MoveOutcome {
        let board = self.current_board();
        if !board.is_cell_empty(cell) || detect_winner(board).is_some() {
            return MoveOutcome::Ignored;
        }
        let mark = self.turn_mark();
        let mut next = board.clone();
        next.set(cell, Cell::Marked(mark));
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;
        log::debug!("move {}: {} at cell {}", self.cursor, mark, cell);
        MoveOutcome::Applied
    }

    /// Move the cursor to a recorded move. History contents are unchanged;
    /// the turn follows from the new cursor's parity.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidMoveIndex` when `mv` is out of range.
    pub fn jump_to(&mut self, mv: usize) -> Result<(), GameError> {
        if mv >= self.history.len() {
            return Err(GameError::InvalidMoveIndex {
                index: mv,
                len: self.history.len(),
            });
        }
        self.cursor = mv;
        log::debug!("jumped to move {}", mv);
        Ok(())
    }

    /// Discard the history and start over on an empty `size` x `size` board.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidBoardSize` when `size` is zero.
    pub fn reset(&mut self, size: usize) -> Result<(), GameError> {
        let board = Board::new(size)?;
        self.history.clear();
        self.history.push(board);
        self.cursor = 0;
        log::debug!("reset to {}x{} board", size, size);
        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of the session for presentation layers.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionSnapshot {
    pub size: usize,
    pub cells: Vec<Cell>,
    pub cursor: usize,
    pub history_len: usize,
    pub turn: Mark,
    pub winner: Option<Mark>,
    pub names: PlayerNames,
}

#[cfg(feature = "serde")]
impl GameSession {
    /// Snapshot of the visible state at the cursor.
    pub fn snapshot(&self) -> SessionSnapshot {
        let board = self.current_board();
        SessionSnapshot {
            size: board.size(),
            cells: board.cells().to_vec(),
            cursor: self.cursor,
            history_len: self.history.len(),
            turn: self.turn_mark(),
            winner: self.winner(),
            names: self.names.clone(),
        }
    }
}
