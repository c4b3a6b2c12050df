//! Commonly used types and utilities for ease of import.

pub use crate::{
    detect_winner, Board, Cell, GameError, GameSession, GameStatus, Mark, MoveOutcome,
    PlayerNames, BOARD_PRESETS, DEFAULT_BOARD_SIZE,
};

#[cfg(feature = "serde")]
pub use crate::SessionSnapshot;

#[cfg(feature = "std")]
pub use crate::{init_logging, parse_coord, render_board, run_interactive};
