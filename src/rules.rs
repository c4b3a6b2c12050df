//! Win detection over rows, columns, and the two main diagonals.

use crate::board::Board;
use crate::common::{Cell, Mark};

/// Returns the mark holding a complete line, if any.
///
/// A board of size `n` has `2n + 2` candidate lines: `n` rows, `n` columns,
/// and the two main diagonals, each of length `n`. A line wins only when
/// every one of its cells holds the same mark; there is no k-in-a-row
/// windowing on larger boards. Lines are scanned rows first, then columns,
/// then the top-left and top-right diagonals, so the result is
/// deterministic for any board contents.
pub fn detect_winner(board: &Board) -> Option<Mark> {
    let n = board.size();
    for row in 0..n {
        if let Some(mark) = line_winner(board, (0..n).map(|col| row * n + col)) {
            return Some(mark);
        }
    }
    for col in 0..n {
        if let Some(mark) = line_winner(board, (0..n).map(|row| row * n + col)) {
            return Some(mark);
        }
    }
    if let Some(mark) = line_winner(board, (0..n).map(|i| i * n + i)) {
        return Some(mark);
    }
    line_winner(board, (0..n).map(|i| i * n + (n - 1 - i)))
}

/// The uniform mark over `cells`, or `None` if the line is broken or starts
/// empty.
fn line_winner(board: &Board, mut cells: impl Iterator<Item = usize>) -> Option<Mark> {
    let mark = match board.get(cells.next()?) {
        Some(Cell::Marked(mark)) => mark,
        _ => return None,
    };
    for idx in cells {
        if board.get(idx) != Some(Cell::Marked(mark)) {
            return None;
        }
    }
    Some(mark)
}
