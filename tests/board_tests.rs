use omok::{Board, Cell, GameError, Mark};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(5).unwrap();
    assert_eq!(board.size(), 5);
    assert_eq!(board.cell_count(), 25);
    assert_eq!(board.marks_placed(), 0);
    assert!(board.cells().iter().all(|c| c.is_empty()));
}

#[test]
fn test_zero_size_rejected() {
    assert_eq!(
        Board::new(0).unwrap_err(),
        GameError::InvalidBoardSize { size: 0 }
    );
}

#[test]
fn test_row_major_indexing() {
    let board = Board::new(5).unwrap();
    assert_eq!(board.index(0, 0), 0);
    assert_eq!(board.index(2, 3), 13);
    assert_eq!(board.index(4, 4), 24);
}

#[test]
fn test_set_and_get() {
    let mut board = Board::new(3).unwrap();
    assert!(board.set(4, Cell::Marked(Mark::X)));
    assert_eq!(board.get(4), Some(Cell::Marked(Mark::X)));
    assert_eq!(board.get_rc(1, 1), Some(Cell::Marked(Mark::X)));
    assert!(!board.is_cell_empty(4));
    assert_eq!(board.marks_placed(), 1);
}

#[test]
fn test_out_of_range_access() {
    let mut board = Board::new(3).unwrap();
    assert_eq!(board.get(9), None);
    assert_eq!(board.get_rc(3, 0), None);
    assert_eq!(board.get_rc(0, 3), None);
    assert!(!board.set(9, Cell::Marked(Mark::O)));
    assert!(!board.is_cell_empty(9));
}

#[test]
fn test_display_grid() {
    let mut board = Board::new(3).unwrap();
    board.set(0, Cell::Marked(Mark::X));
    board.set(4, Cell::Marked(Mark::O));
    assert_eq!(board.to_string(), "X . .\n. O .\n. . .");
}
