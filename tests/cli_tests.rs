use omok::{parse_coord, render_board, status_line, Board, GameSession, Mark};

#[test]
fn test_parse_coord_valid() {
    assert_eq!(parse_coord("A1", 5), Some(0));
    assert_eq!(parse_coord("a1", 5), Some(0));
    assert_eq!(parse_coord("C3", 5), Some(12));
    assert_eq!(parse_coord("E5", 5), Some(24));
    assert_eq!(parse_coord("J10", 10), Some(99));
}

#[test]
fn test_parse_coord_invalid() {
    assert_eq!(parse_coord("", 5), None);
    assert_eq!(parse_coord("A", 5), None);
    assert_eq!(parse_coord("11", 5), None);
    assert_eq!(parse_coord("A0", 5), None);
    assert_eq!(parse_coord("F1", 5), None, "column off the board");
    assert_eq!(parse_coord("A6", 5), None, "row off the board");
    assert_eq!(parse_coord("A1x", 5), None);
}

#[test]
fn test_render_empty_board() {
    let board = Board::new(3).unwrap();
    let out = render_board(&board);
    assert_eq!(out, "    A B C\n 1  . . .\n 2  . . .\n 3  . . .\n");
}

#[test]
fn test_render_shows_marks() {
    let mut session = GameSession::with_size(3).unwrap();
    session.apply_move(0);
    session.apply_move(4);
    let out = render_board(session.current_board());
    assert!(out.contains(" 1  X . ."));
    assert!(out.contains(" 2  . O ."));
}

#[test]
fn test_status_line_next_player() {
    let session = GameSession::with_size(3).unwrap();
    assert_eq!(status_line(&session), "Next player: Player 1 (X)");
}

#[test]
fn test_status_line_winner() {
    let mut session = GameSession::with_size(1).unwrap();
    session.names_mut().set_name(Mark::X, "Alice".into());
    session.apply_move(0);
    assert_eq!(status_line(&session), "Alice (X) wins!");
}
