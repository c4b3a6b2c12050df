use omok::{GameSession, Mark};
use serde_json::json;

#[test]
fn test_snapshot_reflects_session() {
    let mut session = GameSession::with_size(3).unwrap();
    session.apply_move(4);
    session.names_mut().set_name(Mark::O, "Bob".into());

    let snap = session.snapshot();
    assert_eq!(snap.size, 3);
    assert_eq!(snap.cells.len(), 9);
    assert_eq!(snap.cursor, 1);
    assert_eq!(snap.history_len, 2);
    assert_eq!(snap.turn, Mark::O);
    assert_eq!(snap.winner, None);
    assert_eq!(snap.names.name(Mark::O), "Bob");
}

#[test]
fn test_snapshot_json_shape() {
    let mut session = GameSession::with_size(1).unwrap();
    session.apply_move(0);

    let value = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(value["size"], json!(1));
    assert_eq!(value["cells"], json!([{ "Marked": "X" }]));
    assert_eq!(value["turn"], json!("O"));
    assert_eq!(value["winner"], json!("X"));
    assert_eq!(value["cursor"], json!(1));
    assert_eq!(value["history_len"], json!(2));
}

#[test]
fn test_snapshot_roundtrip() {
    let mut session = GameSession::with_size(5).unwrap();
    for &cell in &[0usize, 6, 12] {
        session.apply_move(cell);
    }

    let snap = session.snapshot();
    let text = serde_json::to_string(&snap).unwrap();
    let restored: omok::SessionSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, snap);
}
