//! Terminal front end: board rendering, coordinate parsing, and the
//! interactive hotseat loop.

use std::io::{self, Write};
use std::string::String;

use crate::common::Cell;
use crate::config::BOARD_PRESETS;
use crate::{Board, GameSession, GameStatus, MoveOutcome};

/// Largest board the letter-based coordinate entry can address. The core
/// itself has no such limit.
pub const MAX_CLI_BOARD_SIZE: usize = 26;

/// Format a cell index as a column letter plus 1-based row, e.g. `C3`.
pub fn coord_to_string(board: &Board, cell: usize) -> String {
    let row = cell / board.size();
    let col = cell % board.size();
    std::format!("{}{}", (b'A' + col as u8) as char, row + 1)
}

/// Parse a coordinate like `C3` (column letter, 1-based row) into a cell
/// index on a board of `size` rows.
pub fn parse_coord(input: &str, size: usize) -> Option<usize> {
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 || row > size || col >= size {
        return None;
    }
    Some((row - 1) * size + col)
}

/// Render the board with column letters and 1-based row numbers.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("   ");
    for c in 0..board.size() {
        out.push(' ');
        out.push((b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..board.size() {
        out.push_str(&std::format!("{:2} ", r + 1));
        for c in 0..board.size() {
            let ch = match board.get_rc(r, c) {
                Some(Cell::Marked(m)) => m.symbol(),
                _ => '.',
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// One-line status: winner announcement, or the next player to move.
pub fn status_line(session: &GameSession) -> String {
    match session.status() {
        GameStatus::Won(mark) => {
            std::format!("{} ({}) wins!", session.names().name(mark), mark)
        }
        GameStatus::InProgress => {
            let mark = session.turn_mark();
            std::format!("Next player: {} ({})", session.names().name(mark), mark)
        }
    }
}

const HELP: &str = "Commands: <coord> to play (e.g. C3), jump <move>, size <n>, moves, help, quit";

/// Interactive hotseat loop on stdin/stdout. Returns when the user quits or
/// stdin closes.
pub fn run_interactive(session: &mut GameSession) -> anyhow::Result<()> {
    std::println!("{}", HELP);
    loop {
        std::println!("\n{}", render_board(session.current_board()));
        std::println!("{}", status_line(session));
        std::print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("quit") | Some("q") => return Ok(()),
            Some("help") => std::println!("{}", HELP),
            Some("moves") => {
                for mv in 0..session.history_len() {
                    let marker = if mv == session.cursor() { '*' } else { ' ' };
                    if mv == 0 {
                        std::println!("{} {:3}: game start", marker, mv);
                    } else {
                        std::println!("{} {:3}: move #{}", marker, mv, mv);
                    }
                }
            }
            Some("jump") => match parts.next().and_then(|p| p.parse().ok()) {
                Some(mv) => {
                    if let Err(e) = session.jump_to(mv) {
                        std::println!("Error: {}", e);
                    }
                }
                None => std::println!("Usage: jump <move>"),
            },
            Some("size") => match parts.next().and_then(|p| p.parse().ok()) {
                Some(n) if n <= MAX_CLI_BOARD_SIZE => {
                    if let Err(e) = session.reset(n) {
                        std::println!("Error: {}", e);
                    }
                }
                _ => std::println!(
                    "Usage: size <n> with n in 1..={} (presets: {:?})",
                    MAX_CLI_BOARD_SIZE,
                    BOARD_PRESETS
                ),
            },
            Some(coord) => match parse_coord(coord, session.current_board().size()) {
                Some(cell) => {
                    if session.apply_move(cell) == MoveOutcome::Ignored {
                        std::println!(
                            "Ignored: {} is taken or the game is over",
                            coord_to_string(session.current_board(), cell)
                        );
                    }
                }
                None => std::println!("Invalid input; type help for commands"),
            },
            None => {}
        }
    }
}
