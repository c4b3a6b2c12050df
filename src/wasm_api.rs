//! Browser bindings: a thin `wasm_bindgen` wrapper over [`GameSession`].
//!
//! Every call returns the full visible state as a JS object so the page can
//! re-render from scratch, the same way the React front end consumes it.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::game::SessionSnapshot;
use crate::{GameSession, Mark};

#[derive(Serialize)]
struct OpResult {
    #[serde(flatten)]
    state: Option<SessionSnapshot>,
    error: Option<String>,
}

fn state_value(session: &GameSession) -> JsValue {
    serde_wasm_bindgen::to_value(&session.snapshot()).unwrap_or(JsValue::NULL)
}

fn error_value(message: String) -> JsValue {
    let result = OpResult {
        state: None,
        error: Some(message),
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// One game session owned by the page.
#[wasm_bindgen]
pub struct Game {
    session: GameSession,
}

#[wasm_bindgen]
impl Game {
    /// New session with the default board size.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        Game {
            session: GameSession::new(),
        }
    }

    /// Visible state at the cursor: cells, turn, winner, names, history.
    pub fn get_state(&self) -> JsValue {
        state_value(&self.session)
    }

    /// Speculative move at `cell`. Illegal clicks (occupied cell, finished
    /// game, out-of-range index) are silently ignored; the returned state
    /// reflects whatever happened.
    pub fn play(&mut self, cell: usize) -> JsValue {
        self.session.apply_move(cell);
        state_value(&self.session)
    }

    /// Move the cursor to a recorded move without altering history.
    pub fn jump_to(&mut self, mv: usize) -> JsValue {
        match self.session.jump_to(mv) {
            Ok(()) => state_value(&self.session),
            Err(e) => error_value(e.to_string()),
        }
    }

    /// Start over on an empty board of `size` rows and columns.
    pub fn reset(&mut self, size: usize) -> JsValue {
        match self.session.reset(size) {
            Ok(()) => state_value(&self.session),
            Err(e) => error_value(e.to_string()),
        }
    }

    /// Set the display name for `mark` ("X" or "O"). Unknown marks are
    /// ignored.
    pub fn set_player_name(&mut self, mark: &str, name: String) {
        let mark = match mark {
            "X" | "x" => Mark::X,
            "O" | "o" => Mark::O,
            _ => return,
        };
        self.session.names_mut().set_name(mark, name);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
