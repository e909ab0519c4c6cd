//! Minimal slice of the embedding game state.
//!
//! The dashboard only reads one flag from the surrounding game: whether a
//! game is in progress. The momentum panel renders a placeholder until it is.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GameState {
    pub game_started: bool,
}

impl GameState {
    pub fn toggle_game(&mut self) {
        self.game_started = !self.game_started;
    }
}
