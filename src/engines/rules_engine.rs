//! The authoritative chess rules processor.
//!
//! `RulesEngine` owns the only mutable `GameState` in a session. Every change
//! goes through [`GameRules::submit_move`]; hosts get a shared reference for
//! rendering. Calls are not synchronized: serialize them externally.

use tracing::info;

use crate::engines::engine_trait::GameRules;
use crate::errors::ChessErrors;
use crate::game_state::chess_rules::GAME_NAME;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;

#[derive(Debug, Clone)]
pub struct RulesEngine {
    game_state: GameState,
}

impl RulesEngine {
    pub fn new() -> Self {
        Self {
            game_state: GameState::new_game(),
        }
    }

    /// Start from a custom position instead of the standard layout.
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        Ok(Self {
            game_state: GameState::from_fen(fen)?,
        })
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.game_state
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRules for RulesEngine {
    fn name(&self) -> &'static str {
        GAME_NAME
    }

    fn new_game(&mut self) {
        info!(game = GAME_NAME, "new game");
        self.game_state = GameState::new_game();
    }

    fn submit_move(&mut self, request: MoveRequest) -> MoveOutcome {
        apply_move(&mut self.game_state, request)
    }
}
