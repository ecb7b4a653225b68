//! Host-facing abstraction over a turn-based rule set.
//!
//! A host that manages several game types holds them behind this trait and
//! forwards move requests without knowing which game is being played.

use crate::game_state::chess_types::{MoveOutcome, MoveRequest};

pub trait GameRules {
    /// Fixed name of the game these rules implement.
    fn name(&self) -> &'static str;

    /// Reset to the starting position.
    fn new_game(&mut self);

    /// Validate and, if legal, apply one move. Rejections leave the state untouched.
    fn submit_move(&mut self, request: MoveRequest) -> MoveOutcome;
}
