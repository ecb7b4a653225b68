use crate::game_state::{chess_types::Position, game_state::GameState};
use crate::move_generation::legal_move_shared::{path_is_clear, MoveDelta};

#[inline]
pub fn bishop_move_is_legal(game_state: &GameState, from: Position, to: Position) -> bool {
    MoveDelta::between(from, to).is_diagonal() && path_is_clear(game_state, from, to)
}
