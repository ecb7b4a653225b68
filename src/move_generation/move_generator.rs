//! Accepted-move enumeration.
//!
//! The engine has no generator of its own: legality is defined by what the
//! dispatch accepts. Candidates are probed against a clone of the state and
//! every request the dispatch accepts is returned with the resulting state.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;

#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub request: MoveRequest,
    pub outcome: MoveOutcome,
    pub game_after_move: GameState,
}

/// Every request the side to move could submit successfully right now.
///
/// While a promotion is pending only menu selections of the side to move are
/// probed; otherwise every own main-board piece is tried against all 64
/// destinations.
pub fn generate_accepted_moves(game_state: &GameState) -> Vec<GeneratedMove> {
    let mut out = Vec::new();
    for request in candidate_requests(game_state) {
        let mut next = game_state.clone();
        let outcome = apply_move(&mut next, request);
        if outcome.is_accepted() {
            out.push(GeneratedMove {
                request,
                outcome,
                game_after_move: next,
            });
        }
    }
    out
}

fn candidate_requests(game_state: &GameState) -> Vec<MoveRequest> {
    let mover = game_state.next_player();
    let origins: Vec<Position> = if game_state.is_time_to_promote() {
        let row = mover.index() as u8;
        (0..4)
            .filter_map(|file| Position::promotion(row, file).ok())
            .collect()
    } else {
        game_state
            .occupied_squares()
            .filter(|(_, piece)| piece.color == mover)
            .map(|(position, _)| position)
            .collect()
    };

    let mut requests = Vec::with_capacity(origins.len() * 64);
    for from in origins {
        for row in 0..8 {
            for file in 0..8 {
                requests.push(MoveRequest::new(from, Position::main_unchecked(row, file)));
            }
        }
    }
    requests
}
