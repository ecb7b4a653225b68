//! Move-path enumeration over the accepted-move generator.
//!
//! A pawn push that requires promotion and the selection that completes it
//! count as a single ply, so the counts line up with ordinary perft tables on
//! positions where check never matters.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::{generate_accepted_moves, GeneratedMove};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub double_pawn_pushes: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.double_pawn_pushes += rhs.double_pawn_pushes;
    }

    fn record(&mut self, mv: &GeneratedMove) {
        match mv.outcome {
            MoveOutcome::Applied(MoveKind::Capture) => self.captures += 1,
            MoveOutcome::Applied(MoveKind::EnPassant) => self.en_passant += 1,
            MoveOutcome::Applied(MoveKind::Castling) => self.castles += 1,
            MoveOutcome::Applied(MoveKind::Promotion) => self.promotions += 1,
            MoveOutcome::Applied(MoveKind::DoublePawnPush) => self.double_pawn_pushes += 1,
            _ => {}
        }
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if game_state.is_time_to_promote() {
        // The pending selection completes the ply that started it.
        let mut total = PerftCounts::default();
        for mv in generate_accepted_moves(game_state) {
            let mut child = perft(&mv.game_after_move, depth);
            if depth == 0 {
                child.record(&mv);
            }
            total.merge(child);
        }
        return total;
    }

    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_accepted_moves(game_state) {
        let mut child = perft(&mv.game_after_move, depth - 1);
        if depth == 1 {
            child.record(&mv);
        }
        total.merge(child);
    }
    total
}
