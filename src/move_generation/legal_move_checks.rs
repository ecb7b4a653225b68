//! Gates applied to every request before any rule-specific handling, plus the
//! generic per-piece legality table.
//!
//! Each gate returns the rejection it would report so the dispatch can stop
//! at the first failing one without touching the state.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::MoveDelta;
use crate::move_generation::legal_moves_bishop::bishop_move_is_legal;
use crate::move_generation::legal_moves_king::king_step_is_legal;
use crate::move_generation::legal_moves_knight::knight_move_is_legal;
use crate::move_generation::legal_moves_pawn::pawn_step_is_legal;
use crate::move_generation::legal_moves_queen::queen_move_is_legal;
use crate::move_generation::legal_moves_rook::rook_move_is_legal;

/// Origin must hold a piece of the side to move and the destination must be
/// on the main board. Returns the moving piece.
pub fn check_turn_and_destination(
    game_state: &GameState,
    request: MoveRequest,
) -> Result<Piece, MoveOutcome> {
    let piece = game_state
        .piece_at(request.from)
        .ok_or(MoveOutcome::RejectedIllegal)?;

    if piece.color != game_state.next_player {
        return Err(MoveOutcome::RejectedWrongTurn);
    }
    if request.to.is_promotion() {
        return Err(MoveOutcome::RejectedIllegal);
    }

    Ok(piece)
}

/// While a promotion is pending the only acceptable request takes a menu piece
/// onto a main-board square holding a pawn of the side to move.
pub fn promotion_selection_is_valid(game_state: &GameState, request: MoveRequest) -> bool {
    if !request.from.is_promotion() || !request.to.is_main() {
        return false;
    }

    matches!(
        game_state.piece_at(request.to),
        Some(target) if target.is(game_state.next_player, PieceKind::Pawn)
    )
}

/// Outside a pending promotion: no self-capture and no dragging off the menu.
pub fn check_origin_and_target(game_state: &GameState, request: MoveRequest) -> Result<(), MoveOutcome> {
    if request.from.is_promotion() {
        return Err(MoveOutcome::RejectedIllegal);
    }

    match game_state.piece_at(request.to) {
        Some(target) if target.color == game_state.next_player => Err(MoveOutcome::RejectedIllegal),
        _ => Ok(()),
    }
}

/// Movement rule for `piece` when no special move applies.
pub fn generic_move_is_legal(game_state: &GameState, piece: Piece, from: Position, to: Position) -> bool {
    let delta = MoveDelta::between(from, to);
    match piece.kind {
        PieceKind::Pawn => pawn_step_is_legal(game_state, piece.color, from, to),
        PieceKind::Knight => knight_move_is_legal(delta),
        PieceKind::King => king_step_is_legal(delta),
        PieceKind::Rook => rook_move_is_legal(game_state, from, to),
        PieceKind::Bishop => bishop_move_is_legal(game_state, from, to),
        PieceKind::Queen => queen_move_is_legal(game_state, from, to),
    }
}
