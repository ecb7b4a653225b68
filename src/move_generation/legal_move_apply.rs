//! Move dispatch: validates a request against the gates and special-move
//! rules, then mutates the state in place.
//!
//! Order matters. The turn gate runs first, a pending promotion then
//! swallows everything except a menu selection, and only after the
//! self-capture gate do en passant, the double step and castling get a
//! chance before the generic per-piece rules. Every rejection returns before
//! the first write, so a rejected request never changes the state.

use tracing::{debug, trace};

use crate::game_state::chess_rules::{KINGSIDE_ROOK_FILE, QUEENSIDE_ROOK_FILE};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{
    check_origin_and_target, check_turn_and_destination, generic_move_is_legal,
    promotion_selection_is_valid,
};
use crate::move_generation::legal_moves_king::{examine_castle, CastleCheck, CastlePlan, CastleSide};
use crate::move_generation::legal_moves_pawn::{
    double_step_is_legal, en_passant_is_legal, en_passant_victim_row,
};

pub fn apply_move(game_state: &mut GameState, request: MoveRequest) -> MoveOutcome {
    let mover = game_state.next_player;
    let outcome = dispatch(game_state, request);
    debug!(
        ?mover,
        from = ?request.from,
        to = ?request.to,
        ?outcome,
        "move processed"
    );
    outcome
}

fn dispatch(game_state: &mut GameState, request: MoveRequest) -> MoveOutcome {
    let piece = match check_turn_and_destination(game_state, request) {
        Ok(piece) => piece,
        Err(rejection) => return rejection,
    };

    if game_state.is_time_to_promote {
        if !promotion_selection_is_valid(game_state, request) {
            return MoveOutcome::RejectedPromotionPending;
        }
        trace!(choice = ?piece.kind, "promotion selected");
        return apply_promotion_selection(game_state, piece, request.to);
    }

    if let Err(rejection) = check_origin_and_target(game_state, request) {
        return rejection;
    }

    let (from, to) = (request.from, request.to);
    let color = piece.color;

    if piece.kind == PieceKind::Pawn {
        if en_passant_is_legal(game_state, color, from, to) {
            trace!("en passant capture");
            return apply_en_passant(game_state, color, from, to);
        }
        if double_step_is_legal(game_state, color, from, to) {
            trace!("double pawn push");
            return apply_double_step(game_state, from, to);
        }
    }

    if piece.kind == PieceKind::King {
        match examine_castle(game_state, color, from, to) {
            CastleCheck::Castle(plan) => {
                trace!(side = ?plan.side, "castling");
                return apply_castle(game_state, color, from, to, plan);
            }
            CastleCheck::Blocked => return MoveOutcome::RejectedIllegal,
            CastleCheck::NotCastling => {}
        }
    }

    if !generic_move_is_legal(game_state, piece, from, to) {
        return MoveOutcome::RejectedIllegal;
    }

    apply_generic_move(game_state, piece, from, to)
}

fn apply_promotion_selection(game_state: &mut GameState, choice: Piece, to: Position) -> MoveOutcome {
    game_state.set_square(to.row(), to.file(), Some(choice));
    game_state.is_time_to_promote = false;
    game_state.pass_turn();
    MoveOutcome::Applied(MoveKind::Promotion)
}

fn apply_en_passant(game_state: &mut GameState, color: Color, from: Position, to: Position) -> MoveOutcome {
    game_state.set_square(en_passant_victim_row(color), to.file(), None);
    game_state.relocate(from, to);
    game_state.en_passant_file = None;
    game_state.pass_turn();
    MoveOutcome::Applied(MoveKind::EnPassant)
}

fn apply_double_step(game_state: &mut GameState, from: Position, to: Position) -> MoveOutcome {
    game_state.relocate(from, to);
    game_state.en_passant_file = Some(to.file());
    game_state.pass_turn();
    MoveOutcome::Applied(MoveKind::DoublePawnPush)
}

fn apply_castle(
    game_state: &mut GameState,
    color: Color,
    from: Position,
    to: Position,
    plan: CastlePlan,
) -> MoveOutcome {
    game_state.relocate(from, to);
    game_state.relocate(plan.rook_from, plan.rook_to);
    game_state.en_passant_file = None;

    let rights = game_state.castling_mut(color);
    rights.king_moved = true;
    match plan.side {
        CastleSide::Kingside => rights.kingside_rook_moved = true,
        CastleSide::Queenside => rights.queenside_rook_moved = true,
    }

    game_state.pass_turn();
    MoveOutcome::Applied(MoveKind::Castling)
}

fn apply_generic_move(game_state: &mut GameState, piece: Piece, from: Position, to: Position) -> MoveOutcome {
    let captured = game_state.piece_at(to).is_some();
    game_state.relocate(from, to);
    game_state.en_passant_file = None;

    match piece.kind {
        PieceKind::King => game_state.castling_mut(piece.color).king_moved = true,
        PieceKind::Rook => mark_rook_moved(game_state, piece.color, from),
        PieceKind::Pawn if to.row() == piece.color.far_row() => {
            game_state.is_time_to_promote = true;
            return MoveOutcome::PromotionRequired;
        }
        _ => {}
    }

    game_state.pass_turn();
    if captured {
        MoveOutcome::Applied(MoveKind::Capture)
    } else {
        MoveOutcome::Applied(MoveKind::Quiet)
    }
}

/// Sets the one corner flag matching a rook leaving its starting square.
fn mark_rook_moved(game_state: &mut GameState, color: Color, from: Position) {
    if from.row() != color.home_row() {
        return;
    }

    let rights = game_state.castling_mut(color);
    match from.file() {
        QUEENSIDE_ROOK_FILE => rights.queenside_rook_moved = true,
        KINGSIDE_ROOK_FILE => rights.kingside_rook_moved = true,
        _ => {}
    }
}
