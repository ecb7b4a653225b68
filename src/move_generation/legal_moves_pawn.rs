//! Pawn rules: single steps and captures, the double-step advance, and the
//! en-passant capture it enables.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::MoveDelta;

/// Row a pawn of `color` lands on when capturing en passant.
#[inline]
pub const fn en_passant_capture_row(color: Color) -> u8 {
    match color {
        Color::Light => 5,
        Color::Dark => 2,
    }
}

/// Generic pawn step: one row forward, straight onto an empty square or
/// diagonally onto an occupied one.
pub fn pawn_step_is_legal(game_state: &GameState, color: Color, from: Position, to: Position) -> bool {
    let delta = MoveDelta::between(from, to);
    if delta.d_row != color.forward() {
        return false;
    }

    let target = game_state.square(to.row(), to.file());
    match delta.abs_file() {
        0 => target.is_none(),
        1 => target.is_some(),
        _ => false,
    }
}

/// Two rows forward from the pawn row along an empty file.
pub fn double_step_is_legal(
    game_state: &GameState,
    color: Color,
    from: Position,
    to: Position,
) -> bool {
    let delta = MoveDelta::between(from, to);
    if from.row() != color.pawn_row() || delta.d_file != 0 || delta.d_row != 2 * color.forward() {
        return false;
    }

    let passed_row = (from.row() as i8 + color.forward()) as u8;
    game_state.square(to.row(), to.file()).is_none()
        && game_state.square(passed_row, from.file()).is_none()
}

/// En-passant capture: a single forward diagonal step onto the empty square
/// behind a pawn that double-stepped on the previous move.
pub fn en_passant_is_legal(
    game_state: &GameState,
    color: Color,
    from: Position,
    to: Position,
) -> bool {
    let Some(file) = game_state.en_passant_file else {
        return false;
    };

    let delta = MoveDelta::between(from, to);
    if to.file() != file
        || to.row() != en_passant_capture_row(color)
        || delta.d_row != color.forward()
        || delta.abs_file() != 1
        || game_state.square(to.row(), to.file()).is_some()
    {
        return false;
    }

    let captured = game_state.square(en_passant_victim_row(color), file);
    matches!(captured, Some(piece) if piece.is(color.opposite(), PieceKind::Pawn))
}

/// Row of the enemy pawn removed by an en-passant capture.
#[inline]
pub fn en_passant_victim_row(color: Color) -> u8 {
    (en_passant_capture_row(color) as i8 - color.forward()) as u8
}
