//! King rules: single steps and castling.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_FILE, QUEENSIDE_ROOK_FILE};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{path_is_clear, MoveDelta};

#[inline]
pub fn king_step_is_legal(delta: MoveDelta) -> bool {
    delta.abs_row() <= 1 && delta.abs_file() <= 1
}

/// Which rook takes part in a castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::Kingside => KINGSIDE_ROOK_FILE,
            CastleSide::Queenside => QUEENSIDE_ROOK_FILE,
        }
    }

    #[inline]
    pub fn rook_has_moved(self, rights: CastlingRights) -> bool {
        match self {
            CastleSide::Kingside => rights.kingside_rook_moved,
            CastleSide::Queenside => rights.queenside_rook_moved,
        }
    }
}

/// Both relocations of an accepted castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlePlan {
    pub side: CastleSide,
    pub rook_from: Position,
    pub rook_to: Position,
}

/// Result of examining a king move as a castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleCheck {
    /// Not a castling attempt; the generic king rule decides.
    NotCastling,
    Blocked,
    Castle(CastlePlan),
}

/// Classify a king move that may be a castle.
///
/// A two-file move along the rank by a king that never moved is a castling
/// attempt unless the chosen corner rook has already moved, in which case the
/// generic one-square limit rejects it.
pub fn examine_castle(game_state: &GameState, color: Color, from: Position, to: Position) -> CastleCheck {
    let delta = MoveDelta::between(from, to);
    let rights = game_state.castling_rights(color);
    if delta.d_row != 0 || delta.abs_file() != 2 || rights.king_moved {
        return CastleCheck::NotCastling;
    }

    let side = if delta.d_file > 0 {
        CastleSide::Kingside
    } else {
        CastleSide::Queenside
    };
    if side.rook_has_moved(rights) {
        return CastleCheck::NotCastling;
    }

    let rook_from = Position::main_unchecked(from.row(), side.rook_file());
    let rook_present = matches!(
        game_state.square(rook_from.row(), rook_from.file()),
        Some(piece) if piece.is(color, PieceKind::Rook)
    );
    if !rook_present || !path_is_clear(game_state, from, rook_from) {
        return CastleCheck::Blocked;
    }

    let rook_file = (to.file() as i8 - delta.d_file.signum()) as u8;
    CastleCheck::Castle(CastlePlan {
        side,
        rook_from,
        rook_to: Position::main_unchecked(from.row(), rook_file),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, file: u8) -> Position {
        Position::main(row, file).expect("test square in range")
    }

    #[test]
    fn king_steps_one_square_in_any_direction() {
        let mut count = 0;
        for d_row in -2i8..=2 {
            for d_file in -2i8..=2 {
                if (d_row, d_file) != (0, 0) && king_step_is_legal(MoveDelta { d_row, d_file }) {
                    count += 1;
                }
            }
        }
        assert_eq!(count, 8);
    }

    #[test]
    fn castle_plans_place_rook_beside_king() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -").expect("fen should parse");

        let CastleCheck::Castle(kingside) = examine_castle(&game, Color::Light, sq(0, 4), sq(0, 6))
        else {
            panic!("kingside castle should be planned");
        };
        assert_eq!(kingside.side, CastleSide::Kingside);
        assert_eq!(kingside.rook_from, sq(0, 7));
        assert_eq!(kingside.rook_to, sq(0, 5));

        let CastleCheck::Castle(queenside) = examine_castle(&game, Color::Dark, sq(7, 4), sq(7, 2))
        else {
            panic!("queenside castle should be planned");
        };
        assert_eq!(queenside.rook_from, sq(7, 0));
        assert_eq!(queenside.rook_to, sq(7, 3));
    }

    #[test]
    fn castle_blocked_by_piece_between_king_and_rook() {
        // b1 knight still home: queenside is blocked even though c1 and d1 are empty.
        let game = GameState::from_fen("8/8/8/8/8/8/8/RN2K2R w KQ -").expect("fen should parse");
        assert_eq!(
            examine_castle(&game, Color::Light, sq(0, 4), sq(0, 2)),
            CastleCheck::Blocked
        );
        assert!(matches!(
            examine_castle(&game, Color::Light, sq(0, 4), sq(0, 6)),
            CastleCheck::Castle(_)
        ));
    }

    #[test]
    fn moved_rook_or_king_is_not_a_castle() {
        let rook_moved = GameState::from_fen("8/8/8/8/8/8/8/R3K2R w Q -").expect("fen should parse");
        assert_eq!(
            examine_castle(&rook_moved, Color::Light, sq(0, 4), sq(0, 6)),
            CastleCheck::NotCastling
        );

        let king_moved = GameState::from_fen("8/8/8/8/8/8/8/R3K2R w - -").expect("fen should parse");
        assert_eq!(
            examine_castle(&king_moved, Color::Light, sq(0, 4), sq(0, 2)),
            CastleCheck::NotCastling
        );
    }

    #[test]
    fn missing_corner_rook_blocks_castle() {
        let game = GameState::from_fen("8/8/8/8/8/8/8/4K2b w K -").expect("fen should parse");
        assert_eq!(
            examine_castle(&game, Color::Light, sq(0, 4), sq(0, 6)),
            CastleCheck::Blocked
        );
    }
}
