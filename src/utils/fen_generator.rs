//! GameState-to-FEN generator.
//!
//! Emits the four position fields (board, side, castling, en passant); the
//! engine keeps no clocks. A pending promotion is not representable in FEN.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_pawn::en_passant_capture_row;
use crate::utils::algebraic::file_to_char;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state);
    let side_to_move = match game_state.next_player() {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(game_state);
    let en_passant = generate_en_passant_field(game_state);

    format!("{board} {side_to_move} {castling} {en_passant}")
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for row in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            if let Some(piece) = game_state.square(row, file) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::Light => base.to_ascii_uppercase(),
        Color::Dark => base,
    }
}

fn generate_castling_field(game_state: &GameState) -> String {
    let mut out = String::new();
    let light = game_state.castling_rights(Color::Light);
    let dark = game_state.castling_rights(Color::Dark);

    if light.can_castle_kingside() {
        out.push('K');
    }
    if light.can_castle_queenside() {
        out.push('Q');
    }
    if dark.can_castle_kingside() {
        out.push('k');
    }
    if dark.can_castle_queenside() {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

fn generate_en_passant_field(game_state: &GameState) -> String {
    match game_state.en_passant_file() {
        Some(file) => {
            // The window belongs to the side to move, which captures onto this row.
            let row = en_passant_capture_row(game_state.next_player());
            format!("{}{}", file_to_char(file), char::from(b'1' + row))
        }
        None => "-".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::engines::engine_trait::GameRules;
    use crate::engines::rules_engine::RulesEngine;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_fen() {
        assert_eq!(
            generate_fen(&GameState::new_game()),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"
        );
    }

    #[test]
    fn double_step_shows_en_passant_square() {
        let mut engine = RulesEngine::new();
        let e2 = Position::main(1, 4).expect("in range");
        let e4 = Position::main(3, 4).expect("in range");
        assert!(engine.submit_move(MoveRequest::new(e2, e4)).is_accepted());
        assert_eq!(
            engine.state().get_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3"
        );
    }

    #[test]
    fn generated_fen_parses_back_to_the_same_state() {
        let fen = "r3k2r/8/8/3pP3/8/8/8/R3K2R w Kq d6";
        let game = GameState::from_fen(fen).expect("fen should parse");
        assert_eq!(generate_fen(&game), fen);
    }
}
