//! FEN-to-GameState parser.
//!
//! Reads the board, side-to-move, castling and en-passant fields. Clock
//! fields are optional and only checked for being numbers. Castling letters
//! map onto moved-flags: a missing `K` marks the h-file rook as moved, a
//! missing `Q` the a-file rook, and when both are missing the king is marked
//! as moved too.

use crate::errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_position;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let invalid = |msg: &str| ChessErrors::InvalidFen(msg.to_owned());
    let fields: Vec<&str> = fen.split_whitespace().collect();

    let (board_part, side_part, castling_part, en_passant_part) = match fields.as_slice() {
        [board, side, castling, en_passant] => (*board, *side, *castling, *en_passant),
        [board, side, castling, en_passant, halfmove, fullmove] => {
            halfmove
                .parse::<u16>()
                .map_err(|_| invalid(&format!("invalid halfmove clock: {halfmove}")))?;
            fullmove
                .parse::<u16>()
                .map_err(|_| invalid(&format!("invalid fullmove number: {fullmove}")))?;
            (*board, *side, *castling, *en_passant)
        }
        _ => return Err(invalid("expected 4 or 6 fields")),
    };

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.next_player = parse_side_to_move(side_part)?;
    game_state.castling = parse_castling_rights(castling_part)?;
    game_state.en_passant_file = parse_en_passant_file(en_passant_part)?;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFen("board layout must contain 8 ranks".to_owned()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFen(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(ChessErrors::InvalidFen("board rank has too many files".to_owned()));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or_else(|| {
                ChessErrors::InvalidFen(format!("invalid piece character '{ch}' in board layout"))
            })?;

            if file >= 8 {
                return Err(ChessErrors::InvalidFen("board rank has too many files".to_owned()));
            }

            game_state.set_square(row, file, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFen("board rank does not sum to 8 files".to_owned()));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidFen(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<[CastlingRights; 2], ChessErrors> {
    let mut available = [[false; 2]; 2];

    if castling_part != "-" {
        for ch in castling_part.chars() {
            match ch {
                'K' => available[Color::Light.index()][0] = true,
                'Q' => available[Color::Light.index()][1] = true,
                'k' => available[Color::Dark.index()][0] = true,
                'q' => available[Color::Dark.index()][1] = true,
                _ => {
                    return Err(ChessErrors::InvalidFen(format!(
                        "invalid castling rights character: {ch}"
                    )))
                }
            }
        }
    }

    Ok(available.map(|[kingside, queenside]| CastlingRights {
        queenside_rook_moved: !queenside,
        kingside_rook_moved: !kingside,
        king_moved: !kingside && !queenside,
    }))
}

fn parse_en_passant_file(en_passant_part: &str) -> Result<Option<u8>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_position(en_passant_part)?.file()))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
