//! Terminal-oriented Unicode board renderer.
//!
//! Draws the main board with light's home rank at the bottom, followed by the
//! promotion menu and a status line. Used by the console and in test output.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::file_to_char;

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..8u8).rev() {
        out.push(char::from(b'1' + row));
        out.push(' ');

        for file in 0..8u8 {
            match game_state.square(row, file) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");

    for (row, color) in [(0usize, Color::Light), (1usize, Color::Dark)] {
        out.push_str(&format!("menu {row}:"));
        for piece in game_state.promotion_menu()[row] {
            out.push(' ');
            out.push(piece_to_unicode(piece));
        }
        out.push_str(&format!("  ({color:?})\n"));
    }

    out.push_str(&render_status(game_state));
    out
}

/// One-line summary of turn, pending promotion, en-passant window and castling.
pub fn render_status(game_state: &GameState) -> String {
    let en_passant = game_state
        .en_passant_file()
        .map(|file| file_to_char(file).to_string())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "to move: {:?}{} | en passant: {} | castling: {}",
        game_state.next_player(),
        if game_state.is_time_to_promote() {
            " (choose promotion)"
        } else {
            ""
        },
        en_passant,
        castling_summary(game_state)
    )
}

fn castling_summary(game_state: &GameState) -> String {
    let mut out = String::new();
    for (color, letters) in [(Color::Light, ['K', 'Q']), (Color::Dark, ['k', 'q'])] {
        let rights = game_state.castling_rights(color);
        if rights.can_castle_kingside() {
            out.push(letters[0]);
        }
        if rights.can_castle_queenside() {
            out.push(letters[1]);
        }
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
