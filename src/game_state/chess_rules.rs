//! Canonical rule constants.
//!
//! Starting layout, the fixed promotion menu, and the name under which this
//! rule set registers with a host.

use crate::game_state::chess_types::{Color, Piece, PieceKind};

/// Identity reported to hosts that manage several game types.
pub const GAME_NAME: &str = "chess";

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Files of the corner rooks used for castling.
pub const QUEENSIDE_ROOK_FILE: u8 = 0;
pub const KINGSIDE_ROOK_FILE: u8 = 7;

/// Piece order on a promotion-menu row.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
];

/// Promotion menu: row 0 for light, row 1 for dark. Never mutated.
pub const PROMOTION_MENU: [[Piece; 4]; 2] = [
    promotion_row(Color::Light),
    promotion_row(Color::Dark),
];

const fn promotion_row(color: Color) -> [Piece; 4] {
    [
        Piece::new(color, PROMOTION_CHOICES[0]),
        Piece::new(color, PROMOTION_CHOICES[1]),
        Piece::new(color, PROMOTION_CHOICES[2]),
        Piece::new(color, PROMOTION_CHOICES[3]),
    ]
}

/// Menu file holding `kind`, if it is a promotion choice.
pub fn promotion_menu_file(kind: PieceKind) -> Option<u8> {
    PROMOTION_CHOICES
        .iter()
        .position(|&choice| choice == kind)
        .map(|idx| idx as u8)
}
