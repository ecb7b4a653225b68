//! Core value types shared by the rules engine.
//!
//! Pieces, colors, board coordinates and the tagged outcome returned for every
//! submitted move live here so the state, the dispatch and the notation
//! helpers all speak the same vocabulary.

pub use crate::game_state::game_state::GameState;

use crate::errors::ChessErrors;

/// Side to move. `Light` moves first and owns row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Back rank holding the king and rooks at game start.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    /// Row on which this color's pawns promote.
    #[inline]
    pub const fn far_row(self) -> u8 {
        self.opposite().home_row()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }
}

/// Which grid a [`Position`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardSelector {
    /// The live 8x8 board.
    Main,
    /// The fixed 2x4 menu of promotion pieces, one row per color.
    Promotion,
}

impl BoardSelector {
    #[inline]
    pub const fn dimensions(self) -> (u8, u8) {
        match self {
            BoardSelector::Main => (8, 8),
            BoardSelector::Promotion => (2, 4),
        }
    }
}

/// A bounds-checked coordinate on either board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    board: BoardSelector,
    row: u8,
    file: u8,
}

impl Position {
    pub fn new(board: BoardSelector, row: u8, file: u8) -> Result<Self, ChessErrors> {
        let (rows, files) = board.dimensions();
        if row >= rows || file >= files {
            return Err(ChessErrors::OutOfBounds { board, row, file });
        }
        Ok(Self { board, row, file })
    }

    #[inline]
    pub fn main(row: u8, file: u8) -> Result<Self, ChessErrors> {
        Self::new(BoardSelector::Main, row, file)
    }

    #[inline]
    pub fn promotion(row: u8, file: u8) -> Result<Self, ChessErrors> {
        Self::new(BoardSelector::Promotion, row, file)
    }

    /// Main-board position from indices already known to be in range.
    #[inline]
    pub(crate) const fn main_unchecked(row: u8, file: u8) -> Self {
        Self {
            board: BoardSelector::Main,
            row,
            file,
        }
    }

    #[inline]
    pub const fn board(self) -> BoardSelector {
        self.board
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub fn is_main(self) -> bool {
        self.board == BoardSelector::Main
    }

    #[inline]
    pub fn is_promotion(self) -> bool {
        self.board == BoardSelector::Promotion
    }
}

/// A single request handed to the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub from: Position,
    pub to: Position,
}

impl MoveRequest {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

/// Per-color castling bookkeeping. Every flag only ever goes from false to true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights {
    /// The a-file rook has left its starting square.
    pub queenside_rook_moved: bool,
    /// The h-file rook has left its starting square.
    pub kingside_rook_moved: bool,
    pub king_moved: bool,
}

impl CastlingRights {
    #[inline]
    pub fn can_castle_kingside(self) -> bool {
        !self.king_moved && !self.kingside_rook_moved
    }

    #[inline]
    pub fn can_castle_queenside(self) -> bool {
        !self.king_moved && !self.queenside_rook_moved
    }
}

/// What kind of change an accepted move made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    Capture,
    DoublePawnPush,
    EnPassant,
    Castling,
    Promotion,
}

/// Result of submitting a move. Rejections never touch the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied(MoveKind),
    /// The move was applied and the same player must now pick a promotion piece.
    PromotionRequired,
    RejectedIllegal,
    RejectedWrongTurn,
    /// Ignored because a promotion choice is outstanding.
    RejectedPromotionPending,
}

impl MoveOutcome {
    #[inline]
    pub fn is_accepted(self) -> bool {
        matches!(self, MoveOutcome::Applied(_) | MoveOutcome::PromotionRequired)
    }
}
