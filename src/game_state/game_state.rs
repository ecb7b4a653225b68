//! Owned board state aggregate.
//!
//! `GameState` holds the live 8x8 board, the promotion menu and every flag the
//! dispatch consults. Fields are crate-private: hosts read through the
//! accessors below and only the rules engine mutates.

use crate::errors::ChessErrors;
use crate::game_state::chess_rules::PROMOTION_MENU;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

pub type MainBoard = [[Option<Piece>; 8]; 8];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [row][file], row 0 is light's home rank.
    pub(crate) board: MainBoard,

    pub(crate) next_player: Color,
    pub(crate) is_time_to_promote: bool,
    pub(crate) en_passant_file: Option<u8>,

    // [color]
    pub(crate) castling: [CastlingRights; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [[None; 8]; 8],
            next_player: Color::Light,
            is_time_to_promote: false,
            en_passant_file: None,
            castling: [CastlingRights::default(); 2],
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut game_state = Self::default();
        for color in [Color::Light, Color::Dark] {
            for (file, kind) in back_rank.iter().enumerate() {
                game_state.board[color.home_row() as usize][file] = Some(Piece::new(color, *kind));
                game_state.board[color.pawn_row() as usize][file] =
                    Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Piece at a position on either board.
    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        let (row, file) = (position.row() as usize, position.file() as usize);
        match position.board() {
            BoardSelector::Main => self.board[row][file],
            BoardSelector::Promotion => Some(PROMOTION_MENU[row][file]),
        }
    }

    #[inline]
    pub fn main_board(&self) -> &MainBoard {
        &self.board
    }

    #[inline]
    pub fn promotion_menu(&self) -> &'static [[Piece; 4]; 2] {
        &PROMOTION_MENU
    }

    #[inline]
    pub fn next_player(&self) -> Color {
        self.next_player
    }

    #[inline]
    pub fn is_time_to_promote(&self) -> bool {
        self.is_time_to_promote
    }

    #[inline]
    pub fn en_passant_file(&self) -> Option<u8> {
        self.en_passant_file
    }

    #[inline]
    pub fn castling_rights(&self, color: Color) -> CastlingRights {
        self.castling[color.index()]
    }

    /// Main-board squares holding a piece, with their positions.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.board.iter().enumerate().flat_map(|(row, rank)| {
            rank.iter().enumerate().filter_map(move |(file, square)| {
                square.map(|piece| (Position::main_unchecked(row as u8, file as u8), piece))
            })
        })
    }

    // --- crate-private mutation used by the dispatch ---

    #[inline]
    pub(crate) fn square(&self, row: u8, file: u8) -> Option<Piece> {
        self.board[row as usize][file as usize]
    }

    #[inline]
    pub(crate) fn set_square(&mut self, row: u8, file: u8, piece: Option<Piece>) {
        self.board[row as usize][file as usize] = piece;
    }

    #[inline]
    pub(crate) fn relocate(&mut self, from: Position, to: Position) {
        let piece = self.square(from.row(), from.file());
        self.set_square(to.row(), to.file(), piece);
        self.set_square(from.row(), from.file(), None);
    }

    #[inline]
    pub(crate) fn pass_turn(&mut self) {
        self.next_player = self.next_player.opposite();
    }

    #[inline]
    pub(crate) fn castling_mut(&mut self, color: Color) -> &mut CastlingRights {
        &mut self.castling[color.index()]
    }
}
