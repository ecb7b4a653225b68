//! Errors used throughout the crate.
//!
//! Illegal moves are not errors: the engine reports them through
//! `MoveOutcome`. `ChessErrors` covers malformed input handed to the crate,
//! such as out-of-range coordinates, bad notation or bad FEN.

use crate::game_state::chess_types::BoardSelector;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessErrors {
    /// Coordinate outside the selected board.
    #[error("position ({row}, {file}) is outside the {board:?} board")]
    OutOfBounds {
        board: BoardSelector,
        row: u8,
        file: u8,
    },

    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// A `board-row-file` position string could not be read.
    #[error("invalid position string: {0}")]
    InvalidPositionString(String),

    #[error("invalid move string: {0}")]
    InvalidMoveString(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value {value:?} for option {name}")]
    InvalidOptionValue { name: String, value: String },
}
