//! Crate root module declarations for the chess rules engine.
//!
//! The crate is a single stateful rules processor: it decides whether a
//! requested move is legal, applies it, and advances turn order. Around it sit
//! the host-facing trait, notation and FEN helpers, a text renderer, and a
//! small console front-end.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
    pub mod rules_engine;
}

pub mod console {
    pub mod console_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod position_notation;
    pub mod render_game_state;
}

pub use engines::engine_trait::GameRules;
pub use engines::rules_engine::RulesEngine;
pub use errors::ChessErrors;
pub use game_state::chess_types::{
    BoardSelector, CastlingRights, Color, MoveKind, MoveOutcome, MoveRequest, Piece, PieceKind,
    Position,
};
pub use game_state::game_state::GameState;
