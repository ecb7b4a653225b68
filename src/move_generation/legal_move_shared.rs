//! Geometry helpers shared by the per-piece legality checks.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Signed and absolute row/file displacement of a main-board move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDelta {
    pub d_row: i8,
    pub d_file: i8,
}

impl MoveDelta {
    #[inline]
    pub fn between(from: Position, to: Position) -> Self {
        Self {
            d_row: to.row() as i8 - from.row() as i8,
            d_file: to.file() as i8 - from.file() as i8,
        }
    }

    #[inline]
    pub fn abs_row(self) -> u8 {
        self.d_row.unsigned_abs()
    }

    #[inline]
    pub fn abs_file(self) -> u8 {
        self.d_file.unsigned_abs()
    }

    #[inline]
    pub fn is_straight(self) -> bool {
        (self.d_row == 0) != (self.d_file == 0)
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        self.d_row != 0 && self.abs_row() == self.abs_file()
    }
}

/// True when every main-board square strictly between `from` and `to` is empty.
///
/// Walks the unit step between the endpoints, so it is only meaningful for
/// horizontal, vertical and diagonal pairs. Adjacent squares are trivially clear.
pub fn path_is_clear(game_state: &GameState, from: Position, to: Position) -> bool {
    let delta = MoveDelta::between(from, to);
    let step_row = delta.d_row.signum();
    let step_file = delta.d_file.signum();

    let mut row = from.row() as i8 + step_row;
    let mut file = from.file() as i8 + step_file;

    while (row, file) != (to.row() as i8, to.file() as i8) {
        if !(0..8).contains(&row) || !(0..8).contains(&file) {
            return false;
        }
        if game_state.square(row as u8, file as u8).is_some() {
            return false;
        }
        row += step_row;
        file += step_file;
    }

    true
}
