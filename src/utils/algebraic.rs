//! Conversions between algebraic squares (`e4`) and main-board positions.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::Position;

/// Convert an algebraic square (for example: "e4") to a main-board position.
#[inline]
pub fn algebraic_to_position(square: &str) -> Result<Position, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    Position::main(rank - b'1', file - b'a')
}

/// Convert a main-board position to algebraic notation (for example: "e4").
#[inline]
pub fn position_to_algebraic(position: Position) -> Result<String, ChessErrors> {
    if !position.is_main() {
        return Err(ChessErrors::InvalidAlgebraic(format!("{position:?}")));
    }

    let file_char = char::from(b'a' + position.file());
    let rank_char = char::from(b'1' + position.row());
    Ok(format!("{file_char}{rank_char}"))
}

/// File letter for a main-board file index.
#[inline]
pub fn file_to_char(file: u8) -> char {
    char::from(b'a' + file)
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_position, position_to_algebraic};
    use crate::game_state::chess_types::Position;

    #[test]
    fn corner_squares_convert_both_ways() {
        let a1 = algebraic_to_position("a1").expect("a1 should parse");
        assert_eq!((a1.row(), a1.file()), (0, 0));
        let h8 = algebraic_to_position("h8").expect("h8 should parse");
        assert_eq!((h8.row(), h8.file()), (7, 7));
        assert_eq!(position_to_algebraic(a1).expect("a1 should convert"), "a1");
        assert_eq!(position_to_algebraic(h8).expect("h8 should convert"), "h8");
    }

    #[test]
    fn e2_is_row_one_file_four() {
        let e2 = algebraic_to_position("e2").expect("e2 should parse");
        assert_eq!(e2, Position::main(1, 4).expect("in range"));
    }

    #[test]
    fn rejects_off_board_and_menu_positions() {
        assert!(algebraic_to_position("i1").is_err());
        assert!(algebraic_to_position("a9").is_err());
        assert!(algebraic_to_position("e").is_err());
        let menu = Position::promotion(0, 0).expect("in range");
        assert!(position_to_algebraic(menu).is_err());
    }
}
