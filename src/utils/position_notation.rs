//! `board-row-file` position strings.
//!
//! Hosts that relay raw coordinates send positions as three dash-separated
//! integers: board selector (0 main, 1 promotion menu), row, file. For
//! example `0-1-4` is e2 and `1-0-3` is light's queen on the menu.

use crate::errors::ChessErrors;
use crate::game_state::chess_types::{BoardSelector, Position};
use crate::utils::algebraic::algebraic_to_position;

pub fn parse_position_string(text: &str) -> Result<Position, ChessErrors> {
    let invalid = || ChessErrors::InvalidPositionString(text.to_owned());

    let parts: Vec<&str> = text.trim().split('-').collect();
    let [board, row, file] = parts.as_slice() else {
        return Err(invalid());
    };

    let board = match board.parse::<u8>().map_err(|_| invalid())? {
        0 => BoardSelector::Main,
        1 => BoardSelector::Promotion,
        _ => return Err(invalid()),
    };
    let row = row.parse::<u8>().map_err(|_| invalid())?;
    let file = file.parse::<u8>().map_err(|_| invalid())?;

    Position::new(board, row, file)
}

pub fn position_to_string(position: Position) -> String {
    let board = match position.board() {
        BoardSelector::Main => 0,
        BoardSelector::Promotion => 1,
    };
    format!("{}-{}-{}", board, position.row(), position.file())
}

/// Either a `board-row-file` triple or an algebraic square.
pub fn parse_any_position(text: &str) -> Result<Position, ChessErrors> {
    if text.contains('-') {
        parse_position_string(text)
    } else {
        algebraic_to_position(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_main_and_menu_positions() {
        assert_eq!(
            parse_position_string("0-1-4").expect("should parse"),
            Position::main(1, 4).expect("in range")
        );
        assert_eq!(
            parse_position_string("1-1-3").expect("should parse"),
            Position::promotion(1, 3).expect("in range")
        );
        assert_eq!(position_to_string(Position::promotion(0, 2).expect("in range")), "1-0-2");
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!(parse_position_string("0-1").is_err());
        assert!(parse_position_string("2-0-0").is_err());
        assert!(parse_position_string("0-x-4").is_err());
        assert!(matches!(
            parse_position_string("1-0-4"),
            Err(ChessErrors::OutOfBounds { .. })
        ));
    }

    #[test]
    fn any_position_accepts_both_notations() {
        assert_eq!(
            parse_any_position("e2").expect("should parse"),
            parse_any_position("0-1-4").expect("should parse")
        );
    }
}
