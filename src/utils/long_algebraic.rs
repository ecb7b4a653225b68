//! Move text used by the console and by hosts relaying typed moves.
//!
//! Accepted forms:
//! - long algebraic, `e2e4`; a promotion suffix (`e7e8q`) expands into the
//!   pawn move followed by the matching menu selection;
//! - two whitespace-separated positions, each algebraic or `board-row-file`
//!   (`0-1-4 0-3-4`, `1-0-3 e8`).

use crate::errors::ChessErrors;
use crate::game_state::chess_rules::promotion_menu_file;
use crate::game_state::chess_types::{Color, MoveRequest, PieceKind, Position};
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};
use crate::utils::position_notation::{parse_any_position, position_to_string};

/// Parse move text into the requests to submit in order.
///
/// `mover` picks the promotion-menu row for a promotion suffix.
pub fn parse_move_text(text: &str, mover: Color) -> Result<Vec<MoveRequest>, ChessErrors> {
    let trimmed = text.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    match parts.as_slice() {
        [from, to] => Ok(vec![MoveRequest::new(
            parse_any_position(from)?,
            parse_any_position(to)?,
        )]),
        [lan] => long_algebraic_to_requests(lan, mover),
        _ => Err(ChessErrors::InvalidMoveString(trimmed.to_owned())),
    }
}

pub fn long_algebraic_to_requests(lan: &str, mover: Color) -> Result<Vec<MoveRequest>, ChessErrors> {
    let invalid = || ChessErrors::InvalidMoveString(lan.to_owned());
    if !lan.is_ascii() || !(4..=5).contains(&lan.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_position(&lan[0..2])?;
    let to = algebraic_to_position(&lan[2..4])?;
    let mut requests = vec![MoveRequest::new(from, to)];

    if let Some(suffix) = lan[4..].chars().next() {
        let kind = match suffix.to_ascii_lowercase() {
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            _ => return Err(invalid()),
        };
        let file = promotion_menu_file(kind).ok_or_else(invalid)?;
        let choice = Position::promotion(mover.index() as u8, file)?;
        requests.push(MoveRequest::new(choice, to));
    }

    Ok(requests)
}

/// Render a request: long algebraic when both ends are on the main board.
pub fn move_request_to_text(request: MoveRequest) -> String {
    match (position_to_algebraic(request.from), position_to_algebraic(request.to)) {
        (Ok(from), Ok(to)) => format!("{from}{to}"),
        _ => format!(
            "{} {}",
            position_to_string(request.from),
            position_to_string(request.to)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, file: u8) -> Position {
        Position::main(row, file).expect("test square in range")
    }

    #[test]
    fn plain_long_algebraic() {
        let requests = parse_move_text("e2e4", Color::Light).expect("should parse");
        assert_eq!(requests, vec![MoveRequest::new(sq(1, 4), sq(3, 4))]);
        assert_eq!(move_request_to_text(requests[0]), "e2e4");
    }

    #[test]
    fn promotion_suffix_adds_menu_selection() {
        let requests = parse_move_text("b2b1n", Color::Dark).expect("should parse");
        let knight = Position::promotion(1, 1).expect("in range");
        assert_eq!(
            requests,
            vec![
                MoveRequest::new(sq(1, 1), sq(0, 1)),
                MoveRequest::new(knight, sq(0, 1)),
            ]
        );
        assert_eq!(move_request_to_text(requests[1]), "1-1-1 0-0-1");
    }

    #[test]
    fn position_pairs() {
        let requests = parse_move_text("0-1-4 0-3-4", Color::Light).expect("should parse");
        assert_eq!(requests, vec![MoveRequest::new(sq(1, 4), sq(3, 4))]);

        let selection = parse_move_text("1-0-3 a8", Color::Light).expect("should parse");
        assert_eq!(selection[0].from, Position::promotion(0, 3).expect("in range"));
        assert_eq!(selection[0].to, sq(7, 0));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_move_text("e2", Color::Light).is_err());
        assert!(parse_move_text("e2e4k", Color::Light).is_err());
        assert!(parse_move_text("e2 e4 e5", Color::Light).is_err());
        assert!(parse_move_text("", Color::Light).is_err());
    }
}
