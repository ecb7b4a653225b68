use crate::game_state::{chess_types::Position, game_state::GameState};
use crate::move_generation::legal_move_shared::{path_is_clear, MoveDelta};

/// Rook or bishop geometry, with the matching path check.
#[inline]
pub fn queen_move_is_legal(game_state: &GameState, from: Position, to: Position) -> bool {
    let delta = MoveDelta::between(from, to);
    (delta.is_straight() || delta.is_diagonal()) && path_is_clear(game_state, from, to)
}

#[cfg(test)]
mod tests {
    use super::queen_move_is_legal;
    use crate::game_state::{chess_types::Position, game_state::GameState};

    fn sq(row: u8, file: u8) -> Position {
        Position::main(row, file).expect("test square in range")
    }

    #[test]
    fn queen_combines_rook_and_bishop_lines() {
        let game = GameState::from_fen("8/8/8/5p2/3Q4/8/8/8 w - -").expect("fen should parse");
        // d4 = (3,3), dark pawn on f5 = (4,5) is not on any of the d4 lines.
        assert!(queen_move_is_legal(&game, sq(3, 3), sq(7, 7)));
        assert!(queen_move_is_legal(&game, sq(3, 3), sq(0, 3)));
        assert!(queen_move_is_legal(&game, sq(3, 3), sq(3, 0)));
        assert!(!queen_move_is_legal(&game, sq(3, 3), sq(5, 4)));
        assert!(!queen_move_is_legal(&game, sq(3, 3), sq(5, 6)));
    }

    #[test]
    fn queen_is_blocked_by_pieces_in_between() {
        let game = GameState::new_game();
        // d1 queen behind its own pawn.
        assert!(!queen_move_is_legal(&game, sq(0, 3), sq(3, 3)));
        assert!(!queen_move_is_legal(&game, sq(0, 3), sq(3, 0)));
    }
}
