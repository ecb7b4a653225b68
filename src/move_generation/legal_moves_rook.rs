use crate::game_state::{chess_types::Position, game_state::GameState};
use crate::move_generation::legal_move_shared::{path_is_clear, MoveDelta};

#[inline]
pub fn rook_move_is_legal(game_state: &GameState, from: Position, to: Position) -> bool {
    MoveDelta::between(from, to).is_straight() && path_is_clear(game_state, from, to)
}

#[cfg(test)]
mod tests {
    use super::rook_move_is_legal;
    use crate::game_state::{chess_types::Position, game_state::GameState};

    fn sq(row: u8, file: u8) -> Position {
        Position::main(row, file).expect("test square in range")
    }

    #[test]
    fn rook_moves_along_open_lines_only() {
        let game = GameState::from_fen("8/8/8/8/1p1R4/8/8/8 w - -").expect("fen should parse");
        // d4 = (3,3), dark pawn on b4 = (3,1)
        assert!(rook_move_is_legal(&game, sq(3, 3), sq(7, 3)));
        assert!(rook_move_is_legal(&game, sq(3, 3), sq(3, 7)));
        assert!(rook_move_is_legal(&game, sq(3, 3), sq(3, 1)));
        assert!(!rook_move_is_legal(&game, sq(3, 3), sq(3, 0)));
        assert!(!rook_move_is_legal(&game, sq(3, 3), sq(4, 4)));
    }
}
