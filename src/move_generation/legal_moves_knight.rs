use crate::move_generation::legal_move_shared::MoveDelta;

/// Knight jumps: one of (±1, ±2) or (±2, ±1). Paths are never checked.
#[inline]
pub fn knight_move_is_legal(delta: MoveDelta) -> bool {
    matches!((delta.abs_row(), delta.abs_file()), (1, 2) | (2, 1))
}

#[cfg(test)]
mod tests {
    use super::knight_move_is_legal;
    use crate::move_generation::legal_move_shared::MoveDelta;

    #[test]
    fn knight_has_eight_jumps_from_the_centre() {
        let mut count = 0;
        for d_row in -7i8..=7 {
            for d_file in -7i8..=7 {
                if knight_move_is_legal(MoveDelta { d_row, d_file }) {
                    count += 1;
                }
            }
        }
        assert_eq!(count, 8);
    }

    #[test]
    fn knight_rejects_straight_and_diagonal() {
        assert!(!knight_move_is_legal(MoveDelta { d_row: 2, d_file: 0 }));
        assert!(!knight_move_is_legal(MoveDelta { d_row: 2, d_file: 2 }));
        assert!(!knight_move_is_legal(MoveDelta { d_row: 0, d_file: 0 }));
    }
}
