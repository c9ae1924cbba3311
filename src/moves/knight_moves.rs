//! Knight jump geometry.

use crate::game_state::chess_types::{offset_square, Square};

/// `(row, col)` deltas of the eight knight jumps, in generation order.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board squares a knight on `square` attacks.
#[inline]
pub fn knight_attacks(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| offset_square(square, d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::knight_attacks;

    #[test]
    fn knight_attacks_from_d4_has_eight_targets() {
        let d4 = (4, 3);
        assert_eq!(knight_attacks(d4).count(), 8);
    }

    #[test]
    fn knight_attacks_from_corner_has_two_targets() {
        let a8 = (0, 0);
        let targets: Vec<_> = knight_attacks(a8).collect();
        assert_eq!(targets, vec![(1, 2), (2, 1)]);
    }
}
