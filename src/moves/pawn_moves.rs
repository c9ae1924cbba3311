//! Pawn capture geometry.
//!
//! Pushes depend on occupancy and are generated in
//! `move_generation::legal_moves_pawn`; this module only knows which squares a
//! pawn attacks.

use crate::game_state::chess_types::{offset_square, Color, Square};

/// Squares a pawn of `color` standing on `square` attacks diagonally.
#[inline]
pub fn pawn_attacks(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let d_row = color.pawn_direction();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| offset_square(square, d_row, d_col))
}
