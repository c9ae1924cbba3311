use crate::game_state::chess_types::{Board, Square};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rays::trace_ray;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Rook directions followed by bishop directions.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];

pub fn queen_attacks(board: &Board, square: Square) -> Vec<Square> {
    let mut attacks = Vec::with_capacity(27);
    for direction in QUEEN_DIRECTIONS {
        attacks.extend(trace_ray(board, square, direction));
    }
    attacks
}
