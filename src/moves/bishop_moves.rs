use crate::game_state::chess_types::{Board, Square};
use crate::moves::rays::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Squares a bishop on `square` attacks, including the first blocker on each ray.
pub fn bishop_attacks(board: &Board, square: Square) -> Vec<Square> {
    let mut attacks = Vec::with_capacity(13);
    for direction in BISHOP_DIRECTIONS {
        attacks.extend(trace_ray(board, square, direction));
    }
    attacks
}
