use crate::game_state::chess_types::{Board, Square};
use crate::moves::rays::trace_ray;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Squares a rook on `square` attacks, including the first blocker on each ray.
pub fn rook_attacks(board: &Board, square: Square) -> Vec<Square> {
    let mut attacks = Vec::with_capacity(14);
    for direction in ROOK_DIRECTIONS {
        attacks.extend(trace_ray(board, square, direction));
    }
    attacks
}
