use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_unless_own_piece;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::Move;

/// Single king steps. Castling is not part of the variant.
pub fn generate_king_moves(board: &Board, from: Square, out: &mut Vec<Move>) {
    push_unless_own_piece(board, from, king_attacks(from), out);
}
