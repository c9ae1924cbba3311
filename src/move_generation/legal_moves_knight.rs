use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_unless_own_piece;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(board: &Board, from: Square, out: &mut Vec<Move>) {
    push_unless_own_piece(board, from, knight_attacks(from), out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::Board;

    #[test]
    fn start_position_knight_has_two_moves() {
        let board = Board::new_game();
        let mut out = Vec::new();
        generate_knight_moves(&board, (7, 1), &mut out);
        assert_eq!(out.len(), 2);
    }
}
