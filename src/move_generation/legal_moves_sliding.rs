//! Bishop, rook and queen generation along unblocked rays.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_unless_own_piece;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::move_descriptions::Move;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_bishop_moves(board: &Board, from: Square, out: &mut Vec<Move>) {
    push_unless_own_piece(board, from, bishop_attacks(board, from), out);
}

pub fn generate_rook_moves(board: &Board, from: Square, out: &mut Vec<Move>) {
    push_unless_own_piece(board, from, rook_attacks(board, from), out);
}

pub fn generate_queen_moves(board: &Board, from: Square, out: &mut Vec<Move>) {
    push_unless_own_piece(board, from, queen_attacks(board, from), out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sliders_are_boxed_in_at_start() {
        let board = Board::new_game();
        let mut out = Vec::new();
        generate_bishop_moves(&board, (7, 2), &mut out);
        generate_rook_moves(&board, (7, 0), &mut out);
        generate_queen_moves(&board, (7, 3), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn rook_captures_enemy_blocker_but_not_own() {
        let board = Board::from_fen("k7/8/8/8/p7/8/P7/R6K w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_rook_moves(&board, (7, 0), &mut out);
        // Own pawn on a2 blocks the file; b1..g1 remain.
        assert_eq!(out.len(), 6);

        let board = Board::from_fen("k7/8/8/8/p7/8/8/R6K w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_rook_moves(&board, (7, 0), &mut out);
        assert!(out.contains(&Move::new((7, 0), (4, 0))));
        assert!(!out.contains(&Move::new((7, 0), (3, 0))));
    }
}
