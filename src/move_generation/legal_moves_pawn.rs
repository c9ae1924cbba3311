//! Pawn pushes, double steps, diagonal captures and queen promotion.
//!
//! En passant and underpromotion are not part of the variant: a pawn reaching
//! its promotion row always produces a single queen-promotion move.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(board: &Board, from: Square, out: &mut Vec<Move>) {
    let side = board.turn();
    let direction = side.pawn_direction();

    if let Some(one_step) = offset_square(from, direction, 0) {
        if board.piece_on(one_step).is_none() {
            out.push(pawn_move(side, from, one_step));

            if from.0 == side.pawn_start_row() {
                if let Some(two_step) = offset_square(from, 2 * direction, 0) {
                    if board.piece_on(two_step).is_none() {
                        out.push(Move::new(from, two_step));
                    }
                }
            }
        }
    }

    for to in pawn_attacks(side, from) {
        if enemy_piece_on(board, to).is_some() {
            out.push(pawn_move(side, from, to));
        }
    }
}

#[inline]
fn pawn_move(side: Color, from: Square, to: Square) -> Move {
    if to.0 == side.promotion_row() {
        Move::with_promotion(from, to)
    } else {
        Move::new(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::Board;
    use crate::moves::move_descriptions::Move;

    #[test]
    fn start_row_pawn_has_single_and_double_push() {
        let board = Board::new_game();
        let mut out = Vec::new();
        generate_pawn_moves(&board, (6, 4), &mut out);
        assert_eq!(out, vec![Move::new((6, 4), (5, 4)), Move::new((6, 4), (4, 4))]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let board = Board::from_fen("k7/8/8/8/8/4n3/4P3/K7 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&board, (6, 4), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn pawn_captures_diagonally_and_promotes() {
        let board = Board::from_fen("1r5k/P7/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&board, (1, 0), &mut out);
        assert_eq!(
            out,
            vec![
                Move::with_promotion((1, 0), (0, 0)),
                Move::with_promotion((1, 0), (0, 1)),
            ]
        );
    }

    #[test]
    fn black_pawn_moves_toward_row_seven() {
        let board = Board::from_fen("k7/8/8/8/8/8/6p1/K7 b - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&board, (6, 6), &mut out);
        assert_eq!(out, vec![Move::with_promotion((6, 6), (7, 6))]);
    }
}
