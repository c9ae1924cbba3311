//! Target filtering shared by the per-piece pseudo-legal generators.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Pushes a move to every target not occupied by a piece of the side to move.
#[inline]
pub fn push_unless_own_piece(
    board: &Board,
    from: Square,
    targets: impl IntoIterator<Item = Square>,
    out: &mut Vec<Move>,
) {
    let side = board.turn();
    for to in targets {
        match board.piece_on(to) {
            Some(piece) if piece.color == side => {}
            _ => out.push(Move::new(from, to)),
        }
    }
}

/// Piece of the opponent of the side to move standing on `square`, if any.
#[inline]
pub fn enemy_piece_on(board: &Board, square: Square) -> Option<Piece> {
    board
        .piece_on(square)
        .filter(|piece| piece.color != board.turn())
}
