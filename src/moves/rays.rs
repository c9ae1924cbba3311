//! Sliding-piece ray tracing over the square grid.

use crate::game_state::chess_types::{offset_square, Board, Piece, Square};

/// Iterator over the squares along one ray, ending with the first occupied
/// square (inclusive) or the board edge.
pub struct Ray<'a> {
    board: &'a Board,
    current: Square,
    direction: (i8, i8),
    blocked: bool,
}

impl Iterator for Ray<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.blocked {
            return None;
        }
        let next = offset_square(self.current, self.direction.0, self.direction.1)?;
        self.current = next;
        if self.board.piece_on(next).is_some() {
            self.blocked = true;
        }
        Some(next)
    }
}

#[inline]
pub fn trace_ray(board: &Board, from: Square, direction: (i8, i8)) -> Ray<'_> {
    Ray {
        board,
        current: from,
        direction,
        blocked: false,
    }
}

/// First piece met when sliding from `from` in `direction`.
#[inline]
pub fn first_piece_along(board: &Board, from: Square, direction: (i8, i8)) -> Option<(Square, Piece)> {
    trace_ray(board, from, direction)
        .last()
        .and_then(|sq| board.piece_on(sq).map(|piece| (sq, piece)))
}
