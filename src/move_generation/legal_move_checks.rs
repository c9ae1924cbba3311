//! Attack and check detection.
//!
//! Attacks are detected by looking outward from the target square: leaper
//! patterns are probed directly and each sliding ray is followed to its first
//! blocker.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rays::first_piece_along;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(square, _)| square)
}

/// True when the king of `color` is attacked by any opposing piece.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        debug_assert!(false, "{color:?} king missing from board");
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let is_attacker = |sq: Square, kinds: &[PieceKind]| {
        board
            .piece_on(sq)
            .is_some_and(|p| p.color == attacker_color && kinds.contains(&p.kind))
    };

    // A pawn attacks `square` exactly when a defending pawn on `square` would
    // attack the pawn's own square.
    if pawn_attacks(attacker_color.opposite(), square).any(|sq| is_attacker(sq, &[PieceKind::Pawn])) {
        return true;
    }

    if knight_attacks(square).any(|sq| is_attacker(sq, &[PieceKind::Knight])) {
        return true;
    }

    if king_attacks(square).any(|sq| is_attacker(sq, &[PieceKind::King])) {
        return true;
    }

    let slider_hit = |directions: &[(i8, i8)], kinds: &[PieceKind]| {
        directions.iter().any(|&direction| {
            first_piece_along(board, square, direction)
                .is_some_and(|(_, p)| p.color == attacker_color && kinds.contains(&p.kind))
        })
    };

    slider_hit(&ROOK_DIRECTIONS, &[PieceKind::Rook, PieceKind::Queen])
        || slider_hit(&BISHOP_DIRECTIONS, &[PieceKind::Bishop, PieceKind::Queen])
}
