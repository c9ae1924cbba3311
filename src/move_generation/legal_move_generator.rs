//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal moves piece by piece, then applies each candidate on
//! a scratch copy and discards those that leave the mover's king in check.
//! Pieces are visited in row-major order and each generator emits targets in a
//! fixed direction order, so the result is deterministic for a given board.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move_in_place, unmake_move_in_place};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliding::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::moves::move_descriptions::Move;

pub fn generate_pseudo_legal_moves(board: &Board, out: &mut Vec<Move>) {
    for (from, piece) in board.pieces_of(board.turn()) {
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(board, from, out),
            PieceKind::Knight => generate_knight_moves(board, from, out),
            PieceKind::Bishop => generate_bishop_moves(board, from, out),
            PieceKind::Rook => generate_rook_moves(board, from, out),
            PieceKind::Queen => generate_queen_moves(board, from, out),
            PieceKind::King => generate_king_moves(board, from, out),
        }
    }
}

pub fn generate_legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    generate_pseudo_legal_moves(board, &mut moves);

    let mover = board.turn();
    let mut scratch = board.clone();
    moves.retain(|&mv| leaves_king_safe(&mut scratch, mover, mv));
    moves
}

/// Stops at the first legal move instead of enumerating all of them.
pub fn has_legal_move(board: &Board) -> bool {
    let mut pseudo = Vec::with_capacity(64);
    generate_pseudo_legal_moves(board, &mut pseudo);

    let mover = board.turn();
    let mut scratch = board.clone();
    pseudo
        .into_iter()
        .any(|mv| leaves_king_safe(&mut scratch, mover, mv))
}

#[inline]
fn leaves_king_safe(scratch: &mut Board, mover: Color, mv: Move) -> bool {
    make_move_in_place(scratch, mv);
    let safe = !is_king_in_check(scratch, mover);
    unmake_move_in_place(scratch);
    safe
}
