//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.
//! Scores are in centipawns from White's point of view: positive favors White.

use crate::game_state::chess_types::*;

pub trait BoardScorer: Send + Sync {
    /// Static score of `board`, White's perspective. Must not depend on
    /// anything but the position itself.
    fn score(&self, board: &Board) -> i32;
}

/// Static evaluation used by the default engines.
#[inline]
pub fn evaluate(board: &Board) -> i32 {
    StandardScorer.score(board)
}

/// Plain material count with the classical 1/3/3/5/9 piece values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }

    #[inline]
    fn material_balance_white_minus_black(board: &Board) -> i32 {
        board
            .pieces()
            .map(|(_, piece)| signed(piece.color, Self::piece_value(piece.kind)))
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        Self::material_balance_white_minus_black(board)
    }
}

/// Material plus small positional terms: piece centralisation, pawn
/// advancement and, once the heavy pieces are gone, king activity.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl BoardScorer for StandardScorer {
    fn score(&self, board: &Board) -> i32 {
        let endgame = is_endgame(board);
        let positional: i32 = board
            .pieces()
            .map(|(square, piece)| signed(piece.color, positional_bonus(square, piece, endgame)))
            .sum();

        MaterialScorer::material_balance_white_minus_black(board) + positional
    }
}

#[inline]
fn signed(color: Color, value: i32) -> i32 {
    match color {
        Color::White => value,
        Color::Black => -value,
    }
}

/// 0 on the four central squares up to 3 on the rim.
#[inline]
fn center_distance(square: Square) -> i32 {
    let axis = |v: u8| (v as i32 - 3).abs().min((v as i32 - 4).abs());
    axis(square.0).max(axis(square.1))
}

fn positional_bonus(square: Square, piece: Piece, endgame: bool) -> i32 {
    let centrality = 3 - center_distance(square);
    match piece.kind {
        PieceKind::Pawn => {
            let advanced = (piece.color.pawn_start_row() as i32 - square.0 as i32).abs();
            advanced * 8 + centrality * 4
        }
        PieceKind::Knight => centrality * 10,
        PieceKind::Bishop => centrality * 5,
        PieceKind::Rook => 0,
        PieceKind::Queen => centrality * 2,
        PieceKind::King if endgame => centrality * 10,
        PieceKind::King => 0,
    }
}

fn is_endgame(board: &Board) -> bool {
    let heavy: i32 = board
        .pieces()
        .filter(|(_, piece)| matches!(piece.kind, PieceKind::Rook | PieceKind::Queen))
        .map(|(_, piece)| MaterialScorer::piece_value(piece.kind))
        .sum();
    heavy <= 1000
}
