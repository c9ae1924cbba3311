//! Long algebraic move text (`e2e4`, `a7a8q`).
//!
//! Parsing resolves the text against the legal moves of a board, so the
//! result is always a move `Board::make` accepts. A pawn move onto the back
//! rank may omit the promotion letter; only `q` is accepted when present.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::PROMOTION_PIECE;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::algebraic_to_square;

pub fn move_to_long_algebraic(mv: Move) -> String {
    mv.to_string()
}

/// Parse move text into a legal move of `board`. Text that does not name a
/// legal move is an [`ChessError::IllegalMove`]; text that is not move syntax
/// is [`ChessError::InvalidMoveText`].
pub fn long_algebraic_to_move(text: &str, board: &Board) -> ChessResult<Move> {
    let mv = parse_move_text(text)?;

    let legal_moves = board.legal_moves();
    let resolved = legal_moves
        .iter()
        .copied()
        .find(|legal| legal.from == mv.from && legal.to == mv.to)
        .ok_or(ChessError::IllegalMove { mv })?;

    if mv.promotion.is_some() && !resolved.is_promotion() {
        return Err(ChessError::IllegalMove { mv });
    }
    Ok(resolved)
}

/// Syntax-only parse, no board context.
pub fn parse_move_text(text: &str) -> ChessResult<Move> {
    let invalid = || ChessError::InvalidMoveText(text.to_owned());
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| invalid())?;
    if from == to {
        return Err(invalid());
    }

    match text[4..].chars().next() {
        None => Ok(Move::new(from, to)),
        Some(letter) if PieceKind::from_letter(letter) == Some(PROMOTION_PIECE) => {
            Ok(Move::with_promotion(from, to))
        }
        Some(_) => Err(invalid()),
    }
}
