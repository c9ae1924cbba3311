//! Errors used throughout the engine core.
//!
//! `ChessError` covers recoverable input problems (bad FEN, bad coordinates,
//! unparsable move text, unknown engine options) and the one contract
//! violation the board reports explicitly: applying a move that is not legal in
//! the current position. Running out of legal moves is not an error; it is the
//! terminal-state signal surfaced through `Board::outcome`.

use thiserror::Error;

use crate::game_state::chess_types::Color;
use crate::moves::move_descriptions::Move;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    /// The move is not part of `legal_moves()` for the current position.
    #[error("illegal move {mv} for the side to move")]
    IllegalMove { mv: Move },

    #[error("position must contain exactly one {0:?} king, found {1}")]
    MissingKing(Color, usize),

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidOption { name: String, value: String },
}

pub type ChessResult<T> = Result<T, ChessError>;
