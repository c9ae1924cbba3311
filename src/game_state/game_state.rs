//! Mailbox board representation.
//!
//! `Board` is the central model for the engine. It stores an 8×8 grid of
//! optional pieces, the side to move, a ply counter and the undo stack used by
//! make/unmake style workflows. Rule logic (move generation, check detection,
//! terminal states) lives in `move_generation`; the methods here delegate to it
//! so callers only need the board type.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move_in_place, unmake_move_in_place};
use crate::move_generation::legal_move_checks::{is_king_in_check, king_square};
use crate::move_generation::legal_move_generator::{generate_legal_moves, has_legal_move};
use crate::moves::move_descriptions::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_board;

/// Mutable chess position. `Clone` produces a fully independent copy.
///
/// Equality compares piece placement and side to move only; the ply counter
/// and undo history do not take part.
#[derive(Debug, Clone, Eq)]
pub struct Board {
    // [row][col], row 0 = rank 8.
    pub(crate) squares: [[Option<Piece>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) ply: u16,
    pub(crate) undo_stack: Vec<UndoState>,
}

impl Board {
    /// Board with no pieces. Only valid as a starting point for setup code.
    pub(crate) fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            ply: 0,
            undo_stack: Vec::new(),
        }
    }

    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.side_to_move
    }

    /// Plies applied since this board was constructed.
    #[inline]
    pub fn ply(&self) -> u16 {
        self.ply
    }

    /// O(1) lookup; `row` and `col` outside `0..8` read as empty.
    #[inline]
    pub fn piece_at(&self, row: u8, col: u8) -> Option<Piece> {
        self.squares
            .get(row as usize)
            .and_then(|rank| rank.get(col as usize))
            .copied()
            .flatten()
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.piece_at(square.0, square.1)
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.0 as usize][square.1 as usize] = piece;
    }

    #[inline]
    pub(crate) fn take_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.0 as usize][square.1 as usize].take()
    }

    /// All occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8u8).flat_map(move |row| {
            (0..8u8).filter_map(move |col| self.piece_at(row, col).map(|piece| ((row, col), piece)))
        })
    }

    /// Pieces of one color in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        king_square(self, color)
    }

    /// Undo records of the moves applied so far, oldest first.
    pub fn history(&self) -> &[UndoState] {
        &self.undo_stack
    }

    pub fn last_move(&self) -> Option<Move> {
        self.undo_stack.last().map(|undo| undo.mv)
    }

    /// Every move for the side to move that does not leave its own king in check.
    pub fn legal_moves(&self) -> Vec<Move> {
        generate_legal_moves(self)
    }

    pub fn has_legal_move(&self) -> bool {
        has_legal_move(self)
    }

    /// Applies `mv` in place without re-validating it.
    ///
    /// `mv` must come from `legal_moves()` of the current position; anything
    /// else leaves the board in an unspecified state. Use [`Board::try_make`]
    /// for untrusted input.
    #[inline]
    pub fn make(&mut self, mv: Move) {
        make_move_in_place(self, mv);
    }

    pub fn try_make(&mut self, mv: Move) -> ChessResult<()> {
        if !self.legal_moves().contains(&mv) {
            return Err(ChessError::IllegalMove { mv });
        }
        self.make(mv);
        Ok(())
    }

    /// Reverts the most recent `make`, returning the move that was undone.
    #[inline]
    pub fn unmake(&mut self) -> Option<Move> {
        unmake_move_in_place(self)
    }

    #[inline]
    pub fn is_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    /// Terminal-state check, computed fresh on every call.
    pub fn outcome(&self) -> Outcome {
        if self.has_legal_move() {
            return Outcome::Ongoing;
        }
        if self.is_check(self.side_to_move) {
            Outcome::Checkmate(self.side_to_move.opposite())
        } else {
            Outcome::Stalemate
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares && self.side_to_move == other.side_to_move
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
