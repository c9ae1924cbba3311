use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Single undo record for `Board::make` / `Board::unmake`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub promoted: bool,
}
