//! In-place move application and reversal.

use crate::game_state::chess_rules::PROMOTION_PIECE;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Applies `mv` to `board`, pushing an undo record.
///
/// The move is trusted: only a debug assertion checks that the source square
/// holds a piece of the side to move.
pub fn make_move_in_place(board: &mut Board, mv: Move) {
    let mover = board.side_to_move;
    let Some(moved_piece) = board.take_piece(mv.from) else {
        debug_assert!(false, "no piece on from-square of {mv}");
        return;
    };
    debug_assert_eq!(moved_piece.color, mover, "moving an opponent piece with {mv}");

    let promoted = moved_piece.kind == PieceKind::Pawn && mv.to.0 == mover.promotion_row();
    let placed = if promoted {
        Piece::new(mover, PROMOTION_PIECE)
    } else {
        moved_piece
    };

    let captured_piece = board.take_piece(mv.to);
    debug_assert!(
        !matches!(captured_piece, Some(p) if p.kind == PieceKind::King),
        "king captured by {mv}"
    );
    board.set_piece(mv.to, Some(placed));

    board.undo_stack.push(UndoState {
        mv,
        moved_piece,
        captured_piece,
        promoted,
    });
    board.side_to_move = mover.opposite();
    board.ply = board.ply.saturating_add(1);
}

/// Reverts the most recent move; `None` when there is nothing to undo.
pub fn unmake_move_in_place(board: &mut Board) -> Option<Move> {
    let undo = board.undo_stack.pop()?;
    board.set_piece(undo.mv.from, Some(undo.moved_piece));
    board.set_piece(undo.mv.to, undo.captured_piece);
    board.side_to_move = undo.moved_piece.color;
    board.ply = board.ply.saturating_sub(1);
    Some(undo.mv)
}

/// Returns a copy of `board` with `mv` applied.
pub fn apply_move(board: &Board, mv: Move) -> Board {
    let mut next = board.clone();
    make_move_in_place(&mut next, mv);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_then_unmake_restores_position() {
        let mut board = Board::from_fen("r3k3/1P6/8/3p4/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let before = board.clone();

        for mv in board.legal_moves() {
            board.make(mv);
            assert_eq!(board.turn(), Color::Black);
            assert_eq!(board.unmake(), Some(mv));
            assert_eq!(board, before);
        }
    }

    #[test]
    fn capture_removes_target_and_records_it() {
        let board = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let next = apply_move(&board, Move::new((4, 4), (3, 3)));

        assert_eq!(next.piece_at(3, 3), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert_eq!(next.piece_at(4, 4), None);
        let undo = next.history().last().expect("undo record pushed");
        assert_eq!(undo.captured_piece, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        assert!(!undo.promoted);
    }

    #[test]
    fn pawn_reaching_last_row_becomes_queen() {
        let mut board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        board.make(Move::with_promotion((1, 0), (0, 0)));
        assert_eq!(board.piece_at(0, 0), Some(Piece::new(Color::White, PieceKind::Queen)));
        assert!(board.history()[0].promoted);

        board.unmake();
        assert_eq!(board.piece_at(1, 0), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert_eq!(board.piece_at(0, 0), None);
    }

    #[test]
    fn unmake_on_fresh_board_is_none() {
        let mut board = Board::new_game();
        assert_eq!(board.unmake(), None);
    }
}
