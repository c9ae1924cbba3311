//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and
//! diagnostics. Pieces use their FEN letters; empty squares are dots.

use crate::game_state::chess_types::*;

/// Render the board with rank and file labels, rank 8 at the top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank_label = char::from(b'8' - row);
        out.push(rank_label);
        out.push(' ');

        for col in 0..8u8 {
            match board.piece_at(row, col) {
                Some(piece) => out.push(piece.fen_char()),
                None => out.push('.'),
            }
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
