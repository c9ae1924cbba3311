use crate::game_state::chess_types::*;

/// Board-to-FEN. Castling and en-passant are always `-` and the clocks read
/// `0 1` since the board does not track them.
pub fn generate_fen(board: &Board) -> String {
    let side_to_move = match board.turn() {
        Color::White => "w",
        Color::Black => "b",
    };
    format!("{} {} - - 0 1", generate_board_field(board), side_to_move)
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            if let Some(piece) = board.piece_at(row, col) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}
