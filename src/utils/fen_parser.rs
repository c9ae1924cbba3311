//! FEN-to-Board parser.
//!
//! Reads the piece placement and side-to-move fields. Castling, en-passant and
//! clock fields are accepted for compatibility and ignored since those rules
//! are not modeled. Positions must hold exactly one king per side.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

pub fn parse_fen(fen: &str) -> ChessResult<Board> {
    let invalid = |reason: &str| ChessError::InvalidFen(format!("{reason}: '{fen}'"));
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().unwrap_or("w");
    if parts.count() > 4 {
        return Err(invalid("too many fields"));
    }

    let mut board = Board::empty();
    parse_board(board_part, &mut board).map_err(|reason| invalid(&reason))?;
    board.side_to_move = match side_part {
        "w" => Color::White,
        "b" => Color::Black,
        _ => return Err(invalid("side to move must be 'w' or 'b'")),
    };

    for color in [Color::White, Color::Black] {
        let kings = board
            .pieces_of(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(ChessError::MissingKing(color, kings));
        }
    }

    Ok(board)
}

fn parse_board(board_part: &str, board: &mut Board) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("board layout must contain 8 ranks".to_owned());
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("invalid empty-square count '{ch}'"));
                }
                col += empty_count as u8;
                if col > 8 {
                    return Err(format!("rank {} has too many files", 8 - row));
                }
                continue;
            }

            let piece =
                Piece::from_fen_char(ch).ok_or_else(|| format!("invalid piece character '{ch}'"))?;
            if col >= 8 {
                return Err(format!("rank {} has too many files", 8 - row));
            }
            board.set_piece((row as u8, col), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(format!("rank {} does not sum to 8 files", 8 - row));
        }
    }

    Ok(())
}
