//! Move-path enumeration for validating the move generator.
//!
//! Counts leaf nodes at a fixed depth together with a breakdown of the last
//! ply (captures, promotions, checks, mates). The reduced variant has no
//! castling or en passant, so its counts only match standard perft tables up
//! to the depth where those rules first appear.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut scratch = board.clone();
    let mut total = PerftCounts::default();
    perft_recurse(&mut scratch, depth, &mut total);
    total
}

/// Leaf counts below each root move, in generation order.
pub fn perft_divide(board: &Board, depth: u8) -> Vec<(Move, PerftCounts)> {
    let mut scratch = board.clone();
    let mut out = Vec::new();
    for mv in scratch.legal_moves() {
        scratch.make(mv);
        out.push((mv, perft(&scratch, depth.saturating_sub(1))));
        scratch.unmake();
    }
    out
}

fn perft_recurse(board: &mut Board, depth: u8, counts: &mut PerftCounts) {
    for mv in board.legal_moves() {
        let is_capture = board.piece_on(mv.to).is_some();
        board.make(mv);

        if depth == 1 {
            counts.nodes += 1;
            if is_capture {
                counts.captures += 1;
            }
            if mv.is_promotion() {
                counts.promotions += 1;
            }
            if board.is_check(board.turn()) {
                counts.checks += 1;
                if !board.has_legal_move() {
                    counts.checkmates += 1;
                }
            }
        } else {
            let mut child = PerftCounts::default();
            perft_recurse(board, depth - 1, &mut child);
            counts.merge(child);
        }

        board.unmake();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&Board::new_game(), 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_matches_reference_counts() {
        let board = Board::new_game();
        assert_eq!(perft(&board, 1).nodes, 20);
        assert_eq!(perft(&board, 2).nodes, 400);

        let depth_three = perft(&board, 3);
        assert_eq!(
            depth_three,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn divide_sums_to_total() {
        let board = Board::new_game();
        let divided = perft_divide(&board, 2);
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, c)| c.nodes).sum::<u64>(), 400);
    }

    #[test]
    fn promotions_are_counted_once_per_pawn_move() {
        // Only queen promotions exist, so a7-a8 and a7xb8 count one each.
        let board = Board::from_fen("1n5k/P7/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");
        let counts = perft(&board, 1);
        assert_eq!(counts.promotions, 2);
        assert_eq!(counts.captures, 1);
    }
}
