//! Exhaustive fixed-depth minimax.
//!
//! White maximizes and Black minimizes the White-perspective score. No node is
//! ever skipped, which makes this the reference the pruned search is checked
//! against.

use crate::game_state::chess_types::*;
use crate::search::board_scoring::BoardScorer;
use crate::search::search_types::{horizon_score, terminal_score, SearchMetrics, SearchResult};

/// Searches `depth` plies below the root (at least one) and returns the best
/// move with its value. Every visited node, root included, bumps `metrics` once.
pub fn minimax_search<S: BoardScorer + ?Sized>(
    board: &Board,
    depth: u8,
    scorer: &S,
    metrics: &mut SearchMetrics,
) -> SearchResult {
    let depth = depth.max(1);
    let start_nodes = metrics.nodes();
    let mut scratch = board.clone();
    metrics.visit();

    let moves = scratch.legal_moves();
    if moves.is_empty() {
        return SearchResult {
            best_move: None,
            score: terminal_score(&scratch, 0),
            nodes: metrics.nodes() - start_nodes,
            depth,
        };
    }

    let maximizing = scratch.turn() == Color::White;
    let mut best_move = None;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        scratch.make(mv);
        let score = minimax(&mut scratch, depth - 1, 1, scorer, metrics);
        scratch.unmake();

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(mv);
        }
    }

    SearchResult {
        best_move,
        score: best_score,
        nodes: metrics.nodes() - start_nodes,
        depth,
    }
}

fn minimax<S: BoardScorer + ?Sized>(
    board: &mut Board,
    depth: u8,
    ply: u8,
    scorer: &S,
    metrics: &mut SearchMetrics,
) -> i32 {
    metrics.visit();

    if depth == 0 {
        return horizon_score(board, ply, scorer);
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        return terminal_score(board, ply);
    }

    let maximizing = board.turn() == Color::White;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        board.make(mv);
        let score = minimax(board, depth - 1, ply + 1, scorer, metrics);
        board.unmake();

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}
