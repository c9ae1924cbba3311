//! Fixed-depth minimax with alpha-beta pruning.
//!
//! The pruned search returns the same root value as [`minimax_search`] at the
//! same depth; only the number of visited nodes shrinks. Moves are ordered
//! (preferred move, captures by MVV-LVA, promotions, then generation order)
//! with a stable sort, so results are reproducible.
//!
//! [`minimax_search`]: crate::search::minimax::minimax_search

use std::cmp::Reverse;
use std::time::Instant;

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::search_types::{horizon_score, terminal_score, SearchMetrics, SearchResult};

/// Nodes searched between deadline checks.
const DEADLINE_CHECK_INTERVAL: u64 = 1024;

/// Returned when a deadline interrupts a search; the partial result is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchAborted;

pub fn alpha_beta_search<S: BoardScorer + ?Sized>(
    board: &Board,
    depth: u8,
    scorer: &S,
    metrics: &mut SearchMetrics,
) -> SearchResult {
    let mut scratch = board.clone();
    let mut searcher = AlphaBeta::new(scorer, metrics, None);
    match searcher.search_root(&mut scratch, depth, None) {
        Ok(result) => result,
        Err(SearchAborted) => unreachable!("a search without a deadline cannot abort"),
    }
}

pub(crate) struct AlphaBeta<'a, S: ?Sized> {
    scorer: &'a S,
    metrics: &'a mut SearchMetrics,
    deadline: Option<Instant>,
}

impl<'a, S: BoardScorer + ?Sized> AlphaBeta<'a, S> {
    pub(crate) fn new(scorer: &'a S, metrics: &'a mut SearchMetrics, deadline: Option<Instant>) -> Self {
        Self {
            scorer,
            metrics,
            deadline,
        }
    }

    /// Searches `depth` plies (at least one). `preferred` is tried first at the
    /// root when it is legal.
    pub(crate) fn search_root(
        &mut self,
        board: &mut Board,
        depth: u8,
        preferred: Option<Move>,
    ) -> Result<SearchResult, SearchAborted> {
        let depth = depth.max(1);
        let start_nodes = self.metrics.nodes();
        self.visit()?;

        let mut moves = board.legal_moves();
        if moves.is_empty() {
            return Ok(SearchResult {
                best_move: None,
                score: terminal_score(board, 0),
                nodes: self.metrics.nodes() - start_nodes,
                depth,
            });
        }
        order_moves(board, &mut moves, preferred);

        let maximizing = board.turn() == Color::White;
        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;
        let mut best_move = None;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for mv in moves {
            board.make(mv);
            let outcome = self.search(board, depth - 1, 1, alpha, beta);
            board.unmake();
            let score = outcome?;

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }
        }

        Ok(SearchResult {
            best_move,
            score: best_score,
            nodes: self.metrics.nodes() - start_nodes,
            depth,
        })
    }

    fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        ply: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<i32, SearchAborted> {
        self.visit()?;

        if depth == 0 {
            return Ok(horizon_score(board, ply, self.scorer));
        }

        let mut moves = board.legal_moves();
        if moves.is_empty() {
            return Ok(terminal_score(board, ply));
        }
        order_moves(board, &mut moves, None);

        let maximizing = board.turn() == Color::White;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in moves {
            board.make(mv);
            let outcome = self.search(board, depth - 1, ply + 1, alpha, beta);
            board.unmake();
            let score = outcome?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        Ok(best)
    }

    #[inline]
    fn visit(&mut self) -> Result<(), SearchAborted> {
        self.metrics.visit();
        if let Some(deadline) = self.deadline {
            if self.metrics.nodes() % DEADLINE_CHECK_INTERVAL == 0 && Instant::now() >= deadline {
                return Err(SearchAborted);
            }
        }
        Ok(())
    }
}

/// Stable ordering: preferred move, then captures by most valuable victim and
/// least valuable attacker, then promotions, then generation order.
pub(crate) fn order_moves(board: &Board, moves: &mut [Move], preferred: Option<Move>) {
    moves.sort_by_key(|mv| Reverse(move_order_score(board, *mv, preferred)));
}

fn move_order_score(board: &Board, mv: Move, preferred: Option<Move>) -> i32 {
    if Some(mv) == preferred {
        return 1_000_000;
    }
    let mut score = 0;
    if let Some(victim) = board.piece_on(mv.to) {
        let attacker = board
            .piece_on(mv.from)
            .map(|p| MaterialScorer::piece_value(p.kind))
            .unwrap_or(0);
        score += 100_000 + 10 * MaterialScorer::piece_value(victim.kind) - attacker;
    }
    if mv.is_promotion() {
        score += 90_000;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::board_scoring::StandardScorer;
    use crate::search::minimax::minimax_search;
    use crate::search::search_types::MATE_THRESHOLD;
    use std::time::Duration;

    const POSITIONS: [&str; 5] = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w - - 2 3",
        "4k3/8/8/8/8/8/4q3/4KQ2 w - - 0 1",
        "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1",
        "r3k3/1P6/8/3p4/4P3/8/5n2/4K3 b - - 0 1",
    ];

    #[test]
    fn pruning_preserves_minimax_value() {
        for fen in POSITIONS {
            let board = Board::from_fen(fen).expect("FEN should parse");
            for depth in 1..=3 {
                let mut mm_metrics = SearchMetrics::new();
                let mut ab_metrics = SearchMetrics::new();
                let mm = minimax_search(&board, depth, &StandardScorer, &mut mm_metrics);
                let ab = alpha_beta_search(&board, depth, &StandardScorer, &mut ab_metrics);

                assert_eq!(ab.score, mm.score, "{fen} depth {depth}");
                assert!(ab.nodes <= mm.nodes, "{fen} depth {depth}");
                assert!(ab.best_move.is_some());
            }
        }
    }

    #[test]
    fn chosen_move_realizes_the_root_value() {
        let board = Board::from_fen(POSITIONS[1]).expect("FEN should parse");
        let mut metrics = SearchMetrics::new();
        let ab = alpha_beta_search(&board, 2, &StandardScorer, &mut metrics);

        let mut child = board.clone();
        child.make(ab.best_move.expect("position has moves"));
        let reply = minimax_search(&child, 1, &StandardScorer, &mut SearchMetrics::new());
        assert_eq!(reply.score, ab.score);
    }

    #[test]
    fn pruning_actually_saves_nodes_at_depth_three() {
        let board = Board::new_game();
        let mm = minimax_search(&board, 3, &StandardScorer, &mut SearchMetrics::new());
        let ab = alpha_beta_search(&board, 3, &StandardScorer, &mut SearchMetrics::new());
        assert!(ab.nodes < mm.nodes);
    }

    #[test]
    fn prefers_the_shorter_mate() {
        // Ra8 mates at once and must beat any slower line.
        let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let result = alpha_beta_search(&board, 3, &MaterialScorer, &mut SearchMetrics::new());
        assert_eq!(result.best_move, Some(Move::new((7, 0), (0, 0))));
        assert!(result.score >= MATE_THRESHOLD);
    }

    #[test]
    fn captures_are_ordered_first() {
        let board = Board::from_fen("4k3/8/8/8/8/8/4q3/4KQ2 w - - 0 1").expect("FEN should parse");
        let mut moves = board.legal_moves();
        order_moves(&board, &mut moves, None);
        // Both legal moves capture the queen; the king is the cheaper attacker.
        assert_eq!(moves[0], Move::new((7, 4), (6, 4)));
        assert_eq!(moves[1], Move::new((7, 5), (6, 4)));
    }

    #[test]
    fn preferred_move_goes_first() {
        let board = Board::new_game();
        let mut moves = board.legal_moves();
        let preferred = Move::new((7, 6), (5, 5));
        order_moves(&board, &mut moves, Some(preferred));
        assert_eq!(moves[0], preferred);
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn expired_deadline_aborts() {
        let mut board = Board::new_game();
        let mut metrics = SearchMetrics::new();
        let deadline = Instant::now() - Duration::from_millis(1);
        let mut searcher = AlphaBeta::new(&StandardScorer, &mut metrics, Some(deadline));
        let before = board.clone();

        let result = searcher.search_root(&mut board, 4, None);
        assert_eq!(result, Err(SearchAborted));
        assert_eq!(board, before);
    }
}
