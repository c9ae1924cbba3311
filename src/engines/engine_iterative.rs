use std::time::{Duration, Instant};

use tracing::trace;

use crate::engines::engine_trait::{parse_depth_option, Engine, EngineOutput, GoParams};
use crate::engines::time_management::{resolve_go_params, TimeManagementStrategy};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::search::board_scoring::StandardScorer;
use crate::search::iterative_deepening::IterativeDeepening;
use crate::search::search_types::{SearchConfig, MAX_SEARCH_DEPTH};

/// Movetime used when the caller gives neither a movetime, a clock nor a depth.
pub const DEFAULT_MOVETIME_MS: u64 = 1_000;

/// Time-bounded iterative deepening. Pulls improving moves from the lazy
/// sequence until the per-move budget runs out and commits to the last one.
pub struct IterativeEngine {
    max_depth: u8,
    time_strategy: TimeManagementStrategy,
}

impl IterativeEngine {
    pub fn new() -> Self {
        Self {
            max_depth: MAX_SEARCH_DEPTH,
            time_strategy: TimeManagementStrategy::default(),
        }
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn time_strategy(&self) -> TimeManagementStrategy {
        self.time_strategy
    }

    fn search_config(&self, board: &Board, params: &GoParams) -> SearchConfig {
        let resolved = resolve_go_params(board, params, self.time_strategy);
        let movetime_ms = match (resolved.movetime_ms, params.depth) {
            (Some(ms), _) => Some(ms),
            // A bare depth limit searches to that depth untimed.
            (None, Some(_)) => None,
            (None, None) => Some(DEFAULT_MOVETIME_MS),
        };
        SearchConfig {
            max_depth: params.depth.unwrap_or(self.max_depth).clamp(1, self.max_depth),
            movetime_ms,
        }
    }
}

impl Default for IterativeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for IterativeEngine {
    fn name(&self) -> &str {
        "Iterative"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        match name {
            "Depth" | "MaxDepth" => {
                self.max_depth = parse_depth_option(name, value)?;
                Ok(())
            }
            "TimeStrategy" => {
                self.time_strategy = value.parse()?;
                Ok(())
            }
            _ => Err(ChessError::InvalidOption {
                name: name.to_owned(),
                value: value.to_owned(),
            }),
        }
    }

    fn choose_move(&mut self, board: &Board, params: &GoParams) -> ChessResult<EngineOutput> {
        let config = self.search_config(board, params);
        let deadline = config
            .movetime_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));
        let mut sequence = IterativeDeepening::new(board, &StandardScorer, config);

        let mut out = EngineOutput::default();
        while let Some(mv) = sequence.next() {
            out.best_move = Some(mv);
            if let Some(result) = sequence.last_result() {
                out.info_lines.push(format!(
                    "info depth {} score cp {} nodes {} pv {}",
                    result.depth, result.score, result.nodes, mv
                ));
            }
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                break;
            }
        }

        trace!(
            engine = self.name(),
            state = ?sequence.state(),
            nodes = sequence.nodes(),
            best_move = ?out.best_move.map(|mv| mv.to_string()),
            "move chosen"
        );
        Ok(out)
    }

    fn move_sequence(&self, board: &Board) -> Option<IterativeDeepening<'static, StandardScorer>> {
        let config = SearchConfig {
            max_depth: self.max_depth,
            movetime_ms: None,
        };
        Some(IterativeDeepening::new(board, &StandardScorer, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::Move;

    #[test]
    fn finds_mate_in_one_within_budget() {
        let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let out = IterativeEngine::new()
            .choose_move(&board, &GoParams::with_movetime(500))
            .expect("search succeeds");
        assert_eq!(out.best_move, Some(Move::new((7, 0), (0, 0))));
        assert!(!out.info_lines.is_empty());
    }

    #[test]
    fn depth_limit_reports_each_iteration() {
        let board = Board::new_game();
        let out = IterativeEngine::new()
            .choose_move(&board, &GoParams::with_depth(3))
            .expect("search succeeds");
        assert_eq!(out.info_lines.len(), 3);
        assert!(out.info_lines[2].starts_with("info depth 3 "));
        assert!(board.legal_moves().contains(&out.best_move.expect("start has moves")));
    }

    #[test]
    fn stalemate_yields_no_move() {
        let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let out = IterativeEngine::new()
            .choose_move(&board, &GoParams::with_movetime(50))
            .expect("search succeeds");
        assert_eq!(out.best_move, None);
    }

    #[test]
    fn clock_time_is_turned_into_a_budget() {
        let engine = IterativeEngine::new();
        let board = Board::new_game();
        let params = GoParams {
            wtime_ms: Some(20_000),
            ..GoParams::default()
        };
        let config = engine.search_config(&board, &params);
        assert!(config.movetime_ms.is_some_and(|ms| ms > 0 && ms <= 5_000));
        assert_eq!(config.max_depth, MAX_SEARCH_DEPTH);
    }

    #[test]
    fn time_strategy_option_changes_the_budget() {
        let mut engine = IterativeEngine::new();
        assert_eq!(engine.time_strategy(), TimeManagementStrategy::Adaptive);
        engine
            .set_option("TimeStrategy", "fraction20")
            .expect("known strategy");
        assert_eq!(engine.time_strategy(), TimeManagementStrategy::Fraction20);

        let params = GoParams {
            wtime_ms: Some(20_000),
            ..GoParams::default()
        };
        let config = engine.search_config(&Board::new_game(), &params);
        assert_eq!(config.movetime_ms, Some(1_000));

        assert!(engine.set_option("TimeStrategy", "sudden").is_err());
        assert_eq!(engine.time_strategy(), TimeManagementStrategy::Fraction20);
    }

    #[test]
    fn no_limits_falls_back_to_default_movetime() {
        let engine = IterativeEngine::new();
        let config = engine.search_config(&Board::new_game(), &GoParams::default());
        assert_eq!(config.movetime_ms, Some(DEFAULT_MOVETIME_MS));
    }

    #[test]
    fn exposes_its_move_sequence() {
        let mut engine = IterativeEngine::new();
        engine.set_option("MaxDepth", "2").expect("valid depth");
        let board = Board::new_game();
        let moves: Vec<Move> = engine
            .move_sequence(&board)
            .expect("iterative engine is lazy")
            .collect();
        assert_eq!(moves.len(), 3);
    }
}
