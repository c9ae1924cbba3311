use tracing::trace;

use crate::engines::engine_trait::{parse_depth_option, Engine, EngineOutput, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::search::board_scoring::StandardScorer;
use crate::search::minimax::minimax_search;
use crate::search::search_types::SearchMetrics;

/// Exhaustive fixed-depth minimax. A `depth` in [`GoParams`] overrides the
/// configured default for one call.
pub struct MinimaxEngine {
    depth: u8,
    scorer: StandardScorer,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
            scorer: StandardScorer,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        match name {
            "Depth" | "MaxDepth" => {
                self.depth = parse_depth_option(name, value)?;
                Ok(())
            }
            _ => Err(ChessError::InvalidOption {
                name: name.to_owned(),
                value: value.to_owned(),
            }),
        }
    }

    fn choose_move(&mut self, board: &Board, params: &GoParams) -> ChessResult<EngineOutput> {
        let depth = params.depth.unwrap_or(self.depth).max(1);
        let mut metrics = SearchMetrics::new();
        let result = minimax_search(board, depth, &self.scorer, &mut metrics);

        let mut out = EngineOutput {
            best_move: result.best_move,
            ..EngineOutput::default()
        };
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {}",
            result.depth, result.score, result.nodes
        ));
        trace!(engine = self.name(), depth, nodes = result.nodes, best_move = ?result.best_move.map(|mv| mv.to_string()), "move chosen");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::Move;

    #[test]
    fn finds_mate_in_one() {
        let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let out = MinimaxEngine::new(2)
            .choose_move(&board, &GoParams::default())
            .expect("search succeeds");
        assert_eq!(out.best_move, Some(Move::new((7, 0), (0, 0))));
        assert!(out.info_lines[0].starts_with("info depth 2"));
    }

    #[test]
    fn go_depth_overrides_default() {
        let board = Board::new_game();
        let out = MinimaxEngine::new(3)
            .choose_move(&board, &GoParams::with_depth(1))
            .expect("search succeeds");
        let expected = minimax_search(&board, 1, &StandardScorer, &mut SearchMetrics::new());
        assert_eq!(out.best_move, expected.best_move);
        assert!(out.info_lines[0].starts_with("info depth 1 "));
        assert!(out.info_lines[0].ends_with(" nodes 21"));
    }

    #[test]
    fn depth_option() {
        let mut engine = MinimaxEngine::new(2);
        engine.set_option("Depth", "4").expect("valid depth");
        assert_eq!(engine.depth(), 4);
        assert!(engine.set_option("Depth", "zero").is_err());
        assert!(engine.set_option("Hash", "16").is_err());
        assert_eq!(engine.depth(), 4);
    }
}
