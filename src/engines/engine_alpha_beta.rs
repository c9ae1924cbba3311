use tracing::trace;

use crate::engines::engine_trait::{parse_depth_option, Engine, EngineOutput, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::search::alpha_beta::alpha_beta_search;
use crate::search::board_scoring::StandardScorer;
use crate::search::search_types::SearchMetrics;

/// Fixed-depth alpha-beta. Plays the same value as [`MinimaxEngine`] at equal
/// depth while visiting fewer nodes.
///
/// [`MinimaxEngine`]: crate::engines::engine_minimax::MinimaxEngine
pub struct AlphaBetaEngine {
    depth: u8,
    scorer: StandardScorer,
}

impl AlphaBetaEngine {
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

impl Engine for AlphaBetaEngine {
    fn name(&self) -> &str {
        "AlphaBeta"
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
        let result = alpha_beta_search(board, depth, &self.scorer, &mut metrics);

        let mut out = EngineOutput {
            best_move: result.best_move,
            ..EngineOutput::default()
        };
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {}",
            result.depth, result.score, result.nodes
        ));
        if params.movetime_ms.is_some() {
            out.info_lines
                .push("info string alpha_beta_engine ignoring_movetime".to_owned());
        }
        trace!(engine = self.name(), depth, nodes = result.nodes, best_move = ?result.best_move.map(|mv| mv.to_string()), "move chosen");
        Ok(out)
    }
}
