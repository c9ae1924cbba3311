//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different move
//! choosers can be selected at match setup behind a single trait interface.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::StandardScorer;
use crate::search::iterative_deepening::IterativeDeepening;
use crate::search::search_types::MAX_SEARCH_DEPTH;

/// Per-move limits. Clock fields are raw remaining time and increments; see
/// [`resolve_go_params`](crate::engines::time_management::resolve_go_params).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
    pub wtime_ms: Option<u64>,
    pub btime_ms: Option<u64>,
    pub winc_ms: Option<u64>,
    pub binc_ms: Option<u64>,
    pub movestogo: Option<u16>,
}

impl GoParams {
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth: Some(depth),
            ..Self::default()
        }
    }

    pub fn with_movetime(movetime_ms: u64) -> Self {
        Self {
            movetime_ms: Some(movetime_ms),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` when the position has no legal move.
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        Err(ChessError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        })
    }

    fn choose_move(&mut self, board: &Board, params: &GoParams) -> ChessResult<EngineOutput>;

    /// Lazy sequence of improving moves, for engines that can produce one.
    fn move_sequence(&self, _board: &Board) -> Option<IterativeDeepening<'static, StandardScorer>> {
        None
    }
}

/// Parses a search depth option value (1 to 64).
pub(crate) fn parse_depth_option(name: &str, value: &str) -> ChessResult<u8> {
    let invalid = || ChessError::InvalidOption {
        name: name.to_owned(),
        value: value.to_owned(),
    };
    let depth: u8 = value.trim().parse().map_err(|_| invalid())?;
    if depth == 0 || depth > MAX_SEARCH_DEPTH {
        return Err(invalid());
    }
    Ok(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_option_accepts_range() {
        assert_eq!(parse_depth_option("Depth", "3"), Ok(3));
        assert_eq!(parse_depth_option("Depth", " 64 "), Ok(64));
    }

    #[test]
    fn depth_option_rejects_bad_values() {
        for value in ["0", "65", "-1", "deep", ""] {
            assert_eq!(
                parse_depth_option("Depth", value),
                Err(ChessError::InvalidOption {
                    name: "Depth".to_owned(),
                    value: value.to_owned(),
                })
            );
        }
    }

    #[test]
    fn go_params_builders() {
        assert_eq!(GoParams::with_depth(4).depth, Some(4));
        assert_eq!(GoParams::with_movetime(250).movetime_ms, Some(250));
        assert_eq!(GoParams::with_movetime(250).depth, None);
    }
}
