//! Move-chooser selection.
//!
//! A match declares the choosers it can offer; [`Strategy::preferred`] picks
//! one by fixed preference order (lazy iterative deepening, then fixed-depth
//! alpha-beta, then fixed-depth minimax, then random) and
//! [`Strategy::build_engine`] instantiates it. The decision is made once at
//! setup, never per move.

use std::fmt;
use std::str::FromStr;

use crate::engines::engine_alpha_beta::AlphaBetaEngine;
use crate::engines::engine_iterative::IterativeEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{parse_depth_option, Engine};
use crate::errors::{ChessError, ChessResult};

/// Depth used by the fixed-depth strategies when parsed without one.
pub const DEFAULT_FIXED_DEPTH: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    IterativeDeepening,
    AlphaBeta { depth: u8 },
    Minimax { depth: u8 },
    Random,
}

impl Strategy {
    /// Lower ranks are preferred.
    pub fn preference_rank(self) -> u8 {
        match self {
            Strategy::IterativeDeepening => 0,
            Strategy::AlphaBeta { .. } => 1,
            Strategy::Minimax { .. } => 2,
            Strategy::Random => 3,
        }
    }

    /// Most preferred of the offered strategies; the first listed wins ties.
    pub fn preferred(offered: &[Strategy]) -> Option<Strategy> {
        offered.iter().copied().min_by_key(|strategy| strategy.preference_rank())
    }

    pub fn build_engine(self) -> Box<dyn Engine> {
        match self {
            Strategy::IterativeDeepening => Box::new(IterativeEngine::new()),
            Strategy::AlphaBeta { depth } => Box::new(AlphaBetaEngine::new(depth)),
            Strategy::Minimax { depth } => Box::new(MinimaxEngine::new(depth)),
            Strategy::Random => Box::new(RandomEngine::new()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::IterativeDeepening => write!(f, "iterative"),
            Strategy::AlphaBeta { depth } => write!(f, "alphabeta:{depth}"),
            Strategy::Minimax { depth } => write!(f, "minimax:{depth}"),
            Strategy::Random => write!(f, "random"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ChessError;

    fn from_str(s: &str) -> ChessResult<Self> {
        let invalid = || ChessError::InvalidOption {
            name: "Strategy".to_owned(),
            value: s.to_owned(),
        };
        let text = s.trim().to_ascii_lowercase();
        let (kind, depth) = match text.split_once(':') {
            Some((kind, depth)) => (kind, Some(parse_depth_option("Strategy", depth).map_err(|_| invalid())?)),
            None => (text.as_str(), None),
        };

        match (kind, depth) {
            ("iterative", None) => Ok(Strategy::IterativeDeepening),
            ("random", None) => Ok(Strategy::Random),
            ("alphabeta", depth) => Ok(Strategy::AlphaBeta {
                depth: depth.unwrap_or(DEFAULT_FIXED_DEPTH),
            }),
            ("minimax", depth) => Ok(Strategy::Minimax {
                depth: depth.unwrap_or(DEFAULT_FIXED_DEPTH),
            }),
            _ => Err(invalid()),
        }
    }
}
