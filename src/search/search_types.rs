//! Types and scoring conventions shared by every search algorithm.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::BoardScorer;

/// Magnitude of a mate score at the root. A mate found `ply` plies deep scores
/// `MATE_SCORE - ply`, so shallower mates are preferred.
pub const MATE_SCORE: i32 = 1_000_000;

/// Deepest iteration the iterative driver will attempt.
pub const MAX_SEARCH_DEPTH: u8 = 64;

/// Scores at or beyond this magnitude are forced mates.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - MAX_SEARCH_DEPTH as i32 - 1;

/// Node counter shared by reference through a search invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    nodes: u64,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn visit(&mut self) {
        self.nodes += 1;
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn reset(&mut self) {
        self.nodes = 0;
    }
}

/// Outcome of a fixed-depth search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the root position has no legal move.
    pub best_move: Option<Move>,
    /// Root value, White's perspective.
    pub score: i32,
    /// Nodes visited by this call, root included.
    pub nodes: u64,
    pub depth: u8,
}

impl SearchResult {
    #[inline]
    pub fn is_mate_score(&self) -> bool {
        self.score.abs() >= MATE_THRESHOLD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    /// Wall-clock budget for the iterative driver. `None` searches until
    /// `max_depth` or until the consumer stops pulling moves.
    pub movetime_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_SEARCH_DEPTH,
            movetime_ms: None,
        }
    }
}

/// Score of a position whose side to move has no legal move.
#[inline]
pub fn terminal_score(board: &Board, ply: u8) -> i32 {
    if !board.is_check(board.turn()) {
        return 0;
    }
    let mate = MATE_SCORE - i32::from(ply);
    match board.turn() {
        Color::White => -mate,
        Color::Black => mate,
    }
}

/// Horizon score. Terminal positions still score as mate or stalemate so a
/// mating move at the last ply dominates material.
#[inline]
pub fn horizon_score<S: BoardScorer + ?Sized>(board: &Board, ply: u8, scorer: &S) -> i32 {
    if board.has_legal_move() {
        scorer.score(board)
    } else {
        terminal_score(board, ply)
    }
}
