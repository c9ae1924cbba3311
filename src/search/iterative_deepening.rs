//! Lazy iterative deepening.
//!
//! [`IterativeDeepening`] is an iterator of progressively better moves. The
//! first element is produced without searching (the first legal move) so a
//! consumer that stops immediately still holds a legal move. Every following
//! element is the alpha-beta best move of one completed depth, starting at 1.
//!
//! The consumer owns the time budget and may stop pulling at any point; the
//! last element received is the committed move. An optional deadline makes the
//! driver abandon a depth that runs past it instead of finishing it late.

use std::iter::FusedIterator;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::search::alpha_beta::{AlphaBeta, SearchAborted};
use crate::search::board_scoring::{BoardScorer, StandardScorer};
use crate::search::search_types::{SearchConfig, SearchMetrics, SearchResult, MAX_SEARCH_DEPTH};

/// Progress of one root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeepeningState {
    NotStarted,
    Searching(u8),
    /// Depth `d` finished; `Completed(0)` follows the immediate fallback move.
    Completed(u8),
    /// The deadline interrupted a depth.
    Cancelled,
    /// Depth cap reached, mate proven, or nothing left to choose between.
    Exhausted,
}

pub struct IterativeDeepening<'a, S: ?Sized> {
    board: Board,
    scorer: &'a S,
    max_depth: u8,
    deadline: Option<Instant>,
    state: DeepeningState,
    finished: bool,
    last_result: Option<SearchResult>,
    metrics: SearchMetrics,
    started_at: Instant,
}

impl<'a, S: BoardScorer + ?Sized> IterativeDeepening<'a, S> {
    /// Starts a fresh search of a private copy of `board`. The movetime in
    /// `config`, if any, is measured from this call.
    pub fn new(board: &Board, scorer: &'a S, config: SearchConfig) -> Self {
        let started_at = Instant::now();
        Self {
            board: board.clone(),
            scorer,
            max_depth: config.max_depth.clamp(1, MAX_SEARCH_DEPTH),
            deadline: config
                .movetime_ms
                .map(|ms| started_at + Duration::from_millis(ms)),
            state: DeepeningState::NotStarted,
            finished: false,
            last_result: None,
            metrics: SearchMetrics::new(),
            started_at,
        }
    }

    pub fn state(&self) -> DeepeningState {
        self.state
    }

    /// Result of the deepest completed iteration.
    pub fn last_result(&self) -> Option<SearchResult> {
        self.last_result
    }

    /// Nodes visited across all iterations so far.
    pub fn nodes(&self) -> u64 {
        self.metrics.nodes()
    }

    fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    fn fallback_move(&mut self) -> Option<Move> {
        let moves = self.board.legal_moves();
        let first = moves.first().copied();
        self.state = if first.is_some() {
            DeepeningState::Completed(0)
        } else {
            DeepeningState::Exhausted
        };
        // Nothing to refine with a single legal move.
        self.finished = moves.len() <= 1;
        first
    }

    fn deepen(&mut self, depth: u8) -> Option<Move> {
        self.state = DeepeningState::Searching(depth);
        let preferred = self.last_result.and_then(|r| r.best_move);

        let outcome = AlphaBeta::new(self.scorer, &mut self.metrics, self.deadline).search_root(
            &mut self.board,
            depth,
            preferred,
        );

        match outcome {
            Ok(result) => {
                let elapsed_ms = self.started_at.elapsed().as_millis() as u64;
                debug!(
                    depth,
                    score = result.score,
                    nodes = result.nodes,
                    elapsed_ms,
                    best_move = ?result.best_move.map(|mv| mv.to_string()),
                    "iteration complete"
                );
                self.state = DeepeningState::Completed(depth);
                self.last_result = Some(result);
                if result.is_mate_score() {
                    self.finished = true;
                }
                result.best_move
            }
            Err(SearchAborted) => {
                warn!(depth, nodes = self.metrics.nodes(), "deadline reached mid-iteration");
                self.state = DeepeningState::Cancelled;
                self.finished = true;
                None
            }
        }
    }
}

impl<S: BoardScorer + ?Sized> Iterator for IterativeDeepening<'_, S> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        match self.state {
            DeepeningState::NotStarted => self.fallback_move(),
            DeepeningState::Completed(depth) => {
                if self.finished || depth >= self.max_depth {
                    self.finished = true;
                    self.state = DeepeningState::Exhausted;
                    return None;
                }
                if self.deadline_passed() {
                    self.state = DeepeningState::Cancelled;
                    self.finished = true;
                    return None;
                }
                self.deepen(depth + 1)
            }
            DeepeningState::Searching(_) | DeepeningState::Cancelled | DeepeningState::Exhausted => None,
        }
    }
}

impl<S: BoardScorer + ?Sized> FusedIterator for IterativeDeepening<'_, S> {}

/// Iterative deepening with the standard evaluation and default limits.
pub fn choose_moves(board: &Board) -> IterativeDeepening<'static, StandardScorer> {
    IterativeDeepening::new(board, &StandardScorer, SearchConfig::default())
}

/// Drives the sequence until it ends (depth cap, proven mate, or the
/// configured movetime) and returns the last move it produced.
pub fn search_until<S: BoardScorer + ?Sized>(
    board: &Board,
    scorer: &S,
    config: SearchConfig,
) -> Option<Move> {
    IterativeDeepening::new(board, scorer, config).last()
}
