//! Per-move time budgeting.
//!
//! Callers pass raw clock data (`wtime/btime/winc/binc/movetime`) and the
//! engine decides the final per-move allocation based on strategy.

use crate::engines::engine_trait::GoParams;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeManagementStrategy {
    /// Spend 1/20th of the remaining clock.
    Fraction20,
    /// Clock, increment and game phase aware budget.
    #[default]
    Adaptive,
}

impl std::str::FromStr for TimeManagementStrategy {
    type Err = ChessError;

    fn from_str(s: &str) -> ChessResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fraction20" => Ok(Self::Fraction20),
            "adaptive" => Ok(Self::Adaptive),
            _ => Err(ChessError::InvalidOption {
                name: "TimeStrategy".to_owned(),
                value: s.to_owned(),
            }),
        }
    }
}

/// Fills in `movetime_ms` from the mover's clock. An explicit movetime always
/// wins; without clock data the params are returned unchanged.
pub fn resolve_go_params(board: &Board, params: &GoParams, strategy: TimeManagementStrategy) -> GoParams {
    if params.movetime_ms.is_some() {
        return params.clone();
    }

    let mut resolved = params.clone();
    let (remaining_opt, inc_opt) = match board.turn() {
        Color::White => (params.wtime_ms, params.winc_ms),
        Color::Black => (params.btime_ms, params.binc_ms),
    };

    if let Some(remaining) = remaining_opt {
        resolved.movetime_ms = Some(match strategy {
            TimeManagementStrategy::Fraction20 => (remaining / 20).max(1),
            TimeManagementStrategy::Adaptive => {
                adaptive_budget_ms(board.ply(), remaining, inc_opt, params.movestogo)
            }
        });
    }

    resolved
}

fn adaptive_budget_ms(ply: u16, remaining_ms: u64, inc_ms: Option<u64>, movestogo: Option<u16>) -> u64 {
    let ply = u64::from(ply);
    let expected_moves_left = if let Some(mtg) = movestogo {
        u64::from(mtg.max(1))
    } else if ply < 20 {
        40
    } else if ply < 60 {
        28
    } else {
        18
    };

    let reserve = (remaining_ms / 25).max(100).min(remaining_ms.saturating_sub(1));
    let usable = remaining_ms.saturating_sub(reserve);
    let base = usable / expected_moves_left;
    let inc_bonus = inc_ms.unwrap_or(0).saturating_mul(3) / 4;
    let panic = if remaining_ms < 2_000 { remaining_ms / 12 } else { 0 };
    let target = base.saturating_add(inc_bonus).saturating_add(panic);

    let max_budget = (remaining_ms / 4).max(1);
    let min_budget = (if remaining_ms < 1_000 { 5 } else { 15 }).min(max_budget);
    target.clamp(min_budget, max_budget)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_names_parse() {
        assert_eq!("fraction20".parse(), Ok(TimeManagementStrategy::Fraction20));
        assert_eq!(" Adaptive ".parse(), Ok(TimeManagementStrategy::Adaptive));
        assert!("sudden".parse::<TimeManagementStrategy>().is_err());
    }

    #[test]
    fn explicit_movetime_wins() {
        let board = Board::new_game();
        let params = GoParams {
            movetime_ms: Some(123),
            wtime_ms: Some(60_000),
            ..GoParams::default()
        };
        let resolved = resolve_go_params(&board, &params, TimeManagementStrategy::Adaptive);
        assert_eq!(resolved.movetime_ms, Some(123));
    }

    #[test]
    fn fraction_uses_the_movers_clock() {
        let params = GoParams {
            wtime_ms: Some(60_000),
            btime_ms: Some(20_000),
            ..GoParams::default()
        };
        let white = Board::new_game();
        let black = Board::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1")
            .expect("FEN should parse");

        let w = resolve_go_params(&white, &params, TimeManagementStrategy::Fraction20);
        let b = resolve_go_params(&black, &params, TimeManagementStrategy::Fraction20);
        assert_eq!(w.movetime_ms, Some(3_000));
        assert_eq!(b.movetime_ms, Some(1_000));
    }

    #[test]
    fn no_clock_leaves_movetime_unset() {
        let board = Board::new_game();
        let params = GoParams::with_depth(3);
        let resolved = resolve_go_params(&board, &params, TimeManagementStrategy::Adaptive);
        assert_eq!(resolved, params);
    }

    #[test]
    fn adaptive_budget_stays_within_a_quarter_of_the_clock() {
        for remaining in [1, 50, 500, 1_500, 10_000, 300_000] {
            for inc in [None, Some(0), Some(2_000)] {
                let budget = adaptive_budget_ms(10, remaining, inc, None);
                assert!(budget >= 1);
                assert!(budget <= (remaining / 4).max(1), "{remaining} {inc:?} -> {budget}");
            }
        }
    }

    #[test]
    fn adaptive_spends_more_with_fewer_moves_to_go() {
        let relaxed = adaptive_budget_ms(10, 60_000, None, Some(40));
        let urgent = adaptive_budget_ms(10, 60_000, None, Some(5));
        assert!(urgent > relaxed);
    }
}
