//! Crate root module declarations for the chesslab engine core.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines, and utility helpers) so tests, benches, and an external
//! match orchestrator can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rays;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliding;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod iterative_deepening;
    pub mod minimax;
    pub mod search_types;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_iterative;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
    pub mod strategy;
    pub mod time_management;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

pub use errors::{ChessError, ChessResult};
pub use game_state::chess_types::{Board, Color, Outcome, Piece, PieceKind, Square};
pub use moves::move_descriptions::Move;
