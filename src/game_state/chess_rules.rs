//! Rule constants for the reduced variant played by this engine.
//!
//! Castling and en passant are not part of the variant; the castling and
//! en-passant FEN fields are accepted for compatibility but carry no meaning.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// The only piece a pawn may promote to.
pub const PROMOTION_PIECE: crate::game_state::chess_types::PieceKind =
    crate::game_state::chess_types::PieceKind::Queen;
