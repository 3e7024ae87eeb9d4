use super::*;
use crate::error::{FenError, MoveParseError};

// ==================== HELPER FUNCTIONS ====================

/// Load a FEN that is known to be valid
pub fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap_or_else(|e| panic!("bad test FEN '{fen}': {e}"))
}

/// Legal moves starting on `square`
pub fn moves_from(pos: &mut Position, square: usize) -> Vec<Move> {
    pos.legal_moves().into_iter().filter(|m| m.from() == square).collect()
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: usize, to: usize) -> bool {
    moves.iter().any(|m| m.from() == from && m.to() == to)
}

/// Helper function to count moves of a specific type (any promotion matches any promotion)
pub fn count_move_type(moves: &[Move], move_type: MoveType) -> usize {
    moves
        .iter()
        .filter(|m| {
            let mt = m.move_type();
            mt == move_type || (mt.is_promotion() && move_type.is_promotion())
        })
        .count()
}

/// Play a sequence of coordinate moves as game moves
pub fn play(pos: &mut Position, moves: &[&str]) {
    for name in moves {
        let mv = pos
            .move_from_name(name)
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        pos.make_move(mv, false);
    }
}

// ==================== TEST MODULES ====================

mod make_unmake;
mod perft;
