// Move ordering for alpha-beta search
//
// Good ordering lets alpha-beta cut off most of the tree: the hash move goes
// first, then captures by MVV-LVA (most valuable victim, least valuable
// attacker), promotions, and finally quiet moves, with moves onto squares
// guarded by enemy pawns pushed to the back.

use crate::game_repr::bitboards::contains_square;
use crate::game_repr::{Move, MoveList, Position, Type};

use super::evaluation::piece_value;

/// Bonus that puts the transposition-table move ahead of everything else
const HASH_MOVE_BONUS: i32 = 10_000;

/// Multiplier on the victim's value so that even QxP ranks above a quiet move
const CAPTURED_PIECE_VALUE_MULTIPLIER: i32 = 10;

const SQUARE_CONTROLLED_BY_OPPONENT_PAWN_PENALTY: i32 = 350;

/// Heuristic score of a single move; higher is searched first.
///
/// `opponent_pawn_attacks` is the opponent pawn attack map from the move
/// generator call that produced the move.
pub fn score_move(pos: &Position, mv: Move, opponent_pawn_attacks: u64, hash_move: Move) -> i32 {
    let mut score = 0;
    let move_piece_type = pos.piece_at(mv.from()).piece_type;
    let capture_piece_type = pos.piece_at(mv.to()).piece_type;

    if capture_piece_type != Type::None {
        score = CAPTURED_PIECE_VALUE_MULTIPLIER * piece_value(capture_piece_type) - piece_value(move_piece_type);
    }

    if move_piece_type == Type::Pawn {
        score += piece_value(mv.move_type().promotion_type());
    } else if contains_square(opponent_pawn_attacks, mv.to()) {
        score -= SQUARE_CONTROLLED_BY_OPPONENT_PAWN_PENALTY;
    }

    if mv == hash_move {
        score += HASH_MOVE_BONUS;
    }

    score
}

/// Sort `moves` in place, best first. The sort is stable, so equally scored
/// moves keep the generator's order.
pub fn order_moves(pos: &Position, moves: &mut MoveList, opponent_pawn_attacks: u64, hash_move: Move) {
    moves.sort_by_cached_key(|&mv| -score_move(pos, mv, opponent_pawn_attacks, hash_move));
}
