// Tests for move ordering

use super::{mv, pos};
use crate::agent::ai::move_ordering::order_moves;
use crate::game_repr::{Move, MoveGenerator, MoveList, Position};

fn ordered(pos: &mut Position, hash_move: Move) -> MoveList {
    let mut generator = MoveGenerator::default();
    let mut moves = generator.generate_moves(pos, true);
    order_moves(pos, &mut moves, generator.opponent_pawn_attack_map(), hash_move);
    moves
}

fn names(moves: &[Move]) -> Vec<String> {
    moves.iter().map(|m| m.name()).collect()
}

#[test]
fn test_equal_scores_keep_generator_order() {
    let mut pos = Position::start_position();
    let generated = MoveGenerator::default().generate_moves(&mut pos, true);
    let sorted = ordered(&mut pos, Move::INVALID);
    assert_eq!(generated, sorted);
}

#[test]
fn test_hash_move_first() {
    let mut pos = Position::start_position();
    let hash = mv(&mut pos, "g1f3");
    let sorted = ordered(&mut pos, hash);
    assert_eq!(sorted[0], hash);
    assert_eq!(sorted.len(), 20);
}

#[test]
fn test_captures_prioritized() {
    // A free queen on e4 for the c3 knight
    let mut pos = pos("rnb1kbnr/pppppppp/8/8/4q3/2N5/PPPPPPPP/R1BQKBNR w KQkq - 0 1");
    let sorted = ordered(&mut pos, Move::INVALID);
    assert_eq!(sorted[0].name(), "c3e4");
}

#[test]
fn test_least_valuable_attacker_first() {
    let mut pos = pos("6k1/8/8/3q4/2P1Q3/8/8/4K3 w - - 0 1");
    let sorted = ordered(&mut pos, Move::INVALID);
    assert_eq!(names(&sorted[..2]), ["c4d5", "e4d5"]);
}

#[test]
fn test_promotions_by_piece_value() {
    let mut pos = pos("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    let sorted = ordered(&mut pos, Move::INVALID);
    assert_eq!(names(&sorted[..4]), ["a7a8q", "a7a8r", "a7a8b", "a7a8n"]);
}

#[test]
fn test_squares_guarded_by_pawns_last() {
    // The b4 pawn guards a3 and c3
    let mut pos = pos("4k3/8/8/8/1p6/8/8/1N2K3 w - - 0 1");
    let sorted = ordered(&mut pos, Move::INVALID);

    let mut last_two = names(&sorted[sorted.len() - 2..]);
    last_two.sort();
    assert_eq!(last_two, ["b1a3", "b1c3"]);
}
