use super::*;

// ==================== STARTING POSITION PERFT TESTS ====================
// Standard initial position

const FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[test]
fn test_perft_starting_position_depth_1() {
    let pos = Position::from_fen(FEN).unwrap();
    assert_eq!(pos.perft(1), 20);
}

#[test]
fn test_perft_starting_position_depth_2() {
    let pos = Position::from_fen(FEN).unwrap();
    assert_eq!(pos.perft(2), 400);
}

#[test]
fn test_perft_starting_position_depth_3() {
    let pos = Position::from_fen(FEN).unwrap();
    assert_eq!(pos.perft(3), 8902);
}

#[test]
fn test_perft_starting_position_depth_4() {
    let pos = Position::from_fen(FEN).unwrap();
    assert_eq!(pos.perft(4), 197281);
}

#[test]
fn test_perft_starting_position_depth_5() {
    let pos = Position::from_fen(FEN).unwrap();
    assert_eq!(pos.perft(5), 4865609);
}

#[test]
fn test_divide_sums_to_perft() {
    let pos = Position::from_fen(FEN).unwrap();
    let split = pos.divide(3);
    assert_eq!(split.len(), 20);
    assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 8902);

    // e2e4 leads to 600 positions at depth 3
    let e2e4 = split.iter().find(|(mv, _)| mv.name() == "e2e4").unwrap();
    assert_eq!(e2e4.1, 600);
}
