use super::*;

const POSITIONS: [&str; 6] = [
    START_FEN,
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    "rnbqkbnr/pp1ppppp/8/8/2pPP3/8/PPP2PPP/RNBQKBNR b KQkq d3 0 3",
];

#[test]
fn test_every_move_round_trips() {
    for fen in POSITIONS {
        let mut pos = pos(fen);
        let original = pos.clone();

        for mv in pos.legal_moves() {
            for in_search in [true, false] {
                pos.make_move(mv, in_search);
                assert_eq!(
                    pos.zobrist_key(),
                    zobrist::calculate(&pos),
                    "{fen}: hash drifted after {mv}"
                );
                pos.unmake_move(mv, in_search);
                assert_eq!(pos, original, "{fen}: {mv} did not unmake cleanly");
            }
        }
    }
}

#[test]
fn test_long_walk_round_trips() {
    for fen in POSITIONS {
        let mut pos = pos(fen);
        let original = pos.clone();
        let mut played = Vec::new();

        for ply in 0..60usize {
            let moves = pos.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[(ply * 7 + 3) % moves.len()];
            pos.make_move(mv, false);
            assert_eq!(pos.zobrist_key(), zobrist::calculate(&pos), "{fen}: ply {ply}");
            played.push(mv);
        }

        assert_eq!(pos.repetition_history().len(), played.len() + 1);
        while let Some(mv) = played.pop() {
            pos.unmake_move(mv, false);
        }
        assert_eq!(pos, original, "{fen}: walk did not unwind");
    }
}

#[test]
fn test_search_moves_leave_repetition_history_alone() {
    let mut pos = Position::start_position();
    let mv = pos.move_from_name("g1f3").expect("legal");

    pos.make_move(mv, true);
    assert_eq!(pos.repetition_history().len(), 1);
    pos.unmake_move(mv, true);

    pos.make_move(mv, false);
    assert_eq!(pos.repetition_history().len(), 2);
    assert_eq!(pos.repetition_history()[1], pos.zobrist_key());
}

#[test]
fn test_transposition_gives_same_hash() {
    let mut a = Position::start_position();
    let mut b = Position::start_position();
    play(&mut a, &["g1f3", "g8f6", "b1c3", "b8c6"]);
    play(&mut b, &["b1c3", "b8c6", "g1f3", "g8f6"]);

    assert_eq!(a.zobrist_key(), b.zobrist_key());
    assert_eq!(a.squares(), b.squares());
}

#[test]
fn test_en_passant_file_changes_hash() {
    // Same placement; only the en-passant right differs
    let with_ep = pos("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let without_ep = pos("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1");
    assert_ne!(with_ep.zobrist_key(), without_ep.zobrist_key());
}

#[test]
fn test_fifty_move_counter_tracks_and_restores() {
    let mut pos = Position::start_position();
    play(&mut pos, &["g1f3", "g8f6"]);
    assert_eq!(pos.fifty_move_counter(), 2);

    let mv = pos.move_from_name("e2e4").expect("legal");
    pos.make_move(mv, false);
    assert_eq!(pos.fifty_move_counter(), 0);
    pos.unmake_move(mv, false);
    assert_eq!(pos.fifty_move_counter(), 2);
}
