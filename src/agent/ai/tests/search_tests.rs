// Tests for the negamax search

use std::thread;
use std::time::Duration;

use super::{colour_flipped, mv, pos};
use crate::agent::ai::search::{
    is_mate_score, num_moves_to_mate_from_score, Search, SearchResult, IMMEDIATE_MATE_SCORE, NEGATIVE_INFINITY, POSITIVE_INFINITY,
};
use crate::agent::ai::settings::AiSettings;
use crate::game_repr::Position;

fn search_fen(fen: &str, settings: AiSettings) -> (Position, SearchResult) {
    let mut position = pos(fen);
    let mut search = Search::new(settings);
    let result = search.start_search(&mut position);
    (position, result)
}

#[test]
fn test_finds_back_rank_mate_in_one() {
    let (_, result) = search_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", AiSettings::fixed_depth(3));

    assert_eq!(result.best_move.map(|m| m.name()).as_deref(), Some("a1a8"));
    assert_eq!(result.eval, IMMEDIATE_MATE_SCORE - 1);
    assert!(result.is_mate());
    assert_eq!(num_moves_to_mate_from_score(result.eval), 1);
}

#[test]
fn test_mate_found_with_and_without_transposition_table() {
    for use_transposition_table in [true, false] {
        let settings = AiSettings {
            depth: 4,
            use_transposition_table,
            ..AiSettings::default()
        };
        let (_, result) = search_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", settings);
        assert_eq!(result.eval, IMMEDIATE_MATE_SCORE - 1);
    }
}

#[test]
fn test_wins_hanging_queen() {
    let (_, result) = search_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1", AiSettings::fixed_depth(2));
    assert_eq!(result.best_move.map(|m| m.name()).as_deref(), Some("e4d5"));
    assert!(result.eval > 0);
}

#[test]
fn test_black_wins_queen() {
    let (_, result) = search_fen("4k3/8/8/8/8/4p3/3Q4/K7 b - - 0 1", AiSettings::fixed_depth(3));
    assert_eq!(result.best_move.map(|m| m.name()).as_deref(), Some("e3d2"));
    assert!(result.eval > 100, "eval is from the mover's side: {}", result.eval);
}

#[test]
fn test_checkmated_root_has_no_move() {
    // Fool's mate, white to move
    let (_, result) = search_fen(
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        AiSettings::fixed_depth(3),
    );
    assert_eq!(result.best_move, None);
    assert_eq!(result.eval, -IMMEDIATE_MATE_SCORE);
    assert!(is_mate_score(result.eval));
}

#[test]
fn test_stalemated_root_scores_zero() {
    let (_, result) = search_fen("7k/8/8/8/8/8/2q5/K7 w - - 0 1", AiSettings::fixed_depth(3));
    assert_eq!(result.best_move, None);
    assert_eq!(result.eval, 0);
}

#[test]
fn test_repetition_beyond_root_scores_zero() {
    // Four extra queens, but the position is already in the game history
    let mut position = pos("4k3/8/8/8/8/8/8/QQQQK3 w - - 0 1");
    let mut search = Search::new(AiSettings::fixed_depth(1));

    assert_eq!(search.search_moves(&mut position, 1, 1, NEGATIVE_INFINITY, POSITIVE_INFINITY), 0);
    assert!(search.search_moves(&mut position, 1, 0, NEGATIVE_INFINITY, POSITIVE_INFINITY) > 3000);
}

#[test]
fn test_knight_shuffle_repetition_scores_zero() {
    // Black is a queen down, so only the repetition can make this a draw
    let fen = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    let mut position = pos(fen);
    for name in ["g1f3", "g8f6", "f3g1", "f6g8"] {
        let m = mv(&mut position, name);
        position.make_move(m, false);
    }
    assert_eq!(position.to_fen().split(' ').next(), fen.split(' ').next());

    // Nf3 inside the search returns to a position from the game
    let nf3 = mv(&mut position, "g1f3");
    position.make_move(nf3, true);
    let mut search = Search::new(AiSettings::fixed_depth(2));
    assert_eq!(search.search_moves(&mut position, 2, 1, NEGATIVE_INFINITY, POSITIVE_INFINITY), 0);

    // The same position without that history is clearly lost for Black
    let mut fresh = pos(&position.to_fen());
    let mut search = Search::new(AiSettings::fixed_depth(2));
    assert!(search.search_moves(&mut fresh, 2, 0, NEGATIVE_INFINITY, POSITIVE_INFINITY) < -500);
}

#[test]
fn test_search_score_is_colour_symmetric() {
    let settings = AiSettings {
        use_transposition_table: false,
        ..AiSettings::fixed_depth(3)
    };
    for fen in [
        "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/3P1N2/PPP2PPP/RNBQK2R b - - 0 5",
    ] {
        let (_, result) = search_fen(fen, settings.clone());
        let (_, mirrored) = search_fen(&colour_flipped(fen), settings.clone());
        assert_eq!(result.eval, mirrored.eval, "asymmetric search score for {fen}");
    }
}

#[test]
fn test_search_restores_position() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let before = pos(fen);
    let (after, result) = search_fen(fen, AiSettings::fixed_depth(3));

    assert!(result.best_move.is_some());
    assert_eq!(after, before);
}

#[test]
fn test_diagnostics_after_fixed_depth_search() {
    let (_, result) = search_fen(
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        AiSettings::fixed_depth(3),
    );
    let d = &result.diagnostics;

    assert_eq!(d.last_completed_depth, 3);
    assert_eq!(d.eval, result.eval);
    assert_eq!(Some(d.move_name.clone()), result.best_move.map(|m| m.name()));
    assert!(d.num_nodes > 0);
    assert!(d.num_positions_evaluated > 0);
}

#[test]
fn test_best_move_is_legal() {
    let fens = [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    ];
    for fen in fens {
        let (mut position, result) = search_fen(fen, AiSettings::fixed_depth(2));
        let best = result.best_move.unwrap();
        assert!(position.legal_moves().contains(&best), "{} is not legal in {}", best, fen);
    }
}

#[test]
fn test_transposition_table_filled_only_when_enabled() {
    let mut position = Position::start_position();

    let mut with_table = Search::new(AiSettings::fixed_depth(2));
    with_table.start_search(&mut position);
    assert!(with_table.transposition_table().occupied() > 0);

    let mut without_table = Search::new(AiSettings {
        depth: 2,
        use_transposition_table: false,
        ..AiSettings::default()
    });
    without_table.start_search(&mut position);
    assert_eq!(without_table.transposition_table().occupied(), 0);
}

#[test]
fn test_clear_tt_each_move() {
    let mut position = Position::start_position();
    let mut search = Search::new(AiSettings {
        depth: 1,
        clear_tt_each_move: true,
        ..AiSettings::default()
    });
    search.start_search(&mut position);
    let after_first = search.transposition_table().occupied();
    assert!(after_first > 0);
    search.start_search(&mut position);

    // Identical searches from an empty table fill identical slots
    assert_eq!(search.transposition_table().occupied(), after_first);
}

#[test]
fn test_abort_before_start_stops_next_search() {
    let mut position = Position::start_position();
    let mut search = Search::new(AiSettings::fixed_depth(4));

    search.abort_handle().abort();
    let result = search.start_search(&mut position);
    assert_eq!(result.diagnostics.last_completed_depth, 0);
    assert_eq!(result.best_move, None);

    // The abort does not carry over
    let result = search.start_search(&mut position);
    assert_eq!(result.diagnostics.last_completed_depth, 4);
}

#[test]
fn test_abort_keeps_last_completed_iteration() {
    let mut position = Position::start_position();
    let mut search = Search::new(AiSettings::timed(200));
    let abort = search.abort_handle();

    let timer = thread::spawn(move || {
        thread::sleep(Duration::from_millis(200));
        abort.abort();
    });
    let result = search.start_search(&mut position);
    timer.join().unwrap();

    assert!(result.diagnostics.last_completed_depth >= 1);
    let best = result.best_move.unwrap();
    assert!(position.legal_moves().contains(&best));
}

#[test]
fn test_promotes_to_queen() {
    let (_, result) = search_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1", AiSettings::fixed_depth(1));
    assert_eq!(result.best_move.map(|m| m.name()).as_deref(), Some("a7a8q"));
}
