// Behavioural tests for the search and its heuristics

use crate::game_repr::{Move, Position};

mod move_ordering_tests;
mod search_tests;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

fn mv(pos: &mut Position, name: &str) -> Move {
    pos.move_from_name(name).unwrap()
}

/// Mirror a FEN top-to-bottom and swap the colours (castling and en passant dropped).
fn colour_flipped(fen: &str) -> String {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let board = fields[0]
        .split('/')
        .rev()
        .map(|rank| {
            rank.chars()
                .map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c.to_ascii_uppercase() })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("/");
    let side = if fields[1] == "w" { "b" } else { "w" };
    format!("{board} {side} - - 0 1")
}
