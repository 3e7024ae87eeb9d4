use crate::game_repr::Position;

mod starting_position;
mod kiwipete;
mod endgame;
mod complex_promotions;
mod middle_game;
mod symmetrical;
