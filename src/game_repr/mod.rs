mod moves;
mod piece;
mod piece_list;
mod position;
pub mod bitboards;
pub mod movegen;
pub mod zobrist;

#[cfg(test)]
mod tests;

pub use moves::*;
pub use piece::*;
pub use piece_list::PieceList;
pub use position::*;
pub use movegen::{MoveGenerator, PromotionMode};
