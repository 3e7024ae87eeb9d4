//! Chess engine: bitboard-assisted legal move generation and a negamax
//! alpha-beta searcher.
//!
//! ```no_run
//! use chess_ai::agent::ai::{AiSettings, Search};
//! use chess_ai::game_repr::Position;
//!
//! let mut pos = Position::start_position();
//! let mut search = Search::new(AiSettings::fixed_depth(5));
//! let result = search.start_search(&mut pos);
//! println!("{:?} {}", result.best_move, result.eval);
//! ```

pub mod agent;
pub mod error;
pub mod game_repr;

pub use error::{FenError, MoveParseError};
