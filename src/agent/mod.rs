pub mod ai;
pub use ai::{AiPlayer, AiSettings, Difficulty, Search, SearchResult};
