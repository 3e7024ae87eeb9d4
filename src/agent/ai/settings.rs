//! Search configuration and difficulty presets.

use crate::game_repr::PromotionMode;

/// Slots in the transposition table unless configured otherwise
pub const DEFAULT_TRANSPOSITION_TABLE_SIZE: usize = 64_000;

/// Everything that controls how a search runs.
///
/// With `use_fixed_depth_search` the search stops after `depth` plies;
/// otherwise it deepens until aborted (the [`AiPlayer`](super::AiPlayer)
/// aborts after `search_time_millis`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiSettings {
    pub depth: u32,
    pub use_iterative_deepening: bool,
    pub use_transposition_table: bool,
    /// Run the search on a worker thread and report through a callback
    pub use_threading: bool,
    pub use_fixed_depth_search: bool,
    pub search_time_millis: u64,
    /// Keep deepening after a forced mate has been found
    pub endless_search_mode: bool,
    pub clear_tt_each_move: bool,
    pub promotions_to_search: PromotionMode,
    pub transposition_table_size: usize,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            depth: 6,
            use_iterative_deepening: true,
            use_transposition_table: true,
            use_threading: false,
            use_fixed_depth_search: true,
            search_time_millis: 1000,
            endless_search_mode: false,
            clear_tt_each_move: false,
            promotions_to_search: PromotionMode::All,
            transposition_table_size: DEFAULT_TRANSPOSITION_TABLE_SIZE,
        }
    }
}

impl AiSettings {
    /// Settings for a fixed-depth search
    pub fn fixed_depth(depth: u32) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Settings for a time-bounded search on a worker thread
    pub fn timed(search_time_millis: u64) -> Self {
        Self {
            use_fixed_depth_search: false,
            use_threading: true,
            search_time_millis,
            ..Self::default()
        }
    }
}

/// AI difficulty levels that map to search settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Depth 2, no time limit
    Easy,
    /// Depth 4, no time limit
    Medium,
    /// Depth 6, no time limit
    Hard,
    /// Time-bounded: deepens for 5 seconds
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Expert];

    /// Search depth in plies for the fixed-depth levels
    pub fn max_depth(&self) -> Option<u32> {
        match self {
            Difficulty::Easy => Some(2),
            Difficulty::Medium => Some(4),
            Difficulty::Hard => Some(6),
            Difficulty::Expert => None,
        }
    }

    /// Returns None for depth-limited levels, or Some(ms) for time-controlled search.
    pub fn time_limit_ms(&self) -> Option<u64> {
        match self {
            Difficulty::Expert => Some(5000),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    pub fn settings(&self) -> AiSettings {
        match (self.max_depth(), self.time_limit_ms()) {
            (_, Some(millis)) => AiSettings::timed(millis),
            (Some(depth), None) => AiSettings::fixed_depth(depth),
            (None, None) => AiSettings::default(),
        }
    }
}

impl From<Difficulty> for AiSettings {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.settings()
    }
}
