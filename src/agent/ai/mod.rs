// AI Agent - Negamax with Alpha-Beta Pruning
//
// Classical chess AI: negamax search with alpha-beta pruning, iterative
// deepening and a transposition table.
//
// Key features:
// - Deterministic (same position and settings always give the same move)
// - Quiescence search to avoid the horizon effect
// - Move ordering (hash move, MVV-LVA, promotions) for better pruning
// - Cooperative abort; the last completed iteration is always kept

mod ai_player;
mod evaluation;
mod move_ordering;
mod negamax;
mod piece_square_tables;
mod quiescence;
mod search;
mod settings;
mod transposition_table;

#[cfg(test)]
mod tests;

pub use ai_player::AiPlayer;
pub use evaluation::{endgame_phase_weight, evaluate, piece_value};
pub use move_ordering::{order_moves, score_move};
pub use search::{
    is_mate_score, num_moves_to_mate_from_score, num_ply_to_mate_from_score, AbortHandle, Search, SearchDiagnostics,
    SearchResult, IMMEDIATE_MATE_SCORE,
};
pub use settings::{AiSettings, Difficulty, DEFAULT_TRANSPOSITION_TABLE_SIZE};
pub use transposition_table::{NodeType, TranspositionTable, TranspositionTableEntry};
