// Iterative Deepening Search Orchestrator
//
// Runs a full negamax search at depth 1, 2, 3, ... and keeps the result of the
// last iteration that ran to completion, so the search can be aborted at any
// moment and still yield a sound move.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::game_repr::{Move, MoveGenerator, Position};

use super::settings::AiSettings;
use super::transposition_table::TranspositionTable;

/// Score for delivering mate on the current move; a mate `n` plies away
/// scores `IMMEDIATE_MATE_SCORE - n`.
pub const IMMEDIATE_MATE_SCORE: i32 = 100_000;
pub const POSITIVE_INFINITY: i32 = 9_999_999;
pub const NEGATIVE_INFINITY: i32 = -POSITIVE_INFINITY;

/// Deepest iteration a time-bounded search will start
pub const MAX_ITERATIVE_DEPTH: u32 = 64;

/// Mates further away than this are not recognised as mate scores
const MAX_MATE_DEPTH: i32 = 1000;

pub fn is_mate_score(score: i32) -> bool {
    score.abs() > IMMEDIATE_MATE_SCORE - MAX_MATE_DEPTH
}

pub fn num_ply_to_mate_from_score(score: i32) -> i32 {
    IMMEDIATE_MATE_SCORE - score.abs()
}

/// Full moves (rounded up) until mate for a mate score
pub fn num_moves_to_mate_from_score(score: i32) -> i32 {
    (num_ply_to_mate_from_score(score) + 1) / 2
}

/// Cooperative cancellation flag shared between a search and whoever may stop it.
///
/// Cloning shares the flag. A handle aborts the search it was taken for
/// (the one running now, or the next one to start); each finished search
/// arms a fresh flag.
#[derive(Debug, Clone, Default)]
pub struct AbortHandle(Arc<AtomicBool>);

impl AbortHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Read-only telemetry about the last search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDiagnostics {
    pub last_completed_depth: u32,
    /// Coordinate name of the best move so far ("0000" if none)
    pub move_name: String,
    pub eval: i32,
    pub num_nodes: u64,
    pub num_q_nodes: u64,
    pub num_cutoffs: u64,
    pub num_transpositions: u64,
    pub num_positions_evaluated: u64,
    pub elapsed: Duration,
}

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// None only when the root position has no legal moves
    pub best_move: Option<Move>,
    /// Score from the point of view of the side to move at the root
    pub eval: i32,
    pub diagnostics: SearchDiagnostics,
}

impl SearchResult {
    pub fn is_mate(&self) -> bool {
        is_mate_score(self.eval)
    }
}

/// Negamax alpha-beta search with iterative deepening, a transposition
/// table and quiescence search.
///
/// One `Search` owns its transposition table and searches one position at a
/// time; the position is borrowed mutably for the duration of the search and
/// is returned unchanged.
pub struct Search {
    pub(super) settings: AiSettings,
    pub(super) move_generator: MoveGenerator,
    pub(super) tt: TranspositionTable,
    pub(super) abort: AbortHandle,

    pub(super) best_move_this_iteration: Move,
    pub(super) best_eval_this_iteration: i32,
    best_move: Move,
    best_eval: i32,

    pub(super) diagnostics: SearchDiagnostics,
}

impl Search {
    pub fn new(settings: AiSettings) -> Self {
        let tt = TranspositionTable::new(settings.transposition_table_size);
        let move_generator = MoveGenerator::new(settings.promotions_to_search);
        Self {
            settings,
            move_generator,
            tt,
            abort: AbortHandle::new(),
            best_move_this_iteration: Move::INVALID,
            best_eval_this_iteration: 0,
            best_move: Move::INVALID,
            best_eval: 0,
            diagnostics: SearchDiagnostics::default(),
        }
    }

    pub fn settings(&self) -> &AiSettings {
        &self.settings
    }

    /// Replace the settings. Resizes the transposition table when its size changed.
    pub fn set_settings(&mut self, settings: AiSettings) {
        if settings.transposition_table_size != self.tt.size() {
            self.tt = TranspositionTable::new(settings.transposition_table_size);
        }
        self.settings = settings;
    }

    /// Handle that stops the current (or next) search.
    pub fn abort_handle(&self) -> AbortHandle {
        self.abort.clone()
    }

    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.tt
    }

    pub fn diagnostics(&self) -> &SearchDiagnostics {
        &self.diagnostics
    }

    /// Best move and evaluation of the last search
    pub fn search_result(&self) -> (Move, i32) {
        (self.best_move, self.best_eval)
    }

    /// Search `pos` and return the best move found.
    ///
    /// With a time-bounded (non fixed-depth) iterative search this only
    /// returns once the abort handle fires.
    pub fn start_search(&mut self, pos: &mut Position) -> SearchResult {
        let start = Instant::now();
        self.diagnostics = SearchDiagnostics::default();

        self.best_move_this_iteration = Move::INVALID;
        self.best_move = Move::INVALID;
        self.best_eval_this_iteration = 0;
        self.best_eval = 0;

        self.tt.enabled = self.settings.use_transposition_table;
        if self.settings.clear_tt_each_move {
            self.tt.clear();
            debug!("transposition table cleared");
        }
        self.move_generator.promotions_to_generate = self.settings.promotions_to_search;

        if self.settings.use_iterative_deepening {
            let target_depth = if self.settings.use_fixed_depth_search {
                self.settings.depth.max(1)
            } else {
                MAX_ITERATIVE_DEPTH
            };

            for depth in 1..=target_depth {
                self.search_moves(pos, depth, 0, NEGATIVE_INFINITY, POSITIVE_INFINITY);
                if self.abort.is_aborted() {
                    debug!("search aborted during depth {depth}");
                    break;
                }

                self.best_move = self.best_move_this_iteration;
                self.best_eval = self.best_eval_this_iteration;

                self.diagnostics.last_completed_depth = depth;
                self.diagnostics.move_name = self.best_move.to_string();
                self.diagnostics.eval = self.best_eval;
                debug!(
                    "depth {depth} eval {} move {} nodes {} time {:?}",
                    self.best_eval,
                    self.best_move,
                    self.diagnostics.num_nodes,
                    start.elapsed()
                );

                // No legal moves at the root: deeper iterations cannot change that
                if self.best_move.is_invalid() {
                    break;
                }
                if is_mate_score(self.best_eval) && !self.settings.endless_search_mode {
                    break;
                }
            }

            // Aborted before the first iteration finished: a partial result
            // beats no move at all
            if self.best_move.is_invalid() && !self.best_move_this_iteration.is_invalid() {
                self.best_move = self.best_move_this_iteration;
                self.best_eval = self.best_eval_this_iteration;
            }
        } else {
            let depth = self.settings.depth.max(1);
            self.search_moves(pos, depth, 0, NEGATIVE_INFINITY, POSITIVE_INFINITY);
            self.best_move = self.best_move_this_iteration;
            self.best_eval = self.best_eval_this_iteration;
            if !self.abort.is_aborted() {
                self.diagnostics.last_completed_depth = depth;
            }
        }

        // Root with no legal moves: report the mate or stalemate score
        if self.best_move.is_invalid() && !self.abort.is_aborted() {
            self.best_eval = self.search_moves(pos, 1, 0, NEGATIVE_INFINITY, POSITIVE_INFINITY);
        }

        self.diagnostics.move_name = self.best_move.to_string();
        self.diagnostics.eval = self.best_eval;
        self.diagnostics.elapsed = start.elapsed();
        self.log_summary(pos.white_to_move());

        // Handles handed out for this search must not reach the next one
        self.abort = AbortHandle::new();

        SearchResult {
            best_move: (!self.best_move.is_invalid()).then_some(self.best_move),
            eval: self.best_eval,
            diagnostics: self.diagnostics.clone(),
        }
    }

    fn log_summary(&self, white_to_move: bool) {
        let d = &self.diagnostics;
        if is_mate_score(self.best_eval) {
            let moves_to_mate = num_moves_to_mate_from_score(self.best_eval);
            // Positive eval means the side to move delivers the mate
            let side_with_mate = if (self.best_eval > 0) == white_to_move { "White" } else { "Black" };
            info!(
                "{side_with_mate} can mate in {moves_to_mate} move{}",
                if moves_to_mate > 1 { "s" } else { "" }
            );
        }
        info!(
            "best move: {} eval: {} depth: {} search time: {} ms",
            self.best_move,
            self.best_eval,
            d.last_completed_depth,
            d.elapsed.as_millis()
        );
        debug!(
            "nodes: {} qnodes: {} cutoffs: {} tt hits: {} evaluated: {}",
            d.num_nodes, d.num_q_nodes, d.num_cutoffs, d.num_transpositions, d.num_positions_evaluated
        );
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::new(AiSettings::default())
    }
}
