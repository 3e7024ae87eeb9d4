// Negamax Search with Alpha-Beta Pruning
//
// Negamax relies on the zero-sum property of chess: max(a, b) = -min(-a, -b).
// One function searches for both sides and negates the score at each level,
// so every score is from the point of view of the side to move.
//
// Pruning and caching used here:
// - Transposition table probe before searching, store after
// - Hash move searched first (see move_ordering)
// - Mate distance pruning for faster mate detection
// - Repetitions of earlier game positions score as a draw
// - Quiescence search at the horizon to avoid the horizon effect

use crate::game_repr::{Move, Position};

use super::move_ordering::order_moves;
use super::search::{Search, IMMEDIATE_MATE_SCORE};
use super::transposition_table::NodeType;

impl Search {
    /// Alpha-beta search of `pos` to `depth` plies.
    ///
    /// `ply_from_root` is 0 at the root, where the best move found is kept in
    /// `best_move_this_iteration`. Returns a fail-hard score in
    /// `[alpha, beta]`, or 0 once the search has been aborted.
    pub(super) fn search_moves(&mut self, pos: &mut Position, depth: u32, ply_from_root: u32, mut alpha: i32, mut beta: i32) -> i32 {
        if self.abort.is_aborted() {
            return 0;
        }

        if ply_from_root > 0 {
            // Returning to a position from the game counts as a draw
            if pos.repetition_history().contains(&pos.zobrist_key()) {
                return 0;
            }

            // Mate distance pruning: a mate found closer to the root already
            // beats anything this subtree can return
            let ply = ply_from_root as i32;
            alpha = alpha.max(-IMMEDIATE_MATE_SCORE + ply);
            beta = beta.min(IMMEDIATE_MATE_SCORE - ply);
            if alpha >= beta {
                return alpha;
            }
        }

        let key = pos.zobrist_key();
        if let Some(tt_value) = self.tt.lookup_evaluation(key, depth, ply_from_root, alpha, beta) {
            if ply_from_root > 0 {
                self.diagnostics.num_transpositions += 1;
                return tt_value;
            }
            // The root needs a move, not just a value
            let stored_move = self.tt.stored_move(key);
            if !stored_move.is_invalid() {
                self.diagnostics.num_transpositions += 1;
                self.best_move_this_iteration = stored_move;
                self.best_eval_this_iteration = tt_value;
                return tt_value;
            }
        }

        if depth == 0 {
            return self.quiescence_search(pos, alpha, beta);
        }

        let mut moves = self.move_generator.generate_moves(pos, true);
        // Generator state is overwritten by the recursion below
        let in_check = self.move_generator.in_check();
        let opponent_pawn_attacks = self.move_generator.opponent_pawn_attack_map();

        if moves.is_empty() {
            if in_check {
                // Prefer the quickest mate
                return -(IMMEDIATE_MATE_SCORE - ply_from_root as i32);
            }
            return 0;
        }

        let hash_move = self.tt.stored_move(key);
        order_moves(pos, &mut moves, opponent_pawn_attacks, hash_move);

        let mut node_type = NodeType::UpperBound;
        let mut best_move_in_position = Move::INVALID;

        for mv in moves {
            pos.make_move(mv, true);
            let eval = -self.search_moves(pos, depth - 1, ply_from_root + 1, -beta, -alpha);
            pos.unmake_move(mv, true);
            self.diagnostics.num_nodes += 1;

            // Scores from an interrupted subtree are meaningless; keep them out of the table
            if self.abort.is_aborted() {
                return 0;
            }

            if eval >= beta {
                self.tt.store_evaluation(key, depth, ply_from_root, beta, NodeType::LowerBound, mv);
                self.diagnostics.num_cutoffs += 1;
                return beta;
            }

            if eval > alpha {
                node_type = NodeType::Exact;
                best_move_in_position = mv;
                alpha = eval;
                if ply_from_root == 0 {
                    self.best_move_this_iteration = mv;
                    self.best_eval_this_iteration = eval;
                }
            }
        }

        self.tt.store_evaluation(key, depth, ply_from_root, alpha, node_type, best_move_in_position);

        alpha
    }
}
