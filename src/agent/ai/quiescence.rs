// Quiescence Search - Tactical Stability Extension
//
// When the main search stops at its horizon it may be in the middle of an
// exchange: stopping right after a queen capture but before the recapture
// would leave us thinking we are a queen up.
//
// Quiescence search keeps searching "noisy" moves (captures and promotions)
// until the position is quiet, and only then trusts the static evaluation.
//
// Stand-pat: the side to move is never forced to capture, so the static
// evaluation is a lower bound on the score and can cause a cutoff on its own.

use crate::game_repr::{Move, Position};

use super::evaluation::evaluate;
use super::move_ordering::order_moves;
use super::search::Search;

impl Search {
    /// Search captures (and promotions) only, starting from the stand-pat score.
    pub(super) fn quiescence_search(&mut self, pos: &mut Position, mut alpha: i32, beta: i32) -> i32 {
        if self.abort.is_aborted() {
            return 0;
        }

        let stand_pat = evaluate(pos);
        self.diagnostics.num_positions_evaluated += 1;
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let mut moves = self.move_generator.generate_moves(pos, false);
        let opponent_pawn_attacks = self.move_generator.opponent_pawn_attack_map();
        order_moves(pos, &mut moves, opponent_pawn_attacks, Move::INVALID);

        for mv in moves {
            pos.make_move(mv, true);
            let eval = -self.quiescence_search(pos, -beta, -alpha);
            pos.unmake_move(mv, true);
            self.diagnostics.num_q_nodes += 1;

            if eval >= beta {
                self.diagnostics.num_cutoffs += 1;
                return beta;
            }
            if eval > alpha {
                alpha = eval;
            }
        }

        alpha
    }
}
