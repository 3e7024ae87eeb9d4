use crate::game_repr::Move;

use super::search::{is_mate_score, IMMEDIATE_MATE_SCORE};

/// Node type for transposition table entries
///
/// This is crucial for alpha-beta pruning:
/// - Exact: The exact score for this position
/// - LowerBound: Score is at least this value (beta cutoff)
/// - UpperBound: Score is at most this value (alpha cutoff)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Exact score - position was fully searched
    Exact,
    /// Lower bound - beta cutoff occurred
    LowerBound,
    /// Upper bound - every move failed low
    UpperBound,
}

/// Entry in the transposition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranspositionTableEntry {
    /// Full Zobrist key, compared on lookup to detect index collisions
    pub key: u64,
    /// Score with mate distances made relative to this node
    pub value: i32,
    /// Remaining search depth when this position was evaluated
    pub depth: u32,
    pub node_type: NodeType,
    /// Best move found in this position, or `Move::INVALID`
    pub mv: Move,
}

/// Fixed-size transposition table indexed by `key % size`.
///
/// Newer entries always overwrite older ones in the same slot.
pub struct TranspositionTable {
    entries: Vec<Option<TranspositionTableEntry>>,
    /// When false every lookup misses and stores are ignored
    pub enabled: bool,
}

impl TranspositionTable {
    /// Create a table with `size` slots (at least one).
    pub fn new(size: usize) -> Self {
        Self {
            entries: vec![None; size.max(1)],
            enabled: true,
        }
    }

    #[inline(always)]
    fn index(&self, key: u64) -> usize {
        (key % self.entries.len() as u64) as usize
    }

    /// Number of slots
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Number of occupied slots
    pub fn occupied(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// The entry stored for exactly this key, if any
    pub fn entry(&self, key: u64) -> Option<&TranspositionTableEntry> {
        if !self.enabled {
            return None;
        }
        self.entries[self.index(key)].as_ref().filter(|e| e.key == key)
    }

    /// Best move recorded for this position, or `Move::INVALID`.
    pub fn stored_move(&self, key: u64) -> Move {
        self.entry(key).map_or(Move::INVALID, |e| e.mv)
    }

    /// Value usable at this node for the given window, or `None` on a miss.
    ///
    /// Misses when the slot is empty, holds another position, was searched
    /// shallower than `depth`, or holds a bound that does not decide the
    /// window.
    pub fn lookup_evaluation(&self, key: u64, depth: u32, ply_from_root: u32, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entry(key)?;
        if entry.depth < depth {
            return None;
        }

        let value = correct_retrieved_mate_score(entry.value, ply_from_root);
        match entry.node_type {
            NodeType::Exact => Some(value),
            NodeType::UpperBound if value <= alpha => Some(value),
            NodeType::LowerBound if value >= beta => Some(value),
            _ => None,
        }
    }

    pub fn store_evaluation(
        &mut self,
        key: u64,
        depth: u32,
        ply_from_root: u32,
        value: i32,
        node_type: NodeType,
        mv: Move,
    ) {
        if !self.enabled {
            return;
        }
        let index = self.index(key);
        self.entries[index] = Some(TranspositionTableEntry {
            key,
            value: correct_mate_score_for_storage(value, ply_from_root),
            depth,
            node_type,
            mv,
        });
    }

    /// Clear the transposition table
    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(|e| *e = None);
    }
}

/// Mate scores are stored as distance from this node rather than from the
/// root, so the entry stays valid wherever the position is reached.
fn correct_mate_score_for_storage(score: i32, ply_from_root: u32) -> i32 {
    if is_mate_score(score) {
        let sign = score.signum();
        (score * sign + ply_from_root as i32) * sign
    } else {
        score
    }
}

fn correct_retrieved_mate_score(score: i32, ply_from_root: u32) -> i32 {
    if is_mate_score(score) {
        let sign = score.signum();
        (score * sign - ply_from_root as i32) * sign
    } else {
        score
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(super::settings::DEFAULT_TRANSPOSITION_TABLE_SIZE)
    }
}
