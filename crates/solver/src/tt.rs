use std::collections::HashMap;

use congkak::{BoardState, Player};
use rand::seq::IteratorRandom;

pub const DEFAULT_TT_CAPACITY: usize = 1_000_000;

/// Which side of the search window a stored value bounds.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TTFlag {
    Exact,
    LowerBound,
    UpperBound,
}

#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    pub value: f64,
    pub depth: u32,
    pub flag: TTFlag,
    pub best_move: Option<usize>,
}

/// FNV-1a over the 16 cells, side to move, and the search's maximizing
/// player. Stored values are maximizer-relative, so a `Solver`/table reused
/// across turns with a different maximizer must not collide with the
/// previous turn's keys. Non-cryptographic; fast mixing is all a
/// transposition key needs.
pub fn position_key(board: &BoardState, maximizer: Player) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;

    let mut hash = FNV_OFFSET;
    for &cell in board.cells() {
        hash ^= cell as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash ^= board.current_player().idx() as u64;
    hash = hash.wrapping_mul(FNV_PRIME);
    hash ^= maximizer.idx() as u64;
    hash.wrapping_mul(FNV_PRIME)
}

/// Bounded map from position key to search result, used for both value
/// cutoffs and move ordering.
pub struct TranspositionTable {
    max_size: usize,
    table: HashMap<u64, TTEntry>,
}

impl TranspositionTable {
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            table: HashMap::new(),
        }
    }

    /// Returns `(value, is_exact)` if the stored entry is deep enough and
    /// its bound proves a cutoff at `(alpha, beta)`; `None` otherwise.
    pub fn lookup(&self, key: u64, depth: u32, alpha: f64, beta: f64) -> Option<(f64, bool)> {
        let entry = self.table.get(&key)?;
        if entry.depth < depth {
            return None;
        }
        match entry.flag {
            TTFlag::Exact => Some((entry.value, true)),
            TTFlag::LowerBound if entry.value >= beta => Some((entry.value, false)),
            TTFlag::UpperBound if entry.value <= alpha => Some((entry.value, false)),
            _ => None,
        }
    }

    pub fn get_best_move(&self, key: u64) -> Option<usize> {
        self.table.get(&key).and_then(|e| e.best_move)
    }

    /// Replaces the entry at `key` unless an existing entry was searched to
    /// a strictly greater depth. Evicts a uniformly random entry when
    /// inserting a new key at capacity.
    pub fn store(&mut self, key: u64, value: f64, depth: u32, flag: TTFlag, best_move: Option<usize>) {
        if let Some(existing) = self.table.get(&key) {
            if existing.depth > depth {
                return;
            }
        } else if self.table.len() >= self.max_size {
            let mut rng = rand::rng();
            if let Some(evict) = self.table.keys().copied().choose(&mut rng) {
                self.table.remove(&evict);
            }
        }
        self.table.insert(
            key,
            TTEntry {
                value,
                depth,
                flag,
                best_move,
            },
        );
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_TT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_boards_hash_to_the_same_key() {
        let a = BoardState::initial();
        let b = BoardState::initial();
        assert_eq!(position_key(&a, Player::P0), position_key(&b, Player::P0));
    }

    #[test]
    fn differing_maximizer_hashes_to_a_different_key() {
        let b = BoardState::initial();
        assert_ne!(position_key(&b, Player::P0), position_key(&b, Player::P1));
    }

    #[test]
    fn lookup_misses_on_empty_table() {
        let tt = TranspositionTable::default();
        assert!(tt.lookup(42, 3, -1000.0, 1000.0).is_none());
    }

    #[test]
    fn exact_entry_always_returns_exact() {
        let mut tt = TranspositionTable::default();
        tt.store(1, 5.0, 4, TTFlag::Exact, Some(2));
        assert_eq!(tt.lookup(1, 4, -1000.0, 1000.0), Some((5.0, true)));
        assert_eq!(tt.get_best_move(1), Some(2));
    }

    #[test]
    fn lower_bound_cuts_off_only_above_beta() {
        let mut tt = TranspositionTable::default();
        tt.store(1, 10.0, 4, TTFlag::LowerBound, None);
        assert_eq!(tt.lookup(1, 4, -1000.0, 5.0), Some((10.0, false)));
        assert_eq!(tt.lookup(1, 4, -1000.0, 20.0), None);
    }

    #[test]
    fn upper_bound_cuts_off_only_below_alpha() {
        let mut tt = TranspositionTable::default();
        tt.store(1, -10.0, 4, TTFlag::UpperBound, None);
        assert_eq!(tt.lookup(1, 4, -5.0, 1000.0), Some((-10.0, false)));
        assert_eq!(tt.lookup(1, 4, -20.0, 1000.0), None);
    }

    #[test]
    fn shallower_stored_entry_is_not_usable() {
        let mut tt = TranspositionTable::default();
        tt.store(1, 5.0, 2, TTFlag::Exact, None);
        assert!(tt.lookup(1, 4, -1000.0, 1000.0).is_none());
    }

    #[test]
    fn store_keeps_deeper_entry_on_shallower_overwrite() {
        let mut tt = TranspositionTable::default();
        tt.store(1, 5.0, 4, TTFlag::Exact, Some(1));
        tt.store(1, 99.0, 2, TTFlag::Exact, Some(9));
        assert_eq!(tt.lookup(1, 4, -1000.0, 1000.0), Some((5.0, true)));
    }

    #[test]
    fn store_overwrites_on_equal_or_greater_depth() {
        let mut tt = TranspositionTable::default();
        tt.store(1, 5.0, 4, TTFlag::Exact, Some(1));
        tt.store(1, 99.0, 4, TTFlag::Exact, Some(9));
        assert_eq!(tt.lookup(1, 4, -1000.0, 1000.0), Some((99.0, true)));
    }

    #[test]
    fn clear_empties_the_table() {
        let mut tt = TranspositionTable::default();
        tt.store(1, 5.0, 4, TTFlag::Exact, None);
        tt.clear();
        assert!(tt.is_empty());
    }

    #[test]
    fn eviction_keeps_size_at_capacity() {
        let mut tt = TranspositionTable::new(4);
        for i in 0..8u64 {
            tt.store(i, i as f64, 1, TTFlag::Exact, None);
        }
        assert_eq!(tt.len(), 4);
    }
}
