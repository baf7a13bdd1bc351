use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::board::BoardState;
use crate::rules::RuleConfig;
use crate::sow::{apply_move, get_final_scores, get_legal_moves, is_terminal};

/// Plays uniformly random legal moves from `board` until terminal, returning
/// the final board.
pub fn random_playout<R: Rng + ?Sized>(
    board: &BoardState,
    rules: &RuleConfig,
    rng: &mut R,
) -> BoardState {
    let mut state = *board;
    while !is_terminal(&state) {
        let moves = get_legal_moves(&state);
        let &pit = moves
            .choose(rng)
            .expect("non-terminal board must have a legal move");
        state = apply_move(&state, pit, rules)
            .expect("pit drawn from get_legal_moves is always legal")
            .board;
    }
    state
}

/// Mixes a root seed with a playout index into an independent 64-bit seed,
/// so results are reproducible regardless of worker count or scheduling.
fn mix_seed(seed: u64, index: u64) -> u64 {
    // splitmix64 finalizer
    let mut z = seed.wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Runs `n` independent random playouts from `board` in parallel, returning
/// each playout's final `(p0_score, p1_score)` indexed by playout number.
/// Each playout seeds its own `SmallRng` from `(seed, index)`, so the result
/// vector is identical across runs regardless of thread scheduling.
pub fn batch_random_playouts(
    board: &BoardState,
    rules: &RuleConfig,
    n: u64,
    seed: u64,
) -> Vec<(u32, u32)> {
    (0..n)
        .into_par_iter()
        .map(|index| {
            let mut rng = SmallRng::seed_from_u64(mix_seed(seed, index));
            let finished = random_playout(board, rules, &mut rng);
            get_final_scores(&finished)
        })
        .collect()
}

/// Counts leaf boards reachable at exactly `depth` sequential moves from
/// `board`. Used only as an invariant check; not a search primitive.
pub fn perft(board: &BoardState, rules: &RuleConfig, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if is_terminal(board) {
        return 1;
    }
    get_legal_moves(board)
        .into_iter()
        .map(|pit| {
            let child = apply_move(board, pit, rules).unwrap().board;
            perft(&child, rules, depth - 1)
        })
        .sum()
}
