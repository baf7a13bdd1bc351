use congkak::{BoardState, Player};

/// Difference in store seeds: `store(player) - store(opponent)`.
pub fn simple_eval(board: &BoardState, player: Player) -> f64 {
    let opponent = player.opponent();
    let my_store = board.get_store(player.idx()).unwrap() as f64;
    let opp_store = board.get_store(opponent.idx()).unwrap() as f64;
    my_store - opp_store
}

/// Stores, plus pit seeds weighted at half value (they can still be lost to
/// capture), plus a small bonus per pit that would land its last seed
/// directly in the mover's store next turn.
pub fn weighted_eval(board: &BoardState, player: Player) -> f64 {
    let opponent = player.opponent();
    let my_store = board.get_store(player.idx()).unwrap() as f64;
    let opp_store = board.get_store(opponent.idx()).unwrap() as f64;

    let my_pits = board.player_pits(player.idx()).unwrap();
    let opp_pits = board.player_pits(opponent.idx()).unwrap();

    const PIT_WEIGHT: f64 = 0.5;
    let my_pit_total: f64 = my_pits.iter().map(|&s| s as f64).sum();
    let opp_pit_total: f64 = opp_pits.iter().map(|&s| s as f64).sum();

    let mut store_reach_bonus = 0.0;
    for (i, &seeds) in my_pits.iter().enumerate() {
        let distance_to_store = 7 - i as u8;
        if seeds == distance_to_store {
            store_reach_bonus += 0.5;
        }
    }

    (my_store - opp_store) + PIT_WEIGHT * (my_pit_total - opp_pit_total) + store_reach_bonus
}

/// Plug-in evaluation, selected at solver construction time. A tagged
/// variant rather than a trait object so the hot search path never pays for
/// dynamic dispatch on the built-in evaluators.
#[derive(Clone, Copy)]
pub enum Evaluator {
    Simple,
    Weighted,
    Custom(fn(&BoardState, Player) -> f64),
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::Weighted
    }
}

impl Evaluator {
    pub fn evaluate(&self, board: &BoardState, player: Player) -> f64 {
        match self {
            Evaluator::Simple => simple_eval(board, player),
            Evaluator::Weighted => weighted_eval(board, player),
            Evaluator::Custom(f) => f(board, player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_eval_is_store_difference() {
        let b = BoardState::from_pits(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 5, 3], 0).unwrap();
        assert_eq!(simple_eval(&b, Player::P0), 2.0);
        assert_eq!(simple_eval(&b, Player::P1), -2.0);
    }

    #[test]
    fn weighted_eval_rewards_store_reach() {
        let mut cells = [0u8; 16];
        cells[0] = 7; // distance_to_store for pit 0 is 7: exact reach bonus
        let b = BoardState::from_pits(&cells, 0).unwrap();
        let score = weighted_eval(&b, Player::P0);
        assert_eq!(score, 0.5 * 7.0 + 0.5);
    }

    #[test]
    fn evaluator_default_is_weighted() {
        let b = BoardState::initial();
        let e = Evaluator::default();
        assert_eq!(e.evaluate(&b, Player::P0), weighted_eval(&b, Player::P0));
    }

    #[test]
    fn evaluator_custom_dispatches_to_supplied_fn() {
        fn always_one(_b: &BoardState, _p: Player) -> f64 {
            1.0
        }
        let e = Evaluator::Custom(always_one);
        assert_eq!(e.evaluate(&BoardState::initial(), Player::P0), 1.0);
    }
}
