use congkak::{apply_move, get_final_scores, get_legal_moves, is_terminal, BoardState, Player, RuleConfig};
use log::{debug, trace};

use crate::eval::Evaluator;
use crate::tt::{position_key, TTFlag, TranspositionTable};

/// Fixed-depth alpha-beta solver over the sowing engine's game tree, with an
/// optional transposition table.
///
/// Not negamax: the search tracks a fixed `maximizing_player` (the root's
/// side to move) and maximizes or minimizes depending on whose turn it is
/// at the current node. An extra-turn move keeps the side to move
/// unchanged, so its child is also a maximizing node for the same player —
/// there is no sign flip on recursion.
pub struct Solver {
    pub rules: RuleConfig,
    pub max_depth: u32,
    pub eval_fn: Evaluator,
    tt: Option<TranspositionTable>,
    pub nodes_searched: u64,
}

impl Solver {
    pub fn new(rules: RuleConfig, max_depth: u32) -> Self {
        Self {
            rules,
            max_depth,
            eval_fn: Evaluator::default(),
            tt: Some(TranspositionTable::default()),
            nodes_searched: 0,
        }
    }

    pub fn with_eval(mut self, eval_fn: Evaluator) -> Self {
        self.eval_fn = eval_fn;
        self
    }

    pub fn with_tt(mut self, use_tt: bool) -> Self {
        self.tt = if use_tt {
            Some(TranspositionTable::default())
        } else {
            None
        };
        self
    }

    pub fn clear_tt(&mut self) {
        if let Some(tt) = &mut self.tt {
            tt.clear();
        }
    }

    /// Best pit for the board's current side to move, or `None` if the
    /// board is already terminal.
    pub fn get_best_move(&mut self, board: &BoardState) -> Option<usize> {
        self.nodes_searched = 0;
        if is_terminal(board) {
            return None;
        }
        let maximizer = board.current_player();
        let (_, mv) = self.alphabeta(board, self.max_depth, f64::NEG_INFINITY, f64::INFINITY, maximizer);
        mv
    }

    fn terminal_value(&self, board: &BoardState, maximizer: Player) -> f64 {
        let (s0, s1) = get_final_scores(board);
        let diff = if maximizer == Player::P0 {
            s0 as f64 - s1 as f64
        } else {
            s1 as f64 - s0 as f64
        };
        if diff > 0.0 {
            1000.0 + diff
        } else if diff < 0.0 {
            -1000.0 + diff
        } else {
            0.0
        }
    }

    fn alphabeta(
        &mut self,
        board: &BoardState,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizer: Player,
    ) -> (f64, Option<usize>) {
        self.nodes_searched += 1;

        if is_terminal(board) {
            return (self.terminal_value(board, maximizer), None);
        }
        if depth == 0 {
            return (self.eval_fn.evaluate(board, maximizer), None);
        }

        let key = position_key(board, maximizer);
        if let Some(tt) = &self.tt {
            if let Some((value, is_exact)) = tt.lookup(key, depth, alpha, beta) {
                trace!("tt hit key={key} depth={depth} exact={is_exact}");
                return (value, tt.get_best_move(key));
            }
        }

        let mut moves = get_legal_moves(board);
        debug_assert!(!moves.is_empty(), "non-terminal board must have legal moves");

        if let Some(tt) = &self.tt {
            if let Some(tt_move) = tt.get_best_move(key) {
                if let Some(pos) = moves.iter().position(|&m| m == tt_move) {
                    moves.swap(0, pos);
                }
            }
        }

        let is_maximizing = board.current_player() == maximizer;
        let mut best_move = moves[0];
        let value;

        if is_maximizing {
            let mut best_value = f64::NEG_INFINITY;
            for &mv in &moves {
                let child = apply_move(board, mv, &self.rules).unwrap().board;
                let (child_value, _) = self.alphabeta(&child, depth - 1, alpha, beta, maximizer);
                if child_value > best_value {
                    best_value = child_value;
                    best_move = mv;
                }
                alpha = alpha.max(best_value);
                if alpha >= beta {
                    break;
                }
            }
            value = best_value;
        } else {
            let mut best_value = f64::INFINITY;
            for &mv in &moves {
                let child = apply_move(board, mv, &self.rules).unwrap().board;
                let (child_value, _) = self.alphabeta(&child, depth - 1, alpha, beta, maximizer);
                if child_value < best_value {
                    best_value = child_value;
                    best_move = mv;
                }
                beta = beta.min(best_value);
                if alpha >= beta {
                    break;
                }
            }
            value = best_value;
        }

        if let Some(tt) = &mut self.tt {
            let flag = if is_maximizing {
                if value >= beta {
                    TTFlag::LowerBound
                } else {
                    TTFlag::Exact
                }
            } else if value <= alpha {
                TTFlag::UpperBound
            } else {
                TTFlag::Exact
            };
            debug!("tt store key={key} depth={depth} value={value} flag={flag:?}");
            tt.store(key, value, depth, flag, Some(best_move));
        }

        (value, Some(best_move))
    }
}
