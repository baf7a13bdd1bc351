//! Congkak (Mancala-family) rules core for game-tree search.
//!
//! Public API surface:
//! - [`BoardState`]: immutable game position
//! - [`apply_move`] / [`apply_simultaneous_moves`]: the sowing engine
//! - [`SimultaneousMoveState`]: submission protocol for simultaneous turns
//! - [`get_legal_moves`], [`is_terminal`], [`get_winner`], [`get_final_scores`]
//! - [`random_playout`], [`batch_random_playouts`], [`perft`]
//!
//! Rules are parameterized by [`RuleConfig`] rather than fixed at compile time.

mod board;
mod constants;
mod display;
mod error;
mod player;
mod playout;
mod rules;
mod simultaneous;
mod sow;

pub use board::BoardState;
pub use constants::{PITS_PER_SIDE, STONES_PER_PIT};
pub use error::CongkakError;
pub use player::Player;
pub use playout::{batch_random_playouts, perft, random_playout};
pub use rules::{LeaderSelection, RuleConfig, StartMode};
pub use simultaneous::{apply_simultaneous_moves, SimultaneousMoveState, SimultaneousPhase};
pub use sow::{apply_move, get_final_scores, get_legal_moves, get_winner, is_terminal, MoveResult};
