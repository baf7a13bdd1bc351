use thiserror::Error;

use crate::player::Player;

/// Precondition violations per the core's error taxonomy: these signal a bug
/// in the caller (an unvalidated move, a malformed board, an out-of-protocol
/// submission), never a recoverable runtime condition.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CongkakError {
    #[error("board must have exactly 16 cells, got {0}")]
    WrongCellCount(usize),

    #[error("side to move must be 0 or 1, got {0}")]
    InvalidSide(usize),

    #[error("player index must be 0 or 1, got {0}")]
    InvalidPlayer(usize),

    #[error("pit {pit} is not a legal move for player {player:?}")]
    IllegalMove { pit: usize, player: Player },

    #[error("player {player:?} cannot submit a move in the current simultaneous phase")]
    IllegalSubmission { player: Player },
}
