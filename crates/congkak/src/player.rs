use crate::constants::{NEXT, P0_STORE, P1_STORE, PITS_PER_SIDE};
use crate::error::CongkakError;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    P0,
    P1,
}

impl Player {
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::P0 => Player::P1,
            Player::P1 => Player::P0,
        }
    }

    #[inline]
    pub fn idx(self) -> usize {
        match self {
            Player::P0 => 0,
            Player::P1 => 1,
        }
    }

    /// Pit range `(start, end)` (exclusive) owned by this player.
    #[inline]
    pub fn pit_range(self) -> (usize, usize) {
        match self {
            Player::P0 => (0, PITS_PER_SIDE),
            Player::P1 => (PITS_PER_SIDE, PITS_PER_SIDE * 2),
        }
    }

    #[inline]
    pub fn store_index(self) -> usize {
        match self {
            Player::P0 => P0_STORE,
            Player::P1 => P1_STORE,
        }
    }

    /// Whether `cell` lies in this player's own pit row.
    #[inline]
    pub fn owns_pit(self, cell: usize) -> bool {
        let (start, end) = self.pit_range();
        (start..end).contains(&cell)
    }

    /// Next cell in the sowing ring for this player, skipping the opponent's
    /// store. See `constants::NEXT`.
    #[inline]
    pub(crate) fn next_cell(self, cell: usize) -> usize {
        let n = NEXT[cell];
        if n == self.opponent().store_index() {
            NEXT[n]
        } else {
            n
        }
    }
}

impl TryFrom<usize> for Player {
    type Error = CongkakError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Player::P0),
            1 => Ok(Player::P1),
            other => Err(CongkakError::InvalidPlayer(other)),
        }
    }
}

impl From<Player> for usize {
    fn from(value: Player) -> Self {
        value.idx()
    }
}
