use crate::constants::{NUM_CELLS, PITS_PER_SIDE, STONES_PER_PIT};
use crate::error::CongkakError;
use crate::player::Player;

/// Immutable Congkak position: 16 cells (seven pits and a store per side)
/// and the side to move. Sowing never mutates a `BoardState` in place; every
/// move produces a new one.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct BoardState {
    pub(crate) cells: [u8; NUM_CELLS],
    pub(crate) side: Player,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial()
    }
}

impl BoardState {
    /// Standard initial position: seven seeds in every pit, empty stores,
    /// Player 0 to move.
    pub fn initial() -> Self {
        let mut cells = [STONES_PER_PIT; NUM_CELLS];
        cells[14] = 0;
        cells[15] = 0;
        Self {
            cells,
            side: Player::P0,
        }
    }

    /// Builds a position from an explicit 16-cell vector and side to move.
    pub fn from_pits(cells: &[u8], side: usize) -> Result<Self, CongkakError> {
        let cells: [u8; NUM_CELLS] = cells
            .try_into()
            .map_err(|_| CongkakError::WrongCellCount(cells.len()))?;
        let side = match side {
            0 => Player::P0,
            1 => Player::P1,
            other => return Err(CongkakError::InvalidSide(other)),
        };
        Ok(Self { cells, side })
    }

    /// The full 16-cell vector.
    #[inline]
    pub fn cells(&self) -> &[u8; NUM_CELLS] {
        &self.cells
    }

    #[inline]
    pub fn cell(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Side to move.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.side
    }

    /// Pit range `(start, end)` (exclusive) for `player` (0 or 1).
    pub fn player_pit_range(player: usize) -> Result<(usize, usize), CongkakError> {
        Ok(Player::try_from(player)?.pit_range())
    }

    /// Store cell index (14 or 15) for `player`.
    pub fn player_store_index(player: usize) -> Result<usize, CongkakError> {
        Ok(Player::try_from(player)?.store_index())
    }

    /// The seven pit counts belonging to `player`, in ascending index order.
    pub fn player_pits(&self, player: usize) -> Result<[u8; PITS_PER_SIDE], CongkakError> {
        let (start, end) = Self::player_pit_range(player)?;
        let mut out = [0u8; PITS_PER_SIDE];
        out.copy_from_slice(&self.cells[start..end]);
        Ok(out)
    }

    /// Seeds currently in `player`'s store.
    pub fn get_store(&self, player: usize) -> Result<u8, CongkakError> {
        Ok(self.cells[Self::player_store_index(player)?])
    }

    /// Sum of all 16 cells. Conserved by every legal sowing operation.
    pub fn total_seeds(&self) -> u32 {
        self.cells.iter().map(|&c| c as u32).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_has_seven_seeds_per_pit() {
        let b = BoardState::initial();
        for i in 0..7 {
            assert_eq!(b.cell(i), 7);
            assert_eq!(b.cell(i + 7), 7);
        }
        assert_eq!(b.cell(14), 0);
        assert_eq!(b.cell(15), 0);
        assert_eq!(b.current_player(), Player::P0);
    }

    #[test]
    fn total_seeds_matches_98() {
        assert_eq!(BoardState::initial().total_seeds(), 98);
    }

    #[test]
    fn equal_boards_hash_equal() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let a = BoardState::initial();
        let b = BoardState::initial();
        assert_eq!(a, b);

        let mut ha = DefaultHasher::new();
        a.hash(&mut ha);
        let mut hb = DefaultHasher::new();
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
    }

    #[test]
    fn player_pits_and_ranges() {
        let b = BoardState::initial();
        assert_eq!(b.player_pits(0).unwrap(), [7; 7]);
        assert_eq!(b.player_pits(1).unwrap(), [7; 7]);
        assert_eq!(BoardState::player_store_index(0).unwrap(), 14);
        assert_eq!(BoardState::player_store_index(1).unwrap(), 15);
        assert_eq!(BoardState::player_pit_range(0).unwrap(), (0, 7));
        assert_eq!(BoardState::player_pit_range(1).unwrap(), (7, 14));
    }

    #[test]
    fn from_pits_round_trips() {
        let pits: Vec<u8> = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 50, 60];
        let b = BoardState::from_pits(&pits, 1).unwrap();
        assert_eq!(b.cells().to_vec(), pits);
        assert_eq!(b.current_player(), Player::P1);
    }

    #[test]
    fn from_pits_rejects_wrong_length() {
        let pits = vec![0u8; 15];
        assert_eq!(
            BoardState::from_pits(&pits, 0),
            Err(CongkakError::WrongCellCount(15))
        );
    }

    #[test]
    fn from_pits_rejects_invalid_side() {
        let pits = vec![0u8; 16];
        assert_eq!(
            BoardState::from_pits(&pits, 2),
            Err(CongkakError::InvalidSide(2))
        );
    }
}
