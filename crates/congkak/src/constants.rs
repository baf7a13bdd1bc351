/// Number of small pits per side (Congkak is played with seven).
pub const PITS_PER_SIDE: usize = 7;

/// Initial seeds in each small pit.
pub const STONES_PER_PIT: u8 = 7;

/// Total addressable cells: 7 pits + 1 store per side.
pub const NUM_CELLS: usize = 16;

pub const P0_STORE: usize = 14;
pub const P1_STORE: usize = 15;

/// `NEXT[cell]` is the next cell reached by descending the sowing ring from
/// `cell`, before accounting for the opponent's-store skip. The ring visits
/// both players' pits and both stores in the single cycle
/// `6,5,4,3,2,1,0,14,13,12,11,10,9,8,7,15` (back to `6`); see
/// [`crate::player::Player::next_cell`].
pub(crate) const NEXT: [usize; NUM_CELLS] = [14, 0, 1, 2, 3, 4, 5, 15, 7, 8, 9, 10, 11, 12, 13, 6];
