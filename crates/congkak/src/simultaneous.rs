use crate::board::BoardState;
use crate::constants::NUM_CELLS;
use crate::error::CongkakError;
use crate::player::Player;
use crate::rules::RuleConfig;
use crate::sow::MoveResult;

/// Where a [`SimultaneousMoveState`] stands in its submission protocol.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SimultaneousPhase {
    AwaitingMoves,
    AwaitingFollower,
    ReadyToExecute,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
enum SimMode {
    Independent,
    LeaderFollower(Player),
}

/// Cooperative, single-threaded state machine collecting both players' pit
/// choices before a simultaneous round executes. Not re-entrant: callers
/// must serialize `submit_move` calls on a given instance.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SimultaneousMoveState {
    mode: SimMode,
    phase: SimultaneousPhase,
    p0_move: Option<usize>,
    p1_move: Option<usize>,
}

impl SimultaneousMoveState {
    /// Both players may submit concurrently, in any order.
    pub fn for_independent() -> Self {
        Self {
            mode: SimMode::Independent,
            phase: SimultaneousPhase::AwaitingMoves,
            p0_move: None,
            p1_move: None,
        }
    }

    /// `leader` must submit before the other player is allowed to.
    pub fn for_leader_follower(leader: Player) -> Self {
        Self {
            mode: SimMode::LeaderFollower(leader),
            phase: SimultaneousPhase::AwaitingMoves,
            p0_move: None,
            p1_move: None,
        }
    }

    pub fn phase(&self) -> SimultaneousPhase {
        self.phase
    }

    pub fn leader(&self) -> Option<Player> {
        match self.mode {
            SimMode::LeaderFollower(leader) => Some(leader),
            SimMode::Independent => None,
        }
    }

    fn move_of(&self, player: Player) -> Option<usize> {
        match player {
            Player::P0 => self.p0_move,
            Player::P1 => self.p1_move,
        }
    }

    /// Whether `player` may submit a move right now.
    pub fn can_submit(&self, player: Player) -> bool {
        if self.phase == SimultaneousPhase::ReadyToExecute || self.move_of(player).is_some() {
            return false;
        }
        match self.mode {
            SimMode::Independent => true,
            SimMode::LeaderFollower(leader) => {
                if player == leader {
                    self.phase == SimultaneousPhase::AwaitingMoves
                } else {
                    self.phase == SimultaneousPhase::AwaitingFollower
                }
            }
        }
    }

    /// Records `player`'s chosen pit and advances the phase.
    ///
    /// # Errors
    /// [`CongkakError::IllegalSubmission`] if `can_submit(player)` is false.
    pub fn submit_move(&mut self, player: Player, pit: usize) -> Result<(), CongkakError> {
        if !self.can_submit(player) {
            log::debug!("rejecting submission: player={player:?} pit={pit} phase={:?}", self.phase);
            return Err(CongkakError::IllegalSubmission { player });
        }
        match player {
            Player::P0 => self.p0_move = Some(pit),
            Player::P1 => self.p1_move = Some(pit),
        }

        self.phase = if self.p0_move.is_some() && self.p1_move.is_some() {
            SimultaneousPhase::ReadyToExecute
        } else if let SimMode::LeaderFollower(leader) = self.mode {
            if player == leader {
                SimultaneousPhase::AwaitingFollower
            } else {
                self.phase
            }
        } else {
            self.phase
        };
        Ok(())
    }

    /// The leader's submitted pit, if any (always `None` in Independent mode
    /// before the leader has submitted, and always `None` when there is no
    /// leader).
    pub fn get_leader_move(&self) -> Option<usize> {
        self.leader().and_then(|l| self.move_of(l))
    }

    /// Both submitted pits, once `phase() == ReadyToExecute`.
    pub fn moves(&self) -> Option<(usize, usize)> {
        match (self.p0_move, self.p1_move) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }
}

/// One player's half of a simultaneous round: a signed delta over the 16
/// cells, seeds still in hand, and the sowing cursor. Never committed to a
/// real board mid-round — only `base + delta_p0 + delta_p1` is meaningful.
struct SimPlayer {
    delta: [i32; NUM_CELLS],
    hand: u8,
    cursor: usize,
    has_looped: bool,
    done: bool,
    extra_turn: bool,
    captured: u32,
}

impl SimPlayer {
    fn new(base: &BoardState, pit: usize) -> Self {
        let mut delta = [0i32; NUM_CELLS];
        delta[pit] = -(base.cell(pit) as i32);
        Self {
            delta,
            hand: base.cell(pit),
            cursor: pit,
            has_looped: false,
            done: false,
            extra_turn: false,
            captured: 0,
        }
    }

    fn step(&mut self, player: Player) {
        self.cursor = player.next_cell(self.cursor);
        self.delta[self.cursor] += 1;
        self.hand -= 1;
        if self.cursor == player.store_index() {
            self.has_looped = true;
        }
    }

    fn combined(&self, base: &BoardState, other_delta: &[i32; NUM_CELLS], cell: usize) -> i32 {
        base.cell(cell) as i32 + self.delta[cell] + other_delta[cell]
    }

    /// Adjusts this player's delta so the combined count at `cell` reads 0.
    fn zero_via_delta(&mut self, base: &BoardState, other_delta: &[i32; NUM_CELLS], cell: usize) {
        self.delta[cell] = -(base.cell(cell) as i32) - other_delta[cell];
    }

    /// Evaluates the terminal drop rules for this player's cursor, using the
    /// combined board as it stood right after both players stepped this
    /// round (`other_delta` is a snapshot from that moment, not live).
    fn resolve(
        &mut self,
        player: Player,
        base: &BoardState,
        other_delta: &[i32; NUM_CELLS],
        rules: &RuleConfig,
    ) {
        let cell = self.cursor;
        if cell == player.store_index() {
            self.extra_turn = true;
            self.done = true;
            return;
        }

        let combined = self.combined(base, other_delta, cell);
        if combined > 1 {
            self.hand = combined as u8;
            self.zero_via_delta(base, other_delta, cell);
            return;
        }

        if combined == 1 && player.owns_pit(cell) {
            if rules.capture_enabled && (!rules.capture_requires_loop || self.has_looped) {
                let opposite = 13 - cell;
                let opp_combined = self.combined(base, other_delta, opposite);
                if opp_combined > 0 {
                    let captured = opp_combined + 1;
                    self.delta[player.store_index()] += captured;
                    self.zero_via_delta(base, other_delta, cell);
                    self.zero_via_delta(base, other_delta, opposite);
                    self.captured += captured as u32;
                }
            }
        } else if combined == 1 && rules.forfeit_enabled {
            self.zero_via_delta(base, other_delta, cell);
            self.delta[player.opponent().store_index()] += 1;
        }

        self.done = true;
    }
}

/// Executes both players' moves from the same base board in lock-step,
/// combining their effects via `base + delta_p0 + delta_p1` at every relay,
/// capture, and forfeit decision point.
///
/// # Errors
/// [`CongkakError::IllegalMove`] if either pit is not in its player's range,
/// or is empty.
pub fn apply_simultaneous_moves(
    base: &BoardState,
    p0_pit: usize,
    p1_pit: usize,
    rules: &RuleConfig,
) -> Result<MoveResult, CongkakError> {
    let (s0, e0) = Player::P0.pit_range();
    if p0_pit < s0 || p0_pit >= e0 || base.cell(p0_pit) == 0 {
        return Err(CongkakError::IllegalMove {
            pit: p0_pit,
            player: Player::P0,
        });
    }
    let (s1, e1) = Player::P1.pit_range();
    if p1_pit < s1 || p1_pit >= e1 || base.cell(p1_pit) == 0 {
        return Err(CongkakError::IllegalMove {
            pit: p1_pit,
            player: Player::P1,
        });
    }

    let mut p0 = SimPlayer::new(base, p0_pit);
    let mut p1 = SimPlayer::new(base, p1_pit);

    while !p0.done || !p1.done {
        if !p0.done {
            p0.step(Player::P0);
        }
        if !p1.done {
            p1.step(Player::P1);
        }

        let p0_delta_snapshot = p0.delta;
        let p1_delta_snapshot = p1.delta;

        if !p0.done && p0.hand == 0 {
            p0.resolve(Player::P0, base, &p1_delta_snapshot, rules);
        }
        if !p1.done && p1.hand == 0 {
            p1.resolve(Player::P1, base, &p0_delta_snapshot, rules);
        }
    }

    let mut cells = [0u8; NUM_CELLS];
    for (i, cell) in cells.iter_mut().enumerate() {
        let combined = base.cell(i) as i32 + p0.delta[i] + p1.delta[i];
        debug_assert!(combined >= 0);
        *cell = combined.max(0) as u8;
    }

    let side = match (p0.extra_turn, p1.extra_turn) {
        (true, false) => Player::P0,
        (false, true) => Player::P1,
        _ => Player::P0,
    };

    Ok(MoveResult {
        board: BoardState { cells, side },
        captured: p0.captured + p1.captured,
        extra_turn: p0.extra_turn || p1.extra_turn,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_board() -> BoardState {
        BoardState::from_pits(&[0u8; 16], 0).unwrap()
    }

    #[test]
    fn independent_state_machine_allows_any_order() {
        let mut s = SimultaneousMoveState::for_independent();
        assert!(s.can_submit(Player::P0));
        assert!(s.can_submit(Player::P1));
        s.submit_move(Player::P1, 10).unwrap();
        assert_eq!(s.phase(), SimultaneousPhase::AwaitingMoves);
        assert!(!s.can_submit(Player::P1));
        s.submit_move(Player::P0, 2).unwrap();
        assert_eq!(s.phase(), SimultaneousPhase::ReadyToExecute);
        assert_eq!(s.moves(), Some((2, 10)));
    }

    #[test]
    fn leader_follower_blocks_follower_until_leader_submits() {
        let mut s = SimultaneousMoveState::for_leader_follower(Player::P0);
        assert!(s.can_submit(Player::P0));
        assert!(!s.can_submit(Player::P1));
        assert_eq!(
            s.submit_move(Player::P1, 10),
            Err(CongkakError::IllegalSubmission { player: Player::P1 })
        );
        s.submit_move(Player::P0, 2).unwrap();
        assert_eq!(s.phase(), SimultaneousPhase::AwaitingFollower);
        assert_eq!(s.get_leader_move(), Some(2));
        assert!(s.can_submit(Player::P1));
        s.submit_move(Player::P1, 10).unwrap();
        assert_eq!(s.phase(), SimultaneousPhase::ReadyToExecute);
    }

    #[test]
    fn independent_moves_combine_without_interaction() {
        let mut b = empty_board();
        b.cells[0] = 1;
        b.cells[13] = 1;
        let r = apply_simultaneous_moves(&b, 0, 13, &RuleConfig::default()).unwrap();
        assert_eq!(r.board.cell(14), 1);
        assert_eq!(r.board.cell(12), 1);
        assert_eq!(r.captured, 0);
        assert_eq!(r.board.current_player(), Player::P0);
        assert_eq!(r.board.total_seeds(), 2);
    }

    #[test]
    fn simultaneous_neither_extra_turn_returns_to_p0() {
        let mut b = empty_board();
        b.cells[1] = 1;
        b.cells[8] = 1;
        let r = apply_simultaneous_moves(&b, 1, 8, &RuleConfig::default()).unwrap();
        assert!(!r.extra_turn);
        assert_eq!(r.board.current_player(), Player::P0);
    }

    #[test]
    fn simultaneous_both_extra_turn_returns_to_p0() {
        let mut b = empty_board();
        b.cells[0] = 1;
        b.cells[7] = 1;
        let r = apply_simultaneous_moves(&b, 0, 7, &RuleConfig::default()).unwrap();
        assert!(r.extra_turn);
        assert_eq!(r.board.cell(14), 1);
        assert_eq!(r.board.cell(15), 1);
        assert_eq!(r.board.current_player(), Player::P0);
    }

    #[test]
    fn simultaneous_single_extra_turn_keeps_that_player() {
        let mut b = empty_board();
        b.cells[0] = 1;
        b.cells[8] = 1;
        let r = apply_simultaneous_moves(&b, 0, 8, &RuleConfig::default()).unwrap();
        assert!(r.board.cell(14) >= 1);
        assert_eq!(r.board.current_player(), Player::P0);
    }

    #[test]
    fn seed_conservation_holds() {
        let b = BoardState::initial();
        let r = apply_simultaneous_moves(&b, 3, 10, &RuleConfig::default()).unwrap();
        assert_eq!(r.board.total_seeds(), b.total_seeds());
    }

    #[test]
    fn rejects_illegal_pit() {
        let b = BoardState::initial();
        assert_eq!(
            apply_simultaneous_moves(&b, 9, 10, &RuleConfig::default()),
            Err(CongkakError::IllegalMove {
                pit: 9,
                player: Player::P0
            })
        );
        assert_eq!(
            apply_simultaneous_moves(&b, 3, 2, &RuleConfig::default()),
            Err(CongkakError::IllegalMove {
                pit: 2,
                player: Player::P1
            })
        );
    }
}
