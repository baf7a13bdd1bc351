use crate::board::BoardState;
use crate::error::CongkakError;
use crate::player::Player;
use crate::rules::RuleConfig;

/// Outcome of a single `apply_move` call: the resulting board, how many
/// seeds were captured (0 if none), and whether the sower earned another
/// turn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct MoveResult {
    pub board: BoardState,
    pub captured: u32,
    pub extra_turn: bool,
}

/// Applies a single-player sowing move: pickup, cyclic sow with own-store
/// inclusion and opponent-store skip, relay, and the capture/forfeit/extra
/// turn terminal outcomes.
///
/// # Errors
/// [`CongkakError::IllegalMove`] if `pit` is not in the current player's pit
/// range, or the pit is empty.
pub fn apply_move(
    board: &BoardState,
    pit: usize,
    rules: &RuleConfig,
) -> Result<MoveResult, CongkakError> {
    let mover = board.current_player();
    let (start, end) = mover.pit_range();
    if pit < start || pit >= end || board.cell(pit) == 0 {
        return Err(CongkakError::IllegalMove { pit, player: mover });
    }

    let mut cells = *board.cells();
    let mut hand = cells[pit];
    cells[pit] = 0;
    let mut cursor = pit;
    let mut has_looped = false;
    let mut captured_total: u32 = 0;
    let mut extra_turn = false;

    loop {
        while hand > 0 {
            cursor = mover.next_cell(cursor);
            cells[cursor] += 1;
            hand -= 1;
            if cursor == mover.store_index() {
                has_looped = true;
            }
        }

        if cursor == mover.store_index() {
            extra_turn = true;
            break;
        }

        let landed = cells[cursor];
        if landed > 1 {
            // relay: pick the pit back up and keep sowing from here
            hand = landed;
            cells[cursor] = 0;
            continue;
        }

        // landed == 1: this pit was empty before the last seed dropped
        if mover.owns_pit(cursor) {
            if rules.capture_enabled && (!rules.capture_requires_loop || has_looped) {
                let opposite = 13 - cursor;
                if cells[opposite] > 0 {
                    let captured = cells[opposite] + 1;
                    cells[mover.store_index()] += captured;
                    cells[cursor] = 0;
                    cells[opposite] = 0;
                    captured_total += captured as u32;
                }
            }
        } else if rules.forfeit_enabled {
            cells[cursor] = 0;
            cells[mover.opponent().store_index()] += 1;
        }
        break;
    }

    let side = if extra_turn { mover } else { mover.opponent() };

    Ok(MoveResult {
        board: BoardState { cells, side },
        captured: captured_total,
        extra_turn,
    })
}

/// Pits of the side to move with a non-zero count, in ascending index order.
pub fn get_legal_moves(board: &BoardState) -> Vec<usize> {
    let (start, end) = board.current_player().pit_range();
    (start..end).filter(|&i| board.cell(i) > 0).collect()
}

/// True iff the side to move has no non-empty pit.
pub fn is_terminal(board: &BoardState) -> bool {
    let (start, end) = board.current_player().pit_range();
    (start..end).all(|i| board.cell(i) == 0)
}

/// Each side's store plus whatever remains in their own pit row.
pub fn get_final_scores(board: &BoardState) -> (u32, u32) {
    let score = |player: Player| -> u32 {
        let (start, end) = player.pit_range();
        let pits: u32 = board.cells()[start..end].iter().map(|&c| c as u32).sum();
        pits + board.cell(player.store_index()) as u32
    };
    (score(Player::P0), score(Player::P1))
}

/// Winner by final score; `None` on a tie.
pub fn get_winner(board: &BoardState) -> Option<Player> {
    let (s0, s1) = get_final_scores(board);
    match s0.cmp(&s1) {
        std::cmp::Ordering::Greater => Some(Player::P0),
        std::cmp::Ordering::Less => Some(Player::P1),
        std::cmp::Ordering::Equal => None,
    }
}
