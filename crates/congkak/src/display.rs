use std::fmt::{self, Display, Formatter};

use crate::board::BoardState;
use crate::constants::PITS_PER_SIDE;
use crate::player::Player;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m"; // Player::P0
const MAGENTA: &str = "\x1b[35m"; // Player::P1

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Player::P0 => write!(f, "{CYAN}P0{RESET}"),
            Player::P1 => write!(f, "{MAGENTA}P1{RESET}"),
        }
    }
}

impl Display for BoardState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let p0 = self.player_pits(0).unwrap();
        let p1 = self.player_pits(1).unwrap();

        let nums_p1_plain = fmt_row_rev_plain(&p1);
        let nums_p0_plain = fmt_row_plain(&p0);
        let idx_p1_plain = fmt_idx_row_rev_plain();
        let idx_p0_plain = fmt_idx_row_plain();

        let line1_plain = format!("|    P1: [{}]     |", nums_p1_plain);
        let line1i_plain = format!("|    P1: [{}]     |", idx_p1_plain);
        let line3_plain = format!("|    P0: [{}]     |", nums_p0_plain);
        let line3i_plain = format!("|    P0: [{}]     |", idx_p0_plain);

        let target_width = line1_plain.len();
        debug_assert_eq!(line3_plain.len(), target_width);
        debug_assert_eq!(line1i_plain.len(), target_width);
        debug_assert_eq!(line3i_plain.len(), target_width);

        let store_p1_plain = format!("[P1:{:>2}]", self.get_store(1).unwrap());
        let store_p0_plain = format!("[P0:{:>2}]", self.get_store(0).unwrap());

        let inside_width = target_width - 2;
        let left_pad = 2usize;
        let right_pad = 2usize;
        let core_min_plain = left_pad + store_p1_plain.len() + store_p0_plain.len() + right_pad;
        let gap = inside_width.saturating_sub(core_min_plain);

        let label_p0_col = if self.current_player() == Player::P0 {
            format!("{BOLD}{CYAN}P0{RESET}")
        } else {
            format!("{CYAN}P0{RESET}")
        };
        let label_p1_col = if self.current_player() == Player::P1 {
            format!("{BOLD}{MAGENTA}P1{RESET}")
        } else {
            format!("{MAGENTA}P1{RESET}")
        };

        let nums_p1_col = fmt_row_rev_col(&p1, MAGENTA);
        let nums_p0_col = fmt_row_col(&p0, CYAN);
        let idx_p1_col = fmt_idx_row_rev_col();
        let idx_p0_col = fmt_idx_row_col();

        let line1_col = format!("|    {label_p1_col}: [{}]     |", nums_p1_col);
        let line1i_col = format!("|    {label_p1_col}: [{}]     |", idx_p1_col);
        let line3_col = format!("|    {label_p0_col}: [{}]     |", nums_p0_col);
        let line3i_col = format!("|    {label_p0_col}: [{}]     |", idx_p0_col);

        let store_p1_col = format!("{MAGENTA}[P1:{:>2}]{RESET}", self.get_store(1).unwrap());
        let store_p0_col = format!("{CYAN}[P0:{:>2}]{RESET}", self.get_store(0).unwrap());

        let line2_col = format!(
            "|{}{}{}{}{}|",
            " ".repeat(left_pad),
            store_p1_col,
            " ".repeat(gap),
            store_p0_col,
            " ".repeat(right_pad),
        );

        writeln!(f, "{line1_col}")?;
        writeln!(f, "{line1i_col}")?;
        writeln!(f, "{line2_col}")?;
        writeln!(f, "{line3_col}")?;
        writeln!(f, "{line3i_col}")
    }
}

fn fmt_row_plain(pits: &[u8; PITS_PER_SIDE]) -> String {
    let mut s = String::new();
    for (i, v) in pits.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        s.push_str(&format!("{:>2}", v));
    }
    s
}

fn fmt_row_rev_plain(pits: &[u8; PITS_PER_SIDE]) -> String {
    let mut s = String::new();
    for (k, i) in (0..PITS_PER_SIDE).rev().enumerate() {
        if k > 0 {
            s.push(' ');
        }
        s.push_str(&format!("{:>2}", pits[i]));
    }
    s
}

fn fmt_row_col(pits: &[u8; PITS_PER_SIDE], color: &str) -> String {
    let mut s = String::new();
    for (i, v) in pits.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        s.push_str(&format!("{color}{:>2}{RESET}", v));
    }
    s
}

fn fmt_row_rev_col(pits: &[u8; PITS_PER_SIDE], color: &str) -> String {
    let mut s = String::new();
    for (k, i) in (0..PITS_PER_SIDE).rev().enumerate() {
        if k > 0 {
            s.push(' ');
        }
        s.push_str(&format!("{color}{:>2}{RESET}", pits[i]));
    }
    s
}

fn fmt_idx_row_plain() -> String {
    let mut s = String::new();
    for i in 0..PITS_PER_SIDE {
        if i > 0 {
            s.push(' ');
        }
        s.push_str(&format!("{:>2}", i));
    }
    s
}
fn fmt_idx_row_col() -> String {
    let mut s = String::new();
    for i in 0..PITS_PER_SIDE {
        if i > 0 {
            s.push(' ');
        }
        s.push_str(&format!("{DIM}{:>2}{RESET}", i));
    }
    s
}

fn fmt_idx_row_rev_plain() -> String {
    let mut s = String::new();
    for (k, i) in (0..PITS_PER_SIDE).rev().enumerate() {
        if k > 0 {
            s.push(' ');
        }
        s.push_str(&format!("{:>2}", i));
    }
    s
}
fn fmt_idx_row_rev_col() -> String {
    let mut s = String::new();
    for (k, i) in (0..PITS_PER_SIDE).rev().enumerate() {
        if k > 0 {
            s.push(' ');
        }
        s.push_str(&format!("{DIM}{:>2}{RESET}", i));
    }
    s
}
