//! Play against an alpha-beta bot on the terminal. No asserts; uses stdin.

use std::io::{self, Write};

use congkak::{apply_move, get_final_scores, get_legal_moves, get_winner, is_terminal, BoardState, Player, RuleConfig};
use solver::Solver;

fn main() {
    let mut b = BoardState::initial();
    let rules = RuleConfig::default();

    println!("== Play vs AI ==");
    println!("Choose your side: P0 or P1 (default: P0)");
    print!("> ");
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    let you = match buf.trim() {
        "P1" | "p1" | "1" => Player::P1,
        _ => Player::P0,
    };
    let ai = you.opponent();
    let depth = 8;

    println!("You are {you}. AI is {ai}.");
    println!("{b}");

    while !is_terminal(&b) {
        if b.current_player() == you {
            let legal = get_legal_moves(&b);
            if legal.is_empty() {
                println!("No legal moves for you. Skipping…");
            } else {
                loop {
                    print!("Your move (pit index {:?}): ", legal);
                    io::stdout().flush().ok();
                    buf.clear();
                    io::stdin().read_line(&mut buf).ok();
                    if let Ok(pit) = buf.trim().parse::<usize>() {
                        if let Ok(result) = apply_move(&b, pit, &rules) {
                            b = result.board;
                            break;
                        }
                    }
                    println!("Invalid. Try again.");
                }
            }
            println!("{b}");
        } else {
            let mut solver = Solver::new(rules, depth);
            let Some(pit) = solver.get_best_move(&b) else {
                println!("AI has no legal move. Skipping…");
                continue;
            };
            println!("AI ({ai}) plays pit index {pit}");
            b = apply_move(&b, pit, &rules).expect("AI chose legal move").board;
            println!("{b}");
        }
    }

    let (s0, s1) = get_final_scores(&b);
    match get_winner(&b) {
        Some(p) if p == you => println!("You win!  score P0={s0}, P1={s1}"),
        Some(_) => println!("AI wins.   score P0={s0}, P1={s1}"),
        None => println!("Draw.      score P0={s0}, P1={s1}"),
    }
}
