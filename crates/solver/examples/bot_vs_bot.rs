//! Watch two alpha-beta bots play Congkak. No asserts; prints boards & final result.

use congkak::{apply_move, get_final_scores, get_winner, is_terminal, BoardState, Player, RuleConfig};
use solver::Solver;

fn main() {
    let mut b = BoardState::initial();
    let rules = RuleConfig::default();
    let depth = 8;

    println!("== Bot vs Bot ==");
    println!("{b}");

    while !is_terminal(&b) {
        let to_move = b.current_player();
        let mut solver = Solver::new(rules, depth);
        let Some(pit) = solver.get_best_move(&b) else {
            println!("No legal moves. Stalemate?");
            break;
        };
        println!(">> {to_move} plays pit index {pit} ({} nodes)", solver.nodes_searched);
        b = apply_move(&b, pit, &rules).expect("legal by construction").board;
        println!("{b}");
    }

    let (s0, s1) = get_final_scores(&b);
    match get_winner(&b) {
        Some(p) => println!("Result: {p} wins.  score P0={s0}, P1={s1}"),
        None => println!("Result: Draw.      score P0={s0}, P1={s1}"),
    }
}
