use congkak::{apply_move, get_final_scores, get_legal_moves, is_terminal, BoardState, RuleConfig};
use rand::seq::IndexedRandom;

fn main() {
    let mut rng = rand::rng();
    let rules = RuleConfig::default();

    let mut s = BoardState::initial();
    println!("Initial:\n{}\n", s);

    for step in 0..512 {
        if is_terminal(&s) {
            let (p0, p1) = get_final_scores(&s);
            println!("Final scores: P0={p0} P1={p1}\n{}", s);
            break;
        }

        let who = s.current_player();
        let moves = get_legal_moves(&s);
        let &pit = moves.choose(&mut rng).unwrap();
        let result = apply_move(&s, pit, &rules).unwrap();

        println!("Step {step}: {} plays pit {pit}\n{}\n", who, result.board);

        s = result.board;
    }
}
