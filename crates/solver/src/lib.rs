pub mod eval;
pub mod search;
pub mod tt;

pub use eval::{simple_eval, weighted_eval, Evaluator};
pub use search::Solver;
pub use tt::{TTEntry, TTFlag, TranspositionTable, DEFAULT_TT_CAPACITY};
