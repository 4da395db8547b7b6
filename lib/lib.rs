/// Isolation domain types.
pub mod game;
/// Heuristic position evaluation.
pub mod eval;
/// Minimax searching algorithm.
pub mod search;
