//! Time-bounded adversarial search for chained-capture board games.
//!
//! Iterative-deepening minimax with alpha-beta pruning, a Zobrist-keyed
//! transposition table, whole-turn move-chain enumeration, and cooperative
//! deadline cancellation. Game rules stay behind the `oust-core` boundary
//! trait; this crate never decides legality itself.

pub mod chains;
pub mod eval;
pub mod search;
pub mod zobrist;

#[cfg(test)]
mod testutil;

pub use chains::{apply_chain, enumerate_turns, first_chain};
pub use eval::{DRAW, EvalWeights, Evaluator, LOSS, WIN, WeightedEvaluator};
pub use search::control::DeadlineHandle;
pub use search::tt::{Bound, Replacement, TranspositionTable, TtEntry};
pub use search::{EngineError, MAX_DEPTH, SearchConfig, SearchReport, Searcher};
pub use zobrist::fingerprint;
