//! Iterative-deepening driver over the minimax search.

pub mod control;
pub mod minimax;
pub mod tt;

use std::time::Duration;

use tracing::debug;

use oust_core::{GameState, MoveChain};

use crate::chains::first_chain;
use crate::eval::{EvalWeights, Evaluator, WIN, WeightedEvaluator};
use control::{DeadlineHandle, SearchControl};
use minimax::{SearchContext, minimax};
use tt::{Replacement, TranspositionTable};

/// Ceiling on the iterative-deepening depth.
pub const MAX_DEPTH: u8 = 50;

/// Errors surfaced by [`Searcher::search`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The position offers no legal elementary move at all.
    #[error("no legal move in the given position")]
    NoLegalMoves,
}

/// Engine configuration.
///
/// The search variants (fixed depth vs. iterative deepening, cached vs.
/// uncached, quiet vs. perturbed evaluation) are all selected here rather
/// than through separate engine types.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Display name reported by [`Searcher::identify`].
    pub name: String,
    /// Cache completed node expansions in the transposition table.
    pub use_transposition_table: bool,
    /// Deepen one ply at a time instead of a single fixed-depth pass.
    pub iterative_deepening: bool,
    /// Depth ceiling.
    pub max_depth: u8,
    /// Wall-clock budget per call; `None` relies solely on external
    /// deadline notification.
    pub time_budget: Option<Duration>,
    /// Heuristic weights for the shipped evaluator.
    pub weights: EvalWeights,
    /// Transposition-table replacement policy.
    pub tt_replacement: Replacement,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            name: "oust-minimax".to_string(),
            use_transposition_table: true,
            iterative_deepening: true,
            max_depth: MAX_DEPTH,
            time_budget: None,
            weights: EvalWeights::default(),
            tt_replacement: Replacement::default(),
        }
    }
}

/// Outcome of a completed search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport<M> {
    /// The chosen complete turn.
    pub chain: MoveChain<M>,
    /// Deepest fully completed iteration; 0 when only the fallback ran.
    pub depth: u8,
    /// Nodes visited across all iterations of this call.
    pub nodes: u64,
    /// Value of the chosen turn from the mover's point of view; 0 for the
    /// fallback. Diagnostics only.
    pub value: i32,
}

/// Iterative-deepening searcher with a per-call transposition table.
///
/// One `Searcher` serves one game seat: the table and stop flag are private
/// to it, and `&mut self` keeps calls from overlapping.
pub struct Searcher<E = WeightedEvaluator> {
    config: SearchConfig,
    evaluator: E,
    control: SearchControl,
    tt: TranspositionTable,
}

impl Searcher<WeightedEvaluator> {
    /// Searcher with the shipped weighted evaluator.
    pub fn new(config: SearchConfig) -> Self {
        let evaluator = WeightedEvaluator::new(config.weights);
        Self::with_evaluator(config, evaluator)
    }
}

impl<E> Searcher<E> {
    /// Searcher with a caller-provided evaluator.
    pub fn with_evaluator(config: SearchConfig, evaluator: E) -> Self {
        let control = match config.time_budget {
            Some(budget) => SearchControl::with_budget(budget),
            None => SearchControl::unbounded(),
        };
        let tt = TranspositionTable::new(config.tt_replacement);
        Self {
            config,
            evaluator,
            control,
            tt,
        }
    }

    /// Display name; no behavioral contract.
    pub fn identify(&self) -> String {
        let mode = if self.config.iterative_deepening {
            "ids"
        } else {
            "fixed"
        };
        format!("{}[{mode} depth {}]", self.config.name, self.config.max_depth)
    }

    /// Cancellation trigger for an external turn clock.
    ///
    /// Valid across calls; each call re-arms the underlying flag.
    pub fn deadline_handle(&self) -> DeadlineHandle {
        self.control.deadline_handle()
    }

    /// Choose a complete turn for the side to move.
    pub fn search<S>(&mut self, state: &S) -> Result<SearchReport<S::Move>, EngineError>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.search_with(state, |_, _, _| {})
    }

    /// Choose a complete turn, invoking `on_iter(depth, value, nodes)` after
    /// each fully completed deepening iteration.
    ///
    /// Resets the cancellation flag, the node counter, and the transposition
    /// table, then deepens until the ceiling, a proven win, or cancellation.
    /// The answer always comes from the deepest iteration that ran to
    /// completion; an iteration interrupted mid-flight never overwrites it.
    /// When no iteration completes at all, the first legal turn is played.
    pub fn search_with<S, F>(
        &mut self,
        state: &S,
        mut on_iter: F,
    ) -> Result<SearchReport<S::Move>, EngineError>
    where
        S: GameState,
        E: Evaluator<S>,
        F: FnMut(u8, i32, u64),
    {
        self.control.arm();
        self.tt.clear();

        let mut nodes: u64 = 0;
        let mut best: Option<(MoveChain<S::Move>, u8, i32)> = None;

        let (first_depth, last_depth) = if self.config.iterative_deepening {
            (1, self.config.max_depth)
        } else {
            (self.config.max_depth, self.config.max_depth)
        };

        for depth_limit in first_depth..=last_depth {
            if self.control.should_stop_iterating() {
                break;
            }

            let mut ctx = SearchContext {
                nodes,
                tt: self
                    .config
                    .use_transposition_table
                    .then_some(&mut self.tt),
                control: &self.control,
                evaluator: &self.evaluator,
                perspective: state.current_player(),
            };
            let result = minimax(state, 0, depth_limit, i32::MIN, i32::MAX, true, &mut ctx);
            nodes = ctx.nodes;

            if self.control.cancelled() {
                break;
            }

            if let Some(chain) = result.chain {
                debug!(depth = depth_limit, value = result.value, nodes, "iteration complete");
                on_iter(depth_limit, result.value, nodes);
                best = Some((chain, depth_limit, result.value));
            }

            // A proven win cannot be improved by deepening.
            if result.value >= WIN {
                break;
            }
        }

        match best {
            Some((chain, depth, value)) => Ok(SearchReport {
                chain,
                depth,
                nodes,
                value,
            }),
            None => {
                let chain = first_chain(state).ok_or(EngineError::NoLegalMoves)?;
                debug!(nodes, "no completed iteration, playing first legal turn");
                Ok(SearchReport {
                    chain,
                    depth: 0,
                    nodes,
                    value: 0,
                })
            }
        }
    }
}
