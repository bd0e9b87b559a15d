//! Minimax search with alpha-beta pruning over complete turns.

use oust_core::{GameState, MoveChain, Player};

use crate::chains::{apply_chain, enumerate_turns};
use crate::eval::Evaluator;
use crate::search::control::SearchControl;
use crate::search::tt::{Bound, TranspositionTable, TtEntry};
use crate::zobrist;

/// Result of searching one node: the best complete turn found and its value.
///
/// The chain is absent at frontier, terminal, cache-cutoff, and cancelled
/// nodes.
#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    pub chain: Option<MoveChain<M>>,
    pub value: i32,
}

/// Search state threaded through the recursion.
pub(super) struct SearchContext<'a, E> {
    /// Nodes visited so far in this call, including this iteration.
    pub nodes: u64,
    /// Cache of completed expansions; `None` when caching is disabled.
    pub tt: Option<&'a mut TranspositionTable>,
    /// Stop signal.
    pub control: &'a SearchControl,
    /// Heuristic for frontier and terminal positions.
    pub evaluator: &'a E,
    /// The player the root call is choosing a turn for.
    pub perspective: Player,
}

/// Recursive minimax over complete turns.
///
/// `maximizing` is true exactly at nodes where the perspective player picks
/// the turn. Each node, in order: cancellation sentinel, transposition-table
/// probe (window tightening or outright cutoff), terminal/frontier
/// evaluation, turn enumeration, then the alpha-beta child scan. A completed
/// expansion is cached with its value classified against the window as it
/// was on entry; an expansion interrupted by cancellation is not cached,
/// since its value is polluted by child sentinels.
pub(super) fn minimax<S, E>(
    state: &S,
    depth: u8,
    depth_limit: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ctx: &mut SearchContext<'_, E>,
) -> SearchResult<S::Move>
where
    S: GameState,
    E: Evaluator<S>,
{
    ctx.nodes += 1;

    if ctx.control.should_stop(ctx.nodes) {
        // Sentinel: worthless for whichever role this node plays, so an
        // ancestor adopting it is discarded by the driver anyway.
        return SearchResult {
            chain: None,
            value: if maximizing { i32::MIN } else { i32::MAX },
        };
    }

    let key = zobrist::fingerprint(state);
    let remaining = depth_limit - depth;

    if let Some(tt) = ctx.tt.as_deref()
        && let Some(entry) = tt.probe(key)
        && entry.remaining >= remaining
    {
        match entry.bound {
            Bound::Exact => {
                return SearchResult {
                    chain: None,
                    value: entry.value,
                };
            }
            Bound::Lower => alpha = alpha.max(entry.value),
            Bound::Upper => beta = beta.min(entry.value),
        }
        if alpha >= beta {
            return SearchResult {
                chain: None,
                value: entry.value,
            };
        }
    }

    if state.is_game_over() || depth >= depth_limit {
        return SearchResult {
            chain: None,
            value: ctx.evaluator.evaluate(state, ctx.perspective),
        };
    }

    let turns = enumerate_turns(state);
    if turns.is_empty() {
        return SearchResult {
            chain: None,
            value: ctx.evaluator.evaluate(state, ctx.perspective),
        };
    }

    let alpha_orig = alpha;
    let beta_orig = beta;
    let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_chain: Option<MoveChain<S::Move>> = None;
    let mut interrupted = false;

    for chain in turns {
        if ctx.control.should_stop(ctx.nodes) {
            interrupted = true;
            break;
        }

        let Ok(child) = apply_chain(state, &chain) else {
            continue;
        };
        let result = minimax(&child, depth + 1, depth_limit, alpha, beta, !maximizing, ctx);

        if maximizing {
            if result.value > best_value {
                best_value = result.value;
                best_chain = Some(chain);
            }
            alpha = alpha.max(best_value);
        } else {
            if result.value < best_value {
                best_value = result.value;
                best_chain = Some(chain);
            }
            beta = beta.min(best_value);
        }

        if beta <= alpha {
            break;
        }
    }

    if !interrupted && !ctx.control.cancelled()
        && let Some(tt) = ctx.tt.as_deref_mut()
    {
        let bound = if best_value <= alpha_orig {
            Bound::Upper
        } else if best_value >= beta_orig {
            Bound::Lower
        } else {
            Bound::Exact
        };
        tt.store(
            key,
            TtEntry {
                remaining,
                value: best_value,
                bound,
            },
        );
    }

    SearchResult {
        chain: best_chain,
        value: best_value,
    }
}
