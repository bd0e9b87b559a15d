//! Position evaluation: exact terminal scores and the weighted heuristic.

pub mod material;

use std::cmp::Ordering;

use oust_core::{GameState, Player};

use crate::zobrist;

/// Score of a proven win for the evaluating player.
pub const WIN: i32 = 1_000_000;

/// Score of a proven loss for the evaluating player.
pub const LOSS: i32 = -1_000_000;

/// Score of a proven draw.
pub const DRAW: i32 = 0;

/// Heuristic scoring seam.
///
/// The search only ever consults a position's value through this trait, so
/// alternative heuristics can be swapped in without touching the search.
pub trait Evaluator<S: GameState> {
    /// Score `state` from `perspective`'s point of view.
    ///
    /// Must return exactly [`WIN`], [`LOSS`], or [`DRAW`] whenever the game
    /// is over, regardless of any depth budget, and must return the same
    /// value for the same position on every call.
    fn evaluate(&self, state: &S, perspective: Player) -> i32;
}

/// Weights for [`WeightedEvaluator`].
///
/// Tuning constants, not law: tests should rely on sign and monotonicity,
/// never on exact magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    /// Weight on the piece-count difference. Dominant term.
    pub piece_diff: i32,
    /// Flat bonus (penalty) for holding strictly more (fewer) pieces.
    pub lead_bonus: i32,
    /// Per-move weight on the mover's elementary-move count.
    pub mobility: i32,
    /// Flat per-piece bonus for the evaluating player's remaining pieces.
    pub per_piece: i32,
    /// Tie-break amplitude; 0 disables the perturbation.
    pub noise_amplitude: i32,
    /// Seed mixed into the tie-break perturbation.
    pub noise_seed: u64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            piece_diff: 100,
            lead_bonus: 50,
            mobility: 5,
            per_piece: 10,
            noise_amplitude: 0,
            noise_seed: 0x9e37_79b9_7f4a_7c15,
        }
    }
}

/// The shipped heuristic: weighted material difference, material lead,
/// mobility, and remaining pieces, plus an optional tie-break perturbation.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedEvaluator {
    weights: EvalWeights,
}

impl WeightedEvaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    /// Bounded tie-break term in `[-amplitude, +amplitude]`.
    ///
    /// A pure function of the position fingerprint and the configured seed:
    /// the same position perturbs identically on every visit, so cached
    /// search bounds stay valid while equal-valued positions still spread.
    fn tie_break<S: GameState>(&self, state: &S) -> i32 {
        let amplitude = self.weights.noise_amplitude;
        if amplitude == 0 {
            return 0;
        }
        let mixed = splitmix64(zobrist::fingerprint(state) ^ self.weights.noise_seed);
        (mixed % (2 * amplitude as u64 + 1)) as i32 - amplitude
    }
}

impl<S: GameState> Evaluator<S> for WeightedEvaluator {
    fn evaluate(&self, state: &S, perspective: Player) -> i32 {
        if state.is_game_over() {
            return match state.winner() {
                Some(winner) if winner == perspective => WIN,
                Some(_) => LOSS,
                None => DRAW,
            };
        }

        let w = &self.weights;
        let own = material::piece_count(state, perspective) as i32;
        let theirs = material::piece_count(state, perspective.opponent()) as i32;

        let mut score = (own - theirs) * w.piece_diff;
        score += match own.cmp(&theirs) {
            Ordering::Greater => w.lead_bonus,
            Ordering::Less => -w.lead_bonus,
            Ordering::Equal => 0,
        };
        score += state.legal_moves().len() as i32 * w.mobility;
        score += own * w.per_piece;
        score + self.tie_break(state)
    }
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}
