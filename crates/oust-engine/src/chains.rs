//! Move-chain enumeration: every complete turn available from a position.

use oust_core::{GameState, IllegalMove, MoveChain, Player};

/// Enumerate every complete turn for the side to move.
///
/// A candidate sequence is extended by each elementary move the rules engine
/// lists for the current intermediate position. After an elementary move is
/// applied to a disposable copy, the turn continues while the mover keeps the
/// move and the game is not over; otherwise the sequence so far is one
/// complete turn. A listed move the rules engine rejects is skipped, not an
/// error. Capture-heavy positions can produce exponentially many chains; no
/// deduplication is attempted.
pub fn enumerate_turns<S: GameState>(state: &S) -> Vec<MoveChain<S::Move>> {
    let mut chains = Vec::new();
    let mut prefix = Vec::new();
    extend(state, state.current_player(), &mut prefix, &mut chains);
    chains
}

fn extend<S: GameState>(
    state: &S,
    owner: Player,
    prefix: &mut Vec<S::Move>,
    out: &mut Vec<MoveChain<S::Move>>,
) {
    let moves = state.legal_moves();
    if moves.is_empty() {
        // A non-empty sequence with no continuation is a complete turn.
        if let Some(chain) = MoveChain::from_moves(prefix.clone()) {
            out.push(chain);
        }
        return;
    }

    for mv in moves {
        let mut next = state.clone();
        if next.apply_move(&mv).is_err() {
            continue;
        }
        prefix.push(mv);
        if next.current_player() == owner && !next.is_game_over() {
            extend(&next, owner, prefix, out);
        } else if let Some(chain) = MoveChain::from_moves(prefix.clone()) {
            out.push(chain);
        }
        prefix.pop();
    }
}

/// The first complete turn a greedy walk finds: repeatedly take the first
/// accepted elementary move until the turn passes or the game ends.
///
/// Identical to the first chain [`enumerate_turns`] would yield, without
/// paying for full enumeration. `None` only when the position offers no
/// legal elementary move at all.
pub fn first_chain<S: GameState>(state: &S) -> Option<MoveChain<S::Move>> {
    let owner = state.current_player();
    let mut cursor = state.clone();
    let mut path = Vec::new();

    loop {
        let mut advanced = false;
        for mv in cursor.legal_moves() {
            let mut next = cursor.clone();
            if next.apply_move(&mv).is_ok() {
                path.push(mv);
                cursor = next;
                advanced = true;
                break;
            }
        }
        if !advanced || cursor.current_player() != owner || cursor.is_game_over() {
            break;
        }
    }

    MoveChain::from_moves(path)
}

/// Replay a whole chain onto a fresh copy of `state`.
///
/// Fails if the rules engine rejects any step, which for a chain produced by
/// [`enumerate_turns`] on the same position indicates a non-deterministic
/// rules engine.
pub fn apply_chain<S: GameState>(
    state: &S,
    chain: &MoveChain<S::Move>,
) -> Result<S, IllegalMove> {
    let mut next = state.clone();
    for mv in chain.moves() {
        next.apply_move(mv)?;
    }
    Ok(next)
}
