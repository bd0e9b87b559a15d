//! Zobrist keys and position fingerprinting.
//!
//! The key tables are process-wide constants, generated at compile time by a
//! deterministically seeded xorshift64 sequence. Two positions with identical
//! cell-by-cell occupancy and identical side to move always fingerprint
//! equal; flipping one cell's occupant or the side to move changes the
//! fingerprint. Collisions are accepted as a probabilistic risk, not
//! detected.

use oust_core::{GameState, MAX_SPAN, Player, board_span, bounding_box};

/// Side length of the bounding box the key table covers (largest supported
/// span).
pub const BOX: usize = bounding_box(MAX_SPAN) as usize;

const SEED: u64 = 0x4f55_5354_2121_2121; // "OUST!!!!"

/// Xorshift64 PRNG. Returns (value, next_state).
const fn xorshift64(mut state: u64) -> (u64, u64) {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    (state, state)
}

/// Zobrist key for each (player, row, col) triple.
/// Indexed by `[Player::index()][row][col]`.
pub(crate) static CELL_KEYS: [[[u64; BOX]; BOX]; Player::COUNT] = {
    let mut table = [[[0u64; BOX]; BOX]; Player::COUNT];
    let mut state = SEED;
    let mut player = 0;
    while player < Player::COUNT {
        let mut row = 0;
        while row < BOX {
            let mut col = 0;
            while col < BOX {
                let (val, next) = xorshift64(state);
                table[player][row][col] = val;
                state = next;
                col += 1;
            }
            row += 1;
        }
        player += 1;
    }
    table
};

/// Zobrist key XORed in when [`Player::One`] is the side to move.
pub(crate) static TURN_KEY: u64 = {
    // State continues from CELL_KEYS generation
    let mut state = SEED;
    // Advance past all 2*19*19 = 722 cell keys
    let mut i = 0;
    while i < Player::COUNT * BOX * BOX {
        let (_, next) = xorshift64(state);
        state = next;
        i += 1;
    }
    let (val, _) = xorshift64(state);
    val
};

/// Compute the Zobrist fingerprint of a position from scratch.
///
/// XORs the key of every occupied cell inside the board's bounding box, then
/// the side-to-move key when [`Player::One`] is to move. Probes that fall
/// outside the playable area are skipped.
pub fn fingerprint<S: GameState>(state: &S) -> u64 {
    let edge = bounding_box(board_span(state));
    let mut hash = 0u64;

    for row in 0..edge {
        for col in 0..edge {
            if let Ok(Some(owner)) = state.color_at(row, col) {
                hash ^= CELL_KEYS[owner.index()][row as usize][col as usize];
            }
        }
    }

    if state.current_player() == Player::One {
        hash ^= TURN_KEY;
    }

    hash
}
