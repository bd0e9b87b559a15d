//! Piece counting over the rules-engine boundary.

use oust_core::{GameState, Player, board_span, bounding_box};

/// Number of `player` stones on the board.
///
/// Scans the discovered bounding box cell by cell; probes outside the
/// playable area are skipped, so irregular boards count correctly.
pub fn piece_count<S: GameState>(state: &S, player: Player) -> u32 {
    let edge = bounding_box(board_span(state));
    let mut count = 0;

    for row in 0..edge {
        for col in 0..edge {
            if let Ok(Some(owner)) = state.color_at(row, col)
                && owner == player
            {
                count += 1;
            }
        }
    }

    count
}
