//! The rules-engine boundary.
//!
//! The search engine never owns game rules. It drives any type implementing
//! [`GameState`]: legality of a single elementary move, move application,
//! win/draw detection, and cell occupancy all belong to the rules engine
//! behind this trait. Positions are duplicated through the `Clone` supertrait;
//! copies are intentionally value-semantic, so no two search branches ever
//! alias the same mutable position.

use std::fmt;

use tracing::trace;

use crate::error::{IllegalMove, OutOfBoard};
use crate::player::Player;

/// Smallest board span probed by [`board_span`].
pub const MIN_SPAN: u8 = 3;

/// Largest board span probed by [`board_span`].
pub const MAX_SPAN: u8 = 10;

/// Span assumed when no probe lands on the board.
pub const DEFAULT_SPAN: u8 = 7;

/// A game position owned by an external rules engine.
///
/// The trait captures one complete turn-based board game from the searcher's
/// point of view: whose turn it is, which elementary moves are on offer, how
/// a move transforms the position, and when the game has ended. A turn may
/// consist of several elementary moves; the engine detects chained turns by
/// observing that [`current_player`](GameState::current_player) has not
/// changed after [`apply_move`](GameState::apply_move).
pub trait GameState: Clone {
    /// Elementary move target understood by the rules engine.
    type Move: Clone + PartialEq + fmt::Debug;

    /// The side to move.
    fn current_player(&self) -> Player;

    /// Single-step options immediately available to the side to move.
    ///
    /// Listing a move here does not guarantee [`apply_move`](GameState::apply_move)
    /// accepts it; the application step has the final word on legality.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply one elementary move in place.
    ///
    /// A rejected move must leave the position untouched.
    fn apply_move(&mut self, mv: &Self::Move) -> Result<(), IllegalMove>;

    /// Whether the game has ended.
    fn is_game_over(&self) -> bool;

    /// The winning player, or `None` while the game runs or after a draw.
    fn winner(&self) -> Option<Player>;

    /// Occupant of the cell at `(row, col)`, or `None` for an empty cell.
    fn color_at(&self, row: u8, col: u8) -> Result<Option<Player>, OutOfBoard>;
}

/// Side length of the square bounding box enclosing a board of `span`.
#[inline]
pub const fn bounding_box(span: u8) -> u8 {
    2 * span - 1
}

/// Discover the board span by probing the far corner of successively larger
/// bounding boxes.
///
/// A board of span `s` fits a `(2s-1) x (2s-1)` box, so the first in-board
/// probe at `(2s-2, 2s-2)` identifies the span. Diagnostic only: the search
/// itself never depends on geometry beyond what the rules engine answers.
pub fn board_span<S: GameState>(state: &S) -> u8 {
    for span in MIN_SPAN..=MAX_SPAN {
        let edge = 2 * span - 2;
        if state.color_at(edge, edge).is_ok() {
            trace!(span, "discovered board span");
            return span;
        }
    }
    DEFAULT_SPAN
}
