//! Boundary errors reported by a rules engine.
//!
//! Both errors are expected, recoverable signals: [`IllegalMove`] means "this
//! candidate is not playable here, try another", [`OutOfBoard`] means "this
//! cell does not exist". Neither ever escapes the search engine.

/// A candidate elementary move rejected by the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("elementary move is illegal in the current position")]
pub struct IllegalMove;

/// A probed coordinate that lies outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("coordinate ({row}, {col}) is outside the board")]
pub struct OutOfBoard {
    /// Probed row.
    pub row: u8,
    /// Probed column.
    pub col: u8,
}
