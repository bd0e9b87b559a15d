//! Core types for chained-capture game engines: player identities, complete
//! turns, and the boundary to an external rules engine.

mod chain;
mod error;
mod player;
mod state;

pub use chain::MoveChain;
pub use error::{IllegalMove, OutOfBoard};
pub use player::Player;
pub use state::{DEFAULT_SPAN, GameState, MAX_SPAN, MIN_SPAN, board_span, bounding_box};
