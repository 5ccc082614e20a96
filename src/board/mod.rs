//! Checkers board representation and rules.
//!
//! Models the 32 playable cells of an 8x8 checkers board, generates legal
//! simple and jump moves, and independently re-validates claimed moves as the
//! authoritative anti-cheat gate for a turn-based match.
//!
//! # Example
//! ```
//! use checkers_engine::board::{Board, Color, Square};
//!
//! let board = Board::new();
//! let moves: usize = Square::all()
//!     .map(|sq| board.simple_moves(sq, Color::White).len())
//!     .sum();
//! assert_eq!(moves, 7);
//! ```

mod builder;
mod error;
mod movegen;
pub mod prelude;
mod protocol;
mod state;
mod tables;
mod transition;
mod types;
mod validate;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::ProtocolError;
pub use state::Board;
pub use types::{Color, Jump, Kind, MatchScore, Piece, Square, CELLS, COLUMN, ROW};

// Public API - protocol boundary
pub use protocol::{cell_key, initial_operations, EndMatch, Operation, Snapshot};
pub use transition::{next_state, Transition};

// Public API - validation
pub use validate::{verify_move, RejectReason, Rejection, Submission, Verdict};
