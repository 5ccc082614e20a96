//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use checkers_engine::board::prelude::*;
//! ```

pub use super::{
    initial_operations, next_state, verify_move, Board, BoardBuilder, Color, Jump, Kind,
    MatchScore, Operation, Piece, ProtocolError, RejectReason, Snapshot, Square, Submission,
    Verdict,
};
