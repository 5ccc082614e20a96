//! Core types for the checkers engine.

mod moves;
mod piece;
mod square;

pub use moves::{Jump, MatchScore};
pub use piece::{Color, Kind, Piece};
pub use square::{Square, CELLS, COLUMN, ROW};
