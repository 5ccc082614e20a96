//! Fluent builder for constructing checkers positions.
//!
//! Allows placing pieces cell by cell rather than assembling protocol
//! snapshots by hand.
//!
//! # Example
//! ```
//! use checkers_engine::board::{BoardBuilder, Color, Kind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(13), Color::White, Kind::Man)
//!     .piece(Square(9), Color::Black, Kind::Man)
//!     .build();
//! assert_eq!(board.tally(), (1, 1));
//! ```

use super::{Board, Color, Kind, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        let board = Board::new();
        for sq in Square::all() {
            if let Some(piece) = board.piece_at(sq) {
                builder.pieces.push((sq, piece));
            }
        }
        builder
    }

    /// Place a piece on a cell. Placing onto an occupied cell replaces the
    /// earlier piece.
    #[must_use]
    pub fn piece(mut self, sq: Square, color: Color, kind: Kind) -> Self {
        self.pieces.push((sq, Piece::new(color, kind)));
        self
    }

    /// Remove any piece from a cell.
    #[must_use]
    pub fn clear(mut self, sq: Square) -> Self {
        self.pieces.retain(|(placed, _)| *placed != sq);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (sq, piece) in self.pieces {
            board.set_cell(sq, Some(piece));
        }
        board
    }
}
