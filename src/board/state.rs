//! Dense board state.

use std::fmt;

use super::types::{Color, MatchScore, Piece, Square, CELLS, COLUMN, ROW};

/// A checkers position: the 32 playable cells, index-addressed.
///
/// The board carries no side-to-move; whose turn it is belongs to the match
/// and is passed into move generation explicitly. Every validation call
/// rebuilds a `Board` from the platform's snapshot, so instances are cheap
/// throwaway values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; CELLS],
}

impl Board {
    /// The starting position: three rows of Black Men facing three rows of
    /// White Men across two empty rows.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for index in 0..(ROW - 2) / 2 * COLUMN {
            board.cells[index] = Some(Piece::man(Color::Black));
        }
        for index in (ROW / 2 + 1) * COLUMN..CELLS {
            board.cells[index] = Some(Piece::man(Color::White));
        }
        board
    }

    /// A board with every cell empty
    #[must_use]
    pub(crate) fn empty() -> Self {
        Board {
            cells: [None; CELLS],
        }
    }

    /// Get the piece on a cell, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.as_index()]
    }

    /// Returns true if the cell holds no piece
    #[inline]
    #[must_use]
    pub fn is_empty_cell(&self, sq: Square) -> bool {
        self.cells[sq.as_index()].is_none()
    }

    pub(crate) fn set_cell(&mut self, sq: Square, cell: Option<Piece>) {
        self.cells[sq.as_index()] = cell;
    }

    /// Live piece counts as (white, black)
    #[must_use]
    pub fn tally(&self) -> (u32, u32) {
        let mut white = 0;
        let mut black = 0;
        for piece in self.cells.iter().flatten() {
            match piece.color {
                Color::White => white += 1,
                Color::Black => black += 1,
            }
        }
        (white, black)
    }

    /// Terminal score when pieces of only one color remain, otherwise `None`
    #[must_use]
    pub fn outcome(&self) -> Option<MatchScore> {
        match self.tally() {
            (w, 0) if w > 0 => Some(MatchScore::WHITE_WINS),
            (0, b) if b > 0 => Some(MatchScore::BLACK_WINS),
            _ => None,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROW {
            write!(f, "|")?;
            for col in 0..COLUMN {
                let sq = Square((row * COLUMN + col) as u8);
                let ch = match self.piece_at(sq) {
                    Some(piece) => piece.to_char(),
                    None => '.',
                };
                if row % 2 == 0 {
                    write!(f, " {ch} |   |")?;
                } else {
                    write!(f, "   | {ch} |")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
