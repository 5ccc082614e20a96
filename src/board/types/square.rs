//! Playable-cell index type and board geometry.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Playable cells per row.
pub const COLUMN: usize = 4;
/// Rows on the board.
pub const ROW: usize = 8;
/// Number of playable cells.
pub const CELLS: usize = ROW * COLUMN;

/// Index of one of the 32 playable (dark) squares.
///
/// Only the dark squares are addressable; they sit on alternating visual
/// columns, so diagonal-neighbor arithmetic depends on row parity:
///
/// ```text
/// row 0 | 00    01    02    03    |
/// row 1 |    04    05    06    07 |
/// row 2 | 08    09    10    11    |
/// row 3 |    12    13    14    15 |
/// row 4 | 16    17    18    19    |
/// row 5 |    20    21    22    23 |
/// row 6 | 24    25    26    27    |
/// row 7 |    28    29    30    31 |
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub u8);

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        if index < CELLS {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Get the cell index (0-31)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 as usize
    }

    /// Get the row (0-7, where 0 = Black's back row)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.as_index() / COLUMN
    }

    /// Get the position within the row (0-3)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.as_index() % COLUMN
    }

    /// Rows with even parity have their playable cells shifted left
    #[inline]
    #[must_use]
    pub const fn on_even_row(self) -> bool {
        self.row() % 2 == 0
    }

    /// Iterate over all 32 playable cells in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..CELLS as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}
