//! Piece, color, and kind types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Piece colors.
///
/// White starts on the bottom rows and moves up the board (toward row 0);
/// Black starts on the top rows and moves down.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in turn order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Turn index as the match protocol encodes it (0 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub const fn turn_index(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Parse a protocol turn index (0 for White, 1 for Black)
    #[must_use]
    pub const fn from_turn_index(index: u8) -> Option<Color> {
        match index {
            0 => Some(Color::White),
            1 => Some(Color::Black),
            _ => None,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Piece kinds.
///
/// A Man moves only toward the opponent's side; a Crown moves both ways.
/// Promotion is decided by the hosting platform, never by this engine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    Man,
    Crown,
}

impl Kind {
    #[inline]
    #[must_use]
    pub const fn is_crown(self) -> bool {
        matches!(self, Kind::Crown)
    }
}

/// A live checkers piece: a (color, kind) pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: Color,
    pub kind: Kind,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, kind: Kind) -> Piece {
        Piece { color, kind }
    }

    /// A non-crowned piece of the given color
    #[inline]
    #[must_use]
    pub const fn man(color: Color) -> Piece {
        Piece::new(color, Kind::Man)
    }

    /// A crowned piece of the given color
    #[inline]
    #[must_use]
    pub const fn crown(color: Color) -> Piece {
        Piece::new(color, Kind::Crown)
    }

    #[inline]
    #[must_use]
    pub const fn is_crown(self) -> bool {
        self.kind.is_crown()
    }

    /// Board-display character: lowercase for Men, uppercase for Crowns
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match (self.color, self.kind) {
            (Color::White, Kind::Man) => 'w',
            (Color::White, Kind::Crown) => 'W',
            (Color::Black, Kind::Man) => 'b',
            (Color::Black, Kind::Crown) => 'B',
        }
    }
}
