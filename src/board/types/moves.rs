//! Move path types and match scores.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

/// A single capturing hop: the opponent cell jumped over and the empty cell
/// landed on. Longer capture chains arrive as successive single hops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Jump {
    pub captured: Square,
    pub landing: Square,
}

impl Jump {
    #[inline]
    #[must_use]
    pub const fn new(captured: Square, landing: Square) -> Jump {
        Jump { captured, landing }
    }
}

impl fmt::Display for Jump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}->{}", self.captured, self.landing)
    }
}

/// Terminal score pair, ordered like the protocol: `[white, black]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchScore(pub [u8; 2]);

impl MatchScore {
    pub const WHITE_WINS: MatchScore = MatchScore([1, 0]);
    pub const BLACK_WINS: MatchScore = MatchScore([0, 1]);

    /// The winning color, if the score names one. A side scored zero while
    /// the other side scored anything positive has lost.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self.0 {
            [w, 0] if w > 0 => Some(Color::White),
            [0, b] if b > 0 => Some(Color::Black),
            _ => None,
        }
    }
}
