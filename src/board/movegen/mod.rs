//! Move generation: directional generators plus the color/kind aggregator.

mod jumps;
mod steps;

use super::{Board, Color, Jump, Square};

impl Board {
    /// Legal one-step destinations for the piece on `from`, given whose turn
    /// it is.
    ///
    /// A piece of the wrong color for the turn yields no moves. A Man moves
    /// only toward the opponent's side; a Crown moves both ways.
    #[must_use]
    pub fn simple_moves(&self, from: Square, to_move: Color) -> Vec<Square> {
        let piece = match self.piece_at(from) {
            Some(piece) if piece.color == to_move => piece,
            _ => return Vec::new(),
        };

        let mut moves = Vec::new();
        match piece.color {
            Color::White => {
                if piece.is_crown() {
                    moves.extend(self.steps_down(from));
                }
                moves.extend(self.steps_up(from));
            }
            Color::Black => {
                if piece.is_crown() {
                    moves.extend(self.steps_up(from));
                }
                moves.extend(self.steps_down(from));
            }
        }
        moves
    }

    /// Legal single-hop jumps for the piece on `from`, given whose turn it
    /// is. Same color and kind filtering as [`Board::simple_moves`].
    #[must_use]
    pub fn jump_moves(&self, from: Square, to_move: Color) -> Vec<Jump> {
        let piece = match self.piece_at(from) {
            Some(piece) if piece.color == to_move => piece,
            _ => return Vec::new(),
        };

        let mut moves = Vec::new();
        match piece.color {
            Color::White => {
                if piece.is_crown() {
                    moves.extend(self.jumps_down(from));
                }
                moves.extend(self.jumps_up(from));
            }
            Color::Black => {
                if piece.is_crown() {
                    moves.extend(self.jumps_up(from));
                }
                moves.extend(self.jumps_down(from));
            }
        }
        moves
    }

    /// True when any piece of `color` has at least one jump available. This
    /// is the mandatory-capture scan: while it holds, simple moves by that
    /// color are illegal.
    #[must_use]
    pub fn color_has_jump(&self, color: Color) -> bool {
        Square::all().any(|sq| !self.jump_moves(sq, color).is_empty())
    }
}
