use super::super::tables::{JumpPath, JUMPS_DOWN, JUMPS_UP};
use super::super::{Board, Color, Jump, Square};

impl Board {
    /// Single-hop jumps toward row 0 for the piece on `from`, ignoring kind.
    /// Returns the empty set when `from` holds no piece.
    pub(crate) fn jumps_up(&self, from: Square) -> Vec<Jump> {
        match self.piece_at(from) {
            Some(piece) => self.open_jumps(piece.color, &JUMPS_UP[from.as_index()]),
            None => Vec::new(),
        }
    }

    /// Single-hop jumps toward row 7, ignoring kind.
    pub(crate) fn jumps_down(&self, from: Square) -> Vec<Jump> {
        match self.piece_at(from) {
            Some(piece) => self.open_jumps(piece.color, &JUMPS_DOWN[from.as_index()]),
            None => Vec::new(),
        }
    }

    fn open_jumps(&self, mover: Color, paths: &[Option<JumpPath>; 2]) -> Vec<Jump> {
        paths
            .iter()
            .flatten()
            .filter(|path| self.jump_is_open(mover, path))
            .map(|path| Jump::new(Square(path.captured), Square(path.landing)))
            .collect()
    }

    /// A jump is open iff the crossed cell holds a live opponent piece and
    /// the landing cell is empty.
    fn jump_is_open(&self, mover: Color, path: &JumpPath) -> bool {
        let captured = match self.piece_at(Square(path.captured)) {
            Some(piece) => piece,
            None => return false,
        };
        captured.color != mover && self.is_empty_cell(Square(path.landing))
    }
}
