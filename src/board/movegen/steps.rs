use super::super::tables::{STEPS_DOWN, STEPS_UP};
use super::super::{Board, Square};

impl Board {
    /// One-step destinations toward row 0 for the piece on `from`, ignoring
    /// ownership and kind. A candidate is kept only when the cell is empty.
    pub(crate) fn steps_up(&self, from: Square) -> Vec<Square> {
        self.open_steps(&STEPS_UP[from.as_index()])
    }

    /// One-step destinations toward row 7, ignoring ownership and kind.
    pub(crate) fn steps_down(&self, from: Square) -> Vec<Square> {
        self.open_steps(&STEPS_DOWN[from.as_index()])
    }

    fn open_steps(&self, targets: &[Option<u8>; 2]) -> Vec<Square> {
        targets
            .iter()
            .flatten()
            .map(|&index| Square(index))
            .filter(|&sq| self.is_empty_cell(sq))
            .collect()
    }
}
