//! Precomputed diagonal target tables for the 32 playable cells.
//!
//! Playable cells sit on alternating visual columns, so the index offset to a
//! diagonal neighbor depends on row parity. The tables bake that arithmetic
//! (including the leftmost/rightmost column exclusions) once, per cell; move
//! generation only checks occupancy at runtime.

use once_cell::sync::Lazy;

use super::types::{CELLS, COLUMN, ROW};

/// One geometric jump candidate: the cell jumped over and the landing cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct JumpPath {
    pub(crate) captured: u8,
    pub(crate) landing: u8,
}

/// Diagonal step targets toward row 0, as [left, right] per cell.
pub(crate) static STEPS_UP: Lazy<[[Option<u8>; 2]; CELLS]> = Lazy::new(|| {
    let mut table = [[None; 2]; CELLS];
    for (index, entry) in table.iter_mut().enumerate() {
        let row = index / COLUMN;
        let col = index % COLUMN;
        if row == 0 {
            continue;
        }
        let (left, right) = if row % 2 == 0 {
            (
                (col > 0).then(|| index - COLUMN - 1),
                Some(index - COLUMN),
            )
        } else {
            (
                Some(index - COLUMN),
                (col < COLUMN - 1).then(|| index - COLUMN + 1),
            )
        };
        *entry = [left.map(|i| i as u8), right.map(|i| i as u8)];
    }
    table
});

/// Diagonal step targets toward row 7, as [left, right] per cell.
pub(crate) static STEPS_DOWN: Lazy<[[Option<u8>; 2]; CELLS]> = Lazy::new(|| {
    let mut table = [[None; 2]; CELLS];
    for (index, entry) in table.iter_mut().enumerate() {
        let row = index / COLUMN;
        let col = index % COLUMN;
        if row == ROW - 1 {
            continue;
        }
        let (left, right) = if row % 2 == 0 {
            (
                (col > 0).then(|| index + COLUMN - 1),
                Some(index + COLUMN),
            )
        } else {
            (
                Some(index + COLUMN),
                (col < COLUMN - 1).then(|| index + COLUMN + 1),
            )
        };
        *entry = [left.map(|i| i as u8), right.map(|i| i as u8)];
    }
    table
});

/// Jump candidates toward row 0, as [left, right] per cell.
pub(crate) static JUMPS_UP: Lazy<[[Option<JumpPath>; 2]; CELLS]> = Lazy::new(|| {
    let mut table = [[None; 2]; CELLS];
    for (index, entry) in table.iter_mut().enumerate() {
        let row = index / COLUMN;
        let col = index % COLUMN;
        if row < 2 {
            continue;
        }
        let captured_left = if row % 2 == 0 {
            index - COLUMN - 1
        } else {
            index - COLUMN
        };
        let captured_right = if row % 2 == 0 {
            index - COLUMN
        } else {
            index - COLUMN + 1
        };
        let left = (col > 0).then(|| JumpPath {
            captured: captured_left as u8,
            landing: (index - 2 * COLUMN - 1) as u8,
        });
        let right = (col < COLUMN - 1).then(|| JumpPath {
            captured: captured_right as u8,
            landing: (index - 2 * COLUMN + 1) as u8,
        });
        *entry = [left, right];
    }
    table
});

/// Jump candidates toward row 7, as [left, right] per cell.
pub(crate) static JUMPS_DOWN: Lazy<[[Option<JumpPath>; 2]; CELLS]> = Lazy::new(|| {
    let mut table = [[None; 2]; CELLS];
    for (index, entry) in table.iter_mut().enumerate() {
        let row = index / COLUMN;
        let col = index % COLUMN;
        if row > ROW - 3 {
            continue;
        }
        let captured_left = if row % 2 == 0 {
            index + COLUMN - 1
        } else {
            index + COLUMN
        };
        let captured_right = if row % 2 == 0 {
            index + COLUMN
        } else {
            index + COLUMN + 1
        };
        let left = (col > 0).then(|| JumpPath {
            captured: captured_left as u8,
            landing: (index + 2 * COLUMN - 1) as u8,
        });
        let right = (col < COLUMN - 1).then(|| JumpPath {
            captured: captured_right as u8,
            landing: (index + 2 * COLUMN + 1) as u8,
        });
        *entry = [left, right];
    }
    table
});
