//! Sparse protocol snapshot and operation codec.
//!
//! The hosting platform speaks a sparse per-cell mapping (`"S0"`..`"S31"` to
//! a cell token) plus an ordered operation list per move. This module is the
//! only place that form exists; past this boundary the engine works on the
//! dense [`Board`].

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::ProtocolError;
use super::types::{Color, Kind, MatchScore, Piece, Square, CELLS, COLUMN, ROW};
use super::Board;

const TOKEN_EMPTY: &str = "EMPTY";
const TOKEN_WHITE_MAN: &str = "WMAN";
const TOKEN_WHITE_CROWN: &str = "WCRO";
const TOKEN_BLACK_MAN: &str = "BMAN";
const TOKEN_BLACK_CROWN: &str = "BCRO";

/// Sparse per-cell state mapping as the platform transmits it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Snapshot(pub BTreeMap<String, String>);

impl Snapshot {
    /// An empty mapping
    #[must_use]
    pub fn new() -> Self {
        Snapshot(BTreeMap::new())
    }

    /// Token stored for a cell index, if present
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.0.get(&cell_key(index)).map(String::as_str)
    }

    pub(crate) fn set(&mut self, key: String, token: String) {
        self.0.insert(key, token);
    }
}

impl From<&Board> for Snapshot {
    /// Dense-to-sparse conversion; the exact inverse of
    /// [`Board::try_from_snapshot`] for well-formed boards.
    fn from(board: &Board) -> Self {
        let mut snapshot = Snapshot::new();
        for index in 0..CELLS {
            let cell = board.piece_at(Square(index as u8));
            snapshot.set(cell_key(index), cell_token(cell).to_string());
        }
        snapshot
    }
}

impl Board {
    /// Decode a sparse snapshot into a dense board.
    ///
    /// Cells the mapping does not name decode as empty, and keys that do not
    /// address a playable cell are ignored; range verdicts on the *move's*
    /// cells belong to the validator. A malformed cell token is an error.
    pub fn try_from_snapshot(snapshot: &Snapshot) -> Result<Board, ProtocolError> {
        let mut board = Board::empty();
        for (key, token) in &snapshot.0 {
            let index = match parse_cell_key(key) {
                Some(index) if index < CELLS => index,
                _ => continue,
            };
            board.set_cell(Square(index as u8), parse_cell_token(token)?);
        }
        Ok(board)
    }

    /// Decode a sparse snapshot into a dense board.
    ///
    /// Panics if a cell token is malformed. Use `try_from_snapshot` for
    /// fallible decoding.
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot) -> Board {
        Board::try_from_snapshot(snapshot).expect("Invalid state snapshot")
    }
}

/// Protocol key for a cell index ("S0".."S31")
#[must_use]
pub fn cell_key(index: usize) -> String {
    format!("S{index}")
}

/// Parse the numeric suffix of a cell key. Returns `None` when the suffix is
/// not an integer; range checking is the caller's concern.
pub(crate) fn parse_cell_key(key: &str) -> Option<usize> {
    key.get(1..)?.parse().ok()
}

/// Wire token for a cell state
pub(crate) fn cell_token(cell: Option<Piece>) -> &'static str {
    match cell {
        None => TOKEN_EMPTY,
        Some(Piece {
            color: Color::White,
            kind: Kind::Man,
        }) => TOKEN_WHITE_MAN,
        Some(Piece {
            color: Color::White,
            kind: Kind::Crown,
        }) => TOKEN_WHITE_CROWN,
        Some(Piece {
            color: Color::Black,
            kind: Kind::Man,
        }) => TOKEN_BLACK_MAN,
        Some(Piece {
            color: Color::Black,
            kind: Kind::Crown,
        }) => TOKEN_BLACK_CROWN,
    }
}

/// Decode a wire token into a cell state
pub(crate) fn parse_cell_token(token: &str) -> Result<Option<Piece>, ProtocolError> {
    match token {
        TOKEN_EMPTY => Ok(None),
        TOKEN_WHITE_MAN => Ok(Some(Piece::man(Color::White))),
        TOKEN_WHITE_CROWN => Ok(Some(Piece::crown(Color::White))),
        TOKEN_BLACK_MAN => Ok(Some(Piece::man(Color::Black))),
        TOKEN_BLACK_CROWN => Ok(Some(Piece::crown(Color::Black))),
        other => Err(ProtocolError::InvalidCellToken {
            token: other.to_string(),
        }),
    }
}

/// End-of-match payload carried by an [`Operation::EndMatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EndMatch {
    pub end_match_scores: [u8; 2],
}

impl EndMatch {
    /// The winner this payload claims: a zero White score names Black, any
    /// other score pair names White.
    #[must_use]
    pub(crate) fn claimed_winner(&self) -> Color {
        if self.end_match_scores[0] == 0 {
            Color::Black
        } else {
            Color::White
        }
    }
}

/// One tagged operation of a move's operation list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    /// Assign cell tokens (origin-clear, capture-removal, destination-occupy)
    #[cfg_attr(feature = "serde", serde(rename = "set"))]
    Set(BTreeMap<String, String>),
    /// Hand the turn to the player with this turn index
    #[cfg_attr(feature = "serde", serde(rename = "setTurn"))]
    SetTurn(u8),
    /// Declare the end of the match with a score pair
    #[cfg_attr(feature = "serde", serde(rename = "endMatch"))]
    EndMatch(EndMatch),
}

impl Operation {
    /// A `set` assigning one cell
    #[must_use]
    pub fn set_cell(index: usize, cell: Option<Piece>) -> Operation {
        let mut assignments = BTreeMap::new();
        assignments.insert(cell_key(index), cell_token(cell).to_string());
        Operation::Set(assignments)
    }

    /// A `setTurn` handing the move to `color`
    #[must_use]
    pub fn set_turn(color: Color) -> Operation {
        Operation::SetTurn(color.turn_index())
    }

    /// An `endMatch` declaring `score`
    #[must_use]
    pub fn end_match(score: MatchScore) -> Operation {
        Operation::EndMatch(EndMatch {
            end_match_scores: score.0,
        })
    }
}

/// The fixed initial operation sequence: turn to White, the top three rows
/// Black Men, the middle two rows empty, the bottom three rows White Men.
#[must_use]
pub fn initial_operations() -> Vec<Operation> {
    let mut operations = vec![Operation::set_turn(Color::White)];

    for index in 0..(ROW - 2) / 2 * COLUMN {
        operations.push(Operation::set_cell(index, Some(Piece::man(Color::Black))));
    }
    for index in (ROW / 2 - 1) * COLUMN..(ROW / 2 + 1) * COLUMN {
        operations.push(Operation::set_cell(index, None));
    }
    for index in (ROW / 2 + 1) * COLUMN..CELLS {
        operations.push(Operation::set_cell(index, Some(Piece::man(Color::White))));
    }

    operations
}
