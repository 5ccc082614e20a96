//! Claimed-move application.

use super::error::ProtocolError;
use super::protocol::{cell_key, parse_cell_key, parse_cell_token, Operation, Snapshot};
use super::types::{Color, MatchScore, CELLS};

/// Result of applying a move's operations: the implied next snapshot, plus
/// the end-of-match score when pieces of only one color remain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub next: Snapshot,
    pub score: Option<MatchScore>,
}

/// Apply every `set` assignment in `operations` to a copy of `state` and
/// tally the result.
///
/// This performs no legality checking; it is a pure apply step. The validator
/// owns legality and calls this with the *claimed* move to learn the state
/// the claim implies. Assignments whose key does not address a playable cell
/// are kept in the sparse mapping as-is. A malformed cell token anywhere in
/// the result is an error.
pub fn next_state(state: &Snapshot, operations: &[Operation]) -> Result<Transition, ProtocolError> {
    let mut next = state.clone();

    for operation in operations {
        if let Operation::Set(assignments) = operation {
            for (key, token) in assignments {
                let normalized = match parse_cell_key(key) {
                    Some(index) if index < CELLS => cell_key(index),
                    _ => key.clone(),
                };
                next.set(normalized, token.clone());
            }
        }
    }

    let mut has_white = false;
    let mut has_black = false;
    for token in next.0.values() {
        if let Some(piece) = parse_cell_token(token)? {
            match piece.color {
                Color::White => has_white = true,
                Color::Black => has_black = true,
            }
        }
    }

    let score = match (has_white, has_black) {
        (true, false) => Some(MatchScore::WHITE_WINS),
        (false, true) => Some(MatchScore::BLACK_WINS),
        _ => None,
    };

    Ok(Transition { next, score })
}
