//! Claimed-move validation.
//!
//! The validator never trusts the submitted move: it rebuilds the legal-move
//! set from the pre-move board and compares the claim against it, enforcing
//! mandatory capture, multi-jump continuation, the turn transition, and any
//! win claim. Malformed moves are expected adversarial input and produce a
//! [`Rejection`], never a panic; a state snapshot that cannot be decoded at
//! all is the caller's fault and surfaces as a [`ProtocolError`].

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::ProtocolError;
use super::protocol::{parse_cell_key, Operation, Snapshot};
use super::transition::next_state;
use super::types::{Color, Jump, MatchScore, Square};
use super::Board;

/// A claimed move as the platform delivers it: the committed state before
/// the move, the move's operations, and the turn indices around it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Submission {
    pub state_before: Snapshot,
    pub operations: Vec<Operation>,
    pub turn_before: Color,
    pub turn_after: Color,
}

impl Submission {
    /// Build a submission from raw protocol turn indices (0 = White,
    /// 1 = Black).
    pub fn from_turn_indices(
        state_before: Snapshot,
        operations: Vec<Operation>,
        turn_before: u8,
        turn_after: u8,
    ) -> Result<Self, ProtocolError> {
        let decode = |index: u8| {
            Color::from_turn_index(index).ok_or(ProtocolError::InvalidTurnIndex { found: index })
        };
        Ok(Submission {
            state_before,
            operations,
            turn_before: decode(turn_before)?,
            turn_after: decode(turn_after)?,
        })
    }
}

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RejectReason {
    /// A referenced cell index is out of range or not an integer
    IllegalIndex,
    /// The move encodes neither a simple move nor a single jump
    IllegalMoveShape,
    /// A simple move was submitted while some piece of the mover's color
    /// had a jump available
    MandatoryJumpIgnored,
    /// The claimed destination is not a legal simple move
    IllegalSimpleMove,
    /// The claimed capture is not a legal jump
    IllegalJump,
    /// The post-move turn index violates the continuation rule
    IllegalTurnTransition,
    /// The claimed winner disagrees with the computed outcome
    IllegalWinnerClaim,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::IllegalIndex => write!(f, "illegal cell index"),
            RejectReason::IllegalMoveShape => write!(f, "illegal move shape"),
            RejectReason::MandatoryJumpIgnored => write!(f, "mandatory jump ignored"),
            RejectReason::IllegalSimpleMove => write!(f, "illegal simple move"),
            RejectReason::IllegalJump => write!(f, "illegal jump"),
            RejectReason::IllegalTurnTransition => write!(f, "illegal turn transition"),
            RejectReason::IllegalWinnerClaim => write!(f, "illegal winner claim"),
        }
    }
}

/// Structured cheat report handed to the downstream abuse collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rejection {
    pub reason: RejectReason,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move rejected: {}", self.reason)
    }
}

/// Validation outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// The claimed move extracted from the operation list. Indices stay
/// unchecked here; bounds are the first pipeline step.
struct MoveClaim {
    source: Option<Square>,
    hops: Vec<Option<Square>>,
    claimed_winner: Option<Color>,
}

/// Pull the moved piece, hop cells, and any win claim out of the operation
/// list. Two `set` operations are a simple move (origin-clear plus
/// destination), three are a jump (origin-clear, capture-removal,
/// destination); each must assign exactly one cell. Anything else is a
/// malformed shape.
fn decode_claim(operations: &[Operation]) -> Result<MoveClaim, RejectReason> {
    let mut sets = Vec::with_capacity(3);
    let mut claimed_winner = None;

    for operation in operations {
        match operation {
            Operation::Set(assignments) => sets.push(assignments),
            Operation::EndMatch(end) => claimed_winner = Some(end.claimed_winner()),
            Operation::SetTurn(_) => {}
        }
    }

    if !(2..=3).contains(&sets.len()) {
        return Err(RejectReason::IllegalMoveShape);
    }

    let mut cells = Vec::with_capacity(sets.len());
    for assignments in sets {
        if assignments.len() != 1 {
            return Err(RejectReason::IllegalMoveShape);
        }
        let key = match assignments.keys().next() {
            Some(key) => key,
            None => return Err(RejectReason::IllegalMoveShape),
        };
        cells.push(parse_cell_key(key).and_then(Square::new));
    }

    Ok(MoveClaim {
        source: cells[0],
        hops: cells[1..].to_vec(),
        claimed_winner,
    })
}

/// Decide whether a claimed move is legal.
///
/// Rebuilds the ground-truth legal moves from `state_before`, applies the
/// claimed operations to learn the implied next state, and walks the
/// validation pipeline, short-circuiting on the first violation.
pub fn verify_move(submission: &Submission) -> Result<Verdict, ProtocolError> {
    let claim = match decode_claim(&submission.operations) {
        Ok(claim) => claim,
        Err(reason) => return Ok(reject(reason)),
    };

    let source = match claim.source {
        Some(source) => source,
        None => return Ok(reject(RejectReason::IllegalIndex)),
    };
    let mut hops = Vec::with_capacity(claim.hops.len());
    for hop in &claim.hops {
        match hop {
            Some(sq) => hops.push(*sq),
            None => return Ok(reject(RejectReason::IllegalIndex)),
        }
    }

    let before = Board::try_from_snapshot(&submission.state_before)?;
    let transition = next_state(&submission.state_before, &submission.operations)?;
    let after = Board::try_from_snapshot(&transition.next)?;
    let mover = submission.turn_before;

    match hops.as_slice() {
        [destination] => {
            if before.color_has_jump(mover) {
                return Ok(reject(RejectReason::MandatoryJumpIgnored));
            }
            if !before.simple_moves(source, mover).contains(destination) {
                return Ok(reject(RejectReason::IllegalSimpleMove));
            }
            if submission.turn_after == mover {
                return Ok(reject(RejectReason::IllegalTurnTransition));
            }
        }
        [captured, landing] => {
            let jump = Jump::new(*captured, *landing);
            if !before.jump_moves(source, mover).contains(&jump) {
                return Ok(reject(RejectReason::IllegalJump));
            }
            // Continuation is judged on the board the claim implies: if the
            // jumping piece can jump again from its landing cell, the turn
            // must stay with the mover, otherwise it must switch.
            let continues = !after.jump_moves(*landing, mover).is_empty();
            if continues != (submission.turn_after == mover) {
                return Ok(reject(RejectReason::IllegalTurnTransition));
            }
        }
        _ => return Ok(reject(RejectReason::IllegalMoveShape)),
    }

    if let Some(claimed) = claim.claimed_winner {
        let computed = transition.score.as_ref().and_then(MatchScore::winner);
        if computed != Some(claimed) {
            return Ok(reject(RejectReason::IllegalWinnerClaim));
        }
    }

    Ok(Verdict::Accepted)
}

fn reject(reason: RejectReason) -> Verdict {
    #[cfg(feature = "logging")]
    log::warn!("move rejected: {reason}");
    Verdict::Rejected(Rejection { reason })
}
