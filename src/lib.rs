pub mod board;

pub use board::{Board, BoardBuilder, Color, Jump, Kind, MatchScore, Piece, Square};
pub use board::{RejectReason, Rejection, Submission, Verdict};
