//! Bracket validation error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{Competitor, MatchId};

/// Errors reported by bracket operations.
///
/// Each variant is a pure validation failure. Operations validate before
/// they write, so a returned error means the bracket is exactly as it was
/// before the call.
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum BracketError {
    #[error("competitor names can't be blank")]
    BlankCompetitor,
    #[error("{0:?} is a reserved name")]
    ReservedName(String),
    #[error("{name} is entered more than once")]
    DuplicateCompetitor { name: Competitor },
    #[error("field size must be one of 2, 4, 8, or 16 (got {count})")]
    InvalidCompetitorCount { count: usize },
    #[error("no match with id {0}")]
    MatchNotFound(MatchId),
    #[error("{winner} isn't a competitor in match {match_id}")]
    InvalidWinner { match_id: MatchId, winner: Competitor },
    #[error("match {match_id} already went to {winner}")]
    MatchAlreadyDecided { match_id: MatchId, winner: Competitor },
}

/// A bracket operation result.
pub type BracketResult<T> = Result<T, BracketError>;
