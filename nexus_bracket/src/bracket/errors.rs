//! Bracket error types.

use thiserror::Error;

use super::models::MatchId;

/// Errors returned when a mark/clear call is rejected.
///
/// A rejected call never modifies the bracket, so callers that prefer the
/// silent no-op behaviour can discard the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    /// No match exists at the given address
    #[error("match {0} does not exist")]
    MatchNotFound(MatchId),

    /// The champion round is terminal and cannot be marked or cleared
    #[error("champion round cannot be changed")]
    ChampionRoundImmutable,

    /// Slot index other than 0 (upper) or 1 (lower)
    #[error("invalid slot index {0}, expected 0 or 1")]
    InvalidSlot(usize),

    /// Slot label other than upper/lower
    #[error("invalid slot '{0}', expected upper or lower")]
    InvalidSlotLabel(String),

    /// Match address that is not of the form `r<round>m<match>`
    #[error("invalid match id '{0}', expected r<round>m<match>")]
    InvalidMatchId(String),
}

/// Result type for bracket operations
pub type BracketResult<T> = Result<T, BracketError>;
