//! Error types for pattern parsing.

use thiserror::Error;

/// Why a pattern string was rejected.
///
/// Both variants carry the original, unmodified input so callers can report
/// exactly what was configured. Parsing never partially succeeds: either a
/// fully valid [`TimeSpec`](crate::TimeSpec) is produced or one of these is
/// returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The leading alphabetic token is not a recognized weekday form.
    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    /// The input matches no clock-pattern shape, or a matched numeric field
    /// is out of range.
    #[error("Malformed pattern: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, PatternError>;
