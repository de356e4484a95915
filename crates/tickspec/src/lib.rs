//! # tickspec
//!
//! Recurring time-pattern parsing and readiness matching.
//!
//! A pattern is a compact textual description of recurring points in time —
//! `"Monday 14:30"`, `"**:15"`, `"12:**:00"`. Parsing turns it into a
//! [`TimeSpec`] with up to four field constraints (second, minute, hour,
//! weekday), each either a concrete value or a wildcard;
//! [`TimeSpec::is_ready`] then tests whether a concrete civil timestamp
//! satisfies it. Schedulers poll that predicate against wall-clock time;
//! this crate itself never reads the clock and keeps no state, so both
//! operations are deterministic and freely shareable across threads.
//!
//! Weekday prefixes accept the full and three-letter names in lowercase and
//! Capitalized form (`"sunday"`, `"Sunday"`, `"sun"`, `"Sun"`). The clock
//! portion is `hour:minute` or `hour:minute:second`, with `**` (for the
//! hour, also `*`) leaving a field unspecified. Anything else — including
//! out-of-range values — is rejected with an error carrying the original
//! input; nothing is clamped or guessed.
//!
//! ## Modules
//!
//! - [`parse`] — pattern string → [`TimeSpec`]
//! - [`spec`] — the spec type, its readiness predicate, and its canonical rendering
//! - [`error`] — error types

pub mod error;
pub mod parse;
pub mod spec;

pub use error::PatternError;
pub use parse::{parse, parse_pattern};
pub use spec::TimeSpec;
