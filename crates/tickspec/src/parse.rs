//! Pattern-string parsing.
//!
//! A pattern is an optional weekday prefix followed by a clock-pattern:
//! colon-separated hour, minute, and optional second fields, where `**`
//! (and, for the hour, `*`) leaves a field unspecified. The full input is
//! either accepted as one of a fixed set of shapes or rejected — there is no
//! partial parse and no coercion of out-of-range values.
//!
//! Parsing is pure: it never consults the clock or any external state.

use crate::error::{PatternError, Result};
use crate::spec::{weekday_index, TimeSpec};

// ── Entry points ────────────────────────────────────────────────────────────

/// Parse an optional pattern string.
///
/// An absent pattern is not an error: it yields `Ok(None)`, which callers
/// treat as "unconditionally ready".
///
/// # Errors
///
/// Returns [`PatternError::UnknownWeekday`] if the leading alphabetic token
/// is not a recognized weekday form, or [`PatternError::Malformed`] if the
/// clock portion matches no shape or carries an out-of-range value. Both
/// carry the original input.
///
/// # Examples
///
/// ```
/// let spec = tickspec::parse(Some("Monday 9:05"))?.unwrap();
/// assert_eq!(spec.weekday(), Some(1));
/// assert_eq!(spec.hour(), Some(9));
///
/// assert!(tickspec::parse(None)?.is_none());
/// # Ok::<(), tickspec::PatternError>(())
/// ```
pub fn parse(pattern: Option<&str>) -> Result<Option<TimeSpec>> {
    pattern.map(parse_pattern).transpose()
}

/// Parse a required pattern string into a [`TimeSpec`].
///
/// Also available as `impl FromStr for TimeSpec`.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_pattern(input: &str) -> Result<TimeSpec> {
    let (weekday, clock) = match split_weekday_prefix(input) {
        Some((word, rest)) => {
            let index = weekday_index(word)
                .ok_or_else(|| PatternError::UnknownWeekday(input.to_string()))?;
            (Some(index), rest)
        }
        None => (None, input),
    };

    let (hour, minute, second) =
        parse_clock(clock).ok_or_else(|| PatternError::Malformed(input.to_string()))?;

    // Range validation is the final construction step; a violation surfaces
    // as the same error kind as a shape mismatch.
    TimeSpec::from_fields(second, minute, hour, weekday)
        .ok_or_else(|| PatternError::Malformed(input.to_string()))
}

impl std::str::FromStr for TimeSpec {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        parse_pattern(s)
    }
}

// ── Weekday prefix ──────────────────────────────────────────────────────────

/// Split `"<word> <rest>"` at the first whitespace character when the
/// leading token is non-empty and entirely alphabetic. Inputs without such a
/// prefix (including bare weekday names with no remainder) are left to the
/// clock-pattern shapes.
fn split_weekday_prefix(input: &str) -> Option<(&str, &str)> {
    let (word, rest) = input.split_once(char::is_whitespace)?;
    if !word.is_empty() && word.chars().all(char::is_alphabetic) {
        Some((word, rest))
    } else {
        None
    }
}

// ── Clock-pattern shapes ────────────────────────────────────────────────────

/// One colon-separated field of a clock pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClockField {
    /// `*` or `**`; the payload is the asterisk count.
    Wild(usize),
    /// A base-10 number of one or two digits; the digit count is kept so
    /// shapes can demand exactly-two-digit minutes and seconds.
    Num(u32, usize),
}

fn classify(token: &str) -> Option<ClockField> {
    match token.len() {
        1 | 2 if token.bytes().all(|b| b == b'*') => Some(ClockField::Wild(token.len())),
        1 | 2 if token.bytes().all(|b| b.is_ascii_digit()) => {
            Some(ClockField::Num(token.parse().ok()?, token.len()))
        }
        _ => None,
    }
}

/// The `(hour, minute, second)` triple a clock-pattern produces; `None` is
/// the unspecified wildcard state.
type ClockTriple = (Option<u32>, Option<u32>, Option<u32>);

/// Match a clock string against the fixed shape set, in documented order.
///
/// `H` is one or two digits, `MM`/`SS` exactly two. The hour wildcard is `*`
/// or `**` in the shapes that pair it with a wildcard minute, and `**` only
/// where the minute is numeric; minute and second wildcards are always `**`.
fn parse_clock(clock: &str) -> Option<ClockTriple> {
    use ClockField::{Num, Wild};

    let fields: Vec<ClockField> = clock.split(':').map(classify).collect::<Option<_>>()?;

    match fields.as_slice() {
        // H:MM
        &[Num(h, _), Num(m, 2)] => Some((Some(h), Some(m), None)),
        // *:MM / **:MM
        &[Wild(_), Num(m, 2)] => Some((None, Some(m), None)),
        // H:**
        &[Num(h, _), Wild(2)] => Some((Some(h), None, None)),
        // *:** / **:**
        &[Wild(_), Wild(2)] => Some((None, None, None)),
        // *:**:SS / **:**:SS
        &[Wild(_), Wild(2), Num(s, 2)] => Some((None, None, Some(s))),
        // **:MM:SS
        &[Wild(2), Num(m, 2), Num(s, 2)] => Some((None, Some(m), Some(s))),
        // H:MM:SS
        &[Num(h, _), Num(m, 2), Num(s, 2)] => Some((Some(h), Some(m), Some(s))),
        // H:**:SS
        &[Num(h, _), Wild(2), Num(s, 2)] => Some((Some(h), None, Some(s))),
        // H:MM:**
        &[Num(h, _), Num(m, 2), Wild(2)] => Some((Some(h), Some(m), None)),
        // **:MM:**
        &[Wild(2), Num(m, 2), Wild(2)] => Some((None, Some(m), None)),
        _ => None,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
