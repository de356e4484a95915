//! The parsed time specification and its readiness predicate.
//!
//! A [`TimeSpec`] holds up to four field constraints (second, minute, hour,
//! weekday). Each field is three-state: a concrete value in its valid range,
//! or unspecified, which acts as a wildcard during matching. Unspecified is
//! `None` — a genuinely distinct state, never conflated with zero.

use chrono::{Datelike, Timelike};
use serde::Serialize;
use std::fmt;

// ── TimeSpec ────────────────────────────────────────────────────────────────

/// A parsed recurring-time pattern.
///
/// Constructed by [`parse`](crate::parse) (or `str::parse`) and immutable
/// afterwards. Two specs are equal iff all four fields are equal; an
/// unspecified field only equals another unspecified field.
///
/// # Examples
///
/// ```
/// use tickspec::TimeSpec;
/// use chrono::NaiveDate;
///
/// let spec: TimeSpec = "Monday 9:05".parse().unwrap();
/// assert_eq!(spec.hour(), Some(9));
/// assert_eq!(spec.second(), None);
///
/// // February 16, 2026 is a Monday.
/// let t = NaiveDate::from_ymd_opt(2026, 2, 16)
///     .unwrap()
///     .and_hms_opt(9, 5, 33)
///     .unwrap();
/// assert!(spec.is_ready(&t));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeSpec {
    second: Option<u32>,
    minute: Option<u32>,
    hour: Option<u32>,
    weekday: Option<u32>,
}

impl TimeSpec {
    /// Build a spec from raw fields, validating every present field against
    /// its range as the final construction step. Each field is checked
    /// independently: `second`/`minute` in `0..=59`, `hour` in `0..=23`,
    /// `weekday` in `0..=6`.
    pub(crate) fn from_fields(
        second: Option<u32>,
        minute: Option<u32>,
        hour: Option<u32>,
        weekday: Option<u32>,
    ) -> Option<Self> {
        let in_range = |field: Option<u32>, max: u32| field.is_none_or(|v| v <= max);
        (in_range(second, 59) && in_range(minute, 59) && in_range(hour, 23) && in_range(weekday, 6))
            .then_some(Self {
                second,
                minute,
                hour,
                weekday,
            })
    }

    /// The second constraint (`0..=59`), or `None` for any second.
    pub fn second(&self) -> Option<u32> {
        self.second
    }

    /// The minute constraint (`0..=59`), or `None` for any minute.
    pub fn minute(&self) -> Option<u32> {
        self.minute
    }

    /// The hour constraint (`0..=23`), or `None` for any hour.
    pub fn hour(&self) -> Option<u32> {
        self.hour
    }

    /// The weekday constraint (`0..=6`, Sunday = 0), or `None` for any day.
    pub fn weekday(&self) -> Option<u32> {
        self.weekday
    }

    /// Test whether a civil timestamp satisfies this spec.
    ///
    /// True iff every specified field equals the timestamp's corresponding
    /// component; unspecified fields match any value. A spec with all four
    /// fields unspecified is ready at every instant.
    ///
    /// Accepts anything exposing chrono's civil-time view (`NaiveDateTime`,
    /// `DateTime<Local>`, ...). Weekdays compare on the Sunday-zero scale.
    pub fn is_ready<T>(&self, t: &T) -> bool
    where
        T: Timelike + Datelike,
    {
        self.second.is_none_or(|s| t.second() == s)
            && self.minute.is_none_or(|m| t.minute() == m)
            && self.hour.is_none_or(|h| t.hour() == h)
            && self
                .weekday
                .is_none_or(|w| t.weekday().num_days_from_sunday() == w)
    }
}

// ── Canonical rendering ─────────────────────────────────────────────────────

/// Full weekday names on the Sunday-zero scale, in the Capitalized form the
/// pattern grammar recognizes.
const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

impl fmt::Display for TimeSpec {
    /// Render the canonical pattern form: re-parsing the output yields an
    /// equal spec. Wildcards render as `**`; the seconds field is omitted
    /// when unspecified.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(wday) = self.weekday {
            write!(f, "{} ", WEEKDAY_NAMES[wday as usize])?;
        }
        match self.hour {
            Some(hour) => write!(f, "{hour}")?,
            None => f.write_str("**")?,
        }
        match self.minute {
            Some(minute) => write!(f, ":{minute:02}")?,
            None => f.write_str(":**")?,
        }
        if let Some(second) = self.second {
            write!(f, ":{second:02}")?;
        }
        Ok(())
    }
}

// ── Weekday vocabulary ──────────────────────────────────────────────────────

/// Look up a weekday name on the Sunday-zero scale.
///
/// The vocabulary is fixed and case-sensitive: the full lowercase name, the
/// full Capitalized name, and the three-letter forms of each ("sunday",
/// "Sunday", "sun", "Sun"). Nothing else is recognized — existing
/// configuration strings depend on this exact set.
pub(crate) fn weekday_index(word: &str) -> Option<u32> {
    match word {
        "sunday" | "Sunday" | "sun" | "Sun" => Some(0),
        "monday" | "Monday" | "mon" | "Mon" => Some(1),
        "tuesday" | "Tuesday" | "tue" | "Tue" => Some(2),
        "wednesday" | "Wednesday" | "wed" | "Wed" => Some(3),
        "thursday" | "Thursday" | "thu" | "Thu" => Some(4),
        "friday" | "Friday" | "fri" | "Fri" => Some(5),
        "saturday" | "Saturday" | "sat" | "Sat" => Some(6),
        _ => None,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
