//! Grade classification for transfer-credit acceptance
//!
//! A grade entry is either a numeric percentage or a letter grade. The entry
//! is resolved into a [`Grade`] once, at classification time; downstream code
//! never re-parses the raw string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum numeric percentage accepted for transfer
pub const PASSING_PERCENTAGE: f64 = 60.0;

/// Letter grades accepted for transfer (exact match after uppercasing)
pub const ACCEPTED_LETTER_GRADES: [&str; 6] = ["A+", "A", "B+", "B", "C+", "C"];

/// A grade entry resolved from raw user input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Grade {
    /// Numeric percentage grade (e.g., 87.5). Values outside 0-100 are kept
    /// as entered; there is no clamping.
    Numeric(f64),
    /// Letter grade code, uppercased (e.g., "B+"). Unrecognized codes are
    /// kept here too and simply classify as not accepted.
    Letter(String),
}

impl Grade {
    /// Resolve a raw grade string into a `Grade`
    ///
    /// Input is trimmed first. If a leading numeric prefix can be read, the
    /// entry is numeric (so a display form like `"87%"` resolves back to the
    /// same numeric grade). Anything else is treated as a letter grade and
    /// uppercased.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        leading_float(trimmed).map_or_else(|| Self::Letter(trimmed.to_uppercase()), Self::Numeric)
    }

    /// Whether this grade is accepted toward the degree requirement
    #[must_use]
    pub fn accepted(&self) -> bool {
        match self {
            Self::Numeric(value) => *value >= PASSING_PERCENTAGE,
            Self::Letter(code) => ACCEPTED_LETTER_GRADES.contains(&code.as_str()),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => {
                if value.fract() == 0.0 {
                    write!(f, "{value:.0}%")
                } else {
                    write!(f, "{value}%")
                }
            }
            Self::Letter(code) => write!(f, "{code}"),
        }
    }
}

/// Result of classifying a raw grade entry
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Whether the credits count toward the requirement
    pub accepted: bool,
    /// Normalized presentation form (`"87%"` or `"A+"`)
    pub display_grade: String,
}

/// Classify a raw grade entry into an acceptance decision and display form
///
/// Pure function: the same input always yields the same classification.
/// Unrecognized letter grades are not an error; they classify as rejected.
#[must_use]
pub fn classify(raw: &str) -> Classification {
    let grade = Grade::parse(raw);
    Classification {
        accepted: grade.accepted(),
        display_grade: grade.to_string(),
    }
}

/// Read the longest leading float prefix of a string, if any
///
/// Mirrors how lenient numeric-entry parsing treats strings like `"87%"` or
/// `"72.5 pts"`: the numeric prefix wins, the tail is ignored. Returns `None`
/// when the string does not start with a number.
fn leading_float(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let mut seen_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        seen_digit = true;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            seen_digit = true;
        }
    }

    if seen_digit {
        s[..end].parse().ok()
    } else {
        None
    }
}
