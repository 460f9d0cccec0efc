//! Time-field grammar (one of the five schedule positions).
//!
//! Accepted tokens are deliberately permissive: each `/`-separated part only
//! has to consist of digits and `*` in any mixture, so `1*2` is accepted
//! alongside `*`, `5` and `*/15`. The interval (right of `/`) must be digits.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::GrammarError;

static SECTION_PART: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9*]+$").expect("valid regex"));
static INTERVAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d*$").expect("valid regex"));

/// The wildcard base.
pub const WILDCARD: &str = "*";

/// Schedule positions, in the order they appear on a crontab line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Minute,
    Hour,
    Day,
    Month,
    DayOfWeek,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Minute,
        FieldName::Hour,
        FieldName::Day,
        FieldName::Month,
        FieldName::DayOfWeek,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Minute => "minute",
            FieldName::Hour => "hour",
            FieldName::Day => "day-of-month",
            FieldName::Month => "month",
            FieldName::DayOfWeek => "day-of-week",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One validated time field: a base (`*` or digits) and an optional
/// interval. Only constructible through [`parse_field`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TimeField {
    base: String,
    interval: String,
}

impl TimeField {
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Interval text, empty when the token had no `/`.
    pub fn interval(&self) -> &str {
        &self.interval
    }

    pub fn has_interval(&self) -> bool {
        !self.interval.is_empty()
    }

    pub fn is_wildcard(&self) -> bool {
        self.base == WILDCARD
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_interval() {
            write!(f, "{}/{}", self.base, self.interval)
        } else {
            f.write_str(&self.base)
        }
    }
}

impl FromStr for TimeField {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(s)
    }
}

/// Validate a single field token and split it into base and interval.
pub fn parse_field(token: &str) -> Result<TimeField, GrammarError> {
    let parts: Vec<&str> = token.splitn(2, '/').collect();

    for part in &parts {
        if !SECTION_PART.is_match(part) {
            return Err(GrammarError::InvalidPart {
                token: token.to_owned(),
                part: (*part).to_owned(),
            });
        }
    }

    let (base, interval) = match parts.as_slice() {
        [base] => (*base, ""),
        [base, interval] => (*base, *interval),
        _ => {
            return Err(GrammarError::TooManySegments {
                token: token.to_owned(),
            })
        }
    };

    if !INTERVAL.is_match(interval) {
        return Err(GrammarError::StarredInterval {
            token: token.to_owned(),
        });
    }

    Ok(TimeField {
        base: base.to_owned(),
        interval: interval.to_owned(),
    })
}
