//! Error taxonomy for crontab parsing.
//!
//! - [`GrammarError`]: a single time-field token is malformed.
//! - [`ClassificationError`]: a line is neither a schedule entry nor an
//!   environment assignment.
//! - [`ParseError`]: the first line of a document that failed, with its
//!   1-based line number.

use crate::field::FieldName;

/// A time-field token failed the character-class or interval rule.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("could not parse part {part:?} of field {token:?}")]
    InvalidPart { token: String, part: String },

    #[error("could not parse field {token:?}")]
    TooManySegments { token: String },

    #[error("interval of field {token:?} must be decimal digits")]
    StarredInterval { token: String },
}

impl GrammarError {
    /// The token that failed to parse.
    pub fn token(&self) -> &str {
        match self {
            Self::InvalidPart { token, .. }
            | Self::TooManySegments { token }
            | Self::StarredInterval { token } => token,
        }
    }
}

/// A line matched neither the schedule-entry nor the environment shape.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassificationError {
    #[error("not enough components found in cron line {line:?}")]
    TooFewFields { line: String },

    #[error("{field} is invalid in cron line {line:?}: {source}")]
    Field {
        field: FieldName,
        line: String,
        #[source]
        source: GrammarError,
    },

    #[error("no '=' found in environment line {line:?}")]
    MissingEquals { line: String },

    #[error("could not locate key for environment line {line:?}")]
    EmptyKey { line: String },

    #[error("unrecognized line {line:?} ({schedule}; {environment})")]
    Unrecognized {
        line: String,
        schedule: Box<ClassificationError>,
        environment: Box<ClassificationError>,
    },
}

impl ClassificationError {
    /// The line that failed to classify.
    pub fn line(&self) -> &str {
        match self {
            Self::TooFewFields { line }
            | Self::Field { line, .. }
            | Self::MissingEquals { line }
            | Self::EmptyKey { line }
            | Self::Unrecognized { line, .. } => line,
        }
    }
}

/// First failure encountered while assembling a document.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line_number}: {source}")]
pub struct ParseError {
    /// 1-based position of the offending line in the input.
    pub line_number: usize,
    /// The offending line with leading blanks stripped.
    pub line: String,
    #[source]
    pub source: ClassificationError,
}
