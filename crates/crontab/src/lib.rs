//! Crontab parsing and canonical rendering.
//!
//! Text flows one way through the modules:
//! - [`document`] splits the input into lines and skips blanks and comments
//! - [`line`] classifies each remaining line as a schedule entry or an
//!   environment assignment
//! - [`field`] validates the five time fields of a schedule entry
//! - [`serialize`] renders a [`Document`] back to canonical text
//!
//! [`times`] pairs entries with wall-clock time for matching.

pub mod document;
pub mod error;
pub mod field;
pub mod line;
pub mod serialize;
pub mod times;

pub use document::{parse_document, Document};
pub use error::{ClassificationError, GrammarError, ParseError};
pub use field::{parse_field, FieldName, TimeField};
pub use line::{
    classify_line, parse_environment_line, parse_line, EnvironmentAssignment, Line, ScheduleEntry,
};
pub use serialize::serialize;
pub use times::FieldTime;
