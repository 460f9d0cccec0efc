//! Whole-crontab assembly: environment variables plus ordered entries.

use std::collections::BTreeMap;
use std::str::FromStr;

use cf_domain::trace::TraceEvent;
use serde::Serialize;

use crate::error::{ClassificationError, ParseError};
use crate::line::{classify_line, parse_environment_line, parse_line, Line, ScheduleEntry};

/// A parsed crontab.
///
/// Environment keys are unique (the last assignment wins) and kept in
/// byte-wise order; entries keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub environment: BTreeMap<String, String>,
    pub entries: Vec<ScheduleEntry>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.environment.is_empty() && self.entries.is_empty()
    }

    /// Parse a whole crontab body into this document.
    ///
    /// Stops at the first line that cannot be classified. Lines accepted
    /// before the failure stay in `self`.
    pub fn parse_crontab(&mut self, body: &str) -> Result<(), ParseError> {
        for (idx, raw) in body.split('\n').enumerate() {
            let line = raw.trim_start_matches([' ', '\t']);
            if line.is_empty() || line.starts_with('#') {
                tracing::trace!(line_number = idx + 1, "skipping blank or comment line");
                continue;
            }

            if let Err(source) = self.parse_line(line) {
                TraceEvent::LineRejected {
                    line_number: idx + 1,
                    reason: source.to_string(),
                }
                .emit();
                return Err(ParseError {
                    line_number: idx + 1,
                    line: line.to_owned(),
                    source,
                });
            }
        }

        TraceEvent::CrontabParsed {
            lines: line_count(body),
            entries: self.entries.len(),
            environment_vars: self.environment.len(),
        }
        .emit();
        Ok(())
    }

    /// Classify a single line and add it to the document.
    pub fn parse_line(&mut self, line: &str) -> Result<(), ClassificationError> {
        match classify_line(line)? {
            Line::Schedule(entry) => self.push_entry(entry),
            Line::Environment(assignment) => self.set_env(assignment.key, assignment.value),
        }
        Ok(())
    }

    /// Parse `line` strictly as a schedule entry and append it.
    pub fn parse_entry(&mut self, line: &str) -> Result<(), ClassificationError> {
        let entry = parse_line(line)?;
        self.push_entry(entry);
        Ok(())
    }

    /// Parse `line` strictly as a `KEY=VALUE` assignment and store it.
    pub fn parse_environment(&mut self, line: &str) -> Result<(), ClassificationError> {
        let assignment = parse_environment_line(line)?;
        self.set_env(assignment.key, assignment.value);
        Ok(())
    }

    fn push_entry(&mut self, entry: ScheduleEntry) {
        tracing::debug!(user = %entry.user, command = %entry.command, "schedule entry");
        self.entries.push(entry);
    }

    fn set_env(&mut self, key: String, value: String) {
        tracing::debug!(%key, "environment assignment");
        if let Some(previous) = self.environment.insert(key, value) {
            tracing::debug!(%previous, "environment key overwritten");
        }
    }
}

impl FromStr for Document {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_document(s)
    }
}

/// Lines in `body`, not counting the empty tail after a final newline.
fn line_count(body: &str) -> usize {
    body.lines().count()
}

/// Parse crontab text into a fresh [`Document`].
pub fn parse_document(text: &str) -> Result<Document, ParseError> {
    let mut doc = Document::new();
    doc.parse_crontab(text)?;
    Ok(doc)
}
