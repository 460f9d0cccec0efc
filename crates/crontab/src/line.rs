//! Line classification: schedule entries and `KEY=VALUE` environment lines.
//!
//! A line is offered to the schedule-entry parser first. Only when that
//! fails, for any reason, is the whole line offered to the environment
//! parser. A schedule line that splits into seven pieces but has a bad time
//! field is therefore still eligible to become an environment assignment.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::ClassificationError;
use crate::field::{parse_field, FieldName, TimeField};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("valid regex"));

/// Five time fields, user and the command (the unsplit remainder).
const ENTRY_PIECES: usize = 7;

/// One schedule line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub minute: TimeField,
    pub hour: TimeField,
    pub day: TimeField,
    pub month: TimeField,
    pub day_of_week: TimeField,
    pub user: String,
    pub command: String,
}

impl ScheduleEntry {
    pub fn field(&self, name: FieldName) -> &TimeField {
        match name {
            FieldName::Minute => &self.minute,
            FieldName::Hour => &self.hour,
            FieldName::Day => &self.day,
            FieldName::Month => &self.month,
            FieldName::DayOfWeek => &self.day_of_week,
        }
    }

    /// All time fields in schedule order.
    pub fn fields(&self) -> [&TimeField; 5] {
        [
            &self.minute,
            &self.hour,
            &self.day,
            &self.month,
            &self.day_of_week,
        ]
    }
}

/// A `KEY=VALUE` line. The value is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentAssignment {
    pub key: String,
    pub value: String,
}

/// Result of classifying a non-blank, non-comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Schedule(ScheduleEntry),
    Environment(EnvironmentAssignment),
}

/// Parse a schedule line into its five fields, user and command.
///
/// Fields are validated minute first; the first bad field aborts the line.
pub fn parse_line(line: &str) -> Result<ScheduleEntry, ClassificationError> {
    let pieces: Vec<&str> = WHITESPACE.splitn(line, ENTRY_PIECES).collect();
    if pieces.len() != ENTRY_PIECES {
        return Err(ClassificationError::TooFewFields {
            line: line.to_owned(),
        });
    }

    let field = |name: FieldName, token: &str| {
        parse_field(token).map_err(|source| ClassificationError::Field {
            field: name,
            line: line.to_owned(),
            source,
        })
    };

    Ok(ScheduleEntry {
        minute: field(FieldName::Minute, pieces[0])?,
        hour: field(FieldName::Hour, pieces[1])?,
        day: field(FieldName::Day, pieces[2])?,
        month: field(FieldName::Month, pieces[3])?,
        day_of_week: field(FieldName::DayOfWeek, pieces[4])?,
        user: pieces[5].to_owned(),
        command: pieces[6].to_owned(),
    })
}

/// Parse a `KEY=VALUE` line, splitting on the first `=`.
pub fn parse_environment_line(line: &str) -> Result<EnvironmentAssignment, ClassificationError> {
    let Some((key, value)) = line.split_once('=') else {
        return Err(ClassificationError::MissingEquals {
            line: line.to_owned(),
        });
    };

    if key.is_empty() {
        return Err(ClassificationError::EmptyKey {
            line: line.to_owned(),
        });
    }

    Ok(EnvironmentAssignment {
        key: key.to_owned(),
        value: value.to_owned(),
    })
}

/// Decide whether `line` is a schedule entry or an environment assignment.
///
/// Schedule wins when both shapes would parse.
pub fn classify_line(line: &str) -> Result<Line, ClassificationError> {
    let schedule = match parse_line(line) {
        Ok(entry) => return Ok(Line::Schedule(entry)),
        Err(err) => err,
    };

    tracing::trace!(line, error = %schedule, "not a schedule entry, trying environment");

    match parse_environment_line(line) {
        Ok(assignment) => Ok(Line::Environment(assignment)),
        Err(environment) => Err(ClassificationError::Unrecognized {
            line: line.to_owned(),
            schedule: Box::new(schedule),
            environment: Box::new(environment),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYSTEM_CRONTAB: [&str; 5] = [
        "17 *    * * *   root    cd / && run-parts --report /etc/cron.hourly",
        "25 6    * * *   root    test -x /usr/sbin/anacron || ( cd / && run-parts --report /etc/cron.daily )",
        "47 6    * * 7   root    test -x /usr/sbin/anacron || ( cd / && run-parts --report /etc/cron.weekly )",
        "52 6    1 * *   root    test -x /usr/sbin/anacron || ( cd / && run-parts --report /etc/cron.monthly )",
        "*/1 * * * * root /usr/local/rtm/bin/rtm 9 > /dev/null 2> /dev/null",
    ];

    // ── Schedule entries ─────────────────────────────────────────────

    #[test]
    fn parses_system_crontab_lines() {
        for line in SYSTEM_CRONTAB {
            assert!(parse_line(line).is_ok(), "could not parse line: {line}");
        }
    }

    #[test]
    fn splits_fields_user_and_command() {
        let entry = parse_line(SYSTEM_CRONTAB[0]).unwrap();
        assert_eq!(entry.minute.base(), "17");
        assert_eq!(entry.hour.base(), "*");
        assert_eq!(entry.day.base(), "*");
        assert_eq!(entry.month.base(), "*");
        assert_eq!(entry.day_of_week.base(), "*");
        assert_eq!(entry.user, "root");
        assert_eq!(entry.command, "cd / && run-parts --report /etc/cron.hourly");
    }

    #[test]
    fn command_keeps_internal_spacing() {
        let entry = parse_line("0 0 * * *\troot\techo  a\t b  ").unwrap();
        assert_eq!(entry.user, "root");
        assert_eq!(entry.command, "echo  a\t b  ");
    }

    #[test]
    fn interval_field_is_split() {
        let entry = parse_line(SYSTEM_CRONTAB[4]).unwrap();
        assert_eq!(entry.minute.base(), "*");
        assert_eq!(entry.minute.interval(), "1");
    }

    #[test]
    fn trailing_blank_gives_empty_command() {
        let entry = parse_line("1 2 3 4 5 root ").unwrap();
        assert_eq!(entry.command, "");
    }

    #[test]
    fn too_few_pieces_rejected() {
        assert!(matches!(
            parse_line("1 2 3 4 5 root"),
            Err(ClassificationError::TooFewFields { .. })
        ));
        assert!(parse_line("2").is_err());
    }

    #[test]
    fn first_bad_field_wins() {
        let err = parse_line("1 x 3 y 5 root cmd").unwrap_err();
        match err {
            ClassificationError::Field { field, source, .. } => {
                assert_eq!(field, FieldName::Hour);
                assert_eq!(source.token(), "x");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn field_accessor_matches_struct() {
        let entry = parse_line("1 2 3 4 5 root cmd").unwrap();
        for (name, field) in FieldName::ALL.iter().zip(entry.fields()) {
            assert_eq!(entry.field(*name), field);
        }
        assert_eq!(entry.field(FieldName::DayOfWeek).base(), "5");
    }

    // ── Environment lines ────────────────────────────────────────────

    #[test]
    fn environment_key_and_value() {
        let a = parse_environment_line("foo=bar").unwrap();
        assert_eq!(a.key, "foo");
        assert_eq!(a.value, "bar");
    }

    #[test]
    fn environment_empty_value() {
        let a = parse_environment_line("foo=").unwrap();
        assert_eq!(a.key, "foo");
        assert_eq!(a.value, "");
    }

    #[test]
    fn environment_value_keeps_later_equals_and_quotes() {
        let a = parse_environment_line("PATH=\"/bin:/a=b\"").unwrap();
        assert_eq!(a.key, "PATH");
        assert_eq!(a.value, "\"/bin:/a=b\"");
    }

    #[test]
    fn environment_rejects_empty_key_and_missing_equals() {
        assert!(matches!(
            parse_environment_line("="),
            Err(ClassificationError::EmptyKey { .. })
        ));
        assert!(matches!(
            parse_environment_line(""),
            Err(ClassificationError::MissingEquals { .. })
        ));
        assert!(parse_environment_line("foo").is_err());
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    #[test]
    fn classify_prefers_schedule() {
        let line = "1 2 3 4 5 root FOO=bar";
        assert!(matches!(classify_line(line), Ok(Line::Schedule(_))));
    }

    #[test]
    fn classify_falls_back_to_environment() {
        match classify_line("SHELL=/bin/sh").unwrap() {
            Line::Environment(a) => {
                assert_eq!(a.key, "SHELL");
                assert_eq!(a.value, "/bin/sh");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn bad_field_line_with_equals_becomes_environment() {
        let line = "1 2 x 4 5 root A=B";
        match classify_line(line).unwrap() {
            Line::Environment(a) => {
                assert_eq!(a.key, "1 2 x 4 5 root A");
                assert_eq!(a.value, "B");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn classify_rejects_neither_shape() {
        let err = classify_line("2").unwrap_err();
        match err {
            ClassificationError::Unrecognized {
                line,
                schedule,
                environment,
            } => {
                assert_eq!(line, "2");
                assert!(matches!(*schedule, ClassificationError::TooFewFields { .. }));
                assert!(matches!(*environment, ClassificationError::MissingEquals { .. }));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
