//! Pairing schedule fields with wall-clock components, and matching.
//!
//! Only the grammar the parser accepts is understood: `*`, `*/n` and bare
//! integers. Tokens such as `1*2` parse but never match anything.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::document::Document;
use crate::field::{FieldName, TimeField};
use crate::line::ScheduleEntry;

/// A schedule field together with the component of a timestamp it governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTime<'a> {
    pub name: FieldName,
    pub value: u32,
    pub field: &'a TimeField,
}

impl FieldTime<'_> {
    pub fn matches(&self) -> bool {
        self.field.matches(self.value)
    }
}

impl TimeField {
    /// Whether `value` is selected by this field.
    pub fn matches(&self, value: u32) -> bool {
        let step = if self.has_interval() {
            match self.interval().parse::<u32>() {
                Ok(n) if n > 0 => Some(n),
                _ => return false,
            }
        } else {
            None
        };

        if self.is_wildcard() {
            return step.map_or(true, |n| value % n == 0);
        }

        let Ok(base) = self.base().parse::<u32>() else {
            return false;
        };
        match step {
            None => value == base,
            Some(n) => value >= base && (value - base) % n == 0,
        }
    }
}

impl ScheduleEntry {
    /// Each field paired with the matching part of `at`, in schedule order.
    ///
    /// Month is 1-12 and day-of-week counts from Sunday = 0.
    pub fn times(&self, at: &NaiveDateTime) -> [FieldTime<'_>; 5] {
        FieldName::ALL.map(|name| FieldTime {
            name,
            value: component(at, name),
            field: self.field(name),
        })
    }

    /// Whether every field selects the corresponding part of `at`.
    pub fn matches(&self, at: &NaiveDateTime) -> bool {
        self.times(at).iter().all(FieldTime::matches)
    }
}

fn component(at: &NaiveDateTime, name: FieldName) -> u32 {
    match name {
        FieldName::Minute => at.minute(),
        FieldName::Hour => at.hour(),
        FieldName::Day => at.day(),
        FieldName::Month => at.month(),
        FieldName::DayOfWeek => at.weekday().num_days_from_sunday(),
    }
}

impl Document {
    /// Entries scheduled to run at `at`, in document order.
    pub fn due_at(&self, at: &NaiveDateTime) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.matches(at)).collect()
    }
}
