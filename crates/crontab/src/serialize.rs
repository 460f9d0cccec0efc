//! Canonical crontab rendering.
//!
//! Environment assignments come first, sorted by key, each value wrapped in
//! double quotes. Entries follow in parse order with single-space separated
//! fields. Every line ends with `\n`.

use std::fmt::{self, Write as _};

use cf_domain::trace::TraceEvent;

use crate::document::Document;
use crate::line::ScheduleEntry;

/// Render `doc` as canonical crontab text.
pub fn serialize(doc: &Document) -> String {
    let out = doc.to_string();
    TraceEvent::CrontabSerialized { bytes: out.len() }.emit();
    out
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // BTreeMap iteration is already byte-wise ascending.
        for (key, value) in &self.environment {
            writeln!(f, "{key}={}", quote_value(value))?;
        }
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.minute,
            self.hour,
            self.day,
            self.month,
            self.day_of_week,
            self.user,
            self.command
        )
    }
}

/// Wrap an environment value in double quotes.
///
/// A value that is already a double-quoted literal is emitted as-is, so
/// canonical output parses back to the same text. Anything else is quoted
/// with backslash escapes for `"`, `\` and any character [`is_printable`]
/// rejects.
pub fn quote_value(value: &str) -> String {
    if is_quoted(value) {
        return value.to_owned();
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0b}' => out.push_str("\\v"),
            '\u{0c}' => out.push_str("\\f"),
            c if !is_printable(c) => {
                let code = c as u32;
                let _ = match code {
                    0..=0x7f => write!(out, "\\x{code:02x}"),
                    0x80..=0xffff => write!(out, "\\u{code:04x}"),
                    _ => write!(out, "\\U{code:08x}"),
                };
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Whether `c` may appear unescaped inside a quoted value.
///
/// Rejects control characters, separators other than ASCII space, format
/// characters and private-use code points. Unassigned code points pass.
pub fn is_printable(c: char) -> bool {
    if c.is_control() {
        return false;
    }
    !matches!(
        c as u32,
        // Space separators (Zs) other than U+0020, plus Zl and Zp.
        0x00a0
            | 0x1680
            | 0x2000..=0x200a
            | 0x2028
            | 0x2029
            | 0x202f
            | 0x205f
            | 0x3000
            // Format characters (Cf).
            | 0x00ad
            | 0x0600..=0x0605
            | 0x061c
            | 0x06dd
            | 0x070f
            | 0x0890..=0x0891
            | 0x08e2
            | 0x180e
            | 0x200b..=0x200f
            | 0x202a..=0x202e
            | 0x2060..=0x2064
            | 0x2066..=0x206f
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0x110bd
            | 0x110cd
            | 0x13430..=0x1343f
            | 0x1bca0..=0x1bca3
            | 0x1d173..=0x1d17a
            | 0xe0001
            | 0xe0020..=0xe007f
            // Private use (Co).
            | 0xe000..=0xf8ff
            | 0xf0000..=0xffffd
            | 0x100000..=0x10fffd
    )
}

fn is_quoted(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('"') && value.ends_with('"')
}
