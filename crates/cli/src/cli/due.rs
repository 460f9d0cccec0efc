use std::io::Write;

use anyhow::Context;
use cf_crontab::parse_document;
use chrono::NaiveDateTime;

use super::input::Input;

const AT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Parse a `--at` argument, or take the current local minute.
pub fn resolve_at(at: Option<&str>) -> anyhow::Result<NaiveDateTime> {
    match at {
        Some(s) => NaiveDateTime::parse_from_str(s, AT_FORMAT)
            .with_context(|| format!("invalid --at {s:?}, expected YYYY-MM-DDTHH:MM")),
        None => Ok(chrono::Local::now().naive_local()),
    }
}

/// Print every entry of `input` that is due at `at`, in file order.
pub fn run(input: &Input, at: &NaiveDateTime, out: &mut impl Write) -> anyhow::Result<usize> {
    let doc = parse_document(&input.text).with_context(|| format!("parsing {}", input.name))?;
    let due = doc.due_at(at);
    tracing::debug!(%at, due = due.len(), total = doc.entries.len(), "evaluated schedule");
    for entry in &due {
        writeln!(out, "{entry}")?;
    }
    Ok(due.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_argument_parses() {
        let at = resolve_at(Some("2024-06-15T09:30")).unwrap();
        assert_eq!(at.to_string(), "2024-06-15 09:30:00");
    }

    #[test]
    fn bad_at_argument_is_rejected() {
        assert!(resolve_at(Some("tomorrow")).is_err());
    }

    #[test]
    fn prints_due_entries() {
        let input = Input {
            name: "tab".into(),
            text: "30 9 * * * root a\n31 9 * * * root b\n*/10 * * * * root c\n".into(),
        };
        let at = resolve_at(Some("2024-06-15T09:30")).unwrap();
        let mut out = Vec::new();
        let n = run(&input, &at, &mut out).unwrap();
        assert_eq!(n, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "30 9 * * * root a\n*/10 * * * * root c\n"
        );
    }
}
