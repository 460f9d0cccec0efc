use std::io::Write;

use anyhow::Context;
use cf_crontab::{parse_document, serialize};
use cf_domain::config::OutputFormat;

use super::input::Input;

/// Render `input` in canonical form (or JSON) to `out`.
///
/// With `check`, nothing is rendered; returns `Ok(false)` when the input is
/// not already canonical.
pub fn run(
    input: &Input,
    format: OutputFormat,
    check: bool,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let doc = parse_document(&input.text).with_context(|| format!("parsing {}", input.name))?;

    if check {
        let canonical = serialize(&doc) == input.text;
        if !canonical {
            writeln!(out, "{} is not in canonical form", input.name)?;
        }
        return Ok(canonical);
    }

    match format {
        OutputFormat::Crontab => write!(out, "{}", serialize(&doc))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?,
    }
    Ok(true)
}
