use std::io::Write;

use anyhow::Context;
use cf_crontab::parse_document;

use super::input::Input;

/// Print `KEY=VALUE` for every environment variable, sorted by key, with
/// values exactly as written in the crontab.
pub fn run(input: &Input, out: &mut impl Write) -> anyhow::Result<()> {
    let doc = parse_document(&input.text).with_context(|| format!("parsing {}", input.name))?;
    for (key, value) in &doc.environment {
        writeln!(out, "{key}={value}")?;
    }
    Ok(())
}
