use std::io::Write;

use cf_crontab::parse_document;

use super::input::Input;

/// Parse `input` and report the outcome. Returns `Ok(false)` on a parse
/// error, which is printed rather than propagated.
pub fn run(input: &Input, out: &mut impl Write) -> anyhow::Result<bool> {
    match parse_document(&input.text) {
        Ok(doc) => {
            writeln!(
                out,
                "OK ({} entries, {} environment variables)",
                doc.entries.len(),
                doc.environment.len()
            )?;
            Ok(true)
        }
        Err(e) => {
            tracing::warn!(file = %input.name, line = e.line_number, "crontab rejected");
            writeln!(out, "{}: {e}", input.name)?;
            Ok(false)
        }
    }
}
