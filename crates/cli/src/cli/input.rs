use std::io::Read;

use anyhow::Context;
use cf_domain::config::Config;

/// Crontab text plus a name for messages.
#[derive(Debug, Clone)]
pub struct Input {
    pub name: String,
    pub text: String,
}

/// Read the crontab named on the command line.
///
/// `-` reads stdin; no argument falls back to `input.path` from config.
pub fn read(file: Option<&str>, config: &Config) -> anyhow::Result<Input> {
    match file {
        Some("-") => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            Ok(Input {
                name: "<stdin>".into(),
                text,
            })
        }
        Some(path) => read_path(path).with_context(|| format!("reading {path}")),
        None => {
            let path = config.input.path.display().to_string();
            read_path(&path).with_context(|| format!("reading {path}"))
        }
    }
}

fn read_path(path: &str) -> cf_domain::Result<Input> {
    let text = std::fs::read_to_string(path)?;
    tracing::debug!(path, bytes = text.len(), "crontab loaded");
    Ok(Input {
        name: path.to_owned(),
        text,
    })
}
