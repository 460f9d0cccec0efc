pub mod check;
pub mod config;
pub mod due;
pub mod env;
pub mod fmt;
pub mod input;

use anyhow::Context;
use clap::{Parser, Subcommand};

/// Parse, check and normalize crontab files.
#[derive(Debug, Parser)]
#[command(name = "cronfmt", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the crontab in canonical form.
    Fmt {
        /// Crontab to read ("-" for stdin, defaults to input.path).
        file: Option<String>,
        /// Print the parsed document as JSON instead of crontab text.
        #[arg(long)]
        json: bool,
        /// Print nothing; exit 1 if the file is not already canonical.
        #[arg(long, conflicts_with = "json")]
        check: bool,
    },
    /// Parse the crontab and report the first error, if any.
    Check {
        /// Crontab to read ("-" for stdin, defaults to input.path).
        file: Option<String>,
    },
    /// List environment variables set by the crontab.
    Env {
        /// Crontab to read ("-" for stdin, defaults to input.path).
        file: Option<String>,
    },
    /// List entries scheduled to run at a given minute.
    Due {
        /// Crontab to read ("-" for stdin, defaults to input.path).
        file: Option<String>,
        /// Local time as YYYY-MM-DDTHH:MM (defaults to now).
        #[arg(long)]
        at: Option<String>,
    },
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path specified by `CRONFMT_CONFIG` (or
/// `cronfmt.toml` by default).  Returns the parsed [`Config`] and the
/// path that was used.
///
/// [`Config`]: cf_domain::config::Config
pub fn load_config() -> anyhow::Result<(cf_domain::config::Config, String)> {
    let config_path =
        std::env::var("CRONFMT_CONFIG").unwrap_or_else(|_| "cronfmt.toml".into());

    let path = std::path::Path::new(&config_path);
    let config = if path.exists() {
        cf_domain::config::Config::load(path).with_context(|| format!("loading {config_path}"))?
    } else {
        cf_domain::config::Config::default()
    };

    Ok((config, config_path))
}
