use clap::Parser;
use tracing_subscriber::EnvFilter;

use cf_domain::config::ObservabilityConfig;
use cf_cli::cli::{self, Cli, Command, ConfigCommand};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let (config, config_path) = cli::load_config()?;
    init_tracing(&config.observability);

    let mut stdout = std::io::stdout().lock();

    let ok = match args.command {
        Command::Fmt { file, json, check } => {
            let input = cli::input::read(file.as_deref(), &config)?;
            let format = if json {
                cf_domain::config::OutputFormat::Json
            } else {
                config.output.format
            };
            cli::fmt::run(&input, format, check, &mut stdout)?
        }
        Command::Check { file } => {
            let input = cli::input::read(file.as_deref(), &config)?;
            cli::check::run(&input, &mut stdout)?
        }
        Command::Env { file } => {
            let input = cli::input::read(file.as_deref(), &config)?;
            cli::env::run(&input, &mut stdout)?;
            true
        }
        Command::Due { file, at } => {
            let at = cli::due::resolve_at(at.as_deref())?;
            let input = cli::input::read(file.as_deref(), &config)?;
            cli::due::run(&input, &at, &mut stdout)?;
            true
        }
        Command::Config(ConfigCommand::Validate) => cli::config::validate(&config, &config_path),
        Command::Config(ConfigCommand::Show) => {
            cli::config::show(&config)?;
            true
        }
        Command::Version => {
            println!("cronfmt {}", env!("CARGO_PKG_VERSION"));
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` overrides the configured filter.
fn init_tracing(obs: &ObservabilityConfig) {
    let directive = if obs.log_filter.trim().is_empty() {
        "warn"
    } else {
        obs.log_filter.as_str()
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    if obs.json_logs {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}
