use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Observability (logging) configuration
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Logging configuration for the CLI.
///
/// `RUST_LOG` takes precedence over `log_filter` when set. Logs always go
/// to stderr so that formatted crontab output on stdout stays clean.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// `tracing_subscriber::EnvFilter` directive string.
    #[serde(default = "d_log_filter")]
    pub log_filter: String,

    /// Emit structured JSON log lines instead of the compact format.
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: d_log_filter(),
            json_logs: false,
        }
    }
}

fn d_log_filter() -> String {
    "warn".into()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_warn() {
        let cfg = ObservabilityConfig::default();
        assert_eq!(cfg.log_filter, "warn");
        assert!(!cfg.json_logs);
    }

    #[test]
    fn deserialize_partial() {
        let toml_str = r#"json_logs = true"#;
        let cfg: ObservabilityConfig = toml::from_str(toml_str).unwrap();
        assert!(cfg.json_logs);
        assert_eq!(cfg.log_filter, "warn");
    }
}
