use serde::Serialize;

/// Structured trace events emitted across all cronfmt crates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    CrontabParsed {
        lines: usize,
        entries: usize,
        environment_vars: usize,
    },
    LineRejected {
        line_number: usize,
        reason: String,
    },
    CrontabSerialized {
        bytes: usize,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "cf_event");
    }
}
