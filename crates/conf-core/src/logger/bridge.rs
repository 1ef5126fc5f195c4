//! Bridge from the configuration logger interface into `tracing`

use super::{Logger, Severity};

/// Logger that re-emits every message as a `tracing` event.
///
/// `fatal` and `unknown` messages have no `tracing` level of their own; they
/// are emitted at `ERROR` with a `severity` field carrying the original
/// label.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => tracing::debug!(target: "conf", "{message}"),
            Severity::Info => tracing::info!(target: "conf", "{message}"),
            Severity::Warn => tracing::warn!(target: "conf", "{message}"),
            Severity::Error => tracing::error!(target: "conf", "{message}"),
            Severity::Fatal | Severity::Unknown => {
                tracing::error!(target: "conf", severity = severity.label(), "{message}")
            }
        }
    }
}
