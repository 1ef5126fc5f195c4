//! Logger doubles.

use conf_core::{Capability, Logger, Severity};
use std::sync::Mutex;

/// Logger that keeps every message it receives.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, oldest first.
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries.lock().unwrap().clone()
    }

    /// Messages received so far, without severities.
    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, message)| message).collect()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, severity: Severity, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

/// Logger that declares only some capabilities, for exercising validation.
#[derive(Debug, Clone)]
pub struct PartialLogger {
    supported: Vec<Capability>,
}

impl PartialLogger {
    /// Responds to exactly `supported`.
    pub fn supporting(supported: &[Capability]) -> Self {
        Self {
            supported: supported.to_vec(),
        }
    }

    /// Responds to every capability except `missing`.
    pub fn without(missing: Capability) -> Self {
        Self {
            supported: Capability::ALL
                .into_iter()
                .filter(|capability| *capability != missing)
                .collect(),
        }
    }

    /// Responds to nothing.
    pub fn empty() -> Self {
        Self::supporting(&[])
    }
}

impl Logger for PartialLogger {
    fn log(&self, _severity: Severity, _message: &str) {}

    fn responds_to(&self, capability: Capability) -> bool {
        self.supported.contains(&capability)
    }
}
