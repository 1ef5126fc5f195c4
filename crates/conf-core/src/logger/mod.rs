//! Logger capability interface
//!
//! A configuration carries exactly one logger. Anything installed through
//! [`Builder::logger`](crate::Builder::logger) must provide the six logging
//! operations listed in [`Capability::ALL`]. Native implementations of
//! [`Logger`] get every operation for free from the trait's provided methods;
//! adapters wrapping a foreign sink that only understands some operations
//! declare the gaps through [`Logger::responds_to`] and are rejected by
//! [`validate`] when installed.
//!
//! # Example
//!
//! ```
//! use conf_core::logger::{Logger, Severity};
//!
//! #[derive(Debug)]
//! struct Silent;
//!
//! impl Logger for Silent {
//!     fn log(&self, _severity: Severity, _message: &str) {}
//! }
//!
//! assert!(conf_core::logger::validate(&Silent).is_ok());
//! ```

mod bridge;
mod stream;
mod validator;

pub use bridge::TracingLogger;
pub use stream::StreamLogger;
pub use validator::validate;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A logger shared between scopes and resolved configurations.
///
/// Identity is preserved through resolution, so callers can compare handles
/// with [`Arc::ptr_eq`].
pub type SharedLogger = Arc<dyn Logger>;

/// Message severity, numbered like the levels of Ruby's stdlib logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
    Unknown = 5,
}

impl Severity {
    /// Upper-case label written by [`StreamLogger`].
    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::Unknown => "ANY",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for Severity {
    type Error = u8;

    fn try_from(level: u8) -> std::result::Result<Self, u8> {
        match level {
            0 => Ok(Severity::Debug),
            1 => Ok(Severity::Info),
            2 => Ok(Severity::Warn),
            3 => Ok(Severity::Error),
            4 => Ok(Severity::Fatal),
            5 => Ok(Severity::Unknown),
            other => Err(other),
        }
    }
}

/// One of the operations a logger must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Log,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Capability {
    /// Every capability, in the order the validator checks them.
    pub const ALL: [Capability; 6] = [
        Capability::Log,
        Capability::Debug,
        Capability::Info,
        Capability::Warn,
        Capability::Error,
        Capability::Fatal,
    ];

    /// Name of the operation, as reported in validation errors.
    pub fn name(self) -> &'static str {
        match self {
            Capability::Log => "log",
            Capability::Debug => "debug",
            Capability::Info => "info",
            Capability::Warn => "warn",
            Capability::Error => "error",
            Capability::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The logging interface a configuration exposes.
///
/// Only [`Logger::log`] is required; the per-severity operations forward to
/// it unless overridden.
pub trait Logger: fmt::Debug + Send + Sync {
    /// Write `message` at `severity`.
    fn log(&self, severity: Severity, message: &str);

    fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Severity::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    fn fatal(&self, message: &str) {
        self.log(Severity::Fatal, message);
    }

    /// Whether this logger provides `capability`.
    ///
    /// Adapters over sinks that lack an operation return `false` for it so
    /// that installation fails up front instead of at the first log call.
    fn responds_to(&self, _capability: Capability) -> bool {
        true
    }
}
