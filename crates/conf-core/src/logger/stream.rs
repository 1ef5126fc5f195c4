//! Default logging sink
//!
//! [`StreamLogger`] is what a configuration falls back to when no layer of
//! the chain installed a logger. It writes one line per message in the
//! familiar stdlib-logger layout:
//!
//! ```text
//! I, [2026-10-19T09:14:02.518330 #4242]  INFO -- app: booted
//! ```

use super::{Logger, Severity};
use chrono::Local;
use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

/// Line-oriented logger writing to any byte stream.
pub struct StreamLogger {
    writer: Mutex<Box<dyn Write + Send>>,
    level: Severity,
    progname: Option<String>,
    target: &'static str,
}

impl StreamLogger {
    /// Logger writing to an arbitrary stream.
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            level: Severity::Debug,
            progname: None,
            target: "custom",
        }
    }

    /// Logger writing to the process's standard output.
    pub fn stdout() -> Self {
        Self {
            target: "stdout",
            ..Self::new(io::stdout())
        }
    }

    /// Drop messages below `level`.
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Name written after the `--` separator of every line.
    pub fn with_progname(mut self, progname: impl Into<String>) -> Self {
        self.progname = Some(progname.into());
        self
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    /// `"stdout"` for [`StreamLogger::stdout`], `"custom"` otherwise.
    pub fn target(&self) -> &'static str {
        self.target
    }

    fn format_line(&self, severity: Severity, message: &str) -> String {
        let label = severity.label();
        format!(
            "{}, [{} #{}] {:>5} -- {}: {}\n",
            &label[..1],
            Local::now().format("%Y-%m-%dT%H:%M:%S%.6f"),
            std::process::id(),
            label,
            self.progname.as_deref().unwrap_or(""),
            message
        )
    }
}

impl fmt::Debug for StreamLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamLogger")
            .field("target", &self.target)
            .field("level", &self.level)
            .field("progname", &self.progname)
            .finish_non_exhaustive()
    }
}

impl Logger for StreamLogger {
    fn log(&self, severity: Severity, message: &str) {
        if severity < self.level {
            return;
        }
        let line = self.format_line(severity, message);
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // A sink never fails its caller.
        if writer.write_all(line.as_bytes()).is_ok() {
            let _ = writer.flush();
        }
    }
}
