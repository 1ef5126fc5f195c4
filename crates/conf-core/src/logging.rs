//! Diagnostics for the configuration engine
//!
//! The builder and resolver report what they do through `tracing` under the
//! `conf_core` target; [`TracingLogger`](crate::TracingLogger) emits under
//! `conf`. Hosts that have no subscriber of their own can install the one
//! below.
//!
//! Filter priority (highest to lowest):
//! 1. `CONF_LOG` environment variable
//! 2. `RUST_LOG` environment variable
//! 3. [`DEFAULT_DIRECTIVES`]

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding filter directives for this crate's targets.
pub const LOG_ENV: &str = "CONF_LOG";

/// Quiet for everything else, `info` for configuration diagnostics.
pub const DEFAULT_DIRECTIVES: &str = "warn,conf_core=info,conf=info";

/// Install a compact stdout subscriber.
///
/// Falls back to [`DEFAULT_DIRECTIVES`] when neither variable is set or the
/// one that is set does not parse. Fails instead of panicking if a global
/// subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let spec = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
        .ok();

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer =
        build_filter(spec.as_deref()).or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVES))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Parse `spec` into a filter, or the defaults when `spec` is `None`.
pub fn build_filter(spec: Option<&str>) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(spec.unwrap_or(DEFAULT_DIRECTIVES))
}
