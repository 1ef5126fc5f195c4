//! Scoped configuration builder
//!
//! Declare configuration as a default scope plus named environment
//! overlays, optionally on top of a parent configuration, then resolve it
//! into an immutable [`Configuration`] for one environment:
//!
//! - **Scopes**: flat key/value maps with an optional logger slot
//! - **Environments**: overlays selected at build time
//! - **Parent chain**: resolved configurations inherited by later builders
//! - **Loggers**: validated against a fixed capability set on installation
//!
//! # Precedence
//!
//! ```text
//!   environment scope      (highest)
//!         |
//!   default scope
//!         |
//!   parent configuration
//!         |
//!   stdout fallback logger (logger only)
//! ```
//!
//! A parent configuration always carries a logger, its own fallback sink
//! included, so a child without a logger of its own inherits it.
//!
//! # Example
//!
//! ```
//! use conf_core::{Builder, LoggerSource};
//!
//! let base = Builder::define(None, |b| {
//!     b.set("app_name", "BaseApp").set("app_path", "/app");
//!     Ok(())
//! })?
//! .build("production");
//!
//! let mut app = Builder::with_parent(base);
//! app.set("app_name", "MyApp");
//!
//! let config = app.build("production");
//! assert_eq!(config.get("app_path")?, "/app");
//! assert_eq!(config.get("app_name")?, "MyApp");
//! assert_eq!(config.logger_source(), LoggerSource::Inherited);
//! # Ok::<(), conf_core::Error>(())
//! ```

pub mod builder;
pub mod configuration;
pub mod error;
pub mod logger;
pub mod logging;
pub mod resolver;
pub mod scope;

pub use builder::{Builder, EnvironmentScope};
pub use configuration::Configuration;
pub use error::{Error, Result};
pub use logger::{Capability, Logger, Severity, SharedLogger, StreamLogger, TracingLogger};
pub use resolver::{LoggerSource, Resolution, resolve};
pub use scope::Scope;
