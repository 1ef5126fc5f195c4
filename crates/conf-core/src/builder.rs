//! Declaration surface for scoped configuration
//!
//! A [`Builder`] collects declarations into a default scope and any number
//! of named environment scopes, optionally on top of an already resolved
//! parent [`Configuration`]. Nothing is merged until [`Builder::build`] is
//! called for a specific environment.
//!
//! # Example
//!
//! ```
//! use conf_core::Builder;
//!
//! let builder = Builder::define(None, |b| {
//!     b.set("app_name", "MyApp");
//!     b.environment("development", |env| {
//!         env.set("app_name", "YourApp");
//!     });
//!     Ok(())
//! })?;
//!
//! assert_eq!(builder.build("development").get("app_name")?, "YourApp");
//! assert_eq!(builder.build("production").get("app_name")?, "MyApp");
//! # Ok::<(), conf_core::Error>(())
//! ```

use crate::Result;
use crate::configuration::Configuration;
use crate::logger::SharedLogger;
use crate::resolver;
use crate::scope::Scope;
use serde_json::Value;
use std::collections::HashMap;

/// Mutable declaration surface producing [`Configuration`] snapshots.
#[derive(Debug, Default)]
pub struct Builder {
    default_scope: Scope,
    environments: HashMap<String, Scope>,
    parent: Option<Configuration>,
}

impl Builder {
    /// Create a builder with no parent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder that inherits everything `parent` resolved to.
    ///
    /// The parent is a finished snapshot; it is never re-resolved.
    pub fn with_parent(parent: Configuration) -> Self {
        tracing::debug!(
            parent_environment = parent.environment(),
            inherited_keys = parent.len(),
            "Creating builder with parent"
        );
        Self {
            parent: Some(parent),
            ..Self::default()
        }
    }

    /// Create a builder and immediately run `init` against it.
    ///
    /// Errors raised by `init`, such as a rejected logger, abort construction.
    pub fn define<F>(parent: Option<Configuration>, init: F) -> Result<Self>
    where
        F: FnOnce(&mut Builder) -> Result<()>,
    {
        let mut builder = match parent {
            Some(parent) => Self::with_parent(parent),
            None => Self::new(),
        };
        init(&mut builder)?;
        Ok(builder)
    }

    /// Set `key` in the default scope.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.default_scope.set(key, value);
        self
    }

    /// Install `logger` in the default scope.
    pub fn logger(&mut self, logger: SharedLogger) -> Result<()> {
        self.default_scope.install_logger(logger)
    }

    /// Run `block` against the scope of environment `name`.
    ///
    /// The scope is created on first use; later calls for the same name keep
    /// writing into it. Whatever `block` returns is handed back, so fallible
    /// declarations can be propagated with `?`.
    pub fn environment<F, R>(&mut self, name: impl Into<String>, block: F) -> R
    where
        F: FnOnce(&mut EnvironmentScope<'_>) -> R,
    {
        let name = name.into();
        tracing::trace!(environment = %name, "Opening environment scope");
        let scope = self.environments.entry(name.clone()).or_default();
        let mut handle = EnvironmentScope { name: &name, scope };
        block(&mut handle)
    }

    /// Resolve the declarations for environment `env`.
    ///
    /// Does not modify the builder; every call returns an independent
    /// snapshot.
    pub fn build(&self, env: &str) -> Configuration {
        Configuration::from_resolution(env, resolver::resolve(self, env))
    }

    pub fn parent(&self) -> Option<&Configuration> {
        self.parent.as_ref()
    }

    pub fn default_scope(&self) -> &Scope {
        &self.default_scope
    }

    pub fn environment_scope(&self, name: &str) -> Option<&Scope> {
        self.environments.get(name)
    }

    pub fn has_environment(&self, name: &str) -> bool {
        self.environments.contains_key(name)
    }

    /// Names of every declared environment, sorted.
    pub fn environment_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.environments.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Handle to one environment's scope, passed to [`Builder::environment`]
/// blocks.
#[derive(Debug)]
pub struct EnvironmentScope<'a> {
    name: &'a str,
    scope: &'a mut Scope,
}

impl EnvironmentScope<'_> {
    /// Name of the environment being declared.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Set `key` in this environment.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.scope.set(key, value);
        self
    }

    /// Install `logger` for this environment.
    pub fn logger(&mut self, logger: SharedLogger) -> Result<()> {
        self.scope.install_logger(logger)
    }
}
