//! A single level of declarations
//!
//! Every builder owns one default scope and one scope per named environment.
//! A scope is a flat key/value map plus an optional logger slot.

use crate::Result;
use crate::logger::{self, SharedLogger};
use serde_json::Value;
use std::collections::HashMap;

/// Flat key/value store plus a logger slot.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    values: HashMap<String, Value>,
    logger: Option<SharedLogger>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any earlier value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        tracing::trace!(%key, "Setting value");
        self.values.insert(key, value.into());
    }

    /// Validate `logger` and store it, replacing any earlier logger.
    ///
    /// The scope is left untouched when validation fails.
    pub fn install_logger(&mut self, logger: SharedLogger) -> Result<()> {
        logger::validate(logger.as_ref())?;
        self.logger = Some(logger);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn values(&self) -> &HashMap<String, Value> {
        &self.values
    }

    pub fn logger(&self) -> Option<&SharedLogger> {
        self.logger.as_ref()
    }

    /// True when neither a value nor a logger was declared.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.logger.is_none()
    }
}
