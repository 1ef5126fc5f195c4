//! Resolved, read-only configuration
//!
//! A [`Configuration`] is produced by [`Builder::build`](crate::Builder::build)
//! and never changes afterwards. It can be handed to
//! [`Builder::with_parent`](crate::Builder::with_parent) to seed another
//! builder.

use crate::logger::SharedLogger;
use crate::resolver::{LoggerSource, Resolution};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Immutable snapshot of resolved values and the effective logger.
///
/// Cloning keeps the same logger instance.
#[derive(Debug, Clone)]
pub struct Configuration {
    environment: String,
    values: HashMap<String, Value>,
    logger: SharedLogger,
    logger_source: LoggerSource,
}

impl Configuration {
    pub(crate) fn from_resolution(environment: &str, resolution: Resolution) -> Self {
        Self {
            environment: environment.to_string(),
            values: resolution.values,
            logger: resolution.logger,
            logger_source: resolution.logger_source,
        }
    }

    /// Look up the resolved value of `key`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownKey`] if `key` was not set at any level of the chain.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.values.get(key).ok_or_else(|| Error::UnknownKey {
            key: key.to_string(),
        })
    }

    /// Look up `key` and convert it to `T`.
    ///
    /// # Example
    ///
    /// ```
    /// use conf_core::Builder;
    ///
    /// let mut builder = Builder::new();
    /// builder.set("port", 8080);
    ///
    /// let port: u16 = builder.build("production").get_as("port")?;
    /// assert_eq!(port, 8080);
    /// # Ok::<(), conf_core::Error>(())
    /// ```
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.get(key)?;
        serde_json::from_value(value.clone()).map_err(|source| Error::InvalidValue {
            key: key.to_string(),
            source,
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Every resolved key, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn values(&self) -> &HashMap<String, Value> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All resolved values as one JSON object.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        for key in self.keys() {
            object.insert(key.to_string(), self.values[key].clone());
        }
        Value::Object(object)
    }

    /// The effective logger. Always present.
    pub fn logger(&self) -> &SharedLogger {
        &self.logger
    }

    /// Which layer supplied [`Configuration::logger`].
    pub fn logger_source(&self) -> LoggerSource {
        self.logger_source
    }

    /// Environment name this snapshot was built for.
    pub fn environment(&self) -> &str {
        &self.environment
    }
}
