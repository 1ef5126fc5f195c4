//! Resolution of a builder into a flat value map and a single logger
//!
//! Layers are applied from least to most specific, later layers overriding
//! earlier ones key by key:
//!
//! 1. **Parent** - the parent configuration's resolved values and logger
//! 2. **Default scope** - the builder's top-level declarations
//! 3. **Environment scope** - declarations for the requested environment
//!
//! A key a layer does not mention keeps its value from the layer below. When
//! no layer supplied a logger, a fresh [`StreamLogger`] on stdout is used.

use crate::builder::Builder;
use crate::logger::{SharedLogger, StreamLogger};
use crate::scope::Scope;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Which layer supplied the resolved logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoggerSource {
    /// Taken from the parent configuration
    Inherited,
    /// Declared in the builder's default scope
    DefaultScope,
    /// Declared in the requested environment's scope
    Environment,
    /// No layer declared one; the stdout sink was created
    Fallback,
}

/// Output of [`resolve`].
#[derive(Debug, Clone)]
pub struct Resolution {
    pub values: HashMap<String, Value>,
    pub logger: SharedLogger,
    pub logger_source: LoggerSource,
}

/// Merge `builder`'s layers for environment `env`.
pub fn resolve(builder: &Builder, env: &str) -> Resolution {
    let mut values = HashMap::new();
    let mut logger: Option<(SharedLogger, LoggerSource)> = None;

    if let Some(parent) = builder.parent() {
        tracing::debug!(keys = parent.len(), "Applying parent configuration");
        values.extend(
            parent
                .values()
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        logger = Some((parent.logger().clone(), LoggerSource::Inherited));
    }

    tracing::debug!(
        keys = builder.default_scope().values().len(),
        "Applying default scope"
    );
    overlay(
        &mut values,
        &mut logger,
        builder.default_scope(),
        LoggerSource::DefaultScope,
    );

    match builder.environment_scope(env) {
        Some(scope) => {
            tracing::debug!(
                environment = env,
                keys = scope.values().len(),
                "Applying environment scope"
            );
            overlay(&mut values, &mut logger, scope, LoggerSource::Environment);
        }
        None => {
            tracing::debug!(environment = env, "No scope declared for environment - skipping");
        }
    }

    let (logger, logger_source) = logger.unwrap_or_else(|| {
        tracing::debug!("No logger declared - falling back to stdout");
        (
            Arc::new(StreamLogger::stdout()) as SharedLogger,
            LoggerSource::Fallback,
        )
    });

    Resolution {
        values,
        logger,
        logger_source,
    }
}

/// Overlay one scope on the accumulated result, key by key.
fn overlay(
    values: &mut HashMap<String, Value>,
    logger: &mut Option<(SharedLogger, LoggerSource)>,
    scope: &Scope,
    source: LoggerSource,
) {
    for (key, value) in scope.values() {
        values.insert(key.clone(), value.clone());
    }
    if let Some(scope_logger) = scope.logger() {
        *logger = Some((scope_logger.clone(), source));
    }
}
