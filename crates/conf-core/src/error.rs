//! Error types for conf-core

use crate::logger::Capability;

/// Result type for conf-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while declaring or reading a configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A logger was rejected because it lacks one of the required operations
    #[error("logger must respond to #{capability}")]
    InvalidLogger { capability: Capability },

    /// The key was never set at any level of the chain
    #[error("unknown attribute: {key}")]
    UnknownKey { key: String },

    /// The resolved value could not be converted to the requested type
    #[error("invalid value for {key}: {source}")]
    InvalidValue {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Returns true for [`Error::UnknownKey`].
    pub fn is_unknown_key(&self) -> bool {
        matches!(self, Error::UnknownKey { .. })
    }
}
