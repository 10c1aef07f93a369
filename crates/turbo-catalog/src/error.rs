//! Catalog error types.
//!
//! The query pipeline itself never fails. Errors only arise at the edges:
//! loading configuration and decoding product payloads handed over by the
//! fetch layer.

use thiserror::Error;

/// Errors that can occur at the boundaries of the catalog engine.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Configuration file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration is malformed or out of range.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Product payload could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        CatalogError::Config(e.to_string())
    }
}
