//! Error types for loading resource descriptors.

use thiserror::Error;

/// Errors that can occur while loading a [`crate::ResourceManifest`].
#[derive(Debug, Error)]
pub enum DefineError {
    /// The manifest file could not be read.
    #[error("Failed to read manifest '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid TOML for the descriptor schema.
    #[error("Invalid TOML manifest: {0}")]
    Toml(#[from] toml::de::Error),

    /// The manifest is not valid JSON for the descriptor schema.
    #[error("Invalid JSON manifest: {0}")]
    Json(#[from] serde_json::Error),
}
