//! Error types for the resource-name generator.

use resname_define::DefineError;
use thiserror::Error;

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A name derived from a pattern or resource type is not a usable Rust
    /// identifier. Generation of that resource is aborted.
    #[error("Invalid identifier '{identifier}' derived for resource '{resource_type}': {reason}")]
    InvalidIdentifier {
        /// The resource whose generation was aborted.
        resource_type: String,
        /// The rejected identifier.
        identifier: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Two resources in the same output file would emit the same item.
    #[error(
        "Naming collision: '{name}' is generated by both '{first}' and '{second}'"
    )]
    NamingCollision {
        /// The duplicated item name.
        name: String,
        /// Resource type that emitted the name first.
        first: String,
        /// Resource type that emitted it again.
        second: String,
    },

    /// Failed to generate code
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The descriptor manifest could not be loaded.
    #[error(transparent)]
    Manifest(#[from] DefineError),
}
