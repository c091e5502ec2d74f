//! Descriptor manifests.
//!
//! A manifest is the host's delivery channel: an ordered list of resource
//! descriptors, written as TOML (`[[resource]]` tables) or JSON
//! (`{"resource": [...]}`). Manifest order is the order in which resources are
//! generated.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::descriptor::ResourceDescriptor;
use crate::error::DefineError;

/// An ordered collection of resource descriptors.
///
/// ## Examples
///
/// ```
/// use resname_define::ResourceManifest;
///
/// let manifest = ResourceManifest::from_toml_str(r#"
///     [[resource]]
///     type = "library.googleapis.com/Book"
///     plural = "books"
///     pattern = ["publishers/{publisher}/books/{book}"]
/// "#).unwrap();
///
/// assert_eq!(manifest.resources.len(), 1);
/// assert_eq!(manifest.resources[0].kind(), "Book");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceManifest {
    /// Descriptors in declaration order.
    #[serde(rename = "resource", alias = "resources", default)]
    pub resources: Vec<ResourceDescriptor>,
}

impl ResourceManifest {
    /// Creates a manifest from already-built descriptors.
    pub fn new(resources: Vec<ResourceDescriptor>) -> Self {
        Self { resources }
    }

    /// Parses a TOML manifest.
    ///
    /// ## Errors
    ///
    /// Returns `DefineError::Toml` if the input does not match the schema.
    pub fn from_toml_str(input: &str) -> Result<Self, DefineError> {
        Ok(toml::from_str(input)?)
    }

    /// Parses a JSON manifest.
    ///
    /// ## Errors
    ///
    /// Returns `DefineError::Json` if the input does not match the schema.
    pub fn from_json_str(input: &str) -> Result<Self, DefineError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Loads a manifest from disk. Files ending in `.json` are read as JSON,
    /// everything else as TOML.
    ///
    /// ## Errors
    ///
    /// Returns `DefineError::Io` if the file cannot be read, or a parse error
    /// if its content does not match the schema.
    pub fn load(path: &Path) -> Result<Self, DefineError> {
        let content = fs::read_to_string(path).map_err(|e| DefineError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }
}
