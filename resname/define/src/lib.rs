//! Resource Descriptor Library
//!
//! This crate provides the input model consumed by `resname-gen`: a
//! declarative description of an API resource and the path patterns used to
//! name it.
//!
//! ## Core Types
//!
//! - [`ResourceDescriptor`] - One resource: its type, plural, patterns and history
//! - [`History`] - Whether the resource has, or will gain, multiple patterns
//! - [`ResourceManifest`] - An ordered collection of descriptors loaded from TOML or JSON
//! - [`DefineError`] - Errors raised while loading a manifest
//!
//! ## Examples
//!
//! ```
//! use resname_define::{History, ResourceDescriptor};
//!
//! let book = ResourceDescriptor::new(
//!     "library.googleapis.com/Book",
//!     "books",
//!     ["publishers/{publisher}/books/{book}"],
//! );
//!
//! assert_eq!(book.kind(), "Book");
//! assert_eq!(book.history, History::Unspecified);
//! assert!(!book.is_multi_pattern());
//! ```

pub mod descriptor;
pub mod error;
pub mod manifest;

pub use descriptor::{History, ResourceDescriptor};
pub use error::DefineError;
pub use manifest::ResourceManifest;
