//! Resource-name code generator library.
//!
//! This crate generates strongly-typed Rust resource-name types from
//! resource descriptors created with `resname-define`. For each resource the
//! generated code includes:
//!
//! - A struct per path pattern, with one `String` field per variable segment
//! - `Display` and `FromStr` implementations that format and parse the name
//! - `validate()` and `contains_wildcard()` checks
//! - For multi-pattern resources, an enum over the per-pattern structs that
//!   tries each pattern in order, plus a `parse_{kind}_resource_name` function
//!
//! A `ResourceNameError` enum shared by every type is emitted once per file.
//!
//! ## Modules
//!
//! - [`pattern`] - Pattern parsing, plus the runtime format/scan/match helpers
//! - [`naming`] - Derivation of every generated name from a descriptor
//! - [`model`] - Generation units with checked identifiers
//! - [`resource`] - Per-resource planning and token generation
//! - [`codegen`] - Token generation for structs, enums and the error type
//! - [`options`] - Generator options
//! - [`output`] - Final assembly, validation, and file writing
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use resname_define::ResourceDescriptor;
//! use resname_gen::options::GenerateOptions;
//! use resname_gen::output::render_file;
//!
//! let book = ResourceDescriptor::new(
//!     "library.googleapis.com/Book",
//!     "books",
//!     ["shelves/{shelf}/books/{book}", "publishers/{publisher}/books/{book}"],
//! );
//!
//! let code = render_file(&[book], &GenerateOptions::default()).unwrap();
//! assert!(code.contains("pub enum BookResourceName"));
//! assert!(code.contains("pub struct ShelvesBookResourceName"));
//! ```
//!
//! ## Generated Code Structure
//!
//! For the `Book` resource above:
//!
//! ```text
//! pub enum ResourceNameError { ... }
//!
//! pub enum BookResourceName {
//!     Shelves(ShelvesBookResourceName),
//!     Publishers(PublishersBookResourceName),
//! }
//!
//! pub fn parse_book_resource_name(name: &str) -> Result<BookResourceName, ResourceNameError>;
//!
//! pub struct ShelvesBookResourceName { pub shelf: String, pub book: String }
//! pub struct PublishersBookResourceName { pub publisher: String, pub book: String }
//! ```
//!
//! Generated code derives `thiserror::Error` on the error enum, so the crate
//! that includes it needs `thiserror` as a dependency.

pub mod codegen;
pub mod errors;
pub mod model;
pub mod naming;
pub mod options;
pub mod output;
pub mod pattern;
pub mod resource;
