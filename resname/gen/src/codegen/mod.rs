//! Code generation modules for resource names.
//!
//! Each submodule turns one generation unit into Rust tokens:
//!
//! - [`error`] - The runtime error enum shared by every generated type
//! - [`single`] - One struct per pattern, with its full operation contract
//! - [`dispatch`] - The enum over per-pattern structs, plus its parse function
//!
//! ## Output Format
//!
//! All generators return `proc_macro2::TokenStream`, which is then:
//! - Validated with `syn::parse2` to ensure correctness
//! - Formatted with `prettyplease` for consistent style
//!
//! See [`crate::output`] for the assembly and file writing logic.

pub mod dispatch;
pub mod error;
pub mod single;

pub use dispatch::{generate_dispatch, generate_parse_fn};
pub use error::generate_error_type;
pub use single::generate_type_shape;

use proc_macro2::TokenStream;

/// Validates that the generated code is syntactically correct.
///
/// ## Errors
///
/// Returns an error string if the generated code fails to parse.
pub fn validate_generated_code(tokens: &TokenStream) -> Result<(), String> {
    syn::parse2::<syn::File>(tokens.clone()).map_err(|e| e.to_string())?;
    Ok(())
}

/// Formats generated code using prettyplease.
///
/// ## Errors
///
/// Returns an error string if the code fails to parse.
pub fn format_generated_code(tokens: &TokenStream) -> Result<String, String> {
    let file = syn::parse2::<syn::File>(tokens.clone()).map_err(|e| e.to_string())?;
    Ok(prettyplease::unparse(&file))
}
