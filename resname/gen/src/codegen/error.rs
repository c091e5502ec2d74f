//! Runtime error type generation.
//!
//! Generates the error enum returned by `validate()` and `from_str()` on every
//! generated resource name. Its `Display` output is part of the generated
//! contract and must not change.

use proc_macro2::{Ident, TokenStream};
use quote::quote;

/// Generates the runtime error enum under the given name.
///
/// ## Examples
///
/// ```ignore
/// let tokens = generate_error_type(&format_ident!("ResourceNameError"));
/// // Produces:
/// // #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// // pub enum ResourceNameError {
/// //     #[error("{field}: empty")]
/// //     FieldEmpty { field: &'static str },
/// //     ...
/// // }
/// ```
///
/// ## Generated Code
///
/// The enum derives `thiserror::Error`, so the consuming crate needs
/// `thiserror` as a dependency, the same way it would for hand-written errors.
pub fn generate_error_type(error_type: &Ident) -> TokenStream {
    quote! {
        /// Errors returned when validating or parsing a resource name.
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum #error_type {
            /// A field holds the empty string.
            #[error("{field}: empty")]
            FieldEmpty {
                /// Variable name as written in the pattern.
                field: &'static str,
            },

            /// A field contains a `/`.
            #[error("{field}: contains illegal character '/'")]
            IllegalCharacter {
                /// Variable name as written in the pattern.
                field: &'static str,
            },

            /// The input has a different number of `/`-separated parts than the pattern.
            #[error("expected {expected} parts, got {got}")]
            ArityMismatch {
                /// Segment count of the pattern.
                expected: usize,
                /// Part count of the input.
                got: usize,
            },

            /// A literal position of the input does not match the pattern.
            #[error("expected '{expected}' at position {position}, got '{got}'")]
            LiteralMismatch {
                /// The literal required by the pattern.
                expected: &'static str,
                /// Zero-based segment position.
                position: usize,
                /// The part found in the input.
                got: String,
            },

            /// No pattern of a multi-pattern resource accepted the input.
            #[error("no matching pattern")]
            NoMatchingPattern,
        }
    }
}
