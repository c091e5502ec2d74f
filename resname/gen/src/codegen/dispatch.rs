//! Dispatch enum generation for multi-pattern resources.
//!
//! Generates an enum with one variant per pattern, each wrapping the
//! per-pattern struct, with methods that delegate to the active variant and a
//! `FromStr` impl that tries the patterns in declaration order.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::model::{DispatchSpec, VariantSpec};

/// Generates the dispatch enum for a resource.
///
/// Creates an enum with one variant per pattern, plus:
/// - `resource_type()`, `contains_wildcard()` and `validate()` delegating to the variant
/// - `Display` delegating to the variant
/// - `FromStr` returning the first variant whose parse succeeds
/// - `From<XxxResourceName>` impl for each variant
///
/// ## Examples
///
/// ```ignore
/// // Generated enum:
/// pub enum BookResourceName {
///     Shelves(ShelvesBookResourceName),
///     Publishers(PublishersBookResourceName),
/// }
///
/// impl std::str::FromStr for BookResourceName {
///     type Err = ResourceNameError;
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         if let Ok(parsed) = s.parse::<ShelvesBookResourceName>() {
///             return Ok(Self::Shelves(parsed));
///         }
///         if let Ok(parsed) = s.parse::<PublishersBookResourceName>() {
///             return Ok(Self::Publishers(parsed));
///         }
///         Err(ResourceNameError::NoMatchingPattern)
///     }
/// }
/// ```
pub fn generate_dispatch(spec: &DispatchSpec, error_type: &Ident) -> TokenStream {
    let enum_name = format_ident!("{}", spec.union_name);
    let enum_doc = format!(" Multi-pattern resource name for `{}`.", spec.resource_type);
    let enum_doc_detail = " Each variant wraps the resource name of one pattern.";
    let resource_type = &spec.resource_type;

    let variants = generate_enum_variants(&spec.variants);
    let wildcard_arms = generate_delegate_arms(&spec.variants, quote! { contains_wildcard() });
    let validate_arms = generate_delegate_arms(&spec.variants, quote! { validate() });
    let display_arms = generate_display_arms(&spec.variants);
    let parse_attempts = generate_parse_attempts(&spec.variants);
    let from_impls = generate_from_impls(&spec.variants, &enum_name);

    quote! {
        #[doc = #enum_doc]
        ///
        #[doc = #enum_doc_detail]
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum #enum_name {
            #variants
        }

        impl #enum_name {
            /// Returns the resource type.
            pub fn resource_type(&self) -> &'static str {
                #resource_type
            }

            /// Returns true if any field of the active pattern is the `-` wildcard.
            pub fn contains_wildcard(&self) -> bool {
                match self {
                    #wildcard_arms
                }
            }

            /// Validates the resource name of the active pattern.
            ///
            /// ## Errors
            ///
            /// Returns an error if a field is empty or contains `/`.
            pub fn validate(&self) -> Result<(), #error_type> {
                match self {
                    #validate_arms
                }
            }
        }

        impl std::fmt::Display for #enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    #display_arms
                }
            }
        }

        impl std::str::FromStr for #enum_name {
            type Err = #error_type;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                #parse_attempts
                Err(#error_type::NoMatchingPattern)
            }
        }

        #from_impls
    }
}

/// Generates the free parse entry point for a dispatch enum.
///
/// ```ignore
/// /// Parses a resource name string and returns the matching pattern variant.
/// pub fn parse_book_resource_name(name: &str) -> Result<BookResourceName, ResourceNameError> {
///     name.parse()
/// }
/// ```
pub fn generate_parse_fn(spec: &DispatchSpec, error_type: &Ident) -> TokenStream {
    let fn_name = format_ident!("{}", spec.parse_fn);
    let enum_name = format_ident!("{}", spec.union_name);

    quote! {
        /// Parses a resource name string and returns the matching pattern variant.
        ///
        /// ## Errors
        ///
        /// Returns `NoMatchingPattern` if no pattern accepts the name.
        pub fn #fn_name(name: &str) -> Result<#enum_name, #error_type> {
            name.parse()
        }
    }
}

fn variant_idents(variant: &VariantSpec) -> (Ident, Ident) {
    (
        format_ident!("{}", variant.name),
        format_ident!("{}", variant.spec.type_name),
    )
}

/// Generates enum variant declarations.
fn generate_enum_variants(variants: &[VariantSpec]) -> TokenStream {
    let variants = variants.iter().map(|variant| {
        let (variant_name, struct_name) = variant_idents(variant);
        let doc = format!(" `{}`", variant.spec.pattern);

        quote! {
            #[doc = #doc]
            #variant_name(#struct_name),
        }
    });

    quote! { #(#variants)* }
}

/// Generates `Self::Variant(inner) => inner.<call>,` for every variant.
fn generate_delegate_arms(variants: &[VariantSpec], call: TokenStream) -> TokenStream {
    let arms = variants.iter().map(|variant| {
        let (variant_name, _) = variant_idents(variant);
        quote! {
            Self::#variant_name(inner) => inner.#call,
        }
    });

    quote! { #(#arms)* }
}

fn generate_display_arms(variants: &[VariantSpec]) -> TokenStream {
    let arms = variants.iter().map(|variant| {
        let (variant_name, _) = variant_idents(variant);
        quote! {
            Self::#variant_name(inner) => std::fmt::Display::fmt(inner, f),
        }
    });

    quote! { #(#arms)* }
}

/// Generates one parse attempt per variant, in declaration order.
fn generate_parse_attempts(variants: &[VariantSpec]) -> TokenStream {
    let attempts = variants.iter().map(|variant| {
        let (variant_name, struct_name) = variant_idents(variant);
        quote! {
            if let Ok(parsed) = s.parse::<#struct_name>() {
                return Ok(Self::#variant_name(parsed));
            }
        }
    });

    quote! { #(#attempts)* }
}

/// Generates individual `From` implementations for each per-pattern struct.
fn generate_from_impls(variants: &[VariantSpec], enum_name: &Ident) -> TokenStream {
    let impls = variants.iter().map(|variant| {
        let (variant_name, struct_name) = variant_idents(variant);

        quote! {
            impl From<#struct_name> for #enum_name {
                fn from(name: #struct_name) -> Self {
                    Self::#variant_name(name)
                }
            }
        }
    });

    quote! { #(#impls)* }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::{format_generated_code, validate_generated_code};
    use crate::model::TypeSpec;

    fn error_type() -> Ident {
        format_ident!("ResourceNameError")
    }

    fn make_dispatch(variants: &[(&str, &str)]) -> DispatchSpec {
        let resource_type = "library.googleapis.com/Book";
        DispatchSpec {
            union_name: "BookResourceName".to_string(),
            resource_type: resource_type.to_string(),
            parse_fn: "parse_book_resource_name".to_string(),
            variants: variants
                .iter()
                .map(|(name, pattern)| VariantSpec {
                    name: name.to_string(),
                    spec: TypeSpec::new(format!("{name}BookResourceName"), resource_type, pattern)
                        .unwrap(),
                })
                .collect(),
        }
    }

    fn book_dispatch() -> DispatchSpec {
        make_dispatch(&[
            ("Shelves", "shelves/{shelf}/books/{book}"),
            ("Publishers", "publishers/{publisher}/books/{book}"),
        ])
    }

    #[test]
    fn generate_enum_variants_wrap_pattern_types() {
        let tokens = generate_dispatch(&book_dispatch(), &error_type());
        let code = format_generated_code(&tokens).expect("Failed to format code");

        assert!(code.contains("pub enum BookResourceName"));
        assert!(code.contains("Shelves(ShelvesBookResourceName)"));
        assert!(code.contains("Publishers(PublishersBookResourceName)"));
        assert!(code.contains("Multi-pattern resource name for `library.googleapis.com/Book`"));
    }

    #[test]
    fn generate_enum_delegates_to_variants() {
        let tokens = generate_dispatch(&book_dispatch(), &error_type());
        let code = format_generated_code(&tokens).expect("Failed to format code");

        assert!(code.contains("Self::Shelves(inner) => inner.contains_wildcard()"));
        assert!(code.contains("Self::Publishers(inner) => inner.validate()"));
        assert!(code.contains("Self::Shelves(inner) => std::fmt::Display::fmt(inner, f)"));
        assert!(code.contains(r#""library.googleapis.com/Book""#));
    }

    #[test]
    fn parse_attempts_follow_declaration_order() {
        let tokens = generate_dispatch(&book_dispatch(), &error_type());
        let code = format_generated_code(&tokens).expect("Failed to format code");

        let shelves = code
            .find("s.parse::<ShelvesBookResourceName>()")
            .expect("shelves attempt");
        let publishers = code
            .find("s.parse::<PublishersBookResourceName>()")
            .expect("publishers attempt");
        let no_match = code
            .find("Err(ResourceNameError::NoMatchingPattern)")
            .expect("no match fallback");
        assert!(shelves < publishers && publishers < no_match, "{code}");
    }

    #[test]
    fn reversed_declaration_reverses_priority() {
        let spec = make_dispatch(&[
            ("Publishers", "publishers/{publisher}/books/{book}"),
            ("Shelves", "shelves/{shelf}/books/{book}"),
        ]);
        let tokens = generate_dispatch(&spec, &error_type());
        let code = format_generated_code(&tokens).expect("Failed to format code");

        let shelves = code.find("s.parse::<ShelvesBookResourceName>()").unwrap();
        let publishers = code.find("s.parse::<PublishersBookResourceName>()").unwrap();
        assert!(publishers < shelves);
    }

    #[test]
    fn from_impls_are_individual() {
        let tokens = generate_dispatch(&book_dispatch(), &error_type());
        let code = format_generated_code(&tokens).expect("Failed to format code");

        assert_eq!(code.matches("impl From<").count(), 2);
        assert!(code.contains("impl From<ShelvesBookResourceName> for BookResourceName"));
        assert!(code.contains("impl From<PublishersBookResourceName> for BookResourceName"));
    }

    #[test]
    fn single_variant_dispatch_is_valid() {
        let spec = make_dispatch(&[("Authors", "authors/{author}")]);
        let tokens = generate_dispatch(&spec, &error_type());
        assert!(validate_generated_code(&tokens).is_ok());

        let code = format_generated_code(&tokens).expect("Failed to format code");
        assert!(code.contains("Authors(AuthorsBookResourceName)"));
    }

    #[test]
    fn generate_parse_fn_signature() {
        let tokens = generate_parse_fn(&book_dispatch(), &error_type());
        let code = format_generated_code(&tokens).expect("Failed to format code");

        assert!(code.contains("pub fn parse_book_resource_name("));
        assert!(code.contains("name: &str"));
        assert!(code.contains("-> Result<BookResourceName, ResourceNameError>"));
        assert!(code.contains("name.parse()"));
    }

    #[test]
    fn generate_dispatch_validates_syntax() {
        let tokens = generate_dispatch(&book_dispatch(), &error_type());
        assert!(validate_generated_code(&tokens).is_ok());
    }
}
