//! Single-pattern type generation.
//!
//! Generates one struct per pattern, holding a `String` per variable segment,
//! with the full resource-name contract:
//!
//! - `new()` - builds the value without validation
//! - `resource_type()` - the descriptor type, as a constant
//! - `validate()` - rejects empty fields and fields containing `/`
//! - `contains_wildcard()` - true if any field is the `-` wildcard
//! - `Display` - writes the pattern with fields substituted
//! - `FromStr` - splits on `/`, checks arity and literals, then validates

use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};

use crate::model::{FieldSpec, TypeSpec};
use crate::pattern::WILDCARD;

/// Generates the struct and impls for one pattern.
///
/// ## Examples
///
/// For `publishers/{publisher}/books/{book}` named `BookResourceName`:
/// ```ignore
/// #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
/// pub struct BookResourceName {
///     pub publisher: String,
///     pub book: String,
/// }
///
/// impl std::fmt::Display for BookResourceName {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "publishers/{}/books/{}", self.publisher, self.book)
///     }
/// }
///
/// impl std::str::FromStr for BookResourceName {
///     type Err = ResourceNameError;
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         let parts: Vec<&str> = s.split('/').collect();
///         if parts.len() != 4 { /* ArityMismatch */ }
///         if parts[0] != "publishers" { /* LiteralMismatch */ }
///         if parts[2] != "books" { /* LiteralMismatch */ }
///         let result = Self { publisher: parts[1].to_string(), book: parts[3].to_string() };
///         result.validate()?;
///         Ok(result)
///     }
/// }
/// ```
pub fn generate_type_shape(spec: &TypeSpec, error_type: &Ident) -> TokenStream {
    let struct_name = format_ident!("{}", spec.type_name);
    let struct_doc = format!(" Resource name for `{}`.", spec.resource_type);
    let pattern_doc = format!(" Pattern: `{}`", spec.pattern);
    let resource_type = &spec.resource_type;

    let fields = generate_fields(&spec.fields);
    let constructor = generate_constructor(&spec.type_name, &spec.fields);
    let validate = generate_validate(&spec.fields, error_type);
    let contains_wildcard = generate_contains_wildcard(&spec.fields);
    let display = generate_display(spec, &struct_name);
    let from_str = generate_from_str(spec, &struct_name, error_type);

    quote! {
        #[doc = #struct_doc]
        ///
        #[doc = #pattern_doc]
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct #struct_name {
            #fields
        }

        impl #struct_name {
            #constructor

            /// Returns the resource type.
            pub fn resource_type(&self) -> &'static str {
                #resource_type
            }

            #validate

            #contains_wildcard
        }

        #display

        #from_str
    }
}

fn field_ident(field: &FieldSpec) -> Ident {
    format_ident!("{}", field.name)
}

/// Generates one `pub String` field per variable segment.
fn generate_fields(fields: &[FieldSpec]) -> TokenStream {
    let fields = fields.iter().map(|field| {
        let name = field_ident(field);
        let doc = format!(" Value of the `{{{}}}` segment.", field.segment);
        quote! {
            #[doc = #doc]
            pub #name: String,
        }
    });

    quote! { #(#fields)* }
}

/// Generates `new()`, taking one `impl Into<String>` per field in pattern order.
fn generate_constructor(type_name: &str, fields: &[FieldSpec]) -> TokenStream {
    let doc = format!(" Creates a new `{type_name}`. The value is not validated.");
    let params = fields.iter().map(|field| {
        let name = field_ident(field);
        quote! { #name: impl Into<String> }
    });
    let inits = fields.iter().map(|field| {
        let name = field_ident(field);
        quote! { #name: #name.into() }
    });

    quote! {
        #[doc = #doc]
        pub fn new(#(#params),*) -> Self {
            Self {
                #(#inits,)*
            }
        }
    }
}

/// Generates `validate()`: for each field in order, the empty check, then the
/// `/` check.
fn generate_validate(fields: &[FieldSpec], error_type: &Ident) -> TokenStream {
    let checks = fields.iter().map(|field| {
        let name = field_ident(field);
        let segment = &field.segment;
        quote! {
            if self.#name.is_empty() {
                return Err(#error_type::FieldEmpty { field: #segment });
            }
            if self.#name.contains('/') {
                return Err(#error_type::IllegalCharacter { field: #segment });
            }
        }
    });

    quote! {
        /// Validates the resource name.
        ///
        /// ## Errors
        ///
        /// Returns an error if a field is empty or contains `/`.
        pub fn validate(&self) -> Result<(), #error_type> {
            #(#checks)*
            Ok(())
        }
    }
}

fn generate_contains_wildcard(fields: &[FieldSpec]) -> TokenStream {
    let body = fields
        .iter()
        .map(|field| {
            let name = field_ident(field);
            quote! { self.#name == #WILDCARD }
        })
        .reduce(|acc, condition| quote! { #acc || #condition })
        .unwrap_or_else(|| quote! { false });

    quote! {
        /// Returns true if any field is the `-` wildcard.
        pub fn contains_wildcard(&self) -> bool {
            #body
        }
    }
}

/// Generates the `Display` impl.
fn generate_display(spec: &TypeSpec, struct_name: &Ident) -> TokenStream {
    let body = if spec.fields.is_empty() {
        let literal = spec.pattern.to_string();
        quote! { f.write_str(#literal) }
    } else {
        let format_str = build_format_string(spec);
        let args = spec.fields.iter().map(|field| {
            let name = field_ident(field);
            quote! { self.#name }
        });
        quote! { write!(f, #format_str, #(#args),*) }
    };

    quote! {
        impl std::fmt::Display for #struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                #body
            }
        }
    }
}

/// Builds the `write!` format string: literals verbatim (braces escaped),
/// variables as `{}`, joined by `/`.
fn build_format_string(spec: &TypeSpec) -> String {
    spec.pattern
        .segments()
        .iter()
        .map(|segment| {
            if segment.is_variable() {
                "{}".to_string()
            } else {
                segment.text().replace('{', "{{").replace('}', "}}")
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Generates the `FromStr` impl.
fn generate_from_str(spec: &TypeSpec, struct_name: &Ident, error_type: &Ident) -> TokenStream {
    let expected = Literal::usize_unsuffixed(spec.pattern.len());

    let mut literal_checks = Vec::new();
    let mut field_inits = Vec::new();
    let mut fields = spec.fields.iter();

    for (position, segment) in spec.pattern.segments().iter().enumerate() {
        let index = Literal::usize_unsuffixed(position);
        if segment.is_variable() {
            // fields are built from the same segments, in the same order
            if let Some(field) = fields.next() {
                let name = field_ident(field);
                field_inits.push(quote! { #name: parts[#index].to_string() });
            }
        } else {
            let literal = segment.text();
            literal_checks.push(quote! {
                if parts[#index] != #literal {
                    return Err(#error_type::LiteralMismatch {
                        expected: #literal,
                        position: #index,
                        got: parts[#index].to_string(),
                    });
                }
            });
        }
    }

    quote! {
        impl std::str::FromStr for #struct_name {
            type Err = #error_type;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let parts: Vec<&str> = s.split('/').collect();
                if parts.len() != #expected {
                    return Err(#error_type::ArityMismatch {
                        expected: #expected,
                        got: parts.len(),
                    });
                }
                #(#literal_checks)*
                let result = Self {
                    #(#field_inits,)*
                };
                result.validate()?;
                Ok(result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::{format_generated_code, validate_generated_code};

    fn error_type() -> Ident {
        format_ident!("ResourceNameError")
    }

    fn book_spec() -> TypeSpec {
        TypeSpec::new(
            "BookResourceName",
            "library.googleapis.com/Book",
            "publishers/{publisher}/books/{book}",
        )
        .unwrap()
    }

    fn generate(spec: &TypeSpec) -> String {
        let tokens = generate_type_shape(spec, &error_type());
        format_generated_code(&tokens).expect("Failed to format code")
    }

    #[test]
    fn generates_struct_with_fields_in_pattern_order() {
        let code = generate(&book_spec());

        assert!(code.contains("#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]"));
        assert!(code.contains("pub struct BookResourceName"));
        let publisher = code.find("pub publisher: String").expect("publisher field");
        let book = code.find("pub book: String").expect("book field");
        assert!(publisher < book, "fields out of order:\n{code}");
    }

    #[test]
    fn generates_constructor_without_validation() {
        let code = generate(&book_spec());

        assert!(
            code.contains(
                "pub fn new(publisher: impl Into<String>, book: impl Into<String>) -> Self"
            ),
            "Expected new() with impl Into<String> params, got:\n{code}"
        );
        assert!(code.contains("publisher: publisher.into()"));
        assert!(code.contains("book: book.into()"));
    }

    #[test]
    fn generates_resource_type_constant() {
        let code = generate(&book_spec());
        assert!(code.contains("pub fn resource_type(&self) -> &'static str"));
        assert!(code.contains(r#""library.googleapis.com/Book""#));
    }

    #[test]
    fn generates_validate_with_segment_names() {
        let code = generate(&book_spec());

        assert!(code.contains("pub fn validate(&self) -> Result<(), ResourceNameError>"));
        assert!(code.contains("if self.publisher.is_empty()"));
        assert!(code.contains(r#"ResourceNameError::FieldEmpty {"#));
        assert!(code.contains(r#"field: "publisher""#));
        assert!(code.contains("if self.book.contains('/')"));
        assert!(code.contains("ResourceNameError::IllegalCharacter"));
    }

    #[test]
    fn validate_reports_segment_not_field_name() {
        let spec = TypeSpec::new("AccountResourceName", "a/Account", "accounts/{accountId}").unwrap();
        let code = generate(&spec);

        assert!(code.contains("self.account_id.is_empty()"));
        assert!(code.contains(r#"field: "accountId""#));
    }

    #[test]
    fn generates_wildcard_check_over_all_fields() {
        let code = generate(&book_spec());
        assert!(
            code.contains(r#"self.publisher == "-" || self.book == "-""#),
            "Expected wildcard disjunction, got:\n{code}"
        );
    }

    #[test]
    fn wildcard_check_is_false_without_fields() {
        let spec = TypeSpec::new("ConfigResourceName", "a/Config", "config").unwrap();
        let code = generate(&spec);
        let body = &code[code.find("fn contains_wildcard").expect("contains_wildcard")..];
        let first_token = body.split('{').nth(1).and_then(|b| b.split_whitespace().next());
        assert_eq!(first_token, Some("false"), "Expected literal false, got:\n{code}");
    }

    #[test]
    fn generates_display_format_string() {
        let code = generate(&book_spec());
        assert!(code.contains("impl std::fmt::Display for BookResourceName"));
        assert!(
            code.contains(r#"write!(f, "publishers/{}/books/{}", self.publisher, self.book)"#),
            "Expected write! with format string, got:\n{code}"
        );
    }

    #[test]
    fn display_without_fields_writes_literal() {
        let spec = TypeSpec::new("ConfigResourceName", "a/Config", "projects/config").unwrap();
        let code = generate(&spec);
        assert!(code.contains(r#"f.write_str("projects/config")"#));
    }

    #[test]
    fn display_escapes_braces_in_literals() {
        let spec = TypeSpec::new("OddResourceName", "a/Odd", "{odd/things}/{thing}").unwrap();
        let code = generate(&spec);
        assert!(
            code.contains(r#""{{odd/things}}/{}""#),
            "Expected escaped braces, got:\n{code}"
        );
    }

    #[test]
    fn generates_from_str_checks() {
        let code = generate(&book_spec());

        assert!(code.contains("impl std::str::FromStr for BookResourceName"));
        assert!(code.contains("type Err = ResourceNameError;"));
        assert!(code.contains("let parts: Vec<&str> = s.split('/').collect();"));
        assert!(code.contains("if parts.len() != 4"));
        assert!(code.contains("expected: 4,"));
        assert!(code.contains(r#"if parts[0] != "publishers""#));
        assert!(code.contains(r#"if parts[2] != "books""#));
        assert!(code.contains("position: 2,"));
        assert!(code.contains("publisher: parts[1].to_string()"));
        assert!(code.contains("book: parts[3].to_string()"));
        assert!(code.contains("result.validate()?;"));
    }

    #[test]
    fn from_str_does_not_check_variable_positions() {
        let code = generate(&book_spec());
        assert!(!code.contains("if parts[1] !="));
        assert!(!code.contains("if parts[3] !="));
    }

    #[test]
    fn all_shapes_validate_syntax() {
        for pattern in [
            "publishers/{publisher}/books/{book}",
            "{book}",
            "config",
            "",
            "a//{b}/",
            "projects/{project}/locations/{location}/keyRings/{keyRing}/cryptoKeys/{cryptoKey}",
        ] {
            let spec = TypeSpec::new("TestResourceName", "a/Test", pattern).unwrap();
            let tokens = generate_type_shape(&spec, &error_type());
            assert!(
                validate_generated_code(&tokens).is_ok(),
                "Generated code for {pattern:?} does not parse"
            );
        }
    }
}
