//! Name resolution for generated items.
//!
//! All names are a pure function of one [`ResourceDescriptor`]:
//!
//! - the resource kind is the part of `type` after the service name
//!   (`library.googleapis.com/Book` -> `Book`), or `Resource`
//! - the single-pattern type name and the dispatch enum name are both
//!   `{Kind}ResourceName`
//! - each pattern gets a short name built from its literal segments other
//!   than the plural (`shelves/{shelf}/books/{book}` -> `Shelves`), which is
//!   the dispatch variant name and, suffixed with the type name, the name of
//!   the per-pattern struct (`ShelvesBookResourceName`)
//! - the parse entry point is `parse_{kind}_resource_name`
//!
//! Short names are disambiguated per resource: a short name already used by an
//! earlier pattern gets the pattern's 1-based position appended.

use std::collections::HashSet;

use resname_define::ResourceDescriptor;
use tracing::warn;

use crate::errors::GeneratorError;
use crate::pattern::Pattern;

/// Suffix shared by every generated resource-name type.
const TYPE_SUFFIX: &str = "ResourceName";

/// Short name used when a pattern starts with a variable.
const SIMPLE_SHORT_NAME: &str = "Simple";

/// Short name used when a pattern yields nothing usable.
const DEFAULT_SHORT_NAME: &str = "Default";

/// Converts `snake_case` or `kebab-case` text to PascalCase.
///
/// The first character and every character following `_` or `-` are
/// uppercased; separators are dropped. Nothing else changes.
///
/// ```
/// use resname_gen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("publishers"), "Publishers");
/// assert_eq!(to_pascal_case("billing_accounts"), "BillingAccounts");
/// assert_eq!(to_pascal_case("data-sets"), "DataSets");
/// assert_eq!(to_pascal_case("Book"), "Book");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize = true;
    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize = true;
        } else if capitalize {
            result.push(c.to_ascii_uppercase());
            capitalize = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Converts camelCase or PascalCase text to snake_case.
///
/// An `_` is inserted before every uppercase ASCII letter that is not the
/// first character, then all uppercase letters are lowercased.
///
/// ```
/// use resname_gen::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("Book"), "book");
/// assert_eq!(to_snake_case("BillingAccount"), "billing_account");
/// assert_eq!(to_snake_case("billing_account"), "billing_account");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Derives the short name of a pattern.
///
/// Literal segments other than `plural` are PascalCased and concatenated in
/// order. If that is empty, the first segment decides: a literal gives its
/// PascalCase form, a variable gives `Simple`. A pattern that still yields an
/// empty name (no segments, or an empty first literal) gives `Default`.
pub fn short_name(pattern: &Pattern, plural: &str) -> String {
    let prefix: String = pattern
        .segments()
        .iter()
        .filter(|s| !s.is_variable() && s.text() != plural)
        .map(|s| to_pascal_case(s.text()))
        .collect();

    if !prefix.is_empty() {
        return prefix;
    }

    let fallback = match pattern.segments().first() {
        Some(first) if !first.is_variable() => to_pascal_case(first.text()),
        Some(_) => SIMPLE_SHORT_NAME.to_string(),
        None => String::new(),
    };

    if fallback.is_empty() {
        DEFAULT_SHORT_NAME.to_string()
    } else {
        fallback
    }
}

/// Field name for a variable segment.
pub fn field_name(variable: &str) -> String {
    to_snake_case(variable)
}

/// Checks that `name` can be emitted as a plain Rust identifier.
///
/// ## Errors
///
/// Returns `GeneratorError::InvalidIdentifier` for empty names, names with
/// characters outside `[A-Za-z0-9_]`, and reserved keywords.
pub fn check_ident(resource_type: &str, name: &str) -> Result<(), GeneratorError> {
    let invalid = |reason: &str| GeneratorError::InvalidIdentifier {
        resource_type: resource_type.to_string(),
        identifier: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("identifier is empty"));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid(
            "identifier may only contain ASCII letters, digits and underscores",
        ));
    }
    syn::parse_str::<syn::Ident>(name).map_err(|e| invalid(&e.to_string()))?;
    Ok(())
}

/// Names derived for one pattern of a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternNames {
    /// Dispatch variant name (the short name).
    pub variant: String,
    /// Name of the per-pattern struct (`{variant}{Kind}ResourceName`).
    pub type_name: String,
}

/// All names derived for one resource.
///
/// ## Examples
///
/// ```
/// use resname_define::ResourceDescriptor;
/// use resname_gen::naming::ResourceNames;
///
/// let book = ResourceDescriptor::new(
///     "library.googleapis.com/Book",
///     "books",
///     ["shelves/{shelf}/books/{book}", "publishers/{publisher}/books/{book}"],
/// );
/// let names = ResourceNames::resolve(&book);
///
/// assert_eq!(names.type_name, "BookResourceName");
/// assert_eq!(names.parse_fn, "parse_book_resource_name");
/// assert_eq!(names.patterns[0].variant, "Shelves");
/// assert_eq!(names.patterns[1].type_name, "PublishersBookResourceName");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    /// Resource kind taken from the descriptor type.
    pub kind: String,
    /// Single-pattern type name; also the dispatch enum name.
    pub type_name: String,
    /// Name of the dispatch parse entry point.
    pub parse_fn: String,
    /// Per-pattern names, in descriptor order, already disambiguated.
    pub patterns: Vec<PatternNames>,
}

impl ResourceNames {
    /// Resolves every name for `descriptor`.
    pub fn resolve(descriptor: &ResourceDescriptor) -> Self {
        let kind = descriptor.kind().to_string();
        let type_name = format!("{}{}", to_pascal_case(&kind), TYPE_SUFFIX);
        let parse_fn = format!("parse_{}_resource_name", to_snake_case(&kind));

        let short_names = descriptor
            .patterns
            .iter()
            .map(|p| short_name(&Pattern::parse(p), &descriptor.plural))
            .collect();

        let patterns = disambiguate(&descriptor.resource_type, short_names)
            .into_iter()
            .map(|variant| PatternNames {
                type_name: format!("{variant}{type_name}"),
                variant,
            })
            .collect();

        Self {
            kind,
            type_name,
            parse_fn,
            patterns,
        }
    }
}

/// Makes short names unique, keeping the first occurrence of each name.
fn disambiguate(resource_type: &str, short_names: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::with_capacity(short_names.len());
    let mut result = Vec::with_capacity(short_names.len());

    for (index, name) in short_names.into_iter().enumerate() {
        let mut unique = name.clone();
        let mut suffix = index + 1;
        while taken.contains(&unique) {
            unique = format!("{name}{suffix}");
            suffix += 1;
        }

        if unique != name {
            warn!(
                resource_type,
                position = index + 1,
                original = %name,
                renamed = %unique,
                "pattern short name collides with an earlier pattern"
            );
        }

        taken.insert(unique.clone());
        result.push(unique);
    }

    result
}
