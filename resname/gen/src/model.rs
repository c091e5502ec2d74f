//! Generation units.
//!
//! [`TypeSpec`] describes one concrete resource-name struct backed by a single
//! pattern; [`DispatchSpec`] describes the enum over several of them. Both are
//! built from a descriptor before any tokens are produced, and building them
//! is where identifiers are checked.

use crate::errors::GeneratorError;
use crate::naming::{check_ident, field_name};
use crate::pattern::Pattern;

/// A struct field backing one variable segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Rust field name (snake_case of the variable).
    pub name: String,
    /// The variable name as written in the pattern. Used in error messages.
    pub segment: String,
}

/// One generated single-pattern type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    pub type_name: String,
    pub resource_type: String,
    pub pattern: Pattern,
    /// One field per variable segment, in pattern order.
    pub fields: Vec<FieldSpec>,
}

impl TypeSpec {
    /// Builds the spec for `pattern`, checking every identifier it would emit.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::InvalidIdentifier` if the type name or any
    /// field name is not a valid Rust identifier.
    pub fn new(
        type_name: impl Into<String>,
        resource_type: impl Into<String>,
        pattern: &str,
    ) -> Result<Self, GeneratorError> {
        let type_name = type_name.into();
        let resource_type = resource_type.into();
        check_ident(&resource_type, &type_name)?;

        let pattern = Pattern::parse(pattern);
        let fields = pattern
            .variables()
            .map(|variable| {
                let name = field_name(variable);
                check_ident(&resource_type, &name)?;
                Ok(FieldSpec {
                    name,
                    segment: variable.to_string(),
                })
            })
            .collect::<Result<Vec<_>, GeneratorError>>()?;

        Ok(Self {
            type_name,
            resource_type,
            pattern,
            fields,
        })
    }
}

/// One variant of a dispatch enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSpec {
    pub name: String,
    pub spec: TypeSpec,
}

/// A generated dispatch enum over per-pattern types.
///
/// Variant order is descriptor pattern order, which is also the parse
/// priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSpec {
    pub union_name: String,
    pub resource_type: String,
    /// Name of the free parse function emitted next to the enum.
    pub parse_fn: String,
    pub variants: Vec<VariantSpec>,
}
