//! Per-resource generation.
//!
//! A descriptor is first planned into the shape it will take in the output,
//! then rendered to tokens:
//!
//! | patterns | history                | output                                   |
//! |----------|------------------------|------------------------------------------|
//! | 0        | any                    | nothing                                  |
//! | 1        | not future multi       | one `{Kind}ResourceName` struct          |
//! | 1        | `FUTURE_MULTI_PATTERN` | dispatch enum, parse fn, one struct      |
//! | 2+       | any                    | dispatch enum, parse fn, struct per pattern |
//!
//! In the dispatch shapes the enum takes the `{Kind}ResourceName` name, so the
//! bare single-pattern struct is never emitted alongside it.

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use resname_define::ResourceDescriptor;
use tracing::debug;

use crate::codegen::{generate_dispatch, generate_parse_fn, generate_type_shape};
use crate::errors::GeneratorError;
use crate::model::{DispatchSpec, TypeSpec, VariantSpec};
use crate::naming::{ResourceNames, check_ident};

/// What a descriptor turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourcePlan {
    /// No patterns; nothing is emitted.
    Empty,
    /// A single concrete struct.
    Single(TypeSpec),
    /// A dispatch enum with one struct per pattern.
    Dispatch(DispatchSpec),
}

impl ResourcePlan {
    /// Names of every top-level item this plan emits, in output order.
    pub fn item_names(&self) -> Vec<&str> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(spec) => vec![spec.type_name.as_str()],
            Self::Dispatch(dispatch) => {
                let mut names = vec![dispatch.union_name.as_str(), dispatch.parse_fn.as_str()];
                names.extend(dispatch.variants.iter().map(|v| v.spec.type_name.as_str()));
                names
            }
        }
    }

    /// Renders the plan to tokens.
    ///
    /// Dispatch output is ordered enum, parse function, then the per-pattern
    /// structs in descriptor order.
    pub fn to_tokens(&self, error_type: &Ident) -> TokenStream {
        match self {
            Self::Empty => TokenStream::new(),
            Self::Single(spec) => generate_type_shape(spec, error_type),
            Self::Dispatch(dispatch) => {
                let dispatch_enum = generate_dispatch(dispatch, error_type);
                let parse_fn = generate_parse_fn(dispatch, error_type);
                let shapes = dispatch
                    .variants
                    .iter()
                    .map(|variant| generate_type_shape(&variant.spec, error_type));

                quote! {
                    #dispatch_enum
                    #parse_fn
                    #(#shapes)*
                }
            }
        }
    }
}

/// Decides what to generate for `descriptor` and resolves all of its names.
///
/// ## Errors
///
/// Returns `GeneratorError::InvalidIdentifier` if any derived name cannot be
/// emitted. Nothing is generated for the resource in that case.
pub fn plan_resource(descriptor: &ResourceDescriptor) -> Result<ResourcePlan, GeneratorError> {
    let resource_type = descriptor.resource_type.as_str();

    if descriptor.patterns.is_empty() {
        debug!(resource_type, "resource has no patterns, skipping");
        return Ok(ResourcePlan::Empty);
    }

    let names = ResourceNames::resolve(descriptor);

    if descriptor.is_multi_pattern() || descriptor.is_future_multi_pattern() {
        check_ident(resource_type, &names.type_name)?;
        check_ident(resource_type, &names.parse_fn)?;

        let variants = descriptor
            .patterns
            .iter()
            .zip(&names.patterns)
            .map(|(pattern, pattern_names)| {
                check_ident(resource_type, &pattern_names.variant)?;
                Ok(VariantSpec {
                    name: pattern_names.variant.clone(),
                    spec: TypeSpec::new(&pattern_names.type_name, resource_type, pattern)?,
                })
            })
            .collect::<Result<Vec<_>, GeneratorError>>()?;

        debug!(
            resource_type,
            union = %names.type_name,
            variants = variants.len(),
            history = %descriptor.history,
            "planned dispatch resource name"
        );

        return Ok(ResourcePlan::Dispatch(DispatchSpec {
            union_name: names.type_name,
            resource_type: resource_type.to_string(),
            parse_fn: names.parse_fn,
            variants,
        }));
    }

    let spec = TypeSpec::new(&names.type_name, resource_type, &descriptor.patterns[0])?;
    debug!(
        resource_type,
        type_name = %spec.type_name,
        fields = spec.fields.len(),
        "planned single resource name"
    );
    Ok(ResourcePlan::Single(spec))
}

/// Generates every item for one resource.
///
/// ## Errors
///
/// See [`plan_resource`].
pub fn generate_resource(
    descriptor: &ResourceDescriptor,
    error_type: &Ident,
) -> Result<TokenStream, GeneratorError> {
    Ok(plan_resource(descriptor)?.to_tokens(error_type))
}
