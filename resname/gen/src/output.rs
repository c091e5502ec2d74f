//! Output assembly and file writing for generated code.
//!
//! All resources of a manifest are generated into one Rust file:
//!
//! ```text
//! // This code was automatically generated by resname-gen. Do not edit manually.
//!
//! pub enum ResourceNameError { .. }      // once per file
//! pub struct ProjectResourceName { .. }  // resources, in manifest order
//! pub enum BookResourceName { .. }
//! pub fn parse_book_resource_name(..)
//! pub struct ShelvesBookResourceName { .. }
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: All generated code is validated with `syn` before writing
//! - **Formatting**: Output is formatted with `prettyplease` for consistent style
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use proc_macro2::TokenStream;
use resname_define::{ResourceDescriptor, ResourceManifest};
use tracing::{debug, info};

use crate::codegen::generate_error_type;
use crate::errors::GeneratorError;
use crate::options::GenerateOptions;
use crate::resource::plan_resource;

/// Notice prepended to every generated file.
pub const GENERATED_HEADER: &str =
    "// This code was automatically generated by resname-gen. Do not edit manually.";

/// Owner recorded for the error enum in the collision check.
const ERROR_TYPE_OWNER: &str = "<error type>";

/// Assembles the tokens for one output file.
///
/// The error enum comes first (unless disabled), followed by each resource in
/// manifest order.
///
/// ## Errors
///
/// - `GeneratorError::ConfigError` if the options are invalid
/// - `GeneratorError::InvalidIdentifier` if a resource derives an unusable name
/// - `GeneratorError::NamingCollision` if two resources emit the same item
pub fn assemble_file(
    resources: &[ResourceDescriptor],
    options: &GenerateOptions,
) -> Result<TokenStream, GeneratorError> {
    options.validate()?;
    let error_type = options.error_ident();

    let mut owners: HashMap<String, String> = HashMap::new();
    let mut tokens = TokenStream::new();

    if options.emit_error_type {
        owners.insert(options.error_type.clone(), ERROR_TYPE_OWNER.to_string());
        tokens.extend(generate_error_type(&error_type));
    }

    for descriptor in resources {
        let plan = plan_resource(descriptor)?;

        for name in plan.item_names() {
            if let Some(first) = owners.get(name) {
                return Err(GeneratorError::NamingCollision {
                    name: name.to_string(),
                    first: first.clone(),
                    second: descriptor.resource_type.clone(),
                });
            }
            owners.insert(name.to_string(), descriptor.resource_type.clone());
        }

        tokens.extend(plan.to_tokens(&error_type));
    }

    debug!(
        resources = resources.len(),
        items = owners.len(),
        "assembled resource name file"
    );
    Ok(tokens)
}

/// Validates generated code by parsing it with syn.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the code fails to parse.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {e}")))
}

/// Formats a parsed file with prettyplease, optionally prepending
/// [`GENERATED_HEADER`].
pub fn format_code(file: &syn::File, header: bool) -> String {
    let formatted = prettyplease::unparse(file);
    if header {
        format!("{GENERATED_HEADER}\n\n{formatted}")
    } else {
        formatted
    }
}

/// Renders a complete file for `resources` as formatted source text.
///
/// ## Errors
///
/// See [`assemble_file`] and [`validate_code`].
pub fn render_file(
    resources: &[ResourceDescriptor],
    options: &GenerateOptions,
) -> Result<String, GeneratorError> {
    let tokens = assemble_file(resources, options)?;
    let file = validate_code(&tokens)?;
    Ok(format_code(&file, options.header))
}

/// Writes content to a file atomically using temp file + rename.
///
/// Parent directories are created as needed.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if a directory cannot be created or
/// the write or rename fails.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Generates code for every resource in `manifest` and writes it to `output`.
///
/// In dry-run mode the code is printed to stdout and nothing is written.
///
/// ## Returns
///
/// The formatted code.
///
/// ## Errors
///
/// Any error from [`render_file`] or [`write_atomic`]. No file is written if
/// generation fails.
pub fn generate_and_write(
    manifest: &ResourceManifest,
    output: &Path,
    options: &GenerateOptions,
    dry_run: bool,
) -> Result<String, GeneratorError> {
    let code = render_file(&manifest.resources, options)?;

    if dry_run {
        println!("{code}");
    } else {
        write_atomic(output, &code)?;
        info!(
            path = %output.display(),
            resources = manifest.resources.len(),
            bytes = code.len(),
            "wrote resource names"
        );
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project() -> ResourceDescriptor {
        ResourceDescriptor::new(
            "cloudresourcemanager.googleapis.com/Project",
            "projects",
            ["projects/{project}"],
        )
    }

    fn book() -> ResourceDescriptor {
        ResourceDescriptor::new(
            "library.googleapis.com/Book",
            "books",
            [
                "shelves/{shelf}/books/{book}",
                "publishers/{publisher}/books/{book}",
            ],
        )
    }

    fn manifest() -> ResourceManifest {
        ResourceManifest::new(vec![project(), book()])
    }

    // === assemble_file tests ===

    #[test]
    fn error_type_is_emitted_once_before_resources() {
        let code = render_file(&[project(), book()], &GenerateOptions::default()).unwrap();

        assert_eq!(code.matches("pub enum ResourceNameError").count(), 1);
        let error_pos = code.find("pub enum ResourceNameError").unwrap();
        let project_pos = code.find("pub struct ProjectResourceName").unwrap();
        let book_pos = code.find("pub enum BookResourceName").unwrap();
        assert!(error_pos < project_pos);
        assert!(project_pos < book_pos);
    }

    #[test]
    fn error_type_can_be_renamed_or_omitted() {
        let options = GenerateOptions {
            error_type: "NameError".to_string(),
            emit_error_type: false,
            ..GenerateOptions::default()
        };
        let code = render_file(&[project()], &options).unwrap();

        assert!(!code.contains("pub enum NameError"));
        assert!(code.contains("Result<(), NameError>"));
    }

    #[test]
    fn empty_manifest_yields_only_error_type() {
        let code = render_file(&[], &GenerateOptions::default()).unwrap();
        assert!(code.starts_with(GENERATED_HEADER));
        assert!(code.contains("pub enum ResourceNameError"));
        assert!(!code.contains("pub struct"));
    }

    #[test]
    fn duplicate_resource_is_a_collision() {
        let err = assemble_file(&[project(), project()], &GenerateOptions::default()).unwrap_err();
        match err {
            GeneratorError::NamingCollision {
                name,
                first,
                second,
            } => {
                assert_eq!(name, "ProjectResourceName");
                assert_eq!(first, "cloudresourcemanager.googleapis.com/Project");
                assert_eq!(second, "cloudresourcemanager.googleapis.com/Project");
            }
            other => panic!("expected NamingCollision, got {other:?}"),
        }
    }

    #[test]
    fn same_kind_from_two_services_is_a_collision() {
        let other_book = ResourceDescriptor::new("store.example.com/Book", "books", ["books/{book}"]);
        let err = assemble_file(&[book(), other_book], &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, GeneratorError::NamingCollision { .. }));
    }

    #[test]
    fn resource_named_like_error_type_is_a_collision() {
        let options = GenerateOptions {
            error_type: "ProjectResourceName".to_string(),
            ..GenerateOptions::default()
        };
        let err = assemble_file(&[project()], &options).unwrap_err();
        assert!(err.to_string().contains("<error type>"));
    }

    #[test]
    fn invalid_resource_aborts_file() {
        let bad = ResourceDescriptor::new("example.com/Thing", "things", ["things/{self}"]);
        let err = assemble_file(&[project(), bad], &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidIdentifier { .. }));
    }

    #[test]
    fn invalid_options_are_rejected() {
        let options = GenerateOptions {
            error_type: "not an ident".to_string(),
            ..GenerateOptions::default()
        };
        let err = assemble_file(&[project()], &options).unwrap_err();
        assert!(matches!(err, GeneratorError::ConfigError(_)));
    }

    // === validate_code / format_code tests ===

    #[test]
    fn validate_code_rejects_invalid_code() {
        let bad: TokenStream = "fn ( )".parse().unwrap();
        let Err(err) = validate_code(&bad) else {
            panic!("expected invalid code to be rejected");
        };
        assert!(err.to_string().contains("Generated code is invalid"));
    }

    #[test]
    fn format_code_header_is_optional() {
        let file: syn::File = syn::parse_str("pub struct A;").unwrap();
        assert!(format_code(&file, true).starts_with(GENERATED_HEADER));
        assert!(!format_code(&file, false).contains(GENERATED_HEADER));
        assert!(format_code(&file, false).contains("pub struct A;"));
    }

    // === write_atomic tests ===

    #[test]
    fn write_atomic_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested/deep/names.rs");

        write_atomic(&file_path, "// Nested content").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "// Nested content");
    }

    #[test]
    fn write_atomic_overwrites_and_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("names.rs");
        fs::write(&file_path, "// Old content").unwrap();

        write_atomic(&file_path, "// New content").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "// New content");
        assert!(!file_path.with_extension("tmp").exists());
    }

    // === generate_and_write tests ===

    #[test]
    fn generate_and_write_dry_run_no_file_created() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("names.rs");

        let code =
            generate_and_write(&manifest(), &output, &GenerateOptions::default(), true).unwrap();

        assert!(code.contains("pub struct ProjectResourceName"));
        assert!(!output.exists());
    }

    #[test]
    #[tracing_test::traced_test]
    fn generate_and_write_returns_same_as_file_content() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("names.rs");

        let code =
            generate_and_write(&manifest(), &output, &GenerateOptions::default(), false).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), code);
        assert!(logs_contain("wrote resource names"));
    }

    #[test]
    fn generate_and_write_failure_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("names.rs");
        let manifest = ResourceManifest::new(vec![project(), project()]);

        let result = generate_and_write(&manifest, &output, &GenerateOptions::default(), false);

        assert!(result.is_err());
        assert!(!output.exists());
    }
}
