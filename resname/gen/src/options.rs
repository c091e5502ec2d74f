//! Generator configuration.
//!
//! Options can be built directly or parsed from a protoc-style parameter
//! string such as `error_type=NameError,header=false`.

use proc_macro2::Ident;
use quote::format_ident;

use crate::errors::GeneratorError;
use crate::naming::check_ident;

/// Default name of the generated runtime error enum.
pub const DEFAULT_ERROR_TYPE: &str = "ResourceNameError";

/// Options controlling file-level output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Name of the runtime error enum used by generated code.
    pub error_type: String,
    /// Emit the error enum. Disable when appending to a module that already
    /// has it in scope.
    pub emit_error_type: bool,
    /// Prepend the "automatically generated" notice.
    pub header: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            error_type: DEFAULT_ERROR_TYPE.to_string(),
            emit_error_type: true,
            header: true,
        }
    }
}

impl GenerateOptions {
    /// Parses options from a comma-separated `key=value` parameter string.
    ///
    /// Boolean options may be given without a value to enable them.
    ///
    /// ## Examples
    ///
    /// ```
    /// use resname_gen::options::GenerateOptions;
    ///
    /// let options = GenerateOptions::from_parameter("error_type=NameError,header=false").unwrap();
    /// assert_eq!(options.error_type, "NameError");
    /// assert!(!options.header);
    /// assert!(options.emit_error_type);
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` for unknown keys, malformed
    /// pairs, non-boolean values for boolean options, or an error type name
    /// that is not a valid identifier.
    pub fn from_parameter(parameter: &str) -> Result<Self, GeneratorError> {
        let mut options = Self::default();

        for part in parameter.split(',') {
            let pair: Vec<&str> = part.splitn(2, '=').map(str::trim).collect();
            match pair.as_slice() {
                [""] => {}
                ["error_type", value] => options.error_type = (*value).to_string(),
                ["emit_error_type", value] => {
                    options.emit_error_type = parse_bool("emit_error_type", value)?;
                }
                ["header", value] => options.header = parse_bool("header", value)?,
                ["emit_error_type"] => options.emit_error_type = true,
                ["header"] => options.header = true,
                [key] | [key, _] => {
                    return Err(GeneratorError::ConfigError(format!("Unknown option: {key}")));
                }
                _ => {
                    return Err(GeneratorError::ConfigError(format!(
                        "Invalid option format: {part}"
                    )));
                }
            }
        }

        options.validate()?;
        Ok(options)
    }

    /// Checks that the options can produce valid code.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` if `error_type` is not a valid
    /// Rust identifier.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        check_ident("<options>", &self.error_type).map_err(|e| {
            GeneratorError::ConfigError(format!("error_type '{}' is invalid: {e}", self.error_type))
        })
    }

    /// The error enum name as an identifier. Call [`Self::validate`] first.
    pub fn error_ident(&self) -> Ident {
        format_ident!("{}", self.error_type)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, GeneratorError> {
    value.parse().map_err(|_| {
        GeneratorError::ConfigError(format!("Option '{key}' expects true or false, got '{value}'"))
    })
}
