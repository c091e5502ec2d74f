//! Resource name patterns.
//!
//! A pattern such as `publishers/{publisher}/books/{book}` is split on `/`
//! into an ordered list of [`Segment`]s. A token wrapped in braces is a
//! variable, every other token is a literal kept verbatim (empty tokens
//! included). Segment order is the wire order used for formatting and parsing.
//!
//! Besides parsing, [`Pattern`] offers runtime helpers to format, scan and
//! match concrete resource names without generating any code.

use std::fmt;

use thiserror::Error;

/// The reserved wildcard value, usable in place of any variable segment.
pub const WILDCARD: &str = "-";

/// One `/`-delimited token of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    literal: String,
    is_variable: bool,
}

impl Segment {
    /// A literal segment, matched verbatim.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            literal: text.into(),
            is_variable: false,
        }
    }

    /// A variable segment; `name` is the text between the braces.
    pub fn variable(name: impl Into<String>) -> Self {
        Self {
            literal: name.into(),
            is_variable: true,
        }
    }

    /// The literal text, or the unwrapped variable name.
    pub fn text(&self) -> &str {
        &self.literal
    }

    pub fn is_variable(&self) -> bool {
        self.is_variable
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_variable {
            write!(f, "{{{}}}", self.literal)
        } else {
            f.write_str(&self.literal)
        }
    }
}

/// Errors returned by the runtime helpers on [`Pattern`] and by [`validate_name`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("expected {expected} parts, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("expected '{expected}' at position {position}, got '{got}'")]
    LiteralMismatch {
        expected: String,
        position: usize,
        got: String,
    },

    #[error("resource name cannot be empty")]
    Empty,

    #[error("resource name cannot contain empty segments")]
    EmptySegment,

    #[error("resource name cannot start or end with '/'")]
    EdgeSlash,
}

/// A parsed pattern: the ordered segments of a pattern string.
///
/// ## Examples
///
/// ```
/// use resname_gen::pattern::Pattern;
///
/// let pattern = Pattern::parse("publishers/{publisher}/books/{book}");
/// assert_eq!(pattern.len(), 4);
/// assert_eq!(pattern.variables().collect::<Vec<_>>(), vec!["publisher", "book"]);
/// assert_eq!(pattern.to_string(), "publishers/{publisher}/books/{book}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses a pattern string. Never fails: empty input yields a single empty
    /// literal segment, and no trimming or normalization is applied.
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .map(|part| {
                match part.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
                    Some(name) => Segment::variable(name),
                    None => Segment::literal(part),
                }
            })
            .collect();

        Self { segments }
    }

    /// Builds a pattern from already-split segments.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments, literal and variable.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Variable names in pattern order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter(|s| s.is_variable())
            .map(Segment::text)
    }

    pub fn variable_count(&self) -> usize {
        self.variables().count()
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variables().any(|v| v == name)
    }

    /// Substitutes `values` into the variable positions, in order.
    ///
    /// A variable with no corresponding value is left empty.
    ///
    /// ```
    /// use resname_gen::pattern::Pattern;
    ///
    /// let pattern = Pattern::parse("shelves/{shelf}/books/{book}");
    /// assert_eq!(pattern.format(&["s1", "b1"]), "shelves/s1/books/b1");
    /// assert_eq!(pattern.format(&["s1"]), "shelves/s1/books/");
    /// ```
    pub fn format(&self, values: &[&str]) -> String {
        let mut values = values.iter();
        let parts: Vec<&str> = self
            .segments
            .iter()
            .map(|segment| {
                if segment.is_variable() {
                    values.next().copied().unwrap_or_default()
                } else {
                    segment.text()
                }
            })
            .collect();
        parts.join("/")
    }

    /// Scans a resource name against this pattern, returning the variable
    /// values in pattern order.
    ///
    /// Only the structure is checked: values are not validated.
    ///
    /// ## Errors
    ///
    /// Returns `NameError::ArityMismatch` if the number of `/`-separated parts
    /// differs from the segment count, or `NameError::LiteralMismatch` for the
    /// first literal position that does not match.
    ///
    /// ```
    /// use resname_gen::pattern::Pattern;
    ///
    /// let pattern = Pattern::parse("shelves/{shelf}/books/{book}");
    /// assert_eq!(pattern.scan("shelves/s1/books/b1").unwrap(), vec!["s1", "b1"]);
    /// assert_eq!(
    ///     pattern.scan("shelves/s1").unwrap_err().to_string(),
    ///     "expected 4 parts, got 2"
    /// );
    /// ```
    pub fn scan<'a>(&self, name: &'a str) -> Result<Vec<&'a str>, NameError> {
        let parts: Vec<&str> = name.split('/').collect();
        if parts.len() != self.segments.len() {
            return Err(NameError::ArityMismatch {
                expected: self.segments.len(),
                got: parts.len(),
            });
        }

        let mut values = Vec::with_capacity(self.variable_count());
        for (position, (segment, part)) in self.segments.iter().zip(parts).enumerate() {
            if segment.is_variable() {
                values.push(part);
            } else if segment.text() != part {
                return Err(NameError::LiteralMismatch {
                    expected: segment.text().to_string(),
                    position,
                    got: part.to_string(),
                });
            }
        }

        Ok(values)
    }

    /// True if `name` has the same shape as this pattern.
    pub fn matches(&self, name: &str) -> bool {
        self.scan(name).is_ok()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Checks the general shape of a resource name, independent of any pattern.
///
/// ## Errors
///
/// Rejects empty names, names containing `//` and names with a leading or
/// trailing `/`.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.contains("//") {
        return Err(NameError::EmptySegment);
    }
    if name.starts_with('/') || name.ends_with('/') {
        return Err(NameError::EdgeSlash);
    }
    Ok(())
}
