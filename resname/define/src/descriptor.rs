//! Core types for resource descriptors.
//!
//! - [`ResourceDescriptor`] - A single annotated resource
//! - [`History`] - Pattern history of a resource

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Pattern history of a resource.
///
/// `FutureMultiPattern` asks the generator to emit the multi-pattern shape even
/// while the resource only declares one pattern, so that adding a pattern later
/// does not change the public type.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use resname_define::History;
///
/// assert_eq!(History::from_str("FUTURE_MULTI_PATTERN").unwrap(), History::FutureMultiPattern);
/// assert_eq!(History::from_str("UNSPECIFIED").unwrap(), History::Unspecified);
/// assert_eq!(History::OriginallySinglePattern.to_string(), "ORIGINALLY_SINGLE_PATTERN");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum History {
    /// No history information was declared.
    #[default]
    #[serde(rename = "HISTORY_UNSPECIFIED", alias = "UNSPECIFIED")]
    #[strum(to_string = "HISTORY_UNSPECIFIED", serialize = "UNSPECIFIED")]
    Unspecified,
    /// The resource always had exactly one pattern.
    #[serde(rename = "ORIGINALLY_SINGLE_PATTERN")]
    #[strum(to_string = "ORIGINALLY_SINGLE_PATTERN")]
    OriginallySinglePattern,
    /// The resource will gain more patterns in the future.
    #[serde(rename = "FUTURE_MULTI_PATTERN")]
    #[strum(to_string = "FUTURE_MULTI_PATTERN")]
    FutureMultiPattern,
}

/// A resource annotation, as delivered by the host.
///
/// The field names on the wire follow the `google.api.resource` annotation:
/// `type`, `plural`, `pattern` (repeated) and `history`.
///
/// ## Examples
///
/// ```
/// use resname_define::{History, ResourceDescriptor};
///
/// let shelf = ResourceDescriptor::new(
///     "library.googleapis.com/Shelf",
///     "shelves",
///     ["projects/{project}/shelves/{shelf}", "users/{user}/shelves/{shelf}"],
/// );
/// assert!(shelf.is_multi_pattern());
///
/// let author = ResourceDescriptor::new("library.googleapis.com/Author", "authors", ["authors/{author}"])
///     .with_history(History::FutureMultiPattern);
/// assert!(author.is_future_multi_pattern());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Resource type in `<service>/<Kind>` form (e.g. `library.googleapis.com/Book`).
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Collection literal associated with the resource (e.g. `books`).
    #[serde(default)]
    pub plural: String,
    /// Patterns in declaration order. The order is the parse priority.
    #[serde(rename = "pattern", default)]
    pub patterns: Vec<String>,
    /// Pattern history.
    #[serde(default)]
    pub history: History,
}

impl ResourceDescriptor {
    /// Creates a descriptor with [`History::Unspecified`].
    pub fn new<I, S>(resource_type: impl Into<String>, plural: impl Into<String>, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            resource_type: resource_type.into(),
            plural: plural.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
            history: History::Unspecified,
        }
    }

    /// Returns the descriptor with its history replaced.
    pub fn with_history(mut self, history: History) -> Self {
        self.history = history;
        self
    }

    /// True when more than one pattern is declared.
    pub fn is_multi_pattern(&self) -> bool {
        self.patterns.len() > 1
    }

    /// True when the history is [`History::FutureMultiPattern`].
    pub fn is_future_multi_pattern(&self) -> bool {
        self.history == History::FutureMultiPattern
    }

    /// The resource kind: the component after the service name in `type`.
    ///
    /// Falls back to `Resource` when `type` has no `/`.
    ///
    /// ```
    /// use resname_define::ResourceDescriptor;
    ///
    /// let d = ResourceDescriptor::new("pubsub.googleapis.com/Topic", "topics", ["topics/{topic}"]);
    /// assert_eq!(d.kind(), "Topic");
    ///
    /// let d = ResourceDescriptor::new("Topic", "topics", ["topics/{topic}"]);
    /// assert_eq!(d.kind(), "Resource");
    /// ```
    pub fn kind(&self) -> &str {
        self.resource_type.split('/').nth(1).unwrap_or("Resource")
    }
}
