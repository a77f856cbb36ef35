//! Serialization errors.

use thiserror::Error;

/// Error type for attribute and element serialization.
///
/// Serialization is fail-fast: the first offending attribute or element
/// aborts the whole render and nothing is emitted. Until then, names and
/// values may stay unset; an [`Attribute`](crate::Attribute) or
/// [`Element`](crate::Element) only has to be complete at build time.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// No name was set, or the name trimmed down to the empty string.
    #[error("name is not set")]
    MissingName,

    /// The attribute has a name but no value.
    #[error("value is not set")]
    MissingValue,

    /// Content was handed to an element that is serialized without an end
    /// tag, so the content could never be emitted.
    #[error("content cannot be added to a self-closing element")]
    SelfClosingTag,
}
