//! Manifest decoding errors.

use bower_markup::BuildError;
use serde_json::Value;
use strum_macros::Display;
use thiserror::Error;

/// The JSON shape of a manifest node, used to name offending values in
/// error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum JsonKind {
    /// `null`
    Null,
    /// `true` or `false`
    Boolean,
    /// An integer or a float
    Number,
    /// A quoted string
    String,
    /// An array
    Array,
    /// An object
    Object,
}

impl JsonKind {
    /// Classify a JSON value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

/// Error type for manifest decoding.
///
/// Decoding is fail-fast: the first offending node aborts the decode and
/// its error names the JSON shape that was found. Missing names and values
/// are not decode errors; they stay unset and surface through
/// [`BuildError`] when the element is rendered.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest text is not valid JSON.
    #[error("manifest is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The manifest root is not an object.
    #[error("manifest root must be an element object, found {found}")]
    InvalidRoot {
        /// Shape of the root value.
        found: JsonKind,
    },

    /// A known field holds a value of the wrong shape.
    #[error("field \"{field}\" must be {expected}, found {found}")]
    InvalidField {
        /// Name of the field.
        field: &'static str,
        /// What the field accepts.
        expected: &'static str,
        /// Shape of the value that was found.
        found: JsonKind,
    },

    /// An attribute entry is not an object.
    #[error("attribute entries must be objects, found {found}")]
    InvalidAttributeType {
        /// Shape of the entry that was found.
        found: JsonKind,
    },

    /// An attribute value has an unsupported shape.
    #[error(
        "attribute values must be booleans, strings, numbers, or arrays of \
         strings and numbers, found {found}"
    )]
    InvalidValueType {
        /// Shape of the value that was found; for arrays, of the offending
        /// item.
        found: JsonKind,
    },

    /// A content entry has an unsupported shape.
    #[error("content entries must be strings, numbers, or element objects, found {found}")]
    InvalidContentType {
        /// Shape of the entry that was found.
        found: JsonKind,
    },

    /// Assembling the decoded element broke a build rule, e.g. content on
    /// a self-closing element.
    #[error(transparent)]
    Build(#[from] BuildError),
}
