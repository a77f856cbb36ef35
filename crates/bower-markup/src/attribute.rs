//! HTML attribute serialization.

use core::fmt;

use serde::Serialize;

use crate::error::BuildError;

/// Separator placed between list-value items when none is configured.
pub const DEFAULT_SEPARATOR: &str = ";";

/// The value carried by an [`Attribute`].
///
/// [§ 13.1.2.3 Attributes](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2)
///
/// "Attributes have a name and a value."
///
/// The three shapes cover the serialization rules: booleans toggle between
/// the bare-name form and `"off"`, scalars render verbatim, and lists are
/// joined with the attribute's separator. Conversions from strings and the
/// number primitives produce [`Scalar`](Self::Scalar) values, so
/// `attribute.set_value(42)` and `attribute.set_value("42")` are equivalent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// [§ 2.3.2 Boolean attributes](https://html.spec.whatwg.org/multipage/common-microsyntaxes.html#boolean-attributes)
    ///
    /// "The presence of a boolean attribute on an element represents the
    /// true value, and the absence of the attribute represents the false
    /// value."
    ///
    /// `true` serializes as the bare attribute name; `false` serializes as
    /// `name="off"` so the attribute stays visible in the output.
    Boolean(bool),

    /// A single value, emitted verbatim between double quotes.
    Scalar(String),

    /// An ordered list of values, joined by the attribute's separator with
    /// no trailing separator.
    List(Vec<String>),
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&String> for AttributeValue {
    fn from(value: &String) -> Self {
        Self::Scalar(value.clone())
    }
}

impl<S: Into<String>> From<Vec<S>> for AttributeValue {
    fn from(items: Vec<S>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for AttributeValue {
    fn from(items: [S; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

// Numbers are stringified on conversion, so `1.1_f64` renders as "1.1" and
// `1.0_f64` as "1".
macro_rules! impl_value_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AttributeValue {
                fn from(value: $ty) -> Self {
                    Self::Scalar(value.to_string())
                }
            }
        )*
    };
}

impl_value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// A single HTML attribute with deferred validation.
///
/// [§ 13.1.2.3 Attributes](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2)
///
/// "Attributes for an element are expressed inside the element's start tag."
///
/// Name and value may stay unset while the attribute is assembled; they are
/// only required once [`Attribute::build`] runs. Names are trimmed on the
/// way in, and a name that trims to the empty string counts as unset.
///
/// Values are serialized exactly as given. Nothing is escaped, so callers
/// that embed untrusted input must sanitize it first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// "Attributes have a name"
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// "and a value"
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<AttributeValue>,
    /// Joins the items of a [`AttributeValue::List`] value.
    #[serde(skip_serializing_if = "is_default_separator")]
    separator: String,
}

fn is_default_separator(separator: &str) -> bool {
    separator == DEFAULT_SEPARATOR
}

/// Trim a name, treating an all-whitespace result as unset.
pub(crate) fn normalize_name(name: impl Into<String>) -> Option<String> {
    let name = name.into();
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == name.len() {
        Some(name)
    } else {
        Some(trimmed.to_owned())
    }
}

impl Attribute {
    /// Create an attribute with a name and value already set.
    pub fn new(name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            name: normalize_name(name),
            value: Some(value.into()),
            separator: DEFAULT_SEPARATOR.to_owned(),
        }
    }

    /// Set the attribute name, replacing any previous one.
    ///
    /// The name is trimmed; a name that trims to the empty string leaves
    /// the attribute unnamed.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = normalize_name(name);
    }

    /// Set the attribute value, replacing any previous one.
    pub fn set_value(&mut self, value: impl Into<AttributeValue>) {
        self.value = Some(value.into());
    }

    /// Set the separator joining list-value items.
    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.separator = separator.into();
    }

    /// Builder form of [`Attribute::set_name`].
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    /// Builder form of [`Attribute::set_value`].
    #[must_use]
    pub fn with_value(mut self, value: impl Into<AttributeValue>) -> Self {
        self.set_value(value);
        self
    }

    /// Builder form of [`Attribute::set_separator`].
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.set_separator(separator);
        self
    }

    /// The attribute name, if one is set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The attribute value, if one is set.
    #[must_use]
    pub const fn value(&self) -> Option<&AttributeValue> {
        self.value.as_ref()
    }

    /// The separator joining list-value items.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Serialize the attribute into its start-tag form.
    ///
    /// [§ 13.1.2.3 Attributes](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2)
    ///
    /// Boolean `true` uses the empty attribute syntax: "Just the attribute
    /// name." Everything else uses the double-quoted syntax: "The attribute
    /// name, followed by ... a U+003D EQUALS SIGN character ... a U+0022
    /// QUOTATION MARK character".
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingName`] if no name is set and
    /// [`BuildError::MissingValue`] if no value is set. The checks run in
    /// that order.
    pub fn build(&self) -> Result<String, BuildError> {
        let name = self.name.as_deref().ok_or(BuildError::MissingName)?;
        let value = self.value.as_ref().ok_or(BuildError::MissingValue)?;

        Ok(match value {
            AttributeValue::Boolean(true) => name.to_owned(),
            AttributeValue::Boolean(false) => format!("{name}=\"off\""),
            AttributeValue::Scalar(scalar) => format!("{name}=\"{scalar}\""),
            AttributeValue::List(items) => {
                format!("{name}=\"{}\"", items.join(&self.separator))
            }
        })
    }
}

impl Default for Attribute {
    /// An attribute with nothing set and the default separator.
    fn default() -> Self {
        Self {
            name: None,
            value: None,
            separator: DEFAULT_SEPARATOR.to_owned(),
        }
    }
}

impl fmt::Display for Attribute {
    /// Formats via [`Attribute::build`]; an incomplete attribute yields
    /// [`fmt::Error`]. Prefer `build` when the failure matters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let built = self.build().map_err(|_| fmt::Error)?;
        f.write_str(&built)
    }
}
