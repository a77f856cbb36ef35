//! JSON manifest decoding.

use bower_markup::{Attribute, AttributeValue, Content, Element, ElementOptions};
use serde_json::{Map, Value};

use crate::error::{JsonKind, ManifestError};

/// Decode an element manifest from JSON text.
///
/// # Errors
///
/// Returns [`ManifestError::Json`] for malformed JSON and a shape error for
/// the first manifest node that does not fit the schema. Content placed on
/// a self-closing element fails with [`ManifestError::Build`].
pub fn from_str(manifest: &str) -> Result<Element, ManifestError> {
    let value: Value = serde_json::from_str(manifest)?;
    from_value(&value)
}

/// Decode an element manifest from an already-parsed JSON value.
///
/// # Errors
///
/// Returns [`ManifestError::InvalidRoot`] unless `manifest` is an object,
/// and otherwise the same errors as [`from_str`].
pub fn from_value(manifest: &Value) -> Result<Element, ManifestError> {
    let Value::Object(fields) = manifest else {
        return Err(ManifestError::InvalidRoot {
            found: JsonKind::of(manifest),
        });
    };
    decode_element(fields)
}

/// Decode one element object. `tag` may be absent; the element then fails
/// with a missing-name error at render time, not here.
fn decode_element(fields: &Map<String, Value>) -> Result<Element, ManifestError> {
    let mut element = Element::default();

    if let Some(tag) = fields.get("tag") {
        let Value::String(name) = tag else {
            return Err(ManifestError::InvalidField {
                field: "tag",
                expected: "a string",
                found: JsonKind::of(tag),
            });
        };
        element.set_name(name);
    }

    if let Some(options) = fields.get("options") {
        element.set_options(decode_options(options)?);
    }

    if let Some(attributes) = fields.get("attributes") {
        let Value::Array(entries) = attributes else {
            return Err(ManifestError::InvalidField {
                field: "attributes",
                expected: "an array",
                found: JsonKind::of(attributes),
            });
        };
        for entry in entries {
            element.add_attribute(decode_attribute(entry)?);
        }
    }

    if let Some(content) = fields.get("content") {
        let Value::Array(nodes) = content else {
            return Err(ManifestError::InvalidField {
                field: "content",
                expected: "an array",
                found: JsonKind::of(content),
            });
        };
        for node in nodes {
            element.add_content(decode_content(node)?)?;
        }
    }

    Ok(element)
}

/// Decode the `options` object. Only `autoclose` is interpreted, and only
/// when it is a JSON boolean; any other shape leaves it unset. Unknown
/// keys are ignored.
fn decode_options(options: &Value) -> Result<ElementOptions, ManifestError> {
    let Value::Object(fields) = options else {
        return Err(ManifestError::InvalidField {
            field: "options",
            expected: "an object",
            found: JsonKind::of(options),
        });
    };

    let autoclose = match fields.get("autoclose") {
        Some(Value::Bool(flag)) => Some(*flag),
        _ => None,
    };
    Ok(ElementOptions { autoclose })
}

/// Decode one attribute entry. `name` and `value` may be absent (or the
/// value `null`); the attribute then fails at render time, not here.
fn decode_attribute(entry: &Value) -> Result<Attribute, ManifestError> {
    let Value::Object(fields) = entry else {
        return Err(ManifestError::InvalidAttributeType {
            found: JsonKind::of(entry),
        });
    };
    let mut attribute = Attribute::default();

    if let Some(name) = fields.get("name") {
        let Value::String(name) = name else {
            return Err(ManifestError::InvalidField {
                field: "name",
                expected: "a string",
                found: JsonKind::of(name),
            });
        };
        attribute.set_name(name);
    }

    match fields.get("value") {
        // Null defers to the missing-value rule at render time.
        None | Some(Value::Null) => {}
        Some(value) => attribute.set_value(decode_attribute_value(value)?),
    }

    if let Some(separator) = fields.get("separator") {
        let Value::String(separator) = separator else {
            return Err(ManifestError::InvalidField {
                field: "separator",
                expected: "a string",
                found: JsonKind::of(separator),
            });
        };
        attribute.set_separator(separator);
    }

    Ok(attribute)
}

fn decode_attribute_value(value: &Value) -> Result<AttributeValue, ManifestError> {
    match value {
        Value::Bool(flag) => Ok(AttributeValue::Boolean(*flag)),
        Value::String(scalar) => Ok(AttributeValue::Scalar(scalar.clone())),
        Value::Number(number) => Ok(AttributeValue::Scalar(number.to_string())),
        Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(scalar) => list.push(scalar.clone()),
                    Value::Number(number) => list.push(number.to_string()),
                    _ => {
                        return Err(ManifestError::InvalidValueType {
                            found: JsonKind::of(item),
                        });
                    }
                }
            }
            Ok(AttributeValue::List(list))
        }
        _ => Err(ManifestError::InvalidValueType {
            found: JsonKind::of(value),
        }),
    }
}

/// Decode one content entry: text, number, or a nested element object.
/// Booleans, nulls, and arrays have no content form.
fn decode_content(node: &Value) -> Result<Content, ManifestError> {
    match node {
        Value::String(text) => Ok(Content::Text(text.clone())),
        Value::Number(number) => Ok(Content::Text(number.to_string())),
        Value::Object(fields) => Ok(Content::Child(decode_element(fields)?)),
        _ => Err(ManifestError::InvalidContentType {
            found: JsonKind::of(node),
        }),
    }
}
