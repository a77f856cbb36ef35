//! Integration tests for JSON manifest decoding.

use bower_manifest::{JsonKind, ManifestError};
use bower_markup::{BuildError, Element};
use serde_json::json;

/// Helper to decode a manifest that is expected to be well-formed.
fn decode(manifest: &str) -> Element {
    bower_manifest::from_str(manifest).expect("manifest should decode")
}

/// Helper to decode a manifest that is expected to be rejected.
fn decode_err(manifest: &str) -> ManifestError {
    bower_manifest::from_str(manifest).expect_err("manifest should be rejected")
}

/// Helper to decode and render in one step.
fn decode_html(manifest: &str) -> String {
    decode(manifest)
        .to_html()
        .expect("decoded element should render")
}

// ========== well-formed manifests ==========

#[test]
fn test_minimal_manifest() {
    assert_eq!(decode_html(r#"{ "tag": "div" }"#), "<div></div>");
}

#[test]
fn test_full_manifest() {
    let manifest = r#"{
        "tag": "div",
        "attributes": [
            { "name": "class", "value": "wide" },
            { "name": "style", "value": ["width: 100px", "height: 100px"] },
            { "name": "required", "value": true }
        ],
        "content": [ "text", 42, { "tag": "span", "content": ["nested"] } ]
    }"#;

    assert_eq!(
        decode_html(manifest),
        "<div class=\"wide\" style=\"width: 100px;height: 100px\" required>\
         text42<span>nested</span></div>"
    );
}

#[test]
fn test_void_tag_manifest() {
    assert_eq!(decode_html(r#"{ "tag": "br" }"#), "<br>");
}

#[test]
fn test_autoclose_false_suppresses_the_end_tag() {
    assert_eq!(
        decode_html(r#"{ "tag": "div", "options": { "autoclose": false } }"#),
        "<div>"
    );
}

#[test]
fn test_custom_separator() {
    let manifest = r#"{
        "tag": "p",
        "attributes": [ { "name": "style", "value": ["a", "b"], "separator": " " } ]
    }"#;
    assert_eq!(decode_html(manifest), "<p style=\"a b\"></p>");
}

#[test]
fn test_boolean_false_value_renders_off() {
    let manifest = r#"{
        "tag": "form",
        "attributes": [ { "name": "autocomplete", "value": false } ]
    }"#;
    assert_eq!(decode_html(manifest), "<form autocomplete=\"off\"></form>");
}

#[test]
fn test_number_values_render_as_text() {
    let manifest = r#"{
        "tag": "canvas",
        "attributes": [ { "name": "width", "value": 100 } ],
        "content": [ 1.1 ]
    }"#;
    assert_eq!(decode_html(manifest), "<canvas width=\"100\">1.1</canvas>");
}

#[test]
fn test_nested_elements_decode_recursively() {
    let manifest = r#"{ "tag": "div", "content": [ { "tag": "div", "content": [ { "tag": "div" } ] } ] }"#;
    assert_eq!(decode_html(manifest), "<div><div><div></div></div></div>");
}

#[test]
fn test_non_boolean_autoclose_is_ignored() {
    assert_eq!(
        decode_html(r#"{ "tag": "div", "options": { "autoclose": "no" } }"#),
        "<div></div>"
    );
}

#[test]
fn test_unknown_keys_are_ignored() {
    assert_eq!(
        decode_html(r#"{ "tag": "div", "comment": "ignored", "options": { "future": 1 } }"#),
        "<div></div>"
    );
}

#[test]
fn test_from_value_accepts_parsed_json() {
    let element = bower_manifest::from_value(&json!({ "tag": "p", "content": ["hi"] }))
        .expect("manifest should decode");
    assert_eq!(element.to_html().unwrap(), "<p>hi</p>");
}

// ========== deferred completeness ==========

#[test]
fn test_missing_tag_is_not_a_decode_error() {
    let element = decode("{}");
    assert_eq!(element.name(), None);
    assert_eq!(element.to_html(), Err(BuildError::MissingName));
}

#[test]
fn test_unnamed_attribute_fails_at_render_time() {
    let element = decode(r#"{ "tag": "div", "attributes": [ { "value": "orphan" } ] }"#);
    assert_eq!(element.to_html(), Err(BuildError::MissingName));
}

#[test]
fn test_null_value_defers_to_render_time() {
    let element = decode(r#"{ "tag": "div", "attributes": [ { "name": "x", "value": null } ] }"#);
    assert_eq!(element.to_html(), Err(BuildError::MissingValue));
}

// ========== rejected roots and fields ==========

#[test]
fn test_array_root_is_rejected() {
    assert!(matches!(
        decode_err("[1, 2]"),
        ManifestError::InvalidRoot {
            found: JsonKind::Array
        }
    ));
}

#[test]
fn test_string_root_is_rejected() {
    assert!(matches!(
        decode_err(r#""just text""#),
        ManifestError::InvalidRoot {
            found: JsonKind::String
        }
    ));
}

#[test]
fn test_non_string_tag_is_rejected() {
    assert!(matches!(
        decode_err(r#"{ "tag": 1 }"#),
        ManifestError::InvalidField {
            field: "tag",
            found: JsonKind::Number,
            ..
        }
    ));
}

#[test]
fn test_non_object_options_are_rejected() {
    assert!(matches!(
        decode_err(r#"{ "tag": "div", "options": [] }"#),
        ManifestError::InvalidField {
            field: "options",
            found: JsonKind::Array,
            ..
        }
    ));
}

#[test]
fn test_non_array_attributes_are_rejected() {
    assert!(matches!(
        decode_err(r#"{ "tag": "div", "attributes": {} }"#),
        ManifestError::InvalidField {
            field: "attributes",
            found: JsonKind::Object,
            ..
        }
    ));
}

#[test]
fn test_non_array_content_is_rejected() {
    assert!(matches!(
        decode_err(r#"{ "tag": "div", "content": "text" }"#),
        ManifestError::InvalidField {
            field: "content",
            found: JsonKind::String,
            ..
        }
    ));
}

#[test]
fn test_malformed_json_is_reported() {
    assert!(matches!(decode_err("{ tag:"), ManifestError::Json(_)));
}

// ========== invalid attribute shapes ==========

#[test]
fn test_non_object_attribute_entry_is_rejected() {
    assert!(matches!(
        decode_err(r#"{ "tag": "div", "attributes": ["class"] }"#),
        ManifestError::InvalidAttributeType {
            found: JsonKind::String
        }
    ));
}

#[test]
fn test_object_attribute_value_is_rejected() {
    assert!(matches!(
        decode_err(r#"{ "tag": "div", "attributes": [ { "name": "x", "value": {} } ] }"#),
        ManifestError::InvalidValueType {
            found: JsonKind::Object
        }
    ));
}

#[test]
fn test_bad_list_item_reports_the_item_shape() {
    assert!(matches!(
        decode_err(r#"{ "tag": "div", "attributes": [ { "name": "x", "value": ["ok", true] } ] }"#),
        ManifestError::InvalidValueType {
            found: JsonKind::Boolean
        }
    ));
}

#[test]
fn test_non_string_attribute_name_is_rejected() {
    assert!(matches!(
        decode_err(r#"{ "tag": "div", "attributes": [ { "name": 5 } ] }"#),
        ManifestError::InvalidField {
            field: "name",
            found: JsonKind::Number,
            ..
        }
    ));
}

#[test]
fn test_non_string_separator_is_rejected() {
    assert!(matches!(
        decode_err(r#"{ "tag": "div", "attributes": [ { "name": "x", "value": [], "separator": 4 } ] }"#),
        ManifestError::InvalidField {
            field: "separator",
            found: JsonKind::Number,
            ..
        }
    ));
}

#[test]
fn test_decode_stops_at_the_first_offence() {
    // The second entry is also invalid; the first one wins.
    let manifest = r#"{ "tag": "div", "attributes": [ { "name": 5 }, "second" ] }"#;
    assert!(matches!(
        decode_err(manifest),
        ManifestError::InvalidField { field: "name", .. }
    ));
}

// ========== invalid content shapes ==========

#[test]
fn test_boolean_content_is_rejected() {
    assert!(matches!(
        decode_err(r#"{ "tag": "div", "content": [true] }"#),
        ManifestError::InvalidContentType {
            found: JsonKind::Boolean
        }
    ));
}

#[test]
fn test_null_content_is_rejected() {
    assert!(matches!(
        decode_err(r#"{ "tag": "div", "content": [null] }"#),
        ManifestError::InvalidContentType {
            found: JsonKind::Null
        }
    ));
}

#[test]
fn test_array_content_is_rejected() {
    assert!(matches!(
        decode_err(r#"{ "tag": "div", "content": [["no"]] }"#),
        ManifestError::InvalidContentType {
            found: JsonKind::Array
        }
    ));
}

#[test]
fn test_content_on_a_void_tag_is_a_build_error() {
    assert!(matches!(
        decode_err(r#"{ "tag": "br", "content": ["text"] }"#),
        ManifestError::Build(BuildError::SelfClosingTag)
    ));
}

#[test]
fn test_content_with_autoclose_false_is_a_build_error() {
    let manifest = r#"{ "tag": "div", "options": { "autoclose": false }, "content": ["text"] }"#;
    assert!(matches!(
        decode_err(manifest),
        ManifestError::Build(BuildError::SelfClosingTag)
    ));
}

// ========== error messages ==========

#[test]
fn test_error_messages_name_the_json_shape() {
    let error = decode_err(r#"{ "tag": "div", "content": [true] }"#);
    assert_eq!(
        error.to_string(),
        "content entries must be strings, numbers, or element objects, found boolean"
    );
}
