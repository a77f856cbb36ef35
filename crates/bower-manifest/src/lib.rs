//! JSON element-manifest decoding for the Bower markup builder.
//!
//! A manifest is a JSON object describing one element; decoding turns it
//! into a [`bower_markup::Element`] ready to serialize:
//!
//! ```json
//! {
//!   "tag": "div",
//!   "options": { "autoclose": false },
//!   "attributes": [
//!     { "name": "class", "value": "wide" },
//!     { "name": "style", "value": ["width: 100px", "height: 100px"] },
//!     { "name": "required", "value": true }
//!   ],
//!   "content": [ "text", 42, { "tag": "span", "content": ["nested"] } ]
//! }
//! ```
//!
//! # Scope
//!
//! - **Shape checking** - the first node that does not fit the schema
//!   aborts the decode with an error naming the shape that was found
//! - **Deferred completeness** - a missing `tag`, attribute `name`, or
//!   attribute `value` is not a decode error; the element simply fails
//!   later when it is rendered
//! - **Nested elements** - `content` entries may be element objects,
//!   decoded recursively
//!
//! # Example
//!
//! ```
//! let element = bower_manifest::from_str(r#"{ "tag": "p", "content": ["hi", 5] }"#)?;
//! assert_eq!(element.to_html()?, "<p>hi5</p>");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Manifest decoding functions.
pub mod decode;
/// Manifest decoding errors.
pub mod error;

pub use decode::{from_str, from_value};
pub use error::{JsonKind, ManifestError};
