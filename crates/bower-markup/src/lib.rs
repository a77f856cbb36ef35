//! HTML element and attribute serialization for the Bower markup builder.
//!
//! This crate builds HTML fragments programmatically: compose [`Element`]
//! trees out of [`Attribute`] lists, text, and child elements, then
//! serialize the whole tree with [`Element::to_html`].
//!
//! # Scope
//!
//! This crate implements:
//! - **Attributes** ([WHATWG § 13.1.2.3](https://html.spec.whatwg.org/multipage/syntax.html#attributes-2))
//!   - boolean, scalar, and separator-joined list values
//!   - deferred name/value validation with fail-fast build errors
//! - **Elements** ([WHATWG § 13.1.2](https://html.spec.whatwg.org/multipage/syntax.html#elements-2))
//!   - start/end tag serialization with attributes in insertion order
//!   - nested content, rendered lazily and depth-first
//!   - void tags and the `autoclose` override, both end-tag-suppressing
//!
//! # Not Yet Implemented
//!
//! - Text and attribute-value escaping (everything is emitted verbatim)
//! - Pretty-printing of the emitted HTML
//!
//! # Example
//!
//! ```
//! use bower_markup::{Attribute, Element};
//!
//! let html = Element::new("div")
//!     .with_attribute(Attribute::new("class", "wide"))
//!     .with_content("hello")?
//!     .to_html()?;
//! assert_eq!(html, "<div class=\"wide\">hello</div>");
//! # Ok::<(), bower_markup::BuildError>(())
//! ```

/// Attribute names, values, and their serialization.
pub mod attribute;
/// Content nodes held by an element.
pub mod content;
/// Element composition and serialization.
pub mod element;
/// Serialization errors.
pub mod error;

pub use attribute::{Attribute, AttributeValue, DEFAULT_SEPARATOR};
pub use content::Content;
pub use element::{Element, ElementOptions, VOID_TAGS, is_void_tag};
pub use error::BuildError;
