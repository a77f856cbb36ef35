//! HTML element composition and serialization.

use core::fmt;

use serde::Serialize;

use crate::attribute::{Attribute, normalize_name};
use crate::content::Content;
use crate::error::BuildError;

/// Tag names that are serialized without an end tag.
///
/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#elements-2)
///
/// "Void elements only have a start tag; end tags must not be specified
/// for void elements."
///
/// `param` was retired from the void-element list but is still skipped by
/// the fragment serializer
/// ([§ 13.3](https://html.spec.whatwg.org/multipage/parsing.html#serialising-html-fragments)),
/// so it stays in this set.
pub const VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Returns true if `name` is one of the [`VOID_TAGS`].
///
/// The comparison is exact; void tag names are lowercase.
#[must_use]
pub fn is_void_tag(name: &str) -> bool {
    VOID_TAGS.contains(&name)
}

/// Rendering options for an [`Element`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ElementOptions {
    /// Whether the end tag is emitted.
    ///
    /// `None` leaves the decision to the void-tag set, `Some(false)` forces
    /// the end tag off for any tag, and `Some(true)` is a no-op: void tags
    /// never get an end tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoclose: Option<bool>,
}

impl ElementOptions {
    /// Returns true if no option has been set.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.autoclose.is_none()
    }
}

/// A composable HTML element.
///
/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#elements-2)
///
/// "Raw text, escapable raw text, and normal elements have a start tag to
/// indicate where they begin, and an end tag to indicate where they end."
///
/// An element owns its attributes and content nodes and serializes them on
/// demand: nothing is rendered until [`Element::to_html`] runs, so parts
/// may be filled in over time and in any order. Serialization never
/// consumes or mutates the element, so repeated calls yield the same
/// string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    /// "a start tag"
    ///
    /// The tag name, trimmed on the way in.
    #[serde(rename = "tag", skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    /// Rendering options.
    #[serde(skip_serializing_if = "ElementOptions::is_default")]
    options: ElementOptions,

    /// Attributes in insertion order. Duplicate names are kept; each
    /// occurrence is serialized where it was appended.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<Attribute>,

    /// Content nodes in insertion order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    content: Vec<Content>,
}

impl Element {
    /// Create an element with the given tag name.
    ///
    /// The name is trimmed; a name that trims to the empty string leaves
    /// the element unnamed, which fails with [`BuildError::MissingName`]
    /// once the element is rendered.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: normalize_name(name),
            ..Self::default()
        }
    }

    /// Set the tag name, replacing any previous one.
    ///
    /// The name is trimmed; a name that trims to the empty string leaves
    /// the element unnamed. Renaming does not touch existing content, even
    /// when the new name is a void tag.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = normalize_name(name);
    }

    /// Set the rendering options, replacing the previous ones.
    pub fn set_options(&mut self, options: ElementOptions) {
        self.options = options;
    }

    /// Append one attribute.
    ///
    /// Attributes are serialized in insertion order. A name that was
    /// already appended is not merged or replaced; both occurrences are
    /// kept.
    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Append a sequence of attributes, preserving their order.
    pub fn add_attributes<I>(&mut self, attributes: I)
    where
        I: IntoIterator<Item = Attribute>,
    {
        self.attributes.extend(attributes);
    }

    /// Append one content node.
    ///
    /// Anything convertible into [`Content`] is accepted: string and
    /// number literals become text nodes, elements become children.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::SelfClosingTag`] if the element currently
    /// serializes without an end tag; the element is left untouched.
    pub fn add_content(&mut self, content: impl Into<Content>) -> Result<(), BuildError> {
        if self.is_self_closing() {
            return Err(BuildError::SelfClosingTag);
        }
        self.content.push(content.into());
        Ok(())
    }

    /// Append a sequence of content nodes, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::SelfClosingTag`] if the element currently
    /// serializes without an end tag. The check runs before anything is
    /// appended, so a failed call leaves the element untouched.
    pub fn add_contents<I>(&mut self, contents: I) -> Result<(), BuildError>
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        if self.is_self_closing() {
            return Err(BuildError::SelfClosingTag);
        }
        self.content.extend(contents.into_iter().map(Into::into));
        Ok(())
    }

    /// Builder form of [`Element::set_name`].
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    /// Builder form of [`Element::set_options`].
    #[must_use]
    pub fn with_options(mut self, options: ElementOptions) -> Self {
        self.set_options(options);
        self
    }

    /// Builder form of [`Element::add_attribute`].
    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.add_attribute(attribute);
        self
    }

    /// Builder form of [`Element::add_attributes`].
    #[must_use]
    pub fn with_attributes<I>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = Attribute>,
    {
        self.add_attributes(attributes);
        self
    }

    /// Builder form of [`Element::add_content`].
    ///
    /// The element is consumed either way; use [`Element::add_content`]
    /// when the element must survive a failed call.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::SelfClosingTag`] if the element currently
    /// serializes without an end tag.
    pub fn with_content(mut self, content: impl Into<Content>) -> Result<Self, BuildError> {
        self.add_content(content)?;
        Ok(self)
    }

    /// The tag name, if one is set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The rendering options.
    #[must_use]
    pub const fn options(&self) -> ElementOptions {
        self.options
    }

    /// The attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// The content nodes in insertion order.
    #[must_use]
    pub fn content(&self) -> &[Content] {
        &self.content
    }

    /// Returns true if the element serializes without an end tag, either
    /// because `autoclose` was set to `false` or because the tag name is
    /// one of the [`VOID_TAGS`].
    #[must_use]
    pub fn is_self_closing(&self) -> bool {
        self.options.autoclose == Some(false) || self.name.as_deref().is_some_and(is_void_tag)
    }

    /// Serialize the start tag, including all attributes.
    ///
    /// [§ 13.1.2.1 Start tags](https://html.spec.whatwg.org/multipage/syntax.html#start-tags)
    ///
    /// "If there are to be any attributes in the next step, there must
    /// first be one or more ASCII whitespace."
    ///
    /// One space goes before each attribute, none before the closing `>`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingName`] if no tag name is set, or the
    /// first error of an attribute that fails to build.
    pub fn start_tag(&self) -> Result<String, BuildError> {
        let name = self.name.as_deref().ok_or(BuildError::MissingName)?;
        let mut tag = format!("<{name}");
        for attribute in &self.attributes {
            tag.push(' ');
            tag.push_str(&attribute.build()?);
        }
        tag.push('>');
        Ok(tag)
    }

    /// Serialize the end tag, or the empty string for a self-closing
    /// element.
    ///
    /// [§ 13.1.2.2 End tags](https://html.spec.whatwg.org/multipage/syntax.html#end-tags)
    ///
    /// "a U+003C LESS-THAN SIGN character (<), followed by a U+002F
    /// SOLIDUS character (/) ... the element's tag name ... a U+003E
    /// GREATER-THAN SIGN character (>)."
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingName`] if the element needs an end tag
    /// but has no name.
    pub fn end_tag(&self) -> Result<String, BuildError> {
        if self.is_self_closing() {
            return Ok(String::new());
        }
        let name = self.name.as_deref().ok_or(BuildError::MissingName)?;
        Ok(format!("</{name}>"))
    }

    /// Serialize the content nodes, without the surrounding tags.
    ///
    /// Text nodes are emitted verbatim; child elements are rendered
    /// recursively, depth-first, in insertion order.
    ///
    /// # Errors
    ///
    /// Propagates the first error of a child that fails to render.
    pub fn inner_html(&self) -> Result<String, BuildError> {
        let mut html = String::new();
        for node in &self.content {
            match node {
                Content::Text(text) => html.push_str(text),
                Content::Child(child) => html.push_str(&child.to_html()?),
            }
        }
        Ok(html)
    }

    /// Serialize the whole element: start tag, content, end tag.
    ///
    /// Rendering is pure: the element is not mutated, and calling this
    /// twice yields the same string.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingName`] if no tag name is set, or the
    /// first error of an attribute or child that fails to render.
    pub fn to_html(&self) -> Result<String, BuildError> {
        let mut html = self.start_tag()?;
        html.push_str(&self.inner_html()?);
        html.push_str(&self.end_tag()?);
        Ok(html)
    }
}

impl fmt::Display for Element {
    /// Formats via [`Element::to_html`]; an unrenderable tree yields
    /// [`fmt::Error`]. Prefer `to_html` when the failure matters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let html = self.to_html().map_err(|_| fmt::Error)?;
        f.write_str(&html)
    }
}
