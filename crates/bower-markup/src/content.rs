//! Element content nodes.

use serde::Serialize;

use crate::element::Element;

/// A single node of element content.
///
/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#elements-2)
///
/// "An element's content must be placed between just after its start tag
/// ... and just before its end tag."
///
/// Nodes are stored unrendered; [`Element::to_html`] serializes them
/// depth-first when it runs, so an incomplete child is accepted here and
/// only fails once the tree is rendered. Strings and numbers convert into
/// [`Text`](Self::Text); booleans deliberately do not convert, as they
/// have no text form in this model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Content {
    /// A text literal, emitted verbatim (nothing is escaped).
    Text(String),

    /// A nested element, rendered recursively.
    Child(Element),
}

impl Content {
    /// The text literal, if this node is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Child(_) => None,
        }
    }

    /// The nested element, if this node is a child element.
    #[must_use]
    pub const fn as_child(&self) -> Option<&Element> {
        match self {
            Self::Text(_) => None,
            Self::Child(child) => Some(child),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Content {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Element> for Content {
    fn from(child: Element) -> Self {
        Self::Child(child)
    }
}

macro_rules! impl_content_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Content {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

impl_content_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
