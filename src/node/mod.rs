//! Node types for parsed documents.
//!
//! This module provides `Element`, `Node`, `Text`, and `Document`: the
//! navigable tree the converter walks. Trees come from
//! [`crate::parse::parse_html`] or are built directly with the element
//! builder API.

mod element;
mod text;
mod document;

pub use element::Element;
pub use text::Text;
pub use document::{Document, ElementIterator, Stats};

use smallvec::SmallVec;

/// Node in a document tree - either Element or Text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
}

impl Node {
    // Generates for each variant (element -> Element, etc.):
    //   - is_xxx(&self) -> bool
    //   - as_xxx(&self) -> Option<&Type>
    //   - as_xxx_mut(&mut self) -> Option<&mut Type>
    crate::impl_enum_accessors!(element, text);
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Node::Element(Box::new(elem))
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 8]>;
