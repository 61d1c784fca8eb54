//! Element type - HTML elements with attributes and children
//!
//! The core building block of the document tree.

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::attr::{Attrs, AttrsExt};
use crate::family::ElementKind;

use super::{Children, Node, Text};

// =============================================================================
// Element
// =============================================================================

/// HTML element with attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Lowercase HTML tag name
    pub tag: CompactString,
    /// Element attributes in source order
    pub attrs: Attrs,
    /// Child nodes
    pub children: Children,
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(tag: impl Into<CompactString>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: SmallVec::new(),
        }
    }

    /// How the converter treats this element's tag
    #[inline]
    pub fn kind(&self) -> ElementKind {
        ElementKind::identify(&self.tag)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder API
    // ─────────────────────────────────────────────────────────────────────────

    /// Add or replace an attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set_attr(name, value);
        self
    }

    /// Append a child element
    pub fn child(mut self, child: Element) -> Self {
        self.push_elem(child);
        self
    }

    /// Append a text node
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.push_text(content);
        self
    }

    /// Append a child element in place
    pub fn push_elem(&mut self, child: Element) {
        self.children.push(Node::Element(Box::new(child)));
    }

    /// Append a text node in place
    pub fn push_text(&mut self, content: impl Into<String>) {
        self.children.push(Node::Text(Text::new(content)));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attribute access
    // ─────────────────────────────────────────────────────────────────────────

    /// Get attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Check if attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has_attr(name)
    }

    /// Check if the class list contains `token`
    pub fn has_class(&self, token: &str) -> bool {
        self.attrs.has_class(token)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Structure
    // ─────────────────────────────────────────────────────────────────────────

    /// Iterate over child element references
    pub fn children_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| n.as_element())
    }

    /// First descendant element (depth-first, excluding self) matching `predicate`
    pub fn find_descendant<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool + Copy,
    {
        for child in self.children_elements() {
            if predicate(child) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(predicate) {
                return Some(found);
            }
        }
        None
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Text
    // ─────────────────────────────────────────────────────────────────────────

    /// Get text content of this element (concatenated from all text nodes)
    ///
    /// Text inside ignored elements (`<script>`, `<style>`, ...) is skipped.
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => buf.push_str(&t.content),
                Node::Element(e) if e.kind() == ElementKind::Ignored => {}
                Node::Element(e) => {
                    // Line breaks separate words even without surrounding spaces
                    if e.tag == "br" {
                        buf.push(' ');
                    }
                    e.collect_text(buf);
                }
            }
        }
    }

    /// Text content with whitespace runs collapsed to one space and trimmed
    pub fn clean_text(&self) -> String {
        collapse_whitespace(&self.text_content())
    }

    /// Check if any direct text child has non-whitespace content
    pub fn has_direct_text(&self) -> bool {
        self.children
            .iter()
            .filter_map(|n| n.as_text())
            .any(|t| !t.is_whitespace())
    }
}

/// Collapse every whitespace run into a single space and trim both ends
pub(crate) fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_basics() {
        let elem = Element::new("div");
        assert_eq!(elem.tag, "div");
        assert!(elem.children.is_empty());
        assert!(elem.children_elements().next().is_none());
        assert_eq!(elem.kind(), ElementKind::Container);
    }

    #[test]
    fn test_text_queries() {
        let elem = Element::new("p")
            .text("  Hello\n   ")
            .child(Element::new("em").text("big"))
            .child(Element::new("br"))
            .child(Element::new("script").text("track();"))
            .text("world ");

        assert_eq!(elem.clean_text(), "Hello big world");
        assert!(elem.has_direct_text());
    }

    #[test]
    fn test_find_descendant() {
        let elem = Element::new("div")
            .child(Element::new("div").child(Element::new("h2").text("Deep")))
            .child(Element::new("h3").text("Shallow"));

        let found = elem.find_descendant(|e| e.tag.starts_with('h')).map(Element::clean_text);
        assert_eq!(found.as_deref(), Some("Deep"));
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \t b\n\nc  "), "a b c");
        assert_eq!(collapse_whitespace(" \n "), "");
    }
}
