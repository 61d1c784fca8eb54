//! Element kinds and the `Family` trait
//!
//! Every tag the converter meets is sorted into one `ElementKind`. The kind
//! decides which family module builds its block (see [`crate::families`]).

use crate::attr::Attrs;

// =============================================================================
// ElementKind enum
// =============================================================================

/// How the converter treats an element, identified from its tag name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Non-content elements, never converted (script, style, nav, ...)
    Ignored,
    /// `<h1>` through `<h6>`
    Heading,
    /// `<p>`, `<figcaption>`
    Paragraph,
    /// `<img>`
    Image,
    /// `<ul>`, `<ol>`
    List,
    /// `<pre>`
    Code,
    /// `<blockquote>`
    Quote,
    /// `<table>`
    Table,
    /// Grouping elements without their own semantics (div, section, ...)
    Container,
    /// Text-flow elements (a, em, strong, span, br, ...)
    Inline,
    /// Anything not listed above, including custom elements
    Unknown,
}

const IGNORED_TAGS: &[&str] = &[
    "script", "style", "head", "meta", "title", "link", "button", "nav", "footer", "noscript",
    "template", "iframe", "form", "input", "select", "textarea", "option",
];

const CONTAINER_TAGS: &[&str] = &[
    "div", "section", "article", "main", "header", "aside", "figure", "body", "html", "details",
    "summary", "center", "hgroup",
];

const INLINE_TAGS: &[&str] = &[
    "a", "em", "strong", "b", "i", "u", "s", "span", "code", "br", "small", "sub", "sup", "mark",
    "abbr", "del", "ins", "kbd", "q", "cite", "time", "label", "var", "samp", "font",
];

impl ElementKind {
    /// Identify the kind of a (lowercase) tag name
    pub fn identify(tag: &str) -> Self {
        match tag {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Self::Heading,
            "p" | "figcaption" => Self::Paragraph,
            "img" => Self::Image,
            "ul" | "ol" => Self::List,
            "pre" => Self::Code,
            "blockquote" => Self::Quote,
            "table" => Self::Table,
            _ if IGNORED_TAGS.contains(&tag) => Self::Ignored,
            _ if CONTAINER_TAGS.contains(&tag) => Self::Container,
            _ if INLINE_TAGS.contains(&tag) => Self::Inline,
            _ => Self::Unknown,
        }
    }

    /// Check if a tag participates in text flow
    ///
    /// Images count as text flow when they appear inside a paragraph-like
    /// parent; at block level they are classified as `Image` first.
    pub fn is_text_flow(tag: &str) -> bool {
        tag == "img" || INLINE_TAGS.contains(&tag)
    }

    /// Check if this kind starts a new block in rendered output
    pub fn is_block(self) -> bool {
        !matches!(self, Self::Inline | Self::Ignored)
    }
}

// =============================================================================
// Family trait
// =============================================================================

/// A family of tags that share one block-building rule
///
/// Each module in [`crate::families`] implements this for its marker type
/// and exposes a `build` function producing a [`crate::classify::Decision`].
pub trait Family {
    /// Family name, used in logs
    const NAME: &'static str;

    /// Check whether an element belongs to this family
    fn identify(tag: &str, attrs: &Attrs) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_kinds() {
        assert_eq!(ElementKind::identify("h3"), ElementKind::Heading);
        assert_eq!(ElementKind::identify("p"), ElementKind::Paragraph);
        assert_eq!(ElementKind::identify("img"), ElementKind::Image);
        assert_eq!(ElementKind::identify("ol"), ElementKind::List);
        assert_eq!(ElementKind::identify("pre"), ElementKind::Code);
        assert_eq!(ElementKind::identify("blockquote"), ElementKind::Quote);
        assert_eq!(ElementKind::identify("table"), ElementKind::Table);
        assert_eq!(ElementKind::identify("section"), ElementKind::Container);
        assert_eq!(ElementKind::identify("strong"), ElementKind::Inline);
        assert_eq!(ElementKind::identify("script"), ElementKind::Ignored);
        assert_eq!(ElementKind::identify("nav"), ElementKind::Ignored);
        assert_eq!(ElementKind::identify("my-widget"), ElementKind::Unknown);
        assert_eq!(ElementKind::identify("h7"), ElementKind::Unknown);
    }

    #[test]
    fn test_text_flow() {
        assert!(ElementKind::is_text_flow("a"));
        assert!(ElementKind::is_text_flow("img"));
        assert!(!ElementKind::is_text_flow("div"));
        assert!(ElementKind::Container.is_block());
        assert!(!ElementKind::Inline.is_block());
    }
}
