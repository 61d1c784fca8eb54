//! Markup rendering
//!
//! Serializes elements back to HTML strings. Block payloads carry markup
//! (heading inner markup, list item markup, fragment passthrough), and the
//! measurement oracle is fed the same strings.

use crate::attr::Attrs;
use crate::node::{Element, Node};

// =============================================================================
// RenderConfig
// =============================================================================

/// Configuration for markup rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Collapse whitespace runs in text nodes (never inside `<pre>`).
    pub collapse_whitespace: bool,
    /// Drop presentational and scripting attributes (`style`, `class`, `id`, `on*`).
    pub strip_attrs: bool,
}

impl RenderConfig {
    /// Verbatim rendering (custom-fragment passthrough).
    pub const RAW: Self = Self {
        collapse_whitespace: false,
        strip_attrs: false,
    };

    /// Cleaned rendering (payload markup for typed blocks).
    pub const CLEAN: Self = Self {
        collapse_whitespace: true,
        strip_attrs: true,
    };
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::RAW
    }
}

// =============================================================================
// Element Rendering
// =============================================================================

/// Render an element including its own tag.
pub fn render_outer(elem: &Element, config: &RenderConfig) -> String {
    let mut output = String::new();
    render_element(elem, config, false, &mut output);
    finish(output, config)
}

/// Render only the children of an element.
pub fn render_inner(elem: &Element, config: &RenderConfig) -> String {
    let mut output = String::new();
    let preformatted = elem.tag == "pre";
    for child in &elem.children {
        render_node(child, config, preformatted, &mut output);
    }
    finish(output, config)
}

fn finish(output: String, config: &RenderConfig) -> String {
    if config.collapse_whitespace {
        output.trim().to_string()
    } else {
        output
    }
}

/// Render an element to HTML.
fn render_element(elem: &Element, config: &RenderConfig, preformatted: bool, output: &mut String) {
    output.push('<');
    output.push_str(&elem.tag);

    render_attrs(&elem.attrs, config, output);

    if is_void_element(&elem.tag) {
        output.push_str(" />");
        return;
    }

    output.push('>');

    let preformatted = preformatted || elem.tag == "pre";
    for child in &elem.children {
        render_node(child, config, preformatted, output);
    }

    output.push_str("</");
    output.push_str(&elem.tag);
    output.push('>');
}

/// Render a node to HTML.
fn render_node(node: &Node, config: &RenderConfig, preformatted: bool, output: &mut String) {
    match node {
        Node::Element(elem) => render_element(elem, config, preformatted, output),
        Node::Text(text) => {
            if config.collapse_whitespace && !preformatted {
                output.push_str(&escape_html(&collapse_runs(&text.content)));
            } else {
                output.push_str(&escape_html(&text.content));
            }
        }
    }
}

/// Render attributes to HTML.
fn render_attrs(attrs: &Attrs, config: &RenderConfig, output: &mut String) {
    for (name, value) in attrs.iter() {
        if config.strip_attrs && is_stripped_attr(name) {
            continue;
        }
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(&escape_attr(value));
        output.push('"');
    }
}

fn is_stripped_attr(name: &str) -> bool {
    matches!(name, "style" | "class" | "id") || name.starts_with("on")
}

/// Replace every whitespace run with one space, keeping run boundaries.
fn collapse_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_space = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

/// Escape HTML special characters.
pub(crate) fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape attribute value special characters.
fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Check if element is a void element (self-closing).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

// =============================================================================
// Tests
// =============================================================================
