//! Significance filter: does a node carry content worth converting?
//!
//! Pure predicates over the node tree. A node rejected here never produces
//! a component, directly or through its descendants.

use crate::attr::AttrsExt;
use crate::config::ContainerPolicy;
use crate::family::ElementKind;
use crate::node::{Element, Node, Text};

/// Check if an element is significant under `policy`
///
/// Ignored kinds are rejected outright. Otherwise an element counts when it
/// carries a resource attribute, when its cleaned text is long enough, or
/// when any child is significant.
pub fn is_significant(elem: &Element, policy: &ContainerPolicy) -> bool {
    if elem.kind() == ElementKind::Ignored {
        return false;
    }
    if policy
        .resource_attrs
        .iter()
        .any(|name| elem.attrs.get_nonempty(name).is_some())
    {
        return true;
    }
    if elem.clean_text().chars().count() > policy.min_text_len {
        return true;
    }
    elem.children.iter().any(|n| is_significant_node(n, policy))
}

/// Check if a text node is significant: trimmed length above the threshold
pub fn is_significant_text(text: &Text, policy: &ContainerPolicy) -> bool {
    text.trimmed().chars().count() > policy.min_text_len
}

/// Dispatch over node variants
pub fn is_significant_node(node: &Node, policy: &ContainerPolicy) -> bool {
    match node {
        Node::Element(elem) => is_significant(elem, policy),
        Node::Text(text) => is_significant_text(text, policy),
    }
}

/// Number of significant direct children (elements and text)
pub fn significant_children(elem: &Element, policy: &ContainerPolicy) -> usize {
    elem.children
        .iter()
        .filter(|n| is_significant_node(n, policy))
        .count()
}
