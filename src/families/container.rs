//! Container family: grouping elements without their own semantics.
//!
//! The only family that can answer [`Decision::Recurse`]. Rules, first
//! match wins:
//!
//! 1. at or beyond the depth cap: atomize as a custom fragment
//! 2. layout wrapper (hint class) with several significant children,
//!    above the hint depth: recurse
//! 3. exactly one significant child and no own text: recurse
//! 4. only inline children: one paragraph
//! 5. own text, or shallow mixed inline/block content: custom fragment
//! 6. any significant child: recurse
//! 7. reject

use crate::attr::{Attrs, AttrsExt};
use crate::classify::{Classifier, Decision};
use crate::config::ContainerPolicy;
use crate::error::SlideResult;
use crate::family::{ElementKind, Family};
use crate::measure::Measure;
use crate::model::{Block, ComponentData};
use crate::node::Element;
use crate::render::{RenderConfig, render_outer};
use crate::significance::significant_children;

use super::paragraph;

/// Container family for `div`, `section`, `article` and friends.
pub struct ContainerFamily;

impl Family for ContainerFamily {
    const NAME: &'static str = "container";

    fn identify(tag: &str, _attrs: &Attrs) -> bool {
        ElementKind::identify(tag) == ElementKind::Container
    }
}

/// Check if the element carries a layout-hint class
pub fn is_layout_wrapper(elem: &Element, policy: &ContainerPolicy) -> bool {
    policy
        .layout_hint_classes
        .iter()
        .any(|hint| elem.attrs.class_contains(hint))
}

fn is_inline(elem: &Element) -> bool {
    ElementKind::is_text_flow(&elem.tag)
}

fn is_block(elem: &Element) -> bool {
    !is_inline(elem) && elem.kind() != ElementKind::Ignored
}

/// Check if every (non-ignored) child element participates in text flow
pub fn is_inline_only(elem: &Element) -> bool {
    elem.children_elements().all(|child| !is_block(child))
}

/// Inline and block children side by side, with no block grandchildren
pub fn is_shallow_mixed(elem: &Element) -> bool {
    let has_inline = elem.children_elements().any(is_inline);
    let mut blocks = elem.children_elements().filter(|c| is_block(c)).peekable();
    has_inline
        && blocks.peek().is_some()
        && blocks.all(|block| !block.children_elements().any(is_block))
}

/// Apply the container rules to `elem` at depth `depth`
pub fn build<M: Measure + ?Sized>(
    elem: &Element,
    depth: usize,
    cx: &Classifier<'_, M>,
) -> SlideResult<Decision> {
    let policy = &cx.config().policy;
    if depth >= policy.max_depth {
        return fragment(elem, cx).map(Decision::Atomize);
    }

    let significant = significant_children(elem, policy);
    let own_text = elem.has_direct_text();

    if significant > 1 && depth < policy.layout_hint_depth && is_layout_wrapper(elem, policy) {
        return Ok(Decision::Recurse);
    }
    if significant == 1 && !own_text {
        return Ok(Decision::Recurse);
    }
    if is_inline_only(elem) {
        return paragraph::build(elem, cx);
    }
    if own_text || is_shallow_mixed(elem) {
        return fragment(elem, cx).map(Decision::Atomize);
    }
    if significant > 0 {
        return Ok(Decision::Recurse);
    }
    Ok(Decision::Reject)
}

/// Opaque passthrough of the element's serialized markup
pub fn fragment<M: Measure + ?Sized>(elem: &Element, cx: &Classifier<'_, M>) -> SlideResult<Block> {
    let markup = render_outer(elem, &RenderConfig::RAW);
    let text = elem.clean_text();
    let block_children = elem.children_elements().filter(|c| is_block(c)).count();
    let width = cx.content_width();
    let height = cx
        .estimator()
        .estimate_fragment(&markup, &text, block_children, width)?;
    Ok(Block::new(
        ComponentData::CustomFragment { markup },
        cx.content_x(),
        width,
        height,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConvertConfig;
    use crate::measure::{HeightEstimator, MeasureCache, TextMetrics};
    use crate::model::ComponentType;

    fn decide(elem: &Element, depth: usize) -> Decision {
        let config = ConvertConfig::default();
        let cache = MeasureCache::new();
        let oracle = TextMetrics::new();
        let cx = Classifier::new(HeightEstimator::new(&oracle, &cache, &config));
        build(elem, depth, &cx).unwrap()
    }

    fn kind(decision: &Decision) -> Option<ComponentType> {
        decision.block().map(Block::kind)
    }

    fn two_paragraphs(tag: &str) -> Element {
        Element::new(tag)
            .child(Element::new("p").text("First paragraph"))
            .child(Element::new("p").text("Second paragraph"))
    }

    #[test]
    fn test_depth_cap_atomizes() {
        let decision = decide(&two_paragraphs("div"), 3);
        assert_eq!(kind(&decision), Some(ComponentType::CustomFragment));
        match decision.block().map(|b| &b.data) {
            Some(ComponentData::CustomFragment { markup }) => {
                assert!(markup.starts_with("<div><p>First paragraph</p>"));
            }
            other => panic!("expected fragment, got {other:?}"),
        }
    }

    #[test]
    fn test_layout_wrapper_dissolved_only_when_shallow() {
        let grid = Element::new("div")
            .attr("class", "md:grid-cols-2 gap-4")
            .child(Element::new("span").text("Label text"))
            .child(Element::new("p").text("Body text"));
        assert!(decide(&grid, 0).is_recurse());
        assert!(decide(&grid, 1).is_recurse());
        // Too deep for the hint: shallow mixed content is atomized
        assert_eq!(kind(&decide(&grid, 2)), Some(ComponentType::CustomFragment));
    }

    #[test]
    fn test_transparent_single_child() {
        let wrapper = Element::new("section")
            .text("\n  ")
            .child(Element::new("h2").text("Only child"));
        assert!(decide(&wrapper, 0).is_recurse());
    }

    #[test]
    fn test_inline_only_is_paragraph() {
        let elem = Element::new("div")
            .text("Read the ")
            .child(Element::new("a").attr("href", "/docs").text("docs"))
            .text(" first.");
        assert_eq!(kind(&decide(&elem, 0)), Some(ComponentType::Paragraph));
    }

    #[test]
    fn test_own_text_with_blocks_is_fragment() {
        let elem = Element::new("div")
            .text("Intro text")
            .child(Element::new("p").text("A paragraph"));
        assert_eq!(kind(&decide(&elem, 0)), Some(ComponentType::CustomFragment));
    }

    #[test]
    fn test_block_children_recurse() {
        assert!(decide(&two_paragraphs("article"), 1).is_recurse());
    }

    #[test]
    fn test_nothing_to_show_rejected() {
        let elem = Element::new("div")
            .attr("data-src", "x")
            .child(Element::new("script").text("track();"));
        assert!(decide(&elem, 0).is_reject());
    }

    #[test]
    fn test_structure_predicates() {
        let mixed = Element::new("div")
            .child(Element::new("strong").text("Note"))
            .child(Element::new("p").text("Leaf block"));
        assert!(is_shallow_mixed(&mixed));
        assert!(!is_inline_only(&mixed));

        let deep = Element::new("div")
            .child(Element::new("em").text("x"))
            .child(Element::new("div").child(Element::new("p").text("nested")));
        assert!(!is_shallow_mixed(&deep));
    }
}
