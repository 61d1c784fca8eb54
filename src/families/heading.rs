//! Heading family: `<h1>` through `<h6>`.

use crate::attr::Attrs;
use crate::classify::{Classifier, Decision};
use crate::error::SlideResult;
use crate::family::Family;
use crate::measure::Measure;
use crate::model::{Block, ComponentData};
use crate::node::Element;
use crate::render::{RenderConfig, render_inner};
use crate::significance::significant_children;

use super::container;

/// Heading family for `<h1>` through `<h6>` elements.
pub struct HeadingFamily;

impl Family for HeadingFamily {
    const NAME: &'static str = "heading";

    fn identify(tag: &str, _attrs: &Attrs) -> bool {
        matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
    }
}

/// Parse level from tag name: "h1" → 1
pub fn level_from_tag(tag: &str) -> u8 {
    tag.chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .map_or(1, |d| d.clamp(1, 6) as u8)
}

/// Full-width block measured at the level's font
///
/// A heading without text falls back to the container rules, so content
/// such as a logo image inside it is still converted.
pub fn build<M: Measure + ?Sized>(
    elem: &Element,
    depth: usize,
    cx: &Classifier<'_, M>,
) -> SlideResult<Decision> {
    let text = elem.clean_text();
    if text.is_empty() {
        if significant_children(elem, &cx.config().policy) > 0 {
            return container::build(elem, depth, cx);
        }
        return Ok(Decision::Reject);
    }

    let level = level_from_tag(&elem.tag);
    let markup = render_inner(elem, &RenderConfig::CLEAN);
    let width = cx.content_width();
    let font = cx.config().typography.heading(level);
    let height = cx.estimator().estimate(&markup, width, font)?;

    let data = ComponentData::Heading {
        level,
        markup,
        text,
    };
    Ok(Decision::Atomize(Block::new(data, cx.content_x(), width, height)))
}
