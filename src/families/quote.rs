//! Quote family: `<blockquote>`.

use crate::attr::Attrs;
use crate::classify::{Classifier, Decision};
use crate::error::SlideResult;
use crate::family::Family;
use crate::measure::Measure;
use crate::model::{Block, ComponentData};
use crate::node::{Element, Node};
use crate::render::{RenderConfig, render_inner};

/// Quote family for block quotations.
pub struct QuoteFamily;

impl Family for QuoteFamily {
    const NAME: &'static str = "quote";

    fn identify(tag: &str, _attrs: &Attrs) -> bool {
        tag == "blockquote"
    }
}

/// Split a quote into its body and optional attribution.
///
/// A direct `<footer>` or `<cite>` child is removed from the body and
/// becomes the attribution; otherwise a nested `<cite>` names the source
/// and stays in the body.
pub fn split_attribution(elem: &Element) -> (Element, Option<String>) {
    let mut body = elem.clone();
    let direct = body
        .children
        .iter()
        .position(|n| n.as_element().is_some_and(|e| matches!(e.tag.as_str(), "footer" | "cite")));

    let source = match direct {
        Some(idx) => match body.children.remove(idx) {
            Node::Element(e) => Some(e.clean_text()),
            Node::Text(_) => None,
        },
        None => body.find_descendant(|e| e.tag == "cite").map(Element::clean_text),
    };

    let attribution = source
        .map(|s| s.trim_start_matches(['—', '–', '-', '~', ' ']).to_string())
        .filter(|s| !s.is_empty());
    (body, attribution)
}

/// Quote block; short quotes are narrowed and centered before measuring
pub fn build<M: Measure + ?Sized>(elem: &Element, cx: &Classifier<'_, M>) -> SlideResult<Decision> {
    let (body, attribution) = split_attribution(elem);
    let text = body.clean_text();
    if text.is_empty() {
        return Ok(Decision::Reject);
    }

    let config = cx.config();
    let metrics = &config.metrics;
    let available = cx.content_width();
    let width = if text.chars().count() <= metrics.quote_narrow_chars {
        available * metrics.quote_narrow_ratio
    } else {
        available
    };
    let x = cx.content_x() + (available - width) / 2.0;

    let markup = render_inner(&body, &RenderConfig::CLEAN);
    let mut height = cx.estimator().estimate(&markup, width, &config.typography.quote)?;
    if attribution.is_some() {
        height += config.typography.body.line_px();
    }

    let data = ComponentData::Quote {
        markup,
        attribution,
    };
    Ok(Decision::Atomize(Block::new(data, x, width, height)))
}
