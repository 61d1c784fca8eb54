//! Paragraph family: `<p>`, `<figcaption>` and inline-only content.

use crate::attr::Attrs;
use crate::classify::{Classifier, Decision};
use crate::error::SlideResult;
use crate::family::{ElementKind, Family};
use crate::measure::Measure;
use crate::model::{Block, ComponentData};
use crate::node::{Element, Text};
use crate::render::{RenderConfig, escape_html, render_inner};

/// Paragraph family for `<p>` and `<figcaption>`.
///
/// Containers whose children are all inline, and unrecognized tags with
/// text, reuse [`build`].
pub struct ParagraphFamily;

impl Family for ParagraphFamily {
    const NAME: &'static str = "paragraph";

    fn identify(tag: &str, _attrs: &Attrs) -> bool {
        matches!(tag, "p" | "figcaption")
    }
}

/// Check if any child element is text flow (links, emphasis, breaks, images)
pub fn has_inline_children(elem: &Element) -> bool {
    elem.children_elements()
        .any(|child| ElementKind::is_text_flow(&child.tag))
}

/// Body-font block over the element's cleaned inner markup
pub fn build<M: Measure + ?Sized>(elem: &Element, cx: &Classifier<'_, M>) -> SlideResult<Decision> {
    if elem.clean_text().is_empty() && !has_inline_children(elem) {
        return Ok(Decision::Reject);
    }
    let markup = render_inner(elem, &RenderConfig::CLEAN);
    paragraph_block(markup, cx).map(Decision::Atomize)
}

/// Paragraph block for a stray text run found between blocks
pub fn build_text<M: Measure + ?Sized>(text: &Text, cx: &Classifier<'_, M>) -> SlideResult<Block> {
    let markup = escape_html(&text.cleaned());
    paragraph_block(markup, cx)
}

fn paragraph_block<M: Measure + ?Sized>(markup: String, cx: &Classifier<'_, M>) -> SlideResult<Block> {
    let width = cx.content_width();
    let height = cx
        .estimator()
        .estimate(&markup, width, &cx.config().typography.body)?;
    Ok(Block::new(
        ComponentData::Paragraph { markup },
        cx.content_x(),
        width,
        height,
    ))
}
