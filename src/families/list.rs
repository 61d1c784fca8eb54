//! List family: `<ul>`, `<ol>`.

use crate::attr::Attrs;
use crate::classify::{Classifier, Decision};
use crate::error::SlideResult;
use crate::family::Family;
use crate::measure::Measure;
use crate::model::{Block, ComponentData};
use crate::node::Element;
use crate::render::{RenderConfig, render_inner};

/// List family for ordered and unordered lists.
pub struct ListFamily;

impl Family for ListFamily {
    const NAME: &'static str = "list";

    fn identify(tag: &str, _attrs: &Attrs) -> bool {
        matches!(tag, "ul" | "ol")
    }
}

/// One block for the whole list; items are never split across slides
pub fn build<M: Measure + ?Sized>(elem: &Element, cx: &Classifier<'_, M>) -> SlideResult<Decision> {
    let items: Vec<String> = elem
        .children_elements()
        .filter(|child| child.tag == "li")
        .map(|li| render_inner(li, &RenderConfig::CLEAN))
        .collect();
    if items.is_empty() {
        return Ok(Decision::Reject);
    }

    let width = cx.content_width();
    let height = cx.estimator().estimate_list(&items, width)?;
    let data = ComponentData::List {
        ordered: elem.tag == "ol",
        items,
    };
    Ok(Decision::Atomize(Block::new(data, cx.content_x(), width, height)))
}
