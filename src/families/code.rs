//! Code family: `<pre>`.

use crate::attr::{Attrs, AttrsExt};
use crate::classify::{Classifier, Decision};
use crate::error::SlideResult;
use crate::family::Family;
use crate::measure::Measure;
use crate::model::{Block, ComponentData};
use crate::node::Element;

/// Code family for preformatted blocks.
pub struct CodeFamily;

impl Family for CodeFamily {
    const NAME: &'static str = "code";

    fn identify(tag: &str, _attrs: &Attrs) -> bool {
        tag == "pre"
    }
}

/// Language from `data-lang` or a `language-*`/`lang-*` class on the
/// `<pre>` or its first `<code>` child
pub fn detect_language(elem: &Element) -> Option<String> {
    let code = elem.children_elements().find(|child| child.tag == "code");
    [Some(elem), code].into_iter().flatten().find_map(|e| {
        e.attrs.get_nonempty("data-lang").map(String::from).or_else(|| {
            e.attrs.classes().find_map(|class| {
                class
                    .strip_prefix("language-")
                    .or_else(|| class.strip_prefix("lang-"))
                    .filter(|lang| !lang.is_empty())
                    .map(String::from)
            })
        })
    })
}

/// Reading-width block sized by line count, never measured
pub fn build<M: Measure + ?Sized>(elem: &Element, cx: &Classifier<'_, M>) -> SlideResult<Decision> {
    let text = elem.text_content();
    let code = text.trim_end_matches(['\n', '\r']);
    if code.trim().is_empty() {
        return Ok(Decision::Reject);
    }

    let lines = code.lines().count();
    let width = cx.content_width().min(cx.config().metrics.max_reading_width);
    let height = cx.estimator().code_height(lines);
    let data = ComponentData::Code {
        code: code.to_string(),
        language: detect_language(elem),
    };
    Ok(Decision::Atomize(Block::new(data, cx.content_x(), width, height)))
}
