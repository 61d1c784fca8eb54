//! Media family: `<img>`.

use crate::attr::{Attrs, AttrsExt};
use crate::classify::{Classifier, Decision};
use crate::error::SlideResult;
use crate::family::Family;
use crate::measure::Measure;
use crate::model::{Block, ComponentData};
use crate::node::Element;

/// Aspect ratio (16:9) assumed when only one natural dimension is known
const FALLBACK_ASPECT: (f32, f32) = (16.0, 9.0);

/// Media family for image elements.
pub struct MediaFamily;

impl Family for MediaFamily {
    const NAME: &'static str = "media";

    fn identify(tag: &str, _attrs: &Attrs) -> bool {
        tag == "img"
    }
}

/// Image source: `src`, then `data-src`, then the first `srcset` candidate
pub fn resolve_src(attrs: &Attrs) -> Option<String> {
    if let Some(src) = attrs.get_nonempty("src").or_else(|| attrs.get_nonempty("data-src")) {
        return Some(src.to_string());
    }
    attrs
        .get_nonempty("srcset")?
        .split(',')
        .filter_map(|candidate| candidate.split_whitespace().next())
        .next()
        .map(String::from)
}

/// Natural size from `width`/`height` attributes, completing a missing
/// dimension from the fallback aspect ratio
pub fn natural_size(attrs: &Attrs) -> Option<(f32, f32)> {
    match (attrs.get_px("width"), attrs.get_px("height")) {
        (Some(w), Some(h)) => Some((w, h)),
        (Some(w), None) => Some((w, w * (FALLBACK_ASPECT.1 / FALLBACK_ASPECT.0))),
        (None, Some(h)) => Some((h * (FALLBACK_ASPECT.0 / FALLBACK_ASPECT.1), h)),
        (None, None) => None,
    }
}

/// Centered block that keeps the natural aspect ratio
pub fn build<M: Measure + ?Sized>(elem: &Element, cx: &Classifier<'_, M>) -> SlideResult<Decision> {
    let Some(src) = resolve_src(&elem.attrs) else {
        return Ok(Decision::Reject);
    };
    let alt = elem.get_attr("alt").unwrap_or_default().trim().to_string();

    let metrics = &cx.config().metrics;
    let (natural_w, natural_h) = natural_size(&elem.attrs)
        .unwrap_or((metrics.image_default_width, metrics.image_default_height));

    let available = cx.content_width();
    let width = natural_w.min(available);
    let height = (width * (natural_h / natural_w)).max(metrics.image_min_height);
    let x = cx.content_x() + (available - width) / 2.0;

    Ok(Decision::Atomize(Block::new(
        ComponentData::Image { src, alt },
        x,
        width,
        height,
    )))
}
