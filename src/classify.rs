//! Block classification
//!
//! Maps one significant element to a [`Decision`]: atomize it into a sized
//! [`Block`], recurse into its children, or reject it. The decision is a
//! value, so the atomize-vs-recurse policy is testable without a tree walk.
//!
//! Dispatch is by [`ElementKind`]; the per-kind rules live in
//! [`crate::families`].

use log::trace;

use crate::config::ConvertConfig;
use crate::error::SlideResult;
use crate::families::{
    self, CodeFamily, ContainerFamily, HeadingFamily, ListFamily, MediaFamily, ParagraphFamily,
    QuoteFamily, TableFamily,
};
use crate::family::{ElementKind, Family};
use crate::measure::{HeightEstimator, Measure};
use crate::model::Block;
use crate::node::Element;
use crate::significance::significant_children;

// =============================================================================
// Decision
// =============================================================================

/// Outcome of classifying one element
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Convert the element into exactly one block
    Atomize(Block),
    /// Transparent: the walker processes the children instead
    Recurse,
    /// No component for this element or its descendants
    Reject,
}

impl Decision {
    pub fn is_recurse(&self) -> bool {
        matches!(self, Self::Recurse)
    }

    pub fn is_reject(&self) -> bool {
        matches!(self, Self::Reject)
    }

    /// The atomized block, if any
    pub fn block(&self) -> Option<&Block> {
        match self {
            Self::Atomize(block) => Some(block),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Atomize(_) => "atomize",
            Self::Recurse => "recurse",
            Self::Reject => "reject",
        }
    }
}

// =============================================================================
// Classifier
// =============================================================================

/// Classifies elements into blocks using a [`HeightEstimator`]
pub struct Classifier<'a, M: Measure + ?Sized> {
    estimator: HeightEstimator<'a, M>,
}

impl<'a, M: Measure + ?Sized> Classifier<'a, M> {
    pub fn new(estimator: HeightEstimator<'a, M>) -> Self {
        Self { estimator }
    }

    #[inline]
    pub fn estimator(&self) -> &HeightEstimator<'a, M> {
        &self.estimator
    }

    #[inline]
    pub fn config(&self) -> &'a ConvertConfig {
        self.estimator.config()
    }

    /// Left edge of the content box
    #[inline]
    pub fn content_x(&self) -> f32 {
        self.config().canvas.padding
    }

    /// Width available to blocks
    #[inline]
    pub fn content_width(&self) -> f32 {
        self.config().canvas.content_width()
    }

    /// Classify `elem` found at container depth `depth`
    ///
    /// Only fails when the measurement oracle fails.
    pub fn classify(&self, elem: &Element, depth: usize) -> SlideResult<Decision> {
        let kind = elem.kind();
        let decision = match kind {
            ElementKind::Ignored => Decision::Reject,
            ElementKind::Heading => families::heading::build(elem, depth, self)?,
            ElementKind::Paragraph => families::paragraph::build(elem, self)?,
            ElementKind::Image => families::media::build(elem, self)?,
            ElementKind::List => families::list::build(elem, self)?,
            ElementKind::Code => families::code::build(elem, self)?,
            ElementKind::Quote => families::quote::build(elem, self)?,
            ElementKind::Table => families::table::build(elem, self)?,
            ElementKind::Container => families::container::build(elem, depth, self)?,
            ElementKind::Inline | ElementKind::Unknown => self.classify_other(elem, depth)?,
        };
        trace!(
            "<{}> at depth {depth} ({}): {}",
            elem.tag,
            family_name(kind),
            decision.label()
        );
        Ok(decision)
    }

    /// Unrecognized or stray inline element at block level
    fn classify_other(&self, elem: &Element, depth: usize) -> SlideResult<Decision> {
        if !elem.clean_text().is_empty() {
            return families::paragraph::build(elem, self);
        }
        if significant_children(elem, &self.config().policy) > 0 {
            return families::container::build(elem, depth, self);
        }
        Ok(Decision::Reject)
    }
}

/// Family handling `kind`, for logs
fn family_name(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Heading => HeadingFamily::NAME,
        ElementKind::Paragraph => ParagraphFamily::NAME,
        ElementKind::Image => MediaFamily::NAME,
        ElementKind::List => ListFamily::NAME,
        ElementKind::Code => CodeFamily::NAME,
        ElementKind::Quote => QuoteFamily::NAME,
        ElementKind::Table => TableFamily::NAME,
        ElementKind::Container => ContainerFamily::NAME,
        ElementKind::Ignored => "ignored",
        ElementKind::Inline | ElementKind::Unknown => "other",
    }
}
