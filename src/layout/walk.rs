//! Recursive tree walk
//!
//! Visits region content in document order, asks the classifier about
//! each significant element, and threads the [`Paginator`] through the
//! recursion. An element is either atomized or descended into, never both.

use crate::classify::{Classifier, Decision};
use crate::error::SlideResult;
use crate::families::paragraph;
use crate::measure::Measure;
use crate::node::{Element, Node};
use crate::significance::{is_significant, is_significant_text};

use super::paginate::{Page, Paginator};

/// Counters gathered during one walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Elements and non-blank text runs dropped as insignificant
    pub skipped: usize,
    /// Significant elements the classifier rejected
    pub rejected: usize,
    /// Containers treated as transparent
    pub recursed: usize,
    /// Blocks taller than one slide
    pub over_height: usize,
}

/// Walks one region and paginates what it finds
pub struct Walker<'c, 'a, M: Measure + ?Sized> {
    classifier: &'c Classifier<'a, M>,
    stats: WalkStats,
}

impl<'c, 'a, M: Measure + ?Sized> Walker<'c, 'a, M> {
    pub fn new(classifier: &'c Classifier<'a, M>) -> Self {
        Self {
            classifier,
            stats: WalkStats::default(),
        }
    }

    pub fn stats(&self) -> &WalkStats {
        &self.stats
    }

    /// Lay out the children of `root` into pages
    pub fn run(&mut self, root: &Element) -> SlideResult<Vec<Page>> {
        let acc = Paginator::new(self.classifier.config());
        let acc = self.walk(root, 0, acc)?;
        self.stats.over_height += acc.over_height();
        Ok(acc.finish())
    }

    /// Visit the children of `parent`, which sit at container depth `depth`
    pub fn walk(&mut self, parent: &Element, depth: usize, mut acc: Paginator) -> SlideResult<Paginator> {
        let policy = &self.classifier.config().policy;
        for node in &parent.children {
            acc = match node {
                Node::Element(elem) => self.visit(elem, depth, acc)?,
                Node::Text(text) if is_significant_text(text, policy) => {
                    acc.push(paragraph::build_text(text, self.classifier)?)
                }
                Node::Text(text) => {
                    if !text.is_whitespace() {
                        self.stats.skipped += 1;
                    }
                    acc
                }
            };
        }
        Ok(acc)
    }

    fn visit(&mut self, elem: &Element, depth: usize, acc: Paginator) -> SlideResult<Paginator> {
        if !is_significant(elem, &self.classifier.config().policy) {
            self.stats.skipped += 1;
            return Ok(acc);
        }
        match self.classifier.classify(elem, depth)? {
            Decision::Atomize(block) => Ok(acc.push(block)),
            Decision::Recurse => {
                self.stats.recursed += 1;
                self.walk(elem, depth + 1, acc)
            }
            Decision::Reject => {
                self.stats.rejected += 1;
                Ok(acc)
            }
        }
    }
}
