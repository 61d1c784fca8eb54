//! Section assembly
//!
//! Turns the pages of each region into titled [`Section`]s with stable ids
//! and contiguous global order.

use log::debug;

use crate::id::{DocumentSeed, StableId};
use crate::layout::Page;
use crate::model::{Section, VisualComponent};

/// Collects Sections across regions in emission order
#[derive(Debug)]
pub struct SectionAssembler {
    seed: DocumentSeed,
    sections: Vec<Section>,
}

impl SectionAssembler {
    pub fn new(seed: DocumentSeed) -> Self {
        Self {
            seed,
            sections: Vec::new(),
        }
    }

    /// Number of Sections emitted so far
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Emit one Section per page of a region.
    ///
    /// The base title is the text of the region's first heading block,
    /// else `fallback`, else `Slide N`. Later pages get a `(Part N)`
    /// suffix, N starting at 2. A region without pages emits nothing.
    pub fn push_region(&mut self, pages: Vec<Page>, fallback: Option<String>) {
        if pages.is_empty() {
            return;
        }

        let base = first_heading(&pages)
            .or(fallback)
            .unwrap_or_else(|| format!("Slide {}", self.sections.len() + 1));

        for (part, page) in pages.into_iter().enumerate() {
            let title = if part == 0 {
                base.clone()
            } else {
                format!("{base} (Part {})", part + 1)
            };
            self.emit(title, page);
        }
    }

    /// All Sections; a single empty `Slide 1` when nothing was emitted
    pub fn finish(mut self) -> Vec<Section> {
        if self.sections.is_empty() {
            debug!("no content found, emitting one empty section");
            self.emit("Slide 1".to_string(), Page::default());
        }
        self.sections
    }

    fn emit(&mut self, title: String, page: Page) {
        let order = self.sections.len();
        let components: Vec<VisualComponent> = page
            .placements
            .into_iter()
            .enumerate()
            .map(|(idx, placement)| VisualComponent {
                id: StableId::for_component(self.seed, order, idx),
                kind: placement.block.kind(),
                data: placement.block.data,
                layout: placement.layout,
                order: idx,
            })
            .collect();

        debug!("section {order} \"{title}\": {} components", components.len());
        self.sections.push(Section {
            id: StableId::for_section(self.seed, order),
            title,
            components,
            order,
        });
    }
}

fn first_heading(pages: &[Page]) -> Option<String> {
    pages
        .iter()
        .flat_map(|page| page.placements.iter())
        .find_map(|placement| placement.block.data.heading_text())
        .filter(|text| !text.is_empty())
        .map(String::from)
}
