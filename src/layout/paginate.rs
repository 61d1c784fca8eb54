//! Height-driven pagination
//!
//! The paginator is an accumulator value: [`Paginator::push`] consumes it
//! and returns the next state, so the tree walk threads it explicitly
//! instead of sharing a mutable cursor.

use log::warn;

use crate::config::ConvertConfig;
use crate::model::{Block, Layout};

/// What the paginator does with the next block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginatorState {
    /// The block fits (or the page is empty): place it on the current page
    Accumulating,
    /// The block overflows a non-empty page: emit the page first
    Flushing,
}

/// A block with its final position on a page
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub block: Block,
    pub layout: Layout,
}

/// The placements of one slide, top to bottom
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub placements: Vec<Placement>,
}

impl Page {
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Pagination accumulator for one region
#[derive(Debug, Clone)]
pub struct Paginator {
    /// y of the first block on a page (top padding)
    top: f32,
    /// Content height available on one page
    limit: f32,
    spacing: f32,
    z_index: i32,
    /// Offset of the next block from `top`
    cursor: f32,
    current: Page,
    pages: Vec<Page>,
    over_height: usize,
}

impl Paginator {
    pub fn new(config: &ConvertConfig) -> Self {
        Self {
            top: config.canvas.padding,
            limit: config.canvas.content_height(),
            spacing: config.metrics.block_spacing,
            z_index: config.metrics.z_index,
            cursor: 0.0,
            current: Page::default(),
            pages: Vec::new(),
            over_height: 0,
        }
    }

    /// State the paginator enters for a block of `height`
    pub fn next_state(&self, height: f32) -> PaginatorState {
        if self.cursor + height > self.limit && !self.current.is_empty() {
            PaginatorState::Flushing
        } else {
            PaginatorState::Accumulating
        }
    }

    /// Place `block`, starting a new page first if it would overflow
    pub fn push(mut self, block: Block) -> Self {
        if self.next_state(block.height) == PaginatorState::Flushing {
            self.flush();
        }

        if block.height > self.limit {
            self.over_height += 1;
            warn!(
                "{} block of height {} exceeds the slide content height {}; placed on its own",
                block.kind().name(),
                block.height,
                self.limit
            );
        }

        let layout = Layout {
            x: block.x,
            y: self.top + self.cursor,
            width: block.width,
            height: block.height,
            z_index: self.z_index,
        };
        self.cursor += block.height + self.spacing;
        self.current.placements.push(Placement { block, layout });
        self
    }

    /// Blocks taller than a whole page
    pub fn over_height(&self) -> usize {
        self.over_height
    }

    /// Emit the last page if non-empty and return all pages
    pub fn finish(mut self) -> Vec<Page> {
        if !self.current.is_empty() {
            self.flush();
        }
        self.pages
    }

    fn flush(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.cursor = 0.0;
    }
}
