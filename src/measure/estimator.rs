//! Height policy over the measurement oracle
//!
//! Every oracle-measured height gets a fixed safety margin (sub-pixel and
//! font-rendering variance must not push a block over a slide boundary),
//! and text-bearing blocks never drop below one line plus block padding.
//! Code blocks and tables are never measured: their line/row counts are
//! reliable, so their heights are closed formulas.

use crate::config::ConvertConfig;
use crate::error::SlideResult;

use super::{FontSpec, Measure, MeasureCache};

/// Per-block-type height estimation
pub struct HeightEstimator<'a, M: Measure + ?Sized> {
    oracle: &'a M,
    cache: &'a MeasureCache,
    config: &'a ConvertConfig,
}

impl<'a, M: Measure + ?Sized> HeightEstimator<'a, M> {
    pub fn new(oracle: &'a M, cache: &'a MeasureCache, config: &'a ConvertConfig) -> Self {
        Self {
            oracle,
            cache,
            config,
        }
    }

    /// The configuration heights are derived from
    #[inline]
    pub fn config(&self) -> &'a ConvertConfig {
        self.config
    }

    /// Raw oracle height (cached), without margin or floor
    pub fn measure(&self, markup: &str, width: f32, font: &FontSpec) -> SlideResult<f32> {
        Ok(self.cache.measure(self.oracle, markup, width, font)?)
    }

    /// Minimum height of a text-bearing block set in `font`
    #[inline]
    pub fn floor(&self, font: &FontSpec) -> f32 {
        font.line_px() + self.config.metrics.block_padding
    }

    /// Height of a text block (heading, paragraph, quote body)
    pub fn estimate(&self, markup: &str, width: f32, font: &FontSpec) -> SlideResult<f32> {
        let measured = self.measure(markup, width, font)?;
        Ok(self.with_margin(measured, font))
    }

    /// Height of a list: items measured independently at a width reduced by
    /// the marker indent, each at least one line tall.
    pub fn estimate_list(&self, items: &[String], width: f32) -> SlideResult<f32> {
        let metrics = &self.config.metrics;
        let font = &self.config.typography.body;
        let item_width = (width - metrics.list_marker_indent).max(1.0);
        let line = font.line_px();

        let mut total = 0.0;
        for item in items {
            total += self.measure(item, item_width, font)?.max(line);
        }
        let gaps = items.len().saturating_sub(1) as f32;
        Ok(total + gaps * metrics.list_item_spacing + metrics.list_padding + metrics.safety_margin)
    }

    /// Height of an opaque fragment.
    ///
    /// Uses the oracle when it reports a rendered size; an oracle height of
    /// zero means the fragment could not be laid out, and a content-driven
    /// estimate is used instead.
    pub fn estimate_fragment(
        &self,
        markup: &str,
        text: &str,
        block_children: usize,
        width: f32,
    ) -> SlideResult<f32> {
        let font = &self.config.typography.body;
        let measured = self.measure(markup, width, font)?;
        if measured > 0.0 {
            return Ok(self.with_margin(measured, font));
        }

        let metrics = &self.config.metrics;
        let glyph = font.size * metrics.char_width_ratio;
        let per_line = ((width / glyph).floor() as usize).max(1);
        let lines = text.chars().count().div_ceil(per_line);
        let heuristic = lines as f32 * font.line_px() + block_children as f32 * metrics.block_padding;
        Ok(heuristic.max(self.floor(font)))
    }

    /// Height of a code block with `lines` lines
    pub fn code_height(&self, lines: usize) -> f32 {
        let metrics = &self.config.metrics;
        lines.max(1) as f32 * metrics.code_line_height + metrics.code_padding
    }

    /// Height of a table with `rows` rows
    pub fn table_height(&self, rows: usize) -> f32 {
        let metrics = &self.config.metrics;
        rows as f32 * metrics.table_row_height + metrics.table_padding
    }

    fn with_margin(&self, measured: f32, font: &FontSpec) -> f32 {
        (measured + self.config.metrics.safety_margin).max(self.floor(font))
    }
}
