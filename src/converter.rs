//! Conversion entry points
//!
//! [`Converter`] owns the configuration, the measurement oracle and the
//! measurement cache. One call converts one document synchronously:
//!
//! ```text
//! markup → parse_html → regions → walk + classify + estimate → paginate → sections
//! ```

use log::debug;
use rustc_hash::FxHashMap;

use crate::classify::Classifier;
use crate::config::ConvertConfig;
use crate::error::SlideResult;
use crate::id::DocumentSeed;
use crate::layout::{Walker, find_regions};
use crate::measure::{HeightEstimator, Measure, MeasureCache, TextMetrics};
use crate::model::{ComponentType, Section};
use crate::node::Document;
use crate::parse::parse_html;
use crate::render::{RenderConfig, render_outer};
use crate::section::SectionAssembler;

// =============================================================================
// ConvertStats
// =============================================================================

/// Counters describing one conversion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertStats {
    /// Independently paginated regions
    pub regions: usize,
    /// Emitted Sections
    pub sections: usize,
    /// Emitted components per type
    pub components: FxHashMap<ComponentType, usize>,
    /// Nodes dropped as insignificant
    pub skipped: usize,
    /// Significant elements the classifier rejected
    pub rejected: usize,
    /// Containers treated as transparent
    pub recursed: usize,
    /// Blocks taller than one slide, placed alone
    pub over_height: usize,
}

impl ConvertStats {
    /// Emitted components of one type
    pub fn component_count(&self, kind: ComponentType) -> usize {
        self.components.get(&kind).copied().unwrap_or(0)
    }

    /// Emitted components of all types
    pub fn total_components(&self) -> usize {
        self.components.values().sum()
    }
}

// =============================================================================
// Converter
// =============================================================================

/// Converts markup into slide Sections
///
/// ```
/// use tola_slides::Converter;
///
/// let converter = Converter::new();
/// let sections = converter.convert("<h1>Intro</h1><p>First slide text</p>").unwrap();
/// assert_eq!(sections.len(), 1);
/// assert_eq!(sections[0].title, "Intro");
/// ```
pub struct Converter<M: Measure = TextMetrics> {
    config: ConvertConfig,
    oracle: M,
    cache: MeasureCache,
}

impl Converter<TextMetrics> {
    /// Converter with the default configuration and the character-grid oracle
    pub fn new() -> Self {
        Self::with_oracle(TextMetrics::new())
    }
}

impl Default for Converter<TextMetrics> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Measure> Converter<M> {
    /// Converter measuring with `oracle`
    pub fn with_oracle(oracle: M) -> Self {
        Self {
            config: ConvertConfig::default(),
            oracle,
            cache: MeasureCache::new(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ConvertConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    pub fn oracle(&self) -> &M {
        &self.oracle
    }

    /// Bound the measurement cache to `capacity` entries
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = MeasureCache::with_capacity(capacity);
        self
    }

    /// Measurements memoized across conversions
    ///
    /// The cache lives as long as the converter and is bounded by
    /// [`MeasureCache::capacity`] (see [`Converter::with_cache_capacity`]).
    pub fn cache(&self) -> &MeasureCache {
        &self.cache
    }

    /// Convert a markup string into Sections
    pub fn convert(&self, markup: &str) -> SlideResult<Vec<Section>> {
        self.convert_with_stats(markup).map(|(sections, _)| sections)
    }

    /// Convert a markup string, also returning conversion counters
    pub fn convert_with_stats(&self, markup: &str) -> SlideResult<(Vec<Section>, ConvertStats)> {
        self.config.validate()?;
        let doc = parse_html(markup)?;
        self.run(&doc)
    }

    /// Convert an already parsed document
    pub fn convert_document(&self, doc: &Document) -> SlideResult<Vec<Section>> {
        self.convert_document_with_stats(doc).map(|(sections, _)| sections)
    }

    /// Convert an already parsed document, also returning conversion counters
    pub fn convert_document_with_stats(&self, doc: &Document) -> SlideResult<(Vec<Section>, ConvertStats)> {
        self.config.validate()?;
        self.run(doc)
    }

    fn run(&self, doc: &Document) -> SlideResult<(Vec<Section>, ConvertStats)> {
        let doc_stats = doc.collect_stats();
        debug!(
            "converting <{}>: {} elements, {} headings, {} media, {} lists, {} tables",
            doc.root.tag,
            doc_stats.element_count,
            doc_stats.heading_count,
            doc_stats.media_count,
            doc_stats.list_count,
            doc_stats.table_count
        );

        // Seeded from the tree, so `convert` and `convert_document` agree
        let seed = DocumentSeed::from_markup(&render_outer(&doc.root, &RenderConfig::RAW));
        let classifier = Classifier::new(HeightEstimator::new(&self.oracle, &self.cache, &self.config));
        let mut assembler = SectionAssembler::new(seed);

        let regions = find_regions(doc, &self.config.regions);
        if regions.iter().any(|r| r.explicit) {
            debug!("{} slide wrappers found, content outside them is skipped", regions.len());
        }

        let mut stats = ConvertStats {
            regions: regions.len(),
            ..ConvertStats::default()
        };

        for (idx, region) in regions.iter().enumerate() {
            let mut walker = Walker::new(&classifier);
            let pages = walker.run(region.root)?;
            debug!(
                "region {idx} <{}>: {} blocks on {} pages",
                region.root.tag,
                pages.iter().map(|p| p.len()).sum::<usize>(),
                pages.len()
            );

            let walked = walker.stats();
            stats.skipped += walked.skipped;
            stats.rejected += walked.rejected;
            stats.recursed += walked.recursed;
            stats.over_height += walked.over_height;

            let fallback = region.fallback_title(&self.config.regions);
            assembler.push_region(pages, fallback);
        }

        let sections = assembler.finish();
        stats.sections = sections.len();
        for component in sections.iter().flat_map(|s| s.components.iter()) {
            *stats.components.entry(component.kind).or_default() += 1;
        }
        debug!(
            "converted into {} sections with {} components",
            stats.sections,
            stats.total_components()
        );
        Ok((sections, stats))
    }
}

#[cfg(feature = "parallel")]
impl<M: Measure + Sync> Converter<M> {
    /// Convert many documents in parallel, results in input order
    ///
    /// Each document is still converted sequentially; the measurement
    /// cache is shared between workers.
    pub fn convert_batch(&self, inputs: &[&str]) -> Vec<SlideResult<Vec<Section>>> {
        use rayon::prelude::*;

        inputs.par_iter().map(|markup| self.convert(markup)).collect()
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// Convert with the default configuration and the character-grid oracle
pub fn convert(markup: &str) -> SlideResult<Vec<Section>> {
    Converter::new().convert(markup)
}

/// Convert with the default configuration and a custom oracle
pub fn convert_with<M: Measure>(markup: &str, oracle: M) -> SlideResult<Vec<Section>> {
    Converter::with_oracle(oracle).convert(markup)
}
