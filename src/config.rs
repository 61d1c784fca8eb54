//! Conversion configuration
//!
//! All lengths are canvas logical units (px at 1x). Every group has a
//! `Default` matching a 1280x720 slide and deserializes with
//! `#[serde(default)]`, so a partial JSON/YAML config only overrides what
//! it names.

use serde::{Deserialize, Serialize};

use crate::error::{SlideError, SlideResult};
use crate::measure::FontSpec;

// =============================================================================
// Canvas
// =============================================================================

/// Slide canvas geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
    /// Padding applied on all four sides
    pub padding: f32,
}

impl Canvas {
    /// Width available to blocks
    #[inline]
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.padding
    }

    /// Height available to blocks on one slide
    #[inline]
    pub fn content_height(&self) -> f32 {
        self.height - 2.0 * self.padding
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            padding: 40.0,
        }
    }
}

// =============================================================================
// Typography
// =============================================================================

/// Font parameters per block role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Typography {
    pub body: FontSpec,
    pub quote: FontSpec,
    /// `<h1>` through `<h6>`, largest first
    pub headings: [FontSpec; 6],
}

impl Typography {
    /// Font for a heading level; levels outside 1..=6 are clamped
    pub fn heading(&self, level: u8) -> &FontSpec {
        let idx = usize::from(level.clamp(1, 6)) - 1;
        &self.headings[idx]
    }
}

impl Default for Typography {
    fn default() -> Self {
        let heading = |size| FontSpec::new(size, 1.25);
        Self {
            body: FontSpec::new(18.0, 1.5),
            quote: FontSpec::new(22.0, 1.5),
            headings: [
                heading(40.0),
                heading(34.0),
                heading(28.0),
                heading(24.0),
                heading(21.0),
                heading(18.0),
            ],
        }
    }
}

// =============================================================================
// BlockMetrics
// =============================================================================

/// Fixed metrics used by the per-type height rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockMetrics {
    /// Vertical gap between consecutive blocks on a slide
    pub block_spacing: f32,
    /// Added to every oracle-measured height
    pub safety_margin: f32,
    /// Added to one line height to form the minimum text block height
    pub block_padding: f32,
    /// Stacking order written to every component
    pub z_index: i32,

    pub list_marker_indent: f32,
    pub list_item_spacing: f32,
    pub list_padding: f32,

    pub code_line_height: f32,
    pub code_padding: f32,

    pub table_row_height: f32,
    pub table_padding: f32,

    /// Width cap for code blocks and tables
    pub max_reading_width: f32,

    /// Quotes with at most this many characters are narrowed
    pub quote_narrow_chars: usize,
    /// Fraction of the available width a narrowed quote occupies
    pub quote_narrow_ratio: f32,

    pub image_default_width: f32,
    pub image_default_height: f32,
    pub image_min_height: f32,

    /// Average glyph width as a fraction of font size (fragment heuristic)
    pub char_width_ratio: f32,
}

impl Default for BlockMetrics {
    fn default() -> Self {
        Self {
            block_spacing: 20.0,
            safety_margin: 4.0,
            block_padding: 8.0,
            z_index: 1,
            list_marker_indent: 32.0,
            list_item_spacing: 8.0,
            list_padding: 16.0,
            code_line_height: 22.0,
            code_padding: 32.0,
            table_row_height: 40.0,
            table_padding: 16.0,
            max_reading_width: 960.0,
            quote_narrow_chars: 120,
            quote_narrow_ratio: 0.7,
            image_default_width: 640.0,
            image_default_height: 360.0,
            image_min_height: 40.0,
            char_width_ratio: 0.5,
        }
    }
}

// =============================================================================
// ContainerPolicy
// =============================================================================

/// Significance and atomize-vs-recurse policy
///
/// The layout-hint classes encode presentation-framework conventions
/// (utility classes such as `grid-cols-2` or `flex`). They are policy, not
/// truth: override them for markup that follows other conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerPolicy {
    /// Cleaned text must be longer than this to count as content
    pub min_text_len: usize,
    /// Attributes that make an element significant on their own
    pub resource_attrs: Vec<String>,
    /// Maximum transparent-container descent; deeper containers are atomized
    pub max_depth: usize,
    /// Layout-hint containers are only dissolved above this depth
    pub layout_hint_depth: usize,
    /// Class substrings marking pure layout wrappers
    pub layout_hint_classes: Vec<String>,
}

impl Default for ContainerPolicy {
    fn default() -> Self {
        Self {
            min_text_len: 2,
            resource_attrs: ["src", "href", "data-src", "srcset"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_depth: 3,
            layout_hint_depth: 2,
            layout_hint_classes: ["grid", "flex", "columns"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

// =============================================================================
// RegionPolicy
// =============================================================================

/// How explicit slide boundaries are marked in the input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegionPolicy {
    /// Class token marking a slide wrapper
    pub slide_class: String,
    /// Attribute marking a slide wrapper (any value)
    pub slide_attr: String,
    /// Attributes consulted, in order, for a wrapper's own title
    pub title_attrs: Vec<String>,
}

impl Default for RegionPolicy {
    fn default() -> Self {
        Self {
            slide_class: "slide".into(),
            slide_attr: "data-slide".into(),
            title_attrs: ["data-title", "title", "aria-label"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

// =============================================================================
// ConvertConfig
// =============================================================================

/// Complete converter configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertConfig {
    pub canvas: Canvas,
    pub typography: Typography,
    pub metrics: BlockMetrics,
    pub policy: ContainerPolicy,
    pub regions: RegionPolicy,
}

impl ConvertConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the canvas geometry
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Replace the typography
    pub fn with_typography(mut self, typography: Typography) -> Self {
        self.typography = typography;
        self
    }

    /// Replace the block metrics
    pub fn with_metrics(mut self, metrics: BlockMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Replace the container policy
    pub fn with_policy(mut self, policy: ContainerPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the slide-region policy
    pub fn with_regions(mut self, regions: RegionPolicy) -> Self {
        self.regions = regions;
        self
    }

    /// Check that the configuration can produce a layout
    pub fn validate(&self) -> SlideResult<()> {
        if !(self.canvas.content_width() > 0.0) {
            return Err(SlideError::invalid_config(format!(
                "content width must be positive (canvas width {}, padding {})",
                self.canvas.width, self.canvas.padding
            )));
        }
        if !(self.canvas.content_height() > 0.0) {
            return Err(SlideError::invalid_config(format!(
                "content height must be positive (canvas height {}, padding {})",
                self.canvas.height, self.canvas.padding
            )));
        }

        let fonts = [&self.typography.body, &self.typography.quote]
            .into_iter()
            .chain(self.typography.headings.iter());
        for font in fonts {
            if !(font.size > 0.0 && font.line_height > 0.0) {
                return Err(SlideError::invalid_config(format!(
                    "font size and line height must be positive (got {} / {})",
                    font.size, font.line_height
                )));
            }
        }

        if !(self.metrics.char_width_ratio > 0.0) {
            return Err(SlideError::invalid_config("char width ratio must be positive"));
        }
        Ok(())
    }
}
