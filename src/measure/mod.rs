//! Measurement: the oracle seam and the height policy built on it.
//!
//! # Module Structure
//!
//! - `Measure` - external capability returning the rendered height of markup
//! - `TextMetrics` - deterministic default oracle (character grid)
//! - `MeasureCache` - memoization of oracle results across conversions
//! - `HeightEstimator` - per-block-type height policy (margins, floors, fonts)
//!
//! # Example
//!
//! ```
//! use tola_slides::measure::{FontSpec, Measure, TextMetrics};
//!
//! let font = FontSpec::new(20.0, 1.5);
//! // 10 glyphs per line at width 100 => 2 lines of 30px
//! let h = TextMetrics::new().measure_height("<p>fifteen chars.</p>", 100.0, &font).unwrap();
//! assert_eq!(h, 60.0);
//! ```

mod cache;
mod estimator;
mod metrics;

pub use cache::MeasureCache;
pub use estimator::HeightEstimator;
pub use metrics::TextMetrics;

use serde::{Deserialize, Serialize};

use crate::error::MeasureError;

// =============================================================================
// FontSpec
// =============================================================================

/// Font metrics passed to the oracle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSpec {
    /// Font size in px
    pub size: f32,
    /// Line height as a multiple of the font size
    pub line_height: f32,
}

impl FontSpec {
    pub const fn new(size: f32, line_height: f32) -> Self {
        Self { size, line_height }
    }

    /// Height of one line in px
    #[inline]
    pub fn line_px(&self) -> f32 {
        self.size * self.line_height
    }
}

// =============================================================================
// Measure trait
// =============================================================================

/// Measurement oracle: rendered height of a markup fragment at a width
///
/// Implementations must be deterministic (identical calls return identical
/// heights); results are memoized by [`MeasureCache`]. An `Err` aborts the
/// whole conversion.
///
/// Any closure with the right signature is an oracle:
///
/// ```
/// use tola_slides::measure::{FontSpec, Measure};
/// use tola_slides::MeasureError;
///
/// let fixed = |_: &str, _: f32, font: &FontSpec| Ok::<_, MeasureError>(font.line_px());
/// assert_eq!(fixed.measure_height("<p>x</p>", 500.0, &FontSpec::new(10.0, 2.0)), Ok(20.0));
/// ```
pub trait Measure {
    /// Rendered height of `markup` laid out at `width` with `font`
    fn measure_height(&self, markup: &str, width: f32, font: &FontSpec) -> Result<f32, MeasureError>;
}

impl<F> Measure for F
where
    F: Fn(&str, f32, &FontSpec) -> Result<f32, MeasureError>,
{
    fn measure_height(&self, markup: &str, width: f32, font: &FontSpec) -> Result<f32, MeasureError> {
        self(markup, width, font)
    }
}
