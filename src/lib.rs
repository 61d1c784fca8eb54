//! tola-slides - Rich document to slide layout conversion
//!
//! Takes semantically marked-up content (headings, paragraphs, lists,
//! images, quotes, code, tables, generic containers) and produces ordered
//! slides of positioned, sized blocks that never exceed the canvas height
//! (except a single block that is taller than a slide on its own).
//!
//! ## Pipeline
//!
//! 1. `parse` - markup into a [`Document`] (html5ever, tolerant of bad input)
//! 2. `significance` - drop nodes without meaningful content
//! 3. `classify` + `families` - atomize, recurse into, or reject each element
//! 4. `measure` - block heights through an injectable [`Measure`] oracle
//! 5. `layout` - tree walk threading a pagination accumulator per region
//! 6. `section` - titles, `(Part N)` suffixes, stable ids, global order
//!
//! ## Usage
//!
//! ```
//! use tola_slides::{ComponentType, Converter};
//!
//! let sections = Converter::new()
//!     .convert("<h1>Roadmap</h1><p>Ship the beta</p><p>Collect feedback</p>")
//!     .unwrap();
//!
//! assert_eq!(sections.len(), 1);
//! assert_eq!(sections[0].title, "Roadmap");
//! assert_eq!(sections[0].components[0].kind, ComponentType::Heading);
//! ```
//!
//! A deterministic fake oracle can replace the default character grid:
//!
//! ```
//! use tola_slides::{FontSpec, MeasureError, convert_with};
//!
//! let one_line = |_: &str, _: f32, font: &FontSpec| Ok::<_, MeasureError>(font.line_px());
//! let sections = convert_with("<p>Any length fits on one line here</p>", one_line).unwrap();
//! assert_eq!(sections[0].components.len(), 1);
//! ```

#[macro_use]
mod macros;

// =============================================================================
// Modules
// =============================================================================

/// Attribute helpers
pub mod attr;

/// Atomize / recurse / reject decisions
pub mod classify;

/// Conversion configuration
pub mod config;

/// Conversion entry points
pub mod converter;

/// Error types
pub mod error;

/// Per-kind block builders
pub mod families;

/// Element kinds and the `Family` trait
pub mod family;

/// Content hashing for stable ids and cache keys
pub mod hash;

/// Stable identity for sections and components
pub mod id;

/// Region walk and pagination
pub mod layout;

/// Measurement oracle and height policy
pub mod measure;

/// Output model
pub mod model;

/// Node types: Document, Element, Node, Text
pub mod node;

/// HTML parsing
pub mod parse;

/// Prelude for common imports
pub mod prelude;

/// Markup rendering
pub mod render;

/// Section assembly
pub mod section;

/// Significance filter
pub mod significance;

// =============================================================================
// Re-exports
// =============================================================================

// Entry points
pub use converter::{ConvertStats, Converter, convert, convert_with};

// Configuration
pub use config::{BlockMetrics, Canvas, ContainerPolicy, ConvertConfig, RegionPolicy, Typography};

// Output model
pub use model::{ComponentData, ComponentType, Layout, Section, VisualComponent};

// Measurement
pub use measure::{FontSpec, HeightEstimator, Measure, MeasureCache, TextMetrics};

// Classification
pub use classify::{Classifier, Decision};
pub use family::{ElementKind, Family};

// Node types
pub use node::{Children, Document, Element, Node, Text};
pub use parse::parse_html;

// Attributes
pub use attr::{Attrs, AttrsExt};

// Identity
pub use hash::StableHasher;
pub use id::{DocumentSeed, StableId};

// Error types
pub use error::{MeasureError, SlideError, SlideResult};
