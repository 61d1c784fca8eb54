//! Prelude module for common imports.
//!
//! ```
//! use tola_slides::prelude::*;
//!
//! let sections = convert("<h2>Hello</h2>").unwrap();
//! assert_eq!(sections[0].components[0].kind, ComponentType::Heading);
//! ```

// Entry points
pub use crate::converter::{ConvertStats, Converter, convert, convert_with};

// Configuration
pub use crate::config::{
    BlockMetrics, Canvas, ContainerPolicy, ConvertConfig, RegionPolicy, Typography,
};

// Output model
pub use crate::model::{ComponentData, ComponentType, Layout, Section, VisualComponent};

// Measurement
pub use crate::measure::{FontSpec, Measure, TextMetrics};

// Nodes
pub use crate::node::{Document, Element, Node, Text};
pub use crate::parse::parse_html;

// Identity
pub use crate::id::StableId;

// Error
pub use crate::error::{MeasureError, SlideError, SlideResult};
