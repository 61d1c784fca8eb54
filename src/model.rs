//! Output model: Sections of positioned VisualComponents
//!
//! Everything here is created once during a conversion and handed to the
//! caller; the types derive serde so the result can go straight to JSON.

use serde::{Deserialize, Serialize};

use crate::id::StableId;

// =============================================================================
// ComponentType
// =============================================================================

/// Closed set of component types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentType {
    Heading,
    Paragraph,
    Image,
    List,
    Quote,
    Code,
    Table,
    /// Fallback for unclassifiable but non-empty content
    CustomFragment,
}

impl ComponentType {
    crate::impl_variant_names!(
        Heading => "heading",
        Paragraph => "paragraph",
        Image => "image",
        List => "list",
        Quote => "quote",
        Code => "code",
        Table => "table",
        CustomFragment => "customFragment",
    );
}

// =============================================================================
// ComponentData
// =============================================================================

/// Type-specific payload of a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ComponentData {
    Heading {
        level: u8,
        /// Cleaned inner markup
        markup: String,
        /// Plain text, used for Section titles
        text: String,
    },
    Paragraph {
        markup: String,
    },
    Image {
        src: String,
        alt: String,
    },
    List {
        ordered: bool,
        /// Cleaned inner markup of each item, in order
        items: Vec<String>,
    },
    Quote {
        markup: String,
        attribution: Option<String>,
    },
    Code {
        code: String,
        language: Option<String>,
    },
    Table {
        /// Cleaned cell markup, row by row
        rows: Vec<Vec<String>>,
        has_header: bool,
    },
    CustomFragment {
        /// Verbatim serialized content
        markup: String,
    },
}

impl ComponentData {
    /// The component type this payload belongs to
    pub fn component_type(&self) -> ComponentType {
        match self {
            Self::Heading { .. } => ComponentType::Heading,
            Self::Paragraph { .. } => ComponentType::Paragraph,
            Self::Image { .. } => ComponentType::Image,
            Self::List { .. } => ComponentType::List,
            Self::Quote { .. } => ComponentType::Quote,
            Self::Code { .. } => ComponentType::Code,
            Self::Table { .. } => ComponentType::Table,
            Self::CustomFragment { .. } => ComponentType::CustomFragment,
        }
    }

    /// Heading text, if this is a heading
    pub fn heading_text(&self) -> Option<&str> {
        match self {
            Self::Heading { text, .. } => Some(text),
            _ => None,
        }
    }
}

// =============================================================================
// Layout
// =============================================================================

/// Box of a component on its slide, in canvas logical units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub x: f32,
    /// Offset from the top of the slide
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub z_index: i32,
}

impl Layout {
    /// Bottom edge (`y + height`)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

// =============================================================================
// VisualComponent / Section
// =============================================================================

/// One typed, positioned content unit within a Section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualComponent {
    pub id: StableId,
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub data: ComponentData,
    pub layout: Layout,
    /// Zero-based position within the owning Section
    pub order: usize,
}

/// One output slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: StableId,
    pub title: String,
    /// Ordered by ascending `order` (equivalently ascending `layout.y`)
    pub components: Vec<VisualComponent>,
    /// Zero-based position among all emitted Sections
    pub order: usize,
}

impl Section {
    /// Check if the Section has no components
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterate the components of one type
    pub fn components_of(&self, kind: ComponentType) -> impl Iterator<Item = &VisualComponent> {
        self.components.iter().filter(move |c| c.kind == kind)
    }
}

// =============================================================================
// Block - classified but not yet placed
// =============================================================================

/// A classified block with its size, before pagination assigns `y`
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub data: ComponentData,
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Block {
    pub fn new(data: ComponentData, x: f32, width: f32, height: f32) -> Self {
        Self {
            data,
            x,
            width,
            height,
        }
    }

    #[inline]
    pub fn kind(&self) -> ComponentType {
        self.data.component_type()
    }
}
