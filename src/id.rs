//! Stable identity for emitted sections and components
//!
//! Ids are content-derived rather than random:
//! - **Section**: Hash(document seed + section order)
//! - **Component**: Hash(document seed + section order + component order)
//!
//! Converting the same markup twice yields identical ids, which keeps
//! snapshots and persistence layers diff-friendly. Within one output every
//! id is distinct because the (section, component) positions are distinct.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::hash::StableHasher;

// =============================================================================
// DocumentSeed - per-document seed for StableIds
// =============================================================================

/// Document-specific seed for StableIds
///
/// Derived from the input markup, so two different documents do not share
/// ids even when their layouts have the same shape.
///
/// ```
/// use tola_slides::id::DocumentSeed;
///
/// let seed = DocumentSeed::from_markup("<h1>Intro</h1>");
/// assert_ne!(seed, DocumentSeed::zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DocumentSeed(pub u64);

impl DocumentSeed {
    /// Create a DocumentSeed from the source markup
    pub fn from_markup(markup: &str) -> Self {
        Self(
            StableHasher::new()
                .update_str("__document__")
                .update_str(markup)
                .finish(),
        )
    }

    /// Create a zero seed (for tests and pre-parsed documents)
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

// =============================================================================
// StableId
// =============================================================================

/// Opaque identifier for a Section or VisualComponent
///
/// # Memory Layout
///
/// - 8 bytes (u64)
/// - Copy, no heap allocation
///
/// Serializes as a lowercase hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct StableId(pub(crate) u64);

impl StableId {
    /// Create a StableId from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw u64 representation
    #[inline]
    pub const fn as_raw(&self) -> u64 {
        self.0
    }

    /// Lowercase hex representation (no leading `#`)
    #[inline]
    pub fn to_hex(self) -> String {
        format!("{:x}", self.as_raw())
    }

    /// Parse the hex representation produced by [`StableId::to_hex`]
    pub fn from_hex(s: &str) -> Option<Self> {
        u64::from_str_radix(s, 16).ok().map(Self)
    }

    /// Id of the Section at global position `order`
    pub fn for_section(seed: DocumentSeed, order: usize) -> Self {
        Self(
            StableHasher::new()
                .update_u64(seed.as_u64())
                .update_str("__section__")
                .update_usize(order)
                .finish(),
        )
    }

    /// Id of the component at position `order` inside Section `section_order`
    pub fn for_component(seed: DocumentSeed, section_order: usize, order: usize) -> Self {
        Self(
            StableHasher::new()
                .update_u64(seed.as_u64())
                .update_str("__component__")
                .update_usize(section_order)
                .update_usize(order)
                .finish(),
        )
    }
}

impl fmt::Debug for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StableId({:016x})", self.0)
    }
}

impl fmt::Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:x}", self.0)
    }
}

// =============================================================================
// serde support
// =============================================================================

impl Serialize for StableId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for StableId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = StableId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hex-encoded 64-bit id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<StableId, E> {
                StableId::from_hex(v).ok_or_else(|| E::custom(format!("invalid id `{v}`")))
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
