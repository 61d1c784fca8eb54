//! Attribute system for parsed elements
//!
//! - Direct `Vec<(String, String)>` for attributes, in source order
//! - Class-list helpers for slide-wrapper and layout-hint detection

/// Largest length [`AttrsExt::get_px`] reports; larger values are clamped
pub const MAX_PX: f32 = 100_000.0;

/// Element attributes as simple key-value pairs
pub type Attrs = Vec<(String, String)>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or update)
    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>);

    /// Iterate the whitespace-separated tokens of the `class` attribute
    fn classes(&self) -> std::str::SplitWhitespace<'_> {
        self.get_attr("class").unwrap_or("").split_whitespace()
    }

    /// Check if the class list contains `token` exactly
    fn has_class(&self, token: &str) -> bool {
        self.classes().any(|c| c == token)
    }

    /// Check if any class token contains `needle` (e.g. "grid" in "md:grid-cols-2")
    fn class_contains(&self, needle: &str) -> bool {
        self.classes().any(|c| c.contains(needle))
    }

    /// Get a non-empty, trimmed attribute value
    fn get_nonempty(&self, name: &str) -> Option<&str> {
        self.get_attr(name).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Parse a pixel length attribute ("640", "640px", " 640.5 ").
    ///
    /// Relative values ("50%", "10em") and lengths under one pixel yield
    /// `None`. Lengths above [`MAX_PX`] are clamped.
    fn get_px(&self, name: &str) -> Option<f32> {
        let raw = self.get_nonempty(name)?;
        let raw = raw.strip_suffix("px").unwrap_or(raw).trim();
        raw.parse::<f32>()
            .ok()
            .filter(|v| *v >= 1.0)
            .map(|v| v.min(MAX_PX))
    }
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.iter_mut().find(|(k, _)| k == &name) {
            attr.1 = value;
        } else {
            self.push((name, value));
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
