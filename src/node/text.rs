//! Text node type
//!
//! Simple text content nodes in the document tree.

use super::element::collapse_whitespace;

// =============================================================================
// Text
// =============================================================================

/// Text content node
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    /// Text content, as parsed (entities already decoded)
    pub content: String,
}

impl Text {
    /// Create a new text node
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Check if text is only whitespace
    pub fn is_whitespace(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Get trimmed content
    pub fn trimmed(&self) -> &str {
        self.content.trim()
    }

    /// Content with whitespace runs collapsed and trimmed
    pub fn cleaned(&self) -> String {
        collapse_whitespace(&self.content)
    }
}
