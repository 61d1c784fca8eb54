//! Error types for tola-slides.
//!
//! Conversion is tolerant by construction: odd markup degrades to whatever
//! tree the parser recovers, and empty nodes are skipped. Only a failing
//! measurement oracle (or an unusable configuration) stops a conversion.

use thiserror::Error;

/// Failure reported by a measurement oracle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MeasureError {
    message: String,
}

impl MeasureError {
    /// Create a measurement error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The oracle's failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors that can occur while converting a document into slides.
#[derive(Debug, Error)]
pub enum SlideError {
    /// The measurement oracle failed; no layout can be computed without heights
    #[error("measurement failed: {0}")]
    Measure(#[from] MeasureError),

    /// Feeding markup into the parser failed
    #[error("failed to parse markup: {0}")]
    Parse(#[from] std::io::Error),

    /// The configuration cannot produce a layout (e.g. zero content height)
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for conversion operations.
pub type SlideResult<T> = Result<T, SlideError>;

impl SlideError {
    /// Create a configuration error with a message.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
