//! Deterministic character-grid oracle
//!
//! Approximates a text layout engine without fonts: every glyph is
//! `font.size * char_width_ratio` wide, hard breaks (`<br>` and block-level
//! tags) start new lines, and each segment wraps at the grid width.

use crate::error::MeasureError;
use crate::family::ElementKind;

use super::{FontSpec, Measure};

/// Character-grid measurement oracle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Average glyph width as a fraction of font size
    pub char_width_ratio: f32,
}

impl TextMetrics {
    pub const fn new() -> Self {
        Self {
            char_width_ratio: 0.5,
        }
    }

    pub const fn with_char_width_ratio(char_width_ratio: f32) -> Self {
        Self { char_width_ratio }
    }

    /// Glyphs that fit on one line at `width`
    pub fn chars_per_line(&self, width: f32, font: &FontSpec) -> usize {
        let glyph = font.size * self.char_width_ratio;
        if !(glyph > 0.0) || !(width > 0.0) {
            return 1;
        }
        ((width / glyph).floor() as usize).max(1)
    }

    /// Number of wrapped lines `markup` occupies at `width`
    pub fn line_count(&self, markup: &str, width: f32, font: &FontSpec) -> usize {
        let per_line = self.chars_per_line(width, font);
        segment_lengths(markup)
            .into_iter()
            .filter(|&len| len > 0)
            .map(|len| len.div_ceil(per_line))
            .sum()
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Measure for TextMetrics {
    fn measure_height(&self, markup: &str, width: f32, font: &FontSpec) -> Result<f32, MeasureError> {
        if !width.is_finite() {
            return Err(MeasureError::new(format!("cannot measure at width {width}")));
        }
        Ok(self.line_count(markup, width, font) as f32 * font.line_px())
    }
}

/// Split markup into hard-break segments and count visible glyphs per segment.
///
/// Whitespace runs count as one glyph, segment edges are trimmed, and an
/// entity (`&amp;`) counts as one glyph.
fn segment_lengths(markup: &str) -> Vec<usize> {
    let mut segments = Vec::new();
    let mut current = 0usize;
    let mut pending_space = false;
    let mut chars = markup.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '<' => {
                let mut tag = String::new();
                for t in chars.by_ref() {
                    if t == '>' {
                        break;
                    }
                    tag.push(t);
                }
                if is_hard_break(&tag) {
                    segments.push(current);
                    current = 0;
                    pending_space = false;
                }
            }
            '&' => {
                // Consume a short entity body; a bare '&' is a glyph by itself
                let mut lookahead = chars.clone();
                let mut len = 0;
                let mut closed = false;
                while let Some(&n) = lookahead.peek() {
                    if n == ';' {
                        closed = true;
                        break;
                    }
                    if !(n.is_ascii_alphanumeric() || n == '#') || len > 8 {
                        break;
                    }
                    lookahead.next();
                    len += 1;
                }
                if closed && len > 0 {
                    for _ in 0..=len {
                        chars.next();
                    }
                }
                push_glyph(&mut current, &mut pending_space);
            }
            c if c.is_whitespace() => {
                if current > 0 {
                    pending_space = true;
                }
            }
            _ => push_glyph(&mut current, &mut pending_space),
        }
    }
    segments.push(current);
    segments
}

fn push_glyph(current: &mut usize, pending_space: &mut bool) {
    if *pending_space {
        *current += 1;
        *pending_space = false;
    }
    *current += 1;
}

fn is_hard_break(tag: &str) -> bool {
    let name: String = tag
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if name.is_empty() {
        return false;
    }
    name == "br" || name == "li" || name == "tr" || ElementKind::identify(&name).is_block()
}
