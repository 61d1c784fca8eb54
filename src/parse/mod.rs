//! Markup parsing into the crate's node tree
//!
//! Parsing is delegated to `html5ever`, whose HTML5 tree builder recovers
//! from malformed input the same way browsers do. The resulting DOM is
//! converted once into [`Document`](crate::node::Document) and never
//! consulted again.

mod html;

pub use html::{MAX_NESTING, parse_html};
