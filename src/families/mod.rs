//! Element families: one block-building rule per element kind.
//!
//! Every family is a marker type implementing [`Family`](crate::family::Family)
//! plus a `build` function that turns a significant element into a
//! [`Decision`](crate::classify::Decision).
//!
//! # Available Families
//!
//! - `HeadingFamily` - `<h1>` through `<h6>`
//! - `ParagraphFamily` - `<p>`, `<figcaption>`, inline-only containers
//! - `MediaFamily` - `<img>`
//! - `ListFamily` - `<ul>`, `<ol>`
//! - `CodeFamily` - `<pre>`
//! - `QuoteFamily` - `<blockquote>`
//! - `TableFamily` - `<table>`
//! - `ContainerFamily` - grouping elements (atomize, recurse or reject)

pub mod code;
pub mod container;
pub mod heading;
pub mod list;
pub mod media;
pub mod paragraph;
pub mod quote;
pub mod table;

pub use code::CodeFamily;
pub use container::ContainerFamily;
pub use heading::HeadingFamily;
pub use list::ListFamily;
pub use media::MediaFamily;
pub use paragraph::ParagraphFamily;
pub use quote::QuoteFamily;
pub use table::TableFamily;
