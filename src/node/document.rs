//! Document type and related utilities
//!
//! The root container for parsed trees, with traversal and statistics.

use crate::family::ElementKind;

use super::Element;

// =============================================================================
// Document
// =============================================================================

/// Root document container
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Root element (`<body>` for parsed HTML, or any wrapper)
    pub root: Element,
}

impl Document {
    /// Create a new document with a root element
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Iterate over all elements (depth-first, document order)
    pub fn iter_elements(&self) -> ElementIterator<'_> {
        ElementIterator::new(&self.root)
    }

    /// Collect statistics about the document
    pub fn collect_stats(&self) -> Stats {
        let mut stats = Stats::default();
        for elem in self.iter_elements() {
            stats.element_count += 1;
            stats.text_count += elem.children.iter().filter(|n| n.is_text()).count();
            match elem.kind() {
                ElementKind::Heading => stats.heading_count += 1,
                ElementKind::Image => stats.media_count += 1,
                ElementKind::List => stats.list_count += 1,
                ElementKind::Table => stats.table_count += 1,
                ElementKind::Ignored => stats.ignored_count += 1,
                _ => {}
            }
        }
        stats
    }
}

// =============================================================================
// ElementIterator - depth-first element traversal
// =============================================================================

/// Depth-first iterator over elements
pub struct ElementIterator<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> ElementIterator<'a> {
    fn new(root: &'a Element) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for ElementIterator<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.stack.pop()?;
        // Push children in reverse order so they're visited left-to-right
        for child in elem.children.iter().rev() {
            if let Some(child_elem) = child.as_element() {
                self.stack.push(child_elem);
            }
        }
        Some(elem)
    }
}

// =============================================================================
// Stats - document statistics
// =============================================================================

/// Document statistics collected from traversal
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    pub heading_count: usize,
    pub media_count: usize,
    pub list_count: usize,
    pub table_count: usize,
    pub ignored_count: usize,
    pub text_count: usize,
    pub element_count: usize,
}
