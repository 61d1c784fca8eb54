//! Slide regions
//!
//! A region is a subtree paginated on its own. Explicit slide wrappers
//! (outermost only, document order) each form one region; without any
//! wrapper the whole document is a single region.

use crate::attr::AttrsExt;
use crate::config::RegionPolicy;
use crate::families::heading::HeadingFamily;
use crate::family::{ElementKind, Family};
use crate::node::{Document, Element};

/// One independently paginated subtree
#[derive(Debug, Clone, Copy)]
pub struct Region<'a> {
    pub root: &'a Element,
    /// Whether `root` is an explicit slide wrapper
    pub explicit: bool,
}

impl<'a> Region<'a> {
    /// Title used when no heading block lands in the region.
    ///
    /// The wrapper's title attributes first, then the text of the first
    /// heading anywhere below the root (it may sit inside an atomized
    /// fragment).
    pub fn fallback_title(&self, policy: &RegionPolicy) -> Option<String> {
        if self.explicit {
            let attr = policy
                .title_attrs
                .iter()
                .find_map(|name| self.root.attrs.get_nonempty(name));
            if let Some(title) = attr {
                return Some(title.to_string());
            }
        }
        self.root
            .find_descendant(|e| HeadingFamily::identify(&e.tag, &e.attrs))
            .map(Element::clean_text)
            .filter(|text| !text.is_empty())
    }
}

/// Check if `elem` marks an explicit slide boundary
pub fn is_slide_wrapper(elem: &Element, policy: &RegionPolicy) -> bool {
    (!policy.slide_class.is_empty() && elem.has_class(&policy.slide_class))
        || (!policy.slide_attr.is_empty() && elem.has_attr(&policy.slide_attr))
}

/// Find the regions of a document
pub fn find_regions<'a>(doc: &'a Document, policy: &RegionPolicy) -> Vec<Region<'a>> {
    let mut wrappers = Vec::new();
    collect_wrappers(&doc.root, policy, &mut wrappers);

    if wrappers.is_empty() {
        return vec![Region {
            root: &doc.root,
            explicit: false,
        }];
    }
    wrappers
        .into_iter()
        .map(|root| Region {
            root,
            explicit: true,
        })
        .collect()
}

fn collect_wrappers<'a>(elem: &'a Element, policy: &RegionPolicy, out: &mut Vec<&'a Element>) {
    for child in elem.children_elements() {
        if child.kind() == ElementKind::Ignored {
            continue;
        }
        if is_slide_wrapper(child, policy) {
            out.push(child);
        } else {
            collect_wrappers(child, policy, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(title: &str) -> Element {
        Element::new("section")
            .attr("class", "slide dark")
            .child(Element::new("h2").text(title))
    }

    #[test]
    fn test_no_wrappers_single_region() {
        let doc = Document::new(Element::new("body").child(Element::new("p").text("Hello")));
        let regions = find_regions(&doc, &RegionPolicy::default());
        assert_eq!(regions.len(), 1);
        assert!(!regions[0].explicit);
        assert_eq!(regions[0].root.tag, "body");
    }

    #[test]
    fn test_outermost_wrappers_in_order() {
        let nested = slide("Outer").child(slide("Inner"));
        let doc = Document::new(
            Element::new("body")
                .child(Element::new("main").child(nested))
                .child(Element::new("div").attr("data-slide", "").child(Element::new("p").text("x")))
                .child(Element::new("template").child(slide("Hidden"))),
        );
        let regions = find_regions(&doc, &RegionPolicy::default());
        assert_eq!(regions.len(), 2);
        assert!(regions.iter().all(|r| r.explicit));
        assert_eq!(regions[1].root.tag, "div");
    }

    #[test]
    fn test_fallback_title() {
        let policy = RegionPolicy::default();
        let root = slide("Heading text").attr("data-title", "Attr title");
        let titled = Region {
            root: &root,
            explicit: true,
        };
        assert_eq!(titled.fallback_title(&policy).as_deref(), Some("Attr title"));

        let root = slide("  Heading \n text ");
        let from_heading = Region {
            root: &root,
            explicit: true,
        };
        assert_eq!(from_heading.fallback_title(&policy).as_deref(), Some("Heading text"));

        let bare = Element::new("section").child(Element::new("p").text("no heading"));
        let untitled = Region {
            root: &bare,
            explicit: true,
        };
        assert_eq!(untitled.fallback_title(&policy), None);
    }

    #[test]
    fn test_is_slide_wrapper() {
        let policy = RegionPolicy::default();
        assert!(is_slide_wrapper(&Element::new("div").attr("class", "slide"), &policy));
        assert!(!is_slide_wrapper(&Element::new("div").attr("class", "slideshow"), &policy));
        assert!(is_slide_wrapper(&Element::new("div").attr("data-slide", "3"), &policy));
    }
}
