//! Table family: `<table>`.

use crate::attr::Attrs;
use crate::classify::{Classifier, Decision};
use crate::error::SlideResult;
use crate::family::Family;
use crate::measure::Measure;
use crate::model::{Block, ComponentData};
use crate::node::Element;
use crate::render::{RenderConfig, render_inner};

/// Table family.
pub struct TableFamily;

impl Family for TableFamily {
    const NAME: &'static str = "table";

    fn identify(tag: &str, _attrs: &Attrs) -> bool {
        tag == "table"
    }
}

/// Rows of a table in document order, with the header flag.
///
/// Rows come from the table itself and its `thead`/`tbody`/`tfoot`
/// sections; nested tables are cells, not rows. The table has a header
/// when it has a non-empty `thead` or its first row is all `th`.
pub fn collect_rows(table: &Element) -> (Vec<Vec<String>>, bool) {
    let mut rows = Vec::new();
    let mut has_thead = false;

    for child in table.children_elements() {
        match child.tag.as_str() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => {
                let section: Vec<&Element> =
                    child.children_elements().filter(|e| e.tag == "tr").collect();
                has_thead |= child.tag == "thead" && !section.is_empty();
                rows.extend(section);
            }
            _ => {}
        }
    }

    let first_row_all_th = rows.first().is_some_and(|tr| {
        let mut cells = tr.children_elements().filter(|c| is_cell(c)).peekable();
        cells.peek().is_some() && cells.all(|c| c.tag == "th")
    });

    let rows = rows
        .into_iter()
        .map(|tr| {
            tr.children_elements()
                .filter(|c| is_cell(c))
                .map(|cell| render_inner(cell, &RenderConfig::CLEAN))
                .collect()
        })
        .collect();
    (rows, has_thead || first_row_all_th)
}

fn is_cell(elem: &Element) -> bool {
    matches!(elem.tag.as_str(), "td" | "th")
}

/// Reading-width block sized by row count, never measured
pub fn build<M: Measure + ?Sized>(elem: &Element, cx: &Classifier<'_, M>) -> SlideResult<Decision> {
    let (rows, has_header) = collect_rows(elem);
    if rows.is_empty() {
        return Ok(Decision::Reject);
    }

    let width = cx.content_width().min(cx.config().metrics.max_reading_width);
    let height = cx.estimator().table_height(rows.len());
    let data = ComponentData::Table { rows, has_header };
    Ok(Decision::Atomize(Block::new(data, cx.content_x(), width, height)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConvertConfig;
    use crate::measure::{HeightEstimator, MeasureCache, TextMetrics};

    fn decide(elem: &Element) -> Decision {
        let config = ConvertConfig::default();
        let cache = MeasureCache::new();
        let oracle = TextMetrics::new();
        let cx = Classifier::new(HeightEstimator::new(&oracle, &cache, &config));
        build(elem, &cx).unwrap()
    }

    fn row(tag: &str, cells: &[&str]) -> Element {
        cells
            .iter()
            .fold(Element::new("tr"), |tr, text| tr.child(Element::new(tag).text(*text)))
    }

    #[test]
    fn test_three_row_table() {
        let elem = Element::new("table")
            .child(Element::new("thead").child(row("th", &["Name", "Score"])))
            .child(
                Element::new("tbody")
                    .child(row("td", &["Ada", "10"]))
                    .child(row("td", &["Linus", "9"])),
            );
        let decision = decide(&elem);
        let block = decision.block().unwrap();

        assert_eq!(block.height, 3.0 * 40.0 + 16.0);
        assert_eq!((block.x, block.width), (40.0, 960.0));
        match &block.data {
            ComponentData::Table { rows, has_header } => {
                assert!(*has_header);
                assert_eq!(rows[2], vec!["Linus".to_string(), "9".to_string()]);
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn test_header_from_first_row() {
        let elem = Element::new("table")
            .child(row("th", &["A"]))
            .child(row("td", &["1"]));
        let (rows, has_header) = collect_rows(&elem);
        assert_eq!(rows.len(), 2);
        assert!(has_header);

        let plain = Element::new("table").child(row("td", &["1"]));
        assert!(!collect_rows(&plain).1);
    }

    #[test]
    fn test_nested_table_rows_not_counted() {
        let inner = Element::new("table").child(row("td", &["inner"]));
        let elem = Element::new("table")
            .child(Element::new("tr").child(Element::new("td").child(inner)));
        assert_eq!(collect_rows(&elem).0.len(), 1);
    }

    #[test]
    fn test_empty_table_rejected() {
        let elem = Element::new("table").child(Element::new("caption").text("Nothing here"));
        assert!(decide(&elem).is_reject());
    }
}
