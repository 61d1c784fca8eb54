//! End-to-end conversion scenarios with deterministic oracles.

use pretty_assertions::assert_eq;
use tola_slides::prelude::*;

type Oracle = fn(&str, f32, &FontSpec) -> Result<f32, MeasureError>;

/// Every fragment renders as exactly one line
fn one_line(_: &str, _: f32, font: &FontSpec) -> Result<f32, MeasureError> {
    Ok(font.line_px())
}

/// Every fragment renders 100px tall
fn hundred(_: &str, _: f32, _: &FontSpec) -> Result<f32, MeasureError> {
    Ok(100.0)
}

/// Height proportional to markup length
fn by_length(markup: &str, _: f32, _: &FontSpec) -> Result<f32, MeasureError> {
    Ok(markup.len() as f32 * 2.0)
}

fn converter(oracle: Oracle) -> Converter<Oracle> {
    Converter::with_oracle(oracle)
}

fn titles(sections: &[Section]) -> Vec<&str> {
    sections.iter().map(|s| s.title.as_str()).collect()
}

fn kinds(section: &Section) -> Vec<ComponentType> {
    section.components.iter().map(|c| c.kind).collect()
}

/// Layout invariants every conversion must satisfy
fn assert_layout_invariants(sections: &[Section], config: &ConvertConfig) {
    let top = config.canvas.padding;
    let bottom = top + config.canvas.content_height();

    for (idx, section) in sections.iter().enumerate() {
        assert_eq!(section.order, idx, "section order");
        assert!(!section.title.is_empty());

        for (pos, component) in section.components.iter().enumerate() {
            assert_eq!(component.order, pos, "component order in {}", section.title);
            assert_eq!(component.kind, component.data.component_type());
            assert_eq!(component.layout.z_index, config.metrics.z_index);
            assert!(component.layout.x >= config.canvas.padding);
            assert!(component.layout.x + component.layout.width <= config.canvas.width - config.canvas.padding);
        }

        for pair in section.components.windows(2) {
            let (a, b) = (&pair[0].layout, &pair[1].layout);
            assert!(a.y <= b.y, "y must not decrease");
            assert!(a.bottom() <= b.y, "vertical spans overlap in {}", section.title);
        }

        let single = section.components.len() == 1;
        for component in &section.components {
            assert!(
                component.layout.bottom() <= bottom || single,
                "{} overflows a shared slide",
                component.kind.name()
            );
        }
    }
}

#[test]
fn heading_and_two_paragraphs_fit_one_slide() {
    let sections = converter(one_line)
        .convert("<h1>Quarterly Review</h1><p>Revenue grew.</p><p>Costs fell.</p>")
        .unwrap();

    assert_eq!(sections.len(), 1);
    let section = &sections[0];
    assert_eq!(section.title, "Quarterly Review");
    assert_eq!(
        kinds(section),
        vec![ComponentType::Heading, ComponentType::Paragraph, ComponentType::Paragraph]
    );
    let orders: Vec<usize> = section.components.iter().map(|c| c.order).collect();
    assert_eq!(orders, vec![0, 1, 2]);

    // heading floor 50 + 8, paragraph floor 27 + 8, spacing 20
    let ys: Vec<f32> = section.components.iter().map(|c| c.layout.y).collect();
    assert_eq!(ys, vec![40.0, 118.0, 173.0]);
    assert_layout_invariants(&sections, &ConvertConfig::default());
}

#[test]
fn long_list_is_one_block_on_its_own_slide() {
    let items: String = (0..50).map(|i| format!("<li>Item {i}</li>")).collect();
    let markup = format!("<p>Before the list</p><ul>{items}</ul><p>After the list</p>");
    let (sections, stats) = converter(one_line).convert_with_stats(&markup).unwrap();

    assert_eq!(sections.len(), 3);
    assert_eq!(kinds(&sections[1]), vec![ComponentType::List]);

    let list = &sections[1].components[0];
    match &list.data {
        ComponentData::List { ordered, items } => {
            assert!(!ordered);
            assert_eq!(items.len(), 50);
        }
        other => panic!("expected a list, got {other:?}"),
    }
    // 50 lines of 27 + 49 gaps of 8 + padding 16 + margin 4
    assert_eq!(list.layout.height, 1762.0);
    assert_eq!(list.layout.y, 40.0);
    assert_eq!(stats.over_height, 1);
    assert_eq!(titles(&sections), vec!["Slide 1", "Slide 1 (Part 2)", "Slide 1 (Part 3)"]);
    assert_layout_invariants(&sections, &ConvertConfig::default());
}

#[test]
fn ten_paragraphs_split_into_two_parts() {
    let body: String = (1..=10).map(|i| format!("<p>Paragraph number {i}</p>\n")).collect();
    let markup = format!("<section><h2>Findings</h2>{body}</section>");
    let sections = converter(hundred).convert(&markup).unwrap();

    // heading 104, then paragraphs of 104 with 20 spacing: five blocks per slide
    assert_eq!(titles(&sections), vec!["Findings", "Findings (Part 2)", "Findings (Part 3)"]);
    let paragraphs: usize = sections
        .iter()
        .map(|s| s.components_of(ComponentType::Paragraph).count())
        .sum();
    assert_eq!(paragraphs, 10);

    let without_heading: String = (1..=10).map(|i| format!("<p>Paragraph number {i}</p>")).collect();
    let sections = converter(hundred).convert(&without_heading).unwrap();
    assert_eq!(titles(&sections), vec!["Slide 1", "Slide 1 (Part 2)"]);
    assert_eq!(sections[0].components.len() + sections[1].components.len(), 10);
    assert_eq!(sections[1].components[0].layout.y, 40.0);
    assert_layout_invariants(&sections, &ConvertConfig::default());
}

#[test]
fn empty_div_yields_single_empty_section() {
    let sections = converter(one_line).convert("<div></div>").unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "Slide 1");
    assert!(sections[0].components.is_empty());

    let sections = converter(one_line).convert("<p>Real content</p><div>  </div>").unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(kinds(&sections[0]), vec![ComponentType::Paragraph]);
}

#[test]
fn three_row_table_height() {
    let markup = "<table>\
        <tr><th>Region</th><th>Sales</th></tr>\
        <tr><td>North</td><td>12</td></tr>\
        <tr><td>South</td><td>9</td></tr>\
    </table>";
    let sections = converter(one_line).convert(markup).unwrap();
    let table = &sections[0].components[0];

    assert_eq!(table.kind, ComponentType::Table);
    assert_eq!(table.layout.height, 3.0 * 40.0 + 16.0);
    assert_eq!(table.layout.width, 960.0);
    match &table.data {
        ComponentData::Table { rows, has_header } => {
            assert!(has_header);
            assert_eq!(rows[1], vec!["North".to_string(), "12".to_string()]);
        }
        other => panic!("expected a table, got {other:?}"),
    }
}

#[test]
fn image_without_size_uses_defaults() {
    let sections = converter(one_line)
        .convert(r#"<figure><img src="chart.png" alt="Chart"></figure>"#)
        .unwrap();
    let image = &sections[0].components[0];
    assert_eq!(image.kind, ComponentType::Image);
    assert_eq!((image.layout.width, image.layout.height), (640.0, 360.0));
}

#[test]
fn empty_list_yields_no_component() {
    let sections = converter(one_line)
        .convert("<ul class=\"todo\"><!-- nothing yet --></ul><p>Notes follow</p>")
        .unwrap();
    assert_eq!(kinds(&sections[0]), vec![ComponentType::Paragraph]);
}

#[test]
fn overflow_boundaries_follow_cumulative_heights() {
    let config = ConvertConfig::default();
    let limit = config.canvas.content_height();
    let spacing = config.metrics.block_spacing;

    let body: String = (0..24)
        .map(|i| format!("<p>{}</p>", "word ".repeat(5 + (i * 7) % 23)))
        .collect();
    let sections = converter(by_length).convert(&body).unwrap();
    assert!(sections.len() > 1);
    assert_layout_invariants(&sections, &config);

    for pair in sections.windows(2) {
        let last = pair[0].components.last().unwrap();
        let next = &pair[1].components[0];
        let used = last.layout.bottom() - config.canvas.padding;
        assert!(used + spacing + next.layout.height > limit, "block fit but started a new slide");
    }
    let total: usize = sections.iter().map(|s| s.components.len()).sum();
    assert_eq!(total, 24);
}

#[test]
fn slide_wrappers_are_independent_regions() {
    let markup = r#"
        <p>Outside any slide</p>
        <section class="slide" data-title="Welcome"><p>Opening remarks for everyone</p></section>
        <div data-slide><h2>Second</h2><p>Details</p></div>
        <section class="slide"><p>Untitled slide body</p></section>
    "#;
    let (sections, stats) = converter(one_line).convert_with_stats(markup).unwrap();

    assert_eq!(stats.regions, 3);
    assert_eq!(titles(&sections), vec!["Welcome", "Second", "Slide 3"]);
    let texts: Vec<String> = sections
        .iter()
        .flat_map(|s| s.components.iter())
        .filter_map(|c| match &c.data {
            ComponentData::Paragraph { markup } => Some(markup.clone()),
            _ => None,
        })
        .collect();
    assert!(!texts.iter().any(|t| t.contains("Outside")));
}

#[test]
fn layout_wrappers_dissolve_and_deep_nesting_atomizes() {
    let markup = r#"
        <div class="grid grid-cols-2">
            <div><h3>Left</h3><p>Left column text</p></div>
            <div><h3>Right</h3><p>Right column text</p></div>
        </div>
        <div><div><div><div><p>Deep one</p><p>Deep two</p></div></div></div></div>
    "#;
    let sections = converter(one_line).convert(markup).unwrap();
    assert_eq!(
        kinds(&sections[0]),
        vec![
            ComponentType::Heading,
            ComponentType::Paragraph,
            ComponentType::Heading,
            ComponentType::Paragraph,
            ComponentType::CustomFragment,
        ]
    );
    assert_eq!(sections[0].title, "Left");
}

#[test]
fn quote_and_code_blocks() {
    let markup = r#"
        <blockquote><p>Simplicity is prerequisite for reliability.</p><footer>— Dijkstra</footer></blockquote>
        <pre><code class="language-rust">fn main() {
    println!("hi");
}
</code></pre>
    "#;
    let sections = converter(one_line).convert(markup).unwrap();
    let components = &sections[0].components;

    match &components[0].data {
        ComponentData::Quote { attribution, .. } => assert_eq!(attribution.as_deref(), Some("Dijkstra")),
        other => panic!("expected a quote, got {other:?}"),
    }
    assert_eq!(components[0].layout.width, 840.0);

    match &components[1].data {
        ComponentData::Code { code, language } => {
            assert_eq!(code.lines().count(), 3);
            assert_eq!(language.as_deref(), Some("rust"));
        }
        other => panic!("expected code, got {other:?}"),
    }
    assert_eq!(components[1].layout.height, 3.0 * 22.0 + 32.0);
}

#[test]
fn conversion_is_deterministic() {
    let markup = "<h1>Same</h1><p>Input twice</p><ul><li>a item</li></ul>";
    let first = convert(markup).unwrap();
    let second = convert(markup).unwrap();
    assert_eq!(first, second);

    let other = convert("<h1>Different</h1>").unwrap();
    assert_ne!(first[0].id, other[0].id);
}

#[test]
fn deeply_nested_markup_converts() {
    let depth = 20_000;
    let markup = format!(
        "{}<p>deep text here</p>{}",
        "<div>".repeat(depth),
        "</div>".repeat(depth)
    );
    let sections = converter(one_line).convert(&markup).unwrap();

    assert_eq!(sections.len(), 1);
    assert_eq!(kinds(&sections[0]), vec![ComponentType::CustomFragment]);
    match &sections[0].components[0].data {
        ComponentData::CustomFragment { markup } => assert!(markup.contains("deep text here")),
        other => panic!("expected a fragment, got {other:?}"),
    }
}

#[test]
fn image_inside_textless_heading_is_kept() {
    let sections = converter(one_line)
        .convert(r#"<h1><img src="logo.png" alt="Logo"></h1><p>Welcome aboard</p>"#)
        .unwrap();
    assert_eq!(
        kinds(&sections[0]),
        vec![ComponentType::Image, ComponentType::Paragraph]
    );
    assert_eq!(sections[0].title, "Slide 1");
}

#[test]
fn huge_image_dimensions_stay_finite() {
    let sections = convert(r#"<img src="a.png" width="1e38" height="1e38">"#).unwrap();
    let layout = sections[0].components[0].layout;
    assert_eq!((layout.width, layout.height), (1200.0, 1200.0));

    let value = serde_json::to_value(&sections).unwrap();
    let back: Vec<Section> = serde_json::from_value(value).unwrap();
    assert_eq!(back, sections);
}

#[test]
fn json_shape() {
    let sections = converter(one_line).convert("<h2>Shape</h2><p>Check the JSON</p>").unwrap();
    let value = serde_json::to_value(&sections).unwrap();

    let section = &value[0];
    assert_eq!(section["title"], "Shape");
    assert_eq!(section["order"], 0);
    assert!(section["id"].is_string());

    let heading = &section["components"][0];
    assert_eq!(heading["type"], "heading");
    assert_eq!(heading["data"]["level"], 2);
    assert_eq!(heading["layout"]["zIndex"], 1);
    assert_eq!(heading["layout"]["y"], 40.0);

    let back: Vec<Section> = serde_json::from_value(value).unwrap();
    assert_eq!(back, sections);
}

#[test]
fn oracle_failure_aborts_conversion() {
    let failing: Oracle = |_, _, _| Err(MeasureError::new("layout surface unavailable"));
    let result = converter(failing).convert("<p>Needs measuring</p>");
    assert!(matches!(result, Err(SlideError::Measure(_))));

    // Fixed-formula blocks never reach the oracle
    let sections = converter(failing).convert("<pre>x = 1</pre>").unwrap();
    assert_eq!(kinds(&sections[0]), vec![ComponentType::Code]);
}
