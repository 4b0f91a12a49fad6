//! Benchmarks for the navigation parsing pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use navtree::{
    ContentElement, ExtractOptions, HeadingLevel, NavConfig, collect_elements, decorate_header,
    parse_heading_structure, parse_html,
};

const NAV_HTML: &str = include_str!("../tests/fixtures/nav.plain.html");

/// A wide synthetic menu: 12 top-level items, each four levels deep.
fn synthetic_elements() -> Vec<ContentElement> {
    let mut elements = Vec::new();
    for i in 0..12 {
        elements.push(ContentElement::heading(HeadingLevel::L1, format!("Section {i}")));
        elements.push(ContentElement::paragraph("Section description"));
        for j in 0..6 {
            elements.push(ContentElement::linked_heading(
                HeadingLevel::L2,
                format!("Group {j}"),
                format!("/s{i}/g{j}"),
            ));
            for k in 0..4 {
                elements.push(ContentElement::heading(HeadingLevel::L3, format!("Item {k}")));
                for l in 0..3 {
                    elements.push(ContentElement::linked_heading(
                        HeadingLevel::L4,
                        format!("Leaf {l}"),
                        format!("/s{i}/g{j}/i{k}/l{l}"),
                    ));
                }
                elements.push(ContentElement::linked_paragraph("Overview", "/overview"));
            }
        }
    }
    elements
}

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn bench_parse_structure(c: &mut Criterion) {
    let elements = synthetic_elements();
    c.bench_function("parse_heading_structure", |b| {
        b.iter(|| parse_heading_structure(&elements));
    });
}

fn bench_collect_elements(c: &mut Criterion) {
    let dom = parse_html(NAV_HTML);
    let main = dom.find_by_tag("main").unwrap();
    let options = ExtractOptions::default();
    c.bench_function("collect_elements", |b| {
        b.iter(|| collect_elements(&dom, main, &options));
    });
}

fn bench_decorate_header(c: &mut Criterion) {
    let config = NavConfig::default();
    c.bench_function("decorate_header", |b| {
        b.iter(|| decorate_header(NAV_HTML, &config).unwrap());
    });
}

criterion_group!(
    benches,
    bench_parse_structure,
    bench_collect_elements,
    bench_decorate_header,
);
criterion_main!(benches);
