use super::*;
use crate::geometry::{Triangle, TriangleOptions};
use crate::render::render;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn path_data_uses_move_and_line_segments() {
    let mut svg = SvgPath::new();
    svg.begin_fill(Color::rgb(0, 0, 0));
    svg.move_to(pt(0.0, 10.0));
    svg.line_to(pt(5.0, 0.0));
    svg.line_to(pt(10.5, 10.0));
    svg.fill();

    assert_eq!(svg.elements().len(), 1);
    assert_eq!(svg.elements()[0].data, "M0 10 L5 0 L10.5 10");
    assert_eq!(svg.elements()[0].fill, Color::rgb(0, 0, 0));
}

#[test]
fn segments_outside_a_fill_are_ignored() {
    let mut svg = SvgPath::new();
    svg.move_to(pt(1.0, 1.0));
    svg.fill();
    assert!(svg.elements().is_empty());
}

#[test]
fn each_fill_becomes_its_own_element() {
    let mut svg = SvgPath::new();
    for color in [Color::rgb(255, 0, 0), Color::rgb(0, 255, 0)] {
        svg.begin_fill(color);
        svg.move_to(pt(0.0, 0.0));
        svg.fill();
    }
    let fills = svg.elements().iter().map(|e| e.fill).collect::<Vec<_>>();
    assert_eq!(fills, vec![Color::rgb(255, 0, 0), Color::rgb(0, 255, 0)]);
}

#[test]
fn document_declares_size_and_nonzero_rule() {
    let mut svg = SvgPath::new();
    svg.begin_fill(Color::rgb(255, 0, 0));
    svg.move_to(pt(0.0, 0.0));
    svg.fill();

    let doc = svg.to_document(640.0, 480.0);
    assert!(doc.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"640\" height=\"480\""));
    assert!(doc.contains("viewBox=\"0 0 640 480\""));
    assert!(doc.contains(r##"<path fill="#ff0000" fill-rule="nonzero" d="M0 0"/>"##));
    assert!(doc.trim_end().ends_with("</svg>"));
}

#[test]
fn rendered_fractal_is_one_path_with_many_subpaths() {
    let tri = Triangle::new(pt(0.0, 300.0), pt(150.0, 0.0), pt(300.0, 300.0), TriangleOptions::default());
    let mut svg = SvgPath::new();
    let stats = render(&tri, 300.0, 300.0, &mut svg);

    assert_eq!(svg.elements().len(), 1);
    let moves = svg.elements()[0].data.matches('M').count() as u64;
    assert_eq!(moves, stats.cuts + 1);
}
