#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn record_triangle(rec: &mut PathRecorder, a: Point, b: Point, c: Point) {
    rec.move_to(a);
    rec.line_to(b);
    rec.line_to(c);
    rec.line_to(a);
}

// =============================================================
// PathRecorder
// =============================================================

#[test]
fn recorder_starts_empty() {
    let rec = PathRecorder::new();
    assert!(rec.commands().is_empty());
    assert_eq!(rec.fill_count(), 0);
    assert_eq!(rec.cut_count(), 0);
}

#[test]
fn recorder_keeps_commands_in_order() {
    let mut rec = PathRecorder::new();
    rec.begin_fill(Color::default());
    rec.move_to(pt(1.0, 2.0));
    rec.line_to(pt(3.0, 4.0));
    rec.fill();
    assert_eq!(
        rec.commands(),
        &[
            PathCommand::BeginFill { color: Color::default() },
            PathCommand::MoveTo { x: 1.0, y: 2.0 },
            PathCommand::LineTo { x: 3.0, y: 4.0 },
            PathCommand::Fill,
        ]
    );
}

#[test]
fn subpaths_split_at_move_to() {
    let mut rec = PathRecorder::new();
    rec.begin_fill(Color::default());
    record_triangle(&mut rec, pt(0.0, 10.0), pt(5.0, 0.0), pt(10.0, 10.0));
    record_triangle(&mut rec, pt(2.5, 5.0), pt(5.0, 10.0), pt(7.5, 5.0));
    rec.fill();

    let subpaths = rec.subpaths();
    assert_eq!(subpaths.len(), 2);
    assert_eq!(subpaths[0].len(), 4);
    assert_eq!(subpaths[1][0], pt(2.5, 5.0));
    assert_eq!(rec.cut_count(), 1);
    assert_eq!(rec.fill_count(), 1);
}

#[test]
fn line_before_move_is_dropped() {
    let mut rec = PathRecorder::new();
    rec.line_to(pt(1.0, 1.0));
    assert!(rec.subpaths().is_empty());
}

#[test]
fn clear_discards_commands() {
    let mut rec = PathRecorder::new();
    rec.fill();
    rec.clear();
    assert!(rec.commands().is_empty());
}

#[test]
fn commands_serialize_with_op_tag() {
    let mut rec = PathRecorder::new();
    rec.begin_fill(Color::rgb(0, 0, 255));
    rec.move_to(pt(1.5, 2.0));
    rec.fill();
    let json: serde_json::Value = serde_json::from_str(&rec.to_json().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "op": "begin_fill", "color": "#0000ff" },
            { "op": "move_to", "x": 1.5, "y": 2.0 },
            { "op": "fill" },
        ])
    );
}

// =============================================================
// PathCounter
// =============================================================

#[test]
fn counter_starts_at_zero() {
    assert_eq!(PathCounter::new(), PathCounter { fills: 0, subpaths: 0, segments: 0 });
}

#[test]
fn counter_tallies_commands() {
    let mut counter = PathCounter::new();
    counter.begin_fill(Color::default());
    counter.move_to(pt(0.0, 0.0));
    counter.line_to(pt(10.0, 0.0));
    counter.line_to(pt(0.0, 10.0));
    counter.move_to(pt(1.0, 1.0));
    counter.line_to(pt(2.0, 2.0));
    counter.fill();
    assert_eq!(counter, PathCounter { fills: 1, subpaths: 2, segments: 3 });
}

// =============================================================
// signed_area
// =============================================================

#[test]
fn signed_area_positive_for_screen_clockwise() {
    // p1 bottom-left -> apex -> bottom-right is clockwise with y down.
    let area = signed_area(&[pt(0.0, 300.0), pt(150.0, 0.0), pt(300.0, 300.0)]);
    assert_eq!(area, 45_000.0);
}

#[test]
fn signed_area_negative_when_reversed() {
    let area = signed_area(&[pt(300.0, 300.0), pt(150.0, 0.0), pt(0.0, 300.0)]);
    assert_eq!(area, -45_000.0);
}

#[test]
fn signed_area_ignores_closing_vertex() {
    let open = signed_area(&[pt(0.0, 10.0), pt(5.0, 0.0), pt(10.0, 10.0)]);
    let closed = signed_area(&[pt(0.0, 10.0), pt(5.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)]);
    assert_eq!(open, closed);
}

#[test]
fn signed_area_degenerate_is_zero() {
    assert_eq!(signed_area(&[pt(0.0, 0.0), pt(1.0, 1.0)]), 0.0);
    assert_eq!(signed_area(&[pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0)]), 0.0);
}
