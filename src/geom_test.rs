#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Rect
// =============================================================

#[test]
fn rect_right_and_bottom() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.bottom(), 60.0);
}

#[test]
fn rect_percent_relative_to_origin() {
    let r = Rect::new(100.0, 50.0, 400.0, 200.0);
    assert_eq!(r.x_percent(100.0), 0.0);
    assert_eq!(r.x_percent(300.0), 50.0);
    assert_eq!(r.y_percent(250.0), 100.0);
}

#[test]
fn rect_degenerate_when_empty() {
    assert!(Rect::new(0.0, 0.0, 0.0, 10.0).is_degenerate());
    assert!(Rect::new(0.0, 0.0, 10.0, 0.0).is_degenerate());
    assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_degenerate());
}

// =============================================================
// Size
// =============================================================

#[test]
fn size_min_side() {
    assert_eq!(Size::new(300.0, 120.0).min_side(), 120.0);
    assert_eq!(Size::new(80.0, 120.0).min_side(), 80.0);
}

// =============================================================
// CanvasDimensions
// =============================================================

#[test]
fn canvas_normalize_divides_by_dimensions() {
    let canvas = CanvasDimensions::new(1000.0, 500.0);
    let n = canvas.normalize(Size::new(250.0, 250.0)).unwrap();
    assert_eq!(n.width, 0.25);
    assert_eq!(n.height, 0.5);
}

#[test]
fn canvas_normalize_empty_canvas_is_none() {
    let canvas = CanvasDimensions::default();
    assert!(canvas.normalize(Size::new(10.0, 10.0)).is_none());
}

#[test]
fn canvas_from_rect() {
    let canvas = CanvasDimensions::from(Rect::new(5.0, 5.0, 640.0, 360.0));
    assert_eq!(canvas, CanvasDimensions::new(640.0, 360.0));
}
