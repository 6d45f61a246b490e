#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::element::{Border, ElementKind};
use crate::geom::{Point, Rect};
use crate::services::{BorderRadius, StaticLayout};

// =============================================================
// Helpers
// =============================================================

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn make_element(kind: ElementKind) -> SlideElement {
    SlideElement {
        id: Uuid::new_v4(),
        kind,
        x: 0.1,
        y: 0.1,
        container_width: 0.2,
        container_height: 0.2,
        rotation: 0.0,
        is_locked: false,
        border: Border { radius: 0.5, width: 0.0 },
        // 20px on a 500px-tall canvas
        font_size: 0.04,
    }
}

fn canvas() -> CanvasDimensions {
    CanvasDimensions::new(1000.0, 500.0)
}

fn resize_event(target: Uuid, width: f64, height: f64) -> ResizeEvent {
    ResizeEvent {
        target,
        width,
        height,
        offset_width: width,
        offset_height: height,
        transform: "translate(4px, 6px)".into(),
        direction: Direction::new(1, 1),
        position: Point::new(4.0, 6.0),
        target_bounds: None,
        parent_bounds: Some(Rect::new(0.0, 0.0, 1000.0, 500.0)),
        has_inner_content: true,
    }
}

fn services_with_editor(el: &SlideElement) -> Services {
    let mut layout = StaticLayout::default();
    layout.editors.insert(el.id);
    Services::from(layout)
}

fn ctx(services: &Services, keep_ratio: bool, start_width: f64) -> ResizeContext<'_> {
    ResizeContext {
        canvas: canvas(),
        keep_ratio,
        text_padding: 0.0,
        gesture: GestureContext::started(start_width),
        services,
    }
}

// =============================================================
// ratio_locked
// =============================================================

#[test]
fn edge_handles_never_lock() {
    let shift = Modifiers { shift: true, ..Default::default() };
    for kind in [ElementKind::Text, ElementKind::Media] {
        let el = make_element(kind);
        assert!(!ratio_locked(Direction::new(1, 0), &el, Modifiers::default()));
        assert!(!ratio_locked(Direction::new(-1, 0), &el, shift));
    }
}

#[test]
fn text_corner_always_locks() {
    let el = make_element(ElementKind::Text);
    assert!(ratio_locked(Direction::new(1, 1), &el, Modifiers::default()));
    assert!(ratio_locked(Direction::new(-1, -1), &el, Modifiers { shift: true, ..Default::default() }));
}

#[test]
fn media_corner_shift_unlocks() {
    let el = make_element(ElementKind::Media);
    assert!(ratio_locked(Direction::new(1, -1), &el, Modifiers::default()));
    assert!(!ratio_locked(Direction::new(1, -1), &el, Modifiers { shift: true, ..Default::default() }));
}

// =============================================================
// scaled_font_size
// =============================================================

#[test]
fn scaled_font_size_is_proportional() {
    assert_eq!(scaled_font_size(300.0, 20.0, 200.0), Some(30.0));
    assert_eq!(scaled_font_size(100.0, 20.0, 200.0), Some(10.0));
}

#[test]
fn scaled_font_size_without_start_width() {
    assert_eq!(scaled_font_size(300.0, 20.0, 0.0), None);
}

// =============================================================
// compute_resize_effect: text
// =============================================================

#[test]
fn text_locked_scales_font_with_width() {
    let el = make_element(ElementKind::Text);
    let services = services_with_editor(&el);
    let effect = compute_resize_effect(&resize_event(el.id, 300.0, 40.0), &el, &ctx(&services, true, 200.0));

    let font = effect.font_size_px.unwrap();
    assert!(approx(font, 30.0), "got {font}");
    assert_eq!(effect.editor_font_size_px, effect.font_size_px);
    assert_eq!(effect.preview.get("width"), Some("300px"));
    assert_eq!(effect.preview.get("height"), Some("auto"));
    assert_eq!(effect.preview.get("transform-origin"), Some("bottom left"));
    assert_eq!(effect.preview.get("transform"), Some("translate(4px, 6px)"));
    assert!(effect.inner_preview.is_none());
}

#[test]
fn text_locked_subtracts_padding() {
    let el = make_element(ElementKind::Text);
    let services = services_with_editor(&el);
    let mut c = ctx(&services, true, 200.0);
    c.text_padding = 10.0;
    let effect = compute_resize_effect(&resize_event(el.id, 320.0, 40.0), &el, &c);
    assert!(approx(effect.font_size_px.unwrap(), 30.0));
}

#[test]
fn text_locked_without_editor_only_resizes_box() {
    let el = make_element(ElementKind::Text);
    let services = Services::from(StaticLayout::default());
    let effect = compute_resize_effect(&resize_event(el.id, 300.0, 40.0), &el, &ctx(&services, true, 200.0));
    assert!(effect.font_size_px.is_none());
    assert!(effect.editor_font_size_px.is_none());
    assert_eq!(effect.preview.get("height"), Some("40px"));
}

#[test]
fn text_locked_without_start_width_keeps_font() {
    let el = make_element(ElementKind::Text);
    let services = services_with_editor(&el);
    let effect = compute_resize_effect(&resize_event(el.id, 300.0, 40.0), &el, &ctx(&services, true, 0.0));
    assert!(effect.font_size_px.is_none());
}

#[test]
fn text_unlocked_keeps_font_size() {
    let el = make_element(ElementKind::Text);
    let services = services_with_editor(&el);
    let effect = compute_resize_effect(&resize_event(el.id, 500.0, 40.0), &el, &ctx(&services, false, 200.0));
    assert!(approx(effect.font_size_px.unwrap(), 20.0));
    assert!(effect.editor_font_size_px.is_none());
    assert_eq!(effect.preview.get("width"), Some("500px"));
    assert_eq!(effect.preview.get("height"), Some("auto"));
    assert!(effect.preview.get("transform-origin").is_none());
}

// =============================================================
// compute_resize_effect: media
// =============================================================

struct QuarterRadius;

impl BorderRadius for QuarterRadius {
    fn radius_px(&self, min_side: f64, radius: f64) -> f64 {
        min_side * radius / 4.0
    }
}

#[test]
fn media_radius_uses_smaller_side() {
    let el = make_element(ElementKind::Media);
    let services = Services::from(StaticLayout::default()).with_borders(QuarterRadius);
    let effect = compute_resize_effect(&resize_event(el.id, 400.0, 120.0), &el, &ctx(&services, true, 0.0));
    // min(400, 120) * 0.5 / 4
    assert_eq!(effect.preview.get("border-radius"), Some("15px"));
    assert!(effect.font_size_px.is_none());
}

#[test]
fn media_inner_layout_uses_normalized_size() {
    struct Probe;
    impl crate::services::MediaLayout for Probe {
        fn content_style(&self, canvas: CanvasDimensions, element: &SlideElement, container: Size) -> StyleMap {
            [
                ("canvas", format!("{}x{}", canvas.width, canvas.height)),
                ("normalized", format!("{}x{}", element.container_width, element.container_height)),
                ("container", format!("{}x{}", container.width, container.height)),
            ]
            .into_iter()
            .collect()
        }
    }

    let el = make_element(ElementKind::Media);
    let services = Services::from(StaticLayout::default()).with_media(Probe);
    let effect = compute_resize_effect(&resize_event(el.id, 250.0, 100.0), &el, &ctx(&services, true, 0.0));
    let inner = effect.inner_preview.unwrap();
    assert_eq!(inner.get("canvas"), Some("1000x500"));
    assert_eq!(inner.get("normalized"), Some("0.25x0.2"));
    assert_eq!(inner.get("container"), Some("250x100"));
}

#[test]
fn media_without_parent_bounds_skips_inner_layout() {
    let el = make_element(ElementKind::Media);
    let services = Services::from(StaticLayout::default());
    let mut ev = resize_event(el.id, 250.0, 100.0);
    ev.parent_bounds = None;
    let effect = compute_resize_effect(&ev, &el, &ctx(&services, true, 0.0));
    assert!(effect.inner_preview.is_none());
    assert!(effect.preview.get("border-radius").is_some());
}

#[test]
fn media_without_inner_node_skips_inner_layout() {
    let el = make_element(ElementKind::Media);
    let services = Services::from(StaticLayout::default());
    let mut ev = resize_event(el.id, 250.0, 100.0);
    ev.has_inner_content = false;
    let effect = compute_resize_effect(&ev, &el, &ctx(&services, true, 0.0));
    assert!(effect.inner_preview.is_none());
}

// =============================================================
// committed_font_size
// =============================================================

#[test]
fn committed_font_size_normalizes_last_px() {
    let el = make_element(ElementKind::Text);
    let services = Services::from(StaticLayout::default());
    let gesture = GestureContext { start_width_px: 200.0, last_font_size_px: Some(30.0) };
    let size = committed_font_size(&el, Some(&gesture), canvas(), &services).unwrap();
    assert!(approx(size, 0.06));
}

#[test]
fn committed_font_size_falls_back_to_current() {
    let el = make_element(ElementKind::Text);
    let services = Services::from(StaticLayout::default());
    assert_eq!(committed_font_size(&el, None, canvas(), &services), Some(0.04));
    let idle = GestureContext::started(200.0);
    assert_eq!(committed_font_size(&el, Some(&idle), canvas(), &services), Some(0.04));
}

#[test]
fn committed_font_size_media_is_none() {
    let el = make_element(ElementKind::Media);
    let services = Services::from(StaticLayout::default());
    let gesture = GestureContext { start_width_px: 200.0, last_font_size_px: Some(30.0) };
    assert!(committed_font_size(&el, Some(&gesture), canvas(), &services).is_none());
}
