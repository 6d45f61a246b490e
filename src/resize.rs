//! Resize math: ratio locking, text font scaling, and preview styling.
//!
//! Everything here is pure. [`compute_resize_effect`] turns one widget resize
//! frame into the preview the host should apply, given the element and the
//! gesture context recorded at resize start. Nothing is persisted until the
//! gesture ends.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use tracing::{debug, warn};

use crate::consts::TEXT_SCALE_ORIGIN;
use crate::element::SlideElement;
use crate::event::ResizeEvent;
use crate::geom::{CanvasDimensions, Size};
use crate::input::{Direction, Modifiers};
use crate::services::Services;
use crate::style::StyleMap;

/// Per-element state threaded from resize start to resize end.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureContext {
    /// Rendered width of the target when the gesture started, in px.
    pub start_width_px: f64,
    /// Font size computed by the latest resize frame, in px.
    pub last_font_size_px: Option<f64>,
}

impl GestureContext {
    #[must_use]
    pub fn started(start_width_px: f64) -> Self {
        Self { start_width_px, last_font_size_px: None }
    }
}

/// Whether a resize starting on `direction` keeps the aspect ratio.
///
/// Edge handles never lock. Corner handles always lock text; for other
/// elements shift inverts the default lock.
#[must_use]
pub fn ratio_locked(direction: Direction, element: &SlideElement, modifiers: Modifiers) -> bool {
    if direction.is_edge() {
        false
    } else if element.is_text() {
        true
    } else {
        !modifiers.shift
    }
}

/// Font size after a ratio-locked text resize: the new content width scaled
/// by the font-to-width ratio at gesture start.
///
/// Returns `None` when no start width was recorded.
#[must_use]
pub fn scaled_font_size(content_width: f64, start_font_px: f64, start_width_px: f64) -> Option<f64> {
    if start_width_px <= 0.0 {
        return None;
    }
    Some(content_width * start_font_px / start_width_px)
}

/// Inputs shared by every frame of one resize gesture.
pub struct ResizeContext<'a> {
    pub canvas: CanvasDimensions,
    pub keep_ratio: bool,
    /// Horizontal text editor padding per side, in px.
    pub text_padding: f64,
    pub gesture: GestureContext,
    pub services: &'a Services,
}

/// Preview produced by one resize frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResizeEffect {
    /// Style for the element container.
    pub preview: StyleMap,
    /// Style for the inner media content node, when it was recomputed.
    pub inner_preview: Option<StyleMap>,
    /// Font size to set on the text editor's parent, in px.
    pub editor_font_size_px: Option<f64>,
    /// Font size to remember for the end of the gesture, in px.
    pub font_size_px: Option<f64>,
}

/// Compute the preview for one resize frame of `element`.
#[must_use]
pub fn compute_resize_effect(event: &ResizeEvent, element: &SlideElement, ctx: &ResizeContext<'_>) -> ResizeEffect {
    let mut effect = ResizeEffect::default();
    effect
        .preview
        .set_px("width", event.width)
        .set_px("height", event.height)
        .set("transform", event.transform.clone());

    if element.is_text() {
        if ctx.keep_ratio {
            text_font_resize(event, element, ctx, &mut effect);
        } else {
            text_width_resize(element, ctx, &mut effect);
        }
        return effect;
    }

    let radius = ctx.services.borders.radius_px(event.size().min_side(), element.border.radius);
    effect.preview.set_px("border-radius", radius);
    effect.inner_preview = inner_content_style(event, element, ctx);
    effect
}

/// Ratio-locked text resize: the width drives the font size.
fn text_font_resize(event: &ResizeEvent, element: &SlideElement, ctx: &ResizeContext<'_>, effect: &mut ResizeEffect) {
    if !ctx.services.text.has_active_editor(element) {
        debug!(element_id = %element.id, "no active editor; skipping font scale");
        return;
    }
    let start_font_px = ctx.services.fonts.to_px(element.font_size, ctx.canvas);
    let content_width = event.width - 2.0 * ctx.text_padding;

    let Some(font_px) = scaled_font_size(content_width, start_font_px, ctx.gesture.start_width_px) else {
        warn!(element_id = %element.id, "resize frame without a recorded start width");
        return;
    };

    effect.preview.set("transform-origin", TEXT_SCALE_ORIGIN).set("height", "auto");
    effect.editor_font_size_px = Some(font_px);
    effect.font_size_px = Some(font_px);
}

/// Edge text resize: only the box width changes.
fn text_width_resize(element: &SlideElement, ctx: &ResizeContext<'_>, effect: &mut ResizeEffect) {
    effect.font_size_px = Some(ctx.services.fonts.to_px(element.font_size, ctx.canvas));
    if ctx.services.text.has_active_editor(element) {
        effect.preview.set("height", "auto");
    }
}

/// Media content layout for the new container size.
fn inner_content_style(event: &ResizeEvent, element: &SlideElement, ctx: &ResizeContext<'_>) -> Option<StyleMap> {
    let Some(parent) = event.parent_bounds else {
        debug!(element_id = %element.id, "no canvas bounds; skipping inner layout");
        return None;
    };
    if !event.has_inner_content {
        return None;
    }
    let canvas = CanvasDimensions::from(parent);
    let Some(Size { width, height }) = canvas.normalize(event.size()) else {
        debug!(element_id = %element.id, "empty canvas bounds; skipping inner layout");
        return None;
    };
    let resized = element.with_container_size(width, height);
    Some(ctx.services.media.content_style(canvas, &resized, event.offset_size()))
}

/// Normalized font size to persist at the end of a resize, text only.
///
/// Falls back to the element's current size when no frame recorded one.
#[must_use]
pub fn committed_font_size(
    element: &SlideElement,
    gesture: Option<&GestureContext>,
    canvas: CanvasDimensions,
    services: &Services,
) -> Option<f64> {
    if !element.is_text() {
        return None;
    }
    let Some(px) = gesture.and_then(|g| g.last_font_size_px) else {
        return Some(element.font_size);
    };
    Some(services.fonts.to_normalized(px, canvas))
}
