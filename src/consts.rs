//! Shared constants for the transformer crate.

use crate::input::HandleDirection;

// ── Handles ─────────────────────────────────────────────────────

/// Handle directions rendered around a selection: the four corners plus the
/// left/right edges. Top/bottom edges are omitted because text height follows
/// its content.
pub const RENDER_DIRECTIONS: [HandleDirection; 6] = [
    HandleDirection::Nw,
    HandleDirection::Ne,
    HandleDirection::Sw,
    HandleDirection::Se,
    HandleDirection::W,
    HandleDirection::E,
];

/// DOM id prefix of a slide element's media container.
pub const MEDIA_CONTAINER_ID_PREFIX: &str = "media-container-";

// ── Text ────────────────────────────────────────────────────────

/// Transform origin applied while a text element scales its font.
pub const TEXT_SCALE_ORIGIN: &str = "bottom left";

// ── Snapping ────────────────────────────────────────────────────

/// Offset of the inner canvas-edge guidelines from the far edges, in px.
pub const EDGE_GUIDELINE_INSET_PX: f64 = 0.5;

// ── Crop ────────────────────────────────────────────────────────

/// Full coverage, in percent.
pub const CROP_FULL_PERCENT: f64 = 100.0;
