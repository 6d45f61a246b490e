//! Collaborator interfaces consumed by the transformer.
//!
//! DESIGN
//! ======
//! Everything the transformer needs from the rest of the editor comes through
//! one of these traits: the async action dispatcher, the text-editing
//! subsystem, font unit conversion, media content layout, border radius
//! computation, and DOM measurement. Keeping them narrow lets the gesture
//! math run in plain unit tests with small mocks.
//!
//! Default implementations are provided for the pure conversions so that a
//! host only has to supply the DOM-backed pieces.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::element::{ElementId, SlideElement};
use crate::error::TransformerError;
use crate::event::TransformerAction;
use crate::geom::{CanvasDimensions, Rect, Size};
use crate::style::StyleMap;

// =============================================================================
// DISPATCH
// =============================================================================

/// Persists the end state of a gesture. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ActionDispatcher: Send + Sync {
    /// Apply one transformer action to the document.
    ///
    /// # Errors
    ///
    /// Returns [`TransformerError::Dispatch`] if the edit could not be applied.
    /// The transformer logs the failure and carries on.
    async fn dispatch(&self, action: TransformerAction) -> Result<(), TransformerError>;
}

/// Text-editing selection state that mirrors the font size of the selection.
pub trait TextSelectionState: Send + Sync {
    fn set_selected_normalized_font_size(&self, size: f64);
}

// =============================================================================
// TEXT EDITORS
// =============================================================================

/// Lookup of the live text editor mounted for an element.
pub trait TextEditors {
    /// An editor is mounted for `element`.
    fn has_active_editor(&self, element: &SlideElement) -> bool;
}

// =============================================================================
// CONVERSIONS
// =============================================================================

/// Converts font sizes between normalized and pixel units.
pub trait FontUnits {
    fn to_px(&self, normalized: f64, canvas: CanvasDimensions) -> f64;
    fn to_normalized(&self, px: f64, canvas: CanvasDimensions) -> f64;
}

/// Font sizes relative to canvas height: `px = normalized × height`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanvasFontUnits;

impl FontUnits for CanvasFontUnits {
    fn to_px(&self, normalized: f64, canvas: CanvasDimensions) -> f64 {
        normalized * canvas.height
    }

    fn to_normalized(&self, px: f64, canvas: CanvasDimensions) -> f64 {
        if canvas.height <= 0.0 {
            return 0.0;
        }
        px / canvas.height
    }
}

/// Converts a normalized corner radius into pixels for a given container.
pub trait BorderRadius {
    /// `min_side` is the smaller of the container's pixel width and height.
    fn radius_px(&self, min_side: f64, radius: f64) -> f64;
}

/// Radius as a fraction of half the smaller side; `1.0` makes a pill/circle.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProportionalRadius;

impl BorderRadius for ProportionalRadius {
    fn radius_px(&self, min_side: f64, radius: f64) -> f64 {
        min_side.max(0.0) * radius.clamp(0.0, 1.0) / 2.0
    }
}

/// Computes the inline style of a media element's inner content node.
pub trait MediaLayout {
    fn content_style(&self, canvas: CanvasDimensions, element: &SlideElement, container: Size) -> StyleMap;
}

/// Content stretched to fill its container.
#[derive(Debug, Clone, Copy, Default)]
pub struct FillLayout;

impl MediaLayout for FillLayout {
    fn content_style(&self, _canvas: CanvasDimensions, _element: &SlideElement, container: Size) -> StyleMap {
        let mut style = StyleMap::new();
        style
            .set("position", "absolute")
            .set_px("left", 0.0)
            .set_px("top", 0.0)
            .set_px("width", container.width)
            .set_px("height", container.height);
        style
    }
}

// =============================================================================
// LAYOUT
// =============================================================================

/// Read-only DOM measurement.
pub trait LayoutProbe {
    /// Bounding rect of the element's media container, if mounted.
    fn container_bounds(&self, id: &ElementId) -> Option<Rect>;
    /// Bounding rect of the element's inner media content, if mounted.
    fn content_bounds(&self, id: &ElementId) -> Option<Rect>;
}

/// Fixed measurements, for replay scripts and tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticLayout {
    #[serde(default)]
    pub containers: HashMap<ElementId, Rect>,
    #[serde(default)]
    pub contents: HashMap<ElementId, Rect>,
    #[serde(default)]
    pub editors: HashSet<ElementId>,
}

impl LayoutProbe for StaticLayout {
    fn container_bounds(&self, id: &ElementId) -> Option<Rect> {
        self.containers.get(id).copied()
    }

    fn content_bounds(&self, id: &ElementId) -> Option<Rect> {
        self.contents.get(id).copied()
    }
}

impl TextEditors for StaticLayout {
    fn has_active_editor(&self, element: &SlideElement) -> bool {
        self.editors.contains(&element.id)
    }
}

// =============================================================================
// BUNDLE
// =============================================================================

/// The synchronous collaborators used while computing previews.
pub struct Services {
    pub layout: Box<dyn LayoutProbe>,
    pub text: Box<dyn TextEditors>,
    pub fonts: Box<dyn FontUnits>,
    pub media: Box<dyn MediaLayout>,
    pub borders: Box<dyn BorderRadius>,
}

impl Services {
    /// Bundle the DOM-backed collaborators with default conversions.
    #[must_use]
    pub fn new(layout: impl LayoutProbe + 'static, text: impl TextEditors + 'static) -> Self {
        Self {
            layout: Box::new(layout),
            text: Box::new(text),
            fonts: Box::new(CanvasFontUnits),
            media: Box::new(FillLayout),
            borders: Box::new(ProportionalRadius),
        }
    }

    #[must_use]
    pub fn with_fonts(mut self, fonts: impl FontUnits + 'static) -> Self {
        self.fonts = Box::new(fonts);
        self
    }

    #[must_use]
    pub fn with_media(mut self, media: impl MediaLayout + 'static) -> Self {
        self.media = Box::new(media);
        self
    }

    #[must_use]
    pub fn with_borders(mut self, borders: impl BorderRadius + 'static) -> Self {
        self.borders = Box::new(borders);
        self
    }
}

impl From<StaticLayout> for Services {
    fn from(layout: StaticLayout) -> Self {
        Self::new(layout.clone(), layout)
    }
}
