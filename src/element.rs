//! Slide element model as seen by the transformer.
//!
//! Elements are owned by the slide document. The transformer only reads them
//! from the per-update [`crate::selection::EditorSnapshot`]; every persisted
//! change goes out through the action dispatcher.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::MEDIA_CONTAINER_ID_PREFIX;

/// Unique identifier for a slide element.
pub type ElementId = Uuid;

/// The kind of a slide element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Rich text box. Width is user-controlled, height follows content.
    Text,
    /// Image or video inside a clipping container.
    Media,
}

/// Border settings carried by an element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Border {
    /// Corner radius as a fraction of the container's smaller side (0..1).
    #[serde(default)]
    pub radius: f64,
    /// Stroke width in normalized canvas units.
    #[serde(default)]
    pub width: f64,
}

/// A positioned object on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideElement {
    /// Unique identifier for this element.
    pub id: ElementId,
    /// Text or media.
    pub kind: ElementKind,
    /// Left edge in normalized canvas units.
    pub x: f64,
    /// Top edge in normalized canvas units.
    pub y: f64,
    /// Container width in normalized canvas units.
    pub container_width: f64,
    /// Container height in normalized canvas units.
    pub container_height: f64,
    /// Clockwise rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    /// Locked elements cannot be rounded or rotated.
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default)]
    pub border: Border,
    /// Normalized font size. Only meaningful for text.
    #[serde(default)]
    pub font_size: f64,
}

impl SlideElement {
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.kind == ElementKind::Text
    }

    #[must_use]
    pub fn is_media(&self) -> bool {
        self.kind == ElementKind::Media
    }

    /// Copy of this element with a different normalized container size.
    #[must_use]
    pub fn with_container_size(&self, width: f64, height: f64) -> Self {
        Self { container_width: width, container_height: height, ..self.clone() }
    }
}

/// DOM id of the media container for `id`.
#[must_use]
pub fn container_dom_id(id: &ElementId) -> String {
    format!("{MEDIA_CONTAINER_ID_PREFIX}{id}")
}

/// CSS id selector for the media container of `id`.
#[must_use]
pub fn container_selector(id: &ElementId) -> String {
    format!("#{}", container_dom_id(id))
}
