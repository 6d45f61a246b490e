//! Widget event payloads and the actions dispatched at gesture end.
//!
//! Live events (`DragEvent`, `ResizeEvent`, ...) arrive many times per gesture
//! and only ever produce previews. End events wrap the last live event and are
//! forwarded verbatim to the dispatcher inside a [`TransformerAction`].

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::crop::CropRect;
use crate::element::ElementId;
use crate::geom::{Point, Rect, Size};
use crate::input::Direction;

fn default_true() -> bool {
    true
}

/// One frame of a drag gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragEvent {
    /// Element whose container (or media content, while cropping) is dragged.
    pub target: ElementId,
    /// Widget-computed CSS transform for the target.
    pub transform: String,
    /// Target left edge in client pixels.
    pub left: f64,
    /// Target top edge in client pixels.
    pub top: f64,
    /// Target bounding rect after this frame, when the host could measure it.
    #[serde(default)]
    pub target_bounds: Option<Rect>,
}

/// First frame of a resize gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeStartEvent {
    pub target: ElementId,
    /// Which handle was grabbed.
    pub direction: Direction,
    /// Rendered width of the target at gesture start (`clientWidth`).
    pub client_width: f64,
}

/// One frame of a resize gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeEvent {
    pub target: ElementId,
    /// New target width in pixels.
    pub width: f64,
    /// New target height in pixels.
    pub height: f64,
    /// Target offset width (layout box) in pixels.
    pub offset_width: f64,
    /// Target offset height (layout box) in pixels.
    pub offset_height: f64,
    /// Widget-computed CSS transform for the target.
    pub transform: String,
    pub direction: Direction,
    /// Left/top of the drag component of the resize, in client pixels.
    pub position: Point,
    /// Target bounding rect after this frame.
    #[serde(default)]
    pub target_bounds: Option<Rect>,
    /// Bounding rect of the target's parent (the slide canvas).
    #[serde(default)]
    pub parent_bounds: Option<Rect>,
    /// Whether the target has an inner content node to restyle.
    #[serde(default = "default_true")]
    pub has_inner_content: bool,
}

impl ResizeEvent {
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub fn offset_size(&self) -> Size {
        Size::new(self.offset_width, self.offset_height)
    }
}

/// One frame of a border-radius gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundEvent {
    pub target: ElementId,
    /// Widget-computed CSS `border-radius` value.
    pub border_radius: String,
}

/// One frame of a rotate gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotateEvent {
    pub target: ElementId,
    /// Widget-computed CSS transform including the rotation.
    pub transform: String,
    /// Absolute rotation in degrees.
    pub rotation: f64,
}

/// Final event of a gesture, carrying the last live frame if one occurred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndEvent<E> {
    pub target: ElementId,
    pub last_event: Option<E>,
}

impl<E> EndEvent<E> {
    #[must_use]
    pub fn new(target: ElementId, last_event: Option<E>) -> Self {
        Self { target, last_event }
    }
}

pub type DragEndEvent = EndEvent<DragEvent>;
pub type ResizeEndEvent = EndEvent<ResizeEvent>;
pub type RoundEndEvent = EndEvent<RoundEvent>;
pub type RotateEndEvent = EndEvent<RotateEvent>;

/// Crop region committed at the end of a crop gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropCommit {
    pub rect: CropRect,
    /// The same region as a CSS `clip-path` value.
    pub clip_path: String,
}

/// Payload handed to the dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransformerEvent {
    Drag(DragEndEvent),
    Resize(ResizeEndEvent),
    Round(RoundEndEvent),
    Rotate(RotateEndEvent),
    Crop(CropCommit),
}

/// Kind of persisted edit requested from the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionType {
    Radius,
    Resize,
    Drag,
    InnerDrag,
    InnerResize,
    Scale,
    Crop,
}

impl ActionType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Radius => "radius",
            Self::Resize => "resize",
            Self::Drag => "drag",
            Self::InnerDrag => "inner-drag",
            Self::InnerResize => "inner-resize",
            Self::Scale => "scale",
            Self::Crop => "crop",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One persisted edit: the end state of a gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformerAction {
    pub event: TransformerEvent,
    pub action_type: ActionType,
    pub element_id: ElementId,
    /// New normalized font size. Only set for text resizes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_font_size: Option<f64>,
}

impl TransformerAction {
    #[must_use]
    pub fn new(event: TransformerEvent, action_type: ActionType, element_id: ElementId) -> Self {
        Self { event, action_type, element_id, normalized_font_size: None }
    }

    #[must_use]
    pub fn with_font_size(mut self, normalized_font_size: Option<f64>) -> Self {
        self.normalized_font_size = normalized_font_size;
        self
    }
}
