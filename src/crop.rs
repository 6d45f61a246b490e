//! Crop region tracking for media elements.
//!
//! The visible part of a media element's content is a rectangle expressed as
//! edge percentages of the content's bounding box. A crop session starts at
//! full coverage. Resizing the crop box replaces the rectangle; dragging it
//! only translates it, so width and height survive any number of drags.
//!
//! The host receives the region as a CSS `polygon(...)` clip path. Parsing is
//! provided for clip paths that were persisted by an earlier session.

#[cfg(test)]
#[path = "crop_test.rs"]
mod crop_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::CROP_FULL_PERCENT;
use crate::element::ElementId;
use crate::error::TransformerError;
use crate::event::{DragEvent, ResizeEvent};
use crate::geom::{Point, Rect};

/// Visible crop region in percent of the media content box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl CropRect {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// The whole content box: (0%, 0%) through (100%, 100%).
    #[must_use]
    pub fn full() -> Self {
        Self::new(0.0, 0.0, CROP_FULL_PERCENT, CROP_FULL_PERCENT)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Region covered by `target` inside `media`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformerError::MissingBounds`] if `media` has no area.
    pub fn from_target(target: Rect, media: Rect) -> Result<Self, TransformerError> {
        if media.is_degenerate() {
            return Err(TransformerError::MissingBounds { what: "media content" });
        }
        Ok(Self {
            left: media.x_percent(target.left),
            top: media.y_percent(target.top),
            right: media.x_percent(target.right()),
            bottom: media.y_percent(target.bottom()),
        })
    }

    /// Same-sized region whose top-left corner sits at `origin` inside `media`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformerError::MissingBounds`] if `media` has no area.
    pub fn moved_to(&self, origin: Point, media: Rect) -> Result<Self, TransformerError> {
        if media.is_degenerate() {
            return Err(TransformerError::MissingBounds { what: "media content" });
        }
        let dx = media.x_percent(origin.x) - self.left;
        let dy = media.y_percent(origin.y) - self.top;
        Ok(self.translated(dx, dy))
    }

    /// Shift all four edges by the same percentage delta.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// CSS clip path covering this region, corners clockwise from top-left.
    #[must_use]
    pub fn to_clip_path(&self) -> String {
        self.to_string()
    }
}

impl Default for CropRect {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { left: l, top: t, right: r, bottom: b } = *self;
        write!(f, "polygon({l}% {t}%, {r}% {t}%, {r}% {b}%, {l}% {b}%)")
    }
}

impl FromStr for CropRect {
    type Err = TransformerError;

    /// Parse a four-corner `polygon(x% y%, ...)` clip path. Corner one is taken
    /// as top-left and corner three as bottom-right.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TransformerError::ClipPathParse(s.trim().to_owned());

        let body = s
            .trim()
            .strip_prefix("polygon(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;

        let mut corners = Vec::with_capacity(4);
        for pair in body.split(',') {
            let mut coords = pair.split_whitespace().map(parse_percent);
            let (Some(Some(x)), Some(Some(y)), None) = (coords.next(), coords.next(), coords.next()) else {
                return Err(err());
            };
            corners.push(Point::new(x, y));
        }
        let &[top_left, _, bottom_right, _] = corners.as_slice() else {
            return Err(err());
        };
        Ok(Self::new(top_left.x, top_left.y, bottom_right.x, bottom_right.y))
    }
}

fn parse_percent(token: &str) -> Option<f64> {
    match token.strip_suffix('%')?.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Crop state for the first selected element's media content.
#[derive(Debug, Clone, Default)]
pub struct CropTracker {
    media: Option<ElementId>,
    rect: Option<CropRect>,
}

impl CropTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Element whose media content is the crop target, if any.
    #[must_use]
    pub fn media(&self) -> Option<ElementId> {
        self.media
    }

    /// Current crop region while a session is active.
    #[must_use]
    pub fn rect(&self) -> Option<CropRect> {
        self.rect
    }

    /// Track the media content of `id`. Passing `None` keeps the previous
    /// target, matching a ref that is only reassigned when a node exists.
    pub fn set_media(&mut self, id: Option<ElementId>) {
        if id.is_some() {
            self.media = id;
        }
    }

    /// Start a crop session at full coverage. Returns the target and region,
    /// or `None` when no media content is tracked.
    pub fn begin(&mut self) -> Option<(ElementId, CropRect)> {
        let media = self.media?;
        let rect = CropRect::full();
        self.rect = Some(rect);
        Some((media, rect))
    }

    /// Drop the session region.
    pub fn end(&mut self) {
        self.rect = None;
    }

    /// Replace the region with the crop box of a resize frame.
    ///
    /// # Errors
    ///
    /// Fails when no session is active or the media bounds are unusable; the
    /// previous region is kept.
    pub fn resize(&mut self, event: &ResizeEvent, media_bounds: Option<Rect>) -> Result<CropRect, TransformerError> {
        self.rect.ok_or(TransformerError::MissingBounds { what: "crop region" })?;
        let media = media_bounds.ok_or(TransformerError::MissingBounds { what: "media content" })?;
        let (width, height) = event
            .target_bounds
            .map_or((event.width, event.height), |b| (b.width, b.height));
        let target = Rect::new(event.position.x, event.position.y, width, height);
        let next = CropRect::from_target(target, media)?;
        self.rect = Some(next);
        Ok(next)
    }

    /// Translate the region to follow a drag frame.
    ///
    /// # Errors
    ///
    /// Fails when no session is active or the media bounds are unusable; the
    /// previous region is kept.
    pub fn drag(&mut self, event: &DragEvent, media_bounds: Option<Rect>) -> Result<CropRect, TransformerError> {
        let current = self.rect.ok_or(TransformerError::MissingBounds { what: "crop region" })?;
        let media = media_bounds.ok_or(TransformerError::MissingBounds { what: "media content" })?;
        let origin = event
            .target_bounds
            .map_or(Point::new(event.left, event.top), |b| Point::new(b.left, b.top));
        let next = current.moved_to(origin, media)?;
        self.rect = Some(next);
        Ok(next)
    }
}
