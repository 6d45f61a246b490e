//! Snapping and guideline configuration handed to the manipulation widget.
//!
//! Guidelines sit on the canvas edges, plus the canvas midlines and inner
//! edges unless the mod key is held. Other (non-selected) elements offer
//! element guidelines. Holding shift removes element guidelines and drops the
//! snap threshold to the free value, which turns snapping off.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use serde::{Deserialize, Serialize};

use crate::config::TransformerConfig;
use crate::consts::EDGE_GUIDELINE_INSET_PX;
use crate::element::{SlideElement, container_selector};
use crate::geom::CanvasDimensions;
use crate::input::Modifiers;

/// Which edges participate in snapping.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapDirections {
    pub top: bool,
    pub left: bool,
    pub bottom: bool,
    pub right: bool,
    pub center: bool,
    pub middle: bool,
}

impl SnapDirections {
    /// All four edges plus both center lines.
    #[must_use]
    pub fn all() -> Self {
        Self { top: true, left: true, bottom: true, right: true, center: true, middle: true }
    }

    /// The four edges only.
    #[must_use]
    pub fn edges() -> Self {
        Self { center: false, middle: false, ..Self::all() }
    }
}

/// Snap settings for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapSettings {
    /// X positions of vertical guidelines, in canvas px.
    pub vertical_guidelines: Vec<f64>,
    /// Y positions of horizontal guidelines, in canvas px.
    pub horizontal_guidelines: Vec<f64>,
    /// CSS selectors of elements that offer guidelines.
    pub element_guidelines: Vec<String>,
    pub threshold: f64,
    pub max_element_guideline_distance: f64,
    pub directions: SnapDirections,
    pub element_directions: SnapDirections,
}

impl SnapSettings {
    /// Build the settings for the current canvas and modifiers.
    ///
    /// `others` are the slide elements that are not selected.
    pub fn build<'a>(
        canvas: CanvasDimensions,
        others: impl IntoIterator<Item = &'a SlideElement>,
        modifiers: Modifiers,
        config: &TransformerConfig,
    ) -> Self {
        let free = modifiers.shift;
        let element_guidelines = if free {
            Vec::new()
        } else {
            others.into_iter().map(|el| container_selector(&el.id)).collect()
        };

        Self {
            vertical_guidelines: guidelines(0.0, canvas.width, modifiers.mod_key()),
            horizontal_guidelines: guidelines(EDGE_GUIDELINE_INSET_PX, canvas.height, modifiers.mod_key()),
            element_guidelines,
            threshold: if free { config.free_snap_threshold } else { config.snap_threshold },
            max_element_guideline_distance: config.max_snap_distance,
            directions: SnapDirections::all(),
            element_directions: SnapDirections::edges(),
        }
    }
}

fn guidelines(near: f64, extent: f64, edges_only: bool) -> Vec<f64> {
    let mut lines = vec![near];
    if !edges_only {
        lines.push(extent * 0.5);
        lines.push(extent - EDGE_GUIDELINE_INSET_PX);
    }
    lines.push(extent);
    lines
}
