//! Read-only editor snapshot and selection resolution.
//!
//! The transformer never reaches into global state. The host builds an
//! [`EditorSnapshot`] for each update and the transformer derives the selected
//! elements, their manipulation targets, and the guards that suppress handles.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use serde::{Deserialize, Serialize};

use crate::element::{ElementId, SlideElement};
use crate::geom::CanvasDimensions;
use crate::input::Modifiers;
use crate::services::LayoutProbe;

/// Editor state visible to the transformer for one update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    /// Elements of the current slide, in slide order.
    pub elements: Vec<SlideElement>,
    /// Selected element ids, in selection order.
    #[serde(default)]
    pub selected_ids: Vec<ElementId>,
    /// Canvas size in px.
    pub canvas: CanvasDimensions,
    /// The slide is being played back.
    #[serde(default)]
    pub is_playing: bool,
    /// A crop session is active.
    #[serde(default)]
    pub is_cropping: bool,
    /// Elements with an animation currently running.
    #[serde(default)]
    pub animating_ids: Vec<ElementId>,
    /// Keyboard modifiers held right now.
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl EditorSnapshot {
    #[must_use]
    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected_ids.contains(id)
    }

    /// Selected elements in slide order.
    #[must_use]
    pub fn selected_elements(&self) -> Vec<&SlideElement> {
        self.elements.iter().filter(|el| self.is_selected(&el.id)).collect()
    }

    /// Elements that are not selected, in slide order.
    pub fn unselected_elements(&self) -> impl Iterator<Item = &SlideElement> {
        self.elements.iter().filter(|el| !self.is_selected(&el.id))
    }

    #[must_use]
    pub fn is_animating(&self, id: &ElementId) -> bool {
        self.animating_ids.contains(id)
    }
}

/// The resolved selection for one update.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Selected elements in slide order. Never empty.
    pub elements: Vec<SlideElement>,
    /// Ids of selected elements whose container is mounted.
    pub containers: Vec<ElementId>,
}

impl Selection {
    /// Resolve the selection, or `None` when no handles should be shown.
    ///
    /// Handles are suppressed when nothing is selected, or when any selected
    /// non-text element is being animated.
    #[must_use]
    pub fn resolve(snapshot: &EditorSnapshot, layout: &dyn LayoutProbe) -> Option<Self> {
        let selected = snapshot.selected_elements();
        if selected.is_empty() {
            return None;
        }
        if selected.iter().any(|el| !el.is_text() && snapshot.is_animating(&el.id)) {
            return None;
        }
        let containers = selected
            .iter()
            .filter(|el| layout.container_bounds(&el.id).is_some())
            .map(|el| el.id)
            .collect();
        Some(Self { elements: selected.into_iter().cloned().collect(), containers })
    }

    /// First selected element in slide order.
    #[must_use]
    pub fn first(&self) -> Option<&SlideElement> {
        self.elements.first()
    }

    #[must_use]
    pub fn find(&self, id: &ElementId) -> Option<&SlideElement> {
        self.elements.iter().find(|el| el.id == *id)
    }

    /// Exactly one unlocked media element is selected. Rounding and rotation
    /// handles are only offered in that case.
    #[must_use]
    pub fn is_single_unlocked_media(&self) -> bool {
        matches!(self.elements.as_slice(), [only] if only.is_media() && !only.is_locked)
    }
}
