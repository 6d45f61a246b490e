use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, warn};

use crate::bus::BusEvent;
use crate::config::TransformerConfig;
use crate::consts::RENDER_DIRECTIONS;
use crate::crop::CropTracker;
use crate::element::{ElementId, SlideElement};
use crate::error::TransformerError;
use crate::event::{
    ActionType, CropCommit, DragEndEvent, DragEvent, ResizeEndEvent, ResizeEvent, ResizeStartEvent, RotateEndEvent,
    RotateEvent, RoundEndEvent, RoundEvent, TransformerAction, TransformerEvent,
};
use crate::resize::{GestureContext, ResizeContext, committed_font_size, compute_resize_effect, ratio_locked};
use crate::selection::{EditorSnapshot, Selection};
use crate::services::{ActionDispatcher, Services, TextSelectionState};
use crate::snap::SnapSettings;
use crate::style::StyleMap;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Effects returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", content = "data", rename_all = "snake_case")]
pub enum Effect {
    /// Merge `style` onto the element's container node.
    Preview { target: ElementId, style: StyleMap },
    /// Merge `style` onto the container's inner media content node.
    InnerPreview { target: ElementId, style: StyleMap },
    /// Set the font size of the element's text editor parent.
    EditorFontSize { target: ElementId, font_size_px: f64 },
    /// Set the clip path of the element's media content node.
    ClipPath { target: ElementId, clip_path: String },
    /// Persist the end state of a gesture.
    Dispatch(TransformerAction),
    /// Mirror a committed text font size into the text editing selection.
    SelectedFontSize(f64),
    /// Ask the widget to recompute its handle geometry.
    RefreshHandles,
    /// Start observing these containers for size changes.
    Observe(Vec<ElementId>),
    /// Stop observing all containers.
    Disconnect,
}

/// What the widget manipulates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "ids", rename_all = "snake_case")]
pub enum Targets {
    /// The selected elements' containers.
    Containers(Vec<ElementId>),
    /// The first selected element's media content, while cropping.
    MediaContent(Option<ElementId>),
}

/// Widget configuration for one render.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandleConfig {
    pub targets: Targets,
    /// Imperative refreshes reach the widget. False during playback.
    pub attached: bool,
    pub hidden: bool,
    pub draggable: bool,
    pub resizable: bool,
    pub rotatable: bool,
    pub roundable: bool,
    pub keep_ratio: bool,
    pub edge_draggable: bool,
    pub render_directions: Vec<String>,
    pub throttle_drag: f64,
    pub throttle_resize: f64,
    pub snap: SnapSettings,
    /// Show distance labels next to snap guidelines.
    pub display_snap_digit: bool,
    pub display_inner_snap_digit: bool,
}

/// Core transformer state: all logic that does not depend on the widget.
///
/// Handlers are synchronous and return [`Effect`]s. Live handlers only emit
/// previews; gesture-end handlers emit exactly one dispatch per element.
pub struct TransformerCore {
    pub config: TransformerConfig,
    pub services: Services,
    snapshot: EditorSnapshot,
    selection: Option<Selection>,
    keep_ratio: bool,
    hidden: bool,
    gestures: HashMap<ElementId, GestureContext>,
    crop: CropTracker,
    observed: Vec<ElementId>,
}

impl TransformerCore {
    #[must_use]
    pub fn new(config: TransformerConfig, services: Services) -> Self {
        Self {
            config,
            services,
            snapshot: EditorSnapshot::default(),
            selection: None,
            keep_ratio: true,
            hidden: false,
            gestures: HashMap::new(),
            crop: CropTracker::new(),
            observed: Vec::new(),
        }
    }

    // --- Data inputs ---

    /// Take a new editor snapshot.
    ///
    /// The crop target and the size observation are re-derived on every
    /// update; observation effects are only emitted when the observed set
    /// changes. Entering crop mode resets the crop region to full coverage;
    /// leaving it drops the region.
    pub fn update(&mut self, snapshot: EditorSnapshot) -> Vec<Effect> {
        let mut effects = Vec::new();
        let was_cropping = self.snapshot.is_cropping;

        self.selection = Selection::resolve(&snapshot, self.services.layout.as_ref());
        self.snapshot = snapshot;

        self.track_media_content();
        self.reobserve(&mut effects);

        match (was_cropping, self.snapshot.is_cropping) {
            (false, true) => {
                if let Some((media, rect)) = self.crop.begin() {
                    effects.push(Effect::ClipPath { target: media, clip_path: rect.to_clip_path() });
                }
            }
            (true, false) => self.crop.end(),
            _ => {}
        }
        effects
    }

    /// The transformer is going away: stop observing and drop gesture state.
    pub fn unmount(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if !self.observed.is_empty() {
            self.observed.clear();
            effects.push(Effect::Disconnect);
        }
        self.gestures.clear();
        self.crop = CropTracker::new();
        self.selection = None;
        effects
    }

    fn track_media_content(&mut self) {
        let Some(first) = self.snapshot.selected_elements().first().map(|el| el.id) else {
            return;
        };
        if self.services.layout.content_bounds(&first).is_some() {
            self.crop.set_media(Some(first));
        }
    }

    fn reobserve(&mut self, effects: &mut Vec<Effect>) {
        let containers = self.selection.as_ref().map(|s| s.containers.clone()).unwrap_or_default();
        if containers == self.observed {
            return;
        }
        if !self.observed.is_empty() {
            effects.push(Effect::Disconnect);
        }
        if !containers.is_empty() {
            effects.push(Effect::Observe(containers.clone()));
        }
        self.observed = containers;
    }

    // --- Queries ---

    /// Widget configuration, or `None` when no handles should be rendered.
    #[must_use]
    pub fn handles(&self) -> Option<HandleConfig> {
        let selection = self.selection.as_ref()?;
        let single_media = selection.is_single_unlocked_media();
        let targets = if self.snapshot.is_cropping {
            Targets::MediaContent(self.crop.media())
        } else {
            Targets::Containers(selection.containers.clone())
        };

        Some(HandleConfig {
            targets,
            attached: !self.snapshot.is_playing,
            hidden: self.hidden,
            draggable: true,
            resizable: true,
            rotatable: single_media,
            roundable: single_media,
            keep_ratio: self.keep_ratio,
            edge_draggable: false,
            render_directions: RENDER_DIRECTIONS.iter().map(|d| d.as_str().to_owned()).collect(),
            throttle_drag: self.config.throttle_drag,
            throttle_resize: self.config.throttle_resize,
            snap: SnapSettings::build(
                self.snapshot.canvas,
                self.snapshot.unselected_elements(),
                self.snapshot.modifiers,
                &self.config,
            ),
            display_snap_digit: true,
            display_inner_snap_digit: false,
        })
    }

    /// The resolved selection, if handles are shown.
    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    #[must_use]
    pub fn keep_ratio(&self) -> bool {
        self.keep_ratio
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// The crop tracker for the current selection.
    #[must_use]
    pub fn crop(&self) -> &CropTracker {
        &self.crop
    }

    /// Gesture context recorded for `id`, while a resize is in progress.
    #[must_use]
    pub fn gesture(&self, id: &ElementId) -> Option<&GestureContext> {
        self.gestures.get(id)
    }

    fn first_selected(&self) -> Option<SlideElement> {
        self.selection.as_ref().and_then(Selection::first).cloned()
    }

    fn find_selected(&self, id: &ElementId) -> Option<SlideElement> {
        let found = self.selection.as_ref().and_then(|s| s.find(id)).cloned();
        if found.is_none() {
            error!(error = %TransformerError::UnknownElement(*id), "slide element not found for widget event");
        }
        found
    }

    // --- Signals ---

    pub fn on_bus(&mut self, event: BusEvent) -> Vec<Effect> {
        match event {
            BusEvent::HideResizer => self.hidden = true,
            BusEvent::ShowResizer => self.hidden = false,
            BusEvent::UpdateResizer => return self.refresh(),
        }
        Vec::new()
    }

    /// An observed container changed size.
    pub fn on_container_resized(&mut self, id: &ElementId) -> Vec<Effect> {
        if !self.observed.contains(id) || self.snapshot.selected_ids.is_empty() {
            return Vec::new();
        }
        self.refresh()
    }

    fn refresh(&self) -> Vec<Effect> {
        if self.snapshot.is_playing {
            return Vec::new();
        }
        vec![Effect::RefreshHandles]
    }

    // --- Drag ---

    pub fn on_drag(&mut self, event: &DragEvent) -> Vec<Effect> {
        if self.snapshot.is_cropping {
            return self.crop_drag(event);
        }
        if self.selection.is_none() {
            return Vec::new();
        }
        vec![transform_preview(event.target, &event.transform)]
    }

    pub fn on_drag_group(&mut self, events: &[DragEvent]) -> Vec<Effect> {
        events
            .iter()
            .filter(|ev| self.find_selected(&ev.target).is_some())
            .map(|ev| transform_preview(ev.target, &ev.transform))
            .collect()
    }

    pub fn on_drag_end(&mut self, event: DragEndEvent) -> Vec<Effect> {
        if self.snapshot.is_cropping {
            return self.commit_crop();
        }
        let Some(element) = self.first_selected() else {
            return Vec::new();
        };
        vec![self.drag_dispatch(event, &element)]
    }

    pub fn on_drag_group_end(&mut self, events: Vec<DragEndEvent>) -> Vec<Effect> {
        let mut effects = Vec::new();
        for event in events {
            let Some(element) = self.find_selected(&event.target) else {
                continue;
            };
            effects.push(self.drag_dispatch(event, &element));
        }
        effects
    }

    fn drag_dispatch(&self, event: DragEndEvent, element: &SlideElement) -> Effect {
        let kind = if self.snapshot.modifiers.mod_key() { ActionType::InnerDrag } else { ActionType::Drag };
        Effect::Dispatch(TransformerAction::new(TransformerEvent::Drag(event), kind, element.id))
    }

    // --- Resize ---

    pub fn on_resize_start(&mut self, event: &ResizeStartEvent) {
        if let Some(element) = self.first_selected() {
            self.start_resize(event, &element);
        }
    }

    pub fn on_resize_group_start(&mut self, events: &[ResizeStartEvent]) {
        for event in events {
            let Some(element) = self.find_selected(&event.target) else {
                continue;
            };
            self.start_resize(event, &element);
        }
    }

    fn start_resize(&mut self, event: &ResizeStartEvent, element: &SlideElement) {
        self.keep_ratio = ratio_locked(event.direction, element, self.snapshot.modifiers);
        self.gestures.insert(element.id, GestureContext::started(event.client_width));
        debug!(element_id = %element.id, keep_ratio = self.keep_ratio, "resize started");
    }

    pub fn on_resize(&mut self, event: &ResizeEvent) -> Vec<Effect> {
        if self.snapshot.is_cropping {
            return self.crop_resize(event);
        }
        let Some(element) = self.first_selected() else {
            return Vec::new();
        };
        self.resize_frame(event, &element)
    }

    pub fn on_resize_group(&mut self, events: &[ResizeEvent]) -> Vec<Effect> {
        let mut effects = Vec::new();
        for event in events {
            let Some(element) = self.find_selected(&event.target) else {
                continue;
            };
            effects.extend(self.resize_frame(event, &element));
        }
        effects
    }

    fn resize_frame(&mut self, event: &ResizeEvent, element: &SlideElement) -> Vec<Effect> {
        let ctx = ResizeContext {
            canvas: self.snapshot.canvas,
            keep_ratio: self.keep_ratio,
            text_padding: self.config.text_padding,
            gesture: self.gestures.get(&element.id).copied().unwrap_or_default(),
            services: &self.services,
        };
        let effect = compute_resize_effect(event, element, &ctx);

        if let Some(px) = effect.font_size_px {
            self.gestures.entry(element.id).or_default().last_font_size_px = Some(px);
        }

        let mut effects = vec![Effect::Preview { target: event.target, style: effect.preview }];
        if let Some(style) = effect.inner_preview {
            effects.push(Effect::InnerPreview { target: event.target, style });
        }
        if let Some(font_size_px) = effect.editor_font_size_px {
            effects.push(Effect::EditorFontSize { target: element.id, font_size_px });
        }
        effects
    }

    pub fn on_resize_end(&mut self, event: ResizeEndEvent) -> Vec<Effect> {
        if self.snapshot.is_cropping {
            return self.commit_crop();
        }
        let Some(element) = self.first_selected() else {
            return Vec::new();
        };
        self.commit_resize(event, &element)
    }

    pub fn on_resize_group_end(&mut self, events: Vec<ResizeEndEvent>) -> Vec<Effect> {
        let mut effects = Vec::new();
        for event in events {
            let Some(element) = self.find_selected(&event.target) else {
                continue;
            };
            effects.extend(self.commit_resize(event, &element));
        }
        effects
    }

    fn commit_resize(&mut self, event: ResizeEndEvent, element: &SlideElement) -> Vec<Effect> {
        let gesture = self.gestures.remove(&element.id);
        let font_size = committed_font_size(element, gesture.as_ref(), self.snapshot.canvas, &self.services);

        let action = TransformerAction::new(TransformerEvent::Resize(event), ActionType::Resize, element.id)
            .with_font_size(font_size);
        let mut effects = vec![Effect::Dispatch(action)];
        if let Some(size) = font_size {
            effects.push(Effect::SelectedFontSize(size));
        }
        effects
    }

    // --- Round / rotate ---

    fn single_media(&self) -> Option<SlideElement> {
        self.selection
            .as_ref()
            .filter(|s| s.is_single_unlocked_media())
            .and_then(Selection::first)
            .cloned()
    }

    pub fn on_round(&mut self, event: &RoundEvent) -> Vec<Effect> {
        if self.single_media().is_none() {
            return Vec::new();
        }
        let mut style = StyleMap::new();
        style.set("border-radius", event.border_radius.clone());
        vec![Effect::Preview { target: event.target, style }]
    }

    pub fn on_round_end(&mut self, event: RoundEndEvent) -> Vec<Effect> {
        let Some(element) = self.single_media() else {
            return Vec::new();
        };
        let action = TransformerAction::new(TransformerEvent::Round(event), ActionType::Radius, element.id);
        vec![Effect::Dispatch(action)]
    }

    pub fn on_rotate(&mut self, event: &RotateEvent) -> Vec<Effect> {
        if self.single_media().is_none() {
            return Vec::new();
        }
        vec![transform_preview(event.target, &event.transform)]
    }

    /// Rotation persists through the drag action: the final transform carries
    /// both translation and rotation.
    pub fn on_rotate_end(&mut self, event: RotateEndEvent) -> Vec<Effect> {
        let Some(element) = self.single_media() else {
            return Vec::new();
        };
        let action = TransformerAction::new(TransformerEvent::Rotate(event), ActionType::Drag, element.id);
        vec![Effect::Dispatch(action)]
    }

    // --- Crop ---

    fn crop_resize(&mut self, event: &ResizeEvent) -> Vec<Effect> {
        let Some(media) = self.crop.media() else {
            return Vec::new();
        };
        let bounds = self.services.layout.content_bounds(&media);
        match self.crop.resize(event, bounds) {
            Ok(rect) => vec![Effect::ClipPath { target: media, clip_path: rect.to_clip_path() }],
            Err(e) => {
                warn!(error = %e, element_id = %media, "crop resize skipped");
                Vec::new()
            }
        }
    }

    fn crop_drag(&mut self, event: &DragEvent) -> Vec<Effect> {
        let Some(media) = self.crop.media() else {
            return Vec::new();
        };
        let bounds = self.services.layout.content_bounds(&media);
        match self.crop.drag(event, bounds) {
            Ok(rect) => vec![Effect::ClipPath { target: media, clip_path: rect.to_clip_path() }],
            Err(e) => {
                warn!(error = %e, element_id = %media, "crop drag skipped");
                Vec::new()
            }
        }
    }

    fn commit_crop(&self) -> Vec<Effect> {
        let (Some(media), Some(rect)) = (self.crop.media(), self.crop.rect()) else {
            debug!("crop gesture ended without a crop region");
            return Vec::new();
        };
        let commit = CropCommit { rect, clip_path: rect.to_clip_path() };
        vec![Effect::Dispatch(TransformerAction::new(TransformerEvent::Crop(commit), ActionType::Crop, media))]
    }
}

fn transform_preview(target: ElementId, transform: &str) -> Effect {
    let mut style = StyleMap::new();
    style.set("transform", transform);
    Effect::Preview { target, style }
}

/// The full transformer. Wraps `TransformerCore` and owns the async sinks.
///
/// Every handler runs the core, awaits any dispatches it produced, and returns
/// the remaining view effects for the host to apply.
pub struct Transformer {
    pub core: TransformerCore,
    dispatcher: Arc<dyn ActionDispatcher>,
    text_state: Arc<dyn TextSelectionState>,
}

impl Transformer {
    #[must_use]
    pub fn new(
        core: TransformerCore,
        dispatcher: Arc<dyn ActionDispatcher>,
        text_state: Arc<dyn TextSelectionState>,
    ) -> Self {
        Self { core, dispatcher, text_state }
    }

    /// Run dispatches and selection updates; return the view effects.
    ///
    /// Dispatch failures are logged and otherwise ignored.
    pub async fn apply(&self, effects: Vec<Effect>) -> Vec<Effect> {
        let mut view = Vec::new();
        for effect in effects {
            match effect {
                Effect::Dispatch(action) => {
                    let (kind, element_id) = (action.action_type, action.element_id);
                    if let Err(e) = self.dispatcher.dispatch(action).await {
                        error!(error = %e, action = %kind, %element_id, "transformer action failed");
                    }
                }
                Effect::SelectedFontSize(size) => self.text_state.set_selected_normalized_font_size(size),
                other => view.push(other),
            }
        }
        view
    }

    // --- Delegated inputs ---

    pub fn update(&mut self, snapshot: EditorSnapshot) -> Vec<Effect> {
        self.core.update(snapshot)
    }

    pub fn unmount(&mut self) -> Vec<Effect> {
        self.core.unmount()
    }

    pub fn on_bus(&mut self, event: BusEvent) -> Vec<Effect> {
        self.core.on_bus(event)
    }

    pub fn on_container_resized(&mut self, id: &ElementId) -> Vec<Effect> {
        self.core.on_container_resized(id)
    }

    pub fn on_drag(&mut self, event: &DragEvent) -> Vec<Effect> {
        self.core.on_drag(event)
    }

    pub fn on_drag_group(&mut self, events: &[DragEvent]) -> Vec<Effect> {
        self.core.on_drag_group(events)
    }

    pub async fn on_drag_end(&mut self, event: DragEndEvent) -> Vec<Effect> {
        let effects = self.core.on_drag_end(event);
        self.apply(effects).await
    }

    pub async fn on_drag_group_end(&mut self, events: Vec<DragEndEvent>) -> Vec<Effect> {
        let effects = self.core.on_drag_group_end(events);
        self.apply(effects).await
    }

    pub fn on_resize_start(&mut self, event: &ResizeStartEvent) {
        self.core.on_resize_start(event);
    }

    pub fn on_resize_group_start(&mut self, events: &[ResizeStartEvent]) {
        self.core.on_resize_group_start(events);
    }

    pub fn on_resize(&mut self, event: &ResizeEvent) -> Vec<Effect> {
        self.core.on_resize(event)
    }

    pub fn on_resize_group(&mut self, events: &[ResizeEvent]) -> Vec<Effect> {
        self.core.on_resize_group(events)
    }

    pub async fn on_resize_end(&mut self, event: ResizeEndEvent) -> Vec<Effect> {
        let effects = self.core.on_resize_end(event);
        self.apply(effects).await
    }

    pub async fn on_resize_group_end(&mut self, events: Vec<ResizeEndEvent>) -> Vec<Effect> {
        let effects = self.core.on_resize_group_end(events);
        self.apply(effects).await
    }

    pub fn on_round(&mut self, event: &RoundEvent) -> Vec<Effect> {
        self.core.on_round(event)
    }

    pub async fn on_round_end(&mut self, event: RoundEndEvent) -> Vec<Effect> {
        let effects = self.core.on_round_end(event);
        self.apply(effects).await
    }

    pub fn on_rotate(&mut self, event: &RotateEvent) -> Vec<Effect> {
        self.core.on_rotate(event)
    }

    pub async fn on_rotate_end(&mut self, event: RotateEndEvent) -> Vec<Effect> {
        let effects = self.core.on_rotate_end(event);
        self.apply(effects).await
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn handles(&self) -> Option<HandleConfig> {
        self.core.handles()
    }
}
