//! Selection transformer for a slide editor canvas.
//!
//! The transformer sits between the editor's selection state and an external
//! handle widget. It decides which elements get handles and how the widget is
//! configured, turns live drag/resize/round/rotate/crop frames into style
//! previews, and commits exactly one persisted action per element when a
//! gesture ends. The host is responsible for applying [`engine::Effect`]s to
//! the DOM and for delivering widget events.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Transformer`] and testable [`engine::TransformerCore`] |
//! | [`selection`] | Editor snapshot and selection resolution |
//! | [`event`] | Widget event payloads and persisted actions |
//! | [`resize`] | Per-frame resize previews and text font scaling |
//! | [`crop`] | Crop regions, clip paths, and the crop session tracker |
//! | [`snap`] | Snap guideline settings |
//! | [`services`] | Collaborator traits and their default implementations |
//! | [`element`] | Slide element types |
//! | [`geom`] | Points, sizes, rects, and canvas dimensions |
//! | [`input`] | Keyboard modifiers and handle directions |
//! | [`style`] | Inline style maps |
//! | [`bus`] | Editor bus signals |
//! | [`config`] | Environment-driven configuration |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared constants (handle directions, guideline inset, etc.) |

pub mod bus;
pub mod config;
pub mod consts;
pub mod crop;
pub mod element;
pub mod engine;
pub mod error;
pub mod event;
pub mod geom;
pub mod input;
pub mod resize;
pub mod selection;
pub mod services;
pub mod snap;
pub mod style;
