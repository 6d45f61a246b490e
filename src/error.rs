//! Error type shared by the transformer modules.

use uuid::Uuid;

/// Errors produced by transformer operations.
///
/// Gesture handlers never surface these to the user: they log the error and
/// treat the frame as a no-op. The type exists so the fallible helpers can use
/// `?` and so hosts can see why a dispatch or a config load failed.
#[derive(Debug, thiserror::Error)]
pub enum TransformerError {
    /// An environment variable held a value that could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A clip-path string did not contain four `x% y%` corner pairs.
    #[error("clip path parse failed: {0}")]
    ClipPathParse(String),

    /// A bounding rectangle the handler needs was not available.
    #[error("bounds unavailable for {what}")]
    MissingBounds { what: &'static str },

    /// A widget event referenced an element that is not in the selection.
    #[error("element {0} is not selected")]
    UnknownElement(Uuid),

    /// A named bus event was not one of the transformer signals.
    #[error("unknown bus event: {0}")]
    UnknownBusEvent(String),

    /// The external dispatcher rejected or failed an action.
    #[error("dispatch failed: {0}")]
    Dispatch(String),

    /// Reading a replay script failed.
    #[error("io failed: {0}")]
    Io(#[from] std::io::Error),

    /// A replay script or payload was not valid JSON.
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
