//! Named editor-bus signals understood by the transformer.

#[cfg(test)]
#[path = "bus_test.rs"]
mod bus_test;

use std::str::FromStr;

use crate::error::TransformerError;

/// Inbound signal from the editor's global event bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    /// Hide the handles without dropping the selection.
    HideResizer,
    /// Show the handles again.
    ShowResizer,
    /// Recompute handle geometry now.
    UpdateResizer,
}

impl BusEvent {
    /// Event name on the bus.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::HideResizer => "canvas-editor/hideResizer",
            Self::ShowResizer => "canvas-editor/showResizer",
            Self::UpdateResizer => "canvas-editor/updateResizer",
        }
    }
}

impl FromStr for BusEvent {
    type Err = TransformerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "canvas-editor/hideResizer" => Ok(Self::HideResizer),
            "canvas-editor/showResizer" => Ok(Self::ShowResizer),
            "canvas-editor/updateResizer" => Ok(Self::UpdateResizer),
            other => Err(TransformerError::UnknownBusEvent(other.to_owned())),
        }
    }
}
