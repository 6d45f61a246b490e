//! Transformer configuration parsed from environment variables.

use crate::error::TransformerError;

pub const DEFAULT_SNAP_THRESHOLD: f64 = 10.0;
pub const DEFAULT_FREE_SNAP_THRESHOLD: f64 = 0.0;
pub const DEFAULT_MAX_SNAP_DISTANCE: f64 = 100.0;
pub const DEFAULT_TEXT_PADDING: f64 = 0.0;
pub const DEFAULT_THROTTLE_DRAG: f64 = 1.0;
pub const DEFAULT_THROTTLE_RESIZE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformerConfig {
    /// Snap distance in px while no modifier is held.
    pub snap_threshold: f64,
    /// Snap distance in px while shift is held.
    pub free_snap_threshold: f64,
    /// Max distance in px at which other elements offer guidelines.
    pub max_snap_distance: f64,
    /// Horizontal padding of the text editor, per side, in px.
    pub text_padding: f64,
    /// Drag step in px.
    pub throttle_drag: f64,
    /// Resize step in px.
    pub throttle_resize: f64,
}

impl Default for TransformerConfig {
    fn default() -> Self {
        Self {
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            free_snap_threshold: DEFAULT_FREE_SNAP_THRESHOLD,
            max_snap_distance: DEFAULT_MAX_SNAP_DISTANCE,
            text_padding: DEFAULT_TEXT_PADDING,
            throttle_drag: DEFAULT_THROTTLE_DRAG,
            throttle_resize: DEFAULT_THROTTLE_RESIZE,
        }
    }
}

impl TransformerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `TRANSFORMER_SNAP_THRESHOLD`: default 10
    /// - `TRANSFORMER_FREE_SNAP_THRESHOLD`: default 0
    /// - `TRANSFORMER_MAX_SNAP_DISTANCE`: default 100
    /// - `TRANSFORMER_TEXT_PADDING`: default 0
    /// - `TRANSFORMER_THROTTLE_DRAG`: default 1
    /// - `TRANSFORMER_THROTTLE_RESIZE`: default 1
    ///
    /// # Errors
    ///
    /// Returns [`TransformerError::ConfigParse`] if a variable is set but is not
    /// a finite, non-negative number.
    pub fn from_env() -> Result<Self, TransformerError> {
        Ok(Self {
            snap_threshold: env_parse_f64("TRANSFORMER_SNAP_THRESHOLD", DEFAULT_SNAP_THRESHOLD)?,
            free_snap_threshold: env_parse_f64("TRANSFORMER_FREE_SNAP_THRESHOLD", DEFAULT_FREE_SNAP_THRESHOLD)?,
            max_snap_distance: env_parse_f64("TRANSFORMER_MAX_SNAP_DISTANCE", DEFAULT_MAX_SNAP_DISTANCE)?,
            text_padding: env_parse_f64("TRANSFORMER_TEXT_PADDING", DEFAULT_TEXT_PADDING)?,
            throttle_drag: env_parse_f64("TRANSFORMER_THROTTLE_DRAG", DEFAULT_THROTTLE_DRAG)?,
            throttle_resize: env_parse_f64("TRANSFORMER_THROTTLE_RESIZE", DEFAULT_THROTTLE_RESIZE)?,
        })
    }
}

fn env_parse_f64(key: &str, default: f64) -> Result<f64, TransformerError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(default);
    };
    parse_length(key, &raw)
}

fn parse_length(key: &str, raw: &str) -> Result<f64, TransformerError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(TransformerError::ConfigParse(format!("{key} must be a non-negative number, got '{raw}'"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
