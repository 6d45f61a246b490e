//! Input model: modifier keys and resize handle directions.
//!
//! `Modifiers` captures the keyboard state sampled by the host when a widget
//! event fires. `Direction` is the widget's `[x, y]` handle vector, where each
//! component is `-1`, `0` or `1` (left/middle/right, top/middle/bottom).

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift key is held.
    #[serde(default)]
    pub shift: bool,
    /// Ctrl key is held.
    #[serde(default)]
    pub ctrl: bool,
    /// Alt / Option key is held.
    #[serde(default)]
    pub alt: bool,
    /// Meta / Command key is held.
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    /// The platform "mod" key: Ctrl or Command.
    #[must_use]
    pub fn mod_key(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Handle vector reported by the manipulation widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "[i8; 2]", into = "[i8; 2]")]
pub struct Direction {
    pub x: i8,
    pub y: i8,
}

impl Direction {
    #[must_use]
    pub fn new(x: i8, y: i8) -> Self {
        Self { x: x.signum(), y: y.signum() }
    }

    /// An edge handle has one zero component; corner handles have none.
    #[must_use]
    pub fn is_edge(&self) -> bool {
        self.x == 0 || self.y == 0
    }
}

impl From<[i8; 2]> for Direction {
    fn from([x, y]: [i8; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Direction> for [i8; 2] {
    fn from(d: Direction) -> Self {
        [d.x, d.y]
    }
}

/// Named resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleDirection {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl HandleDirection {
    /// Widget name of the handle (`"nw"`, `"e"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::Ne => "ne",
            Self::E => "e",
            Self::Se => "se",
            Self::S => "s",
            Self::Sw => "sw",
            Self::W => "w",
            Self::Nw => "nw",
        }
    }
}
