//! Inline style previews.
//!
//! While a gesture is live the transformer never touches element state.
//! Instead it hands the host a [`StyleMap`] of CSS properties to merge onto a
//! DOM node. Keys are CSS property names in kebab case.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An ordered set of inline CSS declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(property.into(), value.into());
        self
    }

    /// Set a property to a pixel length.
    pub fn set_px(&mut self, property: impl Into<String>, value: f64) -> &mut Self {
        self.set(property, px(value))
    }

    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Format a CSS pixel length.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}
