#![forbid(unsafe_code)]

//! The shared presentation surface.
//!
//! An injectable stand-in for document-level presentation state: named custom
//! properties, data attributes, and coarse classes. The publisher is the only
//! writer; rendering surfaces read it (directly or via change events) to
//! derive their own styling. Keeping it an owned value rather than a
//! process-wide global preserves the "any surface can read current effective
//! values" contract while staying testable.

use std::collections::{BTreeMap, BTreeSet};

/// Custom-property names written by the publisher.
pub mod props {
    pub const COLOR_CANVAS: &str = "--color-canvas";
    pub const COLOR_SURFACE: &str = "--color-surface";
    pub const COLOR_SURFACE_HOVER: &str = "--color-surface-hover";
    pub const COLOR_ACCENT: [&str; 5] = [
        "--color-accent-1",
        "--color-accent-2",
        "--color-accent-3",
        "--color-accent-4",
        "--color-accent-5",
    ];
    pub const COLOR_TEXT: &str = "--color-text";
    pub const COLOR_TEXT_MUTED: &str = "--color-text-muted";
    pub const COLOR_TEXT_DIM: &str = "--color-text-dim";
    pub const COLOR_BORDER: &str = "--color-border";
    pub const COLOR_SUCCESS: &str = "--color-success";
    pub const COLOR_WARNING: &str = "--color-warning";
    pub const COLOR_DANGER: &str = "--color-danger";
    /// RGB-components variants for alpha blending.
    pub const COLOR_CANVAS_RGB: &str = "--color-canvas-rgb";
    pub const COLOR_TEXT_RGB: &str = "--color-text-rgb";
    pub const COLOR_ACCENT_RGB: [&str; 5] = [
        "--color-accent-1-rgb",
        "--color-accent-2-rgb",
        "--color-accent-3-rgb",
        "--color-accent-4-rgb",
        "--color-accent-5-rgb",
    ];
    pub const RADIUS: &str = "--radius";
    pub const GRADIENT_ANGLE: &str = "--gradient-angle";
    pub const FONT_PRIMARY: &str = "--font-primary";
    pub const FONT_SECONDARY: &str = "--font-secondary";
    pub const FONT_MONO: &str = "--font-mono";
}

/// Data-attribute names consumed by styling rules.
pub mod attrs {
    pub const SHAPE: &str = "data-shape-type";
    pub const SHADOW: &str = "data-shadow-type";
    pub const GRADIENT: &str = "data-gradient-type";
    pub const EFFECT_3D: &str = "data-effect-3d";
    pub const FONT: &str = "data-font-type";
    pub const PATTERN: &str = "data-pattern";
    /// Active theme slug, for theme-scoped styling rules.
    pub const THEME: &str = "data-theme";
}

/// Coarse presentation classes toggled wholesale on publish.
pub mod classes {
    pub const BACKDROP_BLUR: &str = "has-backdrop-blur";
    pub const GLOW: &str = "has-glow";
}

/// Shared presentation state: properties, attributes, classes.
///
/// Maps are ordered so iteration (and debug output) is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationSurface {
    properties: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

impl PresentationSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom property.
    pub fn set_property(&mut self, name: &str, value: impl Into<String>) {
        self.properties.insert(name.to_string(), value.into());
    }

    /// Read a custom property.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Set a data attribute.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    /// Remove a data attribute. Returns the prior value if present.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    /// Read a data attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Add a coarse class.
    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    /// Remove a coarse class.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Replace the whole class set.
    pub fn set_classes<I, S>(&mut self, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Ordered iteration over custom properties.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Ordered iteration over data attributes.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Ordered iteration over coarse classes.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}
