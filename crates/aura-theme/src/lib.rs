#![forbid(unsafe_code)]

//! Theme preset catalog and override-resolution engine.
//!
//! [`ThemeId`] names the built-in presets; [`preset`] and [`lookup`] access
//! the compiled-in catalog. [`resolve`] merges a preset with a
//! [`Customization`] into an [`EffectiveStyle`]: the final value for every
//! visual dimension after the override → theme default → system fallback
//! precedence chain.

pub mod catalog;
pub mod preset;
pub mod resolve;

pub use preset::{ColorSet, EffectBundle, ThemeId, ThemePreset, all, lookup, preset, theme_count};
pub use resolve::{
    Customization, EffectiveStyle, FALLBACK_EFFECT_3D, FALLBACK_FONT, FALLBACK_GRADIENT,
    FALLBACK_RADIUS, FALLBACK_SHADOW, FALLBACK_SHAPE, resolve,
};
