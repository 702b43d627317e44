#![forbid(unsafe_code)]

//! Aura public facade crate.
//!
//! Re-exports the stable surface area of the engine and offers a lightweight
//! prelude for day-to-day usage.
//!
//! # Example
//! ```
//! use aura::prelude::*;
//!
//! let mut ctx = ThemeContext::in_memory();
//! ctx.select_theme(ThemeId::Cyberpunk);
//! ctx.set_shape(Shape::Pill);
//! assert_eq!(ctx.style().shape, Shape::Pill);
//! assert_eq!(ctx.style().shadow, Shadow::Neon);
//! ```

// --- Style re-exports ------------------------------------------------------

pub use aura_style::{
    ColorArrangement, Effect3d, FontId, FontStack, Gradient, Pattern, Rgb, Shadow, Shape,
};

// --- Theme re-exports ------------------------------------------------------

pub use aura_theme::{
    ColorSet, Customization, EffectBundle, EffectiveStyle, ThemeId, ThemePreset, all, lookup,
    preset, resolve, theme_count,
};

// --- Runtime re-exports ----------------------------------------------------

pub use aura_runtime::{
    ChangeHub, CustomizationStore, FileStorage, MemoryStorage, OverrideField, PresentationSurface,
    StorageBackend, StorageError, StorageResult, StyleChanged, Subscription, ThemeContext, attrs,
    keys, props, publish,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ColorArrangement, Customization, CustomizationStore, Effect3d, EffectiveStyle, FontId,
        Gradient, Rgb, Shadow, Shape, StyleChanged, ThemeContext, ThemeId, resolve,
    };
}
