#![forbid(unsafe_code)]

//! Color, typography, and visual-dimension vocabulary for the Aura theme engine.
//!
//! This crate defines the value types that themes and customizations are made
//! of: an RGB color with hex parsing, the enumerated visual dimensions (shape,
//! shadow, gradient, 3D effect, pattern, color arrangement), and the static
//! font catalog. Everything here is plain data; resolution and persistence
//! live in `aura-theme` and `aura-runtime`.

pub mod color;
pub mod dimension;
pub mod font;

pub use color::Rgb;
pub use dimension::{ColorArrangement, Effect3d, Gradient, Pattern, Shadow, Shape};
pub use font::{FontId, FontStack};
