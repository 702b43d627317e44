#![forbid(unsafe_code)]

//! Writing resolved values onto the presentation surface.

use aura_style::Effect3d;
use aura_theme::{EffectiveStyle, ThemePreset};

use crate::surface::{PresentationSurface, attrs, classes, props};

/// Publish a resolved style to the shared surface.
///
/// Writes every color property (plus the RGB-components variants used for
/// alpha blending), radius, gradient angle, font stacks, the per-dimension
/// data attributes, and the coarse classes from the theme's effect bundle.
/// The class set is replaced wholesale so stale pattern classes never
/// outlive a theme switch. Side effect only.
pub fn publish(surface: &mut PresentationSurface, preset: &ThemePreset, style: &EffectiveStyle) {
    let colors = &preset.colors;

    // Core color variables.
    surface.set_property(props::COLOR_CANVAS, colors.canvas.to_hex());
    surface.set_property(props::COLOR_SURFACE, colors.surface.to_hex());
    surface.set_property(props::COLOR_SURFACE_HOVER, colors.surface_hover.to_hex());
    for (name, accent) in props::COLOR_ACCENT.iter().zip(style.accents) {
        surface.set_property(name, accent.to_hex());
    }
    surface.set_property(props::COLOR_TEXT, colors.text.to_hex());
    surface.set_property(props::COLOR_TEXT_MUTED, colors.text_muted.to_hex());
    surface.set_property(props::COLOR_TEXT_DIM, colors.text_dim.to_hex());
    surface.set_property(props::COLOR_BORDER, colors.border.to_hex());
    surface.set_property(props::COLOR_SUCCESS, colors.success.to_hex());
    surface.set_property(props::COLOR_WARNING, colors.warning.to_hex());
    surface.set_property(props::COLOR_DANGER, colors.danger.to_hex());

    // RGB components for alpha-blended variants.
    surface.set_property(props::COLOR_CANVAS_RGB, colors.canvas.components());
    surface.set_property(props::COLOR_TEXT_RGB, colors.text.components());
    for (name, accent) in props::COLOR_ACCENT_RGB.iter().zip(style.accents) {
        surface.set_property(name, accent.components());
    }

    surface.set_property(props::RADIUS, style.radius.clone());
    surface.set_property(props::GRADIENT_ANGLE, style.gradient.angle());

    let font = style.font.stack();
    surface.set_property(props::FONT_PRIMARY, font.primary);
    surface.set_property(props::FONT_SECONDARY, font.secondary);
    surface.set_property(props::FONT_MONO, font.mono);

    // Per-dimension attributes.
    surface.set_attribute(attrs::THEME, preset.slug);
    surface.set_attribute(attrs::SHAPE, style.shape.as_str());
    surface.set_attribute(attrs::SHADOW, style.shadow.as_str());
    surface.set_attribute(attrs::GRADIENT, style.gradient.as_str());
    surface.set_attribute(attrs::FONT, style.font.as_str());
    surface.set_attribute(attrs::PATTERN, preset.effects.pattern.as_str());
    if style.effect_3d == Effect3d::None {
        surface.remove_attribute(attrs::EFFECT_3D);
    } else {
        surface.set_attribute(attrs::EFFECT_3D, style.effect_3d.as_str());
    }

    // Coarse classes come from the theme's effect bundle, not from overrides.
    let mut class_set: Vec<&str> = Vec::new();
    if preset.effects.backdrop {
        class_set.push(classes::BACKDROP_BLUR);
    }
    if preset.effects.glow {
        class_set.push(classes::GLOW);
    }
    let pattern_class = preset.effects.pattern.surface_class();
    if !pattern_class.is_empty() {
        class_set.push(pattern_class);
    }
    surface.set_classes(class_set);

    tracing::trace!(
        theme = preset.slug,
        shape = style.shape.as_str(),
        shadow = style.shadow.as_str(),
        gradient = style.gradient.as_str(),
        "published presentation state"
    );
}
