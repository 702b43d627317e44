#![forbid(unsafe_code)]

//! Override resolution.
//!
//! For each visual dimension the effective value is the user's override if
//! one is set, else the theme's own configured default, else a fixed system
//! fallback. Dimensions resolve independently: a missing shadow override
//! never affects shape resolution. `resolve` is a pure function: identical
//! inputs always produce identical output.

use aura_style::{ColorArrangement, Effect3d, FontId, Gradient, Rgb, Shadow, Shape};

use crate::preset::{ThemeId, ThemePreset, preset};

/// System fallback when neither override nor theme supplies a shadow.
pub const FALLBACK_SHADOW: Shadow = Shadow::Classic;
/// System fallback when neither override nor theme supplies a gradient.
pub const FALLBACK_GRADIENT: Gradient = Gradient::Linear;
/// System fallback when neither override nor theme supplies a shape.
pub const FALLBACK_SHAPE: Shape = Shape::Standard;
/// System fallback for the 3D effect (no preset configures one).
pub const FALLBACK_EFFECT_3D: Effect3d = Effect3d::None;
/// System fallback font.
pub const FALLBACK_FONT: FontId = FontId::Inter;
/// System fallback radius token.
pub const FALLBACK_RADIUS: &str = "0.5rem";

/// Per-user overrides, one nullable field per visual dimension.
///
/// `None` means "unset, defer to the theme default". The record is not tied
/// to any particular theme; switching themes leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Customization {
    pub radius: Option<String>,
    pub shape: Option<Shape>,
    pub shadow: Option<Shadow>,
    pub gradient: Option<Gradient>,
    pub effect_3d: Option<Effect3d>,
    pub font: Option<FontId>,
    pub arrangement: Option<ColorArrangement>,
}

impl Customization {
    /// True when every field is unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The resolved value for every visual dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveStyle {
    pub theme: ThemeId,
    pub shape: Shape,
    pub shadow: Shadow,
    pub gradient: Gradient,
    pub effect_3d: Effect3d,
    pub font: FontId,
    /// Resolved border-radius length token.
    pub radius: String,
    /// Accent colors after the color arrangement is applied.
    pub accents: [Rgb; 5],
}

impl EffectiveStyle {
    /// The preset this style was resolved against.
    #[must_use]
    pub fn preset(&self) -> &'static ThemePreset {
        preset(self.theme)
    }

    /// Surface class tokens in attachment order, empties skipped.
    ///
    /// This is the consolidated form of the class-mapping helpers rendering
    /// surfaces used to duplicate.
    #[must_use]
    pub fn surface_classes(&self) -> Vec<&'static str> {
        [
            self.shape.surface_class(),
            self.shadow.surface_class(),
            self.gradient.surface_class(),
            self.effect_3d.surface_class(),
            self.font.surface_class(),
        ]
        .into_iter()
        .filter(|class| !class.is_empty())
        .collect()
    }
}

/// Resolve a theme plus overrides into effective values.
#[must_use]
pub fn resolve(theme: ThemeId, custom: &Customization) -> EffectiveStyle {
    let entry = preset(theme);
    let arrangement = custom.arrangement.unwrap_or_default();
    EffectiveStyle {
        theme,
        shape: custom
            .shape
            .or(entry.effects.shape)
            .unwrap_or(FALLBACK_SHAPE),
        shadow: custom
            .shadow
            .or(entry.effects.shadow)
            .unwrap_or(FALLBACK_SHADOW),
        gradient: custom
            .gradient
            .or(entry.effects.gradient)
            .unwrap_or(FALLBACK_GRADIENT),
        effect_3d: custom.effect_3d.unwrap_or(FALLBACK_EFFECT_3D),
        font: custom.font.unwrap_or(entry.font),
        radius: custom
            .radius
            .clone()
            .unwrap_or_else(|| entry.radius.to_string()),
        accents: arrangement.apply(entry.colors.accents),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_customization_yields_theme_defaults() {
        let style = resolve(ThemeId::NeonNoir, &Customization::default());
        assert_eq!(style.shape, Shape::Standard);
        assert_eq!(style.shadow, Shadow::Neon);
        assert_eq!(style.gradient, Gradient::Linear);
        assert_eq!(style.effect_3d, Effect3d::None);
        assert_eq!(style.font, FontId::Inter);
        assert_eq!(style.radius, "1rem");
        assert_eq!(style.accents, preset(ThemeId::NeonNoir).colors.accents);
    }

    #[test]
    fn override_wins_over_theme_default() {
        let custom = Customization {
            shape: Some(Shape::Pill),
            shadow: Some(Shadow::Harsh),
            ..Customization::default()
        };
        let style = resolve(ThemeId::NeonNoir, &custom);
        assert_eq!(style.shape, Shape::Pill);
        assert_eq!(style.shadow, Shadow::Harsh);
        // Untouched dimensions still come from the theme.
        assert_eq!(style.gradient, Gradient::Linear);
        assert_eq!(style.font, FontId::Inter);
    }

    #[test]
    fn neon_noir_scenario_from_contract() {
        // neonNoir defaults: shadow neon, shape standard. With shadow unset
        // and shape angular, shadow stays neon and shape follows the override.
        let custom = Customization {
            shape: Some(Shape::Angular),
            shadow: None,
            ..Customization::default()
        };
        let style = resolve(ThemeId::NeonNoir, &custom);
        assert_eq!(style.shadow, Shadow::Neon);
        assert_eq!(style.shape, Shape::Angular);
    }

    #[test]
    fn legacy_preset_falls_through_to_system_fallbacks() {
        // leatherLux configures none of the advanced effect dimensions.
        let style = resolve(ThemeId::LeatherLux, &Customization::default());
        assert_eq!(style.shadow, FALLBACK_SHADOW);
        assert_eq!(style.gradient, FALLBACK_GRADIENT);
        assert_eq!(style.shape, FALLBACK_SHAPE);
        assert_eq!(style.effect_3d, FALLBACK_EFFECT_3D);
        // Font and radius always come from the preset itself.
        assert_eq!(style.font, FontId::WorkSans);
        assert_eq!(style.radius, "0.25rem");
    }

    #[test]
    fn overrides_apply_to_legacy_presets_too() {
        let custom = Customization {
            gradient: Some(Gradient::Duotone),
            ..Customization::default()
        };
        let style = resolve(ThemeId::LatexNoir, &custom);
        assert_eq!(style.gradient, Gradient::Duotone);
        assert_eq!(style.shadow, FALLBACK_SHADOW);
    }

    #[test]
    fn dimensions_resolve_independently() {
        // An override in one dimension must not perturb any other.
        let base = resolve(ThemeId::Cyberpunk, &Customization::default());
        let custom = Customization {
            shadow: Some(Shadow::Inner),
            ..Customization::default()
        };
        let styled = resolve(ThemeId::Cyberpunk, &custom);
        assert_eq!(styled.shadow, Shadow::Inner);
        assert_eq!(styled.shape, base.shape);
        assert_eq!(styled.gradient, base.gradient);
        assert_eq!(styled.effect_3d, base.effect_3d);
        assert_eq!(styled.font, base.font);
        assert_eq!(styled.radius, base.radius);
        assert_eq!(styled.accents, base.accents);
    }

    #[test]
    fn rotate_forward_reorders_accents() {
        let custom = Customization {
            arrangement: Some(ColorArrangement::RotateForward),
            ..Customization::default()
        };
        let style = resolve(ThemeId::NeonNoir, &custom);
        let original = preset(ThemeId::NeonNoir).colors.accents;
        assert_eq!(
            style.accents,
            [original[1], original[2], original[3], original[4], original[0]]
        );
    }

    #[test]
    fn custom_radius_is_used_verbatim() {
        let custom = Customization {
            radius: Some("2rem".to_string()),
            ..Customization::default()
        };
        let style = resolve(ThemeId::SoftPastel, &custom);
        assert_eq!(style.radius, "2rem");
    }

    #[test]
    fn resolve_is_deterministic() {
        let custom = Customization {
            shape: Some(Shape::Blob),
            font: Some(FontId::FiraCode),
            arrangement: Some(ColorArrangement::RotateBackward),
            radius: Some("0.75rem".to_string()),
            ..Customization::default()
        };
        for id in ThemeId::ALL {
            assert_eq!(resolve(id, &custom), resolve(id, &custom));
        }
    }

    #[test]
    fn surface_classes_skip_empty_tokens() {
        let custom = Customization {
            shadow: Some(Shadow::None),
            gradient: Some(Gradient::None),
            ..Customization::default()
        };
        let style = resolve(ThemeId::NeonNoir, &custom);
        let classes = style.surface_classes();
        assert!(classes.contains(&"rounded-theme"));
        assert!(classes.contains(&"font-inter"));
        assert!(!classes.iter().any(|c| c.starts_with("shadow-theme")));
        assert!(!classes.iter().any(|c| c.starts_with("bg-gradient")));
    }

    #[test]
    fn surface_classes_reflect_overrides() {
        let custom = Customization {
            shape: Some(Shape::Pill),
            effect_3d: Some(Effect3d::Floating),
            font: Some(FontId::SpaceGrotesk),
            ..Customization::default()
        };
        let style = resolve(ThemeId::DommeSupreme, &custom);
        let classes = style.surface_classes();
        assert!(classes.contains(&"rounded-pill"));
        assert!(classes.contains(&"effect-3d-floating"));
        assert!(classes.contains(&"font-space-grotesk"));
        assert!(classes.contains(&"shadow-theme-classic"));
    }
}
