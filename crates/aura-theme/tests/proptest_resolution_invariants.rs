//! Property-based invariant tests for override resolution.
//!
//! These verify the contract that must hold for any theme and any
//! customization state:
//!
//! 1. Resolution is deterministic.
//! 2. An unset dimension resolves to the theme default (or system fallback).
//! 3. A set override always wins for its own dimension.
//! 4. Dimensions are independent: changing one override never changes
//!    another dimension's resolution.
//! 5. Rotate-forward then rotate-backward restores the accent tuple.
//! 6. Swap primary/secondary is an involution.
//! 7. Every arrangement is a permutation (same multiset of colors).

use aura_style::{ColorArrangement, Effect3d, FontId, Gradient, Shadow, Shape};
use aura_theme::{Customization, ThemeId, preset, resolve};
use proptest::option;
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn theme_strategy() -> impl Strategy<Value = ThemeId> {
    (0..ThemeId::ALL.len()).prop_map(ThemeId::from_index)
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    prop::sample::select(Shape::ALL.to_vec())
}

fn shadow_strategy() -> impl Strategy<Value = Shadow> {
    prop::sample::select(Shadow::ALL.to_vec())
}

fn gradient_strategy() -> impl Strategy<Value = Gradient> {
    prop::sample::select(Gradient::ALL.to_vec())
}

fn effect_strategy() -> impl Strategy<Value = Effect3d> {
    prop::sample::select(Effect3d::ALL.to_vec())
}

fn font_strategy() -> impl Strategy<Value = FontId> {
    prop::sample::select(FontId::ALL.to_vec())
}

fn arrangement_strategy() -> impl Strategy<Value = ColorArrangement> {
    prop::sample::select(ColorArrangement::ALL.to_vec())
}

fn radius_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["0", "0.25rem", "0.5rem", "0.75rem", "1rem", "2rem", "13px"])
        .prop_map(str::to_string)
}

fn customization_strategy() -> impl Strategy<Value = Customization> {
    (
        option::of(radius_strategy()),
        option::of(shape_strategy()),
        option::of(shadow_strategy()),
        option::of(gradient_strategy()),
        option::of(effect_strategy()),
        option::of(font_strategy()),
        option::of(arrangement_strategy()),
    )
        .prop_map(
            |(radius, shape, shadow, gradient, effect_3d, font, arrangement)| Customization {
                radius,
                shape,
                shadow,
                gradient,
                effect_3d,
                font,
                arrangement,
            },
        )
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Resolution is deterministic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolve_is_deterministic(theme in theme_strategy(), custom in customization_strategy()) {
        prop_assert_eq!(resolve(theme, &custom), resolve(theme, &custom));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Unset dimensions resolve to theme default or system fallback
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unset_dimension_uses_theme_default(theme in theme_strategy(), custom in customization_strategy()) {
        let entry = preset(theme);
        let style = resolve(theme, &custom);
        if custom.shadow.is_none() {
            prop_assert_eq!(
                style.shadow,
                entry.effects.shadow.unwrap_or(aura_theme::FALLBACK_SHADOW)
            );
        }
        if custom.gradient.is_none() {
            prop_assert_eq!(
                style.gradient,
                entry.effects.gradient.unwrap_or(aura_theme::FALLBACK_GRADIENT)
            );
        }
        if custom.shape.is_none() {
            prop_assert_eq!(
                style.shape,
                entry.effects.shape.unwrap_or(aura_theme::FALLBACK_SHAPE)
            );
        }
        if custom.effect_3d.is_none() {
            prop_assert_eq!(style.effect_3d, aura_theme::FALLBACK_EFFECT_3D);
        }
        if custom.font.is_none() {
            prop_assert_eq!(style.font, entry.font);
        }
        if custom.radius.is_none() {
            prop_assert_eq!(style.radius.as_str(), entry.radius);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. A set override always wins
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn set_override_wins(theme in theme_strategy(), custom in customization_strategy()) {
        let style = resolve(theme, &custom);
        if let Some(shape) = custom.shape {
            prop_assert_eq!(style.shape, shape);
        }
        if let Some(shadow) = custom.shadow {
            prop_assert_eq!(style.shadow, shadow);
        }
        if let Some(gradient) = custom.gradient {
            prop_assert_eq!(style.gradient, gradient);
        }
        if let Some(effect) = custom.effect_3d {
            prop_assert_eq!(style.effect_3d, effect);
        }
        if let Some(font) = custom.font {
            prop_assert_eq!(style.font, font);
        }
        if let Some(radius) = custom.radius.as_deref() {
            prop_assert_eq!(style.radius.as_str(), radius);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Dimensions are independent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn shadow_override_leaves_other_dimensions_alone(
        theme in theme_strategy(),
        custom in customization_strategy(),
        shadow in shadow_strategy(),
    ) {
        let base = resolve(theme, &custom);
        let perturbed = resolve(theme, &Customization { shadow: Some(shadow), ..custom.clone() });
        prop_assert_eq!(perturbed.shape, base.shape);
        prop_assert_eq!(perturbed.gradient, base.gradient);
        prop_assert_eq!(perturbed.effect_3d, base.effect_3d);
        prop_assert_eq!(perturbed.font, base.font);
        prop_assert_eq!(perturbed.radius, base.radius);
        prop_assert_eq!(perturbed.accents, base.accents);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5 & 6. Arrangement algebra
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rotate_round_trip_restores_accents(theme in theme_strategy()) {
        let accents = preset(theme).colors.accents;
        let forward = ColorArrangement::RotateForward.apply(accents);
        prop_assert_eq!(ColorArrangement::RotateBackward.apply(forward), accents);
    }

    #[test]
    fn swap_twice_restores_accents(theme in theme_strategy()) {
        let accents = preset(theme).colors.accents;
        let swapped = ColorArrangement::PrimarySecondary.apply(accents);
        prop_assert_eq!(ColorArrangement::PrimarySecondary.apply(swapped), accents);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Arrangements are permutations
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arrangements_preserve_the_color_multiset(
        theme in theme_strategy(),
        arrangement in arrangement_strategy(),
    ) {
        let original = preset(theme).colors.accents;
        let arranged = arrangement.apply(original);
        let mut original_sorted: Vec<_> =
            original.iter().map(|c| (c.r, c.g, c.b)).collect();
        let mut arranged_sorted: Vec<_> =
            arranged.iter().map(|c| (c.r, c.g, c.b)).collect();
        original_sorted.sort_unstable();
        arranged_sorted.sort_unstable();
        prop_assert_eq!(original_sorted, arranged_sorted);
    }
}
