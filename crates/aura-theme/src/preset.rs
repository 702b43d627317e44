#![forbid(unsafe_code)]

//! Theme preset types and catalog access.

use aura_style::{FontId, Gradient, Pattern, Rgb, Shadow, Shape};

use crate::catalog::THEMES;

/// Built-in theme identifiers, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeId {
    NeonNoir,
    WarmVelvet,
    SoftPastel,
    Cyberpunk,
    KinkElegance,
    QueerPride,
    DungeonChic,
    SensualVelvet,
    DommeSupreme,
    LeatherLux,
    NeonFemme,
    DarkRomance,
    QueerRebel,
    GoddessGold,
    SissyPink,
    LatexNoir,
    SapphicSunset,
    FetishPalace,
}

impl ThemeId {
    pub const ALL: [ThemeId; 18] = [
        ThemeId::NeonNoir,
        ThemeId::WarmVelvet,
        ThemeId::SoftPastel,
        ThemeId::Cyberpunk,
        ThemeId::KinkElegance,
        ThemeId::QueerPride,
        ThemeId::DungeonChic,
        ThemeId::SensualVelvet,
        ThemeId::DommeSupreme,
        ThemeId::LeatherLux,
        ThemeId::NeonFemme,
        ThemeId::DarkRomance,
        ThemeId::QueerRebel,
        ThemeId::GoddessGold,
        ThemeId::SissyPink,
        ThemeId::LatexNoir,
        ThemeId::SapphicSunset,
        ThemeId::FetishPalace,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            ThemeId::NeonNoir => 0,
            ThemeId::WarmVelvet => 1,
            ThemeId::SoftPastel => 2,
            ThemeId::Cyberpunk => 3,
            ThemeId::KinkElegance => 4,
            ThemeId::QueerPride => 5,
            ThemeId::DungeonChic => 6,
            ThemeId::SensualVelvet => 7,
            ThemeId::DommeSupreme => 8,
            ThemeId::LeatherLux => 9,
            ThemeId::NeonFemme => 10,
            ThemeId::DarkRomance => 11,
            ThemeId::QueerRebel => 12,
            ThemeId::GoddessGold => 13,
            ThemeId::SissyPink => 14,
            ThemeId::LatexNoir => 15,
            ThemeId::SapphicSunset => 16,
            ThemeId::FetishPalace => 17,
        }
    }

    /// The storage token, as written under the `current-theme` key.
    ///
    /// Tokens are inherited from earlier releases and are not uniformly
    /// cased; they must stay byte-for-byte stable so existing stored
    /// selections keep resolving.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            ThemeId::NeonNoir => "neonNoir",
            ThemeId::WarmVelvet => "warmVelvet",
            ThemeId::SoftPastel => "softPastel",
            ThemeId::Cyberpunk => "cyberpunk",
            ThemeId::KinkElegance => "kinkElegance",
            ThemeId::QueerPride => "queerPride",
            ThemeId::DungeonChic => "dungeonChic",
            ThemeId::SensualVelvet => "sensualVelvet",
            ThemeId::DommeSupreme => "dommeSupreme",
            ThemeId::LeatherLux => "leatherLux",
            ThemeId::NeonFemme => "neonFemme",
            ThemeId::DarkRomance => "darkRomance",
            ThemeId::QueerRebel => "queerRebel",
            ThemeId::GoddessGold => "goddessGold",
            ThemeId::SissyPink => "sissy_pink",
            ThemeId::LatexNoir => "latex_noir",
            ThemeId::SapphicSunset => "sapphic_sunset",
            ThemeId::FetishPalace => "fetish_palace",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.key() == key)
    }

    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Self::ALL[idx % Self::ALL.len()]
    }

    /// Display name from the catalog.
    #[must_use]
    pub fn name(self) -> &'static str {
        preset(self).name
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }
}

/// Full color token set for one preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSet {
    pub canvas: Rgb,
    pub surface: Rgb,
    pub surface_hover: Rgb,
    /// Ordered accent colors, subject to color-arrangement transforms.
    pub accents: [Rgb; 5],
    pub text: Rgb,
    pub text_muted: Rgb,
    pub text_dim: Rgb,
    pub border: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub danger: Rgb,
}

/// Default effect settings bundled with a preset.
///
/// The optional slots model presets that predate the advanced-effects fields;
/// `None` defers to the engine's fixed fallback for that dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectBundle {
    pub backdrop: bool,
    pub glow: bool,
    pub pattern: Pattern,
    pub shadow: Option<Shadow>,
    pub gradient: Option<Gradient>,
    pub shape: Option<Shape>,
}

/// A named, immutable bundle of default colors, radius, and effect settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    pub name: &'static str,
    /// Kebab-case identifier exposed to styling rules.
    pub slug: &'static str,
    pub description: &'static str,
    pub colors: ColorSet,
    /// Border-radius length token (CSS length).
    pub radius: &'static str,
    pub effects: EffectBundle,
    pub font: FontId,
}

/// The preset for a theme id. Infallible: every id has a catalog entry.
#[must_use]
pub fn preset(id: ThemeId) -> &'static ThemePreset {
    &THEMES[id.index()]
}

/// Look up a preset by storage key. Unknown keys return `None`.
#[must_use]
pub fn lookup(key: &str) -> Option<(ThemeId, &'static ThemePreset)> {
    ThemeId::from_key(key).map(|id| (id, preset(id)))
}

/// Ordered iteration over the whole catalog.
pub fn all() -> impl Iterator<Item = (ThemeId, &'static ThemePreset)> {
    ThemeId::ALL.iter().map(|&id| (id, preset(id)))
}

/// Number of built-in presets.
#[must_use]
pub const fn theme_count() -> usize {
    ThemeId::ALL.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_has_a_catalog_entry() {
        for (id, preset) in all() {
            assert!(!preset.name.is_empty(), "{id:?} missing name");
            assert!(!preset.slug.is_empty(), "{id:?} missing slug");
            assert!(!preset.radius.is_empty(), "{id:?} missing radius");
        }
        assert_eq!(all().count(), theme_count());
    }

    #[test]
    fn keys_round_trip() {
        for id in ThemeId::ALL {
            assert_eq!(ThemeId::from_key(id.key()), Some(id));
        }
        assert_eq!(ThemeId::from_key("doesNotExist"), None);
        assert_eq!(ThemeId::from_key(""), None);
    }

    #[test]
    fn lookup_by_key() {
        let (id, entry) = lookup("neonNoir").expect("known key");
        assert_eq!(id, ThemeId::NeonNoir);
        assert_eq!(entry.slug, "neon-noir");
        assert!(lookup("doesNotExist").is_none());
        assert!(lookup("neon-noir").is_none(), "slugs are not storage keys");
    }

    #[test]
    fn keys_and_slugs_are_unique() {
        for i in 0..ThemeId::ALL.len() {
            for j in (i + 1)..ThemeId::ALL.len() {
                let (a, b) = (ThemeId::ALL[i], ThemeId::ALL[j]);
                assert_ne!(a.key(), b.key());
                assert_ne!(preset(a).slug, preset(b).slug);
                assert_ne!(preset(a).name, preset(b).name);
            }
        }
    }

    #[test]
    fn cycling_wraps_both_directions() {
        assert_eq!(ThemeId::FetishPalace.next(), ThemeId::NeonNoir);
        assert_eq!(ThemeId::NeonNoir.prev(), ThemeId::FetishPalace);
        let mut id = ThemeId::NeonNoir;
        for _ in 0..theme_count() {
            id = id.next();
        }
        assert_eq!(id, ThemeId::NeonNoir);
    }

    #[test]
    fn next_and_prev_are_inverses() {
        for id in ThemeId::ALL {
            assert_eq!(id.next().prev(), id);
            assert_eq!(id.prev().next(), id);
        }
    }

    #[test]
    fn neon_noir_matches_its_catalog_entry() {
        let entry = preset(ThemeId::NeonNoir);
        assert_eq!(entry.name, "Neon Noir");
        assert_eq!(entry.slug, "neon-noir");
        assert_eq!(entry.radius, "1rem");
        assert_eq!(entry.effects.shadow, Some(Shadow::Neon));
        assert_eq!(entry.effects.shape, Some(Shape::Standard));
        assert_eq!(entry.font, FontId::Inter);
        assert_eq!(entry.colors.accents[0], Rgb::hex(0xE000B8));
    }

    #[test]
    fn legacy_presets_defer_advanced_effects() {
        for id in [
            ThemeId::LeatherLux,
            ThemeId::NeonFemme,
            ThemeId::DarkRomance,
            ThemeId::QueerRebel,
            ThemeId::SissyPink,
            ThemeId::LatexNoir,
            ThemeId::SapphicSunset,
            ThemeId::FetishPalace,
        ] {
            let effects = preset(id).effects;
            assert_eq!(effects.shadow, None, "{id:?}");
            assert_eq!(effects.gradient, None, "{id:?}");
            assert_eq!(effects.shape, None, "{id:?}");
        }
    }

    #[test]
    fn canvas_colors_are_distinct_across_presets() {
        // Backgrounds are the strongest identity carrier; no two presets
        // should share one.
        for i in 0..ThemeId::ALL.len() {
            for j in (i + 1)..ThemeId::ALL.len() {
                assert_ne!(
                    preset(ThemeId::ALL[i]).colors.canvas,
                    preset(ThemeId::ALL[j]).colors.canvas,
                    "{:?} and {:?} share a canvas color",
                    ThemeId::ALL[i],
                    ThemeId::ALL[j]
                );
            }
        }
    }

    #[test]
    fn soft_pastel_is_the_only_light_canvas() {
        for (id, entry) in all() {
            let luminance = entry.colors.canvas.luminance_u8();
            if id == ThemeId::SoftPastel {
                assert!(luminance > 200, "Soft Pastel canvas should be light");
            } else {
                assert!(luminance < 110, "{id:?} canvas should be dark");
            }
        }
    }
}
