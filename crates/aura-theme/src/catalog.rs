#![forbid(unsafe_code)]

//! The compiled-in preset catalog.
//!
//! Adding a theme is a data change here plus a new [`ThemeId`] variant;
//! nothing is created or mutated at runtime.
//!
//! [`ThemeId`]: crate::preset::ThemeId

use aura_style::{FontId, Gradient, Pattern, Rgb, Shadow, Shape};

use crate::preset::{ColorSet, EffectBundle, ThemePreset};

// Presets that predate the advanced-effects fields fall back through these
// bundles; `sissy_pink` also never declared status colors upstream and takes
// the fixed status trio below.
const STATUS_SUCCESS: Rgb = Rgb::hex(0x228B22);
const STATUS_WARNING: Rgb = Rgb::hex(0xFF8C00);
const STATUS_DANGER: Rgb = Rgb::hex(0xDC143C);

pub(crate) static THEMES: [ThemePreset; 18] = [
    ThemePreset {
        name: "Neon Noir",
        slug: "neon-noir",
        description: "Rich neon noir with magenta, indigo, cyan & pink accents, 16px soft curves, subtle glass blur",
        colors: ColorSet {
            canvas: Rgb::hex(0x0B0B11),
            surface: Rgb::hex(0x1A1A22),
            surface_hover: Rgb::hex(0x242432),
            accents: [
                Rgb::hex(0xE000B8),
                Rgb::hex(0x4F00FF),
                Rgb::hex(0x00D4FF),
                Rgb::hex(0xFF006B),
                Rgb::hex(0x9D00FF),
            ],
            text: Rgb::hex(0xF0F0F0),
            text_muted: Rgb::hex(0xB8B8C0),
            text_dim: Rgb::hex(0x808090),
            border: Rgb::hex(0x2A2A38),
            success: Rgb::hex(0x00FF88),
            warning: Rgb::hex(0xFFB800),
            danger: Rgb::hex(0xFF3860),
        },
        radius: "1rem",
        effects: EffectBundle {
            backdrop: true,
            glow: true,
            pattern: Pattern::Subtle,
            shadow: Some(Shadow::Neon),
            gradient: Some(Gradient::Linear),
            shape: Some(Shape::Standard),
        },
        font: FontId::Inter,
    },
    ThemePreset {
        name: "Warm Velvet",
        slug: "warm-velvet",
        description: "Rich burgundy with gold, cream, bronze & burlywood accents, 12px curves, textured backgrounds",
        colors: ColorSet {
            canvas: Rgb::hex(0x2D1B1B),
            surface: Rgb::hex(0x3D2626),
            surface_hover: Rgb::hex(0x4A3030),
            accents: [
                Rgb::hex(0xD4AF37),
                Rgb::hex(0xF5F5DC),
                Rgb::hex(0xCD853F),
                Rgb::hex(0xDEB887),
                Rgb::hex(0xB8860B),
            ],
            text: Rgb::hex(0xF5F5DC),
            text_muted: Rgb::hex(0xE6E6D3),
            text_dim: Rgb::hex(0xC4C4AA),
            border: Rgb::hex(0x5A4040),
            success: Rgb::hex(0x228B22),
            warning: Rgb::hex(0xFF8C00),
            danger: Rgb::hex(0xDC143C),
        },
        radius: "0.75rem",
        effects: EffectBundle {
            backdrop: false,
            glow: false,
            pattern: Pattern::Texture,
            shadow: Some(Shadow::Soft),
            gradient: Some(Gradient::Linear),
            shape: Some(Shape::Standard),
        },
        font: FontId::Playfair,
    },
    ThemePreset {
        name: "Soft Pastel",
        slug: "soft-pastel",
        description: "Soft ivory with coral, teal, plum & pale green accents, 8px curves, airy whitespace",
        colors: ColorSet {
            canvas: Rgb::hex(0xFFFFF0),
            surface: Rgb::hex(0xF8F8FF),
            surface_hover: Rgb::hex(0xF0F0FA),
            accents: [
                Rgb::hex(0xFF7F7F),
                Rgb::hex(0x40E0D0),
                Rgb::hex(0xDDA0DD),
                Rgb::hex(0x98FB98),
                Rgb::hex(0xF0E68C),
            ],
            text: Rgb::hex(0x2F2F2F),
            text_muted: Rgb::hex(0x606060),
            text_dim: Rgb::hex(0x808080),
            border: Rgb::hex(0xE0E0E0),
            success: Rgb::hex(0x90EE90),
            warning: Rgb::hex(0xFFD700),
            danger: Rgb::hex(0xFFB6C1),
        },
        radius: "0.5rem",
        effects: EffectBundle {
            backdrop: false,
            glow: false,
            pattern: Pattern::None,
            shadow: Some(Shadow::Soft),
            gradient: Some(Gradient::Linear),
            shape: Some(Shape::Standard),
        },
        font: FontId::WorkSans,
    },
    ThemePreset {
        name: "Cyberpunk",
        slug: "cyberpunk",
        description: "Dark cyberpunk with neon green, blue, magenta & yellow accents, sharp 4px corners, glitch effects",
        colors: ColorSet {
            canvas: Rgb::hex(0x0A0A0A),
            surface: Rgb::hex(0x1A1A1A),
            surface_hover: Rgb::hex(0x252525),
            accents: [
                Rgb::hex(0x00FF41),
                Rgb::hex(0x0080FF),
                Rgb::hex(0xFF0080),
                Rgb::hex(0xFFFF00),
                Rgb::hex(0xFF4000),
            ],
            text: Rgb::hex(0x00FF41),
            text_muted: Rgb::hex(0x80FF80),
            text_dim: Rgb::hex(0x40AA40),
            border: Rgb::hex(0x333333),
            success: Rgb::hex(0x00FF00),
            warning: Rgb::hex(0xFFAA00),
            danger: Rgb::hex(0xFF0040),
        },
        radius: "0.25rem",
        effects: EffectBundle {
            backdrop: false,
            glow: true,
            pattern: Pattern::Grid,
            shadow: Some(Shadow::Neon),
            gradient: Some(Gradient::Duotone),
            shape: Some(Shape::Angular),
        },
        font: FontId::SourceCode,
    },
    ThemePreset {
        name: "Kink Elegance",
        slug: "kink-elegance",
        description: "Deep wine with crimson, dark red & pink accents, elegant 12px curves, subtle glass blur",
        colors: ColorSet {
            canvas: Rgb::hex(0x1A0B0F),
            surface: Rgb::hex(0x2D1419),
            surface_hover: Rgb::hex(0x3D1B23),
            accents: [
                Rgb::hex(0xDC143C),
                Rgb::hex(0x8B0000),
                Rgb::hex(0xFF69B4),
                Rgb::hex(0x4B0082),
                Rgb::hex(0xB8860B),
            ],
            text: Rgb::hex(0xF5F5DC),
            text_muted: Rgb::hex(0xD3D3D3),
            text_dim: Rgb::hex(0xA9A9A9),
            border: Rgb::hex(0x8B0000),
            success: Rgb::hex(0x008000),
            warning: Rgb::hex(0xFFA500),
            danger: Rgb::hex(0xFF0000),
        },
        radius: "0.75rem",
        effects: EffectBundle {
            backdrop: true,
            glow: false,
            pattern: Pattern::Subtle,
            shadow: Some(Shadow::Soft),
            gradient: Some(Gradient::Linear),
            shape: Some(Shape::Standard),
        },
        font: FontId::Crimson,
    },
    ThemePreset {
        name: "Queer Pride",
        slug: "queer-pride",
        description: "Rich brown with pink, purple, turquoise & gold accents, 16px curves, rainbow glow",
        colors: ColorSet {
            canvas: Rgb::hex(0x2C1810),
            surface: Rgb::hex(0x3D2419),
            surface_hover: Rgb::hex(0x4A2D21),
            accents: [
                Rgb::hex(0xFF69B4),
                Rgb::hex(0x9370DB),
                Rgb::hex(0x00CED1),
                Rgb::hex(0xFFD700),
                Rgb::hex(0xFF4500),
            ],
            text: Rgb::hex(0xFFFAF0),
            text_muted: Rgb::hex(0xE6E6E6),
            text_dim: Rgb::hex(0xC0C0C0),
            border: Rgb::hex(0x4A2D21),
            success: Rgb::hex(0x32CD32),
            warning: Rgb::hex(0xFFA500),
            danger: Rgb::hex(0xFF0000),
        },
        radius: "1rem",
        effects: EffectBundle {
            backdrop: true,
            glow: true,
            pattern: Pattern::None,
            shadow: Some(Shadow::Neon),
            gradient: Some(Gradient::Radial),
            shape: Some(Shape::Standard),
        },
        font: FontId::SpaceGrotesk,
    },
    ThemePreset {
        name: "Dungeon Chic",
        slug: "dungeon-chic",
        description: "Dark near-black with red, black, maroon & silver accents, sharp 4px edges, textured surfaces",
        colors: ColorSet {
            canvas: Rgb::hex(0x0F0F0F),
            surface: Rgb::hex(0x1A1A1A),
            surface_hover: Rgb::hex(0x252525),
            accents: [
                Rgb::hex(0xFF0000),
                Rgb::hex(0x000000),
                Rgb::hex(0x800000),
                Rgb::hex(0xC0C0C0),
                Rgb::hex(0x36454F),
            ],
            text: Rgb::hex(0xC0C0C0),
            text_muted: Rgb::hex(0xA9A9A9),
            text_dim: Rgb::hex(0x696969),
            border: Rgb::hex(0x2B2B2B),
            success: Rgb::hex(0x008000),
            warning: Rgb::hex(0xB8860B),
            danger: Rgb::hex(0xFF0000),
        },
        radius: "0.25rem",
        effects: EffectBundle {
            backdrop: false,
            glow: false,
            pattern: Pattern::Texture,
            shadow: Some(Shadow::Harsh),
            gradient: Some(Gradient::None),
            shape: Some(Shape::Angular),
        },
        font: FontId::Roboto,
    },
    ThemePreset {
        name: "Sensual Velvet",
        slug: "sensual-velvet",
        description: "Rich indigo with pink, orchid, purple & violet accents, very soft 20px curves, subtle glow",
        colors: ColorSet {
            canvas: Rgb::hex(0x4B0082),
            surface: Rgb::hex(0x5D1A94),
            surface_hover: Rgb::hex(0x6B2AA3),
            accents: [
                Rgb::hex(0xFF69B4),
                Rgb::hex(0xDA70D6),
                Rgb::hex(0x9370DB),
                Rgb::hex(0xEE82EE),
                Rgb::hex(0xFF00FF),
            ],
            text: Rgb::hex(0xFFF0F5),
            text_muted: Rgb::hex(0xFFE4E1),
            text_dim: Rgb::hex(0xE6E6FA),
            border: Rgb::hex(0x8A2BE2),
            success: Rgb::hex(0x7CFC00),
            warning: Rgb::hex(0xFFD700),
            danger: Rgb::hex(0xFF1493),
        },
        radius: "1.25rem",
        effects: EffectBundle {
            backdrop: true,
            glow: true,
            pattern: Pattern::Subtle,
            shadow: Some(Shadow::Soft),
            gradient: Some(Gradient::Linear),
            shape: Some(Shape::Standard),
        },
        font: FontId::Playfair,
    },
    ThemePreset {
        name: "Domme Supreme",
        slug: "domme-supreme",
        description: "Dark gray with burgundy, violet red, firebrick & light gray accents, controlled 8px curves",
        colors: ColorSet {
            canvas: Rgb::hex(0x1A1A1A),
            surface: Rgb::hex(0x2D2D2D),
            surface_hover: Rgb::hex(0x3D3D3D),
            accents: [
                Rgb::hex(0x800020),
                Rgb::hex(0xC71585),
                Rgb::hex(0xD3D3D3),
                Rgb::hex(0xB22222),
                Rgb::hex(0x4B0082),
            ],
            text: Rgb::hex(0xF5F5F5),
            text_muted: Rgb::hex(0xD3D3D3),
            text_dim: Rgb::hex(0xA9A9A9),
            border: Rgb::hex(0x4D4D4D),
            success: Rgb::hex(0x006400),
            warning: Rgb::hex(0xFF8C00),
            danger: Rgb::hex(0x8B0000),
        },
        radius: "0.5rem",
        effects: EffectBundle {
            backdrop: false,
            glow: false,
            pattern: Pattern::None,
            shadow: Some(Shadow::Classic),
            gradient: Some(Gradient::Linear),
            shape: Some(Shape::Standard),
        },
        font: FontId::Roboto,
    },
    ThemePreset {
        name: "Leather Lux",
        slug: "leather-lux",
        description: "Saddle brown, sienna & gold accents over dark chocolate, crafted 4px edges",
        colors: ColorSet {
            canvas: Rgb::hex(0x1C1612),
            surface: Rgb::hex(0x2D251F),
            surface_hover: Rgb::hex(0x3A2F27),
            accents: [
                Rgb::hex(0x8B4513),
                Rgb::hex(0xA0522D),
                Rgb::hex(0xCD853F),
                Rgb::hex(0xB8860B),
                Rgb::hex(0xD2691E),
            ],
            text: Rgb::hex(0xF5DEB3),
            text_muted: Rgb::hex(0xDEB887),
            text_dim: Rgb::hex(0xBC9A6A),
            border: Rgb::hex(0x8B4513),
            success: Rgb::hex(0x228B22),
            warning: Rgb::hex(0xFF8C00),
            danger: Rgb::hex(0x8B0000),
        },
        radius: "0.25rem",
        effects: EffectBundle {
            backdrop: false,
            glow: false,
            pattern: Pattern::Texture,
            shadow: None,
            gradient: None,
            shape: None,
        },
        font: FontId::WorkSans,
    },
    ThemePreset {
        name: "Neon Femme",
        slug: "neon-femme",
        description: "Hot pink, cyan & orchid accents over deep navy, 16px soft curves",
        colors: ColorSet {
            canvas: Rgb::hex(0x0D0D19),
            surface: Rgb::hex(0x1A1A2E),
            surface_hover: Rgb::hex(0x25253D),
            accents: [
                Rgb::hex(0xFF69B4),
                Rgb::hex(0x00FFFF),
                Rgb::hex(0xDA70D6),
                Rgb::hex(0xFFFF00),
                Rgb::hex(0xFF1493),
            ],
            text: Rgb::hex(0xF0F8FF),
            text_muted: Rgb::hex(0xE6E6FA),
            text_dim: Rgb::hex(0xD8BFD8),
            border: Rgb::hex(0xFF69B4),
            success: Rgb::hex(0x00FF7F),
            warning: Rgb::hex(0xFFD700),
            danger: Rgb::hex(0xFF6347),
        },
        radius: "1rem",
        effects: EffectBundle {
            backdrop: true,
            glow: true,
            pattern: Pattern::Subtle,
            shadow: None,
            gradient: None,
            shape: None,
        },
        font: FontId::SpaceGrotesk,
    },
    ThemePreset {
        name: "Dark Romance",
        slug: "dark-romance",
        description: "Deep burgundy, crimson & wine accents, romantic 12px curves, textured backgrounds",
        colors: ColorSet {
            canvas: Rgb::hex(0x1A0F14),
            surface: Rgb::hex(0x2D1B23),
            surface_hover: Rgb::hex(0x3D252E),
            accents: [
                Rgb::hex(0x800020),
                Rgb::hex(0xDC143C),
                Rgb::hex(0xB22222),
                Rgb::hex(0xC71585),
                Rgb::hex(0x8B0000),
            ],
            text: Rgb::hex(0xFFE4E1),
            text_muted: Rgb::hex(0xF0E68C),
            text_dim: Rgb::hex(0xDDA0DD),
            border: Rgb::hex(0x800020),
            success: Rgb::hex(0x556B2F),
            warning: Rgb::hex(0xB8860B),
            danger: Rgb::hex(0xDC143C),
        },
        radius: "0.75rem",
        effects: EffectBundle {
            backdrop: true,
            glow: false,
            pattern: Pattern::Texture,
            shadow: None,
            gradient: None,
            shape: None,
        },
        font: FontId::Crimson,
    },
    ThemePreset {
        name: "Queer Rebel",
        slug: "queer-rebel",
        description: "Coral, turquoise & mint accents over dark slate, 8px curves",
        colors: ColorSet {
            canvas: Rgb::hex(0x1F1F2E),
            surface: Rgb::hex(0x2E2E47),
            surface_hover: Rgb::hex(0x3D3D5C),
            accents: [
                Rgb::hex(0xFF6B6B),
                Rgb::hex(0x4ECDC4),
                Rgb::hex(0x45B7D1),
                Rgb::hex(0x96CEB4),
                Rgb::hex(0xFFEAA7),
            ],
            text: Rgb::hex(0xFFFFFF),
            text_muted: Rgb::hex(0xB2BEC3),
            text_dim: Rgb::hex(0x74B9FF),
            border: Rgb::hex(0xFF6B6B),
            success: Rgb::hex(0x00B894),
            warning: Rgb::hex(0xFDCB6E),
            danger: Rgb::hex(0xE17055),
        },
        radius: "0.5rem",
        effects: EffectBundle {
            backdrop: true,
            glow: true,
            pattern: Pattern::Subtle,
            shadow: None,
            gradient: None,
            shape: None,
        },
        font: FontId::WorkSans,
    },
    ThemePreset {
        name: "Goddess Gold",
        slug: "goddess-gold",
        description: "Pure gold, goldenrod & bronze accents, divine 20px curves, subtle glow",
        colors: ColorSet {
            canvas: Rgb::hex(0x2F2B1A),
            surface: Rgb::hex(0x4A3F2A),
            surface_hover: Rgb::hex(0x5A4F38),
            accents: [
                Rgb::hex(0xFFD700),
                Rgb::hex(0xDAA520),
                Rgb::hex(0xB8860B),
                Rgb::hex(0xCD853F),
                Rgb::hex(0xF4A460),
            ],
            text: Rgb::hex(0xFFFACD),
            text_muted: Rgb::hex(0xF0E68C),
            text_dim: Rgb::hex(0xDEB887),
            border: Rgb::hex(0xDAA520),
            success: Rgb::hex(0x9ACD32),
            warning: Rgb::hex(0xFF8C00),
            danger: Rgb::hex(0xDC143C),
        },
        radius: "1.25rem",
        effects: EffectBundle {
            backdrop: true,
            glow: true,
            pattern: Pattern::Subtle,
            shadow: Some(Shadow::Soft),
            gradient: Some(Gradient::Linear),
            shape: Some(Shape::Pill),
        },
        font: FontId::Playfair,
    },
    ThemePreset {
        name: "Sissy Pink",
        slug: "sissy-pink",
        description: "Deep pink, hot pink & light coral accents, ultra-soft 24px curves",
        colors: ColorSet {
            canvas: Rgb::hex(0x2E1B2C),
            surface: Rgb::hex(0x4A2D47),
            surface_hover: Rgb::hex(0x5A3A57),
            accents: [
                Rgb::hex(0xFF1493),
                Rgb::hex(0xFF69B4),
                Rgb::hex(0xFFB6C1),
                Rgb::hex(0xFFC0CB),
                Rgb::hex(0xFFCCCB),
            ],
            text: Rgb::hex(0xFFF0F5),
            text_muted: Rgb::hex(0xFFCCCB),
            text_dim: Rgb::hex(0xDDA0DD),
            border: Rgb::hex(0xFF1493),
            success: STATUS_SUCCESS,
            warning: STATUS_WARNING,
            danger: STATUS_DANGER,
        },
        radius: "1.5rem",
        effects: EffectBundle {
            backdrop: true,
            glow: false,
            pattern: Pattern::Subtle,
            shadow: None,
            gradient: None,
            shape: None,
        },
        font: FontId::WorkSans,
    },
    ThemePreset {
        name: "Latex Noir",
        slug: "latex-noir",
        description: "Pure black with red, white & silver accents, ultra-sharp 2px edges",
        colors: ColorSet {
            canvas: Rgb::hex(0x000000),
            surface: Rgb::hex(0x1C1C1C),
            surface_hover: Rgb::hex(0x2F2F2F),
            accents: [
                Rgb::hex(0xFF0000),
                Rgb::hex(0xFFFFFF),
                Rgb::hex(0xC0C0C0),
                Rgb::hex(0x808080),
                Rgb::hex(0xFF69B4),
            ],
            text: Rgb::hex(0xFFFFFF),
            text_muted: Rgb::hex(0xC0C0C0),
            text_dim: Rgb::hex(0x808080),
            border: Rgb::hex(0xFF0000),
            success: Rgb::hex(0x00FF00),
            warning: Rgb::hex(0xFFFF00),
            danger: Rgb::hex(0xFF0000),
        },
        radius: "0.125rem",
        effects: EffectBundle {
            backdrop: false,
            glow: true,
            pattern: Pattern::Texture,
            shadow: None,
            gradient: None,
            shape: None,
        },
        font: FontId::Roboto,
    },
    ThemePreset {
        name: "Sapphic Sunset",
        slug: "sapphic-sunset",
        description: "Coral, tomato, peach & orchid accents over deep plum, 16px curves",
        colors: ColorSet {
            canvas: Rgb::hex(0x4A1B3A),
            surface: Rgb::hex(0x6B2C5C),
            surface_hover: Rgb::hex(0x7D3B6E),
            accents: [
                Rgb::hex(0xFF7F50),
                Rgb::hex(0xFF6347),
                Rgb::hex(0xFFB347),
                Rgb::hex(0xDA70D6),
                Rgb::hex(0xFF69B4),
            ],
            text: Rgb::hex(0xFFF8DC),
            text_muted: Rgb::hex(0xFFCCCB),
            text_dim: Rgb::hex(0xDDA0DD),
            border: Rgb::hex(0xFF7F50),
            success: Rgb::hex(0x98FB98),
            warning: Rgb::hex(0xFFD700),
            danger: Rgb::hex(0xFF1493),
        },
        radius: "1rem",
        effects: EffectBundle {
            backdrop: true,
            glow: false,
            pattern: Pattern::Subtle,
            shadow: None,
            gradient: None,
            shape: None,
        },
        font: FontId::WorkSans,
    },
    ThemePreset {
        name: "Fetish Palace",
        slug: "fetish-palace",
        description: "Blue violet, orchid & purple accents, regal 6px curves, textured surfaces",
        colors: ColorSet {
            canvas: Rgb::hex(0x2B0A2B),
            surface: Rgb::hex(0x4A1A4A),
            surface_hover: Rgb::hex(0x5D2A5D),
            accents: [
                Rgb::hex(0x8A2BE2),
                Rgb::hex(0x9932CC),
                Rgb::hex(0xBA55D3),
                Rgb::hex(0xDA70D6),
                Rgb::hex(0xEE82EE),
            ],
            text: Rgb::hex(0xF8F8FF),
            text_muted: Rgb::hex(0xE6E6FA),
            text_dim: Rgb::hex(0xDDA0DD),
            border: Rgb::hex(0x8A2BE2),
            success: Rgb::hex(0x7B68EE),
            warning: Rgb::hex(0xFFD700),
            danger: Rgb::hex(0xFF1493),
        },
        radius: "0.375rem",
        effects: EffectBundle {
            backdrop: true,
            glow: true,
            pattern: Pattern::Texture,
            shadow: None,
            gradient: None,
            shape: None,
        },
        font: FontId::Playfair,
    },
];
