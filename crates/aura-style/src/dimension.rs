#![forbid(unsafe_code)]

//! Enumerated visual dimensions.
//!
//! Each dimension follows the same contract: `ALL` lists the selectable
//! members in declaration order, `as_str` yields the stable storage/wire
//! token, `parse` accepts a token and returns `None` for anything unknown
//! (unknown values are treated as unset, never as errors), `label` is the
//! human-readable display name, and `next` cycles for keyboard navigation.
//! `surface_class` yields the CSS-class-equivalent token rendering surfaces
//! attach to styled elements.

use crate::color::Rgb;

/// Corner/outline geometry applied to cards, buttons, and badges.
///
/// The members after `Teardrop` are reserved: they parse and persist, but no
/// control offers them and they map to the standard surface class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Standard,
    Pill,
    Angular,
    Organic,
    Asymmetric,
    Blob,
    Morphic,
    Squircle,
    Chamfer,
    RoundedPlus,
    Teardrop,
    // Reserved (documented upstream, unshipped)
    Hexagon,
    Octagon,
    Diamond,
    Trapezoid,
    Crystalline,
    Wave,
    Tab,
    Badge,
    Ribbon,
    Ticket,
}

impl Shape {
    /// Selectable shapes, in the order the settings panel offers them.
    pub const ALL: [Shape; 11] = [
        Shape::Standard,
        Shape::Pill,
        Shape::Angular,
        Shape::Organic,
        Shape::Asymmetric,
        Shape::Blob,
        Shape::Morphic,
        Shape::Squircle,
        Shape::Chamfer,
        Shape::RoundedPlus,
        Shape::Teardrop,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Shape::Standard => "standard",
            Shape::Pill => "pill",
            Shape::Angular => "angular",
            Shape::Organic => "organic",
            Shape::Asymmetric => "asymmetric",
            Shape::Blob => "blob",
            Shape::Morphic => "morphic",
            Shape::Squircle => "squircle",
            Shape::Chamfer => "chamfer",
            Shape::RoundedPlus => "rounded-plus",
            Shape::Teardrop => "teardrop",
            Shape::Hexagon => "hexagon",
            Shape::Octagon => "octagon",
            Shape::Diamond => "diamond",
            Shape::Trapezoid => "trapezoid",
            Shape::Crystalline => "crystalline",
            Shape::Wave => "wave",
            Shape::Tab => "tab",
            Shape::Badge => "badge",
            Shape::Ribbon => "ribbon",
            Shape::Ticket => "ticket",
        }
    }

    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "standard" => Some(Shape::Standard),
            "pill" => Some(Shape::Pill),
            "angular" => Some(Shape::Angular),
            "organic" => Some(Shape::Organic),
            "asymmetric" => Some(Shape::Asymmetric),
            "blob" => Some(Shape::Blob),
            "morphic" => Some(Shape::Morphic),
            "squircle" => Some(Shape::Squircle),
            "chamfer" => Some(Shape::Chamfer),
            "rounded-plus" => Some(Shape::RoundedPlus),
            "teardrop" => Some(Shape::Teardrop),
            "hexagon" => Some(Shape::Hexagon),
            "octagon" => Some(Shape::Octagon),
            "diamond" => Some(Shape::Diamond),
            "trapezoid" => Some(Shape::Trapezoid),
            "crystalline" => Some(Shape::Crystalline),
            "wave" => Some(Shape::Wave),
            "tab" => Some(Shape::Tab),
            "badge" => Some(Shape::Badge),
            "ribbon" => Some(Shape::Ribbon),
            "ticket" => Some(Shape::Ticket),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Shape::Standard => "Standard",
            Shape::Pill => "Pill",
            Shape::Angular => "Angular",
            Shape::Organic => "Organic",
            Shape::Asymmetric => "Asymmetric",
            Shape::Blob => "Blob",
            Shape::Morphic => "Morphic",
            Shape::Squircle => "Squircle",
            Shape::Chamfer => "Chamfer",
            Shape::RoundedPlus => "Rounded Plus",
            Shape::Teardrop => "Teardrop",
            Shape::Hexagon => "Hexagon",
            Shape::Octagon => "Octagon",
            Shape::Diamond => "Diamond",
            Shape::Trapezoid => "Trapezoid",
            Shape::Crystalline => "Crystalline",
            Shape::Wave => "Wave",
            Shape::Tab => "Tab",
            Shape::Badge => "Badge",
            Shape::Ribbon => "Ribbon",
            Shape::Ticket => "Ticket",
        }
    }

    /// True for members the settings panel offers.
    #[must_use]
    pub fn is_selectable(self) -> bool {
        Self::ALL.contains(&self)
    }

    /// Next selectable shape, wrapping. Reserved members advance to the
    /// first selectable one.
    #[must_use]
    pub fn next(self) -> Self {
        match Self::ALL.iter().position(|&s| s == self) {
            Some(idx) => Self::ALL[(idx + 1) % Self::ALL.len()],
            None => Self::ALL[0],
        }
    }

    /// Previous selectable shape, wrapping.
    #[must_use]
    pub fn prev(self) -> Self {
        match Self::ALL.iter().position(|&s| s == self) {
            Some(idx) => Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()],
            None => Self::ALL[0],
        }
    }

    /// Surface class token. Only the basic shapes carry a dedicated class;
    /// the rest are styled through the `data-shape-type` attribute and fall
    /// back to the standard class here.
    #[must_use]
    pub const fn surface_class(self) -> &'static str {
        match self {
            Shape::Pill => "rounded-pill",
            Shape::Angular => "rounded-angular",
            Shape::Organic => "rounded-organic",
            Shape::Asymmetric => "rounded-asymmetric",
            _ => "rounded-theme",
        }
    }
}

/// Drop-shadow treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shadow {
    None,
    Soft,
    Classic,
    Neon,
    Inner,
    Harsh,
}

impl Shadow {
    pub const ALL: [Shadow; 6] = [
        Shadow::None,
        Shadow::Soft,
        Shadow::Classic,
        Shadow::Neon,
        Shadow::Inner,
        Shadow::Harsh,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Shadow::None => "none",
            Shadow::Soft => "soft",
            Shadow::Classic => "classic",
            Shadow::Neon => "neon",
            Shadow::Inner => "inner",
            Shadow::Harsh => "harsh",
        }
    }

    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "none" => Some(Shadow::None),
            "soft" => Some(Shadow::Soft),
            "classic" => Some(Shadow::Classic),
            "neon" => Some(Shadow::Neon),
            "inner" => Some(Shadow::Inner),
            "harsh" => Some(Shadow::Harsh),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Shadow::None => "None",
            Shadow::Soft => "Soft",
            Shadow::Classic => "Classic",
            Shadow::Neon => "Neon",
            Shadow::Inner => "Inner",
            Shadow::Harsh => "Harsh",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Surface class token; `None` renders no shadow class at all.
    #[must_use]
    pub const fn surface_class(self) -> &'static str {
        match self {
            Shadow::None => "",
            Shadow::Soft => "shadow-theme-soft",
            Shadow::Classic => "shadow-theme-classic",
            Shadow::Neon => "shadow-theme-neon",
            Shadow::Inner => "shadow-theme-inner",
            Shadow::Harsh => "shadow-theme-harsh",
        }
    }
}

/// Background gradient kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gradient {
    None,
    Linear,
    Radial,
    Duotone,
}

impl Gradient {
    pub const ALL: [Gradient; 4] = [
        Gradient::None,
        Gradient::Linear,
        Gradient::Radial,
        Gradient::Duotone,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Gradient::None => "none",
            Gradient::Linear => "linear",
            Gradient::Radial => "radial",
            Gradient::Duotone => "duotone",
        }
    }

    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "none" => Some(Gradient::None),
            "linear" => Some(Gradient::Linear),
            "radial" => Some(Gradient::Radial),
            "duotone" => Some(Gradient::Duotone),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Gradient::None => "None",
            Gradient::Linear => "Linear",
            Gradient::Radial => "Radial",
            Gradient::Duotone => "Duotone",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&g| g == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The `--gradient-angle` value: radial gradients are center-based,
    /// every other kind uses the house 135° diagonal.
    #[must_use]
    pub const fn angle(self) -> &'static str {
        match self {
            Gradient::Radial => "circle at center",
            _ => "135deg",
        }
    }

    #[must_use]
    pub const fn surface_class(self) -> &'static str {
        match self {
            Gradient::None => "",
            Gradient::Linear => "bg-gradient-linear",
            Gradient::Radial => "bg-gradient-radial",
            Gradient::Duotone => "bg-gradient-duotone",
        }
    }
}

/// Simulated depth applied to interactive elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect3d {
    None,
    Raised,
    Pressed,
    Floating,
    Beveled,
    Extruded,
}

impl Effect3d {
    pub const ALL: [Effect3d; 6] = [
        Effect3d::None,
        Effect3d::Raised,
        Effect3d::Pressed,
        Effect3d::Floating,
        Effect3d::Beveled,
        Effect3d::Extruded,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Effect3d::None => "none",
            Effect3d::Raised => "raised",
            Effect3d::Pressed => "pressed",
            Effect3d::Floating => "floating",
            Effect3d::Beveled => "beveled",
            Effect3d::Extruded => "extruded",
        }
    }

    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "none" => Some(Effect3d::None),
            "raised" => Some(Effect3d::Raised),
            "pressed" => Some(Effect3d::Pressed),
            "floating" => Some(Effect3d::Floating),
            "beveled" => Some(Effect3d::Beveled),
            "extruded" => Some(Effect3d::Extruded),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Effect3d::None => "None",
            Effect3d::Raised => "Raised",
            Effect3d::Pressed => "Pressed",
            Effect3d::Floating => "Floating",
            Effect3d::Beveled => "Beveled",
            Effect3d::Extruded => "Extruded",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&e| e == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub const fn surface_class(self) -> &'static str {
        match self {
            Effect3d::None => "",
            Effect3d::Raised => "effect-3d-raised",
            Effect3d::Pressed => "effect-3d-pressed",
            Effect3d::Floating => "effect-3d-floating",
            Effect3d::Beveled => "effect-3d-beveled",
            Effect3d::Extruded => "effect-3d-extruded",
        }
    }
}

/// Background pattern. Theme-level only: unlike every other effect dimension
/// there is no user override pathway for patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    None,
    Subtle,
    Texture,
    Grid,
    Dots,
    Diagonal,
}

impl Pattern {
    pub const ALL: [Pattern; 6] = [
        Pattern::None,
        Pattern::Subtle,
        Pattern::Texture,
        Pattern::Grid,
        Pattern::Dots,
        Pattern::Diagonal,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Pattern::None => "none",
            Pattern::Subtle => "subtle",
            Pattern::Texture => "texture",
            Pattern::Grid => "grid",
            Pattern::Dots => "dots",
            Pattern::Diagonal => "diagonal",
        }
    }

    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "none" => Some(Pattern::None),
            "subtle" => Some(Pattern::Subtle),
            "texture" => Some(Pattern::Texture),
            "grid" => Some(Pattern::Grid),
            "dots" => Some(Pattern::Dots),
            "diagonal" => Some(Pattern::Diagonal),
            _ => None,
        }
    }

    #[must_use]
    pub const fn surface_class(self) -> &'static str {
        match self {
            Pattern::None => "",
            Pattern::Subtle => "pattern-subtle",
            Pattern::Texture => "pattern-texture",
            Pattern::Grid => "pattern-grid",
            Pattern::Dots => "pattern-dots",
            Pattern::Diagonal => "pattern-diagonal",
        }
    }
}

/// A named permutation of the five accent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorArrangement {
    /// Identity: the theme's own accent order.
    #[default]
    Default,
    /// Swap accents 1 and 2; accents 3–5 untouched.
    PrimarySecondary,
    /// One-step cyclic left rotation: `[A,B,C,D,E] -> [B,C,D,E,A]`.
    RotateForward,
    /// One-step cyclic right rotation; exact inverse of `RotateForward`.
    RotateBackward,
}

impl ColorArrangement {
    pub const ALL: [ColorArrangement; 4] = [
        ColorArrangement::Default,
        ColorArrangement::PrimarySecondary,
        ColorArrangement::RotateForward,
        ColorArrangement::RotateBackward,
    ];

    /// The storage token. `Default` persists as `"reset"` for compatibility
    /// with stored state written by earlier releases.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ColorArrangement::Default => "reset",
            ColorArrangement::PrimarySecondary => "primary-secondary",
            ColorArrangement::RotateForward => "rotate-forward",
            ColorArrangement::RotateBackward => "rotate-backward",
        }
    }

    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "reset" | "default" => Some(ColorArrangement::Default),
            "primary-secondary" => Some(ColorArrangement::PrimarySecondary),
            "rotate-forward" => Some(ColorArrangement::RotateForward),
            "rotate-backward" => Some(ColorArrangement::RotateBackward),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ColorArrangement::Default => "Default",
            ColorArrangement::PrimarySecondary => "Swap Primary/Secondary",
            ColorArrangement::RotateForward => "Rotate Forward",
            ColorArrangement::RotateBackward => "Rotate Backward",
        }
    }

    /// Apply the permutation to an ordered accent 5-tuple.
    #[must_use]
    pub const fn apply(self, accents: [Rgb; 5]) -> [Rgb; 5] {
        let [a, b, c, d, e] = accents;
        match self {
            ColorArrangement::Default => [a, b, c, d, e],
            ColorArrangement::PrimarySecondary => [b, a, c, d, e],
            ColorArrangement::RotateForward => [b, c, d, e, a],
            ColorArrangement::RotateBackward => [e, a, b, c, d],
        }
    }

    /// The arrangement that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            ColorArrangement::Default => ColorArrangement::Default,
            ColorArrangement::PrimarySecondary => ColorArrangement::PrimarySecondary,
            ColorArrangement::RotateForward => ColorArrangement::RotateBackward,
            ColorArrangement::RotateBackward => ColorArrangement::RotateForward,
        }
    }
}
