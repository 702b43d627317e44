#![forbid(unsafe_code)]

//! Static font catalog.

/// Built-in typography presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontId {
    Inter,
    Roboto,
    Playfair,
    SourceCode,
    Crimson,
    WorkSans,
    SpaceGrotesk,
    FiraCode,
}

/// Display name plus primary/secondary/monospace font-family stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontStack {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub mono: &'static str,
}

static FONTS: [FontStack; 8] = [
    FontStack {
        name: "Inter",
        primary: "Inter, system-ui, -apple-system, BlinkMacSystemFont, sans-serif",
        secondary: "Inter, sans-serif",
        mono: "JetBrains Mono, Menlo, Monaco, Consolas, monospace",
    },
    FontStack {
        name: "Roboto",
        primary: "Roboto, -apple-system, BlinkMacSystemFont, sans-serif",
        secondary: "Roboto, sans-serif",
        mono: "Roboto Mono, monospace",
    },
    FontStack {
        name: "Playfair Display",
        primary: "Playfair Display, Georgia, serif",
        secondary: "Source Sans Pro, sans-serif",
        mono: "Fira Code, monospace",
    },
    FontStack {
        name: "Source Code Pro",
        primary: "Source Code Pro, monospace",
        secondary: "Source Sans Pro, sans-serif",
        mono: "Source Code Pro, monospace",
    },
    FontStack {
        name: "Crimson Text",
        primary: "Crimson Text, Georgia, serif",
        secondary: "Open Sans, sans-serif",
        mono: "Courier New, monospace",
    },
    FontStack {
        name: "Work Sans",
        primary: "Work Sans, sans-serif",
        secondary: "Work Sans, sans-serif",
        mono: "Monaco, monospace",
    },
    FontStack {
        name: "Space Grotesk",
        primary: "Space Grotesk, sans-serif",
        secondary: "Space Grotesk, sans-serif",
        mono: "Space Mono, monospace",
    },
    FontStack {
        name: "Fira Code",
        primary: "Fira Code, monospace",
        secondary: "Fira Sans, sans-serif",
        mono: "Fira Code, monospace",
    },
];

impl FontId {
    pub const ALL: [FontId; 8] = [
        FontId::Inter,
        FontId::Roboto,
        FontId::Playfair,
        FontId::SourceCode,
        FontId::Crimson,
        FontId::WorkSans,
        FontId::SpaceGrotesk,
        FontId::FiraCode,
    ];

    const fn index(self) -> usize {
        match self {
            FontId::Inter => 0,
            FontId::Roboto => 1,
            FontId::Playfair => 2,
            FontId::SourceCode => 3,
            FontId::Crimson => 4,
            FontId::WorkSans => 5,
            FontId::SpaceGrotesk => 6,
            FontId::FiraCode => 7,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FontId::Inter => "inter",
            FontId::Roboto => "roboto",
            FontId::Playfair => "playfair",
            FontId::SourceCode => "source-code",
            FontId::Crimson => "crimson",
            FontId::WorkSans => "work-sans",
            FontId::SpaceGrotesk => "space-grotesk",
            FontId::FiraCode => "fira-code",
        }
    }

    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "inter" => Some(FontId::Inter),
            "roboto" => Some(FontId::Roboto),
            "playfair" => Some(FontId::Playfair),
            "source-code" => Some(FontId::SourceCode),
            "crimson" => Some(FontId::Crimson),
            "work-sans" => Some(FontId::WorkSans),
            "space-grotesk" => Some(FontId::SpaceGrotesk),
            "fira-code" => Some(FontId::FiraCode),
            _ => None,
        }
    }

    /// The font stack for this preset.
    #[must_use]
    pub fn stack(self) -> &'static FontStack {
        &FONTS[self.index()]
    }

    /// Display label. Unknown tokens resolve to the Inter label, matching
    /// the engine-level fallback.
    #[must_use]
    pub fn label_for(token: &str) -> &'static str {
        Self::parse(token).unwrap_or(FontId::Inter).stack().name
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub const fn surface_class(self) -> &'static str {
        match self {
            FontId::Inter => "font-inter",
            FontId::Roboto => "font-roboto",
            FontId::Playfair => "font-playfair",
            FontId::SourceCode => "font-source-code",
            FontId::Crimson => "font-crimson",
            FontId::WorkSans => "font-work-sans",
            FontId::SpaceGrotesk => "font-space-grotesk",
            FontId::FiraCode => "font-fira-code",
        }
    }
}
