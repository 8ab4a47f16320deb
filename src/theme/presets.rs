//! Built-in theme presets.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use super::{ColorFamily, Palette, Spacing, Theme};

/// Names of the built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    /// Blue primary on a light background
    #[default]
    Default,
    /// Same families tuned for dark terminals
    Dark,
    /// Terminal palette only, for 16-colour terminals
    Mono,
}

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    preset: ThemePreset::Default,
    palette: Palette {
        primary: ColorFamily {
            light: Color::Rgb(230, 242, 255),
            border: Color::Rgb(0, 161, 224),
            dark: Color::Rgb(0, 70, 120),
        },
        positive: ColorFamily {
            light: Color::Rgb(232, 248, 236),
            border: Color::Rgb(64, 186, 104),
            dark: Color::Rgb(24, 96, 48),
        },
        negative: ColorFamily {
            light: Color::Rgb(252, 234, 232),
            border: Color::Rgb(220, 76, 62),
            dark: Color::Rgb(140, 30, 20),
        },
        border: Color::Rgb(204, 204, 204),
        secondary_faded: Color::Rgb(82, 96, 116),
        white: Color::Rgb(255, 255, 255),
        gray_light_text: Color::Rgb(153, 153, 153),
        text: Color::Rgb(34, 34, 34),
        background: Color::Rgb(255, 255, 255),
        shadow: Color::Rgb(200, 200, 200),
    },
    spacing: Spacing::default(),
});

static DARK_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    preset: ThemePreset::Dark,
    palette: Palette {
        primary: ColorFamily {
            light: Color::Rgb(16, 40, 64),
            border: Color::Rgb(49, 157, 192),
            dark: Color::Rgb(170, 220, 255),
        },
        positive: ColorFamily {
            light: Color::Rgb(16, 48, 28),
            border: Color::Rgb(101, 163, 58),
            dark: Color::Rgb(180, 240, 190),
        },
        negative: ColorFamily {
            light: Color::Rgb(60, 20, 20),
            border: Color::Rgb(220, 76, 62),
            dark: Color::Rgb(255, 190, 180),
        },
        border: Color::Rgb(80, 80, 80),
        secondary_faded: Color::Rgb(60, 70, 90),
        white: Color::Rgb(240, 240, 240),
        gray_light_text: Color::Rgb(128, 128, 128),
        text: Color::Rgb(220, 220, 220),
        background: Color::Rgb(24, 24, 24),
        shadow: Color::Rgb(58, 58, 58),
    },
    spacing: Spacing::default(),
});

static MONO_THEME: Lazy<Theme> = Lazy::new(|| Theme {
    preset: ThemePreset::Mono,
    palette: Palette {
        primary: ColorFamily {
            light: Color::Reset,
            border: Color::Blue,
            dark: Color::Blue,
        },
        positive: ColorFamily {
            light: Color::Reset,
            border: Color::Green,
            dark: Color::Green,
        },
        negative: ColorFamily {
            light: Color::Reset,
            border: Color::Red,
            dark: Color::Red,
        },
        border: Color::DarkGray,
        secondary_faded: Color::DarkGray,
        white: Color::White,
        gray_light_text: Color::Gray,
        text: Color::Reset,
        background: Color::Reset,
        shadow: Color::DarkGray,
    },
    spacing: Spacing::default(),
});

impl ThemePreset {
    pub const ALL: [ThemePreset; 3] = [Self::Default, Self::Dark, Self::Mono];

    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            Self::Default => *DEFAULT_THEME,
            Self::Dark => *DARK_THEME,
            Self::Mono => *MONO_THEME,
        }
    }

    /// Next preset, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Default => Self::Dark,
            Self::Dark => Self::Mono,
            Self::Mono => Self::Default,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Mono => "mono",
        }
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s.to_lowercase())
            .ok_or_else(|| format!("unknown theme preset '{s}'"))
    }
}
