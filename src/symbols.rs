//! Glyph sets used by the components
//!
//! Terminals differ wildly in what they can draw, so every glyph a
//! component uses comes from a [`SymbolService`] that can fall back to
//! plain ASCII.

use serde::{Deserialize, Serialize};

/// Glyph set variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolTheme {
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Provides the glyphs for the active [`SymbolTheme`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolService {
    current_theme: SymbolTheme,
}

impl SymbolService {
    #[must_use]
    pub fn new(theme: SymbolTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> SymbolTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: SymbolTheme) {
        self.current_theme = theme;
    }

    pub fn cycle_theme(&mut self) {
        self.current_theme = match self.current_theme {
            SymbolTheme::Unicode => SymbolTheme::Ascii,
            SymbolTheme::Ascii => SymbolTheme::Unicode,
        };
    }

    #[must_use]
    pub fn sort_down(&self) -> &'static str {
        match self.current_theme {
            SymbolTheme::Unicode => "▼",
            SymbolTheme::Ascii => "v",
        }
    }

    #[must_use]
    pub fn sort_up(&self) -> &'static str {
        match self.current_theme {
            SymbolTheme::Unicode => "▲",
            SymbolTheme::Ascii => "^",
        }
    }

    #[must_use]
    pub fn help(&self) -> &'static str {
        match self.current_theme {
            SymbolTheme::Unicode => "ⓘ",
            SymbolTheme::Ascii => "(?)",
        }
    }

    #[must_use]
    pub fn drag_handle(&self) -> &'static str {
        match self.current_theme {
            SymbolTheme::Unicode => "⠿",
            SymbolTheme::Ascii => "::",
        }
    }

    #[must_use]
    pub fn ring(&self) -> &'static str {
        match self.current_theme {
            SymbolTheme::Unicode => "●",
            SymbolTheme::Ascii => "o",
        }
    }

    #[must_use]
    pub fn radio(&self, checked: bool) -> &'static str {
        match (self.current_theme, checked) {
            (SymbolTheme::Unicode, true) => "◉",
            (SymbolTheme::Unicode, false) => "○",
            (SymbolTheme::Ascii, true) => "(*)",
            (SymbolTheme::Ascii, false) => "( )",
        }
    }

    #[must_use]
    pub fn toggle(&self, checked: bool) -> &'static str {
        match (self.current_theme, checked) {
            (SymbolTheme::Unicode, true) => "━●",
            (SymbolTheme::Unicode, false) => "○━",
            (SymbolTheme::Ascii, true) => "[=o]",
            (SymbolTheme::Ascii, false) => "[o=]",
        }
    }

    /// Fill for an outer shadow row drawn just above a container
    #[must_use]
    pub fn shadow_above(&self) -> &'static str {
        match self.current_theme {
            SymbolTheme::Unicode => "▁",
            SymbolTheme::Ascii => "_",
        }
    }

    /// Fill for an outer shadow row drawn just below a container
    #[must_use]
    pub fn shadow_below(&self) -> &'static str {
        match self.current_theme {
            SymbolTheme::Unicode => "▔",
            SymbolTheme::Ascii => "-",
        }
    }

    /// Marker drawn where a sensor sits when sensors are shown for debugging
    #[must_use]
    pub fn sentinel(&self) -> &'static str {
        match self.current_theme {
            SymbolTheme::Unicode => "┄",
            SymbolTheme::Ascii => "-",
        }
    }

    #[must_use]
    pub fn required(&self) -> &'static str {
        "*"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = SymbolService::default();
        assert_eq!(service.theme(), SymbolTheme::Unicode);
    }

    #[test]
    fn test_theme_cycling() {
        let mut service = SymbolService::new(SymbolTheme::Unicode);
        service.cycle_theme();
        assert_eq!(service.theme(), SymbolTheme::Ascii);
        service.cycle_theme();
        assert_eq!(service.theme(), SymbolTheme::Unicode);
    }

    #[test]
    fn test_ascii_symbols() {
        let service = SymbolService::new(SymbolTheme::Ascii);
        assert_eq!(service.sort_down(), "v");
        assert_eq!(service.sort_up(), "^");
        assert_eq!(service.radio(true), "(*)");
        assert_eq!(service.help(), "(?)");
    }

    #[test]
    fn test_unicode_symbols() {
        let service = SymbolService::new(SymbolTheme::Unicode);
        assert_eq!(service.sort_down(), "▼");
        assert_eq!(service.radio(false), "○");
        assert_eq!(service.shadow_below(), "▔");
    }
}
