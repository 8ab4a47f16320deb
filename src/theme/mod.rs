//! Theming for the shared components.
//!
//! A [`Theme`] bundles the colour palette and spacing scale. Components do
//! not read it directly; they register a style derivation with the
//! [`ThemeRegistry`] and select their resolved [`ComponentStyle`] from it,
//! which lets applications override a single component without touching
//! the palette.
//!
//! # Example
//!
//! ```rust
//! use shared_components::theme::{ThemePreset, ThemeRegistry};
//!
//! let registry = ThemeRegistry::with_defaults(ThemePreset::Dark);
//! let header = registry.style("TableHeader");
//! assert!(header.bg.is_some());
//! ```

use ratatui::style::Color;

pub mod presets;
pub mod registry;

pub use presets::ThemePreset;
pub use registry::{ComponentStyle, StyleBuilder, ThemeRegistry};

/// Widgets that pick up their style from a [`ThemeRegistry`].
pub trait StyleTarget: Sized {
    #[must_use]
    fn themed(self, registry: &ThemeRegistry) -> Self;
}

/// Light, border and dark shades of one semantic colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorFamily {
    pub light: Color,
    pub border: Color,
    pub dark: Color,
}

/// Semantic colours shared by every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: ColorFamily,
    pub positive: ColorFamily,
    pub negative: ColorFamily,
    pub border: Color,
    pub secondary_faded: Color,
    pub white: Color,
    pub gray_light_text: Color,
    pub text: Color,
    pub background: Color,
    /// Colour painted over rows that hide more content
    pub shadow: Color,
}

/// Spacing scale in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    pub extra_small: u16,
    pub small: u16,
    pub medium: u16,
    pub large: u16,
    pub extra_large: u16,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            extra_small: 0,
            small: 1,
            medium: 2,
            large: 3,
            extra_large: 5,
        }
    }
}

/// Complete theme: palette plus spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub preset: ThemePreset,
    pub palette: Palette,
    pub spacing: Spacing,
}

impl Default for Theme {
    fn default() -> Self {
        ThemePreset::default().theme()
    }
}
