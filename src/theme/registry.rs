//! Component style registry.

use std::collections::{BTreeMap, HashMap};

use ratatui::style::{Color, Modifier, Style};

use super::{Theme, ThemePreset};

/// Derives a component's style from the active theme.
pub type StyleBuilder = fn(&Theme) -> ComponentStyle;

/// Resolved colours and decorations for one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComponentStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub border: Option<Color>,
    /// Highlight colour (active sort arrow, selected radio, ...)
    pub accent: Option<Color>,
    /// De-emphasised colour (inactive arrow, help text, ...)
    pub muted: Option<Color>,
    pub modifier: Modifier,
    pub padding: u16,
}

impl ComponentStyle {
    /// Text style: foreground, background and modifiers.
    #[must_use]
    pub fn base(&self) -> Style {
        let mut style = Style::default().add_modifier(self.modifier);
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        style
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        let style = self.base().remove_modifier(Modifier::all());
        match self.border {
            Some(border) => style.fg(border),
            None => style,
        }
    }

    #[must_use]
    pub fn accent_style(&self) -> Style {
        match self.accent {
            Some(accent) => self.base().fg(accent),
            None => self.base(),
        }
    }

    #[must_use]
    pub fn muted_style(&self) -> Style {
        match self.muted {
            Some(muted) => self.base().fg(muted),
            None => self.base().add_modifier(Modifier::DIM),
        }
    }

    /// Overlay the fields set in `other` on top of `self`.
    #[must_use]
    pub fn patch(self, other: ComponentStyle) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            border: other.border.or(self.border),
            accent: other.accent.or(self.accent),
            muted: other.muted.or(self.muted),
            modifier: self.modifier | other.modifier,
            padding: if other.padding > 0 { other.padding } else { self.padding },
        }
    }
}

/// Named style derivations plus per-application overrides.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    theme: Theme,
    builders: BTreeMap<&'static str, StyleBuilder>,
    overrides: HashMap<String, ComponentStyle>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::with_defaults(ThemePreset::default())
    }
}

impl ThemeRegistry {
    /// Empty registry using `preset`.
    #[must_use]
    pub fn new(preset: ThemePreset) -> Self {
        Self {
            theme: preset.theme(),
            builders: BTreeMap::new(),
            overrides: HashMap::new(),
        }
    }

    /// Registry with every built-in component registered.
    #[must_use]
    pub fn with_defaults(preset: ThemePreset) -> Self {
        let mut registry = Self::new(preset);
        crate::components::register_styles(&mut registry);
        crate::behaviors::register_styles(&mut registry);
        registry
    }

    /// Register (or replace) the style derivation for `name`.
    pub fn register(&mut self, name: &'static str, builder: StyleBuilder) -> &mut Self {
        self.builders.insert(name, builder);
        self
    }

    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    /// Names of the registered components, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.builders.keys().copied()
    }

    /// Resolved style of `name` under the active theme.
    ///
    /// Unregistered names resolve to an empty style.
    #[must_use]
    pub fn style(&self, name: &str) -> ComponentStyle {
        let base = self
            .builders
            .get(name)
            .map(|builder| builder(&self.theme))
            .unwrap_or_default();

        match self.overrides.get(name) {
            Some(patch) => base.patch(*patch),
            None => base,
        }
    }

    /// Patch a component's style regardless of theme.
    pub fn set_override(&mut self, name: impl Into<String>, style: ComponentStyle) {
        self.overrides.insert(name.into(), style);
    }

    pub fn clear_override(&mut self, name: &str) {
        self.overrides.remove(name);
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn preset(&self) -> ThemePreset {
        self.theme.preset
    }

    pub fn set_preset(&mut self, preset: ThemePreset) {
        self.theme = preset.theme();
    }

    /// Switch to the next preset and return it.
    pub fn cycle_preset(&mut self) -> ThemePreset {
        let next = self.theme.preset.next();
        self.set_preset(next);
        next
    }
}
