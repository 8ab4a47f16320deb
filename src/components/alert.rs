//! Alert box.

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::Text,
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget, Wrap},
};
use serde::{Deserialize, Serialize};

use crate::layouts::SpacingSize;
use crate::theme::{ColorFamily, ComponentStyle, Palette, StyleTarget, Theme, ThemeRegistry};

pub const STYLE_NAME: &str = "Alert";

pub(crate) fn default_style(_theme: &Theme) -> ComponentStyle {
    ComponentStyle {
        padding: 1,
        ..ComponentStyle::default()
    }
}

/// Semantic kind of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    #[default]
    Info,
    Success,
    Error,
}

impl AlertType {
    /// Palette family the alert is drawn with.
    #[must_use]
    pub fn family(self, palette: &Palette) -> ColorFamily {
        match self {
            Self::Success => palette.positive,
            Self::Error => palette.negative,
            Self::Info => palette.primary,
        }
    }
}

/// Dismissal state of an alert.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertState {
    closing: bool,
}

impl AlertState {
    /// Start fading the alert out; returns whether it was still open.
    pub fn close(&mut self) -> bool {
        let was_open = !self.closing;
        self.closing = true;
        was_open
    }

    pub fn reopen(&mut self) {
        self.closing = false;
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.closing
    }
}

pub struct Alert<'a> {
    text: Text<'a>,
    alert_type: AlertType,
    small: bool,
    closing: bool,
    spacing: SpacingSize,
    theme: Theme,
    style: ComponentStyle,
}

impl<'a> Alert<'a> {
    pub fn new(text: impl Into<Text<'a>>) -> Self {
        let theme = Theme::default();
        Self {
            text: text.into(),
            alert_type: AlertType::default(),
            small: false,
            closing: false,
            spacing: SpacingSize::Cells(0),
            style: default_style(&theme),
            theme,
        }
    }

    #[must_use]
    pub fn alert_type(mut self, alert_type: AlertType) -> Self {
        self.alert_type = alert_type;
        self
    }

    /// Compact variant: single-line border and no padding.
    #[must_use]
    pub fn small(mut self) -> Self {
        self.small = true;
        self
    }

    #[must_use]
    pub fn closing(mut self, closing: bool) -> Self {
        self.closing = closing;
        self
    }

    /// Outer margin around the alert.
    #[must_use]
    pub fn spacing(mut self, spacing: SpacingSize) -> Self {
        self.spacing = spacing;
        self
    }

    /// Colours of the alert as a whole.
    #[must_use]
    pub fn resolved_style(&self) -> ComponentStyle {
        let family = self.alert_type.family(&self.theme.palette);
        let mut style = ComponentStyle {
            fg: Some(family.dark),
            bg: Some(family.light),
            border: Some(family.border),
            ..ComponentStyle::default()
        }
        .patch(self.style);
        if self.closing {
            style.modifier |= Modifier::DIM;
        }
        style
    }
}

impl StyleTarget for Alert<'_> {
    fn themed(mut self, registry: &ThemeRegistry) -> Self {
        self.theme = *registry.theme();
        self.style = registry.style(STYLE_NAME);
        self
    }
}

impl Widget for Alert<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let margin = self.spacing.resolve(&self.theme.spacing);
        let area = area.inner(Margin::new(margin, margin));
        if area.is_empty() {
            return;
        }

        let style = self.resolved_style();
        let (border_type, padding) = if self.small {
            (BorderType::Plain, Padding::ZERO)
        } else {
            (BorderType::Thick, Padding::horizontal(style.padding))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(style.border_style().patch(Style::default().add_modifier(style.modifier)))
            .padding(padding);

        Paragraph::new(self.text)
            .block(block)
            .style(style.base())
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemePreset;

    #[test]
    fn test_type_selects_palette_family() {
        let registry = ThemeRegistry::with_defaults(ThemePreset::Default);
        let palette = registry.theme().palette;

        let success = Alert::new("saved").alert_type(AlertType::Success).themed(&registry);
        assert_eq!(success.resolved_style().bg, Some(palette.positive.light));
        assert_eq!(success.resolved_style().border, Some(palette.positive.border));

        let error = Alert::new("failed").alert_type(AlertType::Error).themed(&registry);
        assert_eq!(error.resolved_style().fg, Some(palette.negative.dark));

        let info = Alert::new("note").themed(&registry);
        assert_eq!(info.resolved_style().fg, Some(palette.primary.dark));
    }

    #[test]
    fn test_closing_alert_is_dimmed() {
        let alert = Alert::new("bye").closing(true);
        assert!(alert.resolved_style().modifier.contains(Modifier::DIM));
        assert!(!Alert::new("hi").resolved_style().modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_state_close_once() {
        let mut state = AlertState::default();
        assert!(state.close());
        assert!(!state.close());
        assert!(state.is_closing());
        state.reopen();
        assert!(!state.is_closing());
    }

    #[test]
    fn test_render_small_with_margin() {
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);
        Alert::new("ok")
            .small()
            .spacing(SpacingSize::Cells(1))
            .render(area, &mut buf);

        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), " ");
        assert_eq!(buf.cell((1, 1)).unwrap().symbol(), "┌");
        assert_eq!(buf.cell((2, 2)).unwrap().symbol(), "o");
    }

    #[test]
    fn test_render_normal_uses_thick_border_and_padding() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        Alert::new("ok").render(area, &mut buf);

        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "┏");
        assert_eq!(buf.cell((2, 1)).unwrap().symbol(), "o");
    }
}
