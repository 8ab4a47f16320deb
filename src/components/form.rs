//! Labelled form fields laid out in columns.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

use crate::symbols::SymbolService;
use crate::theme::{ComponentStyle, StyleTarget, Theme, ThemeRegistry};

pub const STYLE_NAME: &str = "Form";

/// Rows taken by one field: label, control, gap.
pub const FIELD_HEIGHT: u16 = 3;

const PASSWORD_MASK: char = '•';

pub(crate) fn default_style(theme: &Theme) -> ComponentStyle {
    ComponentStyle {
        fg: Some(theme.palette.text),
        border: Some(theme.palette.border),
        accent: Some(theme.palette.primary.border),
        muted: Some(theme.palette.gray_light_text),
        padding: theme.spacing.medium,
        ..ComponentStyle::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Input { value: String, password: bool },
    Toggle { checked: bool, description: String },
}

impl Control {
    pub fn input(value: impl Into<String>) -> Self {
        Self::Input {
            value: value.into(),
            password: false,
        }
    }

    pub fn password(value: impl Into<String>) -> Self {
        Self::Input {
            value: value.into(),
            password: true,
        }
    }

    pub fn toggle(checked: bool, description: impl Into<String>) -> Self {
        Self::Toggle {
            checked,
            description: description.into(),
        }
    }

    /// Text as it appears on screen; passwords are masked.
    #[must_use]
    pub fn display_value(&self) -> String {
        match self {
            Self::Input { value, password: true } => value.chars().map(|_| PASSWORD_MASK).collect(),
            Self::Input { value, .. } => value.clone(),
            Self::Toggle { description, .. } => description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub required: bool,
    pub help_text: Option<String>,
    pub control: Control,
}

impl Field {
    pub fn new(label: impl Into<String>, control: Control) -> Self {
        Self {
            label: label.into(),
            required: false,
            help_text: None,
            control,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Flip a toggle; returns the new state, or `None` for inputs.
    pub fn toggle(&mut self) -> Option<bool> {
        match &mut self.control {
            Control::Toggle { checked, .. } => {
                *checked = !*checked;
                Some(*checked)
            }
            Control::Input { .. } => None,
        }
    }
}

/// A group of fields flowing left to right across `columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields {
    columns: u16,
    fields: Vec<Field>,
}

impl Fields {
    #[must_use]
    pub fn new(columns: u16, fields: Vec<Field>) -> Self {
        Self {
            columns: columns.max(1),
            fields,
        }
    }

    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        let count = u16::try_from(self.fields.len()).unwrap_or(u16::MAX);
        count.div_ceil(self.columns)
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.rows() * FIELD_HEIGHT
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [Field] {
        &mut self.fields
    }
}

#[derive(Debug, Clone)]
pub struct Form {
    sections: Vec<Fields>,
    style: ComponentStyle,
    symbols: SymbolService,
}

impl Form {
    #[must_use]
    pub fn new(sections: Vec<Fields>) -> Self {
        Self {
            sections,
            style: default_style(&Theme::default()),
            symbols: SymbolService::default(),
        }
    }

    #[must_use]
    pub fn symbols(mut self, symbols: SymbolService) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn set_symbols(&mut self, symbols: SymbolService) {
        self.symbols = symbols;
    }

    pub fn sections(&self) -> &[Fields] {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut [Fields] {
        &mut self.sections
    }

    /// Every field in reading order.
    pub fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.sections.iter_mut().flat_map(|s| s.fields.iter_mut())
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.sections.iter().map(Fields::height).sum()
    }

    fn render_field(&self, field: &Field, area: Rect, buf: &mut Buffer) {
        let style = self.style;

        let mut label = vec![Span::styled(field.label.as_str(), style.base().add_modifier(Modifier::BOLD))];
        if field.required {
            label.push(Span::styled(format!(" {}", self.symbols.required()), style.accent_style()));
        }
        if let Some(help) = &field.help_text {
            label.push(Span::styled(format!("  {help}"), style.muted_style()));
        }
        buf.set_line(area.x, area.y, &Line::from(label), area.width);

        if area.height < 2 {
            return;
        }
        let y = area.y + 1;
        let line = match &field.control {
            Control::Input { .. } => {
                let width = usize::from(area.width);
                let text = format!("{:<width$}", field.control.display_value());
                Line::from(Span::styled(text, style.base().add_modifier(Modifier::UNDERLINED)))
            }
            Control::Toggle { checked, description } => {
                let knob = if *checked { style.accent_style() } else { style.muted_style() };
                Line::from(vec![
                    Span::styled(self.symbols.toggle(*checked), knob),
                    Span::raw(" "),
                    Span::styled(description.as_str(), style.base()),
                ])
            }
        };
        buf.set_line(area.x, y, &line, area.width);
    }
}

impl StyleTarget for Form {
    fn themed(mut self, registry: &ThemeRegistry) -> Self {
        self.style = registry.style(STYLE_NAME);
        self
    }
}

impl Widget for &Form {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        for section in &self.sections {
            let columns = vec![Constraint::Fill(1); usize::from(section.columns)];
            for row in section.fields.chunks(usize::from(section.columns)) {
                if y >= area.bottom() {
                    return;
                }
                let height = FIELD_HEIGHT.min(area.bottom() - y);
                let row_area = Rect::new(area.x, y, area.width, height);
                let cells = Layout::horizontal(columns.clone())
                    .spacing(self.style.padding)
                    .split(row_area);
                for (field, cell) in row.iter().zip(cells.iter()) {
                    self.render_field(field, *cell, buf);
                }
                y += FIELD_HEIGHT;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo(columns: u16) -> Form {
        Form::new(vec![Fields::new(
            columns,
            vec![
                Field::new("Input 1", Control::input("Value 1")).required(),
                Field::new("Input 2", Control::input("Value 2")).help_text("Optional"),
                Field::new("Toggle 1", Control::toggle(true, "It's a toggle")),
                Field::new("Input 3", Control::password("Shhhh")).help_text("Secret"),
            ],
        )])
    }

    fn line(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn test_password_is_masked() {
        assert_eq!(Control::password("abc").display_value(), "•••");
        assert_eq!(Control::input("abc").display_value(), "abc");
    }

    #[test]
    fn test_rows_follow_columns() {
        assert_eq!(Fields::new(2, vec![Field::new("a", Control::input("")); 3]).rows(), 2);
        assert_eq!(Fields::new(0, vec![Field::new("a", Control::input("")); 3]).rows(), 3);
        assert_eq!(demo(2).height(), 6);
        assert_eq!(demo(1).height(), 12);
    }

    #[test]
    fn test_render_two_columns() {
        let area = Rect::new(0, 0, 42, 6);
        let mut buf = Buffer::empty(area);
        (&demo(2)).render(area, &mut buf);

        // columns of 20 cells separated by a 2 cell gap
        assert!(line(&buf, 0).starts_with("Input 1 *"));
        assert_eq!(&line(&buf, 0)[22..], "Input 2  Optional   ");
        assert!(line(&buf, 1).starts_with("Value 1"));
        assert!(line(&buf, 4).contains("•••••"));
    }

    #[test]
    fn test_toggle_field() {
        let mut form = demo(2);
        let toggle = form.fields_mut().nth(2).unwrap();
        assert_eq!(toggle.toggle(), Some(false));
        assert_eq!(form.fields_mut().next().unwrap().toggle(), None);
    }
}
