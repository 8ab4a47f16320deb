use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
    Frame,
};

use crate::components::{Alert, AlertType, TimePicker};
use crate::gallery::{Action, Component, GalleryContext};
use crate::theme::StyleTarget;

pub struct TimePickerPage {
    pickers: Vec<TimePicker>,
    focused: usize,
    error: Option<String>,
}

impl TimePickerPage {
    pub fn new() -> Self {
        let mut pickers = vec![TimePicker::new("twelve-hour")];
        if let Ok(picker) = TimePicker::new("twenty-four-hour").with_format("HH:mm") {
            pickers.push(picker);
        }
        let mut disabled = TimePicker::new("disabled");
        disabled.set_disabled(true);
        pickers.push(disabled);

        Self {
            pickers,
            focused: 0,
            error: None,
        }
    }
}

impl Default for TimePickerPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TimePickerPage {
    fn title(&self) -> &'static str {
        "Time Picker"
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.focused = self.focused.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.focused = (self.focused + 1).min(self.pickers.len().saturating_sub(1));
                Action::None
            }
            _ => {
                let Some(picker) = self.pickers.get_mut(self.focused) else {
                    return Action::None;
                };
                match picker.handle_key(key) {
                    Ok(Some(time)) => {
                        self.error = None;
                        Action::Notify(format!("{} set to {}", picker.name(), time.format("%H:%M")))
                    }
                    Ok(None) => Action::None,
                    Err(e) => {
                        self.error = Some(e.to_string());
                        Action::None
                    }
                }
            }
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &GalleryContext) {
        let mut constraints = vec![Constraint::Length(2); self.pickers.len()];
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Fill(1));
        let areas = Layout::vertical(constraints).split(rect);

        for (index, picker) in self.pickers.iter_mut().enumerate() {
            let area = areas[index];
            let label_style = if index == self.focused {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };
            let label = format!("{} ({})", picker.name(), picker.format().pattern());
            f.buffer_mut().set_line(area.x, area.y, &Line::styled(label, label_style), area.width);

            let themed = std::mem::take(picker).themed(&ctx.registry);
            *picker = themed;
            let row = Rect::new(area.x + 2, area.y + 1, area.width.saturating_sub(2), 1).intersection(area);
            (&*picker).render(row, f.buffer_mut());
        }

        let error_area = areas[self.pickers.len()];
        if let Some(error) = &self.error {
            f.render_widget(
                Alert::new(error.as_str()).alert_type(AlertType::Error).small().themed(&ctx.registry),
                error_area,
            );
        }

        f.render_widget(
            Paragraph::new("↑/↓ focus · type digits then Enter · a/p pick AM/PM · Esc cancel"),
            areas[self.pickers.len() + 1],
        );
    }
}
