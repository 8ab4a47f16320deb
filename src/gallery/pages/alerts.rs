use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::components::{Alert, AlertState, AlertType};
use crate::gallery::{Action, Component, GalleryContext};
use crate::layouts::SpacingSize;
use crate::theme::StyleTarget;

pub struct AlertsPage {
    states: [AlertState; 4],
}

impl AlertsPage {
    pub fn new() -> Self {
        Self {
            states: [AlertState::default(); 4],
        }
    }
}

impl Default for AlertsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for AlertsPage {
    fn title(&self) -> &'static str {
        "Alerts"
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c @ '1'..='4') => {
                let index = usize::from(c as u8 - b'1');
                if self.states[index].close() {
                    return Action::Notify(format!("Alert {} closing", index + 1));
                }
                Action::None
            }
            KeyCode::Char('r') => {
                self.states.iter_mut().for_each(AlertState::reopen);
                Action::Notify("Alerts reopened".to_string())
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &GalleryContext) {
        let [info, success, error, small, hint] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(rect);

        let alerts = [
            (info, AlertType::Info, "Heads up: the export runs every night at 02:00.", false),
            (success, AlertType::Success, "Number ordered. It will be active in a few minutes.", false),
            (error, AlertType::Error, "The port request was rejected by the losing carrier.", false),
            (small, AlertType::Info, "Small alerts drop the padding.", true),
        ];

        for (index, (area, alert_type, text, small)) in alerts.into_iter().enumerate() {
            let mut alert = Alert::new(text)
                .alert_type(alert_type)
                .closing(self.states[index].is_closing())
                .spacing(SpacingSize::Cells(0))
                .themed(&ctx.registry);
            if small {
                alert = alert.small();
            }
            f.render_widget(alert, area);
        }

        f.render_widget(
            ratatui::widgets::Paragraph::new("1-4 close an alert · r reopen all"),
            hint,
        );
    }
}
