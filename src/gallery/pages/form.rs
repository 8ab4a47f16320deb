use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::{Paragraph, Widget},
    Frame,
};

use crate::components::{Control, Field, Fields, Form};
use crate::gallery::{Action, Component, GalleryContext};
use crate::theme::StyleTarget;

pub struct FormPage {
    columns: u16,
    toggle_checked: bool,
}

impl FormPage {
    pub fn new() -> Self {
        Self {
            columns: 2,
            toggle_checked: true,
        }
    }

    fn form(&self, ctx: &GalleryContext) -> Form {
        Form::new(vec![Fields::new(
            self.columns,
            vec![
                Field::new("Input 1", Control::input("Value 1")).required(),
                Field::new("Input 2", Control::input("Value 2")).help_text("Optional"),
                Field::new("Toggle 1", Control::toggle(self.toggle_checked, "It's a toggle")),
                Field::new("Input 3", Control::password("Shhhh")).help_text("Secret"),
            ],
        )])
        .symbols(ctx.symbols)
        .themed(&ctx.registry)
    }
}

impl Default for FormPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FormPage {
    fn title(&self) -> &'static str {
        "Form"
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') => {
                self.columns = if self.columns == 1 { 2 } else { 1 };
                Action::Notify(format!("{} column layout", self.columns))
            }
            KeyCode::Char(' ') => {
                self.toggle_checked = !self.toggle_checked;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &GalleryContext) {
        let form = self.form(ctx);
        let [body, hint] = Layout::vertical([Constraint::Length(form.height()), Constraint::Length(1)]).areas(rect);
        (&form).render(body, f.buffer_mut());
        f.render_widget(Paragraph::new("c switch columns · space flip toggle"), hint);
    }
}
