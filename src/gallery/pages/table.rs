use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use log::info;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use crate::components::{Table, TableEvent, TableHeader, TableRow, TableState};
use crate::gallery::{Action, Component, GalleryContext};
use crate::theme::StyleTarget;

const NUMBERS: [[&str; 3]; 6] = [
    ["+1 919 555 0142", "Raleigh", "12"],
    ["+1 415 555 0199", "San Francisco", "3"],
    ["+1 212 555 0100", "New York", "27"],
    ["+1 512 555 0175", "Austin", "8"],
    ["+1 303 555 0123", "Denver", "15"],
    ["+1 206 555 0188", "Seattle", "1"],
];

pub struct TablePage {
    state: TableState,
}

impl TablePage {
    pub fn new() -> Self {
        Self {
            state: TableState::default(),
        }
    }

    fn table(ctx: &GalleryContext) -> Table {
        let headers = vec![
            TableHeader::new("number").sortable(true).symbols(ctx.symbols),
            TableHeader::new("city").sortable(true).symbols(ctx.symbols),
            TableHeader::new("calls").sortable(true).symbols(ctx.symbols),
        ];
        let rows = NUMBERS.iter().map(|row| TableRow::new(*row).clickable(true)).collect();
        Table::new(headers, rows)
            .widths(vec![Constraint::Length(20), Constraint::Length(18), Constraint::Length(10)])
            .themed(&ctx.registry)
    }
}

impl Default for TablePage {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TablePage {
    fn title(&self) -> &'static str {
        "Table"
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c @ '1'..='3') => {
                let column = usize::from(c as u8 - b'1');
                self.state.request_sort(column, 0);
                Action::Notify(format!("Sorting column {} {:?}", column + 1, self.state.order_of(column)))
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match self.state.handle_mouse(mouse) {
            Some(TableEvent::RowClicked(row)) => {
                info!("table row {row} clicked");
                Action::Notify(format!("Clicked {}", NUMBERS[row][0]))
            }
            Some(TableEvent::Sort { column, natural_order }) => {
                Action::Notify(format!("Sort column {} requested {natural_order}", column + 1))
            }
            None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &GalleryContext) {
        let [table, hint] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(rect);
        f.render_stateful_widget(Self::table(ctx), table, &mut self.state);
        f.render_widget(
            Paragraph::new("click a header name or arrow to sort · 1-3 cycle sort · click a row"),
            hint,
        );
    }
}
