use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::TITLE_LOGS;
use crate::gallery::{Action, Component, GalleryContext};

/// Newest-first view of the in-memory log buffer.
#[derive(Default)]
pub struct LogsPage {
    scroll: u16,
}

impl LogsPage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for LogsPage {
    fn title(&self) -> &'static str {
        "Logs"
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Home | KeyCode::Char('g') => self.scroll = 0,
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &GalleryContext) {
        let logs = ctx.logs.get_logs();
        let lines: Vec<Line> = if logs.is_empty() {
            vec![Line::from("No log entries. Enable [logging] in the config file to capture them.")]
        } else {
            logs.into_iter().map(Line::from).collect()
        };
        let max_scroll = u16::try_from(lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.min(max_scroll);

        f.render_widget(
            Paragraph::new(lines)
                .scroll((self.scroll, 0))
                .block(Block::default().borders(Borders::ALL).title(TITLE_LOGS)),
            rect,
        );
    }
}
