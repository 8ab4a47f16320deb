use crossterm::event::{KeyCode, KeyEvent};
use log::warn;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Color,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::components::{loader, Loader, LoaderState};
use crate::gallery::{Action, Component, GalleryContext};
use crate::theme::StyleTarget;

const SIZES: [&str; 3] = ["20px", "40px", "60px"];

pub struct LoaderPage {
    state: LoaderState,
    sizes: Vec<(String, u16)>,
    paused: bool,
}

impl LoaderPage {
    pub fn new() -> Self {
        let sizes = SIZES
            .iter()
            .filter_map(|size| match loader::parse_size(size) {
                Ok(cells) => Some(((*size).to_string(), cells)),
                Err(e) => {
                    warn!("skipping loader size {size}: {e}");
                    None
                }
            })
            .collect();

        Self {
            state: LoaderState::default(),
            sizes,
            paused: false,
        }
    }
}

impl Default for LoaderPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LoaderPage {
    fn title(&self) -> &'static str {
        "Loader"
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(' ') => {
                self.paused = !self.paused;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if action == Action::Tick && !self.paused {
            self.state.tick();
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &GalleryContext) {
        let mut constraints = vec![Constraint::Length(2); self.sizes.len()];
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Fill(1));
        let areas = Layout::vertical(constraints).split(rect);

        for (index, (label, cells)) in self.sizes.iter().enumerate() {
            let area = areas[index];
            let [name, rings] = Layout::horizontal([Constraint::Length(8), Constraint::Fill(1)]).areas(area);
            f.render_widget(Paragraph::new(label.as_str()), name);
            f.render_stateful_widget(
                Loader::new().size(*cells).symbols(ctx.symbols).themed(&ctx.registry),
                rings,
                &mut self.state,
            );
        }

        // Custom colour inside a container.
        let contained = Loader::new()
            .color(Color::Magenta)
            .container(Block::default().borders(Borders::ALL))
            .symbols(ctx.symbols)
            .themed(&ctx.registry);
        let width = contained.width() + 2;
        let container = areas[self.sizes.len()];
        f.render_stateful_widget(
            contained,
            Rect::new(container.x, container.y, width.min(container.width), container.height),
            &mut self.state,
        );

        let status = if self.paused { "paused" } else { "spinning" };
        f.render_widget(
            Paragraph::new(Line::from(format!("{status} · space pause"))),
            areas[self.sizes.len() + 1],
        );
    }
}
