use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::components::{HelpCallout, HelpCalloutState, ListItem, OrderedList, Placement};
use crate::gallery::{Action, Component, GalleryContext};
use crate::layouts::{Horizontal, SpacingSize};
use crate::theme::StyleTarget;

const SPACINGS: [&str; 6] = ["xs", "sm", "md", "lg", "xl", "0"];

pub struct LayoutPage {
    callouts: [HelpCalloutState; 2],
    spacing: usize,
}

impl LayoutPage {
    pub fn new() -> Self {
        Self {
            callouts: Default::default(),
            spacing: 3,
        }
    }

    fn spacing(&self) -> SpacingSize {
        SPACINGS[self.spacing].parse().unwrap_or_default()
    }

    fn list() -> OrderedList<'static> {
        OrderedList::new(vec![
            ListItem::new("Pick a number"),
            ListItem::new("Assign it").nested(OrderedList::new(vec![
                ListItem::new("to a user"),
                ListItem::new("or to a call flow"),
            ])),
            ListItem::new("Place a test call"),
        ])
        .last(true)
    }
}

impl Default for LayoutPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LayoutPage {
    fn title(&self) -> &'static str {
        "Layout"
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('x') => {
                self.spacing = (self.spacing + 1) % SPACINGS.len();
                Action::Notify(format!("Horizontal spacing '{}'", SPACINGS[self.spacing]))
            }
            KeyCode::Esc => {
                self.callouts.iter_mut().for_each(HelpCalloutState::hide);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        for callout in &mut self.callouts {
            callout.handle_mouse(mouse);
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &GalleryContext) {
        let list = Self::list().themed(&ctx.registry);
        let [callouts, _, horizontal, _, list_area, hint] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(list.height()),
            Constraint::Fill(1),
        ])
        .areas(rect);

        let [plain, hinted] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(callouts);

        let items = vec![
            Line::from(Span::styled("First", Style::default().add_modifier(Modifier::BOLD))),
            Line::from("Second"),
            Line::from("Third"),
        ];
        let row = Horizontal::new(items)
            .spacing(self.spacing())
            .theme(*ctx.registry.theme());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" horizontal · gap {} ", row.gap()));
        let inner = block.inner(horizontal);
        f.render_widget(block, horizontal);
        f.render_widget(row, inner);

        f.render_widget(list, list_area);

        f.render_widget(
            Paragraph::new("hover the icons for help · x cycle spacing · Esc hide"),
            hint,
        );

        // callouts last so their popups draw over the rest of the page
        let [first, second] = &mut self.callouts;
        f.render_stateful_widget(
            HelpCallout::new("Caller ID", "The number shown to people you call.")
                .placement(Placement::Bottom)
                .boundary(rect)
                .symbols(ctx.symbols)
                .themed(&ctx.registry),
            plain,
            first,
        );
        f.render_stateful_widget(
            HelpCallout::new(
                "Emergency address",
                "Where responders are sent when someone dials an emergency number from this line.",
            )
            .hint_text(true)
            .placement(Placement::Right)
            .max_width(30)
            .boundary(rect)
            .symbols(ctx.symbols)
            .themed(&ctx.registry),
            hinted,
            second,
        );
    }
}
