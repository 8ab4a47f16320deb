use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::behaviors::scroll_shadow::{
    self, ConnectedShadow, OverlayPainter, Placement, RegionId, ScrollShadow, ScrollShadowOptions, ScrollShadowState,
};
use crate::config::ScrollShadowConfig;
use crate::gallery::{Action, Component, GalleryContext};
use crate::theme::StyleTarget;

const CONTENT_LINES: usize = 60;

pub struct ScrollShadowPage {
    state: ScrollShadowState,
    toolbar: ConnectedShadow,
    footer: ConnectedShadow,
    short_state: ScrollShadowState,
}

impl ScrollShadowPage {
    pub fn new(config: &ScrollShadowConfig) -> Self {
        let options = ScrollShadowOptions {
            outer: config.outer,
            debug_show_sentinels: config.debug_show_sentinels,
            page_size: config.page_size,
            ..ScrollShadowOptions::default()
        };
        let state = ScrollShadowState::new(RegionId(1), options);
        let handle = state.handle();
        let toolbar = ConnectedShadow::new(&handle, Some("toolbar"), Placement::Inner);
        let footer = ConnectedShadow::new(&handle, None, Placement::Inner);

        Self {
            state,
            toolbar,
            footer,
            short_state: ScrollShadowState::new(RegionId(2), options),
        }
    }

    fn content() -> Text<'static> {
        Text::from(
            (1..=CONTENT_LINES)
                .map(|i| Line::from(format!("{i:>3}  The quick brown fox jumps over the lazy dog")))
                .collect::<Vec<_>>(),
        )
    }
}

impl Component for ScrollShadowPage {
    fn title(&self) -> &'static str {
        "Scroll Shadow"
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::PageUp => self.state.page_up(),
            KeyCode::PageDown => self.state.page_down(),
            KeyCode::Home | KeyCode::Char('g') => self.state.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.state.scroll_to_bottom(),
            _ => return Action::None,
        }
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.scroll_up(),
            MouseEventKind::ScrollDown => self.state.scroll_down(),
            _ => {}
        }
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        if action == Action::ToggleSentinels {
            let show = !self.state.options().debug_show_sentinels;
            self.state.set_debug_show_sentinels(show);
            self.short_state.set_debug_show_sentinels(show);
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &GalleryContext) {
        let [main, side] = Layout::horizontal([Constraint::Fill(2), Constraint::Fill(1)]).areas(rect);
        let [toolbar, body, footer] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1), Constraint::Length(1)]).areas(main);

        let shadow_style = ctx.registry.style(scroll_shadow::widget::STYLE_NAME);

        f.render_widget(
            Paragraph::new(format!(" toolbar · key '{}' · mode {}", self.toolbar.key(), self.toolbar.mode())),
            toolbar,
        );
        f.render_stateful_widget(
            ScrollShadow::new(Self::content())
                .block(Block::default().borders(Borders::ALL).title(" 60 lines "))
                .symbols(ctx.symbols)
                .themed(&ctx.registry),
            body,
            &mut self.state,
        );
        f.render_widget(
            Paragraph::new(format!(" footer · key '{}' · mode {}", self.footer.key(), self.footer.mode())),
            footer,
        );

        // connected overlays repaint from the coordinator's latest mode
        f.render_widget(
            OverlayPainter::new(self.toolbar.overlay()).style(shadow_style).symbols(ctx.symbols),
            toolbar,
        );
        f.render_widget(
            OverlayPainter::new(self.footer.overlay()).style(shadow_style).symbols(ctx.symbols),
            footer,
        );

        let [short, info] = Layout::vertical([Constraint::Length(6), Constraint::Fill(1)]).areas(side);
        f.render_stateful_widget(
            ScrollShadow::new("short content\nnever shadows")
                .block(Block::default().borders(Borders::ALL).title(" short "))
                .symbols(ctx.symbols)
                .themed(&ctx.registry),
            short,
            &mut self.short_state,
        );

        let boundary = self.state.coordinator().boundary();
        let details = vec![
            Line::from(format!("mode: {}", self.state.mode())),
            Line::from(format!("top visible: {}", boundary.top_visible)),
            Line::from(format!("bottom visible: {}", boundary.bottom_visible)),
            Line::from(format!("offset: {}", self.state.offset())),
            Line::from(format!("registrations: {}", self.state.handle().registration_count())),
            Line::from(""),
            Line::from("↑/↓ j/k scroll · PgUp/PgDn page"),
            Line::from("Home/End jump · d sentinels"),
        ];
        f.render_widget(
            Paragraph::new(details).block(Block::default().borders(Borders::ALL).title(" boundary ")),
            info,
        );
    }
}
