use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers, MouseEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame, Terminal,
};

use super::pages::{
    AlertsPage, DragPage, FormPage, LayoutPage, LoaderPage, LogsPage, ScrollShadowPage, TablePage, TimePickerPage,
};
use super::{Action, Component, EventHandler, EventType, GalleryContext};
use crate::config::Config;
use crate::constants::{HELP_LINE, STATUS_BAR_HEIGHT, TAB_BAR_HEIGHT, TITLE_GALLERY};
use crate::logger::LogBuffer;
use crate::symbols::SymbolService;
use crate::theme::ThemeRegistry;

pub struct App {
    pages: Vec<Box<dyn Component>>,
    current: usize,
    ctx: GalleryContext,
    should_quit: bool,
    status: Option<String>,
}

impl App {
    pub fn new(config: &Config, logs: LogBuffer) -> Result<Self> {
        let registry = ThemeRegistry::with_defaults(config.theme_preset()?);
        let symbols = SymbolService::new(config.theme.symbols);
        let mut ctx = GalleryContext::new(registry, symbols, logs);
        ctx.debug_show_sentinels = config.scroll_shadow.debug_show_sentinels;

        let pages: Vec<Box<dyn Component>> = vec![
            Box::new(ScrollShadowPage::new(&config.scroll_shadow)),
            Box::new(AlertsPage::new()),
            Box::new(TablePage::new()),
            Box::new(TimePickerPage::new()),
            Box::new(FormPage::new()),
            Box::new(LoaderPage::new()),
            Box::new(DragPage::new()),
            Box::new(LayoutPage::new()),
            Box::new(LogsPage::new()),
        ];

        Ok(Self {
            pages,
            current: 0,
            ctx,
            should_quit: false,
            status: None,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn context(&self) -> &GalleryContext {
        &self.ctx
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Gallery-wide keys win over page keys.
    fn global_action(key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
        match key.code {
            KeyCode::Tab => Some(Action::NextPage),
            KeyCode::BackTab => Some(Action::PreviousPage),
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('t') => Some(Action::CycleTheme),
            KeyCode::Char('s') => Some(Action::CycleSymbols),
            KeyCode::Char('d') => Some(Action::ToggleSentinels),
            KeyCode::F(n @ 1..=12) => Some(Action::SelectPage(usize::from(n) - 1)),
            _ => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = match Self::global_action(key) {
            Some(action) => action,
            None => match self.pages.get_mut(self.current) {
                Some(page) => page.handle_key_events(key),
                None => Action::None,
            },
        };
        self.dispatch(action);
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let action = match self.pages.get_mut(self.current) {
            Some(page) => page.handle_mouse_events(mouse),
            None => Action::None,
        };
        self.dispatch(action);
    }

    pub fn tick(&mut self) {
        self.dispatch(Action::Tick);
    }

    /// Let every page see the action, then apply whatever survives.
    pub fn dispatch(&mut self, action: Action) {
        if action == Action::None {
            return;
        }
        let action = self.pages.iter_mut().fold(action, |action, page| page.update(action));
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::NextPage => self.current = (self.current + 1) % self.pages.len(),
            Action::PreviousPage => self.current = (self.current + self.pages.len() - 1) % self.pages.len(),
            Action::SelectPage(index) if index < self.pages.len() => self.current = index,
            Action::CycleTheme => {
                let preset = self.ctx.registry.cycle_preset();
                info!("theme switched to {preset}");
                self.status = Some(format!("Theme: {preset}"));
            }
            Action::CycleSymbols => {
                self.ctx.symbols.cycle_theme();
                info!("symbols switched to {:?}", self.ctx.symbols.theme());
                self.status = Some(format!("Symbols: {:?}", self.ctx.symbols.theme()));
            }
            Action::ToggleSentinels => {
                self.ctx.debug_show_sentinels = !self.ctx.debug_show_sentinels;
                self.status = Some(format!("Sentinels visible: {}", self.ctx.debug_show_sentinels));
            }
            Action::Notify(message) => {
                debug!("{message}");
                self.status = Some(message);
            }
            Action::Quit => self.should_quit = true,
            _ => {}
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let [tabs, body, status] = Layout::vertical([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        let titles: Vec<&str> = self.pages.iter().map(|page| page.title()).collect();
        f.render_widget(
            Tabs::new(titles)
                .select(self.current)
                .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
                .block(Block::default().borders(Borders::ALL).title(TITLE_GALLERY)),
            tabs,
        );

        if let Some(page) = self.pages.get_mut(self.current) {
            page.render(f, body, &self.ctx);
        }

        let mut spans = vec![Span::styled(HELP_LINE, Style::default().add_modifier(Modifier::DIM))];
        if let Some(message) = &self.status {
            spans.push(Span::raw(" │ "));
            spans.push(Span::raw(message.as_str()));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), status);
    }
}

/// Run the gallery until the user quits.
pub async fn run_app(config: Config, logs: LogBuffer) -> Result<()> {
    let mut app = App::new(&config, logs)?;
    let mut event_handler = EventHandler::new(config.gallery.tick_rate());

    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if config.gallery.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("gallery started");
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Key(key) => {
                app.handle_key(key);
                needs_render = true;
            }
            EventType::Mouse(mouse) => {
                app.handle_mouse(mouse);
                needs_render = true;
            }
            EventType::Resize(_, _) => needs_render = true,
            EventType::Tick => {
                // loaders animate on tick, so always redraw
                app.tick();
                needs_render = true;
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn new_app() -> App {
        App::new(&Config::default(), LogBuffer::new()).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_tab_navigation_wraps() {
        let mut app = new_app();
        app.handle_key(press(KeyCode::BackTab));
        assert_eq!(app.current_page(), app.pages.len() - 1);
        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.current_page(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());

        let mut app = new_app();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_cycle_theme_updates_registry() {
        let mut app = new_app();
        let before = app.context().registry.preset();
        app.handle_key(press(KeyCode::Char('t')));
        assert_ne!(app.context().registry.preset(), before);
        assert!(app.status().is_some_and(|s| s.starts_with("Theme: ")));
    }

    #[test]
    fn test_toggle_sentinels_flips_context() {
        let mut app = new_app();
        assert!(!app.context().debug_show_sentinels);
        app.handle_key(press(KeyCode::Char('d')));
        assert!(app.context().debug_show_sentinels);
    }

    #[test]
    fn test_select_page_out_of_range_is_ignored() {
        let mut app = new_app();
        app.dispatch(Action::SelectPage(99));
        assert_eq!(app.current_page(), 0);
        app.dispatch(Action::SelectPage(2));
        assert_eq!(app.current_page(), 2);
    }

    #[test]
    fn test_renders_without_panicking() {
        use ratatui::backend::TestBackend;

        let mut app = new_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        for _ in 0..app.pages.len() {
            terminal.draw(|f| app.render(f, f.area())).unwrap();
            app.handle_key(press(KeyCode::Tab));
        }
    }
}
