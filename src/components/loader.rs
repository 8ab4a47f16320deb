//! Three-ring loading indicator.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Widget},
};

use crate::error::{ComponentError, Result};
use crate::symbols::SymbolService;
use crate::theme::{ComponentStyle, StyleTarget, Theme, ThemeRegistry};

pub const STYLE_NAME: &str = "Loader";

/// Number of rings drawn.
pub const RING_COUNT: usize = 3;

/// Pixels represented by one terminal cell when sizes are given in px.
const PX_PER_CELL: u16 = 20;

pub(crate) fn default_style(theme: &Theme) -> ComponentStyle {
    ComponentStyle {
        fg: Some(theme.palette.primary.border),
        muted: Some(theme.palette.gray_light_text),
        ..ComponentStyle::default()
    }
}

/// Parse a ring size: a cell count (`"2"`) or a pixel dimension (`"20px"`).
pub fn parse_size(size: &str) -> Result<u16> {
    let size = size.trim();
    let invalid = || ComponentError::InvalidSize(size.to_string());

    if let Some(px) = size.strip_suffix("px") {
        let px: f32 = px.trim().parse().map_err(|_| invalid())?;
        if !px.is_finite() || px <= 0.0 {
            return Err(invalid());
        }
        let cells = (px / f32::from(PX_PER_CELL)).ceil().max(1.0);
        return Ok(cells.min(f32::from(u16::MAX)) as u16);
    }

    match size.parse::<u16>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(cells) => Ok(cells),
    }
}

/// Animation frame of a loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoaderState {
    frame: usize,
}

impl LoaderState {
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Index of the ring currently highlighted.
    #[must_use]
    pub fn active_ring(&self) -> usize {
        self.frame % RING_COUNT
    }
}

pub struct Loader<'a> {
    size: u16,
    color: Option<Color>,
    ring: Option<&'a str>,
    container: Option<Block<'a>>,
    style: ComponentStyle,
    symbols: SymbolService,
}

impl Default for Loader<'_> {
    fn default() -> Self {
        Self {
            size: 1,
            color: None,
            ring: None,
            container: None,
            style: default_style(&Theme::default()),
            symbols: SymbolService::default(),
        }
    }
}

impl<'a> Loader<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of each ring in cells.
    #[must_use]
    pub fn size(mut self, cells: u16) -> Self {
        self.size = cells.max(1);
        self
    }

    /// Colour of the rings; the theme's primary colour otherwise.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Replace the glyph drawn for each ring.
    #[must_use]
    pub fn ring(mut self, ring: &'a str) -> Self {
        self.ring = Some(ring);
        self
    }

    /// Wrap the rings in a container block.
    #[must_use]
    pub fn container(mut self, block: Block<'a>) -> Self {
        self.container = Some(block);
        self
    }

    #[must_use]
    pub fn symbols(mut self, symbols: SymbolService) -> Self {
        self.symbols = symbols;
        self
    }

    /// Cells needed to draw all rings.
    #[must_use]
    pub fn width(&self) -> u16 {
        let rings = RING_COUNT as u16;
        self.size.saturating_mul(rings).saturating_add(rings - 1)
    }
}

impl StyleTarget for Loader<'_> {
    fn themed(mut self, registry: &ThemeRegistry) -> Self {
        self.style = registry.style(STYLE_NAME);
        self
    }
}

impl ratatui::widgets::StatefulWidget for Loader<'_> {
    type State = LoaderState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner = match &self.container {
            Some(block) => {
                let inner = block.inner(area);
                block.clone().render(area, buf);
                inner
            }
            None => area,
        };
        if inner.is_empty() {
            return;
        }

        let color = self.color.or(self.style.fg).unwrap_or(Color::Blue);
        let active = Style::default().fg(color).add_modifier(Modifier::BOLD);
        let idle = Style::default().fg(color).add_modifier(Modifier::DIM);
        let glyph = self.ring.unwrap_or(self.symbols.ring());

        let mut x = inner.x;
        for index in 0..RING_COUNT {
            let style = if index == state.active_ring() { active } else { idle };
            for _ in 0..self.size {
                if x >= inner.right() {
                    return;
                }
                buf.set_string(x, inner.y, glyph, style);
                x = x.saturating_add(1);
            }
            x = x.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::StatefulWidget;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("20px"), Ok(1));
        assert_eq!(parse_size("30px"), Ok(2));
        assert_eq!(parse_size("3"), Ok(3));
        assert_eq!(parse_size("1px"), Ok(1));
        assert!(parse_size("0").is_err());
        assert!(parse_size("big").is_err());
        assert!(parse_size("-5px").is_err());
    }

    #[test]
    fn test_tick_cycles_rings() {
        let mut state = LoaderState::default();
        assert_eq!(state.active_ring(), 0);
        state.tick();
        state.tick();
        assert_eq!(state.active_ring(), 2);
        state.tick();
        assert_eq!(state.active_ring(), 0);
    }

    #[test]
    fn test_render_highlights_active_ring() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        let mut state = LoaderState::default();
        state.tick();
        Loader::new().size(2).color(Color::Green).render(area, &mut buf, &mut state);

        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "●");
        assert_eq!(buf.cell((2, 0)).unwrap().symbol(), " ");
        assert!(buf.cell((0, 0)).unwrap().modifier.contains(Modifier::DIM));
        assert!(buf.cell((3, 0)).unwrap().modifier.contains(Modifier::BOLD));
        assert_eq!(buf.cell((3, 0)).unwrap().fg, Color::Green);
    }

    #[test]
    fn test_huge_pixel_size_saturates() {
        let size = parse_size("600000px").unwrap();
        assert_eq!(size, 30000);
        let loader = Loader::new().size(size);
        assert_eq!(loader.width(), u16::MAX);

        let area = Rect::new(u16::MAX - 8, 0, 8, 1);
        let mut buf = Buffer::empty(area);
        loader.render(area, &mut buf, &mut LoaderState::default());
        assert_eq!(buf.cell((u16::MAX - 1, 0)).unwrap().symbol(), "●");
    }

    #[test]
    fn test_custom_ring_and_width() {
        let loader = Loader::new().size(3).ring("#");
        assert_eq!(loader.width(), 11);

        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        loader.render(area, &mut buf, &mut LoaderState::default());
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "#");
        assert_eq!(buf.cell((10, 0)).unwrap().symbol(), "#");
    }
}
