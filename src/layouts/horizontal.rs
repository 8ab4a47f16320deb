//! Horizontal layout.
//!
//! Lays items out left to right, left aligned, with a gap between
//! consecutive items and none before the first.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::Widget,
};

use super::spacing::SpacingSize;
use crate::theme::Theme;

#[derive(Debug, Clone, Default)]
pub struct Horizontal<'a> {
    spacing: SpacingSize,
    items: Vec<Line<'a>>,
    theme: Theme,
}

impl<'a> Horizontal<'a> {
    #[must_use]
    pub fn new(items: Vec<Line<'a>>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn spacing(mut self, spacing: SpacingSize) -> Self {
        self.spacing = spacing;
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Gap between items in cells.
    #[must_use]
    pub fn gap(&self) -> u16 {
        self.spacing.resolve(&self.theme.spacing)
    }

    /// Split `area` into one column per width.
    #[must_use]
    pub fn split(&self, area: Rect, widths: &[u16]) -> Vec<Rect> {
        Layout::horizontal(widths.iter().map(|w| Constraint::Length(*w)))
            .flex(Flex::Start)
            .spacing(self.gap())
            .split(area)
            .to_vec()
    }
}

impl Widget for Horizontal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let widths: Vec<u16> = self
            .items
            .iter()
            .map(|item| u16::try_from(item.width()).unwrap_or(u16::MAX))
            .collect();
        let columns = self.split(area, &widths);
        for (item, column) in self.items.iter().zip(columns) {
            buf.set_line(column.x, column.y, item, column.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_gap_before_first_item() {
        let layout = Horizontal::new(Vec::new()).spacing(SpacingSize::Small);
        let columns = layout.split(Rect::new(0, 0, 40, 1), &[3, 4, 5]);
        assert_eq!(columns[0].x, 0);
        assert_eq!(columns[1].x, 3 + 1);
        assert_eq!(columns[2].x, 3 + 1 + 4 + 1);
    }

    #[test]
    fn test_default_gap_is_large() {
        let layout = Horizontal::new(Vec::new());
        assert_eq!(layout.gap(), Theme::default().spacing.large);
    }

    #[test]
    fn test_render_items() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        Horizontal::new(vec![Line::from("ab"), Line::from("cd")])
            .spacing(SpacingSize::Cells(2))
            .render(area, &mut buf);
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "a");
        assert_eq!(buf.cell((4, 0)).unwrap().symbol(), "c");
    }
}
