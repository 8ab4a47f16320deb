//! Numbered list with lettered nested lists.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};

use crate::theme::{ComponentStyle, StyleTarget, Theme, ThemeRegistry};

pub const STYLE_NAME: &str = "OrderedList";

const INDENT: usize = 3;

pub(crate) fn default_style(theme: &Theme) -> ComponentStyle {
    ComponentStyle {
        fg: Some(theme.palette.text),
        muted: Some(theme.palette.gray_light_text),
        ..ComponentStyle::default()
    }
}

/// Marker of the `index`th item (zero based) at `depth`.
///
/// The top level counts `1.`, `2.`, ...; nested lists count `a.`, `b.`,
/// ..., `z.`, `aa.`.
#[must_use]
pub fn marker(index: usize, depth: usize) -> String {
    if depth == 0 {
        return format!("{}.", index + 1);
    }
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect::<String>() + "."
}

pub struct ListItem<'a> {
    content: Line<'a>,
    nested: Option<OrderedList<'a>>,
}

impl<'a> ListItem<'a> {
    pub fn new(content: impl Into<Line<'a>>) -> Self {
        Self {
            content: content.into(),
            nested: None,
        }
    }

    #[must_use]
    pub fn nested(mut self, list: OrderedList<'a>) -> Self {
        self.nested = Some(list);
        self
    }
}

pub struct OrderedList<'a> {
    items: Vec<ListItem<'a>>,
    last: bool,
    style: ComponentStyle,
}

impl<'a> OrderedList<'a> {
    #[must_use]
    pub fn new(items: Vec<ListItem<'a>>) -> Self {
        Self {
            items,
            last: false,
            style: default_style(&Theme::default()),
        }
    }

    /// The last list in its container drops its trailing blank line.
    #[must_use]
    pub fn last(mut self, last: bool) -> Self {
        self.last = last;
        self
    }

    /// Lines the list occupies, including margins.
    #[must_use]
    pub fn height(&self) -> u16 {
        let mut lines = Vec::new();
        self.collect(0, &mut lines);
        u16::try_from(lines.len() + usize::from(!self.last)).unwrap_or(u16::MAX)
    }

    fn collect(&self, depth: usize, out: &mut Vec<Line<'a>>) {
        let indent = " ".repeat(depth * INDENT);
        for (index, item) in self.items.iter().enumerate() {
            if depth > 0 && index == 0 {
                out.push(Line::default());
            }
            let mut spans = vec![
                Span::raw(indent.clone()),
                Span::styled(format!("{:>2} ", marker(index, depth)), self.style.muted_style()),
            ];
            spans.extend(item.content.spans.iter().cloned());
            out.push(Line::from(spans).style(self.style.base()));

            if let Some(nested) = &item.nested {
                nested.collect(depth + 1, out);
            }
        }
    }

    /// Rendered lines without the trailing margin.
    #[must_use]
    pub fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        self.collect(0, &mut lines);
        lines
    }
}

impl StyleTarget for OrderedList<'_> {
    fn themed(mut self, registry: &ThemeRegistry) -> Self {
        self.style = registry.style(STYLE_NAME);
        self
    }
}

impl Widget for OrderedList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = self.lines();
        if !self.last {
            lines.push(Line::default());
        }
        Paragraph::new(Text::from(lines)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_markers() {
        assert_eq!(marker(0, 0), "1.");
        assert_eq!(marker(11, 0), "12.");
        assert_eq!(marker(0, 1), "a.");
        assert_eq!(marker(25, 2), "z.");
        assert_eq!(marker(26, 1), "aa.");
    }

    #[test]
    fn test_nested_list_is_lettered_with_gap() {
        let list = OrderedList::new(vec![
            ListItem::new("first").nested(OrderedList::new(vec![
                ListItem::new("inner one"),
                ListItem::new("inner two"),
            ])),
            ListItem::new("second"),
        ]);

        let lines: Vec<String> = list.lines().iter().map(plain).collect();
        assert_eq!(
            lines,
            vec![
                "1. first",
                "",
                "   a. inner one",
                "   b. inner two",
                "2. second",
            ]
        );
        assert_eq!(list.height(), 6);
    }

    #[test]
    fn test_last_list_has_no_bottom_margin() {
        let list = OrderedList::new(vec![ListItem::new("only")]).last(true);
        assert_eq!(list.height(), 1);

        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        OrderedList::new(vec![ListItem::new("one")]).render(area, &mut buf);
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "1");
        assert_eq!(buf.cell((3, 0)).unwrap().symbol(), "o");
        assert_eq!(buf.cell((0, 1)).unwrap().symbol(), " ");
    }
}
