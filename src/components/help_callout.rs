//! Help icon that shows a callout while hovered.

use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, StatefulWidget, Widget, Wrap},
};
use serde::{Deserialize, Serialize};

use crate::symbols::SymbolService;
use crate::theme::{ComponentStyle, StyleTarget, Theme, ThemeRegistry};

pub const STYLE_NAME: &str = "HelpCallout";

/// Default callout width in cells.
pub const DEFAULT_MAX_WIDTH: u16 = 40;

pub(crate) fn default_style(theme: &Theme) -> ComponentStyle {
    ComponentStyle {
        fg: Some(theme.palette.text),
        bg: Some(theme.palette.background),
        border: Some(theme.palette.border),
        accent: Some(theme.palette.primary.border),
        padding: theme.spacing.small,
        ..ComponentStyle::default()
    }
}

/// Side of the trigger the callout prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Placement {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Greedy word wrap to `width` columns. Words longer than a line are split.
#[must_use]
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                lines.push(word.drain(..width).collect());
            }
            let word: String = word.into_iter().collect();
            let needed = if current.is_empty() { word.len() } else { current.chars().count() + 1 + word.len() };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&word);
        }
        lines.push(current);
    }
    lines
}

fn fits(anchor: Rect, size: (u16, u16), placement: Placement, boundary: Rect) -> bool {
    let (w, h) = size;
    match placement {
        Placement::Top => anchor.y >= boundary.y.saturating_add(h),
        Placement::Bottom => anchor.bottom().saturating_add(h) <= boundary.bottom(),
        Placement::Left => anchor.x >= boundary.x.saturating_add(w),
        Placement::Right => anchor.right().saturating_add(w) <= boundary.right(),
    }
}

/// Position a `size` popup next to `anchor`, flipping to the opposite side
/// when the preferred one lacks room and clamping into `boundary`.
#[must_use]
pub fn popup_area(anchor: Rect, size: (u16, u16), placement: Placement, boundary: Rect) -> (Rect, Placement) {
    let placement = if !fits(anchor, size, placement, boundary)
        && fits(anchor, size, placement.opposite(), boundary)
    {
        placement.opposite()
    } else {
        placement
    };

    let width = size.0.min(boundary.width);
    let height = size.1.min(boundary.height);
    let (w, h) = (i32::from(width), i32::from(height));
    let (ax, ay) = (i32::from(anchor.x), i32::from(anchor.y));
    let (aw, ah) = (i32::from(anchor.width), i32::from(anchor.height));

    let (x, y) = match placement {
        Placement::Top => (ax + aw / 2 - w / 2, ay - h),
        Placement::Bottom => (ax + aw / 2 - w / 2, ay + ah),
        Placement::Left => (ax - w, ay + ah / 2 - h / 2),
        Placement::Right => (ax + aw, ay + ah / 2 - h / 2),
    };

    let min_x = i32::from(boundary.x);
    let min_y = i32::from(boundary.y);
    let x = x.clamp(min_x, i32::from(boundary.right()) - w);
    let y = y.clamp(min_y, i32::from(boundary.bottom()) - h);

    let x = u16::try_from(x).unwrap_or(boundary.x);
    let y = u16::try_from(y).unwrap_or(boundary.y);
    (Rect::new(x, y, width, height), placement)
}

#[derive(Debug, Clone, Default)]
pub struct HelpCalloutState {
    visible: bool,
    trigger: Rect,
    popup: Option<Rect>,
}

impl HelpCalloutState {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Area the callout occupied on the last render.
    #[must_use]
    pub fn popup(&self) -> Option<Rect> {
        self.popup
    }

    /// Show the callout while the pointer is over the trigger. Returns
    /// whether visibility changed.
    pub fn on_mouse_moved(&mut self, column: u16, row: u16) -> bool {
        let over = self.trigger.contains(Position::new(column, row));
        let changed = over != self.visible;
        self.visible = over;
        changed
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.on_mouse_moved(mouse.column, mouse.row),
            _ => false,
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

pub struct HelpCallout<'a> {
    children: Line<'a>,
    content: String,
    placement: Placement,
    max_width: u16,
    hint_text: bool,
    boundary: Option<Rect>,
    style: ComponentStyle,
    symbols: SymbolService,
}

impl<'a> HelpCallout<'a> {
    pub fn new(children: impl Into<Line<'a>>, content: impl Into<String>) -> Self {
        Self {
            children: children.into(),
            content: content.into(),
            placement: Placement::default(),
            max_width: DEFAULT_MAX_WIDTH,
            hint_text: false,
            boundary: None,
            style: default_style(&Theme::default()),
            symbols: SymbolService::default(),
        }
    }

    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn max_width(mut self, max_width: u16) -> Self {
        self.max_width = max_width.max(3);
        self
    }

    /// Make the whole text, not just the icon, trigger the callout.
    #[must_use]
    pub fn hint_text(mut self, hint_text: bool) -> Self {
        self.hint_text = hint_text;
        self
    }

    /// Keep the callout inside `boundary` instead of the whole frame.
    #[must_use]
    pub fn boundary(mut self, boundary: Rect) -> Self {
        self.boundary = Some(boundary);
        self
    }

    #[must_use]
    pub fn symbols(mut self, symbols: SymbolService) -> Self {
        self.symbols = symbols;
        self
    }

    /// Outer size of the callout box, borders included.
    #[must_use]
    pub fn popup_size(&self) -> (u16, u16) {
        let chrome = 2 + 2 * self.style.padding;
        let text_width = self.max_width.saturating_sub(chrome).max(1);
        let lines = wrap_text(&self.content, text_width);
        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let width = u16::try_from(longest).unwrap_or(text_width).min(text_width) + chrome;
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
        (width, height)
    }
}

impl StyleTarget for HelpCallout<'_> {
    fn themed(mut self, registry: &ThemeRegistry) -> Self {
        self.style = registry.style(STYLE_NAME);
        self
    }
}

impl StatefulWidget for HelpCallout<'_> {
    type State = HelpCalloutState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }
        let style = self.style;
        let text_width = u16::try_from(self.children.width()).unwrap_or(u16::MAX);
        let icon = self.symbols.help();
        let icon_width = u16::try_from(icon.chars().count()).unwrap_or(1);

        let mut line = self.children.clone();
        if self.hint_text {
            line = line.patch_style(style.base().add_modifier(Modifier::UNDERLINED));
        }
        line.spans.push(Span::raw(" "));
        line.spans.push(Span::styled(icon, style.accent_style()));
        buf.set_line(area.x, area.y, &line, area.width);

        let icon_x = area.x.saturating_add(text_width).saturating_add(1);
        let icon_area = Rect::new(icon_x, area.y, icon_width, 1).intersection(area);
        state.trigger = if self.hint_text {
            Rect::new(area.x, area.y, text_width + 1 + icon_width, 1).intersection(area)
        } else {
            icon_area
        };

        if !state.visible {
            state.popup = None;
            return;
        }

        let boundary = self.boundary.unwrap_or(buf.area);
        let (popup, _) = popup_area(icon_area, self.popup_size(), self.placement, boundary);
        let popup = popup.intersection(buf.area);
        state.popup = Some(popup);

        Clear.render(popup, buf);
        Paragraph::new(self.content)
            .wrap(Wrap { trim: true })
            .style(style.base())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style.border_style())
                    .padding(Padding::horizontal(style.padding)),
            )
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Rect = Rect::new(0, 0, 60, 20);

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap_text("", 5), Vec::<String>::new());
    }

    #[test]
    fn test_preferred_placement_when_it_fits() {
        let anchor = Rect::new(30, 10, 1, 1);
        let (area, placement) = popup_area(anchor, (10, 3), Placement::Top, FRAME);
        assert_eq!(placement, Placement::Top);
        assert_eq!(area, Rect::new(25, 7, 10, 3));
    }

    #[test]
    fn test_flips_when_no_room() {
        let anchor = Rect::new(30, 1, 1, 1);
        let (area, placement) = popup_area(anchor, (10, 3), Placement::Top, FRAME);
        assert_eq!(placement, Placement::Bottom);
        assert_eq!(area.y, 2);

        let anchor = Rect::new(58, 10, 1, 1);
        let (area, placement) = popup_area(anchor, (10, 3), Placement::Right, FRAME);
        assert_eq!(placement, Placement::Left);
        assert_eq!(area.x, 48);
    }

    #[test]
    fn test_clamped_into_boundary() {
        let anchor = Rect::new(1, 10, 1, 1);
        let (area, _) = popup_area(anchor, (10, 3), Placement::Top, FRAME);
        assert_eq!(area.x, 0);

        let boundary = Rect::new(10, 5, 20, 10);
        let anchor = Rect::new(28, 12, 1, 1);
        let (area, _) = popup_area(anchor, (10, 3), Placement::Bottom, boundary);
        assert!(area.right() <= boundary.right());
        assert!(area.bottom() <= boundary.bottom());
    }

    #[test]
    fn test_max_width_bounds_popup() {
        let callout = HelpCallout::new("Rate", "a fairly long explanation of what the rate limit means");
        let (width, height) = callout.popup_size();
        assert!(width <= DEFAULT_MAX_WIDTH);
        assert!(height >= 4);

        let narrow = HelpCallout::new("Rate", "short").max_width(20);
        assert_eq!(narrow.popup_size(), (9, 3));
    }

    #[test]
    fn test_hover_over_icon_shows_callout() {
        let mut buf = Buffer::empty(FRAME);
        let mut state = HelpCalloutState::default();
        let area = Rect::new(10, 10, 30, 1);
        HelpCallout::new("Rate", "explained").render(area, &mut buf, &mut state);
        assert_eq!(buf.cell((15, 10)).unwrap().symbol(), "ⓘ");

        // the text itself is not a trigger
        assert!(!state.on_mouse_moved(11, 10));
        assert!(state.on_mouse_moved(15, 10));
        assert!(state.is_visible());

        HelpCallout::new("Rate", "explained").render(area, &mut buf, &mut state);
        let popup = state.popup().unwrap();
        assert!(popup.bottom() <= 10);

        assert!(state.on_mouse_moved(40, 2));
        assert!(!state.is_visible());
    }

    #[test]
    fn test_hint_text_makes_text_a_trigger() {
        let mut buf = Buffer::empty(FRAME);
        let mut state = HelpCalloutState::default();
        HelpCallout::new("Rate", "explained")
            .hint_text(true)
            .render(Rect::new(0, 5, 30, 1), &mut buf, &mut state);
        assert!(state.on_mouse_moved(1, 5));
        assert!(buf.cell((1, 5)).unwrap().modifier.contains(Modifier::UNDERLINED));
    }
}
