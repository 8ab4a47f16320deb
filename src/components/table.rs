//! Sortable table built from header cells and bordered rows.

use std::cmp::Ordering;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};
use serde::{Deserialize, Serialize};

use crate::symbols::SymbolService;
use crate::theme::{ComponentStyle, StyleTarget, Theme, ThemeRegistry};

pub const HEADER_STYLE_NAME: &str = "TableHeader";
pub const ROW_STYLE_NAME: &str = "TableRow";

pub(crate) fn header_style(theme: &Theme) -> ComponentStyle {
    ComponentStyle {
        fg: Some(theme.palette.white),
        bg: Some(theme.palette.secondary_faded),
        accent: Some(theme.palette.white),
        muted: Some(theme.palette.gray_light_text),
        padding: theme.spacing.small,
        ..ComponentStyle::default()
    }
}

pub(crate) fn row_style(theme: &Theme) -> ComponentStyle {
    ComponentStyle {
        fg: Some(theme.palette.text),
        border: Some(theme.palette.border),
        accent: Some(theme.palette.primary.light),
        padding: theme.spacing.small,
        ..ComponentStyle::default()
    }
}

/// Sort direction of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    Descending,
    #[default]
    None,
    Ascending,
}

impl SortOrder {
    /// `-1`, `0` or `1`.
    #[must_use]
    pub fn as_i8(self) -> i8 {
        match self {
            Self::Descending => -1,
            Self::None => 0,
            Self::Ascending => 1,
        }
    }

    #[must_use]
    pub fn from_i8(value: i8) -> Self {
        match value.signum() {
            1 => Self::Ascending,
            -1 => Self::Descending,
            _ => Self::None,
        }
    }

    /// Order after clicking the column name.
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::None => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::None,
        }
    }
}

/// Which sort control of a header cell lies under column `x`.
///
/// The cell is laid out as padding, label, a gap, then the down and up
/// arrows. Returns the natural order the control requests.
fn sort_control_at(cell: Rect, padding: u16, label_width: u16, x: u16) -> Option<i8> {
    if x < cell.x || x >= cell.right() {
        return None;
    }
    let rel = x - cell.x;
    let label_start = padding;
    let label_end = padding + label_width;
    match rel {
        r if (label_start..label_end).contains(&r) => Some(0),
        r if r == label_end + 1 => Some(1),
        r if r == label_end + 2 => Some(-1),
        _ => None,
    }
}

/// One header cell.
#[derive(Debug, Clone)]
pub struct TableHeader {
    name: String,
    sortable: bool,
    sort_order: SortOrder,
    style: ComponentStyle,
    symbols: SymbolService,
}

impl TableHeader {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sortable: false,
            sort_order: SortOrder::None,
            style: header_style(&Theme::default()),
            symbols: SymbolService::default(),
        }
    }

    #[must_use]
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    #[must_use]
    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    #[must_use]
    pub fn symbols(mut self, symbols: SymbolService) -> Self {
        self.symbols = symbols;
        self
    }

    #[must_use]
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    #[must_use]
    pub fn label(&self) -> String {
        self.name.to_uppercase()
    }

    fn label_width(&self) -> u16 {
        u16::try_from(self.label().chars().count()).unwrap_or(u16::MAX)
    }

    /// Natural order requested by a click at column `x` of `cell`:
    /// `0` on the name, `1` on the down arrow, `-1` on the up arrow.
    #[must_use]
    pub fn click_at(&self, cell: Rect, x: u16) -> Option<i8> {
        if !self.sortable {
            return None;
        }
        sort_control_at(cell, self.style.padding, self.label_width(), x)
    }
}

impl StyleTarget for TableHeader {
    fn themed(mut self, registry: &ThemeRegistry) -> Self {
        self.style = registry.style(HEADER_STYLE_NAME);
        self
    }
}

impl Widget for &TableHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style;
        buf.set_style(area, style.base());

        let mut spans = vec![
            Span::raw(" ".repeat(usize::from(style.padding))),
            Span::styled(self.label(), style.base()),
        ];
        if self.sortable {
            let arrow = |active: bool| if active { style.accent_style() } else { style.muted_style() };
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                self.symbols.sort_down(),
                arrow(self.sort_order == SortOrder::Ascending),
            ));
            spans.push(Span::styled(
                self.symbols.sort_up(),
                arrow(self.sort_order == SortOrder::Descending),
            ));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

/// One body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<String>,
    clickable: bool,
}

impl TableRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            clickable: false,
        }
    }

    /// Rows with an action attached highlight on hover and report clicks.
    #[must_use]
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    #[must_use]
    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    #[must_use]
    pub fn is_clickable(&self) -> bool {
        self.clickable
    }
}

/// Compare cells numerically when both parse as numbers, textually otherwise.
fn compare_cells(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.unwrap_or_default();
    let b = b.unwrap_or_default();
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Display order of `rows` sorted by `column`.
#[must_use]
pub fn sorted_order(rows: &[TableRow], column: usize, order: SortOrder) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..rows.len()).collect();
    match order {
        SortOrder::None => {}
        SortOrder::Ascending => {
            indices.sort_by(|&a, &b| compare_cells(rows[a].cell(column), rows[b].cell(column)));
        }
        SortOrder::Descending => {
            indices.sort_by(|&a, &b| compare_cells(rows[b].cell(column), rows[a].cell(column)));
        }
    }
    indices
}

/// Something the user did to a rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// A sort control was clicked; `natural_order` is 0, 1 or -1.
    Sort { column: usize, natural_order: i8 },
    /// A clickable row was clicked; the index is into the unsorted rows.
    RowClicked(usize),
}

#[derive(Debug, Clone, Default)]
pub struct TableState {
    sort: Option<(usize, SortOrder)>,
    hovered: Option<usize>,
    area: Rect,
    columns: Vec<Rect>,
    // (sortable, padding, label width) per column, from the last render
    headers: Vec<(bool, u16, u16)>,
    display_order: Vec<usize>,
    clickable: Vec<bool>,
}

impl TableState {
    #[must_use]
    pub fn sort(&self) -> Option<(usize, SortOrder)> {
        self.sort
    }

    pub fn set_sort(&mut self, column: usize, order: SortOrder) {
        self.sort = match order {
            SortOrder::None => None,
            order => Some((column, order)),
        };
    }

    /// Apply the order a header click asked for. Clicking a name cycles
    /// that column through ascending, descending and unsorted.
    pub fn request_sort(&mut self, column: usize, natural_order: i8) {
        let order = if natural_order == 0 {
            self.order_of(column).cycle()
        } else {
            SortOrder::from_i8(natural_order)
        };
        debug!("table sort column {column} -> {order:?}");
        self.set_sort(column, order);
    }

    #[must_use]
    pub fn order_of(&self, column: usize) -> SortOrder {
        match self.sort {
            Some((c, order)) if c == column => order,
            _ => SortOrder::None,
        }
    }

    /// Row under the pointer, as an index into the unsorted rows.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    fn row_at(&self, y: u16) -> Option<usize> {
        let rel = y.checked_sub(self.area.y)?.checked_sub(1)?;
        if rel % 2 != 0 {
            return None;
        }
        self.display_order.get(usize::from(rel / 2)).copied()
    }

    /// Track hover and report clicks against the last rendered layout.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<TableEvent> {
        let inside = self.area.contains(Position::new(mouse.column, mouse.row));
        match mouse.kind {
            MouseEventKind::Moved => {
                self.hovered = if inside { self.row_at(mouse.row) } else { None };
                None
            }
            MouseEventKind::Down(MouseButton::Left) if inside => {
                if mouse.row == self.area.y {
                    return self.header_click(mouse.column);
                }
                let row = self.row_at(mouse.row)?;
                if self.clickable.get(row).copied().unwrap_or(false) {
                    Some(TableEvent::RowClicked(row))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn header_click(&mut self, x: u16) -> Option<TableEvent> {
        let column = self.columns.iter().position(|rect| x >= rect.x && x < rect.right())?;
        let (sortable, padding, label_width) = *self.headers.get(column)?;
        if !sortable {
            return None;
        }
        let natural_order = sort_control_at(self.columns[column], padding, label_width, x)?;
        self.request_sort(column, natural_order);
        Some(TableEvent::Sort { column, natural_order })
    }
}

pub struct Table {
    headers: Vec<TableHeader>,
    rows: Vec<TableRow>,
    widths: Vec<Constraint>,
    header_style: Option<ComponentStyle>,
    row_style: ComponentStyle,
}

impl Table {
    #[must_use]
    pub fn new(headers: Vec<TableHeader>, rows: Vec<TableRow>) -> Self {
        let widths = vec![Constraint::Fill(1); headers.len()];
        Self {
            headers,
            rows,
            widths,
            header_style: None,
            row_style: row_style(&Theme::default()),
        }
    }

    #[must_use]
    pub fn widths(mut self, widths: Vec<Constraint>) -> Self {
        self.widths = widths;
        self
    }
}

impl StyleTarget for Table {
    fn themed(mut self, registry: &ThemeRegistry) -> Self {
        self.header_style = Some(registry.style(HEADER_STYLE_NAME));
        self.row_style = registry.style(ROW_STYLE_NAME);
        self
    }
}

impl StatefulWidget for Table {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let columns = Layout::horizontal(self.widths.clone()).spacing(1).split(area);

        state.area = area;
        state.columns = columns.to_vec();
        state.display_order = match state.sort {
            Some((column, order)) => sorted_order(&self.rows, column, order),
            None => (0..self.rows.len()).collect(),
        };
        state.clickable = self.rows.iter().map(TableRow::is_clickable).collect();

        let mut header_row = area;
        header_row.height = area.height.min(1);
        let header_bg = self.header_style.unwrap_or_else(|| header_style(&Theme::default()));
        buf.set_style(header_row, header_bg.base());

        state.headers.clear();
        for (index, (mut header, cell)) in self.headers.into_iter().zip(columns.iter()).enumerate() {
            if let Some(style) = self.header_style {
                header.style = style;
            }
            let header = if header.is_sortable() {
                header.sort_order(state.order_of(index))
            } else {
                header
            };
            state
                .headers
                .push((header.is_sortable(), header.style.padding, header.label_width()));
            let mut cell = *cell;
            cell.height = header_row.height;
            (&header).render(cell, buf);
        }

        let style = self.row_style;
        let padding = usize::from(style.padding);
        let mut y = area.y + 1;
        for (position, &row_index) in state.display_order.iter().enumerate() {
            if position > 0 {
                if y >= area.bottom() {
                    break;
                }
                let separator = "─".repeat(usize::from(area.width));
                buf.set_string(area.x, y, separator, style.border_style());
                y += 1;
            }
            if y >= area.bottom() {
                break;
            }

            let row = &self.rows[row_index];
            let line_area = Rect::new(area.x, y, area.width, 1);
            let hovered = row.is_clickable() && state.hovered == Some(row_index);
            let row_style = match (hovered, style.accent) {
                (true, Some(accent)) => style.base().bg(accent),
                _ => style.base(),
            };
            buf.set_style(line_area, row_style);

            for (column, cell) in columns.iter().enumerate() {
                let text = format!("{}{}", " ".repeat(padding), row.cell(column).unwrap_or_default());
                buf.set_stringn(cell.x, y, text, usize::from(cell.width), Style::default());
            }
            y += 1;
        }
    }
}
