//! Draggable item with an optional handle.
//!
//! Drag sensing belongs to the host: it calls [`DragItem::begin_drag`]
//! when a drag starts and [`DragItem::end_drag`] with a [`DragMonitor`]
//! describing where (if anywhere) the item landed.

use log::debug;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

use crate::symbols::SymbolService;
use crate::theme::{ComponentStyle, StyleTarget, Theme, ThemeRegistry};

pub const STYLE_NAME: &str = "DragItem";

pub(crate) fn default_style(theme: &Theme) -> ComponentStyle {
    ComponentStyle {
        fg: Some(theme.palette.text),
        muted: Some(theme.palette.gray_light_text),
        ..ComponentStyle::default()
    }
}

/// What travels with a drag: the item's label and on-screen size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub item_type: String,
    pub label: String,
    pub dimensions: Rect,
}

/// Where a dragged item was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropResult {
    pub drop_type: String,
    pub group_index: usize,
}

/// Outcome of a drag as reported by the host.
pub trait DragMonitor {
    fn did_drop(&self) -> bool;
    fn drop_result(&self) -> Option<DropResult>;
}

/// Monitor for hosts that already know the outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropOutcome(pub Option<DropResult>);

impl DragMonitor for DropOutcome {
    fn did_drop(&self) -> bool {
        self.0.is_some()
    }

    fn drop_result(&self) -> Option<DropResult> {
        self.0.clone()
    }
}

#[derive(Debug, Clone)]
pub struct DragItem {
    item_type: String,
    label: String,
    can_drag: bool,
    payload: Option<DragPayload>,
    style: ComponentStyle,
    symbols: SymbolService,
}

impl DragItem {
    pub fn new(item_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
            label: label.into(),
            can_drag: true,
            payload: None,
            style: default_style(&Theme::default()),
            symbols: SymbolService::default(),
        }
    }

    /// Hide the handle and refuse drags.
    #[must_use]
    pub fn can_drag(mut self, can_drag: bool) -> Self {
        self.can_drag = can_drag;
        self
    }

    #[must_use]
    pub fn symbols(mut self, symbols: SymbolService) -> Self {
        self.symbols = symbols;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.payload.is_some()
    }

    /// Start dragging from `area`, the item's rendered rectangle.
    pub fn begin_drag(&mut self, area: Rect) -> Option<DragPayload> {
        if !self.can_drag {
            return None;
        }
        let payload = DragPayload {
            item_type: self.item_type.clone(),
            label: self.label.clone(),
            dimensions: area,
        };
        debug!("drag started: {} ({}x{})", self.label, area.width, area.height);
        self.payload = Some(payload.clone());
        Some(payload)
    }

    /// Finish a drag. `on_drop` runs only when the monitor reports a drop.
    pub fn end_drag<M, F>(&mut self, monitor: &M, on_drop: F) -> bool
    where
        M: DragMonitor,
        F: FnOnce(&str, usize),
    {
        self.payload = None;
        if !monitor.did_drop() {
            return false;
        }
        match monitor.drop_result() {
            Some(result) => {
                debug!("dropped {} on {} #{}", self.label, result.drop_type, result.group_index);
                on_drop(&result.drop_type, result.group_index);
                true
            }
            None => false,
        }
    }
}

impl StyleTarget for DragItem {
    fn themed(mut self, registry: &ThemeRegistry) -> Self {
        self.style = registry.style(STYLE_NAME);
        self
    }
}

impl Widget for &DragItem {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut base = self.style.base();
        if self.is_dragging() {
            base = base.add_modifier(Modifier::DIM);
        }

        let mut spans = Vec::new();
        if self.can_drag {
            spans.push(Span::styled(self.symbols.drag_handle(), self.style.muted_style()));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(self.label.as_str(), base));

        buf.set_style(area, base);
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
