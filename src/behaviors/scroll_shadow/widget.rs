//! Scroll container widget that draws edge shadows.
//!
//! [`ScrollShadow`] renders its lines at the state's offset, reports the
//! resulting geometry to the intersection host and lets the coordinator
//! restyle every registered overlay before the overlays are painted.

use std::rc::Rc;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Text,
    widgets::{Block, StatefulWidget, Widget},
};

use super::coordinator::{BoundaryShadowCoordinator, ShadowHandle};
use super::host::{TerminalIntersectionHost, ViewportGeometry};
use super::mode::ShadowMode;
use super::overlay::{OverlaySlot, Placement, RegistrationKey, ShadowOverlay};
use super::sensor::{IntersectionHost, ObservationRoot, RegionId};
use crate::symbols::SymbolService;
use crate::theme::{ComponentStyle, StyleTarget, Theme, ThemeRegistry};

pub const STYLE_NAME: &str = "ScrollShadow";

/// Lines moved by a page scroll when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

pub(crate) fn default_style(theme: &Theme) -> ComponentStyle {
    ComponentStyle {
        fg: Some(theme.palette.shadow),
        bg: Some(theme.palette.shadow),
        accent: Some(theme.palette.negative.border),
        ..ComponentStyle::default()
    }
}

/// Behaviour switches of a scroll shadow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollShadowOptions {
    /// Measure against the whole frame. Only one such shadow should exist.
    pub global: bool,
    /// Skip the built-in overlay; connected overlays still work
    pub disabled: bool,
    /// Draw the built-in shadow outside the container
    pub outer: bool,
    /// Draw a marker where each sensor sits
    pub debug_show_sentinels: bool,
    pub page_size: usize,
}

impl Default for ScrollShadowOptions {
    fn default() -> Self {
        Self {
            global: false,
            disabled: false,
            outer: false,
            debug_show_sentinels: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Scroll position, coordinator and built-in overlay of one scroll shadow.
#[derive(Debug)]
pub struct ScrollShadowState<H: IntersectionHost = TerminalIntersectionHost> {
    coordinator: BoundaryShadowCoordinator<H>,
    region: RegionId,
    options: ScrollShadowOptions,
    offset: usize,
    geometry: ViewportGeometry,
    built_in: Option<Rc<ShadowOverlay>>,
}

impl ScrollShadowState<TerminalIntersectionHost> {
    #[must_use]
    pub fn new(region: RegionId, options: ScrollShadowOptions) -> Self {
        Self::with_host(TerminalIntersectionHost::new(), region, options)
    }
}

impl<H: IntersectionHost> ScrollShadowState<H> {
    pub fn with_host(host: H, region: RegionId, options: ScrollShadowOptions) -> Self {
        let mut coordinator = BoundaryShadowCoordinator::new(host);

        let built_in = (!options.disabled).then(|| {
            let overlay = built_in_shape(options);
            coordinator.register_overlay(RegistrationKey::built_in()).mount(&overlay);
            overlay
        });

        coordinator.attach((!options.global).then_some(region));

        Self {
            coordinator,
            region,
            options,
            offset: 0,
            geometry: ViewportGeometry::default(),
            built_in,
        }
    }

    /// Handle for overlays rendered outside this container.
    #[must_use]
    pub fn handle(&self) -> ShadowHandle {
        self.coordinator.handle()
    }

    #[must_use]
    pub fn mode(&self) -> ShadowMode {
        self.coordinator.mode()
    }

    #[must_use]
    pub fn coordinator(&self) -> &BoundaryShadowCoordinator<H> {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut BoundaryShadowCoordinator<H> {
        &mut self.coordinator
    }

    #[must_use]
    pub fn built_in_overlay(&self) -> Option<&Rc<ShadowOverlay>> {
        self.built_in.as_ref()
    }

    #[must_use]
    pub fn options(&self) -> ScrollShadowOptions {
        self.options
    }

    pub fn set_debug_show_sentinels(&mut self, show: bool) {
        self.options.debug_show_sentinels = show;
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }

    #[must_use]
    pub fn root(&self) -> ObservationRoot {
        if self.options.global {
            ObservationRoot::Window
        } else {
            ObservationRoot::Region(self.region)
        }
    }

    /// Move the observation to another region, or the whole frame.
    ///
    /// Switching between the two swaps the built-in overlay for one of the
    /// matching shape, styled with the current mode.
    pub fn reattach(&mut self, region: Option<RegionId>) {
        if let Some(region) = region {
            self.region = region;
        }
        let global = region.is_none();
        let shape_changed = global != self.options.global;
        self.options.global = global;
        self.coordinator.attach(region);

        if shape_changed && self.built_in.is_some() {
            let overlay = built_in_shape(self.options);
            self.coordinator.handle().connect(RegistrationKey::built_in(), &overlay);
            self.built_in = Some(overlay);
        }
        let geometry = self.geometry;
        self.sync(geometry);
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.offset = self.clamp(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.offset = self.offset.saturating_sub(self.options.page_size);
    }

    pub fn page_down(&mut self) {
        self.offset = self.clamp(self.offset.saturating_add(self.options.page_size));
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.clamp(usize::MAX);
    }

    /// Report new geometry to the host and apply whatever it detected.
    ///
    /// Returns the number of overlay writes.
    pub fn sync(&mut self, geometry: ViewportGeometry) -> usize {
        let offset = geometry.clamped_offset();
        self.geometry = ViewportGeometry { offset, ..geometry };
        self.offset = offset;

        let root = self.root();
        self.coordinator.host_mut().update_geometry(root, self.geometry);
        self.coordinator.pump()
    }

    fn clamp(&self, offset: usize) -> usize {
        // nothing rendered yet, the next render clamps
        if self.geometry.content_len == 0 {
            return offset;
        }
        offset.min(self.geometry.max_offset())
    }
}

fn built_in_shape(options: ScrollShadowOptions) -> Rc<ShadowOverlay> {
    if options.global {
        ShadowOverlay::entire_viewport(Placement::Inner)
    } else if options.outer {
        ShadowOverlay::new(Placement::Outer)
    } else {
        ShadowOverlay::new(Placement::Inner)
    }
}

/// An overlay mounted away from its scroll container.
#[derive(Debug)]
pub struct ConnectedShadow {
    key: RegistrationKey,
    overlay: Rc<ShadowOverlay>,
    slot: OverlaySlot,
}

impl ConnectedShadow {
    /// Connect a new overlay through `handle`.
    ///
    /// Without a `name` the coordinator generates a key no other overlay
    /// of it uses.
    pub fn new(handle: &ShadowHandle, name: Option<&str>, placement: Placement) -> Self {
        Self::connect(handle, name, ShadowOverlay::new(placement))
    }

    /// Same as [`ConnectedShadow::new`] but shading the whole frame.
    pub fn entire_viewport(handle: &ShadowHandle, name: Option<&str>, placement: Placement) -> Self {
        Self::connect(handle, name, ShadowOverlay::entire_viewport(placement))
    }

    fn connect(handle: &ShadowHandle, name: Option<&str>, overlay: Rc<ShadowOverlay>) -> Self {
        let key = name.map_or_else(|| handle.generate_key(), RegistrationKey::from);
        let slot = handle.connect(key.clone(), &overlay);
        Self { key, overlay, slot }
    }

    #[must_use]
    pub fn key(&self) -> &RegistrationKey {
        &self.key
    }

    #[must_use]
    pub fn slot(&self) -> &OverlaySlot {
        &self.slot
    }

    #[must_use]
    pub fn mode(&self) -> ShadowMode {
        self.overlay.mode()
    }

    #[must_use]
    pub fn overlay(&self) -> &ShadowOverlay {
        &self.overlay
    }
}

/// Paints a [`ShadowOverlay`] according to its current class.
pub struct OverlayPainter<'a> {
    overlay: &'a ShadowOverlay,
    style: ComponentStyle,
    symbols: SymbolService,
}

impl<'a> OverlayPainter<'a> {
    #[must_use]
    pub fn new(overlay: &'a ShadowOverlay) -> Self {
        Self {
            overlay,
            style: ComponentStyle::default(),
            symbols: SymbolService::default(),
        }
    }

    #[must_use]
    pub fn style(mut self, style: ComponentStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn symbols(mut self, symbols: SymbolService) -> Self {
        self.symbols = symbols;
        self
    }
}

impl Widget for OverlayPainter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = if self.overlay.covers_entire_viewport() {
            buf.area
        } else {
            area.intersection(buf.area)
        };
        let mode = self.overlay.mode();
        if mode == ShadowMode::None || area.is_empty() {
            return;
        }

        match self.overlay.placement() {
            Placement::Inner => {
                let shade = Style::default().bg(self.style.bg.unwrap_or(Color::DarkGray));
                if mode.shades_top() {
                    buf.set_style(Rect::new(area.x, area.y, area.width, 1), shade);
                }
                if mode.shades_bottom() {
                    buf.set_style(Rect::new(area.x, area.bottom() - 1, area.width, 1), shade);
                }
            }
            Placement::Outer => {
                let glyph_style = Style::default().fg(self.style.fg.unwrap_or(Color::DarkGray));
                if mode.shades_top() && area.y > buf.area.y {
                    fill_row(buf, area, area.y - 1, self.symbols.shadow_above(), glyph_style);
                }
                if mode.shades_bottom() && area.bottom() < buf.area.bottom() {
                    fill_row(buf, area, area.bottom(), self.symbols.shadow_below(), glyph_style);
                }
            }
        }
    }
}

fn fill_row(buf: &mut Buffer, area: Rect, y: u16, glyph: &str, style: Style) {
    for x in area.left()..area.right() {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(glyph).set_style(style);
        }
    }
}

/// Scrollable text with edge shadows.
pub struct ScrollShadow<'a> {
    text: Text<'a>,
    block: Option<Block<'a>>,
    style: ComponentStyle,
    symbols: SymbolService,
}

impl<'a> ScrollShadow<'a> {
    pub fn new(text: impl Into<Text<'a>>) -> Self {
        Self {
            text: text.into(),
            block: None,
            style: default_style(&Theme::default()),
            symbols: SymbolService::default(),
        }
    }

    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    #[must_use]
    pub fn symbols(mut self, symbols: SymbolService) -> Self {
        self.symbols = symbols;
        self
    }

    fn render_sentinels(&self, inner: Rect, buf: &mut Buffer, geometry: ViewportGeometry) {
        if inner.is_empty() {
            return;
        }
        let marker = Style::default().fg(self.style.accent.unwrap_or(Color::Red));
        let x = inner.right() - 1;

        if geometry.offset == 0 {
            buf.set_string(x, inner.y, self.symbols.sentinel(), marker);
        }

        let below_last = geometry.content_len.saturating_sub(geometry.offset);
        if below_last <= geometry.viewport_len {
            let row = u16::try_from(below_last).unwrap_or(u16::MAX).min(inner.height - 1);
            buf.set_string(x, inner.y + row, self.symbols.sentinel(), marker);
        }
    }
}

impl StyleTarget for ScrollShadow<'_> {
    fn themed(mut self, registry: &ThemeRegistry) -> Self {
        self.style = registry.style(STYLE_NAME);
        self
    }
}

impl StatefulWidget for ScrollShadow<'_> {
    type State = ScrollShadowState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        self.render_with(area, buf, state);
    }
}

impl ScrollShadow<'_> {
    /// Render against a state driven by any intersection host.
    pub fn render_with<H: IntersectionHost>(self, area: Rect, buf: &mut Buffer, state: &mut ScrollShadowState<H>) {
        let inner = match &self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.clone().render(area, buf);
                inner
            }
            None => area,
        };

        let geometry = ViewportGeometry::new(self.text.lines.len(), inner.height as usize, state.offset);
        state.sync(geometry);
        let geometry = state.geometry();

        for (row, line) in self
            .text
            .lines
            .iter()
            .skip(geometry.offset)
            .take(inner.height as usize)
            .enumerate()
        {
            buf.set_line(inner.x, inner.y + row as u16, line, inner.width);
        }

        if state.options.debug_show_sentinels {
            self.render_sentinels(inner, buf, geometry);
        }

        if let Some(overlay) = &state.built_in {
            let target = match overlay.placement() {
                Placement::Inner => inner,
                Placement::Outer => area,
            };
            OverlayPainter::new(overlay)
                .style(self.style)
                .symbols(self.symbols)
                .render(target, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::scroll_shadow::sensor::NoIntersectionHost;

    fn lines(count: usize) -> Text<'static> {
        Text::from((0..count).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n"))
    }

    fn render(state: &mut ScrollShadowState, count: usize, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        ScrollShadow::new(lines(count)).render(area, &mut buf, state);
        buf
    }

    fn shadow_bg() -> Color {
        default_style(&Theme::default()).bg.unwrap()
    }

    #[test]
    fn test_initial_render_shades_bottom() {
        let area = Rect::new(0, 0, 20, 5);
        let mut state = ScrollShadowState::new(RegionId(1), ScrollShadowOptions::default());
        let buf = render(&mut state, 30, area);

        assert_eq!(state.mode(), ShadowMode::Bottom);
        assert_eq!(buf.cell((0, 4)).unwrap().bg, shadow_bg());
        assert_ne!(buf.cell((0, 0)).unwrap().bg, shadow_bg());
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "l");
    }

    #[test]
    fn test_scrolling_moves_through_modes() {
        let area = Rect::new(0, 0, 20, 5);
        let mut state = ScrollShadowState::new(RegionId(1), ScrollShadowOptions::default());
        render(&mut state, 30, area);

        state.scroll_down();
        render(&mut state, 30, area);
        assert_eq!(state.mode(), ShadowMode::Both);

        state.scroll_to_bottom();
        let buf = render(&mut state, 30, area);
        assert_eq!(state.mode(), ShadowMode::Top);
        assert_eq!(state.offset(), 25);
        assert_eq!(buf.cell((0, 0)).unwrap().bg, shadow_bg());

        state.scroll_to_top();
        render(&mut state, 30, area);
        assert_eq!(state.mode(), ShadowMode::Bottom);
    }

    #[test]
    fn test_short_content_never_shadows() {
        let area = Rect::new(0, 0, 20, 10);
        let mut state = ScrollShadowState::new(RegionId(1), ScrollShadowOptions::default());
        for _ in 0..4 {
            render(&mut state, 3, area);
            assert_eq!(state.mode(), ShadowMode::None);
            state.scroll_down();
            state.page_down();
        }
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_disabled_has_no_built_in_overlay() {
        let options = ScrollShadowOptions {
            disabled: true,
            ..ScrollShadowOptions::default()
        };
        let area = Rect::new(0, 0, 20, 5);
        let mut state = ScrollShadowState::new(RegionId(1), options);
        let buf = render(&mut state, 30, area);

        assert!(state.built_in_overlay().is_none());
        assert_eq!(state.mode(), ShadowMode::Bottom);
        assert_ne!(buf.cell((0, 4)).unwrap().bg, shadow_bg());
    }

    #[test]
    fn test_connected_shadow_follows_container() {
        let area = Rect::new(0, 0, 20, 5);
        let mut state = ScrollShadowState::new(RegionId(1), ScrollShadowOptions::default());
        let handle = state.handle();
        let floating = ConnectedShadow::new(&handle, None, Placement::Outer);
        let named = ConnectedShadow::new(&handle, Some("toolbar"), Placement::Inner);
        assert_ne!(floating.key(), named.key());

        render(&mut state, 30, area);
        assert_eq!(floating.mode(), ShadowMode::Bottom);

        state.page_down();
        render(&mut state, 30, area);
        assert_eq!(floating.mode(), ShadowMode::Both);
        assert_eq!(named.mode(), ShadowMode::Both);
    }

    #[test]
    fn test_outer_placement_draws_outside_container() {
        let options = ScrollShadowOptions {
            outer: true,
            ..ScrollShadowOptions::default()
        };
        let frame = Rect::new(0, 0, 10, 8);
        let container = Rect::new(0, 1, 10, 5);
        let mut state = ScrollShadowState::new(RegionId(1), options);
        let mut buf = Buffer::empty(frame);
        ScrollShadow::new(lines(30)).render(container, &mut buf, &mut state);

        assert_eq!(buf.cell((0, 6)).unwrap().symbol(), "▔");
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), " ");
    }

    #[test]
    fn test_debug_sentinels_are_drawn() {
        let options = ScrollShadowOptions {
            debug_show_sentinels: true,
            ..ScrollShadowOptions::default()
        };
        let area = Rect::new(0, 0, 10, 5);
        let mut state = ScrollShadowState::new(RegionId(1), options);
        let buf = render(&mut state, 30, area);
        assert_eq!(buf.cell((9, 0)).unwrap().symbol(), "┄");
        assert_eq!(buf.cell((9, 0)).unwrap().fg, ThemeRegistry::default().theme().palette.negative.border);
    }

    #[test]
    fn test_without_intersection_support_nothing_is_shaded() {
        let area = Rect::new(0, 0, 20, 5);
        let mut state = ScrollShadowState::with_host(NoIntersectionHost, RegionId(1), ScrollShadowOptions::default());
        let mut buf = Buffer::empty(area);
        state.scroll_down();
        ScrollShadow::new(lines(30)).render_with(area, &mut buf, &mut state);

        assert_eq!(state.mode(), ShadowMode::None);
        assert_ne!(buf.cell((0, 0)).unwrap().bg, shadow_bg());
        assert_ne!(buf.cell((0, 4)).unwrap().bg, shadow_bg());
    }

    #[test]
    fn test_reattach_to_window() {
        let area = Rect::new(0, 0, 20, 5);
        let mut state = ScrollShadowState::new(RegionId(1), ScrollShadowOptions::default());
        render(&mut state, 30, area);
        let old = state.coordinator().observer();

        state.reattach(None);
        assert_eq!(state.root(), ObservationRoot::Window);
        assert_ne!(state.coordinator().observer(), old);
        assert_eq!(state.coordinator().host().observation_count(), 1);
        assert_eq!(state.mode(), ShadowMode::Bottom);
    }

    #[test]
    fn test_reattach_swaps_built_in_overlay_shape() {
        let options = ScrollShadowOptions {
            global: true,
            ..ScrollShadowOptions::default()
        };
        let area = Rect::new(0, 0, 20, 5);
        let mut state = ScrollShadowState::new(RegionId(1), options);
        render(&mut state, 30, area);
        assert!(state.built_in_overlay().unwrap().covers_entire_viewport());

        state.reattach(Some(RegionId(2)));
        let overlay = state.built_in_overlay().unwrap();
        assert!(!overlay.covers_entire_viewport());
        assert_eq!(overlay.mode(), ShadowMode::Bottom);
        assert!(state
            .coordinator()
            .register_overlay(RegistrationKey::built_in())
            .current()
            .is_some_and(|mounted| Rc::ptr_eq(&mounted, overlay)));

        state.reattach(None);
        assert!(state.built_in_overlay().unwrap().covers_entire_viewport());
        assert_eq!(state.root(), ObservationRoot::Window);
    }
}
