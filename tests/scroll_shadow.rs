use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;
use shared_components::behaviors::scroll_shadow::{
    ConnectedShadow, IntersectionEntry, NoIntersectionHost, Placement, RegionId, ScrollShadow, ScrollShadowOptions,
    ScrollShadowState, Sensor, ShadowMode, ViewportGeometry,
};

fn state() -> ScrollShadowState {
    ScrollShadowState::new(RegionId(1), ScrollShadowOptions::default())
}

#[test]
fn test_mode_truth_table() {
    assert_eq!(ShadowMode::from_visibility(false, false), ShadowMode::Both);
    assert_eq!(ShadowMode::from_visibility(true, true), ShadowMode::None);
    assert_eq!(ShadowMode::from_visibility(false, true), ShadowMode::Top);
    assert_eq!(ShadowMode::from_visibility(true, false), ShadowMode::Bottom);
}

#[test]
fn test_scrolling_drives_every_registered_overlay() {
    let mut state = state();
    let handle = state.handle();
    let toolbar = ConnectedShadow::new(&handle, Some("toolbar"), Placement::Outer);

    state.sync(ViewportGeometry::new(30, 10, 0));
    assert_eq!(state.mode(), ShadowMode::Bottom);
    assert_eq!(toolbar.mode(), ShadowMode::Bottom);

    state.sync(ViewportGeometry::new(30, 10, 5));
    assert_eq!(state.mode(), ShadowMode::Both);
    assert_eq!(toolbar.mode(), ShadowMode::Both);
    assert_eq!(state.built_in_overlay().map(|o| o.mode()), Some(ShadowMode::Both));

    state.sync(ViewportGeometry::new(30, 10, 20));
    assert_eq!(state.mode(), ShadowMode::Top);
    assert_eq!(toolbar.mode(), ShadowMode::Top);
}

#[test]
fn test_unchanged_mode_writes_nothing() {
    let mut state = state();
    let handle = state.handle();
    let toolbar = ConnectedShadow::new(&handle, Some("toolbar"), Placement::Inner);

    assert!(state.sync(ViewportGeometry::new(30, 10, 5)) > 0);
    let writes = toolbar.overlay().style_writes();

    // same geometry: the host queues nothing
    assert_eq!(state.sync(ViewportGeometry::new(30, 10, 5)), 0);

    // a redundant entry for the live observer still changes nothing
    let observer = state.coordinator().observer().unwrap();
    let entry = IntersectionEntry {
        observer,
        target: Sensor::Top,
        is_intersecting: false,
    };
    assert_eq!(state.coordinator_mut().on_intersection_change(&[entry]), 0);
    assert_eq!(toolbar.overlay().style_writes(), writes);
}

#[test]
fn test_register_overlay_returns_stable_slot() {
    let state = state();
    let handle = state.handle();

    let first = handle.register_overlay("x");
    let second = handle.register_overlay("x");
    let other = handle.register_overlay("y");

    assert!(first.same_slot(&second));
    assert!(!first.same_slot(&other));
    assert!(state.coordinator().register_overlay("x").same_slot(&first));
}

#[test]
fn test_short_content_never_shadows() {
    let mut state = state();
    for offset in [0, 1, 3, 50] {
        state.sync(ViewportGeometry::new(4, 10, offset));
        assert_eq!(state.mode(), ShadowMode::None);
        assert_eq!(state.built_in_overlay().map(|o| o.mode()), Some(ShadowMode::None));
        assert_eq!(state.offset(), 0);
    }
}

#[test]
fn test_reattach_ignores_stale_observer() {
    let mut state = state();
    state.sync(ViewportGeometry::new(30, 10, 5));
    assert_eq!(state.mode(), ShadowMode::Both);

    let stale = state.coordinator().observer().unwrap();
    state.reattach(Some(RegionId(2)));
    assert_ne!(state.coordinator().observer(), Some(stale));
    assert_eq!(state.coordinator().host().observation_count(), 1);

    let entries = [
        IntersectionEntry {
            observer: stale,
            target: Sensor::Top,
            is_intersecting: true,
        },
        IntersectionEntry {
            observer: stale,
            target: Sensor::Bottom,
            is_intersecting: true,
        },
    ];
    assert_eq!(state.coordinator_mut().on_intersection_change(&entries), 0);
    assert_eq!(state.mode(), ShadowMode::Both);
}

#[test]
fn test_generated_keys_are_distinct() {
    let state = state();
    let handle = state.handle();

    let first = ConnectedShadow::new(&handle, None, Placement::Inner);
    let second = ConnectedShadow::new(&handle, None, Placement::Inner);

    assert_ne!(first.key(), second.key());
    assert_eq!(first.key().to_string(), "shadow0");
    assert_eq!(second.key().to_string(), "shadow1");
}

#[test]
fn test_late_connection_picks_up_current_mode() {
    let mut state = state();
    state.sync(ViewportGeometry::new(30, 10, 20));

    let footer = ConnectedShadow::new(&state.handle(), Some("footer"), Placement::Inner);
    assert_eq!(footer.mode(), ShadowMode::Top);
}

#[test]
fn test_missing_intersection_support_degrades_to_none() {
    let mut state = ScrollShadowState::with_host(NoIntersectionHost, RegionId(1), ScrollShadowOptions::default());
    assert!(state.coordinator().is_degraded());

    state.sync(ViewportGeometry::new(30, 10, 5));
    assert_eq!(state.mode(), ShadowMode::None);
}

#[test]
fn test_render_scrolls_and_shades() {
    let area = Rect::new(0, 0, 20, 5);
    let text = (0..30).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
    let mut state = state();

    let mut buf = Buffer::empty(area);
    ScrollShadow::new(text.as_str()).render(area, &mut buf, &mut state);
    assert_eq!(state.mode(), ShadowMode::Bottom);

    state.scroll_to_bottom();
    let mut buf = Buffer::empty(area);
    ScrollShadow::new(text.as_str()).render(area, &mut buf, &mut state);
    assert_eq!(state.offset(), 25);
    assert_eq!(state.mode(), ShadowMode::Top);
    assert_eq!(buf.cell((0, 4)).unwrap().symbol(), "l");
}
