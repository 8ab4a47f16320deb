//! Boundary shadow coordinator.
//!
//! Tracks whether the top and bottom edges of a scroll region are on
//! screen and keeps every registered overlay styled with the matching
//! [`ShadowMode`]. Overlays mounted anywhere else obtain their slot
//! through a [`ShadowHandle`] passed down by the caller.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use log::{debug, info, trace, warn};

use super::mode::{BoundaryState, ShadowMode};
use super::overlay::{OverlaySlot, RegistrationKey, ShadowOverlay};
use super::sensor::{IntersectionEntry, IntersectionHost, ObservationRoot, ObserverId, RegionId, Sensor};

#[derive(Debug, Default)]
struct Registration {
    slot: OverlaySlot,
    /// Overlay and mode of the last write, compared by identity so a
    /// freshly mounted overlay is always styled once.
    applied: Option<(Weak<ShadowOverlay>, ShadowMode)>,
}

impl Registration {
    /// Style the mounted overlay if it does not already show `mode`.
    fn apply(&mut self, mode: ShadowMode) -> bool {
        let Some(overlay) = self.slot.current() else {
            return false;
        };

        if let Some((element, applied)) = &self.applied {
            if std::ptr::eq(element.as_ptr(), Rc::as_ptr(&overlay)) && *applied == mode {
                return false;
            }
        }

        overlay.apply(mode);
        self.applied = Some((Rc::downgrade(&overlay), mode));
        true
    }
}

#[derive(Debug, Default)]
struct Registry {
    registrations: HashMap<RegistrationKey, Registration>,
    next_generated: u64,
    /// Most recently computed mode, `None` before the first callback.
    current: Option<ShadowMode>,
}

impl Registry {
    fn slot(&mut self, key: RegistrationKey) -> OverlaySlot {
        self.registrations.entry(key).or_default().slot.clone()
    }

    fn generate_key(&mut self) -> RegistrationKey {
        let key = RegistrationKey::Generated(self.next_generated);
        self.next_generated += 1;
        key
    }

    fn propagate(&mut self, mode: ShadowMode) -> usize {
        self.current = Some(mode);
        self.registrations
            .values_mut()
            .map(|registration| usize::from(registration.apply(mode)))
            .sum()
    }
}

/// Lookup channel for overlays that live outside the scroll container.
///
/// Cloning is cheap; every clone talks to the same coordinator.
#[derive(Debug, Clone)]
pub struct ShadowHandle {
    registry: Rc<RefCell<Registry>>,
}

impl ShadowHandle {
    /// Slot registered under `key`, created on first lookup.
    pub fn register_overlay(&self, key: impl Into<RegistrationKey>) -> OverlaySlot {
        self.registry.borrow_mut().slot(key.into())
    }

    /// A key no other overlay of this coordinator has been given.
    pub fn generate_key(&self) -> RegistrationKey {
        self.registry.borrow_mut().generate_key()
    }

    /// Register `overlay` under `key`, mount it and bring it up to date
    /// with the current mode.
    pub fn connect(&self, key: impl Into<RegistrationKey>, overlay: &Rc<ShadowOverlay>) -> OverlaySlot {
        let key = key.into();
        let mut registry = self.registry.borrow_mut();
        let current = registry.current;
        let registration = registry.registrations.entry(key).or_default();
        registration.slot.mount(overlay);
        if let Some(mode) = current {
            registration.apply(mode);
        }
        registration.slot.clone()
    }

    /// Mode last pushed to the overlays.
    #[must_use]
    pub fn mode(&self) -> Option<ShadowMode> {
        self.registry.borrow().current
    }

    #[must_use]
    pub fn registration_count(&self) -> usize {
        self.registry.borrow().registrations.len()
    }
}

/// Owns the boundary state of one scroll region and styles its overlays.
#[derive(Debug)]
pub struct BoundaryShadowCoordinator<H: IntersectionHost> {
    host: H,
    boundary: BoundaryState,
    observer: Option<ObserverId>,
    root: Option<ObservationRoot>,
    degraded: bool,
    registry: Rc<RefCell<Registry>>,
}

impl<H: IntersectionHost> BoundaryShadowCoordinator<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            boundary: BoundaryState::default(),
            observer: None,
            root: None,
            degraded: false,
            registry: Rc::new(RefCell::new(Registry::default())),
        }
    }

    /// Handle to pass down to overlays mounted elsewhere.
    #[must_use]
    pub fn handle(&self) -> ShadowHandle {
        ShadowHandle {
            registry: Rc::clone(&self.registry),
        }
    }

    /// Observe the sensors against `region`, or the whole frame for `None`.
    ///
    /// Any previous observation is disconnected first; entries it still
    /// produces are ignored afterwards.
    pub fn attach(&mut self, region: Option<RegionId>) {
        if let Some(previous) = self.observer.take() {
            self.host.disconnect(previous);
        }

        let root = ObservationRoot::from(region);
        self.root = Some(root);

        match self.host.observe(root) {
            Some(observer) => {
                info!("scroll shadow attached to {root:?} as {observer:?}");
                self.observer = Some(observer);
                self.degraded = false;
            }
            None => {
                warn!("intersection detection unavailable, scroll shadows disabled");
                self.degraded = true;
                self.registry.borrow_mut().propagate(ShadowMode::None);
            }
        }
    }

    /// Apply a batch of sensor changes, returning the number of overlay
    /// writes performed.
    pub fn on_intersection_change(&mut self, entries: &[IntersectionEntry]) -> usize {
        if self.degraded {
            return 0;
        }

        let mut writes = 0;
        for entry in entries {
            if Some(entry.observer) != self.observer {
                trace!("dropping entry from stale observer {:?}", entry.observer);
                continue;
            }

            match entry.target {
                Sensor::Top => self.boundary.top_visible = entry.is_intersecting,
                Sensor::Bottom => self.boundary.bottom_visible = entry.is_intersecting,
            }

            let mode = self.boundary.mode();
            let applied = self.registry.borrow_mut().propagate(mode);
            if applied > 0 {
                debug!("scroll shadow mode -> {mode} ({applied} overlays)");
            }
            writes += applied;
        }
        writes
    }

    /// Drain the host's queued entries and apply them.
    pub fn pump(&mut self) -> usize {
        let entries = self.host.take_entries();
        if entries.is_empty() {
            return 0;
        }
        self.on_intersection_change(&entries)
    }

    /// Slot registered under `key`, created on first lookup.
    pub fn register_overlay(&self, key: impl Into<RegistrationKey>) -> OverlaySlot {
        self.registry.borrow_mut().slot(key.into())
    }

    /// Mode derived from the current boundary state.
    #[must_use]
    pub fn mode(&self) -> ShadowMode {
        if self.degraded {
            ShadowMode::None
        } else {
            self.boundary.mode()
        }
    }

    #[must_use]
    pub fn boundary(&self) -> BoundaryState {
        self.boundary
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    #[must_use]
    pub fn observer(&self) -> Option<ObserverId> {
        self.observer
    }

    #[must_use]
    pub fn root(&self) -> Option<ObservationRoot> {
        self.root
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::scroll_shadow::overlay::Placement;
    use crate::behaviors::scroll_shadow::sensor::NoIntersectionHost;

    /// Host that hands out ids and lets the test inject entries.
    #[derive(Debug, Default)]
    struct ScriptedHost {
        next: u64,
        disconnected: Vec<ObserverId>,
        queued: Vec<IntersectionEntry>,
    }

    impl IntersectionHost for ScriptedHost {
        fn observe(&mut self, _root: ObservationRoot) -> Option<ObserverId> {
            self.next += 1;
            Some(ObserverId(self.next))
        }

        fn disconnect(&mut self, observer: ObserverId) {
            self.disconnected.push(observer);
        }

        fn take_entries(&mut self) -> Vec<IntersectionEntry> {
            std::mem::take(&mut self.queued)
        }
    }

    fn entry(observer: ObserverId, target: Sensor, is_intersecting: bool) -> IntersectionEntry {
        IntersectionEntry {
            observer,
            target,
            is_intersecting,
        }
    }

    fn attached() -> (BoundaryShadowCoordinator<ScriptedHost>, ObserverId) {
        let mut coordinator = BoundaryShadowCoordinator::new(ScriptedHost::default());
        coordinator.attach(Some(RegionId(7)));
        let observer = coordinator.observer().unwrap();
        (coordinator, observer)
    }

    #[test]
    fn test_entries_update_mounted_overlays() {
        let (mut coordinator, observer) = attached();
        let overlay = ShadowOverlay::new(Placement::Inner);
        coordinator.register_overlay("built-in").mount(&overlay);

        coordinator.on_intersection_change(&[entry(observer, Sensor::Top, false)]);
        // bottom starts hidden, so losing the top gives both
        assert_eq!(overlay.mode(), ShadowMode::Both);

        coordinator.on_intersection_change(&[entry(observer, Sensor::Bottom, true)]);
        assert_eq!(overlay.mode(), ShadowMode::Top);

        coordinator.on_intersection_change(&[entry(observer, Sensor::Top, true)]);
        assert_eq!(overlay.mode(), ShadowMode::None);
    }

    #[test]
    fn test_unchanged_mode_writes_nothing() {
        let (mut coordinator, observer) = attached();
        let overlay = ShadowOverlay::new(Placement::Inner);
        coordinator.register_overlay("a").mount(&overlay);

        let batch = [entry(observer, Sensor::Top, false)];
        assert_eq!(coordinator.on_intersection_change(&batch), 1);
        assert_eq!(coordinator.on_intersection_change(&batch), 0);
        assert_eq!(overlay.style_writes(), 1);
    }

    #[test]
    fn test_same_key_same_slot() {
        let (coordinator, _) = attached();
        let first = coordinator.register_overlay("x");
        let second = coordinator.register_overlay("x");
        assert!(first.same_slot(&second));
        assert!(!first.same_slot(&coordinator.register_overlay("y")));

        let through_handle = coordinator.handle().register_overlay("x");
        assert!(first.same_slot(&through_handle));
    }

    #[test]
    fn test_reattach_ignores_old_observer() {
        let (mut coordinator, old) = attached();
        let overlay = ShadowOverlay::new(Placement::Inner);
        coordinator.register_overlay("a").mount(&overlay);

        coordinator.attach(None);
        let new = coordinator.observer().unwrap();
        assert_ne!(old, new);
        assert_eq!(coordinator.host().disconnected, vec![old]);
        assert_eq!(coordinator.root(), Some(ObservationRoot::Window));

        let writes = coordinator.on_intersection_change(&[entry(old, Sensor::Top, false)]);
        assert_eq!(writes, 0);
        assert_eq!(overlay.style_writes(), 0);
        assert!(coordinator.boundary().top_visible);
    }

    #[test]
    fn test_pump_drains_host_queue() {
        let (mut coordinator, observer) = attached();
        let overlay = ShadowOverlay::new(Placement::Inner);
        coordinator.register_overlay("a").mount(&overlay);

        coordinator.host_mut().queued.push(entry(observer, Sensor::Top, true));
        coordinator.host_mut().queued.push(entry(observer, Sensor::Bottom, true));
        coordinator.pump();
        assert_eq!(overlay.mode(), ShadowMode::None);
        assert_eq!(coordinator.pump(), 0);
    }

    #[test]
    fn test_unmounted_slot_is_styled_once_mounted() {
        let (mut coordinator, observer) = attached();
        let slot = coordinator.register_overlay("late");
        coordinator.on_intersection_change(&[entry(observer, Sensor::Top, false)]);

        let overlay = ShadowOverlay::new(Placement::Inner);
        slot.mount(&overlay);
        coordinator.on_intersection_change(&[entry(observer, Sensor::Bottom, true)]);
        assert_eq!(overlay.mode(), ShadowMode::Top);
    }

    #[test]
    fn test_connect_applies_current_mode() {
        let (mut coordinator, observer) = attached();
        coordinator.on_intersection_change(&[entry(observer, Sensor::Top, false)]);

        let handle = coordinator.handle();
        let overlay = ShadowOverlay::new(Placement::Outer);
        handle.connect("floating", &overlay);
        assert_eq!(overlay.mode(), ShadowMode::Both);
        assert_eq!(handle.mode(), Some(ShadowMode::Both));
    }

    #[test]
    fn test_generated_keys_are_distinct() {
        let (coordinator, _) = attached();
        let handle = coordinator.handle();
        let a = handle.generate_key();
        let b = handle.clone().generate_key();
        assert_ne!(a, b);

        let first = ShadowOverlay::new(Placement::Inner);
        let second = ShadowOverlay::new(Placement::Inner);
        let slot_a = handle.connect(a, &first);
        let slot_b = handle.connect(b, &second);
        assert!(!slot_a.same_slot(&slot_b));
        assert_eq!(handle.registration_count(), 2);
    }

    #[test]
    fn test_missing_capability_degrades_to_none() {
        let mut coordinator = BoundaryShadowCoordinator::new(NoIntersectionHost);
        let overlay = ShadowOverlay::new(Placement::Inner);
        coordinator.register_overlay("built-in").mount(&overlay);

        coordinator.attach(Some(RegionId(1)));
        assert!(coordinator.is_degraded());
        assert_eq!(coordinator.mode(), ShadowMode::None);
        assert_eq!(overlay.mode(), ShadowMode::None);

        let writes = coordinator.on_intersection_change(&[entry(ObserverId(0), Sensor::Top, false)]);
        assert_eq!(writes, 0);
        assert_eq!(coordinator.mode(), ShadowMode::None);
    }
}
