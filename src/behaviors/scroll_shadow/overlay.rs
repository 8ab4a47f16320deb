//! Shadow overlays and the slots that refer to them.
//!
//! The shadow class of an overlay is out-of-band state: the coordinator
//! writes it through a shared handle and the next frame simply draws
//! whatever is there. Writing it never asks for a redraw.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::mode::ShadowMode;

/// Name of the overlay every non-disabled scroll shadow registers itself.
pub const BUILT_IN_KEY: &str = "built-in";

/// Where an overlay draws relative to its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Shade the first/last rows inside the container
    #[default]
    Inner,
    /// Shade the rows just outside the container
    Outer,
}

impl Placement {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Inner => "inner",
            Self::Outer => "outer",
        }
    }
}

/// Key an overlay registers under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RegistrationKey {
    Named(String),
    /// Counter value handed out by the owning coordinator
    Generated(u64),
}

impl RegistrationKey {
    #[must_use]
    pub fn built_in() -> Self {
        Self::Named(BUILT_IN_KEY.to_string())
    }
}

impl From<&str> for RegistrationKey {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for RegistrationKey {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl fmt::Display for RegistrationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Generated(n) => write!(f, "shadow{n}"),
        }
    }
}

/// A visual element whose shadow class is driven by a coordinator.
#[derive(Debug, Default)]
pub struct ShadowOverlay {
    placement: Placement,
    entire_viewport: bool,
    class: Cell<Option<ShadowMode>>,
    style_writes: Cell<usize>,
}

impl ShadowOverlay {
    #[must_use]
    pub fn new(placement: Placement) -> Rc<Self> {
        Rc::new(Self {
            placement,
            ..Self::default()
        })
    }

    /// Overlay covering the whole frame instead of its container.
    #[must_use]
    pub fn entire_viewport(placement: Placement) -> Rc<Self> {
        Rc::new(Self {
            placement,
            entire_viewport: true,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    #[must_use]
    pub fn covers_entire_viewport(&self) -> bool {
        self.entire_viewport
    }

    /// Current shadow class; an overlay nobody has styled yet shows none.
    #[must_use]
    pub fn mode(&self) -> ShadowMode {
        self.class.get().unwrap_or_default()
    }

    /// Number of times the class has been rewritten.
    #[must_use]
    pub fn style_writes(&self) -> usize {
        self.style_writes.get()
    }

    /// Replace the shadow class.
    pub(crate) fn apply(&self, mode: ShadowMode) {
        self.class.set(Some(mode));
        self.style_writes.set(self.style_writes.get() + 1);
    }
}

/// Stable reference slot handed out for a registration.
///
/// The slot outlives any overlay mounted in it and only holds a weak
/// reference, so dropping the overlay empties the slot.
#[derive(Debug, Clone, Default)]
pub struct OverlaySlot {
    current: Rc<RefCell<Weak<ShadowOverlay>>>,
}

impl OverlaySlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&self, overlay: &Rc<ShadowOverlay>) {
        *self.current.borrow_mut() = Rc::downgrade(overlay);
    }

    pub fn unmount(&self) {
        *self.current.borrow_mut() = Weak::new();
    }

    /// The mounted overlay, if it is still alive.
    #[must_use]
    pub fn current(&self) -> Option<Rc<ShadowOverlay>> {
        self.current.borrow().upgrade()
    }

    /// Whether two slots are the same registration slot.
    #[must_use]
    pub fn same_slot(&self, other: &OverlaySlot) -> bool {
        Rc::ptr_eq(&self.current, &other.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_holds_overlay_weakly() {
        let slot = OverlaySlot::new();
        let overlay = ShadowOverlay::new(Placement::Inner);
        slot.mount(&overlay);
        assert!(slot.current().is_some());

        drop(overlay);
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_cloned_slot_is_the_same_slot() {
        let slot = OverlaySlot::new();
        let clone = slot.clone();
        assert!(slot.same_slot(&clone));
        assert!(!slot.same_slot(&OverlaySlot::new()));
    }

    #[test]
    fn test_apply_counts_writes() {
        let overlay = ShadowOverlay::new(Placement::Outer);
        assert_eq!(overlay.mode(), ShadowMode::None);
        overlay.apply(ShadowMode::Top);
        overlay.apply(ShadowMode::Both);
        assert_eq!(overlay.mode(), ShadowMode::Both);
        assert_eq!(overlay.style_writes(), 2);
    }

    #[test]
    fn test_generated_key_display() {
        assert_eq!(RegistrationKey::Generated(3).to_string(), "shadow3");
        assert_eq!(RegistrationKey::built_in().to_string(), "built-in");
        assert_ne!(RegistrationKey::from("shadow3"), RegistrationKey::Generated(3));
    }
}
