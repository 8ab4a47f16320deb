//! Scroll shadows.
//!
//! A scroll shadow marks the edges of a scroll region that hide content.
//! Two zero-size sensors sit before the first and after the last line; an
//! [`IntersectionHost`] reports when they enter or leave the viewport and
//! the [`BoundaryShadowCoordinator`] turns that into a [`ShadowMode`] for
//! every overlay registered with it.
//!
//! Overlays drawn away from the container (a floating toolbar, a sticky
//! header) connect through the [`ShadowHandle`] the container hands out:
//!
//! ```rust
//! use shared_components::behaviors::scroll_shadow::{
//!     ConnectedShadow, Placement, RegionId, ScrollShadowOptions, ScrollShadowState,
//! };
//!
//! let state = ScrollShadowState::new(RegionId(1), ScrollShadowOptions::default());
//! let toolbar = ConnectedShadow::new(&state.handle(), Some("toolbar"), Placement::Outer);
//! assert_eq!(toolbar.key().to_string(), "toolbar");
//! ```

pub mod coordinator;
pub mod host;
pub mod mode;
pub mod overlay;
pub mod sensor;
pub mod widget;

pub use coordinator::{BoundaryShadowCoordinator, ShadowHandle};
pub use host::{TerminalIntersectionHost, ViewportGeometry};
pub use mode::{BoundaryState, ShadowMode};
pub use overlay::{OverlaySlot, Placement, RegistrationKey, ShadowOverlay, BUILT_IN_KEY};
pub use sensor::{IntersectionEntry, IntersectionHost, NoIntersectionHost, ObservationRoot, ObserverId, RegionId, Sensor};
pub use widget::{
    ConnectedShadow, OverlayPainter, ScrollShadow, ScrollShadowOptions, ScrollShadowState, DEFAULT_PAGE_SIZE,
};
