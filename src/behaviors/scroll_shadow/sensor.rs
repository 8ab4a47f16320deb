//! Boundary sensors and the intersection-detection seam.
//!
//! A coordinator never measures anything itself. It asks an
//! [`IntersectionHost`] to watch its two sensors against a viewport and is
//! handed batches of [`IntersectionEntry`] whenever a sensor enters or
//! leaves that viewport.

use super::host::ViewportGeometry;

/// One of the two zero-size markers placed around the scrollable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sensor {
    /// Sits before the first content line
    Top,
    /// Sits after the last content line
    Bottom,
}

/// Identifies a scrollable region known to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u64);

/// The viewport sensors are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservationRoot {
    /// The whole terminal frame (global mode)
    Window,
    /// A specific scroll container
    Region(RegionId),
}

impl From<Option<RegionId>> for ObservationRoot {
    fn from(region: Option<RegionId>) -> Self {
        region.map_or(Self::Window, Self::Region)
    }
}

/// Handle of one live observation, handed out by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(pub u64);

/// A visibility change reported for one sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub observer: ObserverId,
    pub target: Sensor,
    pub is_intersecting: bool,
}

/// Host platform facility that detects sensor/viewport intersections.
pub trait IntersectionHost {
    /// Start watching both sensors against `root`.
    ///
    /// Returns `None` when the host cannot detect intersections at all.
    /// A successful observation must queue the current visibility of both
    /// sensors as soon as it is known.
    fn observe(&mut self, root: ObservationRoot) -> Option<ObserverId>;

    /// Stop an observation and drop anything still queued for it.
    fn disconnect(&mut self, observer: ObserverId);

    /// Drain the entries queued since the previous call, in order.
    fn take_entries(&mut self) -> Vec<IntersectionEntry>;

    /// Layout report from the widget that owns `root`.
    ///
    /// Hosts that measure layout on their own ignore it.
    fn update_geometry(&mut self, _root: ObservationRoot, _geometry: ViewportGeometry) {}
}

/// Host without intersection detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIntersectionHost;

impl IntersectionHost for NoIntersectionHost {
    fn observe(&mut self, _root: ObservationRoot) -> Option<ObserverId> {
        None
    }

    fn disconnect(&mut self, _observer: ObserverId) {}

    fn take_entries(&mut self) -> Vec<IntersectionEntry> {
        Vec::new()
    }
}
