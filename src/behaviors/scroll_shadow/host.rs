//! Intersection detection for terminal scroll regions.
//!
//! The terminal has no layout engine that could tell us whether a marker
//! is on screen, so the host derives sensor visibility from the scroll
//! geometry the widgets report each frame. Like a browser intersection
//! observer it only queues entries when a sensor's visibility flips, plus
//! one initial entry per sensor when an observation starts.

use std::collections::HashMap;

use super::sensor::{IntersectionEntry, IntersectionHost, ObservationRoot, ObserverId, Sensor};

/// Scroll geometry of one viewport, in lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportGeometry {
    pub content_len: usize,
    pub viewport_len: usize,
    pub offset: usize,
}

impl ViewportGeometry {
    #[must_use]
    pub fn new(content_len: usize, viewport_len: usize, offset: usize) -> Self {
        Self {
            content_len,
            viewport_len,
            offset,
        }
    }

    /// Largest offset that still fills the viewport.
    #[must_use]
    pub fn max_offset(&self) -> usize {
        self.content_len.saturating_sub(self.viewport_len)
    }

    /// Offset clamped to the scrollable range.
    #[must_use]
    pub fn clamped_offset(&self) -> usize {
        self.offset.min(self.max_offset())
    }

    /// Whether a sensor lies within the visible window.
    ///
    /// Sensors have no height, so one sitting exactly on the viewport edge
    /// counts as visible.
    #[must_use]
    pub fn sensor_visible(&self, sensor: Sensor) -> bool {
        let offset = self.clamped_offset();
        match sensor {
            Sensor::Top => offset == 0,
            Sensor::Bottom => self.content_len <= offset + self.viewport_len,
        }
    }
}

#[derive(Debug)]
struct Observation {
    root: ObservationRoot,
    last_top: Option<bool>,
    last_bottom: Option<bool>,
}

/// [`IntersectionHost`] fed by widget scroll geometry.
#[derive(Debug, Default)]
pub struct TerminalIntersectionHost {
    next_id: u64,
    observations: HashMap<ObserverId, Observation>,
    geometry: HashMap<ObservationRoot, ViewportGeometry>,
    pending: Vec<IntersectionEntry>,
}

impl TerminalIntersectionHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current geometry of a viewport and queue entries for
    /// every sensor whose visibility changed.
    pub fn set_geometry(&mut self, root: ObservationRoot, geometry: ViewportGeometry) {
        self.geometry.insert(root, geometry);

        let mut ids: Vec<ObserverId> = self
            .observations
            .iter()
            .filter(|(_, obs)| obs.root == root)
            .map(|(id, _)| *id)
            .collect();
        ids.sort();

        for id in ids {
            self.evaluate(id, geometry);
        }
    }

    #[must_use]
    pub fn geometry(&self, root: ObservationRoot) -> Option<ViewportGeometry> {
        self.geometry.get(&root).copied()
    }

    /// Number of live observations.
    #[must_use]
    pub fn observation_count(&self) -> usize {
        self.observations.len()
    }

    fn evaluate(&mut self, id: ObserverId, geometry: ViewportGeometry) {
        let Some(obs) = self.observations.get_mut(&id) else {
            return;
        };

        let top = geometry.sensor_visible(Sensor::Top);
        if obs.last_top != Some(top) {
            obs.last_top = Some(top);
            self.pending.push(IntersectionEntry {
                observer: id,
                target: Sensor::Top,
                is_intersecting: top,
            });
        }

        let bottom = geometry.sensor_visible(Sensor::Bottom);
        if obs.last_bottom != Some(bottom) {
            obs.last_bottom = Some(bottom);
            self.pending.push(IntersectionEntry {
                observer: id,
                target: Sensor::Bottom,
                is_intersecting: bottom,
            });
        }
    }
}

impl IntersectionHost for TerminalIntersectionHost {
    fn observe(&mut self, root: ObservationRoot) -> Option<ObserverId> {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observations.insert(
            id,
            Observation {
                root,
                last_top: None,
                last_bottom: None,
            },
        );

        if let Some(geometry) = self.geometry.get(&root).copied() {
            self.evaluate(id, geometry);
        }
        Some(id)
    }

    fn disconnect(&mut self, observer: ObserverId) {
        self.observations.remove(&observer);
        self.pending.retain(|entry| entry.observer != observer);
    }

    fn take_entries(&mut self) -> Vec<IntersectionEntry> {
        std::mem::take(&mut self.pending)
    }

    fn update_geometry(&mut self, root: ObservationRoot, geometry: ViewportGeometry) {
        self.set_geometry(root, geometry);
    }
}
