//! Boundary visibility and the shadow mode derived from it.

use std::fmt;

/// Which edges of a scroll region currently hide content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShadowMode {
    /// Nothing hidden, no shadow drawn
    #[default]
    None,
    /// Content hidden above the viewport
    Top,
    /// Content hidden below the viewport
    Bottom,
    /// Content hidden on both sides
    Both,
}

impl ShadowMode {
    /// Derive the mode from the two sensor flags.
    ///
    /// An edge casts a shadow when its sensor is *not* visible, i.e. the
    /// content has been scrolled past it.
    #[must_use]
    pub fn from_visibility(top_visible: bool, bottom_visible: bool) -> Self {
        match (!top_visible, !bottom_visible) {
            (true, true) => Self::Both,
            (true, false) => Self::Top,
            (false, true) => Self::Bottom,
            (false, false) => Self::None,
        }
    }

    /// Class name the styling layer maps to a gradient.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Both => "both",
        }
    }

    #[must_use]
    pub fn shades_top(self) -> bool {
        matches!(self, Self::Top | Self::Both)
    }

    #[must_use]
    pub fn shades_bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::Both)
    }
}

impl fmt::Display for ShadowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Last known visibility of the two boundary sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryState {
    pub top_visible: bool,
    pub bottom_visible: bool,
}

impl Default for BoundaryState {
    /// Before the first callback the region is assumed to sit at its top
    /// with more content below.
    fn default() -> Self {
        Self {
            top_visible: true,
            bottom_visible: false,
        }
    }
}

impl BoundaryState {
    #[must_use]
    pub fn mode(&self) -> ShadowMode {
        ShadowMode::from_visibility(self.top_visible, self.bottom_visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_table() {
        assert_eq!(ShadowMode::from_visibility(false, false), ShadowMode::Both);
        assert_eq!(ShadowMode::from_visibility(true, true), ShadowMode::None);
        assert_eq!(ShadowMode::from_visibility(false, true), ShadowMode::Top);
        assert_eq!(ShadowMode::from_visibility(true, false), ShadowMode::Bottom);
    }

    #[test]
    fn test_initial_boundary_state_shades_bottom() {
        assert_eq!(BoundaryState::default().mode(), ShadowMode::Bottom);
    }

    #[test]
    fn test_edge_helpers() {
        assert!(ShadowMode::Both.shades_top());
        assert!(ShadowMode::Both.shades_bottom());
        assert!(ShadowMode::Top.shades_top());
        assert!(!ShadowMode::Top.shades_bottom());
        assert!(!ShadowMode::None.shades_top());
        assert_eq!(ShadowMode::Bottom.to_string(), "bottom");
    }
}
