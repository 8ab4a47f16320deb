//! Spacing vocabulary shared by layouts and components.

use std::str::FromStr;

use crate::error::{ComponentError, Result};
use crate::theme::Spacing;

/// A spacing value: a step of the theme scale or a raw cell count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpacingSize {
    ExtraSmall,
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
    Cells(u16),
}

impl SpacingSize {
    /// Width in cells under `spacing`.
    #[must_use]
    pub fn resolve(self, spacing: &Spacing) -> u16 {
        match self {
            Self::ExtraSmall => spacing.extra_small,
            Self::Small => spacing.small,
            Self::Medium => spacing.medium,
            Self::Large => spacing.large,
            Self::ExtraLarge => spacing.extra_large,
            Self::Cells(cells) => cells,
        }
    }
}

impl FromStr for SpacingSize {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" => Ok(Self::default()),
            "xs" | "extraSmall" => Ok(Self::ExtraSmall),
            "sm" | "small" => Ok(Self::Small),
            "md" | "medium" => Ok(Self::Medium),
            "lg" | "large" => Ok(Self::Large),
            "xl" | "extraLarge" => Ok(Self::ExtraLarge),
            other => other
                .parse::<u16>()
                .map(Self::Cells)
                .map_err(|_| ComponentError::InvalidSpacing(other.to_string())),
        }
    }
}

/// Resolve an optional spacing name; nothing given means large.
pub fn normalize(size: Option<&str>, spacing: &Spacing) -> Result<u16> {
    let size = match size {
        Some(size) => size.parse()?,
        None => SpacingSize::Large,
    };
    Ok(size.resolve(spacing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_resolve_to_same_step() {
        let spacing = Spacing::default();
        for (short, long) in [("xs", "extraSmall"), ("sm", "small"), ("md", "medium"), ("lg", "large"), ("xl", "extraLarge")] {
            assert_eq!(normalize(Some(short), &spacing), normalize(Some(long), &spacing));
        }
    }

    #[test]
    fn test_missing_size_is_large() {
        let spacing = Spacing::default();
        assert_eq!(normalize(None, &spacing), Ok(spacing.large));
        assert_eq!(normalize(Some(""), &spacing), Ok(spacing.large));
    }

    #[test]
    fn test_raw_cells_and_errors() {
        let spacing = Spacing::default();
        assert_eq!(normalize(Some("7"), &spacing), Ok(7));
        assert_eq!(
            normalize(Some("huge"), &spacing),
            Err(ComponentError::InvalidSpacing("huge".to_string()))
        );
    }
}
