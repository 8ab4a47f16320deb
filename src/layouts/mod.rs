//! Layout helpers.

pub mod horizontal;
pub mod spacing;

pub use horizontal::Horizontal;
pub use spacing::{normalize, SpacingSize};
