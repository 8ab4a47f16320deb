//! Behaviours that attach to other components rather than drawing content
//! of their own.

pub mod scroll_shadow;

use crate::theme::ThemeRegistry;

/// Register the styles of every behaviour.
pub fn register_styles(registry: &mut ThemeRegistry) {
    registry.register(scroll_shadow::widget::STYLE_NAME, scroll_shadow::widget::default_style);
}
