// SPDX-License-Identifier: MPL-2.0
//! Visual configuration for the snackbar surface.
//!
//! The defaults come from the design tokens; a [`Content`](super::Content)
//! may carry a per-message override. The state machine never looks inside
//! this struct.

use crate::design_tokens::{palette, radius, shadow};
use iced::{Color, Shadow};

/// Appearance of the snackbar surface and its text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Surface background color.
    pub background: Color,
    /// Message text color.
    pub message_color: Color,
    /// Action label color.
    pub action_color: Color,
    /// Corner radius of the surface.
    pub radius: f32,
    /// Drop shadow under the surface.
    pub shadow: Shadow,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: palette::SURFACE,
            message_color: palette::WHITE,
            action_color: palette::PRIMARY_400,
            radius: radius::MD,
            shadow: shadow::MD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_uses_tokens() {
        let style = Style::default();
        assert_eq!(style.background, palette::SURFACE);
        assert_eq!(style.message_color, palette::WHITE);
        assert_eq!(style.radius, radius::MD);
    }

    #[test]
    fn action_color_contrasts_with_message() {
        let style = Style::default();
        assert_ne!(style.action_color, style.message_color);
    }
}
