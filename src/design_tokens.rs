// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the widget's design tokens, following the W3C Design
Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_snackbar::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Fade the surface color to half strength
let faded = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::SURFACE
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```

## Modification

Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    /// Snackbar surface - dark neutral that reads on light and dark themes.
    pub const SURFACE: Color = Color::from_rgb(0.188, 0.196, 0.208);

    // Brand colors (blue scale)
    pub const PRIMARY_200: Color = Color::from_rgb(0.7, 0.84, 0.98); // Light blue
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0); // Medium light blue
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Primary blue
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Shadow strength under the snackbar surface.
    pub const SHADOW: f32 = 0.3;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Minimum width of the snackbar surface.
    pub const SNACKBAR_MIN_WIDTH: f32 = 150.0;

    /// Horizontal margin between the snackbar and the viewport edges.
    pub const SNACKBAR_MARGIN: f32 = super::spacing::MD;

    /// Distance between the snackbar and the bottom of the viewport.
    pub const SNACKBAR_BOTTOM_OFFSET: f32 = 50.0;

    /// Vertical padding inside the snackbar surface.
    pub const SNACKBAR_PADDING_V: f32 = 10.0;

    /// Horizontal padding inside the snackbar surface.
    pub const SNACKBAR_PADDING_H: f32 = super::spacing::MD;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large body - snackbar message text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - action labels, secondary text
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 10.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 4.65,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::SNACKBAR_MIN_WIDTH > 2.0 * sizing::SNACKBAR_MARGIN);
    assert!(sizing::SNACKBAR_BOTTOM_OFFSET > 0.0);

    // Typography validation
    assert!(typography::BODY_LG > typography::BODY);

    // Radius validation
    assert!(radius::MD > radius::SM);
};
