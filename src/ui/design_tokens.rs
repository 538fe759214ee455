// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Tokens consumed by the overlay layer (toasts, dialogs, backdrop). Page-level
tokens belong to the surrounding design system and are not duplicated here.

## Organization

- **Palette**: Base and category colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**, **Radius**, **Shadow**

## Examples

```
use casino_overlays::ui::design_tokens::{palette, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};
assert!(backdrop.a < 1.0);
```
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
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.08, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.22, 0.22, 0.26);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.44);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.78);

    // Brand colors
    pub const GOLD_400: Color = Color::from_rgb(0.98, 0.82, 0.36);
    pub const GOLD_500: Color = Color::from_rgb(0.91, 0.72, 0.2);
    pub const GOLD_600: Color = Color::from_rgb(0.78, 0.6, 0.12);
    pub const FELT_800: Color = Color::from_rgb(0.05, 0.24, 0.16);

    // Semantic colors
    pub const NEUTRAL_500: Color = Color::from_rgb(0.62, 0.62, 0.7);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Modal backdrop at full presence.
    pub const BACKDROP: f32 = 0.6;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - toast cards and dialog panels
    pub const SURFACE: f32 = 0.97;
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
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    pub const TOAST_WIDTH: f32 = 320.0;

    /// Distance a toast travels while sliding in or out.
    pub const TOAST_SLIDE: f32 = 24.0;

    // Dialog widths per size preset
    pub const DIALOG_SM: f32 = 360.0;
    pub const DIALOG_MD: f32 = 480.0;
    pub const DIALOG_LG: f32 = 720.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Dialog titles
    pub const TITLE_MD: f32 = 20.0;

    /// Page headings in the demo shell
    pub const TITLE_LG: f32 = 30.0;

    /// Standard body - toast messages, dialog descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - small supporting text
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Toast accents, focus rings
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::DIALOG_LG > sizing::DIALOG_MD);
    assert!(sizing::DIALOG_MD > sizing::DIALOG_SM);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
