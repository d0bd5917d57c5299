// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the notification slot.
//!
//! - **Palette**: Base colors used by the default severity styles
//! - **Opacity**: Standardized opacity levels
//!
//! ```
//! use vr_notifications::ui::design_tokens::{opacity, palette};
//!
//! let backdrop = palette::GRAY_900.with_alpha(opacity::PANEL);
//! assert!(backdrop.a < 1.0);
//! ```

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use crate::domain::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Backdrop behind neutral text.
    pub const PANEL: f32 = 0.85;
}
