//! Typography tokens for theming

use orchard_core::Color;

/// Text colors and sizes shared by components
#[derive(Clone, Debug, PartialEq)]
pub struct Typography {
    /// Text drawn on top of role-colored fills
    pub primary_color: Color,
    /// Text drawn on neutral surfaces
    pub secondary_color: Color,
    /// Helper and caption text
    pub small_font_size: f32,
    /// Default icon glyph size
    pub icon_size: f32,
}
