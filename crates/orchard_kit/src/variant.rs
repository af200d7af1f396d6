//! Variant resolution
//!
//! Every button-like component funnels its flags through [`resolve`], which
//! turns a [`Theme`] plus [`VariantFlags`] into a fully populated
//! [`ResolvedStyle`]. Derived components never re-implement the precedence
//! rules; they layer [`StyleOverrides`] on the result instead.
//!
//! Color precedence, first match wins:
//!
//! 1. `transparent`: no fill, text is the override or `palette.primary`
//! 2. `bordered`: no fill, text is the override or the role color
//! 3. an explicit color override: fill with it, text is `typography.primary_color`
//! 4. otherwise: fill with the role color, text is `typography.primary_color`
//!
//! Any role flag then forces the text back to `typography.primary_color`.
//! A `bordered` component draws a 1pt border in its final text color.

use orchard_core::Color;
use orchard_theme::{PaletteRole, Theme};
use tracing::debug;

use crate::node::{StyleBag, StyleProp, StyleValue};

/// Corner radius of `rounded` components
pub const ROUNDED_RADIUS: f32 = 25.0;

/// Border width of `bordered` components
pub const BORDER_WIDTH: f32 = 1.0;

/// Padding of icon-only buttons on both axes
pub const ICON_BUTTON_PADDING: f32 = 12.0;

/// Minimum touch footprint of icon-only buttons
pub const ICON_BUTTON_MIN_SIZE: f32 = 48.0;

/// Opacity of disabled components
pub const DISABLED_OPACITY: f32 = 0.6;

/// Fallbacks for the optional status roles
pub const SUCCESS_FALLBACK: Color = Color::rgb(40.0 / 255.0, 167.0 / 255.0, 69.0 / 255.0);
pub const DANGER_FALLBACK: Color = Color::rgb(220.0 / 255.0, 53.0 / 255.0, 69.0 / 255.0);
pub const WARNING_FALLBACK: Color = Color::rgb(1.0, 193.0 / 255.0, 7.0 / 255.0);
pub const INFO_FALLBACK: Color = Color::rgb(23.0 / 255.0, 162.0 / 255.0, 184.0 / 255.0);

/// Semantic role flags, in precedence order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
}

impl Role {
    /// Resolution order when several role flags are set
    pub const PRECEDENCE: [Role; 6] = [
        Role::Primary,
        Role::Secondary,
        Role::Success,
        Role::Danger,
        Role::Warning,
        Role::Info,
    ];

    pub fn palette_role(self) -> PaletteRole {
        match self {
            Role::Primary => PaletteRole::Primary,
            Role::Secondary => PaletteRole::Secondary,
            Role::Success => PaletteRole::Success,
            Role::Danger => PaletteRole::Danger,
            Role::Warning => PaletteRole::Warning,
            Role::Info => PaletteRole::Info,
        }
    }

    /// Literal color used when the theme leaves this role unset
    pub fn fallback(self) -> Option<Color> {
        match self {
            Role::Primary | Role::Secondary => None,
            Role::Success => Some(SUCCESS_FALLBACK),
            Role::Danger => Some(DANGER_FALLBACK),
            Role::Warning => Some(WARNING_FALLBACK),
            Role::Info => Some(INFO_FALLBACK),
        }
    }

    /// Color of this role in `theme`
    pub fn color(self, theme: &Theme) -> Color {
        theme
            .color(self.palette_role())
            .or_else(|| self.fallback())
            .unwrap_or(theme.palette.default)
    }
}

/// Size class of a component
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Small,
    #[default]
    Regular,
    Large,
}

impl SizeClass {
    /// Parse a size name. Unknown names fall back to [`SizeClass::Regular`].
    pub fn from_name(name: &str) -> SizeClass {
        match name.trim().to_ascii_lowercase().as_str() {
            "small" => SizeClass::Small,
            "large" => SizeClass::Large,
            "regular" | "default" | "" => SizeClass::Regular,
            other => {
                debug!("SizeClass::from_name - unknown size {other:?}, using regular");
                SizeClass::Regular
            }
        }
    }

    /// (padding_vertical, padding_horizontal, font_size)
    pub fn metrics(self) -> (f32, f32, f32) {
        match self {
            SizeClass::Small => (8.0, 12.0, 12.0),
            SizeClass::Regular => (12.0, 16.0, 14.0),
            SizeClass::Large => (16.0, 24.0, 16.0),
        }
    }
}

/// Per-instance variant flags. Any combination is valid; conflicts are
/// settled by precedence in [`resolve`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct VariantFlags {
    pub primary: bool,
    pub secondary: bool,
    pub success: bool,
    pub danger: bool,
    pub warning: bool,
    pub info: bool,

    pub transparent: bool,
    pub bordered: bool,
    pub rounded: bool,
    pub vertical: bool,
    /// Icon-only content
    pub icon: bool,
    /// Attached to the side of a text input
    pub input_button: bool,

    pub small: bool,
    pub large: bool,
    pub block: bool,

    pub disabled: bool,
}

impl VariantFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag for `role`
    pub fn with_role(mut self, role: Role) -> Self {
        *self.role_flag_mut(role) = true;
        self
    }

    /// Set the size flags for `size`
    pub fn with_size(mut self, size: SizeClass) -> Self {
        self.small = size == SizeClass::Small;
        self.large = size == SizeClass::Large;
        self
    }

    pub fn has_role(&self, role: Role) -> bool {
        match role {
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
            Role::Success => self.success,
            Role::Danger => self.danger,
            Role::Warning => self.warning,
            Role::Info => self.info,
        }
    }

    fn role_flag_mut(&mut self, role: Role) -> &mut bool {
        match role {
            Role::Primary => &mut self.primary,
            Role::Secondary => &mut self.secondary,
            Role::Success => &mut self.success,
            Role::Danger => &mut self.danger,
            Role::Warning => &mut self.warning,
            Role::Info => &mut self.info,
        }
    }

    /// Highest-precedence role flag set, if any
    pub fn role(&self) -> Option<Role> {
        Role::PRECEDENCE
            .into_iter()
            .find(|role| self.has_role(*role))
    }

    /// Size class, `large` checked before `small`
    pub fn size_class(&self) -> SizeClass {
        if self.large {
            SizeClass::Large
        } else if self.small {
            SizeClass::Small
        } else {
            SizeClass::Regular
        }
    }
}

/// Main-axis direction of a component's content
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Row,
    Column,
}

impl Direction {
    pub fn keyword(self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Column => "column",
        }
    }
}

/// Horizontal sizing of a component
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidthMode {
    #[default]
    Auto,
    Full,
}

/// Fully populated style of a button-like component
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub fill_color: Color,
    pub text_color: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub padding_vertical: f32,
    pub padding_horizontal: f32,
    pub font_size: f32,
    pub border_radius: f32,
    pub direction: Direction,
    pub width: WidthMode,
    /// Minimum footprint on both axes
    pub min_size: Option<f32>,
    pub opacity: f32,
}

impl ResolvedStyle {
    /// Apply post-resolution overrides
    pub fn with_overrides(mut self, overrides: &StyleOverrides) -> Self {
        if let Some(fill) = overrides.fill_color {
            self.fill_color = fill;
        }
        if let Some(text) = overrides.text_color {
            self.text_color = text;
        }
        if let Some(border) = overrides.border_color {
            self.border_color = border;
        }
        if let Some(width) = overrides.border_width {
            self.border_width = width;
        }
        if let Some(radius) = overrides.border_radius {
            self.border_radius = radius;
        }
        self
    }

    /// Style of the pressable container
    pub fn container_style(&self) -> StyleBag {
        let mut bag = StyleBag::new()
            .with(StyleProp::BackgroundColor, self.fill_color)
            .with(StyleProp::BorderColor, self.border_color)
            .with(StyleProp::BorderWidth, self.border_width)
            .with(StyleProp::BorderRadius, self.border_radius)
            .with(StyleProp::PaddingVertical, self.padding_vertical)
            .with(StyleProp::PaddingHorizontal, self.padding_horizontal)
            .with(StyleProp::FlexDirection, self.direction.keyword())
            .with(StyleProp::AlignItems, "center")
            .with(StyleProp::JustifyContent, "center")
            .with(StyleProp::Opacity, self.opacity);
        if self.width == WidthMode::Full {
            bag.set(StyleProp::Width, StyleValue::Percent(100.0));
        }
        if let Some(min) = self.min_size {
            bag.set(StyleProp::MinWidth, min);
            bag.set(StyleProp::MinHeight, min);
        }
        bag
    }

    /// Style of the title text
    pub fn text_style(&self) -> StyleBag {
        StyleBag::new()
            .with(StyleProp::Color, self.text_color)
            .with(StyleProp::FontSize, self.font_size)
            .with(StyleProp::FontWeight, "600")
            .with(StyleProp::TextAlign, "center")
    }
}

/// Overrides applied after resolution, the way trailing style entries win
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleOverrides {
    pub fill_color: Option<Color>,
    pub text_color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: Option<f32>,
    pub border_radius: Option<f32>,
    /// Extra container properties (layout, elevation, ...)
    pub container: StyleBag,
    /// Extra title text properties
    pub text: StyleBag,
}

impl StyleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn container(mut self, prop: StyleProp, value: impl Into<StyleValue>) -> Self {
        self.container.set(prop, value);
        self
    }

    pub fn text(mut self, prop: StyleProp, value: impl Into<StyleValue>) -> Self {
        self.text.set(prop, value);
        self
    }

    /// Layer `top` over these overrides; `top` wins wherever it is set
    pub fn layered(&self, top: &StyleOverrides) -> StyleOverrides {
        let mut container = self.container.clone();
        container.merge(&top.container);
        let mut text = self.text.clone();
        text.merge(&top.text);

        StyleOverrides {
            fill_color: top.fill_color.or(self.fill_color),
            text_color: top.text_color.or(self.text_color),
            border_color: top.border_color.or(self.border_color),
            border_width: top.border_width.or(self.border_width),
            border_radius: top.border_radius.or(self.border_radius),
            container,
            text,
        }
    }
}

/// Role color of `flags`: the first set role in precedence order, else
/// `palette.default`
pub fn role_color(flags: &VariantFlags, theme: &Theme) -> Color {
    flags
        .role()
        .map_or(theme.palette.default, |role| role.color(theme))
}

/// Resolve `flags` against `theme`.
///
/// Total over every flag combination and free of side effects.
pub fn resolve(
    flags: &VariantFlags,
    theme: &Theme,
    override_color: Option<Color>,
) -> ResolvedStyle {
    let on_fill = theme.typography.primary_color;

    let (fill_color, text_color) = if flags.transparent {
        (
            Color::TRANSPARENT,
            override_color.unwrap_or(theme.palette.primary),
        )
    } else if flags.bordered {
        (
            Color::TRANSPARENT,
            override_color.unwrap_or_else(|| role_color(flags, theme)),
        )
    } else if let Some(color) = override_color {
        (color, on_fill)
    } else {
        (role_color(flags, theme), on_fill)
    };

    let text_color = if flags.role().is_some() {
        on_fill
    } else {
        text_color
    };

    let (border_width, border_color) = if flags.bordered {
        (BORDER_WIDTH, text_color)
    } else {
        (0.0, Color::TRANSPARENT)
    };

    let (mut padding_vertical, mut padding_horizontal, font_size) =
        flags.size_class().metrics();
    let mut min_size = None;
    if flags.icon {
        padding_vertical = ICON_BUTTON_PADDING;
        padding_horizontal = ICON_BUTTON_PADDING;
        min_size = Some(ICON_BUTTON_MIN_SIZE);
    }

    let border_radius = if flags.input_button {
        0.0
    } else if flags.rounded {
        ROUNDED_RADIUS
    } else {
        theme.border_radius
    };

    ResolvedStyle {
        fill_color,
        text_color,
        border_color,
        border_width,
        padding_vertical,
        padding_horizontal,
        font_size,
        border_radius,
        direction: if flags.vertical {
            Direction::Column
        } else {
            Direction::Row
        },
        width: if flags.block {
            WidthMode::Full
        } else {
            WidthMode::Auto
        },
        min_size,
        opacity: if flags.disabled { DISABLED_OPACITY } else { 1.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchard_theme::ThemePreset;

    fn orange() -> Theme {
        ThemePreset::Orange.theme()
    }

    #[test]
    fn test_fallback_constants_match_hex() {
        assert_eq!(SUCCESS_FALLBACK.to_string(), "#28a745");
        assert_eq!(DANGER_FALLBACK.to_string(), "#dc3545");
        assert_eq!(WARNING_FALLBACK.to_string(), "#ffc107");
        assert_eq!(INFO_FALLBACK.to_string(), "#17a2b8");
    }

    #[test]
    fn test_primary_only() {
        let theme = orange();
        let style = resolve(&VariantFlags::new().with_role(Role::Primary), &theme, None);

        assert_eq!(style.fill_color, theme.palette.primary);
        assert_eq!(style.text_color, theme.typography.primary_color);
        assert_eq!(style.border_width, 0.0);
        assert_eq!(style.border_color, Color::TRANSPARENT);
    }

    #[test]
    fn test_role_precedence() {
        let theme = orange();
        let flags = VariantFlags {
            secondary: true,
            danger: true,
            ..Default::default()
        };
        assert_eq!(flags.role(), Some(Role::Secondary));
        assert_eq!(resolve(&flags, &theme, None).fill_color, theme.palette.secondary);

        let none = VariantFlags::new();
        assert_eq!(resolve(&none, &theme, None).fill_color, theme.palette.default);
    }

    #[test]
    fn test_missing_status_roles_use_fallbacks() {
        let theme = orange();
        assert_eq!(theme.palette.success, None);

        for (role, expected) in [
            (Role::Success, SUCCESS_FALLBACK),
            (Role::Danger, DANGER_FALLBACK),
            (Role::Warning, WARNING_FALLBACK),
            (Role::Info, INFO_FALLBACK),
        ] {
            let style = resolve(&VariantFlags::new().with_role(role), &theme, None);
            assert_eq!(style.fill_color, expected, "role={role:?}");
        }

        let midnight = ThemePreset::Midnight.theme();
        let style = resolve(&VariantFlags::new().with_role(Role::Success), &midnight, None);
        assert_eq!(Some(style.fill_color), midnight.palette.success);
    }

    #[test]
    fn test_transparent_beats_bordered() {
        let theme = orange();
        let red = Color::from_hex(0xFF0000);
        let flags = VariantFlags {
            transparent: true,
            bordered: true,
            ..Default::default()
        };

        let style = resolve(&flags, &theme, Some(red));
        assert_eq!(style.fill_color, Color::TRANSPARENT);
        assert_eq!(style.text_color, red);
        assert_eq!(style.border_width, BORDER_WIDTH);
        assert_eq!(style.border_color, red);

        let style = resolve(&flags, &theme, None);
        assert_eq!(style.text_color, theme.palette.primary);
    }

    #[test]
    fn test_bordered_uses_role_color_text() {
        let theme = orange();
        let flags = VariantFlags {
            bordered: true,
            ..Default::default()
        };
        let style = resolve(&flags, &theme, None);

        assert_eq!(style.fill_color, Color::TRANSPARENT);
        assert_eq!(style.text_color, theme.palette.default);
        assert_eq!(style.border_color, style.text_color);
    }

    #[test]
    fn test_role_flag_forces_text_color() {
        let theme = orange();
        let flags = VariantFlags {
            transparent: true,
            info: true,
            ..Default::default()
        };
        let style = resolve(&flags, &theme, Some(Color::BLACK));
        assert_eq!(style.fill_color, Color::TRANSPARENT);
        assert_eq!(style.text_color, theme.typography.primary_color);
    }

    #[test]
    fn test_override_fills() {
        let theme = orange();
        let style = resolve(&VariantFlags::new(), &theme, Some(Color::BLACK));
        assert_eq!(style.fill_color, Color::BLACK);
        assert_eq!(style.text_color, theme.typography.primary_color);
    }

    #[test]
    fn test_geometry() {
        let theme = orange();

        let large_and_small = VariantFlags {
            large: true,
            small: true,
            ..Default::default()
        };
        let style = resolve(&large_and_small, &theme, None);
        assert_eq!(
            (style.padding_vertical, style.padding_horizontal, style.font_size),
            (16.0, 24.0, 16.0)
        );

        let icon = VariantFlags {
            icon: true,
            small: true,
            ..Default::default()
        };
        let style = resolve(&icon, &theme, None);
        assert_eq!((style.padding_vertical, style.padding_horizontal), (12.0, 12.0));
        assert_eq!(style.font_size, 12.0);
        assert_eq!(style.min_size, Some(ICON_BUTTON_MIN_SIZE));

        let rounded_input = VariantFlags {
            rounded: true,
            input_button: true,
            ..Default::default()
        };
        assert_eq!(resolve(&rounded_input, &theme, None).border_radius, 0.0);

        let rounded = VariantFlags {
            rounded: true,
            vertical: true,
            block: true,
            disabled: true,
            ..Default::default()
        };
        let style = resolve(&rounded, &theme, None);
        assert_eq!(style.border_radius, ROUNDED_RADIUS);
        assert_eq!(style.direction, Direction::Column);
        assert_eq!(style.width, WidthMode::Full);
        assert_eq!(style.opacity, DISABLED_OPACITY);

        assert_eq!(
            resolve(&VariantFlags::new(), &theme, None).border_radius,
            theme.border_radius
        );
    }

    #[test]
    fn test_size_names() {
        assert_eq!(SizeClass::from_name("Small"), SizeClass::Small);
        assert_eq!(SizeClass::from_name("large"), SizeClass::Large);
        assert_eq!(SizeClass::from_name("default"), SizeClass::Regular);
        assert_eq!(SizeClass::from_name("huge"), SizeClass::Regular);
    }

    #[test]
    fn test_overrides_layer_and_apply() {
        let theme = orange();
        let base = StyleOverrides::new()
            .border_radius(8.0)
            .text_color(Color::BLACK);
        let top = StyleOverrides::new().border_radius(2.0);
        let merged = base.layered(&top);

        let style = resolve(&VariantFlags::new(), &theme, None).with_overrides(&merged);
        assert_eq!(style.border_radius, 2.0);
        assert_eq!(style.text_color, Color::BLACK);
    }
}
