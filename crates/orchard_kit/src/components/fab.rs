//! Floating action button
//!
//! A circular icon button pinned to a screen corner. The fill comes from the
//! shared resolver ({primary, secondary, default} role scheme); diameter and
//! icon size come from the size class; placement reads safe-area insets from
//! the host once per computation.
//!
//! # Example
//!
//! ```ignore
//! fab("plus")
//!     .primary()
//!     .position(FabPosition::BottomLeft)
//!     .safe_area(Arc::new(device_insets))
//!     .on_press(|| open_editor())
//! ```

use std::sync::Arc;

use orchard_core::{Color, EdgeInsets};
use orchard_theme::Theme;
use tracing::debug;

use super::button::PressHandler;
use super::icon::{Icon, IconStyle};
use crate::host::{GlyphResolver, SafeAreaProvider};
use crate::injection::ThemedComponent;
use crate::node::{Node, NodeKind, StyleBag, StyleProp};
use crate::variant::{resolve, Role, SizeClass, VariantFlags};

/// Padding of [`fab_space`], matching a regular FAB footprint
pub const FAB_SPACE_PADDING: f32 = 28.0;

/// Corner a FAB is pinned to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FabPosition {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl FabPosition {
    /// Parse a position name. Unknown names mean bottom right.
    pub fn from_name(name: &str) -> FabPosition {
        match name {
            "bottomRight" | "bottom_right" => FabPosition::BottomRight,
            "bottomLeft" | "bottom_left" => FabPosition::BottomLeft,
            "topRight" | "top_right" => FabPosition::TopRight,
            "topLeft" | "top_left" => FabPosition::TopLeft,
            other => {
                debug!("FabPosition::from_name - unknown position {other:?}, using bottomRight");
                FabPosition::BottomRight
            }
        }
    }

    pub fn is_bottom(self) -> bool {
        matches!(self, FabPosition::BottomRight | FabPosition::BottomLeft)
    }

    pub fn is_left(self) -> bool {
        matches!(self, FabPosition::BottomLeft | FabPosition::TopLeft)
    }
}

/// Absolute offsets from the screen edges; unset edges are free
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FabPlacement {
    pub top: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
    pub right: Option<f32>,
}

/// Resolved FAB appearance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FabStyle {
    pub fill_color: Color,
    pub diameter: f32,
    pub border_radius: f32,
    pub icon: IconStyle,
}

/// Diameter for a size class
pub fn fab_diameter(size: SizeClass) -> f32 {
    match size {
        SizeClass::Small => 40.0,
        SizeClass::Regular => 56.0,
        SizeClass::Large => 64.0,
    }
}

/// Icon size for a size class
pub fn fab_icon_size(size: SizeClass) -> f32 {
    match size {
        SizeClass::Small => 20.0,
        SizeClass::Regular => 24.0,
        SizeClass::Large => 28.0,
    }
}

/// Floating action button
pub struct Fab {
    icon: Icon,
    role: Option<Role>,
    size: SizeClass,
    position: FabPosition,
    disabled: bool,
    safe_area: Option<Arc<dyn SafeAreaProvider + Send + Sync>>,
    test_id: Option<String>,
    on_press: Option<PressHandler>,
}

impl Fab {
    pub fn new(icon_name: impl Into<String>) -> Self {
        Self {
            icon: Icon::new(icon_name),
            role: None,
            size: SizeClass::Regular,
            position: FabPosition::BottomRight,
            disabled: false,
            safe_area: None,
            test_id: None,
            on_press: None,
        }
    }

    pub fn primary(mut self) -> Self {
        self.role = Some(Role::Primary);
        self
    }

    pub fn secondary(mut self) -> Self {
        self.role = Some(Role::Secondary);
        self
    }

    pub fn size(mut self, size: SizeClass) -> Self {
        self.size = size;
        self
    }

    pub fn small(self) -> Self {
        self.size(SizeClass::Small)
    }

    pub fn large(self) -> Self {
        self.size(SizeClass::Large)
    }

    pub fn position(mut self, position: FabPosition) -> Self {
        self.position = position;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Icon family by name
    pub fn icon_family(mut self, name: &str) -> Self {
        self.icon = self.icon.family_name(name);
        self
    }

    pub fn glyphs(mut self, resolver: Arc<dyn GlyphResolver + Send + Sync>) -> Self {
        self.icon = self.icon.resolver(resolver);
        self
    }

    /// Safe-area source; without one, insets are zero
    pub fn safe_area(mut self, provider: Arc<dyn SafeAreaProvider + Send + Sync>) -> Self {
        self.safe_area = Some(provider);
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_press = Some(Box::new(handler));
        self
    }

    /// Deliver a press. Returns whether the handler ran.
    pub fn press(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        match self.on_press.as_mut() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    pub fn resolve_style(&self, theme: &Theme) -> FabStyle {
        let flags = self
            .role
            .map_or_else(VariantFlags::new, |role| VariantFlags::new().with_role(role));
        let base = resolve(&flags, theme, None);
        let diameter = fab_diameter(self.size);

        FabStyle {
            fill_color: base.fill_color,
            diameter,
            border_radius: diameter / 2.0,
            icon: IconStyle {
                color: theme.typography.secondary_color,
                size: fab_icon_size(self.size),
            },
        }
    }

    /// Offsets for the configured corner. Reads the insets once.
    pub fn placement(&self, theme: &Theme) -> FabPlacement {
        let insets = self
            .safe_area
            .as_ref()
            .map_or(EdgeInsets::ZERO, |provider| provider.insets());
        placement_for(self.position, theme, insets)
    }
}

/// Offsets for `position` with the given insets
pub fn placement_for(position: FabPosition, theme: &Theme, insets: EdgeInsets) -> FabPlacement {
    let offset = theme.space(4.0);
    let vertical = if position.is_bottom() {
        offset + insets.bottom
    } else {
        offset
    };

    let mut placement = FabPlacement::default();
    if position.is_bottom() {
        placement.bottom = Some(vertical);
    } else {
        placement.top = Some(vertical);
    }
    if position.is_left() {
        placement.left = Some(offset);
    } else {
        placement.right = Some(offset);
    }
    placement
}

impl ThemedComponent for Fab {
    type Output = Node;

    fn render(&self, theme: &Theme) -> Node {
        let style = self.resolve_style(theme);
        let placement = self.placement(theme);

        let mut bag = StyleBag::new()
            .with(StyleProp::Position, "absolute")
            .with(StyleProp::BackgroundColor, style.fill_color)
            .with(StyleProp::Width, style.diameter)
            .with(StyleProp::Height, style.diameter)
            .with(StyleProp::BorderRadius, style.border_radius)
            .with(StyleProp::AlignItems, "center")
            .with(StyleProp::JustifyContent, "center")
            .with(StyleProp::Elevation, 4.0);
        for (prop, value) in [
            (StyleProp::Top, placement.top),
            (StyleProp::Bottom, placement.bottom),
            (StyleProp::Left, placement.left),
            (StyleProp::Right, placement.right),
        ] {
            if let Some(value) = value {
                bag.set(prop, value);
            }
        }

        Node::new(NodeKind::Touchable {
            enabled: !self.disabled,
            test_id: self.test_id.clone(),
        })
        .style(bag)
        .child(self.icon.render_styled(style.icon))
    }
}

impl std::fmt::Debug for Fab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fab")
            .field("icon", &self.icon)
            .field("role", &self.role)
            .field("size", &self.size)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// Create a FAB showing `icon_name`
pub fn fab(icon_name: impl Into<String>) -> Fab {
    Fab::new(icon_name)
}

/// Spacer keeping the bottom of scrolled content clear of a FAB
pub fn fab_space() -> Node {
    Node::view().prop(StyleProp::Padding, FAB_SPACE_PADDING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchard_theme::ThemePreset;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingInsets {
        reads: AtomicUsize,
    }

    impl SafeAreaProvider for CountingInsets {
        fn insets(&self) -> EdgeInsets {
            self.reads.fetch_add(1, Ordering::SeqCst);
            EdgeInsets::new(44.0, 34.0, 0.0, 0.0)
        }
    }

    #[test]
    fn test_sizes() {
        let theme = ThemePreset::Orange.theme();
        for (size, diameter, icon) in [
            (SizeClass::Small, 40.0, 20.0),
            (SizeClass::Regular, 56.0, 24.0),
            (SizeClass::Large, 64.0, 28.0),
        ] {
            let style = fab("plus").size(size).resolve_style(&theme);
            assert_eq!(style.diameter, diameter);
            assert_eq!(style.border_radius, diameter / 2.0);
            assert_eq!(style.icon.size, icon);
            assert_eq!(style.icon.color, theme.typography.secondary_color);
        }
    }

    #[test]
    fn test_role_fill() {
        let theme = ThemePreset::Orange.theme();
        assert_eq!(fab("plus").resolve_style(&theme).fill_color, theme.palette.default);
        assert_eq!(
            fab("plus").secondary().resolve_style(&theme).fill_color,
            theme.palette.secondary
        );
    }

    #[test]
    fn test_placement_reads_insets_once() {
        let theme = ThemePreset::Orange.theme();
        let insets = Arc::new(CountingInsets {
            reads: AtomicUsize::new(0),
        });
        let button = fab("plus").safe_area(insets.clone());

        let placement = button.placement(&theme);
        assert_eq!(insets.reads.load(Ordering::SeqCst), 1);
        assert_eq!(placement.bottom, Some(16.0 + 34.0));
        assert_eq!(placement.right, Some(16.0));
        assert_eq!((placement.top, placement.left), (None, None));
    }

    #[test]
    fn test_top_corners_ignore_bottom_inset() {
        let theme = ThemePreset::Orange.theme();
        let insets = EdgeInsets::new(44.0, 34.0, 0.0, 0.0);

        let placement = placement_for(FabPosition::TopLeft, &theme, insets);
        assert_eq!(placement.top, Some(16.0));
        assert_eq!(placement.left, Some(16.0));
        assert_eq!(FabPosition::from_name("middle"), FabPosition::BottomRight);
    }

    #[test]
    fn test_render_and_press() {
        let theme = ThemePreset::Orange.theme();
        let count = Arc::new(AtomicUsize::new(0));
        let handle = count.clone();
        let mut button = fab("plus").primary().on_press(move || {
            handle.fetch_add(1, Ordering::SeqCst);
        });

        let node = button.render(&theme);
        assert_eq!(node.style.keyword(StyleProp::Position), Some("absolute"));
        assert_eq!(node.style.number(StyleProp::Bottom), Some(16.0));
        assert!(matches!(node.children[0].kind, NodeKind::Icon { .. }));

        assert!(button.press());
        button = button.disabled(true);
        assert!(!button.press());
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(fab_space().style.number(StyleProp::Padding), Some(FAB_SPACE_PADDING));
    }
}
