//! Card button
//!
//! A pressable card: rounded, filled with `palette.background`, corners at
//! twice the theme radius, stretched across its row with a light elevation.

use orchard_theme::Theme;

use super::button::Button;
use crate::injection::ThemedComponent;
use crate::node::{Node, StyleProp};
use crate::variant::{ResolvedStyle, StyleOverrides};

/// Card elevation
pub const CARD_ELEVATION: f32 = 2.0;

/// Pressable card surface
#[derive(Debug)]
pub struct CardButton {
    inner: Button,
}

impl Default for CardButton {
    fn default() -> Self {
        Self::new()
    }
}

impl CardButton {
    pub fn new() -> Self {
        Self {
            inner: Button::new().rounded(),
        }
    }

    pub fn child(mut self, child: Node) -> Self {
        self.inner = self.inner.child(child);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.inner = self.inner.disabled(disabled);
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.inner = self.inner.test_id(id);
        self
    }

    pub fn overrides(mut self, overrides: StyleOverrides) -> Self {
        self.inner = self.inner.overrides(overrides);
        self
    }

    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.inner = self.inner.on_press(handler);
        self
    }

    pub fn press(&mut self) -> bool {
        self.inner.press()
    }

    fn own_overrides(theme: &Theme) -> StyleOverrides {
        StyleOverrides::new()
            .fill_color(theme.palette.background)
            .border_radius(theme.border_radius * 2.0)
            .container(StyleProp::Flex, 1.0)
            .container(StyleProp::AlignItems, "stretch")
            .container(StyleProp::Elevation, CARD_ELEVATION)
    }

    pub fn resolve_style(&self, theme: &Theme) -> ResolvedStyle {
        self.inner.resolve_layered(theme, &Self::own_overrides(theme))
    }
}

impl ThemedComponent for CardButton {
    type Output = Node;

    fn render(&self, theme: &Theme) -> Node {
        self.inner.render_layered(theme, &Self::own_overrides(theme))
    }
}

/// Create a card button
pub fn card_button() -> CardButton {
    CardButton::new()
}
