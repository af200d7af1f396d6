//! Default app button
//!
//! A rounded [`Button`] with the app's neutral look. Flags go through the
//! shared resolver; this component only layers its overrides on top:
//!
//! - corners go back to `theme.border_radius`
//! - text uses `typography.secondary_color`, except bordered buttons, whose
//!   text and border take the role color
//! - `full_width` maps to `block`

use orchard_core::Color;
use orchard_theme::Theme;

use super::button::Button;
use crate::injection::ThemedComponent;
use crate::node::Node;
use crate::variant::{role_color, ResolvedStyle, Role, StyleOverrides};

/// App-standard button
#[derive(Debug)]
pub struct DefaultButton {
    inner: Button,
}

impl DefaultButton {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            inner: Button::new().title(title).rounded(),
        }
    }

    pub fn primary(mut self) -> Self {
        self.inner = self.inner.role(Role::Primary);
        self
    }

    pub fn secondary(mut self) -> Self {
        self.inner = self.inner.role(Role::Secondary);
        self
    }

    pub fn transparent(mut self) -> Self {
        self.inner = self.inner.transparent();
        self
    }

    pub fn bordered(mut self) -> Self {
        self.inner = self.inner.bordered();
        self
    }

    pub fn full_width(mut self) -> Self {
        self.inner = self.inner.block();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.inner = self.inner.disabled(disabled);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.inner = self.inner.loading(loading);
        self
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.inner = self.inner.test_id(id);
        self
    }

    /// Caller overrides, applied after this component's own
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

    pub fn button(&self) -> &Button {
        &self.inner
    }

    pub fn button_mut(&mut self) -> &mut Button {
        &mut self.inner
    }

    /// Outline color of a bordered button; `None` when transparent
    fn outline_color(&self, theme: &Theme) -> Option<Color> {
        let flags = self.inner.variant_flags();
        (flags.bordered && !flags.transparent).then(|| role_color(flags, theme))
    }

    fn own_overrides(&self, theme: &Theme) -> StyleOverrides {
        let overrides = StyleOverrides::new().border_radius(theme.border_radius);
        match self.outline_color(theme) {
            Some(outline) => overrides
                .text_color(outline)
                .border_color(outline)
                .border_width(1.0),
            None => overrides
                .text_color(theme.typography.secondary_color)
                .border_width(0.0)
                .border_color(Color::TRANSPARENT),
        }
    }

    pub fn resolve_style(&self, theme: &Theme) -> ResolvedStyle {
        self.inner.resolve_layered(theme, &self.own_overrides(theme))
    }
}

impl ThemedComponent for DefaultButton {
    type Output = Node;

    fn render(&self, theme: &Theme) -> Node {
        self.inner.render_layered(theme, &self.own_overrides(theme))
    }
}

/// Create a default button
pub fn default_button(title: impl Into<String>) -> DefaultButton {
    DefaultButton::new(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchard_theme::ThemePreset;

    #[test]
    fn test_plain_uses_secondary_text_and_theme_radius() {
        let theme = ThemePreset::Orange.theme();
        let style = default_button("Next").resolve_style(&theme);

        assert_eq!(style.fill_color, theme.palette.default);
        assert_eq!(style.text_color, theme.typography.secondary_color);
        assert_eq!(style.border_radius, theme.border_radius);
        assert_eq!(style.border_width, 0.0);
    }

    #[test]
    fn test_primary_keeps_resolver_fill() {
        let theme = ThemePreset::Orange.theme();
        let style = default_button("Next").primary().resolve_style(&theme);

        assert_eq!(style.fill_color, theme.palette.primary);
        assert_eq!(style.text_color, theme.typography.secondary_color);
    }

    #[test]
    fn test_bordered_uses_role_color() {
        let theme = ThemePreset::Orange.theme();
        let style = default_button("Back")
            .secondary()
            .bordered()
            .resolve_style(&theme);

        assert_eq!(style.fill_color, Color::TRANSPARENT);
        assert_eq!(style.text_color, theme.palette.secondary);
        assert_eq!(style.border_color, theme.palette.secondary);
        assert_eq!(style.border_width, 1.0);
    }

    #[test]
    fn test_full_width_and_caller_overrides() {
        let theme = ThemePreset::Orange.theme();
        let btn = default_button("Go")
            .full_width()
            .overrides(StyleOverrides::new().border_radius(0.0));

        assert!(btn.button().variant_flags().block);
        assert_eq!(btn.resolve_style(&theme).border_radius, 0.0);
    }
}
