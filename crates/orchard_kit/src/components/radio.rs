//! Radio indicator
//!
//! A single circular selection mark. Unselected rings use the caller color or
//! `palette.default`; selected rings use the selected color or
//! `palette.secondary` and show a centered dot at half the ring size.

use orchard_core::Color;
use orchard_theme::Theme;

use super::button::PressHandler;
use crate::injection::ThemedComponent;
use crate::node::{Node, NodeKind, StyleBag, StyleProp};

/// Default ring diameter
pub const RADIO_SIZE: f32 = 20.0;

/// Ring stroke width
pub const RADIO_BORDER_WIDTH: f32 = 2.0;

/// Resolved radio appearance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadioStyle {
    pub color: Color,
    pub size: f32,
    pub inner_size: f32,
    pub border_width: f32,
    /// Whether the inner dot is drawn
    pub show_dot: bool,
}

/// Radio indicator
pub struct Radio {
    selected: bool,
    color: Option<Color>,
    selected_color: Option<Color>,
    size: f32,
    disabled: bool,
    on_press: Option<PressHandler>,
}

impl Default for Radio {
    fn default() -> Self {
        Self {
            selected: false,
            color: None,
            selected_color: None,
            size: RADIO_SIZE,
            disabled: false,
            on_press: None,
        }
    }
}

impl Radio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Ring color while unselected
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Ring and dot color while selected
    pub fn selected_color(mut self, color: Color) -> Self {
        self.selected_color = Some(color);
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
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

    pub fn resolve_style(&self, theme: &Theme) -> RadioStyle {
        let color = if self.selected {
            self.selected_color.unwrap_or(theme.palette.secondary)
        } else {
            self.color.unwrap_or(theme.palette.default)
        };

        RadioStyle {
            color,
            size: self.size,
            inner_size: self.size * 0.5,
            border_width: RADIO_BORDER_WIDTH,
            show_dot: self.selected,
        }
    }
}

impl ThemedComponent for Radio {
    type Output = Node;

    fn render(&self, theme: &Theme) -> Node {
        let style = self.resolve_style(theme);

        let ring = Node::view().style(
            StyleBag::new()
                .with(StyleProp::Width, style.size)
                .with(StyleProp::Height, style.size)
                .with(StyleProp::BorderRadius, style.size / 2.0)
                .with(StyleProp::BorderWidth, style.border_width)
                .with(StyleProp::BorderColor, style.color)
                .with(StyleProp::AlignItems, "center")
                .with(StyleProp::JustifyContent, "center"),
        );
        let dot = style.show_dot.then(|| {
            Node::view().style(
                StyleBag::new()
                    .with(StyleProp::Width, style.inner_size)
                    .with(StyleProp::Height, style.inner_size)
                    .with(StyleProp::BorderRadius, style.inner_size / 2.0)
                    .with(StyleProp::BackgroundColor, style.color),
            )
        });

        Node::new(NodeKind::Touchable {
            enabled: !self.disabled,
            test_id: None,
        })
        .child(ring.child_opt(dot))
    }
}

impl std::fmt::Debug for Radio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Radio")
            .field("selected", &self.selected)
            .field("size", &self.size)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

/// Create a radio indicator
pub fn radio() -> Radio {
    Radio::new()
}
