//! Page chrome
//!
//! [`MainLayout`] frames a screen: status bar, optional header, a scrolling
//! content region that grows to fill the space, and an optional footer, in
//! that paint order. Pull-to-refresh is wired only when a refresh handler is
//! given. Scroll options are forwarded to the host untouched, applied over
//! the kit defaults.
//!
//! # Example
//!
//! ```ignore
//! main_layout()
//!     .header(toolbar)
//!     .child(list)
//!     .footer(tab_bar)
//!     .refreshing(loading)
//!     .on_refresh(|| reload())
//!     .scroll_option("bounces", false)
//! ```

use orchard_core::Color;
use orchard_theme::Theme;
use tracing::debug;

use crate::injection::ThemedComponent;
use crate::node::{Node, NodeKind, StyleBag, StyleProp};

/// Status bar style used by every layout
pub const STATUS_BAR_STYLE: &str = "dark-content";

/// Bottom padding of the safe-area surface
pub const SAFE_AREA_BOTTOM_PADDING: f32 = 50.0;

/// A forwarded scroll option value
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollOptionValue {
    Bool(bool),
    Number(f32),
    Keyword(String),
}

impl From<bool> for ScrollOptionValue {
    fn from(value: bool) -> Self {
        ScrollOptionValue::Bool(value)
    }
}

impl From<f32> for ScrollOptionValue {
    fn from(value: f32) -> Self {
        ScrollOptionValue::Number(value)
    }
}

impl From<&str> for ScrollOptionValue {
    fn from(value: &str) -> Self {
        ScrollOptionValue::Keyword(value.to_string())
    }
}

impl From<String> for ScrollOptionValue {
    fn from(value: String) -> Self {
        ScrollOptionValue::Keyword(value)
    }
}

/// Ordered scroll options; setting a key again replaces its value in place
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollOptions {
    entries: Vec<(String, ScrollOptionValue)>,
}

impl ScrollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kit defaults, applied before caller options
    pub fn defaults() -> Self {
        Self::new()
            .with("contentInsetAdjustmentBehavior", "automatic")
            .with("keyboardShouldPersistTaps", "handled")
            .with("keyboardDismissMode", "interactive")
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ScrollOptionValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ScrollOptionValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ScrollOptionValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// These options layered over `base`
    pub fn over(&self, base: &ScrollOptions) -> ScrollOptions {
        let mut merged = base.clone();
        for (key, value) in &self.entries {
            merged.set(key.clone(), value.clone());
        }
        merged
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScrollOptionValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

type RefreshHandler = Box<dyn FnMut() + Send>;

/// Screen frame
#[derive(Default)]
pub struct MainLayout {
    header: Option<Node>,
    footer: Option<Node>,
    content: Vec<Node>,
    refreshing: bool,
    on_refresh: Option<RefreshHandler>,
    scroll_options: ScrollOptions,
    status_bar_background: Option<Color>,
}

impl MainLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: Node) -> Self {
        self.header = Some(header);
        self
    }

    pub fn footer(mut self, footer: Node) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Add scrolled content
    pub fn child(mut self, child: Node) -> Self {
        self.content.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.content.extend(children);
        self
    }

    pub fn refreshing(mut self, refreshing: bool) -> Self {
        self.refreshing = refreshing;
        self
    }

    /// Enable pull-to-refresh
    pub fn on_refresh<F>(mut self, handler: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_refresh = Some(Box::new(handler));
        self
    }

    /// Forward a scroll option to the host
    pub fn scroll_option(
        mut self,
        key: impl Into<String>,
        value: impl Into<ScrollOptionValue>,
    ) -> Self {
        self.scroll_options.set(key, value);
        self
    }

    pub fn scroll_options(mut self, options: ScrollOptions) -> Self {
        self.scroll_options = options;
        self
    }

    pub fn status_bar_background(mut self, color: Color) -> Self {
        self.status_bar_background = Some(color);
        self
    }

    pub fn set_refreshing(&mut self, refreshing: bool) {
        self.refreshing = refreshing;
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Deliver a pull-to-refresh gesture. Returns whether a handler ran.
    pub fn refresh(&mut self) -> bool {
        match self.on_refresh.as_mut() {
            Some(handler) => {
                debug!("MainLayout::refresh - pull to refresh");
                handler();
                true
            }
            None => false,
        }
    }

    /// Scroll options sent to the host: defaults, then caller options
    pub fn effective_scroll_options(&self) -> ScrollOptions {
        self.scroll_options.over(&ScrollOptions::defaults())
    }
}

impl ThemedComponent for MainLayout {
    type Output = Node;

    fn render(&self, theme: &Theme) -> Node {
        let status_bar = Node::new(NodeKind::StatusBar {
            bar_style: STATUS_BAR_STYLE,
            background: self
                .status_bar_background
                .unwrap_or(theme.palette.status_bar_secondary),
        });

        let scroll = Node::new(NodeKind::Scroll {
            options: self.effective_scroll_options(),
            refreshing: self.on_refresh.as_ref().map(|_| self.refreshing),
        })
        .prop(StyleProp::FlexGrow, 1.0)
        .children(self.content.iter().cloned());

        let body = Node::new(NodeKind::KeyboardAvoiding)
            .prop(StyleProp::Flex, 1.0)
            .child_opt(self.header.clone())
            .child(scroll)
            .child_opt(self.footer.clone());

        let safe_area = Node::new(NodeKind::SafeArea)
            .style(
                StyleBag::new()
                    .with(StyleProp::Flex, 1.0)
                    .with(StyleProp::BackgroundColor, theme.palette.background)
                    .with(StyleProp::PaddingBottom, SAFE_AREA_BOTTOM_PADDING),
            )
            .child(body);

        Node::fragment().child(status_bar).child(safe_area)
    }
}

impl std::fmt::Debug for MainLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainLayout")
            .field("header", &self.header.is_some())
            .field("footer", &self.footer.is_some())
            .field("content", &self.content.len())
            .field("refreshing", &self.refreshing)
            .field("scroll_options", &self.scroll_options)
            .finish_non_exhaustive()
    }
}

/// Create a screen frame
pub fn main_layout() -> MainLayout {
    MainLayout::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchard_theme::ThemePreset;

    fn kinds(node: &Node) -> Vec<&'static str> {
        node.walk()
            .into_iter()
            .filter_map(|n| match &n.kind {
                NodeKind::StatusBar { .. } => Some("status"),
                NodeKind::Scroll { .. } => Some("scroll"),
                NodeKind::Text(t) if t == "header" => Some("header"),
                NodeKind::Text(t) if t == "footer" => Some("footer"),
                NodeKind::Text(_) => Some("content"),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_paint_order() {
        let theme = ThemePreset::Orange.theme();
        let node = main_layout()
            .footer(Node::text("footer"))
            .child(Node::text("body"))
            .header(Node::text("header"))
            .render(&theme);

        assert_eq!(kinds(&node), vec!["status", "header", "scroll", "content", "footer"]);
    }

    #[test]
    fn test_slots_are_optional() {
        let theme = ThemePreset::Orange.theme();
        let node = main_layout().render(&theme);
        assert_eq!(kinds(&node), vec!["status", "scroll"]);
    }

    #[test]
    fn test_status_bar_and_surface_colors() {
        let theme = ThemePreset::Orange.theme();
        let node = main_layout().render(&theme);
        assert_eq!(
            node.children[0].kind,
            NodeKind::StatusBar {
                bar_style: STATUS_BAR_STYLE,
                background: theme.palette.status_bar_secondary,
            }
        );
        let safe_area = &node.children[1];
        assert_eq!(
            safe_area.style.color(StyleProp::BackgroundColor),
            Some(theme.palette.background)
        );
        assert_eq!(
            safe_area.style.number(StyleProp::PaddingBottom),
            Some(SAFE_AREA_BOTTOM_PADDING)
        );

        let node = main_layout()
            .status_bar_background(Color::BLACK)
            .render(&theme);
        assert!(matches!(
            node.children[0].kind,
            NodeKind::StatusBar { background, .. } if background == Color::BLACK
        ));
    }

    #[test]
    fn test_scroll_options_forwarded_over_defaults() {
        let layout = main_layout()
            .scroll_option("keyboardShouldPersistTaps", "always")
            .scroll_option("bounces", false);
        let options = layout.effective_scroll_options();

        assert_eq!(options.len(), 4);
        assert_eq!(
            options.get("keyboardShouldPersistTaps"),
            Some(&ScrollOptionValue::Keyword("always".into()))
        );
        assert_eq!(
            options.get("contentInsetAdjustmentBehavior"),
            Some(&ScrollOptionValue::Keyword("automatic".into()))
        );
        assert_eq!(options.get("bounces"), Some(&ScrollOptionValue::Bool(false)));
    }
}
