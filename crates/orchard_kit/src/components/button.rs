//! Button component
//!
//! The base pressable surface. Colors and geometry come from the shared
//! variant resolver; the button only decides what goes inside (title,
//! custom children, or a progress indicator) and whether presses fire.
//!
//! # Example
//!
//! ```ignore
//! use orchard_kit::prelude::*;
//!
//! // Filled primary button
//! button().title("Save").primary().on_press(|| save())
//!
//! // Outlined, small
//! button().title("Cancel").bordered().small()
//!
//! // Busy: indicator next to the title, presses ignored
//! button().title("Uploading").primary().loading(true)
//! ```

use orchard_core::Color;
use orchard_theme::Theme;
use tracing::trace;

use crate::injection::ThemedComponent;
use crate::node::{Node, NodeKind, StyleProp};
use crate::variant::{
    resolve, ResolvedStyle, Role, SizeClass, StyleOverrides, VariantFlags,
};

/// Press handler
pub type PressHandler = Box<dyn FnMut() + Send>;

/// What a button shows inside its surface
#[derive(Clone, Debug, PartialEq)]
pub enum ButtonContent {
    /// Progress indicator, with the title beside it when there is one
    Loading {
        indicator: Color,
        title: Option<String>,
    },
    Title(String),
    Children(Vec<Node>),
    Empty,
}

/// Base button
#[derive(Default)]
pub struct Button {
    title: Option<String>,
    children: Vec<Node>,
    flags: VariantFlags,
    color: Option<Color>,
    loading: bool,
    loading_color: Option<Color>,
    overrides: StyleOverrides,
    test_id: Option<String>,
    on_press: Option<PressHandler>,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Custom content, shown when there is no title
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Replace all variant flags
    pub fn flags(mut self, flags: VariantFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.flags = self.flags.with_role(role);
        self
    }

    pub fn primary(self) -> Self {
        self.role(Role::Primary)
    }

    pub fn secondary(self) -> Self {
        self.role(Role::Secondary)
    }

    pub fn success(self) -> Self {
        self.role(Role::Success)
    }

    pub fn danger(self) -> Self {
        self.role(Role::Danger)
    }

    pub fn warning(self) -> Self {
        self.role(Role::Warning)
    }

    pub fn info(self) -> Self {
        self.role(Role::Info)
    }

    pub fn transparent(mut self) -> Self {
        self.flags.transparent = true;
        self
    }

    pub fn bordered(mut self) -> Self {
        self.flags.bordered = true;
        self
    }

    pub fn rounded(mut self) -> Self {
        self.flags.rounded = true;
        self
    }

    pub fn vertical(mut self) -> Self {
        self.flags.vertical = true;
        self
    }

    /// Icon-only button with a 48x48 minimum footprint
    pub fn icon_only(mut self) -> Self {
        self.flags.icon = true;
        self
    }

    /// Square corners, for buttons attached to an input
    pub fn input_button(mut self) -> Self {
        self.flags.input_button = true;
        self
    }

    pub fn small(mut self) -> Self {
        self.flags.small = true;
        self
    }

    pub fn large(mut self) -> Self {
        self.flags.large = true;
        self
    }

    pub fn size(mut self, size: SizeClass) -> Self {
        self.flags = self.flags.with_size(size);
        self
    }

    /// Stretch to the full width of the parent
    pub fn block(mut self) -> Self {
        self.flags.block = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.flags.disabled = disabled;
        self
    }

    /// Explicit fill color (or text color for transparent/bordered buttons)
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Indicator color while loading; defaults to the text color
    pub fn loading_color(mut self, color: Color) -> Self {
        self.loading_color = Some(color);
        self
    }

    /// Style applied after resolution
    pub fn overrides(mut self, overrides: StyleOverrides) -> Self {
        self.overrides = overrides;
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

    // ========== State ==========

    pub fn variant_flags(&self) -> &VariantFlags {
        &self.flags
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.flags.disabled = disabled;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether a press would reach the handler
    pub fn is_interactive(&self) -> bool {
        !self.flags.disabled && !self.loading
    }

    /// Deliver a press. Returns whether the handler ran.
    pub fn press(&mut self) -> bool {
        if !self.is_interactive() {
            trace!(
                "Button::press - suppressed (disabled={}, loading={})",
                self.flags.disabled,
                self.loading
            );
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

    // ========== Rendering ==========

    /// Resolved style with this button's overrides applied
    pub fn resolve_style(&self, theme: &Theme) -> ResolvedStyle {
        self.resolve_layered(theme, &StyleOverrides::default())
    }

    pub(crate) fn resolve_layered(&self, theme: &Theme, extra: &StyleOverrides) -> ResolvedStyle {
        resolve(&self.flags, theme, self.color).with_overrides(&extra.layered(&self.overrides))
    }

    /// What the button shows for `style`
    pub fn content(&self, style: &ResolvedStyle) -> ButtonContent {
        if self.loading {
            return ButtonContent::Loading {
                indicator: self.loading_color.unwrap_or(style.text_color),
                title: self.title.clone(),
            };
        }
        match (&self.title, self.children.is_empty()) {
            (Some(title), _) => ButtonContent::Title(title.clone()),
            (None, false) => ButtonContent::Children(self.children.clone()),
            (None, true) => ButtonContent::Empty,
        }
    }

    /// Render with `extra` layered under this button's own overrides
    pub(crate) fn render_layered(&self, theme: &Theme, extra: &StyleOverrides) -> Node {
        let overrides = extra.layered(&self.overrides);
        let style = self.resolve_layered(theme, extra);

        let mut container = style.container_style();
        container.merge(&overrides.container);
        let mut text_style = style.text_style();
        text_style.merge(&overrides.text);

        let title_node = |title: String| Node::text(title).style(text_style.clone());

        let children = match self.content(&style) {
            ButtonContent::Loading { indicator, title } => {
                let spinner = Node::new(NodeKind::ActivityIndicator { color: indicator });
                match title {
                    Some(title) => vec![
                        spinner.prop(StyleProp::MarginRight, 8.0),
                        title_node(title),
                    ],
                    None => vec![spinner],
                }
            }
            ButtonContent::Title(title) => vec![title_node(title)],
            ButtonContent::Children(children) => children,
            ButtonContent::Empty => Vec::new(),
        };

        Node::new(NodeKind::Touchable {
            enabled: self.is_interactive(),
            test_id: self.test_id.clone(),
        })
        .style(container)
        .children(children)
    }
}

impl ThemedComponent for Button {
    type Output = Node;

    fn render(&self, theme: &Theme) -> Node {
        self.render_layered(theme, &StyleOverrides::default())
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("title", &self.title)
            .field("flags", &self.flags)
            .field("color", &self.color)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

/// Create a button
pub fn button() -> Button {
    Button::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchard_theme::ThemePreset;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = count.clone();
        (count, move || {
            handle.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_builder_sets_flags() {
        let btn = button().title("Go").primary().bordered().large().block();
        let flags = btn.variant_flags();
        assert!(flags.primary && flags.bordered && flags.large && flags.block);
        assert!(!flags.disabled);
    }

    #[test]
    fn test_press_reaches_handler() {
        let (count, handler) = counting();
        let mut btn = button().title("Go").on_press(handler);

        assert!(btn.press());
        assert!(btn.press());
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_press_suppressed_while_disabled_or_loading() {
        let (count, handler) = counting();
        let mut btn = button()
            .title("Go")
            .disabled(true)
            .loading(true)
            .on_press(handler);
        assert!(!btn.press());

        btn.set_disabled(false);
        assert!(!btn.press());

        btn.set_loading(false);
        btn.set_disabled(true);
        assert!(!btn.press());

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_loading_content() {
        let theme = ThemePreset::Orange.theme();

        let titled = button().title("Upload").primary().loading(true);
        let style = titled.resolve_style(&theme);
        assert_eq!(
            titled.content(&style),
            ButtonContent::Loading {
                indicator: theme.typography.primary_color,
                title: Some("Upload".into()),
            }
        );

        let bare = button()
            .child(Node::text("x"))
            .loading(true)
            .loading_color(Color::BLACK);
        let style = bare.resolve_style(&theme);
        assert_eq!(
            bare.content(&style),
            ButtonContent::Loading {
                indicator: Color::BLACK,
                title: None,
            }
        );

        let node = bare.render(&theme);
        assert_eq!(node.children.len(), 1);
        assert!(matches!(
            node.children[0].kind,
            NodeKind::ActivityIndicator { .. }
        ));
    }

    #[test]
    fn test_render_shape() {
        let theme = ThemePreset::Orange.theme();
        let node = button().title("Save").primary().disabled(true).render(&theme);

        assert!(matches!(node.kind, NodeKind::Touchable { enabled: false, .. }));
        assert_eq!(
            node.style.color(StyleProp::BackgroundColor),
            Some(theme.palette.primary)
        );
        assert_eq!(node.style.number(StyleProp::Opacity), Some(0.6));
        assert_eq!(node.text_content(), "Save");
    }

    #[test]
    fn test_own_overrides_win() {
        let theme = ThemePreset::Orange.theme();
        let btn = button()
            .rounded()
            .overrides(StyleOverrides::new().border_radius(2.0));
        let extra = StyleOverrides::new().border_radius(9.0);

        assert_eq!(btn.resolve_layered(&theme, &extra).border_radius, 2.0);
    }
}
