//! Render node descriptions
//!
//! Components do not paint. They return a [`Node`] tree describing what the
//! host toolkit should create, in paint order, with a [`StyleBag`] of
//! properties per node. [`Node::mount_into`] replays a tree against any
//! [`NodeHost`].

use orchard_core::Color;
use rustc_hash::FxHashMap;

use crate::components::icon::IconFamily;
use crate::host::NodeHost;
use crate::layout::ScrollOptions;

/// Style properties understood by hosts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProp {
    BackgroundColor,
    Color,
    BorderColor,
    BorderWidth,
    BorderBottomColor,
    BorderBottomWidth,
    BorderRadius,
    Padding,
    PaddingVertical,
    PaddingHorizontal,
    PaddingLeft,
    PaddingBottom,
    MarginRight,
    FontSize,
    FontWeight,
    TextAlign,
    Opacity,
    FlexDirection,
    Flex,
    FlexGrow,
    AlignItems,
    AlignSelf,
    JustifyContent,
    Width,
    Height,
    MinWidth,
    MinHeight,
    Position,
    Top,
    Bottom,
    Left,
    Right,
    ZIndex,
    Overflow,
    ResizeMode,
    Elevation,
}

/// A single style value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleValue {
    Color(Color),
    Number(f32),
    /// Percentage of the parent (`100.0` is full width)
    Percent(f32),
    Keyword(&'static str),
}

impl From<Color> for StyleValue {
    fn from(color: Color) -> Self {
        StyleValue::Color(color)
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        StyleValue::Number(value)
    }
}

/// Float literals default to `f64`; styles are stored as `f32`
impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value as f32)
    }
}

impl From<&'static str> for StyleValue {
    fn from(keyword: &'static str) -> Self {
        StyleValue::Keyword(keyword)
    }
}

/// Property map attached to a node. Later writes win.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleBag {
    props: FxHashMap<StyleProp, StyleValue>,
}

impl StyleBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StyleBag::set`]
    pub fn with(mut self, prop: StyleProp, value: impl Into<StyleValue>) -> Self {
        self.set(prop, value);
        self
    }

    pub fn set(&mut self, prop: StyleProp, value: impl Into<StyleValue>) {
        self.props.insert(prop, value.into());
    }

    pub fn get(&self, prop: StyleProp) -> Option<StyleValue> {
        self.props.get(&prop).copied()
    }

    pub fn remove(&mut self, prop: StyleProp) -> Option<StyleValue> {
        self.props.remove(&prop)
    }

    /// Color value of `prop`, if it holds one
    pub fn color(&self, prop: StyleProp) -> Option<Color> {
        match self.get(prop)? {
            StyleValue::Color(color) => Some(color),
            _ => None,
        }
    }

    /// Numeric value of `prop`, if it holds one
    pub fn number(&self, prop: StyleProp) -> Option<f32> {
        match self.get(prop)? {
            StyleValue::Number(value) => Some(value),
            _ => None,
        }
    }

    pub fn keyword(&self, prop: StyleProp) -> Option<&'static str> {
        match self.get(prop)? {
            StyleValue::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    pub fn contains(&self, prop: StyleProp) -> bool {
        self.props.contains_key(&prop)
    }

    /// Layer `other` on top of this bag; its entries win
    pub fn merge(&mut self, other: &StyleBag) {
        self.props
            .extend(other.props.iter().map(|(prop, value)| (*prop, *value)));
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProp, StyleValue)> + '_ {
        self.props.iter().map(|(prop, value)| (*prop, *value))
    }
}

/// What a node is, plus any content that is not a style property
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Groups children without a surface of its own
    Fragment,
    View,
    Text(String),
    /// Press target. `enabled` is false while presses are suppressed.
    Touchable {
        enabled: bool,
        test_id: Option<String>,
    },
    ActivityIndicator {
        color: Color,
    },
    Icon {
        family: IconFamily,
        name: String,
        /// Glyph from the host's resolver, if it had one
        glyph: Option<char>,
    },
    Image {
        source: Option<String>,
        accessibility_label: Option<String>,
        test_id: Option<String>,
    },
    TextInput {
        value: String,
        placeholder: String,
    },
    StatusBar {
        bar_style: &'static str,
        background: Color,
    },
    SafeArea,
    KeyboardAvoiding,
    Scroll {
        options: ScrollOptions,
        /// `Some(refreshing)` when pull-to-refresh is wired
        refreshing: Option<bool>,
    },
}

/// A render description node
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub style: StyleBag,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            style: StyleBag::new(),
            children: Vec::new(),
        }
    }

    pub fn view() -> Self {
        Self::new(NodeKind::View)
    }

    pub fn fragment() -> Self {
        Self::new(NodeKind::Fragment)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Text(content.into()))
    }

    /// Replace the style bag
    pub fn style(mut self, style: StyleBag) -> Self {
        self.style = style;
        self
    }

    /// Set a single style property
    pub fn prop(mut self, prop: StyleProp, value: impl Into<StyleValue>) -> Self {
        self.style.set(prop, value);
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append `child` only when present
    pub fn child_opt(mut self, child: Option<Node>) -> Self {
        self.children.extend(child);
        self
    }

    /// All nodes in paint order (pre-order, parent before children)
    pub fn walk(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.push(self);
        for child in &self.children {
            child.collect(out);
        }
    }

    /// First node in paint order matching `predicate`
    pub fn find(&self, predicate: impl Fn(&Node) -> bool) -> Option<&Node> {
        self.walk().into_iter().find(|node| predicate(node))
    }

    /// Concatenated text of every `Text` node in the subtree
    pub fn text_content(&self) -> String {
        self.walk()
            .into_iter()
            .filter_map(|node| match &node.kind {
                NodeKind::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Create this tree in `host`, returning the root handle.
    ///
    /// Children are appended in order, so the host sees paint order.
    pub fn mount_into<H: NodeHost>(&self, host: &mut H) -> H::Handle {
        let handle = host.create(&self.kind);
        if !self.style.is_empty() {
            host.apply_style(handle, &self.style);
        }
        for child in &self.children {
            let child_handle = child.mount_into(host);
            host.append_child(handle, child_handle);
        }
        handle
    }
}
