//! Icon component
//!
//! Names a glyph in one of the bundled icon font families. Unknown family
//! names fall back to Material Community Icons, and a glyph the chosen
//! family cannot resolve is retried there before giving up.

use std::sync::Arc;

use orchard_core::Color;
use orchard_theme::Theme;
use tracing::debug;

use crate::host::GlyphResolver;
use crate::injection::ThemedComponent;
use crate::node::{Node, NodeKind, StyleBag, StyleProp};

/// Glyph used when none is named
pub const DEFAULT_GLYPH: &str = "home";

/// Bundled icon font families
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IconFamily {
    #[default]
    MaterialCommunityIcons,
    FontAwesome,
    FontAwesome5,
    Ionicons,
    MaterialIcons,
    Entypo,
    Feather,
    AntDesign,
    SimpleLineIcons,
    Octicons,
    Zocial,
    Foundation,
    EvilIcons,
    Fontisto,
}

impl IconFamily {
    pub const ALL: [IconFamily; 14] = [
        IconFamily::MaterialCommunityIcons,
        IconFamily::FontAwesome,
        IconFamily::FontAwesome5,
        IconFamily::Ionicons,
        IconFamily::MaterialIcons,
        IconFamily::Entypo,
        IconFamily::Feather,
        IconFamily::AntDesign,
        IconFamily::SimpleLineIcons,
        IconFamily::Octicons,
        IconFamily::Zocial,
        IconFamily::Foundation,
        IconFamily::EvilIcons,
        IconFamily::Fontisto,
    ];

    /// Family name as used by icon fonts
    pub fn name(self) -> &'static str {
        match self {
            IconFamily::MaterialCommunityIcons => "MaterialCommunityIcons",
            IconFamily::FontAwesome => "FontAwesome",
            IconFamily::FontAwesome5 => "FontAwesome5",
            IconFamily::Ionicons => "Ionicons",
            IconFamily::MaterialIcons => "MaterialIcons",
            IconFamily::Entypo => "Entypo",
            IconFamily::Feather => "Feather",
            IconFamily::AntDesign => "AntDesign",
            IconFamily::SimpleLineIcons => "SimpleLineIcons",
            IconFamily::Octicons => "Octicons",
            IconFamily::Zocial => "Zocial",
            IconFamily::Foundation => "Foundation",
            IconFamily::EvilIcons => "EvilIcons",
            IconFamily::Fontisto => "Fontisto",
        }
    }

    /// Exact lookup by family name
    pub fn lookup(name: &str) -> Option<IconFamily> {
        Self::ALL.into_iter().find(|family| family.name() == name)
    }

    /// Lookup with fallback to the default family
    pub fn from_name(name: &str) -> IconFamily {
        Self::lookup(name).unwrap_or_else(|| {
            debug!("IconFamily::from_name - unknown family {name:?}, using MaterialCommunityIcons");
            IconFamily::default()
        })
    }
}

/// Resolved color and size of an icon
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconStyle {
    pub color: Color,
    pub size: f32,
}

/// A glyph found by the host resolver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedGlyph {
    /// Family that actually holds the glyph
    pub family: IconFamily,
    pub glyph: char,
}

/// Icon glyph
#[derive(Clone)]
pub struct Icon {
    family: IconFamily,
    name: String,
    color: Option<Color>,
    size: Option<f32>,
    resolver: Option<Arc<dyn GlyphResolver + Send + Sync>>,
}

impl Icon {
    /// Icon named `name`; an empty name means [`DEFAULT_GLYPH`]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            family: IconFamily::default(),
            name: if name.is_empty() {
                DEFAULT_GLYPH.to_string()
            } else {
                name
            },
            color: None,
            size: None,
            resolver: None,
        }
    }

    pub fn family(mut self, family: IconFamily) -> Self {
        self.family = family;
        self
    }

    /// Family by name, falling back to the default family
    pub fn family_name(mut self, name: &str) -> Self {
        self.family = IconFamily::from_name(name);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Host glyph lookup used at render time
    pub fn resolver(mut self, resolver: Arc<dyn GlyphResolver + Send + Sync>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn glyph_name(&self) -> &str {
        &self.name
    }

    pub fn icon_family(&self) -> IconFamily {
        self.family
    }

    pub fn resolve_style(&self, theme: &Theme) -> IconStyle {
        IconStyle {
            color: self.color.unwrap_or(theme.typography.primary_color),
            size: self.size.unwrap_or(theme.typography.icon_size),
        }
    }

    /// Look the glyph up, retrying in the default family
    pub fn resolve_glyph(&self, resolver: &dyn GlyphResolver) -> Option<ResolvedGlyph> {
        let fallback = IconFamily::default();
        if let Some(glyph) = resolver.resolve_glyph(self.family, &self.name) {
            return Some(ResolvedGlyph {
                family: self.family,
                glyph,
            });
        }
        if self.family == fallback {
            debug!("Icon::resolve_glyph - no glyph {:?}", self.name);
            return None;
        }
        let glyph = resolver.resolve_glyph(fallback, &self.name);
        debug!(
            "Icon::resolve_glyph - {:?} missing from {}, fallback found={}",
            self.name,
            self.family.name(),
            glyph.is_some()
        );
        glyph.map(|glyph| ResolvedGlyph {
            family: fallback,
            glyph,
        })
    }

    /// Render with an explicit style
    pub(crate) fn render_styled(&self, style: IconStyle) -> Node {
        let resolved = self
            .resolver
            .as_deref()
            .and_then(|resolver| self.resolve_glyph(resolver));

        Node::new(NodeKind::Icon {
            family: resolved.map_or(self.family, |r| r.family),
            name: self.name.clone(),
            glyph: resolved.map(|r| r.glyph),
        })
        .style(
            StyleBag::new()
                .with(StyleProp::Color, style.color)
                .with(StyleProp::FontSize, style.size),
        )
    }
}

impl ThemedComponent for Icon {
    type Output = Node;

    fn render(&self, theme: &Theme) -> Node {
        self.render_styled(self.resolve_style(theme))
    }
}

impl std::fmt::Debug for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Icon")
            .field("family", &self.family)
            .field("name", &self.name)
            .field("color", &self.color)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Create an icon
pub fn icon(name: impl Into<String>) -> Icon {
    Icon::new(name)
}
