//! Palette tokens for theming

use orchard_core::Color;

/// Semantic palette role keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum PaletteRole {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Default,
    Background,
    Error,
    StatusBarSecondary,
}

impl PaletteRole {
    /// Key used for this role in theme files
    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Default => "default",
            Self::Background => "background",
            Self::Error => "error",
            Self::StatusBarSecondary => "statusBarSecondary",
        }
    }

    /// Whether a theme may leave this role unset
    ///
    /// Components reading an optional role carry their own literal fallback.
    pub fn is_optional(self) -> bool {
        matches!(
            self,
            Self::Success | Self::Danger | Self::Warning | Self::Info
        )
    }
}

/// Complete set of palette colors
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,

    // Status colors, optional per theme
    pub success: Option<Color>,
    pub danger: Option<Color>,
    pub warning: Option<Color>,
    pub info: Option<Color>,

    pub default: Color,
    pub background: Color,
    pub error: Color,
    pub status_bar_secondary: Color,
}

impl Palette {
    /// Get a color by role; `None` only for an unset optional role
    pub fn get(&self, role: PaletteRole) -> Option<Color> {
        match role {
            PaletteRole::Primary => Some(self.primary),
            PaletteRole::Secondary => Some(self.secondary),
            PaletteRole::Success => self.success,
            PaletteRole::Danger => self.danger,
            PaletteRole::Warning => self.warning,
            PaletteRole::Info => self.info,
            PaletteRole::Default => Some(self.default),
            PaletteRole::Background => Some(self.background),
            PaletteRole::Error => Some(self.error),
            PaletteRole::StatusBarSecondary => Some(self.status_bar_secondary),
        }
    }
}
