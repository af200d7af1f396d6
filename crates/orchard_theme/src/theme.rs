//! Theme definition and configuration loading
//!
//! A [`Theme`] is fully populated: every required palette and typography key
//! holds a color or size. Themes authored as data go through [`ThemeConfig`],
//! whose fields are all optional so that a missing key is reported as
//! [`ThemeError::MissingField`] instead of a generic parse failure.
//!
//! Recognized top-level keys are exactly `palette`, `typography`,
//! `borderRadius` and `spacing`. Unknown keys are ignored.

use orchard_core::Color;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, ThemeError};
use crate::presets::ThemePreset;
use crate::tokens::{Palette, PaletteRole, Typography};

/// A complete, validated theme
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Display name, informational only
    pub name: String,
    pub palette: Palette,
    pub typography: Typography,
    /// Base corner radius
    pub border_radius: f32,
    /// Base spacing unit; layouts use multiples of it
    pub spacing: f32,
}

impl Theme {
    /// Build a theme from configuration, failing on the first missing or
    /// invalid field.
    pub fn from_config(config: ThemeConfig) -> Result<Theme> {
        let palette = config
            .palette
            .ok_or(ThemeError::MissingField("palette"))?
            .into_palette()?;
        let typography = config
            .typography
            .ok_or(ThemeError::MissingField("typography"))?
            .into_typography()?;
        let border_radius = non_negative(
            "borderRadius",
            config
                .border_radius
                .ok_or(ThemeError::MissingField("borderRadius"))?,
        )?;
        let spacing = non_negative(
            "spacing",
            config.spacing.ok_or(ThemeError::MissingField("spacing"))?,
        )?;

        Ok(Theme {
            name: String::from("Custom"),
            palette,
            typography,
            border_radius,
            spacing,
        })
    }

    /// Parse and validate a theme from TOML source
    pub fn from_toml_str(source: &str) -> Result<Theme> {
        let config: ThemeConfig = toml::from_str(source)?;
        let theme = Theme::from_config(config)?;
        debug!("Theme::from_toml_str - loaded theme");
        Ok(theme)
    }

    /// Rename the theme
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Spacing scaled by `multiplier` (e.g. `space(4.0)` for `spacing * 4`)
    pub fn space(&self, multiplier: f32) -> f32 {
        self.spacing * multiplier
    }

    /// Palette color by role
    pub fn color(&self, role: PaletteRole) -> Option<Color> {
        self.palette.get(role)
    }
}

impl Default for Theme {
    fn default() -> Self {
        ThemePreset::default().theme()
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ThemeError::InvalidValue {
            field,
            reason: format!("expected a finite, non-negative number, got {value}"),
        })
    }
}

fn positive(field: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ThemeError::InvalidValue {
            field,
            reason: format!("expected a finite, positive number, got {value}"),
        })
    }
}

/// Theme as authored in a configuration source
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub palette: Option<PaletteConfig>,
    pub typography: Option<TypographyConfig>,
    #[serde(alias = "border_radius")]
    pub border_radius: Option<f32>,
    pub spacing: Option<f32>,
}

/// Palette as authored; status roles may be omitted
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteConfig {
    pub primary: Option<Color>,
    pub secondary: Option<Color>,
    pub success: Option<Color>,
    pub danger: Option<Color>,
    pub warning: Option<Color>,
    pub info: Option<Color>,
    pub default: Option<Color>,
    pub background: Option<Color>,
    pub error: Option<Color>,
    #[serde(alias = "status_bar_secondary")]
    pub status_bar_secondary: Option<Color>,
}

impl PaletteConfig {
    fn into_palette(self) -> Result<Palette> {
        Ok(Palette {
            primary: self
                .primary
                .ok_or(ThemeError::MissingField("palette.primary"))?,
            secondary: self
                .secondary
                .ok_or(ThemeError::MissingField("palette.secondary"))?,
            success: self.success,
            danger: self.danger,
            warning: self.warning,
            info: self.info,
            default: self
                .default
                .ok_or(ThemeError::MissingField("palette.default"))?,
            background: self
                .background
                .ok_or(ThemeError::MissingField("palette.background"))?,
            error: self.error.ok_or(ThemeError::MissingField("palette.error"))?,
            status_bar_secondary: self
                .status_bar_secondary
                .ok_or(ThemeError::MissingField("palette.statusBarSecondary"))?,
        })
    }
}

/// Typography as authored
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyConfig {
    #[serde(alias = "primary_color")]
    pub primary_color: Option<Color>,
    #[serde(alias = "secondary_color")]
    pub secondary_color: Option<Color>,
    #[serde(alias = "small_font_size")]
    pub small_font_size: Option<f32>,
    #[serde(alias = "icon_size")]
    pub icon_size: Option<f32>,
}

impl TypographyConfig {
    fn into_typography(self) -> Result<Typography> {
        Ok(Typography {
            primary_color: self
                .primary_color
                .ok_or(ThemeError::MissingField("typography.primaryColor"))?,
            secondary_color: self
                .secondary_color
                .ok_or(ThemeError::MissingField("typography.secondaryColor"))?,
            small_font_size: positive(
                "typography.smallFontSize",
                self.small_font_size
                    .ok_or(ThemeError::MissingField("typography.smallFontSize"))?,
            )?,
            icon_size: positive(
                "typography.iconSize",
                self.icon_size
                    .ok_or(ThemeError::MissingField("typography.iconSize"))?,
            )?,
        })
    }
}
