//! Built-in theme presets.

use std::fmt::{Display, Formatter};

use orchard_core::Color;

use crate::theme::Theme;
use crate::tokens::{Palette, Typography};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Light brand theme. Leaves the status roles unset, so components use
    /// their literal fallbacks.
    #[default]
    Orange,
    /// Dark theme with every palette role defined.
    Midnight,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Orange => "orange",
            Self::Midnight => "midnight",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Orange => "Orange",
            Self::Midnight => "Midnight",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 2] = [ThemePreset::Orange, ThemePreset::Midnight];
        &PRESETS
    }

    /// Look a preset up by id, ignoring ASCII case.
    pub fn from_id(id: &str) -> Option<ThemePreset> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id().eq_ignore_ascii_case(id.trim()))
    }

    /// Build the theme for this preset.
    pub fn theme(self) -> Theme {
        match self {
            Self::Orange => orange(),
            Self::Midnight => midnight(),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

fn orange() -> Theme {
    Theme {
        name: ThemePreset::Orange.display_name().into(),
        palette: Palette {
            primary: Color::from_hex(0xF28C38),
            secondary: Color::from_hex(0x76BC21),
            success: None,
            danger: None,
            warning: None,
            info: None,
            default: Color::from_hex(0xEEEEEE),
            background: Color::WHITE,
            error: Color::from_hex(0xE53935),
            status_bar_secondary: Color::from_hex(0xE95E0F),
        },
        typography: Typography {
            primary_color: Color::WHITE,
            secondary_color: Color::from_hex(0x64728C),
            small_font_size: 12.0,
            icon_size: 22.0,
        },
        border_radius: 4.0,
        spacing: 4.0,
    }
}

fn midnight() -> Theme {
    Theme {
        name: ThemePreset::Midnight.display_name().into(),
        palette: Palette {
            primary: Color::from_hex(0xFF7B1D),
            secondary: Color::from_hex(0x8BC34A),
            success: Some(Color::from_hex(0x2E7D32)),
            danger: Some(Color::from_hex(0xC62828)),
            warning: Some(Color::from_hex(0xF9A825)),
            info: Some(Color::from_hex(0x0288D1)),
            default: Color::from_hex(0x2C2F36),
            background: Color::from_hex(0x15171C),
            error: Color::from_hex(0xEF5350),
            status_bar_secondary: Color::from_hex(0x0F1115),
        },
        typography: Typography {
            primary_color: Color::WHITE,
            secondary_color: Color::from_hex(0xC7CCD6),
            small_font_size: 12.0,
            icon_size: 22.0,
        },
        border_radius: 6.0,
        spacing: 4.0,
    }
}
