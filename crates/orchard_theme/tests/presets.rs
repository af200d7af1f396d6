use orchard_core::Color;
use orchard_theme::{PaletteRole, ThemePreset};
use pretty_assertions::assert_eq;

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["midnight", "orange"]);
}

#[test]
fn presets_resolve_by_id() {
    for preset in ThemePreset::all() {
        assert_eq!(ThemePreset::from_id(preset.id()), Some(*preset));
    }
    assert_eq!(ThemePreset::from_id(" ORANGE "), Some(ThemePreset::Orange));
    assert_eq!(ThemePreset::from_id("solarized"), None);
}

#[test]
fn presets_define_every_required_role() {
    let required = [
        PaletteRole::Primary,
        PaletteRole::Secondary,
        PaletteRole::Default,
        PaletteRole::Background,
        PaletteRole::Error,
        PaletteRole::StatusBarSecondary,
    ];
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        for role in required {
            assert!(
                theme.color(role).is_some(),
                "preset={preset:?} role={role:?}"
            );
        }
        assert!(theme.typography.small_font_size > 0.0);
        assert!(theme.typography.icon_size > 0.0);
    }
}

#[test]
fn orange_leaves_status_roles_to_component_fallbacks() {
    let theme = ThemePreset::Orange.theme();
    for role in [
        PaletteRole::Success,
        PaletteRole::Danger,
        PaletteRole::Warning,
        PaletteRole::Info,
    ] {
        assert_eq!(theme.color(role), None, "role={role:?}");
    }
}

#[test]
fn presets_keep_text_readable_on_role_fills() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        assert_ne!(
            theme.typography.primary_color, theme.palette.primary,
            "preset={preset:?}"
        );
        assert_ne!(theme.palette.primary, Color::TRANSPARENT);
    }
}

#[test]
fn default_theme_is_the_default_preset() {
    assert_eq!(orchard_theme::Theme::default(), ThemePreset::default().theme());
    assert_eq!(ThemePreset::default().to_string(), "Orange");
}
