use super::*;

fn prop<'a>(props: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
    props.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_shipped_branding() {
    let s = SiteSettings::default();
    assert_eq!(s.general.site_name, "Keystone");
    assert_eq!(s.general.contact_email, "admin@example.com");
    assert!(s.general.logo.is_none());
    assert_eq!(s.appearance.primary_color, "#10B981");
    assert_eq!(s.appearance.secondary_color, "#374151");
    assert_eq!(s.appearance.accent_color, "#3B82F6");
    assert_eq!(s.appearance.font_family, "Inter");
    assert_eq!(s.appearance.button_style, ButtonStyle::Rounded);
    assert_eq!(s.appearance.container_width, ContainerWidth::Contained);
}

// =============================================================
// is_valid_hex_color
// =============================================================

#[test]
fn hex_color_accepts_six_digits_any_case() {
    assert!(is_valid_hex_color("#10B981"));
    assert!(is_valid_hex_color("#abcdef"));
    assert!(is_valid_hex_color("#AbCdEf"));
}

#[test]
fn hex_color_rejects_malformed_values() {
    for bad in ["10B981", "#10B98", "#10B9811", "#GGGGGG", "", "#", "red", "# 10B98"] {
        assert!(!is_valid_hex_color(bad), "{bad:?} should be rejected");
    }
}

// =============================================================
// style_properties
// =============================================================

#[test]
fn style_properties_for_defaults() {
    let props = style_properties(&AppearanceSettings::default());
    assert_eq!(prop(&props, "--color-primary"), Some("#10B981"));
    assert_eq!(prop(&props, "--tw-color-jade-600"), Some("#10B981"));
    assert_eq!(prop(&props, "--tw-text-opacity"), Some("1"));
    assert_eq!(prop(&props, "--tw-bg-opacity"), Some("1"));
    assert_eq!(prop(&props, "--color-secondary"), Some("#374151"));
    assert_eq!(prop(&props, "--color-accent"), Some("#3B82F6"));
    assert_eq!(prop(&props, "--font-family"), Some("Inter"));
    assert_eq!(prop(&props, "--button-radius"), Some("0.375rem"));
    assert_eq!(prop(&props, "--container-max-width"), Some("1280px"));
}

#[test]
fn style_properties_skip_invalid_colors() {
    let appearance = AppearanceSettings {
        primary_color: "#12".to_owned(),
        accent_color: "blue".to_owned(),
        ..AppearanceSettings::default()
    };
    let props = style_properties(&appearance);
    assert_eq!(prop(&props, "--color-primary"), None);
    assert_eq!(prop(&props, "--tw-color-jade-600"), None);
    assert_eq!(prop(&props, "--color-accent"), None);
    assert_eq!(prop(&props, "--color-secondary"), Some("#374151"));
    assert_eq!(prop(&props, "--font-family"), Some("Inter"));
}

#[test]
fn style_properties_square_and_full_width() {
    let appearance = AppearanceSettings {
        button_style: ButtonStyle::Square,
        container_width: ContainerWidth::Full,
        ..AppearanceSettings::default()
    };
    let props = style_properties(&appearance);
    assert_eq!(prop(&props, "--button-radius"), Some("0.125rem"));
    assert_eq!(prop(&props, "--container-max-width"), Some("100%"));
}

// =============================================================
// update
// =============================================================

#[test]
fn update_merges_appearance_fields() {
    let mut s = SiteSettings::default();
    let changes = s.update(SettingsPatch {
        appearance: Some(AppearancePatch { primary_color: Some("#000000".to_owned()), ..Default::default() }),
        general: None,
    });
    assert_eq!(changes, SettingsChanges { general: false, appearance: true });
    assert_eq!(s.appearance.primary_color, "#000000");
    assert_eq!(s.appearance.accent_color, "#3B82F6");
    assert_eq!(s.general, GeneralSettings::default());
}

#[test]
fn update_merges_general_fields_and_clears_optionals() {
    let mut s = SiteSettings::default();
    s.update(SettingsPatch {
        general: Some(GeneralPatch {
            site_name: Some("Acme".to_owned()),
            favicon: Some(Some("/favicon.ico".to_owned())),
            ..Default::default()
        }),
        appearance: None,
    });
    assert_eq!(s.general.site_name, "Acme");
    assert_eq!(s.general.favicon.as_deref(), Some("/favicon.ico"));
    assert_eq!(s.general.contact_email, "admin@example.com");

    let changes = s.update(SettingsPatch {
        general: Some(GeneralPatch { favicon: Some(None), ..Default::default() }),
        appearance: None,
    });
    assert!(changes.general);
    assert!(s.general.favicon.is_none());
    assert_eq!(s.general.site_name, "Acme");
}

#[test]
fn empty_patch_changes_nothing() {
    let mut s = SiteSettings::default();
    assert_eq!(s.update(SettingsPatch::default()), SettingsChanges::default());
    assert_eq!(s, SiteSettings::default());
}

#[test]
fn enums_serialize_snake_case() {
    assert_eq!(serde_json::to_string(&ButtonStyle::Square).unwrap(), "\"square\"");
    assert_eq!(serde_json::to_string(&ContainerWidth::Contained).unwrap(), "\"contained\"");
}
