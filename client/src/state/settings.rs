//! Site-wide branding and appearance settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Edited on the admin settings page. Appearance values become CSS custom
//! properties on `<html>` (see `util::document`); general values drive the
//! document title and favicon.
//!
//! DESIGN
//! ======
//! Updates are partial: a [`SettingsPatch`] carries only the fields that
//! changed, and each group is merged field by field.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

/// Identity and contact details for the site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSettings {
    pub site_name: String,
    pub site_description: String,
    pub logo: Option<String>,
    pub favicon: Option<String>,
    pub contact_email: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            site_name: "Keystone".to_owned(),
            site_description: "A Leptos admin dashboard starter".to_owned(),
            logo: None,
            favicon: None,
            contact_email: "admin@example.com".to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    #[default]
    Rounded,
    Square,
}

impl ButtonStyle {
    #[must_use]
    pub fn radius(self) -> &'static str {
        match self {
            ButtonStyle::Rounded => "0.375rem",
            ButtonStyle::Square => "0.125rem",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerWidth {
    Full,
    #[default]
    Contained,
}

impl ContainerWidth {
    #[must_use]
    pub fn max_width(self) -> &'static str {
        match self {
            ContainerWidth::Full => "100%",
            ContainerWidth::Contained => "1280px",
        }
    }
}

/// Colors, typography and layout knobs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceSettings {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub font_family: String,
    pub button_style: ButtonStyle,
    pub container_width: ContainerWidth,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            primary_color: "#10B981".to_owned(),
            secondary_color: "#374151".to_owned(),
            accent_color: "#3B82F6".to_owned(),
            font_family: "Inter".to_owned(),
            button_style: ButtonStyle::Rounded,
            container_width: ContainerWidth::Contained,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub general: GeneralSettings,
    pub appearance: AppearanceSettings,
}

/// Sparse update for [`GeneralSettings`]. `Some(None)` clears an optional
/// field; `None` leaves it alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralPatch {
    pub site_name: Option<String>,
    pub site_description: Option<String>,
    pub logo: Option<Option<String>>,
    pub favicon: Option<Option<String>>,
    pub contact_email: Option<String>,
}

/// Sparse update for [`AppearanceSettings`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearancePatch {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub accent_color: Option<String>,
    pub font_family: Option<String>,
    pub button_style: Option<ButtonStyle>,
    pub container_width: Option<ContainerWidth>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub general: Option<GeneralPatch>,
    pub appearance: Option<AppearancePatch>,
}

/// Which groups an update touched, so callers only re-apply what changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettingsChanges {
    pub general: bool,
    pub appearance: bool,
}

impl SiteSettings {
    /// Merge `patch` into the current settings.
    pub fn update(&mut self, patch: SettingsPatch) -> SettingsChanges {
        let mut changes = SettingsChanges::default();
        if let Some(p) = patch.appearance {
            let a = &mut self.appearance;
            merge(&mut a.primary_color, p.primary_color);
            merge(&mut a.secondary_color, p.secondary_color);
            merge(&mut a.accent_color, p.accent_color);
            merge(&mut a.font_family, p.font_family);
            merge(&mut a.button_style, p.button_style);
            merge(&mut a.container_width, p.container_width);
            changes.appearance = true;
        }
        if let Some(p) = patch.general {
            let g = &mut self.general;
            merge(&mut g.site_name, p.site_name);
            merge(&mut g.site_description, p.site_description);
            merge(&mut g.logo, p.logo);
            merge(&mut g.favicon, p.favicon);
            merge(&mut g.contact_email, p.contact_email);
            changes.general = true;
        }
        changes
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// `#` followed by exactly six hex digits, either case.
#[must_use]
pub fn is_valid_hex_color(color: &str) -> bool {
    color
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// CSS custom properties derived from `appearance`, in application order.
///
/// Invalid colors are skipped so a half-typed value never blanks the palette.
#[must_use]
pub fn style_properties(appearance: &AppearanceSettings) -> Vec<(&'static str, String)> {
    let mut props = Vec::with_capacity(9);
    if is_valid_hex_color(&appearance.primary_color) {
        props.push(("--color-primary", appearance.primary_color.clone()));
        props.push(("--tw-color-jade-600", appearance.primary_color.clone()));
        props.push(("--tw-text-opacity", "1".to_owned()));
        props.push(("--tw-bg-opacity", "1".to_owned()));
    }
    if is_valid_hex_color(&appearance.secondary_color) {
        props.push(("--color-secondary", appearance.secondary_color.clone()));
    }
    if is_valid_hex_color(&appearance.accent_color) {
        props.push(("--color-accent", appearance.accent_color.clone()));
    }
    props.push(("--font-family", appearance.font_family.clone()));
    props.push(("--button-radius", appearance.button_style.radius().to_owned()));
    props.push(("--container-max-width", appearance.container_width.max_width().to_owned()));
    props
}
