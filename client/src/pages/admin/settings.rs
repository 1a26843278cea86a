//! Site settings editor.
//!
//! The form edits a local draft; saving validates it, merges it into the
//! shared `SiteSettings`, and re-applies the changed groups to the document.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::state::loading::LoadingState;
use crate::state::notification::{NotificationKind, NotificationState, notify};
use crate::state::settings::{
    AppearancePatch, ButtonStyle, ContainerWidth, GeneralPatch, SettingsPatch, SiteSettings, is_valid_hex_color,
};

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SettingsForm {
    pub site_name: String,
    pub site_description: String,
    pub contact_email: String,
    pub favicon: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub font_family: String,
    pub square_buttons: bool,
    pub full_width: bool,
}

impl SettingsForm {
    pub(crate) fn from_settings(s: &SiteSettings) -> Self {
        Self {
            site_name: s.general.site_name.clone(),
            site_description: s.general.site_description.clone(),
            contact_email: s.general.contact_email.clone(),
            favicon: s.general.favicon.clone().unwrap_or_default(),
            primary_color: s.appearance.primary_color.clone(),
            secondary_color: s.appearance.secondary_color.clone(),
            accent_color: s.appearance.accent_color.clone(),
            font_family: s.appearance.font_family.clone(),
            square_buttons: s.appearance.button_style == ButtonStyle::Square,
            full_width: s.appearance.container_width == ContainerWidth::Full,
        }
    }
}

/// Validate the draft and turn it into a full patch.
pub(crate) fn build_patch(form: &SettingsForm) -> Result<SettingsPatch, String> {
    let site_name = form.site_name.trim();
    if site_name.is_empty() {
        return Err("Site name is required.".to_owned());
    }
    for (label, value) in [
        ("Primary", &form.primary_color),
        ("Secondary", &form.secondary_color),
        ("Accent", &form.accent_color),
    ] {
        if !is_valid_hex_color(value.trim()) {
            return Err(format!("{label} color must look like #RRGGBB."));
        }
    }
    let favicon = form.favicon.trim();
    Ok(SettingsPatch {
        general: Some(GeneralPatch {
            site_name: Some(site_name.to_owned()),
            site_description: Some(form.site_description.trim().to_owned()),
            logo: None,
            favicon: Some((!favicon.is_empty()).then(|| favicon.to_owned())),
            contact_email: Some(form.contact_email.trim().to_owned()),
        }),
        appearance: Some(AppearancePatch {
            primary_color: Some(form.primary_color.trim().to_owned()),
            secondary_color: Some(form.secondary_color.trim().to_owned()),
            accent_color: Some(form.accent_color.trim().to_owned()),
            font_family: Some(form.font_family.trim().to_owned()),
            button_style: Some(if form.square_buttons { ButtonStyle::Square } else { ButtonStyle::Rounded }),
            container_width: Some(if form.full_width { ContainerWidth::Full } else { ContainerWidth::Contained }),
        }),
    })
}

#[component]
pub fn AdminSettingsPage() -> impl IntoView {
    let settings = expect_context::<RwSignal<SiteSettings>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let loading = expect_context::<RwSignal<LoadingState>>();

    let form = RwSignal::new(settings.with_untracked(SettingsForm::from_settings));

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let patch = match build_patch(&form.get_untracked()) {
            Ok(patch) => patch,
            Err(msg) => {
                notify(notifications, NotificationKind::Error, msg);
                return;
            }
        };
        loading.update(|l| l.start(Some("Saving settings...")));
        settings.update(|s| {
            let changes = s.update(patch);
            crate::util::document::apply_changes(s, changes);
        });
        loading.update(LoadingState::stop);
        notify(notifications, NotificationKind::Success, "Settings saved.");
    };

    let on_reset = move |_| form.set(settings.with_untracked(SettingsForm::from_settings));

    let text_field = move |label: &'static str, get: fn(&SettingsForm) -> String, set: fn(&mut SettingsForm, String)| {
        view! {
            <label class="settings-form__field">
                <span>{label}</span>
                <input
                    type="text"
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="settings-page">
            <h1>"Site Settings"</h1>
            <form class="settings-form" on:submit=on_save>
                <fieldset>
                    <legend>"General"</legend>
                    {text_field("Site name", |f| f.site_name.clone(), |f, v| f.site_name = v)}
                    {text_field("Description", |f| f.site_description.clone(), |f, v| f.site_description = v)}
                    {text_field("Contact email", |f| f.contact_email.clone(), |f, v| f.contact_email = v)}
                    {text_field("Favicon URL", |f| f.favicon.clone(), |f, v| f.favicon = v)}
                </fieldset>
                <fieldset>
                    <legend>"Appearance"</legend>
                    {text_field("Primary color", |f| f.primary_color.clone(), |f, v| f.primary_color = v)}
                    {text_field("Secondary color", |f| f.secondary_color.clone(), |f, v| f.secondary_color = v)}
                    {text_field("Accent color", |f| f.accent_color.clone(), |f, v| f.accent_color = v)}
                    {text_field("Font family", |f| f.font_family.clone(), |f, v| f.font_family = v)}
                    <label class="settings-form__field settings-form__field--check">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.square_buttons)
                            on:change=move |ev| form.update(|f| f.square_buttons = event_target_checked(&ev))
                        />
                        <span>"Square buttons"</span>
                    </label>
                    <label class="settings-form__field settings-form__field--check">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.full_width)
                            on:change=move |ev| form.update(|f| f.full_width = event_target_checked(&ev))
                        />
                        <span>"Full-width layout"</span>
                    </label>
                </fieldset>
                <div class="settings-form__actions">
                    <button class="btn" type="button" on:click=on_reset>"Reset"</button>
                    <button class="btn btn--primary" type="submit">"Save"</button>
                </div>
            </form>
        </div>
    }
}
