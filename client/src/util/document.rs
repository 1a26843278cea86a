//! Applies site settings to the live document.
//!
//! SYSTEM CONTEXT
//! ==============
//! The settings store is plain data; this module pushes it into the DOM:
//! CSS custom properties on `<html>`, `document.title`, and the favicon link.

use crate::state::settings::{AppearanceSettings, GeneralSettings, SettingsChanges, SiteSettings, style_properties};

/// Write every appearance-derived custom property onto `<html>`.
pub fn apply_appearance(appearance: &AppearanceSettings) {
    let props = style_properties(appearance);
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let style = el.style();
        for (name, value) in &props {
            let _ = style.set_property(name, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = props;
    }
}

/// Sync the document title and, when configured, the favicon.
pub fn apply_general(general: &GeneralSettings) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        doc.set_title(&general.site_name);

        let Some(href) = general.favicon.as_deref() else {
            return;
        };
        let link = doc
            .query_selector("link[rel*='icon']")
            .ok()
            .flatten()
            .or_else(|| doc.create_element("link").ok())
            .and_then(|e| e.dyn_into::<web_sys::HtmlLinkElement>().ok());
        if let (Some(link), Some(head)) = (link, doc.head()) {
            link.set_type("image/x-icon");
            link.set_rel("shortcut icon");
            link.set_href(href);
            let _ = head.append_child(&link);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = general;
    }
}

/// Re-apply whichever groups an update touched.
pub fn apply_changes(settings: &SiteSettings, changes: SettingsChanges) {
    if changes.appearance {
        apply_appearance(&settings.appearance);
    }
    if changes.general {
        apply_general(&settings.general);
    }
}
