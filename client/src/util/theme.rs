//! Theme initialization, application and toggle.
//!
//! Reads the preference from `localStorage["theme"]` (falling back to the
//! system color scheme) and keeps exactly one of the `light` / `dark` classes
//! on the `<html>` element. Startup restore and toggle write back to
//! `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::{Theme, initial_theme};

use super::storage;

/// `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

/// Read the startup theme.
pub fn read_preference() -> Theme {
    let stored = storage::load_string(STORAGE_KEY);
    initial_theme(stored.as_deref(), system_prefers_dark())
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Swap the theme class on `<html>`.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let class_list = el.class_list();
            let _ = class_list.remove_2("light", "dark");
            let _ = class_list.add_1(theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Apply `theme` and persist it.
pub fn store(theme: Theme) {
    apply(theme);
    storage::save_string(STORAGE_KEY, theme.as_str());
}

/// Resolve the startup theme, then apply and persist it so the stored key
/// always reflects the theme in use.
pub fn restore() -> Theme {
    let theme = read_preference();
    store(theme);
    theme
}

/// Flip the theme, apply and persist it, and return the new value.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    store(next);
    log::debug!("theme set to {next}");
    next
}
