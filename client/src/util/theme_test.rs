#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_light_outside_browser() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn restore_resolves_and_persists_startup_theme() {
    assert_eq!(restore(), read_preference());
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn apply_and_store_are_noops_but_callable() {
    apply(Theme::Dark);
    store(Theme::Light);
}
