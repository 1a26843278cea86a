//! Authenticated page chrome: sidebar navigation and top bar.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::theme_toggle::ThemeToggle;
use crate::routes::{ADMIN_ROLES_PATH, ADMIN_SETTINGS_PATH, ADMIN_USERS_PATH, DASHBOARD_PATH, LOGIN_PATH, PROFILE_PATH};
use crate::state::auth::AuthState;
use crate::state::notification::{NotificationKind, NotificationState, notify};
use crate::state::settings::SiteSettings;

/// One sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub admin: bool,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", path: DASHBOARD_PATH, admin: false },
    NavItem { label: "Profile", path: PROFILE_PATH, admin: false },
    NavItem { label: "Site Settings", path: ADMIN_SETTINGS_PATH, admin: true },
    NavItem { label: "Users", path: ADMIN_USERS_PATH, admin: true },
    NavItem { label: "Roles", path: ADMIN_ROLES_PATH, admin: true },
];

/// Sidebar entries visible to the current user.
#[must_use]
pub fn nav_items(is_admin: bool) -> Vec<NavItem> {
    NAV_ITEMS.iter().copied().filter(|item| is_admin || !item.admin).collect()
}

/// Sidebar + header frame around authenticated pages.
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let settings = expect_context::<RwSignal<SiteSettings>>();
    let location = use_location();
    let navigate = use_navigate();

    let site_name = move || settings.with(|s| s.general.site_name.clone());
    let email = move || auth.with(|a| a.email_address().unwrap_or_default().to_owned());
    let role_label = move || auth.with(|a| a.role().map(|r| r.label()).unwrap_or_default());

    let on_logout = move |_| {
        auth.update(AuthState::logout);
        notify(notifications, NotificationKind::Info, "Signed out.");
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="dashboard-layout">
            <aside class="dashboard-layout__sidebar">
                <div class="dashboard-layout__brand">{site_name}</div>
                <nav class="dashboard-layout__nav">
                    {move || {
                        let current = location.pathname.get();
                        nav_items(auth.with(AuthState::is_admin))
                            .into_iter()
                            .map(|item| {
                                let class = if current == item.path {
                                    "dashboard-layout__link dashboard-layout__link--active"
                                } else {
                                    "dashboard-layout__link"
                                };
                                view! {
                                    <a href=item.path class=class>
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>
            </aside>
            <div class="dashboard-layout__main">
                <header class="dashboard-layout__header toolbar">
                    <span class="toolbar__spacer"></span>
                    <ThemeToggle/>
                    <span class="toolbar__self">
                        {email}
                        " ("
                        <span class="toolbar__self-role">{role_label}</span>
                        ")"
                    </span>
                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>
                <main class="dashboard-layout__content">{children()}</main>
            </div>
        </div>
    }
}
