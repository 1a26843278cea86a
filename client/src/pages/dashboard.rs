//! Dashboard landing page: account summary and directory stats.

use leptos::prelude::*;

use crate::state::auth::{AuthState, Role};
use crate::state::settings::SiteSettings;
use crate::state::users::{UserStatus, UsersState};

#[component]
pub fn DashboardHomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let settings = expect_context::<RwSignal<SiteSettings>>();

    let greeting = move || {
        auth.with(|a| a.email_address().map_or_else(|| "Welcome".to_owned(), |e| format!("Welcome back, {e}")))
    };
    let total_users = move || users.with(|u| u.items.len());
    let active_users = move || users.with(|u| u.items.iter().filter(|x| x.status == UserStatus::Active).count());
    let admin_users = move || users.with(|u| u.count_by_role(Role::Admin) + u.count_by_role(Role::SuperAdmin));

    view! {
        <div class="dashboard-page">
            <h1 class="dashboard-page__title">{greeting}</h1>
            <p class="dashboard-page__subtitle">{move || settings.with(|s| s.general.site_description.clone())}</p>
            <div class="dashboard-page__cards">
                <div class="stat-card">
                    <span class="stat-card__label">"Users"</span>
                    <span class="stat-card__value">{total_users}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Active"</span>
                    <span class="stat-card__value">{active_users}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Administrators"</span>
                    <span class="stat-card__value">{admin_users}</span>
                </div>
            </div>
            <Show when=move || auth.with(AuthState::is_admin)>
                <p class="dashboard-page__hint">"You have access to the admin area from the sidebar."</p>
            </Show>
        </div>
    }
}
