//! Profile page for the signed-in account.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Permission names surfaced on the profile page.
const SHOWN_PERMISSIONS: &[&str] = &["users:manage", "settings:manage", "roles:manage"];

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = move || auth.with(|a| a.email_address().unwrap_or_default().to_owned());
    let role = move || auth.with(|a| a.role().map(|r| r.label()).unwrap_or_default());

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <dl class="profile-page__fields">
                <dt>"Email"</dt>
                <dd>{email}</dd>
                <dt>"Role"</dt>
                <dd>{role}</dd>
            </dl>
            <h2>"Permissions"</h2>
            <ul class="profile-page__permissions">
                {SHOWN_PERMISSIONS
                    .iter()
                    .map(|name| {
                        let granted = move || auth.with(|a| a.has_permission(name));
                        view! {
                            <li>
                                <code>{*name}</code>
                                " "
                                {move || if granted() { "granted" } else { "not granted" }}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
