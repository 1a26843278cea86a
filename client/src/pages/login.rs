//! Email + password sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::{DASHBOARD_PATH, REGISTER_PATH};
use crate::state::auth::{AuthError, AuthState, Session};
use crate::state::notification::{NotificationKind, NotificationState, notify};

/// Toast to show after a sign-in or registration attempt.
pub(crate) fn auth_notice(result: &Result<Session, AuthError>) -> (NotificationKind, String) {
    match result {
        Ok(session) => (NotificationKind::Success, format!("Welcome, {}!", session.email_address)),
        Err(e) => (NotificationKind::Error, e.to_string()),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut result = None;
        auth.update(|a| result = Some(a.login(&email.get_untracked(), &password.get_untracked())));
        let Some(result) = result else {
            return;
        };
        let (kind, message) = auth_notice(&result);
        notify(notifications, kind, message);
        if result.is_ok() {
            password.set(String::new());
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <p class="login-card__subtitle">"Use your email address and password"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No account? "
                    <a href=REGISTER_PATH>"Register"</a>
                </p>
            </div>
        </div>
    }
}
