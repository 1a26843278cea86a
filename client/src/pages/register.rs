//! Account registration page. New accounts always start as plain users.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::pages::login::auth_notice;
use crate::routes::{DASHBOARD_PATH, LOGIN_PATH};
use crate::state::auth::AuthState;
use crate::state::notification::{NotificationKind, NotificationState, notify};

/// Shortest password the form accepts.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Form-level checks that run before the authenticator sees anything.
pub(crate) fn validate_register_input(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let password_value = password.get_untracked();
        if let Err(msg) = validate_register_input(&password_value, &confirm.get_untracked()) {
            notify(notifications, NotificationKind::Warning, msg);
            return;
        }
        let mut result = None;
        auth.update(|a| result = Some(a.register(&email.get_untracked(), &password_value)));
        let Some(result) = result else {
            return;
        };
        let (kind, message) = auth_notice(&result);
        notify(notifications, kind, message);
        if result.is_ok() {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create account"</h1>
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
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Register"
                    </button>
                </form>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href=LOGIN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
