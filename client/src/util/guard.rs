//! Navigation guard wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page renders inside [`RouteGuard`], so each location change
//! is checked against `routes::decide` before the page content shows.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::{Navigation, decide};
use crate::state::auth::AuthState;

/// Re-run the guard whenever the path or auth state changes and follow any
/// redirect it returns.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, path: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = path.get();
        let decision = auth.with(|state| decide(&path, state));
        if let Navigation::Redirect(target) = decision {
            log::debug!("guard redirect {path} -> {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Renders `children` only while the guard allows the current location.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let path = location.pathname;
    install_route_guard(auth, path, use_navigate());

    let allowed = move || {
        let path = path.get();
        auth.with(|state| decide(&path, state)) == Navigation::Allow
    };

    view! {
        <Show when=allowed fallback=|| view! { <div class="route-guard__pending"></div> }>
            {children()}
        </Show>
    }
}
