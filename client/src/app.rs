//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::DashboardLayout;
use crate::components::loading_overlay::LoadingOverlay;
use crate::components::notifications::Notifications;
use crate::pages::admin::roles::AdminRolesPage;
use crate::pages::admin::settings::AdminSettingsPage;
use crate::pages::admin::users::AdminUsersPage;
use crate::pages::dashboard::DashboardHomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::state::{
    auth::AuthState, loading::LoadingState, notification::NotificationState, settings::SiteSettings,
    theme::ThemeState, users::UsersState,
};
use crate::util::guard::RouteGuard;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing. Every
/// route renders inside `RouteGuard`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let notifications = RwSignal::new(NotificationState::default());
    let loading = RwSignal::new(LoadingState::default());
    let theme = RwSignal::new(ThemeState::default());
    let settings = RwSignal::new(SiteSettings::default());
    let users = RwSignal::new(UsersState::seeded(crate::util::clock::now_ms()));

    provide_context(auth);
    provide_context(notifications);
    provide_context(loading);
    provide_context(theme);
    provide_context(settings);
    provide_context(users);

    // Browser-only startup: restore and persist the theme, then push settings
    // into the document. Effects never run during SSR.
    Effect::new(move || {
        let stored = crate::util::theme::restore();
        theme.set(ThemeState { theme: stored });
        settings.with_untracked(|s| {
            crate::util::document::apply_appearance(&s.appearance);
            crate::util::document::apply_general(&s.general);
        });
    });

    let site_name = move || settings.with(|s| s.general.site_name.clone());

    view! {
        <Stylesheet id="leptos" href="/pkg/keystone.css"/>
        <Title text=site_name/>

        <Router>
            <Notifications/>
            <LoadingOverlay/>
            <Routes fallback=|| view! { <RouteGuard><NotFoundPage/></RouteGuard> }>
                <Route path=StaticSegment("") view=|| view! { <RouteGuard>""</RouteGuard> }/>
                <Route path=StaticSegment("login") view=|| view! { <RouteGuard><LoginPage/></RouteGuard> }/>
                <Route path=StaticSegment("register") view=|| view! { <RouteGuard><RegisterPage/></RouteGuard> }/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RouteGuard><DashboardLayout><DashboardHomePage/></DashboardLayout></RouteGuard> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <RouteGuard><DashboardLayout><ProfilePage/></DashboardLayout></RouteGuard> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <RouteGuard><DashboardLayout>""</DashboardLayout></RouteGuard> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("settings"))
                    view=|| view! { <RouteGuard><DashboardLayout><AdminSettingsPage/></DashboardLayout></RouteGuard> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("users"))
                    view=|| view! { <RouteGuard><DashboardLayout><AdminUsersPage/></DashboardLayout></RouteGuard> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("roles"))
                    view=|| view! { <RouteGuard><DashboardLayout><AdminRolesPage/></DashboardLayout></RouteGuard> }
                />
            </Routes>
        </Router>
    }
}
