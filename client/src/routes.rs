//! Static route table and the pre-navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` registers one Leptos route per [`RouteDescriptor`]; every routed
//! page is wrapped in `util::guard::RouteGuard`, which feeds the current path
//! and auth state through [`guard`] on each navigation.
//!
//! DESIGN
//! ======
//! The guard is a pure function of (route metadata, session) so it can be
//! tested without a browser or a reactive runtime.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::auth::AuthState;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const PROFILE_PATH: &str = "/profile";
pub const ADMIN_PATH: &str = "/admin";
pub const ADMIN_SETTINGS_PATH: &str = "/admin/settings";
pub const ADMIN_USERS_PATH: &str = "/admin/users";
pub const ADMIN_ROLES_PATH: &str = "/admin/roles";

/// Static route entry consumed by the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteDescriptor {
    const fn public(path: &'static str, name: &'static str) -> Self {
        Self { path, name, requires_auth: false, requires_admin: false }
    }

    const fn authed(path: &'static str, name: &'static str) -> Self {
        Self { path, name, requires_auth: true, requires_admin: false }
    }

    const fn admin(path: &'static str, name: &'static str) -> Self {
        Self { path, name, requires_auth: true, requires_admin: true }
    }

    #[must_use]
    pub fn meta(&self) -> RouteMeta {
        RouteMeta { requires_auth: self.requires_auth, requires_admin: self.requires_admin }
    }
}

/// Every route the application knows about.
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::public(ROOT_PATH, "root"),
    RouteDescriptor::public(LOGIN_PATH, "login"),
    RouteDescriptor::public(REGISTER_PATH, "register"),
    RouteDescriptor::authed(DASHBOARD_PATH, "dashboard"),
    RouteDescriptor::authed(PROFILE_PATH, "profile"),
    RouteDescriptor::admin(ADMIN_PATH, "admin"),
    RouteDescriptor::admin(ADMIN_SETTINGS_PATH, "admin-settings"),
    RouteDescriptor::admin(ADMIN_USERS_PATH, "admin-users"),
    RouteDescriptor::admin(ADMIN_ROLES_PATH, "admin-roles"),
];

/// Access flags for a navigation target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

/// Guard outcome for a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Allow,
    Redirect(&'static str),
}

/// Strip a trailing slash so `/dashboard/` and `/dashboard` match.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { ROOT_PATH } else { trimmed }
}

/// Look up the descriptor for an exact path.
#[must_use]
pub fn resolve(path: &str) -> Option<&'static RouteDescriptor> {
    let path = normalize_path(path);
    ROUTES.iter().find(|r| r.path == path)
}

/// Metadata for `path`. Unknown paths inherit the flags of their nearest
/// known parent (`/admin/x` is guarded like `/admin`); paths with no known
/// parent below `/` carry no flags.
#[must_use]
pub fn meta_for(path: &str) -> RouteMeta {
    let mut path = normalize_path(path);
    while path != ROOT_PATH {
        if let Some(route) = resolve(path) {
            return route.meta();
        }
        path = match path.rfind('/') {
            Some(0) | None => return RouteMeta::default(),
            Some(idx) => &path[..idx],
        };
    }
    RouteMeta::default()
}

/// Unconditional path aliases applied before the guard.
#[must_use]
pub fn static_redirect(path: &str) -> Option<&'static str> {
    (normalize_path(path) == ROOT_PATH).then_some(DASHBOARD_PATH)
}

/// Decide whether navigation to `path` may proceed. First match wins:
///
/// 1. auth required and no session: `/login`
/// 2. admin required and not admin: `/dashboard`
/// 3. signed in and heading to login/register: `/dashboard`
/// 4. allow
#[must_use]
pub fn guard(meta: RouteMeta, path: &str, auth: &AuthState) -> Navigation {
    if meta.requires_auth && !auth.is_authenticated() {
        return Navigation::Redirect(LOGIN_PATH);
    }
    if meta.requires_admin && !auth.is_admin() {
        return Navigation::Redirect(DASHBOARD_PATH);
    }
    let path = normalize_path(path);
    if auth.is_authenticated() && (path == LOGIN_PATH || path == REGISTER_PATH) {
        return Navigation::Redirect(DASHBOARD_PATH);
    }
    Navigation::Allow
}

/// Full navigation decision for a raw location path: static aliases first,
/// then the guard against the resolved metadata.
#[must_use]
pub fn decide(path: &str, auth: &AuthState) -> Navigation {
    if let Some(target) = static_redirect(path) {
        return Navigation::Redirect(target);
    }
    guard(meta_for(path), path, auth)
}
