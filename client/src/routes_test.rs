use super::*;
use crate::state::auth::{Role, Session};

fn anonymous() -> AuthState {
    AuthState::default()
}

fn as_role(role: Role) -> AuthState {
    AuthState { session: Some(Session { email_address: "someone@example.com".to_owned(), role }) }
}

const AUTH_ONLY: RouteMeta = RouteMeta { requires_auth: true, requires_admin: false };
const ADMIN_ONLY: RouteMeta = RouteMeta { requires_auth: true, requires_admin: true };
const NO_FLAGS: RouteMeta = RouteMeta { requires_auth: false, requires_admin: false };

// =============================================================
// guard decision order
// =============================================================

#[test]
fn unauthenticated_to_auth_route_redirects_to_login() {
    assert_eq!(guard(AUTH_ONLY, DASHBOARD_PATH, &anonymous()), Navigation::Redirect(LOGIN_PATH));
}

#[test]
fn unauthenticated_to_admin_route_redirects_to_login_first() {
    assert_eq!(guard(ADMIN_ONLY, ADMIN_USERS_PATH, &anonymous()), Navigation::Redirect(LOGIN_PATH));
}

#[test]
fn non_admin_to_admin_route_redirects_to_dashboard() {
    for role in [Role::User, Role::Manager] {
        assert_eq!(
            guard(ADMIN_ONLY, ADMIN_SETTINGS_PATH, &as_role(role)),
            Navigation::Redirect(DASHBOARD_PATH)
        );
    }
}

#[test]
fn admins_reach_admin_routes() {
    for role in [Role::Admin, Role::SuperAdmin] {
        assert_eq!(guard(ADMIN_ONLY, ADMIN_ROLES_PATH, &as_role(role)), Navigation::Allow);
    }
}

#[test]
fn admin_flag_without_auth_flag_still_checks_admin() {
    let meta = RouteMeta { requires_auth: false, requires_admin: true };
    assert_eq!(guard(meta, "/odd", &anonymous()), Navigation::Redirect(DASHBOARD_PATH));
}

#[test]
fn authenticated_to_login_or_register_redirects_to_dashboard() {
    let auth = as_role(Role::User);
    assert_eq!(guard(NO_FLAGS, LOGIN_PATH, &auth), Navigation::Redirect(DASHBOARD_PATH));
    assert_eq!(guard(NO_FLAGS, REGISTER_PATH, &auth), Navigation::Redirect(DASHBOARD_PATH));
    assert_eq!(guard(NO_FLAGS, "/login/", &auth), Navigation::Redirect(DASHBOARD_PATH));
}

#[test]
fn unauthenticated_to_unflagged_route_is_allowed() {
    assert_eq!(guard(NO_FLAGS, LOGIN_PATH, &anonymous()), Navigation::Allow);
    assert_eq!(guard(NO_FLAGS, REGISTER_PATH, &anonymous()), Navigation::Allow);
    assert_eq!(guard(NO_FLAGS, "/anything", &anonymous()), Navigation::Allow);
}

#[test]
fn authenticated_to_auth_route_is_allowed() {
    assert_eq!(guard(AUTH_ONLY, PROFILE_PATH, &as_role(Role::User)), Navigation::Allow);
}

// =============================================================
// route table
// =============================================================

#[test]
fn route_table_flags_match_layout() {
    assert_eq!(meta_for(LOGIN_PATH), NO_FLAGS);
    assert_eq!(meta_for(REGISTER_PATH), NO_FLAGS);
    assert_eq!(meta_for(DASHBOARD_PATH), AUTH_ONLY);
    assert_eq!(meta_for(PROFILE_PATH), AUTH_ONLY);
    assert_eq!(meta_for(ADMIN_PATH), ADMIN_ONLY);
    assert_eq!(meta_for(ADMIN_SETTINGS_PATH), ADMIN_ONLY);
    assert_eq!(meta_for(ADMIN_USERS_PATH), ADMIN_ONLY);
    assert_eq!(meta_for(ADMIN_ROLES_PATH), ADMIN_ONLY);
}

#[test]
fn route_names_and_paths_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.path, b.path);
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn resolve_ignores_trailing_slash() {
    assert_eq!(resolve("/admin/users/").map(|r| r.name), Some("admin-users"));
    assert_eq!(resolve("").map(|r| r.name), Some("root"));
    assert!(resolve("/nope").is_none());
    assert_eq!(meta_for("/nope"), RouteMeta::default());
}

// =============================================================
// decide
// =============================================================

#[test]
fn root_aliases_to_dashboard() {
    assert_eq!(static_redirect("/"), Some(DASHBOARD_PATH));
    assert_eq!(static_redirect(DASHBOARD_PATH), None);
    assert_eq!(decide("/", &anonymous()), Navigation::Redirect(DASHBOARD_PATH));
}

#[test]
fn decide_chains_alias_then_guard() {
    // Anonymous users bounce from `/` to `/dashboard`, then on to `/login`.
    let auth = anonymous();
    let Navigation::Redirect(first) = decide("/", &auth) else { panic!("expected redirect") };
    assert_eq!(decide(first, &auth), Navigation::Redirect(LOGIN_PATH));
    assert_eq!(decide(LOGIN_PATH, &auth), Navigation::Allow);
}

#[test]
fn admin_section_root_is_guarded() {
    assert_eq!(decide("/admin", &anonymous()), Navigation::Redirect(LOGIN_PATH));
    assert_eq!(decide("/admin/", &anonymous()), Navigation::Redirect(LOGIN_PATH));
    assert_eq!(decide("/admin", &as_role(Role::Manager)), Navigation::Redirect(DASHBOARD_PATH));
    assert_eq!(decide("/admin", &as_role(Role::Admin)), Navigation::Allow);
}

#[test]
fn trailing_slash_keeps_route_flags() {
    assert_eq!(decide("/dashboard/", &anonymous()), Navigation::Redirect(LOGIN_PATH));
    assert_eq!(decide("/dashboard/", &as_role(Role::User)), Navigation::Allow);
    assert_eq!(decide("/admin/users/", &as_role(Role::User)), Navigation::Redirect(DASHBOARD_PATH));
}

#[test]
fn unknown_children_inherit_parent_flags() {
    assert_eq!(meta_for("/admin/unknown"), ADMIN_ONLY);
    assert_eq!(meta_for("/admin/users/42"), ADMIN_ONLY);
    assert_eq!(meta_for("/dashboard/extra"), AUTH_ONLY);
    assert_eq!(meta_for("/login/extra"), NO_FLAGS);
    assert_eq!(decide("/admin/unknown", &anonymous()), Navigation::Redirect(LOGIN_PATH));
}

#[test]
fn decide_unknown_path_is_allowed() {
    assert_eq!(decide("/does/not/exist", &as_role(Role::User)), Navigation::Allow);
}
