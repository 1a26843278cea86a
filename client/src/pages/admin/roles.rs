//! Read-only overview of roles and how many users hold each.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use leptos::prelude::*;

use crate::state::auth::Role;
use crate::state::users::UsersState;

/// One-line summary of what a role may reach in the app.
pub(crate) fn role_description(role: Role) -> &'static str {
    match role {
        Role::User | Role::Manager => "Dashboard and own profile.",
        Role::Admin => "Everything a user can reach, plus the admin area.",
        Role::SuperAdmin => "Admin area and every permission check.",
    }
}

#[component]
pub fn AdminRolesPage() -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();

    view! {
        <div class="roles-page">
            <h1>"Roles"</h1>
            <table class="roles-page__table">
                <thead>
                    <tr>
                        <th>"Role"</th>
                        <th>"Key"</th>
                        <th>"Access"</th>
                        <th>"Users"</th>
                    </tr>
                </thead>
                <tbody>
                    {Role::ALL
                        .into_iter()
                        .map(|role| {
                            view! {
                                <tr>
                                    <td>{role.label()}</td>
                                    <td><code>{role.as_str()}</code></td>
                                    <td>{role_description(role)}</td>
                                    <td>{move || users.with(|u| u.count_by_role(role))}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
