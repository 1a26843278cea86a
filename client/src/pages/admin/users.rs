//! User directory management.

use leptos::prelude::*;

use crate::state::auth::{AuthState, Role};
use crate::state::notification::{NotificationKind, NotificationState, notify};
use crate::state::users::{CreateUserData, UserStatus, UsersState};
use crate::util::clock::now_ms;

/// Permission required to delete accounts.
const DELETE_PERMISSION: &str = "users:delete";

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();

    let draft = RwSignal::new(CreateUserData::default());
    let can_delete = move || auth.with(|a| a.has_permission(DELETE_PERMISSION));

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let data = draft.get_untracked();
        let mut result = None;
        users.update(|u| result = Some(u.create(data, now_ms())));
        match result {
            Some(Ok(_)) => {
                draft.set(CreateUserData::default());
                notify(notifications, NotificationKind::Success, "User created.");
            }
            Some(Err(e)) => notify(notifications, NotificationKind::Error, e.to_string()),
            None => {}
        }
    };

    let toggle_status = move |id: String, current: UserStatus| {
        let mut result = Ok(());
        users.update(|u| result = u.set_status(&id, current.toggled(), now_ms()));
        if let Err(e) = result {
            notify(notifications, NotificationKind::Error, e.to_string());
        }
    };

    let change_role = move |id: String, role: Role| {
        let mut result = Ok(());
        users.update(|u| result = u.set_role(&id, role, now_ms()));
        match result {
            Ok(()) => notify(notifications, NotificationKind::Success, format!("Role set to {}.", role.label())),
            Err(e) => notify(notifications, NotificationKind::Error, e.to_string()),
        }
    };

    let delete_user = move |id: String| {
        let mut result = None;
        users.update(|u| result = Some(u.remove(&id)));
        match result {
            Some(Ok(user)) => notify(notifications, NotificationKind::Info, format!("Removed {}.", user.email)),
            Some(Err(e)) => notify(notifications, NotificationKind::Error, e.to_string()),
            None => {}
        }
    };

    view! {
        <div class="users-page">
            <h1>"Users"</h1>
            <table class="users-page__table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get().items
                        key=|u| (u.id.clone(), u.updated_at, u.status)
                        children=move |user| {
                            let role_id = user.id.clone();
                            let toggle_id = user.id.clone();
                            let delete_id = user.id.clone();
                            let status = user.status;
                            let current_role = user.role;
                            view! {
                                <tr>
                                    <td>{user.name}</td>
                                    <td>{user.email}</td>
                                    <td>
                                        <select on:change=move |ev| {
                                            if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                                change_role(role_id.clone(), role);
                                            }
                                        }>
                                            {Role::ALL
                                                .into_iter()
                                                .map(|role| {
                                                    view! {
                                                        <option value=role.as_str() selected=role == current_role>
                                                            {role.label()}
                                                        </option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    </td>
                                    <td>{status.as_str()}</td>
                                    <td class="users-page__actions">
                                        <button class="btn" on:click=move |_| toggle_status(toggle_id.clone(), status)>
                                            {if status == UserStatus::Active { "Deactivate" } else { "Activate" }}
                                        </button>
                                        <Show when=can_delete>
                                            {
                                                let delete_id = delete_id.clone();
                                                view! {
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| delete_user(delete_id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                }
                                            }
                                        </Show>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <h2>"Add user"</h2>
            <form class="users-page__form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || draft.with(|d| d.email.clone())
                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || draft.with(|d| d.password.clone())
                    on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                />
                <select
                    prop:value=move || draft.with(|d| d.role.as_str())
                    on:change=move |ev| {
                        if let Some(role) = Role::parse(&event_target_value(&ev)) {
                            draft.update(|d| d.role = role);
                        }
                    }
                >
                    {Role::ALL
                        .into_iter()
                        .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn btn--primary" type="submit">"Create"</button>
            </form>
        </div>
    }
}
