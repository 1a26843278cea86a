use super::*;

fn new_user(name: &str, email: &str) -> CreateUserData {
    CreateUserData {
        name: name.to_owned(),
        email: email.to_owned(),
        password: "secret".to_owned(),
        role: Role::Manager,
        status: UserStatus::Active,
    }
}

// =============================================================
// seeded
// =============================================================

#[test]
fn seeded_has_one_user_per_role() {
    let state = UsersState::seeded(10);
    for role in Role::ALL {
        assert_eq!(state.count_by_role(role), 1, "{role:?}");
    }
    assert!(state.items.iter().all(|u| u.created_at == 10 && u.status == UserStatus::Active));
}

// =============================================================
// create
// =============================================================

#[test]
fn create_appends_trimmed_user() {
    let mut state = UsersState::default();
    let id = state.create(new_user("  Ada ", " ada@example.com "), 42).unwrap();
    let user = &state.items[0];
    assert_eq!(user.id, id);
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.role, Role::Manager);
    assert_eq!(user.created_at, 42);
    assert_eq!(user.updated_at, 42);
}

#[test]
fn create_rejects_blank_fields() {
    let mut state = UsersState::default();
    assert_eq!(state.create(new_user(" ", "a@example.com"), 0), Err(UserError::MissingName));
    assert_eq!(state.create(new_user("A", ""), 0), Err(UserError::MissingEmail));
    let mut no_password = new_user("A", "a@example.com");
    no_password.password.clear();
    assert_eq!(state.create(no_password, 0), Err(UserError::MissingPassword));
    assert!(state.items.is_empty());
}

#[test]
fn create_rejects_duplicate_email_case_insensitively() {
    let mut state = UsersState::seeded(0);
    let err = state.create(new_user("Dup", "ADMIN@example.com"), 0).unwrap_err();
    assert_eq!(err, UserError::DuplicateEmail("ADMIN@example.com".to_owned()));
    assert_eq!(err.to_string(), "A user with email ADMIN@example.com already exists.");
}

// =============================================================
// mutations
// =============================================================

#[test]
fn set_status_and_role_touch_updated_at() {
    let mut state = UsersState::default();
    let id = state.create(new_user("Ada", "ada@example.com"), 1).unwrap();
    state.set_status(&id, UserStatus::Inactive, 5).unwrap();
    state.set_role(&id, Role::Admin, 9).unwrap();
    let user = &state.items[0];
    assert_eq!(user.status, UserStatus::Inactive);
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.created_at, 1);
    assert_eq!(user.updated_at, 9);
}

#[test]
fn mutations_on_unknown_id_fail() {
    let mut state = UsersState::default();
    assert_eq!(state.set_status("x", UserStatus::Active, 0), Err(UserError::NotFound("x".to_owned())));
    assert_eq!(state.set_role("x", Role::User, 0), Err(UserError::NotFound("x".to_owned())));
    assert_eq!(state.remove("x"), Err(UserError::NotFound("x".to_owned())));
}

#[test]
fn remove_returns_removed_user() {
    let mut state = UsersState::seeded(0);
    let id = state.items[2].id.clone();
    let removed = state.remove(&id).unwrap();
    assert_eq!(removed.role, Role::Manager);
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.count_by_role(Role::Manager), 0);
}

#[test]
fn status_toggle_round_trips() {
    assert_eq!(UserStatus::Active.toggled(), UserStatus::Inactive);
    assert_eq!(UserStatus::Inactive.toggled().as_str(), "active");
}

#[test]
fn role_change_moves_user_between_role_counts() {
    let mut state = UsersState::seeded(0);
    let admins = state.count_by_role(Role::Admin);
    let id = state.items.iter().find(|u| u.role == Role::User).map(|u| u.id.clone()).unwrap();
    let users = state.count_by_role(Role::User);
    state.set_role(&id, Role::Admin, 3).unwrap();
    assert_eq!(state.count_by_role(Role::Admin), admins + 1);
    assert_eq!(state.count_by_role(Role::User), users - 1);
}
