use super::*;
use crate::state::auth::Role;

#[test]
fn auth_notice_success_greets_user() {
    let result = Ok(Session { email_address: "a@b.com".to_owned(), role: Role::User });
    assert_eq!(auth_notice(&result), (NotificationKind::Success, "Welcome, a@b.com!".to_owned()));
}

#[test]
fn auth_notice_error_uses_error_text() {
    let result = Err(AuthError::MissingPassword);
    assert_eq!(auth_notice(&result), (NotificationKind::Error, "Password is required.".to_owned()));
}
