//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware components to coordinate login
//! redirects and role-dependent rendering.
//!
//! DESIGN
//! ======
//! Credential checking sits behind [`Authenticator`] so the shipped
//! [`DemoAuthenticator`] (reserved-address role mapping, no password check)
//! can be swapped for a real backend without touching pages or the guard.
//! A failed call never disturbs an existing session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Email address that signs in as [`Role::SuperAdmin`].
pub const SUPER_ADMIN_EMAIL: &str = "superadmin@example.com";
/// Email address that signs in as [`Role::Admin`].
pub const ADMIN_EMAIL: &str = "admin@example.com";

/// Role attached to a session.
///
/// Only `Admin` and `SuperAdmin` satisfy "is admin"; there is no further
/// ordering between roles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Manager,
    Admin,
    SuperAdmin,
}

impl Role {
    /// All roles, lowest to highest, for pickers and role listings.
    pub const ALL: [Role; 4] = [Role::User, Role::Manager, Role::Admin, Role::SuperAdmin];

    /// Wire/display key (`user`, `manager`, `admin`, `super_admin`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Manager => "manager",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Manager => "Manager",
            Role::Admin => "Admin",
            Role::SuperAdmin => "Super Admin",
        }
    }

    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }

    /// Parse a wire key back into a role.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw)
    }
}

/// The authenticated identity for the current interaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email_address: String,
    pub role: Role,
}

/// Failure modes for login and registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Email address is required.")]
    MissingEmail,
    #[error("Password is required.")]
    MissingPassword,
    #[error("Sign-in rejected: {0}")]
    Rejected(String),
}

/// Credential check seam. Implementations decide whether credentials are
/// accepted and which role the resulting session carries.
pub trait Authenticator {
    /// Authenticate an existing account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the credentials are refused.
    fn login(&self, email_address: &str, password: &str) -> Result<Session, AuthError>;

    /// Create a new account and sign it in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the account cannot be created.
    fn register(&self, email_address: &str, password: &str) -> Result<Session, AuthError>;
}

/// Placeholder authenticator with no backing store.
///
/// Accepts any non-blank credentials. Login maps the two reserved addresses
/// to their roles; registration always yields [`Role::User`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoAuthenticator;

impl Authenticator for DemoAuthenticator {
    fn login(&self, email_address: &str, _password: &str) -> Result<Session, AuthError> {
        Ok(Session { email_address: email_address.to_owned(), role: role_for_email(email_address) })
    }

    fn register(&self, email_address: &str, _password: &str) -> Result<Session, AuthError> {
        Ok(Session { email_address: email_address.to_owned(), role: Role::User })
    }
}

/// Role assigned at login for `email_address` (exact, case-sensitive match).
#[must_use]
pub fn role_for_email(email_address: &str) -> Role {
    match email_address {
        SUPER_ADMIN_EMAIL => Role::SuperAdmin,
        ADMIN_EMAIL => Role::Admin,
        _ => Role::User,
    }
}

/// Authentication state tracking the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    /// Sign in through the [`DemoAuthenticator`].
    ///
    /// # Errors
    ///
    /// See [`AuthState::login_with`].
    pub fn login(&mut self, email_address: &str, password: &str) -> Result<Session, AuthError> {
        self.login_with(&DemoAuthenticator, email_address, password)
    }

    /// Sign in through `auth`, replacing any current session on success.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingEmail`] / [`AuthError::MissingPassword`] for
    /// blank input, or whatever the authenticator rejects with.
    pub fn login_with<A: Authenticator + ?Sized>(
        &mut self,
        auth: &A,
        email_address: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let email_address = validate_credentials(email_address, password)?;
        let session = auth.login(email_address, password)?;
        log::info!("signed in {} as {}", session.email_address, session.role.as_str());
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Register through the [`DemoAuthenticator`].
    ///
    /// # Errors
    ///
    /// See [`AuthState::register_with`].
    pub fn register(&mut self, email_address: &str, password: &str) -> Result<Session, AuthError> {
        self.register_with(&DemoAuthenticator, email_address, password)
    }

    /// Register through `auth`, replacing any current session on success.
    ///
    /// # Errors
    ///
    /// Same as [`AuthState::login_with`].
    pub fn register_with<A: Authenticator + ?Sized>(
        &mut self,
        auth: &A,
        email_address: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let email_address = validate_credentials(email_address, password)?;
        let session = auth.register(email_address, password)?;
        log::info!("registered {}", session.email_address);
        self.session = Some(session.clone());
        Ok(session)
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!("signed out {}", session.email_address);
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(Role::is_admin)
    }

    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        self.role() == Some(Role::SuperAdmin)
    }

    /// Permission check. Super admins hold every permission; no other role
    /// holds any.
    #[must_use]
    pub fn has_permission(&self, _permission: &str) -> bool {
        self.is_super_admin()
    }

    /// Email of the signed-in user, if any.
    #[must_use]
    pub fn email_address(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.email_address.as_str())
    }
}

/// Reject blank input. The address is passed on as entered so only the exact
/// reserved literals map to elevated roles.
fn validate_credentials<'a>(email_address: &'a str, password: &str) -> Result<&'a str, AuthError> {
    if email_address.trim().is_empty() {
        return Err(AuthError::MissingEmail);
    }
    if password.is_empty() {
        return Err(AuthError::MissingPassword);
    }
    Ok(email_address)
}
