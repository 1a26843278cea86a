//! Directory of system users shown on the admin pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs the admin Users and Roles screens only. It is display data seeded
//! with demo accounts, not the store `auth` signs in against.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use serde::{Deserialize, Serialize};

use super::auth::Role;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }
}

/// A managed account row. Timestamps are milliseconds since the Unix epoch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Form payload for adding a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub status: UserStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    #[error("Name is required.")]
    MissingName,
    #[error("Email address is required.")]
    MissingEmail,
    #[error("Password is required.")]
    MissingPassword,
    #[error("A user with email {0} already exists.")]
    DuplicateEmail(String),
    #[error("User not found: {0}")]
    NotFound(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsersState {
    pub items: Vec<SystemUser>,
}

impl UsersState {
    /// Directory pre-populated with one account per role.
    #[must_use]
    pub fn seeded(now_ms: i64) -> Self {
        let seed = [
            ("Super Admin", "superadmin@example.com", Role::SuperAdmin),
            ("Site Admin", "admin@example.com", Role::Admin),
            ("Morgan Manager", "manager@example.com", Role::Manager),
            ("Uma User", "user@example.com", Role::User),
        ];
        let items = seed
            .into_iter()
            .map(|(name, email, role)| SystemUser {
                id: uuid::Uuid::new_v4().to_string(),
                name: name.to_owned(),
                email: email.to_owned(),
                role,
                status: UserStatus::Active,
                created_at: now_ms,
                updated_at: now_ms,
            })
            .collect();
        Self { items }
    }

    /// Add a user and return its id.
    ///
    /// # Errors
    ///
    /// Rejects blank fields and emails already in the directory (compared
    /// case-insensitively).
    pub fn create(&mut self, data: CreateUserData, now_ms: i64) -> Result<String, UserError> {
        let name = data.name.trim();
        let email = data.email.trim();
        if name.is_empty() {
            return Err(UserError::MissingName);
        }
        if email.is_empty() {
            return Err(UserError::MissingEmail);
        }
        if data.password.is_empty() {
            return Err(UserError::MissingPassword);
        }
        if self.items.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
            return Err(UserError::DuplicateEmail(email.to_owned()));
        }
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(SystemUser {
            id: id.clone(),
            name: name.to_owned(),
            email: email.to_owned(),
            role: data.role,
            status: data.status,
            created_at: now_ms,
            updated_at: now_ms,
        });
        Ok(id)
    }

    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] for an unknown id.
    pub fn set_status(&mut self, id: &str, status: UserStatus, now_ms: i64) -> Result<(), UserError> {
        let user = self.find_mut(id)?;
        user.status = status;
        user.updated_at = now_ms;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] for an unknown id.
    pub fn set_role(&mut self, id: &str, role: Role, now_ms: i64) -> Result<(), UserError> {
        let user = self.find_mut(id)?;
        user.role = role;
        user.updated_at = now_ms;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] for an unknown id.
    pub fn remove(&mut self, id: &str) -> Result<SystemUser, UserError> {
        let idx = self
            .items
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| UserError::NotFound(id.to_owned()))?;
        Ok(self.items.remove(idx))
    }

    #[must_use]
    pub fn count_by_role(&self, role: Role) -> usize {
        self.items.iter().filter(|u| u.role == role).count()
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut SystemUser, UserError> {
        self.items
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| UserError::NotFound(id.to_owned()))
    }
}
