/// User model and in-memory record types
///
/// This module provides the `UserRecord` stored by [`crate::store::UserStore`]
/// together with the inputs used to create and partially update it.
///
/// # Fields
///
/// ```text
/// id          u64        store-assigned, never changes
/// username    String     3-50 chars, unique (case-sensitive)
/// email       String     valid email address
/// full_name   String?    at most 100 chars
/// is_active   bool       defaults to true
/// created_at  timestamp  set once
/// updated_at  timestamp  refreshed on every mutation
/// ```
///
/// # Example
///
/// ```
/// use userhub_shared::models::user::{NewUser, UserPatch};
///
/// let new_user = NewUser::new("alice", "alice@example.com", "abcdefgh");
/// assert!(new_user.is_active);
///
/// let patch = UserPatch {
///     full_name: Some(Some("Alice Liddell".to_string())),
///     ..Default::default()
/// };
/// assert!(!patch.is_empty());
/// ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a user record by the store
pub type UserId = u64;

/// A stored user
///
/// The password supplied at creation is never part of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Unique user ID, assigned by the store
    pub id: UserId,

    /// Login name, unique across all records
    pub username: String,

    /// Email address
    pub email: String,

    /// Optional display name
    pub full_name: Option<String>,

    /// Whether the account is active
    pub is_active: bool,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last mutated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new user
///
/// Field constraints are checked by the HTTP layer before this value is built.
#[derive(Clone)]
pub struct NewUser {
    /// Login name
    pub username: String,

    /// Email address
    pub email: String,

    /// Optional display name
    pub full_name: Option<String>,

    /// Initial active flag
    pub is_active: bool,

    /// Plaintext password.
    ///
    /// Accepted for interface compatibility only: it is neither hashed nor
    /// stored. Real credential storage is not implemented.
    pub password: String,
}

impl NewUser {
    /// Creates an active user input without a full name
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            full_name: None,
            is_active: true,
            password: password.into(),
        }
    }

    /// Sets the full name
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Sets the active flag
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("is_active", &self.is_active)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Partial update for an existing user
///
/// All fields are optional. Only `Some` fields are applied; `None` means
/// "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    /// New username
    pub username: Option<String>,

    /// New email address
    pub email: Option<String>,

    /// New display name (use Some(None) to clear)
    pub full_name: Option<Option<String>>,

    /// New active flag
    pub is_active: Option<bool>,
}

impl UserPatch {
    /// Returns true if no field is set
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.full_name.is_none()
            && self.is_active.is_none()
    }

    /// Applies the set fields to `record` and refreshes `updated_at`
    ///
    /// `updated_at` is refreshed even when the patch is empty.
    pub fn apply_to(self, record: &mut UserRecord) {
        if let Some(username) = self.username {
            record.username = username;
        }
        if let Some(email) = self.email {
            record.email = email;
        }
        if let Some(full_name) = self.full_name {
            record.full_name = full_name;
        }
        if let Some(is_active) = self.is_active {
            record.is_active = is_active;
        }

        record.updated_at = next_timestamp(record.updated_at);
    }
}

/// Returns the current time, or one nanosecond past `previous` if the clock
/// has not moved beyond it.
///
/// Keeps `updated_at` strictly increasing across mutations.
pub fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::nanoseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> UserRecord {
        let now = Utc::now();
        UserRecord {
            id: 1,
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            full_name: Some("Administrator".to_string()),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_new_user_defaults() {
        let new_user = NewUser::new("alice", "a@example.com", "abcdefgh");

        assert_eq!(new_user.username, "alice");
        assert!(new_user.is_active);
        assert!(new_user.full_name.is_none());
    }

    #[test]
    fn test_new_user_debug_redacts_password() {
        let new_user = NewUser::new("alice", "a@example.com", "hunter22secret");
        let debug = format!("{:?}", new_user);

        assert!(!debug.contains("hunter22secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_user_patch_default_is_empty() {
        let patch = UserPatch::default();
        assert!(patch.is_empty());
        assert!(patch.username.is_none());
        assert!(patch.email.is_none());
        assert!(patch.full_name.is_none());
        assert!(patch.is_active.is_none());
    }

    #[test]
    fn test_apply_only_set_fields() {
        let mut record = sample_record();
        let before = record.clone();

        UserPatch {
            full_name: Some(Some("New Name".to_string())),
            ..Default::default()
        }
        .apply_to(&mut record);

        assert_eq!(record.full_name.as_deref(), Some("New Name"));
        assert_eq!(record.username, before.username);
        assert_eq!(record.email, before.email);
        assert_eq!(record.is_active, before.is_active);
        assert_eq!(record.created_at, before.created_at);
    }

    #[test]
    fn test_apply_can_clear_full_name() {
        let mut record = sample_record();

        UserPatch {
            full_name: Some(None),
            ..Default::default()
        }
        .apply_to(&mut record);

        assert!(record.full_name.is_none());
    }

    #[test]
    fn test_empty_patch_still_advances_updated_at() {
        let mut record = sample_record();
        let before = record.clone();

        UserPatch::default().apply_to(&mut record);

        assert!(record.updated_at > before.updated_at);
        assert_eq!(record.username, before.username);
        assert_eq!(record.full_name, before.full_name);
    }

    #[test]
    fn test_next_timestamp_is_strictly_later() {
        let future = Utc::now() + Duration::seconds(60);
        assert!(next_timestamp(future) > future);
    }
}
