/// User service
///
/// `UserService` is the business layer over [`UserStore`]. It owns the store
/// behind a single `tokio::sync::RwLock`: reads share the lock, every mutation
/// takes it exclusively. `create` runs its duplicate check and insert under one
/// write guard, so concurrent creates with the same username cannot both win.
///
/// # Outcomes
///
/// - Not found is a normal result (`None` / `false`), never an error.
/// - A duplicate username on create is `ServiceError::UsernameTaken`.
///
/// # Example
///
/// ```
/// use userhub_shared::models::user::NewUser;
/// use userhub_shared::service::{ServiceError, UserService};
/// use userhub_shared::store::UserStore;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let service = UserService::new(UserStore::with_demo_users());
///
/// let alice = service
///     .create(NewUser::new("alice", "a@example.com", "abcdefgh"))
///     .await
///     .unwrap();
/// assert_eq!(alice.id, 3);
///
/// let dup = service
///     .create(NewUser::new("admin", "x@y.com", "abcdefgh"))
///     .await;
/// assert!(matches!(dup, Err(ServiceError::UsernameTaken { .. })));
/// # }
/// ```

use crate::models::user::{NewUser, UserId, UserPatch, UserRecord};
use crate::store::{StoreError, UserStore};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Default page size for `list_users`
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Largest page size the HTTP layer accepts
pub const MAX_LIST_LIMIT: usize = 1000;

/// Error type for user service operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Another record already uses this username
    #[error("Username already exists: {username}")]
    UsernameTaken {
        /// The rejected username
        username: String,
    },
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUsername(username) => ServiceError::UsernameTaken { username },
        }
    }
}

/// User operations over a lock-protected store
#[derive(Debug)]
pub struct UserService {
    store: RwLock<UserStore>,
}

impl UserService {
    /// Creates a service owning `store`
    pub fn new(store: UserStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Lists users in insertion order
    ///
    /// # Arguments
    ///
    /// * `skip` - Number of users to skip
    /// * `limit` - Maximum number of users to return
    pub async fn list_users(&self, skip: usize, limit: usize) -> Vec<UserRecord> {
        self.store.read().await.list(skip, limit)
    }

    /// Number of stored users
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    /// Gets a user by ID
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    pub async fn get_by_id(&self, id: UserId) -> Option<UserRecord> {
        self.store.read().await.find_by_id(id).cloned()
    }

    /// Gets a user by exact username
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    pub async fn get_by_username(&self, username: &str) -> Option<UserRecord> {
        self.store.read().await.find_by_username(username).cloned()
    }

    /// Creates a new user
    ///
    /// The uniqueness check and the insert run under the same write guard.
    /// The password in `new_user` is dropped here; nothing stores it.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::UsernameTaken` if the username exists. The store
    /// is left unchanged in that case.
    pub async fn create(&self, new_user: NewUser) -> Result<UserRecord, ServiceError> {
        let mut store = self.store.write().await;

        match store.insert_if_username_absent(new_user) {
            Ok(record) => {
                info!(user_id = record.id, username = %record.username, "User created");
                Ok(record)
            }
            Err(err) => {
                debug!(error = %err, "Rejected user creation");
                Err(err.into())
            }
        }
    }

    /// Applies a partial update
    ///
    /// Only fields set in `patch` change; `updated_at` always advances.
    /// Username uniqueness is not re-checked here.
    ///
    /// # Returns
    ///
    /// The updated user, or None if `id` does not exist
    pub async fn update(&self, id: UserId, patch: UserPatch) -> Option<UserRecord> {
        let updated = self.store.write().await.update_in_place(id, patch);

        match &updated {
            Some(record) => info!(user_id = record.id, "User updated"),
            None => debug!(user_id = id, "Update target not found"),
        }

        updated
    }

    /// Deletes a user
    ///
    /// # Returns
    ///
    /// True if the user existed and was removed
    pub async fn delete(&self, id: UserId) -> bool {
        let removed = self.store.write().await.remove(id);

        if removed {
            info!(user_id = id, "User deleted");
        } else {
            debug!(user_id = id, "Delete target not found");
        }

        removed
    }

    /// Placeholder authentication
    ///
    /// ⚠️  **WARNING**: this does NOT verify the password. It returns the user
    /// whenever the username exists and the account is active. No password is
    /// stored, so there is nothing to check against. Do not expose this on any
    /// public surface until real credential hashing and verification exist.
    pub async fn authenticate(&self, username: &str, _password: &str) -> Option<UserRecord> {
        warn!(username = %username, "authenticate() is a stub and does not verify passwords");

        self.get_by_username(username)
            .await
            .filter(|user| user.is_active)
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new(UserStore::new())
    }
}
