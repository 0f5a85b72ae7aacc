/// In-memory user record store
///
/// `UserStore` owns the authoritative list of user records and the ID
/// counter. It has no internal locking: [`crate::service::UserService`] wraps
/// it in a lock and is the only intended owner.
///
/// # ID assignment
///
/// IDs come from a monotonic counter that starts at 1. Each insert takes the
/// current counter value, so a new ID is always one past the highest ID ever
/// issued. Deleting the highest record does not make its ID available again.
///
/// # Example
///
/// ```
/// use userhub_shared::models::user::NewUser;
/// use userhub_shared::store::UserStore;
///
/// let mut store = UserStore::new();
/// let alice = store.insert(NewUser::new("alice", "a@example.com", "abcdefgh"));
/// assert_eq!(alice.id, 1);
///
/// assert!(store.remove(alice.id));
/// assert!(store.find_by_id(alice.id).is_none());
/// ```

use crate::models::user::{NewUser, UserId, UserPatch, UserRecord};
use chrono::Utc;

/// Error type for conditional store mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A record with this username already exists
    #[error("Username '{0}' already exists")]
    DuplicateUsername(String),
}

/// In-memory collection of user records kept in insertion order
#[derive(Debug, Clone)]
pub struct UserStore {
    records: Vec<UserRecord>,
    next_id: UserId,
}

impl UserStore {
    /// Creates an empty store whose first ID will be 1
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a store holding the two demo accounts
    ///
    /// ```text
    /// id=1  admin  admin@example.com  "Administrator"
    /// id=2  user   user@example.com   "Regular User"
    /// ```
    pub fn with_demo_users() -> Self {
        let mut store = Self::new();
        store.insert(
            NewUser::new("admin", "admin@example.com", "").with_full_name("Administrator"),
        );
        store.insert(NewUser::new("user", "user@example.com", "").with_full_name("Regular User"));
        store
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// ID the next insert will receive
    pub fn next_id(&self) -> UserId {
        self.next_id
    }

    /// Lists records in insertion order
    ///
    /// Skips the first `skip` records and returns at most `limit`. Both
    /// arguments are unsigned, and out-of-range values are clamped: a `skip`
    /// past the end or a `limit` of 0 yields an empty page.
    pub fn list(&self, skip: usize, limit: usize) -> Vec<UserRecord> {
        self.records
            .iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Finds a record by ID
    pub fn find_by_id(&self, id: UserId) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Finds a record by exact, case-sensitive username
    pub fn find_by_username(&self, username: &str) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.username == username)
    }

    /// Stores a new record with the next ID and fresh timestamps
    ///
    /// Does not check username uniqueness; see
    /// [`insert_if_username_absent`](Self::insert_if_username_absent).
    pub fn insert(&mut self, new_user: NewUser) -> UserRecord {
        let now = Utc::now();
        let record = UserRecord {
            id: self.next_id,
            username: new_user.username,
            email: new_user.email,
            full_name: new_user.full_name,
            is_active: new_user.is_active,
            created_at: now,
            updated_at: now,
        };

        self.next_id += 1;
        self.records.push(record.clone());
        record
    }

    /// Inserts the record only if no record has the same username
    ///
    /// The lookup and the insert happen in one call on `&mut self`, so a
    /// caller holding exclusive access gets an atomic insert-if-absent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateUsername` and leaves the store unchanged
    /// if the username is taken.
    pub fn insert_if_username_absent(
        &mut self,
        new_user: NewUser,
    ) -> Result<UserRecord, StoreError> {
        if self.find_by_username(&new_user.username).is_some() {
            return Err(StoreError::DuplicateUsername(new_user.username));
        }

        Ok(self.insert(new_user))
    }

    /// Applies a partial update to the record with `id`
    ///
    /// # Returns
    ///
    /// The updated record, or None if no record has that ID
    pub fn update_in_place(&mut self, id: UserId, patch: UserPatch) -> Option<UserRecord> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        patch.apply_to(record);
        Some(record.clone())
    }

    /// Removes the record with `id`
    ///
    /// # Returns
    ///
    /// True if a record was removed, false if none existed
    pub fn remove(&mut self, id: UserId) -> bool {
        match self.records.iter().position(|r| r.id == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(count: usize) -> UserStore {
        let mut store = UserStore::new();
        for i in 0..count {
            store.insert(NewUser::new(
                format!("user{}", i),
                format!("user{}@example.com", i),
                "password",
            ));
        }
        store
    }

    #[test]
    fn test_first_id_is_one() {
        let mut store = UserStore::new();
        let record = store.insert(NewUser::new("alice", "a@example.com", "abcdefgh"));

        assert_eq!(record.id, 1);
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ids_follow_max() {
        let mut store = store_with(3);
        let record = store.insert(NewUser::new("next", "n@example.com", "abcdefgh"));
        assert_eq!(record.id, 4);
    }

    #[test]
    fn test_demo_users() {
        let store = UserStore::with_demo_users();

        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_id(1).map(|r| r.username.as_str()), Some("admin"));
        assert_eq!(store.find_by_id(2).map(|r| r.username.as_str()), Some("user"));
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn test_ids_not_reused_after_deleting_highest() {
        let mut store = store_with(3);
        assert!(store.remove(3));

        let record = store.insert(NewUser::new("late", "l@example.com", "abcdefgh"));
        assert_eq!(record.id, 4);
    }

    #[test]
    fn test_list_pagination() {
        let store = store_with(5);

        for (skip, limit) in [(0, 1), (0, 5), (0, 10), (2, 2), (4, 3), (5, 1), (9, 3)] {
            let page = store.list(skip, limit);
            let expected = limit.min(5usize.saturating_sub(skip));
            assert_eq!(page.len(), expected, "skip={} limit={}", skip, limit);

            if let Some(first) = page.first() {
                assert_eq!(first.id, skip as UserId + 1);
            }
        }
    }

    #[test]
    fn test_list_zero_limit_is_empty() {
        let store = store_with(3);
        assert!(store.list(0, 0).is_empty());
    }

    #[test]
    fn test_list_keeps_insertion_order_after_remove() {
        let mut store = store_with(4);
        store.remove(2);

        let ids: Vec<UserId> = store.list(0, 10).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_find_by_username_is_case_sensitive() {
        let store = UserStore::with_demo_users();

        assert!(store.find_by_username("admin").is_some());
        assert!(store.find_by_username("Admin").is_none());
        assert!(store.find_by_username("ghost").is_none());
    }

    #[test]
    fn test_insert_if_username_absent() {
        let mut store = UserStore::with_demo_users();

        let err = store
            .insert_if_username_absent(NewUser::new("admin", "x@y.com", "abcdefgh"))
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateUsername("admin".to_string()));
        assert_eq!(store.len(), 2);
        assert_eq!(store.next_id(), 3);

        let record = store
            .insert_if_username_absent(NewUser::new("Admin", "x@y.com", "abcdefgh"))
            .unwrap();
        assert_eq!(record.id, 3);
    }

    #[test]
    fn test_update_in_place() {
        let mut store = UserStore::with_demo_users();
        let patch = UserPatch {
            is_active: Some(false),
            ..Default::default()
        };

        let updated = store.update_in_place(2, patch).unwrap();
        assert!(!updated.is_active);
        assert_eq!(store.find_by_id(2), Some(&updated));
    }

    #[test]
    fn test_update_missing_returns_none() {
        let mut store = UserStore::with_demo_users();
        assert!(store.update_in_place(999, UserPatch::default()).is_none());
    }

    #[test]
    fn test_remove_missing_returns_false() {
        let mut store = UserStore::with_demo_users();
        assert!(!store.remove(999));
        assert_eq!(store.len(), 2);
    }
}
