/// Data models for UserHub
///
/// # Models
///
/// - `user`: User records and their create/update inputs
///
/// # Example
///
/// ```
/// use userhub_shared::models::user::NewUser;
///
/// let new_user = NewUser::new("alice", "alice@example.com", "abcdefgh")
///     .with_full_name("Alice Liddell");
/// assert_eq!(new_user.full_name.as_deref(), Some("Alice Liddell"));
/// ```

pub mod user;
