//! Storage trait for the user table

use crate::error::Result;
use crate::types::{NewUser, UpdateUser, User, UserCredentials, UserId};
use async_trait::async_trait;

/// Narrow CRUD interface over the `users` table
///
/// Handlers only ever talk to this trait, so the HTTP layer can be exercised
/// against any implementation and the `SQLite` one can be tested on its own.
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Get every user, ordered by id
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// Look up the stored password hash for a username
    async fn find_credentials(&self, username: &str) -> Result<Option<UserCredentials>>;

    /// Insert a new user
    ///
    /// Fails with `RosterError::Duplicate` when the username or email is taken.
    async fn create_user(&self, user: NewUser) -> Result<User>;

    /// Overwrite name, username and email of an existing user
    async fn update_user(&self, id: UserId, user: UpdateUser) -> Result<User>;

    /// Remove a user
    async fn delete_user(&self, id: UserId) -> Result<()>;

    /// Number of stored users
    async fn count_users(&self) -> Result<i64>;
}
