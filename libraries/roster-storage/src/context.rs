use crate::users;
use async_trait::async_trait;
use roster_core::{
    error::Result,
    storage::UserStorage,
    types::{NewUser, UpdateUser, User, UserCredentials, UserId},
};
use sqlx::SqlitePool;

/// `SQLite`-backed user storage
///
/// Cloning is cheap; every clone shares the same connection pool.
#[derive(Clone)]
pub struct SqliteUserStorage {
    pool: SqlitePool,
}

impl SqliteUserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl UserStorage for SqliteUserStorage {
    async fn list_users(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    async fn find_credentials(&self, username: &str) -> Result<Option<UserCredentials>> {
        users::find_credentials(&self.pool, username).await
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        users::create(&self.pool, user).await
    }

    async fn update_user(&self, id: UserId, user: UpdateUser) -> Result<User> {
        users::update(&self.pool, id, user).await
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        users::delete(&self.pool, id).await
    }

    async fn count_users(&self) -> Result<i64> {
        users::count(&self.pool).await
    }
}
