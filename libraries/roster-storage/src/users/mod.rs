//! User queries

use roster_core::{
    error::{Result, RosterError},
    types::{NewUser, UpdateUser, User, UserCredentials, UserId},
};
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    username: String,
    email: String,
    created_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = RosterError;

    fn try_from(row: UserRow) -> Result<Self> {
        let created_at = chrono::DateTime::from_timestamp(row.created_at, 0)
            .ok_or_else(|| RosterError::storage("Invalid timestamp"))?;

        Ok(User {
            id: row.id,
            name: row.name,
            username: row.username,
            email: row.email,
            created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CredentialsRow {
    id: i64,
    username: String,
    password_hash: String,
}

pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query_as::<_, UserRow>(
        "SELECT id, name, username, email, created_at
         FROM users
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(User::try_from).collect()
}

pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, name, username, email, created_at
         FROM users
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(User::try_from).transpose()
}

/// Get the password hash stored for a username
///
/// Returns `None` when no user has that username.
pub async fn find_credentials(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<UserCredentials>> {
    let row = sqlx::query_as::<_, CredentialsRow>(
        "SELECT id, username, password_hash FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| UserCredentials {
        user_id: r.id,
        username: r.username,
        password_hash: r.password_hash,
    }))
}

/// Insert a user and return the stored row
///
/// A taken username or email surfaces as `RosterError::Duplicate` and
/// leaves the table untouched.
pub async fn create(pool: &SqlitePool, user: NewUser) -> Result<User> {
    let row = sqlx::query_as::<_, UserRow>(
        "INSERT INTO users (name, username, email, password_hash, created_at)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id, name, username, email, created_at",
    )
    .bind(&user.name)
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.created_at.timestamp())
    .fetch_one(pool)
    .await?;

    User::try_from(row)
}

/// Replace name, username and email; `created_at` and the hash are kept
pub async fn update(pool: &SqlitePool, id: UserId, user: UpdateUser) -> Result<User> {
    let row = sqlx::query_as::<_, UserRow>(
        "UPDATE users
         SET name = ?, username = ?, email = ?
         WHERE id = ?
         RETURNING id, name, username, email, created_at",
    )
    .bind(&user.name)
    .bind(&user.username)
    .bind(&user.email)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(RosterError::UserNotFound(id))?;

    User::try_from(row)
}

pub async fn delete(pool: &SqlitePool, id: UserId) -> Result<()> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RosterError::UserNotFound(id));
    }

    Ok(())
}

pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
