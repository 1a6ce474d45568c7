/// User CRUD routes
use crate::{
    api::extract::JsonBody,
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use roster_core::types::{UpdateUser, User, UserId};
use serde::Deserialize;

/// User-shaped request body
///
/// Absent fields bind to their zero value. `id` and `createdAt` are accepted
/// for shape only and never written.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPayload {
    pub id: Option<UserId>,
    pub name: String,
    pub username: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<UserPayload> for UpdateUser {
    fn from(payload: UserPayload) -> Self {
        UpdateUser {
            name: payload.name,
            username: payload.username,
            email: payload.email,
        }
    }
}

/// An id that does not parse cannot name a stored user
fn parse_user_id(raw: &str) -> Result<UserId> {
    raw.parse().map_err(|_| ServerError::user_not_found())
}

async fn find_user(app_state: &AppState, raw_id: &str) -> Result<User> {
    let id = parse_user_id(raw_id)?;
    app_state
        .storage
        .get_user(id)
        .await
        .map_err(|e| {
            tracing::warn!(user_id = id, "User lookup failed: {}", e);
            ServerError::user_not_found()
        })?
        .ok_or_else(ServerError::user_not_found)
}

/// GET /users
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.storage.list_users().await?;
    Ok(Json(users))
}

/// POST /users
///
/// Binds the body and stops there: nothing is persisted and the response is
/// an empty 200. The bound payload is intentionally dropped unused.
pub async fn create_user(JsonBody(_payload): JsonBody<UserPayload>) -> Result<StatusCode> {
    Ok(StatusCode::OK)
}

/// GET /users/:id
pub async fn get_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let user = find_user(&app_state, &id).await?;
    Ok(Json(user))
}

/// PUT /users/:id
///
/// Full replacement: the lookup runs before the body is inspected, so an
/// unknown id is a 404 even when the body is malformed.
pub async fn update_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    payload: std::result::Result<JsonBody<UserPayload>, ServerError>,
) -> Result<Json<User>> {
    let existing = find_user(&app_state, &id).await?;
    let JsonBody(payload) = payload?;

    let user = app_state
        .storage
        .update_user(existing.id, payload.into())
        .await?;

    Ok(Json(user))
}

/// DELETE /users/:id
pub async fn delete_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    let existing = find_user(&app_state, &id).await?;

    app_state.storage.delete_user(existing.id).await?;
    tracing::info!(user_id = existing.id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
