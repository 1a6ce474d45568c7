/// Signup and login routes
use crate::{
    api::extract::JsonBody,
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use roster_core::types::NewUser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /signup
pub async fn signup(
    State(app_state): State<AppState>,
    JsonBody(req): JsonBody<SignupRequest>,
) -> Result<Json<MessageResponse>> {
    let password_hash = app_state.password_hasher.hash_password(&req.password).await?;

    let new_user = NewUser {
        name: req.name,
        username: req.username,
        email: req.email,
        password_hash,
        created_at: Utc::now(),
    };

    let user = app_state.storage.create_user(new_user).await.map_err(|e| {
        tracing::warn!("Signup rejected by storage: {}", e);
        ServerError::Internal("failed to create new user".to_string())
    })?;

    tracing::info!(user_id = user.id, "User signed up");

    Ok(Json(MessageResponse {
        message: "user created".to_string(),
    }))
}

/// POST /login
///
/// Checks the credentials and answers 401 on any mismatch. A match ends the
/// request with an empty 200: no session or token is issued.
pub async fn login(
    State(app_state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<StatusCode> {
    let credentials = app_state
        .storage
        .find_credentials(&req.username)
        .await
        .map_err(|e| {
            tracing::warn!("Credential lookup failed: {}", e);
            ServerError::invalid_credentials()
        })?
        .ok_or_else(ServerError::invalid_credentials)?;

    if !app_state
        .password_hasher
        .verify_password(&req.password, &credentials.password_hash)
        .await
    {
        return Err(ServerError::invalid_credentials());
    }

    tracing::debug!(user_id = credentials.user_id, "Credentials accepted");

    Ok(StatusCode::OK)
}
