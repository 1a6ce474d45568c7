/// Router behaviour when the storage layer fails
///
/// Runs the real router against a store that errors on every call, so the
/// HTTP mapping is checked without a database.
mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::{body_json, TestApp, TEST_BCRYPT_COST};
use roster_core::{
    types::{NewUser, UpdateUser, User, UserCredentials, UserId},
    Result, RosterError, UserStorage,
};
use roster_server::{create_router, AppState, PasswordHasher};
use serde_json::json;
use std::sync::Arc;
use tower::util::ServiceExt;

struct FailingStorage;

#[async_trait]
impl UserStorage for FailingStorage {
    async fn list_users(&self) -> Result<Vec<User>> {
        Err(RosterError::Database("disk I/O error".to_string()))
    }

    async fn get_user(&self, _id: UserId) -> Result<Option<User>> {
        Err(RosterError::Database("disk I/O error".to_string()))
    }

    async fn find_credentials(&self, _username: &str) -> Result<Option<UserCredentials>> {
        Err(RosterError::Database("disk I/O error".to_string()))
    }

    async fn create_user(&self, _user: NewUser) -> Result<User> {
        Err(RosterError::Database("disk I/O error".to_string()))
    }

    async fn update_user(&self, _id: UserId, _user: UpdateUser) -> Result<User> {
        Err(RosterError::Database("disk I/O error".to_string()))
    }

    async fn delete_user(&self, _id: UserId) -> Result<()> {
        Err(RosterError::Database("disk I/O error".to_string()))
    }

    async fn count_users(&self) -> Result<i64> {
        Err(RosterError::Database("disk I/O error".to_string()))
    }
}

fn failing_router() -> axum::Router {
    create_router(AppState::new(
        Arc::new(FailingStorage),
        Arc::new(PasswordHasher::new(TEST_BCRYPT_COST)),
    ))
}

#[tokio::test]
async fn test_list_users_storage_failure_is_hidden() {
    let response = failing_router()
        .oneshot(
            axum::http::Request::builder()
                .uri("/users")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({ "error": "Database error" }));
}

#[tokio::test]
async fn test_get_user_lookup_failure_is_not_found() {
    let response = failing_router()
        .oneshot(
            axum::http::Request::builder()
                .uri("/users/1")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "user not found" }));
}

#[tokio::test]
async fn test_delete_user_lookup_failure_is_not_found() {
    let response = failing_router()
        .oneshot(
            axum::http::Request::builder()
                .uri("/users/1")
                .method("DELETE")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "user not found" }));
}

#[tokio::test]
async fn test_update_user_lookup_failure_is_not_found() {
    let response = failing_router()
        .oneshot(common::json_request(
            "PUT",
            "/users/1",
            json!({ "name": "Ann", "username": "ann1", "email": "ann@x.com" }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "error": "user not found" }));
}

#[tokio::test]
async fn test_signup_storage_failure() {
    let response = failing_router()
        .oneshot(common::json_request(
            "POST",
            "/signup",
            json!({ "name": "Ann", "username": "ann1", "email": "ann@x.com", "password": "pw" })
                .to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "failed to create new user" })
    );
}

#[tokio::test]
async fn test_login_storage_failure_looks_like_bad_credentials() {
    let response = failing_router()
        .oneshot(common::json_request(
            "POST",
            "/login",
            json!({ "username": "ann1", "password": "pw" }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Invalid username or password" })
    );
}

#[tokio::test]
async fn test_signup_hash_failure() {
    // bcrypt rejects costs below 4
    let app = TestApp::new().await;
    let router = create_router(AppState::new(
        app.storage.clone(),
        Arc::new(PasswordHasher::new(1)),
    ));

    let response = router
        .oneshot(common::json_request(
            "POST",
            "/signup",
            json!({ "name": "Ann", "username": "ann1", "email": "ann@x.com", "password": "pw" })
                .to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "failed to hash password" })
    );
    assert_eq!(app.storage.count_users().await.unwrap(), 0);
}
