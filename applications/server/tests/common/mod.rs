//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use roster_core::UserStorage;
use roster_server::{create_router, AppState, PasswordHasher};
use roster_storage::SqliteUserStorage;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Lowest cost bcrypt accepts; keeps the suite fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// Router wired to a real SQLite file that lives as long as this value
pub struct TestApp {
    pub router: Router,
    pub storage: Arc<SqliteUserStorage>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

        let storage = Arc::new(
            roster_storage::connect(&db_url)
                .await
                .expect("Failed to open test database"),
        );

        let app_state = AppState::new(
            storage.clone(),
            Arc::new(PasswordHasher::new(TEST_BCRYPT_COST)),
        );

        Self {
            router: create_router(app_state),
            storage,
            _temp_dir: temp_dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn send_json(
        &self,
        method: &str,
        uri: &str,
        body: serde_json::Value,
    ) -> Response<Body> {
        self.send(json_request(method, uri, body.to_string())).await
    }

    /// Sign a user up and return the id the store assigned
    pub async fn signup(&self, name: &str, username: &str, email: &str, password: &str) -> i64 {
        let response = self
            .send_json(
                "POST",
                "/signup",
                serde_json::json!({
                    "name": name,
                    "username": username,
                    "email": email,
                    "password": password,
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        self.storage
            .find_credentials(username)
            .await
            .unwrap()
            .expect("signed-up user should be stored")
            .user_id
    }
}

pub fn json_request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
