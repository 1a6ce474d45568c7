/// Shared application state
use crate::services::PasswordHasher;
use roster_core::UserStorage;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// Built once at start-up and cloned into every request; the storage handle
/// inside is the only thing requests share.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn UserStorage>,
    pub password_hasher: Arc<PasswordHasher>,
}

impl AppState {
    pub fn new(storage: Arc<dyn UserStorage>, password_hasher: Arc<PasswordHasher>) -> Self {
        Self {
            storage,
            password_hasher,
        }
    }
}
