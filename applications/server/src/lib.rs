//! Roster Server Library
//!
//! HTTP user service with signup, login and CRUD over a single `users` table.
//!
//! This library exposes the router and its building blocks so integration
//! tests can drive the real routes without binding a socket.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::PasswordHasher;
pub use state::AppState;
