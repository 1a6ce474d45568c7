//! Roster Core
//!
//! Domain types, the storage trait, and error handling shared by the
//! Roster user service crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `NewUser`, `UpdateUser`, `UserCredentials`
//! - **Storage Trait**: `UserStorage`, the narrow CRUD interface the HTTP layer talks to
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::UpdateUser;
//!
//! let update = UpdateUser {
//!     name: "Ann".to_string(),
//!     username: "ann1".to_string(),
//!     email: "ann@x.com".to_string(),
//! };
//! assert_eq!(update.username, "ann1");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

pub use error::{Result, RosterError};
pub use storage::UserStorage;
pub use types::{NewUser, UpdateUser, User, UserCredentials, UserId};
