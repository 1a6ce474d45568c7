//! Domain types

mod user;

pub use user::{NewUser, UpdateUser, User, UserCredentials, UserId};
