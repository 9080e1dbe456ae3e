//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use serde::Serialize;

use crate::shared::error::AppError;

/// Represents a registered user account.
///
/// Maps to the `users` table:
/// - id: SERIAL PRIMARY KEY
/// - email: VARCHAR NOT NULL UNIQUE
/// - hashed_password: VARCHAR NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Database-assigned primary key
    pub id: i32,

    /// Email address (unique)
    pub email: String,

    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub hashed_password: String,
}

/// A user that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub hashed_password: String,
}

/// Repository trait for User data access operations.
///
/// Implementations must surface a duplicate email as `AppError::Conflict`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return the stored row.
    async fn create(&self, user: &NewUser) -> Result<User, AppError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}
