//! Authentication Service
//!
//! Handles user registration and password hashing.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use async_trait::async_trait;

use crate::domain::{NewUser, User, UserRepository};
use crate::shared::error::AppError;

/// Authentication service trait for dependency injection
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user with a hashed password
    async fn register(&self, email: &str, password: &str) -> Result<User, AuthError>;
}

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Email already exists")]
    EmailExists,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::EmailExists => AppError::Conflict("Email already registered".into()),
            AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// AuthService implementation
pub struct AuthServiceImpl {
    user_repo: Arc<dyn UserRepository>,
}

impl AuthServiceImpl {
    /// Create a new AuthServiceImpl
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Hash a password using Argon2id
    fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AuthError::Internal(format!("Password hashing failed: {}", e)))
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn register(&self, email: &str, password: &str) -> Result<User, AuthError> {
        // Check if email already exists
        if self
            .user_repo
            .find_by_email(email)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .is_some()
        {
            return Err(AuthError::EmailExists);
        }

        let hashed_password = self.hash_password(password)?;

        let new_user = NewUser {
            email: email.to_string(),
            hashed_password,
        };

        // Concurrent registrations can still race past the check above;
        // the users.email constraint is the final word.
        let user = self.user_repo.create(&new_user).await.map_err(|e| match e {
            AppError::Conflict(_) => AuthError::EmailExists,
            e => AuthError::Internal(e.to_string()),
        })?;

        tracing::info!(user_id = user.id, "User registered");

        Ok(user)
    }
}
