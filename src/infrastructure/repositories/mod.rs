//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **LookupRepository** - read-only lookup rows
//! - **UserRepository** - user registration
//! - **FileRepository** - uploaded file metadata
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{
//!     PgFileRepository, PgLookupRepository, PgUserRepository,
//! };
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let lookup_repo = PgLookupRepository::new(pool.clone());
//!     let user_repo = PgUserRepository::new(pool.clone());
//!     let file_repo = PgFileRepository::new(pool);
//! }
//! ```

pub mod file_repository;
pub mod lookup_repository;
pub mod user_repository;

pub use file_repository::PgFileRepository;
pub use lookup_repository::PgLookupRepository;
pub use user_repository::PgUserRepository;
