//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AuthService**: user registration and password hashing
//! - **CatalogService**: service catalog CRUD

pub mod auth_service;
pub mod catalog_service;

pub use auth_service::{AuthError, AuthService, AuthServiceImpl};
pub use catalog_service::{CatalogError, CatalogService};
