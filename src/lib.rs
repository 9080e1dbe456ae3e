//! # Catalog Server Library
//!
//! This crate provides a small REST backend with:
//! - An in-memory service catalog (categories, subcategories, services)
//! - User registration with Argon2 password hashing
//! - Read-only lookup data
//! - File uploads to local storage
//!
//! ## Architecture
//!
//! - **Domain Layer**: Entities and repository traits
//! - **Application Layer**: Services and DTOs
//! - **Infrastructure Layer**: PostgreSQL repositories, in-memory catalog, upload storage
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! catalog_server/
//! +-- config/         Configuration management
//! +-- domain/         Domain entities and repository traits
//! +-- application/    Application services and DTOs
//! +-- infrastructure/ Database, catalog and storage implementations
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core data contracts
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
