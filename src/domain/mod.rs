//! # Domain Layer
//!
//! The domain layer contains the data contracts of the catalog backend.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: records exchanged over the wire and stored, plus repository traits
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts

pub mod entities;

// Re-export commonly used types
pub use entities::*;
