//! # Domain Entities
//!
//! Core domain entities of the catalog backend.
//!
//! ## Persisted Entities
//!
//! - **LookupRecord**: read-only id/name pairs (`lookup_data`)
//! - **User**: registered accounts (`users`)
//! - **FileRecord**: metadata of uploaded files (`file_data`)
//!
//! ## In-Memory Entities
//!
//! - **Category / Subcategory**: fixed catalog hierarchy
//! - **Service / ServiceStep**: catalog records mutated through the API
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod catalog;
mod file;
mod lookup;
mod user;

pub use catalog::{Category, CatalogRepository, Service, ServiceDraft, ServiceStep, Subcategory};
pub use file::{FileRecord, FileRepository, NewFileRecord};
pub use lookup::{LookupRecord, LookupRepository};
pub use user::{NewUser, User, UserRepository};

#[cfg(test)]
pub use catalog::MockCatalogRepository;
#[cfg(test)]
pub use user::MockUserRepository;
