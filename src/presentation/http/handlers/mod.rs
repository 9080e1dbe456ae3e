//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod auth;
pub mod catalog;
pub mod files;
pub mod health;
pub mod lookup;
