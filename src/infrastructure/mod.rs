//! Infrastructure Layer
//!
//! Contains implementations for external concerns:
//! - Database pool and repositories (PostgreSQL)
//! - In-memory service catalog
//! - Local upload storage

pub mod catalog;
pub mod database;
pub mod repositories;
pub mod storage;
