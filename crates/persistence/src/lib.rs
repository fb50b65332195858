//! Persistence layer for the worklog service.
//!
//! This crate contains:
//! - Database connection management
//! - Schema bootstrap
//! - Entity definitions (database row mappings)
//! - Repository implementations

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
pub mod schema;
