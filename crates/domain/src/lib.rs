//! Domain layer for the Worklog backend.
//!
//! This crate contains:
//! - Domain models (Place, LogEntry, Task, JournalEvent, dashboard metrics)
//! - Request/response payloads and their field validation
//! - Geofence resolution and stay-duration estimation

pub mod error;
pub mod models;
pub mod services;

pub use error::RequestError;
