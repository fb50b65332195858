//! Shared utilities and common types for the Worklog backend.
//!
//! This crate provides common functionality used across all other crates:
//! - IST clock helpers (all timestamps are stored with a fixed UTC+5:30 offset)
//! - Collision-resistant prefixed identifiers
//! - Lenient JSON field decoding for loosely typed clients

pub mod ids;
pub mod lenient;
pub mod time;
