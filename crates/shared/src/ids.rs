//! Identifier generation for tasks and journal events.
//!
//! Identifiers keep the `<prefix>_<epoch-seconds>` shape clients already know
//! and add a random suffix so that two creations within the same second do
//! not collide.

use chrono::{DateTime, TimeZone};
use uuid::Uuid;

/// Prefix for task identifiers.
pub const TASK_ID_PREFIX: &str = "task";

/// Prefix for journal event identifiers.
pub const JOURNAL_EVENT_ID_PREFIX: &str = "event";

const SUFFIX_LEN: usize = 8;

/// Generates `<prefix>_<epoch-seconds>_<8 hex chars>`.
pub fn prefixed_id<Tz: TimeZone>(prefix: &str, at: &DateTime<Tz>) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{}_{}_{}", prefix, at.timestamp(), &random[..SUFFIX_LEN])
}

/// Generates a new task identifier.
pub fn task_id<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    prefixed_id(TASK_ID_PREFIX, at)
}

/// Generates a new journal event identifier.
pub fn journal_event_id<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    prefixed_id(JOURNAL_EVENT_ID_PREFIX, at)
}
