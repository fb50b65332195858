//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod journal_event;
pub mod log_entry;
pub mod place;
pub mod task;

pub use journal_event::JournalEventEntity;
pub use log_entry::LogEntryEntity;
pub use place::PlaceEntity;
pub use task::TaskEntity;
