//! Domain models for Worklog.

pub mod common;
pub mod dashboard;
pub mod journal_event;
pub mod log_entry;
pub mod place;
pub mod task;

pub use common::MessageResponse;
pub use dashboard::{Dashboard, DashboardMetrics, DashboardResponse, TaskStats};
pub use journal_event::{JournalEvent, JournalEventPatch, NewJournalEvent};
pub use log_entry::{AutomationEvent, LogEntry, LogFilter, LogMode, LogSubmission, NewLogEntry};
pub use place::{NewPlace, Place};
pub use task::{NewTask, Task, TaskPatch, TaskStatus};
