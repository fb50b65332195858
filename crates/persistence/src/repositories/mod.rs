//! Repository implementations for database operations.

pub mod dashboard;
pub mod journal_event;
pub mod log_entry;
pub mod place;
pub mod task;

pub use dashboard::DashboardRepository;
pub use journal_event::JournalEventRepository;
pub use log_entry::LogRepository;
pub use place::PlaceRepository;
pub use task::TaskRepository;
