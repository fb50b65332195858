//! HTTP route handlers.

pub mod dashboard;
pub mod event_log;
pub mod export;
pub mod health;
pub mod journal_events;
pub mod logs;
pub mod places;
pub mod tasks;
