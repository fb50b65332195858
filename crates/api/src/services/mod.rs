//! Request-spanning services used by route handlers.

pub mod csv_export;
pub mod event_logging;

pub use csv_export::{CsvDocument, ExportKind};
pub use event_logging::EventLogger;
