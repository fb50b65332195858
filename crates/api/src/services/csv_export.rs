//! CSV rendering for `GET /api/export`.
//!
//! Each view always writes its column header row, even with no data rows.
//! Fields are quoted by the `csv` writer when they contain delimiters,
//! quotes or line breaks.

use chrono::{DateTime, FixedOffset};
use domain::models::{JournalEvent, LogEntry, Place, Task};
use shared::time::{file_stamp, isoformat};

use crate::error::ApiError;

pub const LOG_COLUMNS: [&str; 8] = [
    "timestamp",
    "event",
    "lat",
    "lon",
    "place",
    "notes",
    "duration_minutes",
    "mode",
];
pub const PLACE_COLUMNS: [&str; 6] = ["id", "name", "lat", "lon", "geofence_radius", "type"];
pub const TASK_COLUMNS: [&str; 8] = [
    "id",
    "title",
    "description",
    "status",
    "created_at",
    "completed_at",
    "priority",
    "due_by",
];
pub const EVENT_COLUMNS: [&str; 4] = ["id", "title", "description", "date"];

/// Which view to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Logs,
    Places,
    Tasks,
    Events,
    Combined,
}

impl ExportKind {
    pub fn parse(s: &str) -> Result<Self, ApiError> {
        match s {
            "logs" => Ok(ExportKind::Logs),
            "places" => Ok(ExportKind::Places),
            "tasks" => Ok(ExportKind::Tasks),
            "events" => Ok(ExportKind::Events),
            "combined" => Ok(ExportKind::Combined),
            _ => Err(ApiError::validation(
                "Invalid export type. Use: logs, places, tasks, events, or combined",
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Logs => "logs",
            ExportKind::Places => "places",
            ExportKind::Tasks => "tasks",
            ExportKind::Events => "events",
            ExportKind::Combined => "combined",
        }
    }

    /// Download name, e.g. `work_logs_20240131_174502.csv`.
    pub fn filename(&self, at: &DateTime<FixedOffset>) -> String {
        match self {
            ExportKind::Combined => format!("worklog_combined_{}.csv", file_stamp(at)),
            kind => format!("work_{}_{}.csv", kind.as_str(), file_stamp(at)),
        }
    }
}

/// An in-memory CSV document made of one or more views.
#[derive(Debug, Default)]
pub struct CsvDocument {
    buf: Vec<u8>,
}

impl CsvDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a labelled section such as `=== LOGS ===`, separated from any
    /// previous section by a blank line.
    pub fn section(&mut self, title: &str) {
        if !self.buf.is_empty() {
            self.buf.push(b'\n');
        }
        self.buf.extend_from_slice(format!("=== {} ===\n", title).as_bytes());
    }

    pub fn logs(&mut self, logs: &[LogEntry]) -> Result<(), csv::Error> {
        self.write(LOG_COLUMNS, logs.iter().map(log_record))
    }

    pub fn places(&mut self, places: &[Place]) -> Result<(), csv::Error> {
        self.write(PLACE_COLUMNS, places.iter().map(place_record))
    }

    pub fn tasks(&mut self, tasks: &[Task]) -> Result<(), csv::Error> {
        self.write(TASK_COLUMNS, tasks.iter().map(task_record))
    }

    pub fn events(&mut self, events: &[JournalEvent]) -> Result<(), csv::Error> {
        self.write(EVENT_COLUMNS, events.iter().map(event_record))
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn write<const N: usize>(
        &mut self,
        header: [&str; N],
        records: impl Iterator<Item = [String; N]>,
    ) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(&mut self.buf);
        wtr.write_record(header)?;
        for record in records {
            wtr.write_record(&record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn log_record(log: &LogEntry) -> [String; 8] {
    [
        isoformat(&log.timestamp),
        log.event.clone(),
        format!("{:?}", log.lat),
        format!("{:?}", log.lon),
        log.place_label().to_string(),
        log.notes.clone(),
        log.duration_minutes.to_string(),
        log.mode.as_str().to_string(),
    ]
}

fn place_record(place: &Place) -> [String; 6] {
    [
        place.id.clone(),
        place.name.clone(),
        format!("{:?}", place.lat),
        format!("{:?}", place.lon),
        place.geofence_radius.to_string(),
        place.place_type.clone(),
    ]
}

fn task_record(task: &Task) -> [String; 8] {
    [
        task.id.clone(),
        task.title.clone(),
        task.description.clone().unwrap_or_default(),
        task.status.as_str().to_string(),
        isoformat(&task.created_at),
        task.completed_at.as_ref().map(isoformat).unwrap_or_default(),
        task.priority.clone(),
        task.due_by.map(|d| d.to_string()).unwrap_or_default(),
    ]
}

fn event_record(event: &JournalEvent) -> [String; 4] {
    [
        event.id.clone(),
        event.title.clone(),
        event.description.clone().unwrap_or_default(),
        event.date.to_string(),
    ]
}
