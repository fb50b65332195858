//! Log entry domain model.
//!
//! A log entry records one arrival/exit style event at a coordinate,
//! optionally tagged with the place whose geofence enclosed it.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::lenient::LenientNumber;

use crate::error::{require, RequestError};
use crate::models::common::non_blank;
use crate::services::geofence::UNKNOWN_PLACE;

/// Conventional event kind for entering a place.
pub const ARRIVE_EVENT: &str = "arrive";

/// Conventional event kind for leaving a place.
pub const EXIT_EVENT: &str = "exit";

/// `source` value sent by the phone automation.
pub const IPHONE_SOURCE: &str = "iphone";

/// How an entry was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogMode {
    #[serde(rename = "iPhone")]
    IPhone,
    #[default]
    Manual,
}

impl LogMode {
    /// Converts to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogMode::IPhone => "iPhone",
            LogMode::Manual => "Manual",
        }
    }

    /// Parses from database string representation. Unknown values read as manual.
    pub fn parse(s: &str) -> Self {
        match s {
            "iPhone" => LogMode::IPhone,
            _ => LogMode::Manual,
        }
    }

    /// Maps the client-supplied `source` (case-sensitive) to a mode.
    pub fn from_source(source: Option<&str>) -> Self {
        match source {
            Some(IPHONE_SOURCE) => LogMode::IPhone,
            _ => LogMode::Manual,
        }
    }
}

/// Event kinds accepted on the URL-parameter endpoint used by phone automations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomationEvent {
    Arrive,
    Exit,
}

impl AutomationEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            AutomationEvent::Arrive => ARRIVE_EVENT,
            AutomationEvent::Exit => EXIT_EVENT,
        }
    }

    pub fn parse(s: &str) -> Result<Self, RequestError> {
        match s {
            ARRIVE_EVENT => Ok(AutomationEvent::Arrive),
            EXIT_EVENT => Ok(AutomationEvent::Exit),
            _ => Err(RequestError::UnsupportedAutomationEvent),
        }
    }
}

/// A stored log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: DateTime<FixedOffset>,
    pub event: String,
    pub lat: f64,
    pub lon: f64,
    pub place_id: Option<String>,
    pub place_name: Option<String>,
    pub notes: String,
    pub duration_minutes: i32,
    pub mode: LogMode,
}

impl LogEntry {
    /// Place name, or `"unknown"` when no geofence matched.
    pub fn place_label(&self) -> &str {
        self.place_name.as_deref().unwrap_or(UNKNOWN_PLACE)
    }
}

/// A log entry ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLogEntry {
    pub timestamp: DateTime<FixedOffset>,
    pub event: String,
    pub lat: f64,
    pub lon: f64,
    pub place_id: Option<String>,
    pub notes: String,
    pub duration_minutes: i32,
    pub mode: LogMode,
}

/// Request payload for `POST /api/log`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogEventRequest {
    pub event: Option<String>,
    pub lat: Option<LenientNumber>,
    pub lon: Option<LenientNumber>,
    pub notes: Option<String>,
    pub duration_minutes: Option<LenientNumber>,
    pub source: Option<String>,
}

/// A validated logging request, before place resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSubmission {
    pub event: String,
    pub lat: f64,
    pub lon: f64,
    pub notes: String,
    /// Duration supplied by the client, if any.
    pub duration_minutes: Option<i32>,
    pub mode: LogMode,
}

impl LogSubmission {
    /// Exit events without a (non-zero) client duration get one estimated
    /// from the latest arrival.
    pub fn needs_duration_estimate(&self) -> bool {
        self.event == EXIT_EVENT && self.duration_minutes.unwrap_or(0) == 0
    }

    /// Builds the submission for the URL-parameter endpoint.
    ///
    /// Notes are generated later, once the place is known.
    pub fn from_automation(event: AutomationEvent, lat: &str, lon: &str) -> Result<Self, RequestError> {
        let parse = |raw: &str| raw.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        let (lat, lon) = match (parse(lat), parse(lon)) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => return Err(RequestError::InvalidCoordinates),
        };

        Ok(Self {
            event: event.as_str().to_string(),
            lat,
            lon,
            notes: String::new(),
            duration_minutes: None,
            mode: LogMode::IPhone,
        })
    }
}

impl LogEventRequest {
    /// Checks required fields and coerces coordinates.
    pub fn into_submission(self) -> Result<LogSubmission, RequestError> {
        let event = require(self.event, "event")?;
        let lat = require(self.lat, "lat")?
            .to_f64()
            .map_err(|source| RequestError::InvalidNumber { field: "lat", source })?;
        let lon = require(self.lon, "lon")?
            .to_f64()
            .map_err(|source| RequestError::InvalidNumber { field: "lon", source })?;

        let duration_minutes = match self.duration_minutes {
            Some(raw) => {
                let minutes = raw.to_i32().map_err(|source| RequestError::InvalidNumber {
                    field: "duration_minutes",
                    source,
                })?;
                if minutes < 0 {
                    return Err(RequestError::invalid_value(
                        "duration_minutes",
                        "must be non-negative",
                    ));
                }
                Some(minutes)
            }
            None => None,
        };

        Ok(LogSubmission {
            event,
            lat,
            lon,
            notes: self.notes.unwrap_or_default(),
            duration_minutes,
            mode: LogMode::from_source(self.source.as_deref()),
        })
    }
}

/// Notes attached to entries created by the URL-parameter endpoint.
pub fn automation_notes(event: AutomationEvent, place: Option<&str>, lat: f64, lon: f64) -> String {
    match place {
        Some(name) if name != UNKNOWN_PLACE => format!("Automated {} at {}", event.as_str(), name),
        _ => format!("Automated {} at {}", event.as_str(), format_coordinates(lat, lon)),
    }
}

/// Formats a coordinate pair with four decimals, e.g. `12.9716, 77.5946`.
pub fn format_coordinates(lat: f64, lon: f64) -> String {
    format!("{:.4}, {:.4}", lat, lon)
}

/// Response for both logging endpoints.
///
/// `coordinates` and `duration_minutes` are only reported by the
/// URL-parameter endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LogEventResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<FixedOffset>,
    pub place: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
}

impl LogEventResponse {
    pub fn logged(entry: &LogEntry) -> Self {
        Self {
            success: true,
            message: format!("Event '{}' logged successfully", entry.event),
            timestamp: entry.timestamp,
            place: entry.place_label().to_string(),
            coordinates: None,
            duration_minutes: None,
        }
    }

    pub fn with_automation_details(mut self, entry: &LogEntry) -> Self {
        self.coordinates = Some(format_coordinates(entry.lat, entry.lon));
        self.duration_minutes = Some(entry.duration_minutes);
        self
    }
}

/// One row of `GET /api/logs`.
#[derive(Debug, Clone, Serialize)]
pub struct LogItem {
    pub id: i64,
    pub timestamp: DateTime<FixedOffset>,
    pub event: String,
    pub lat: f64,
    pub lon: f64,
    pub place: String,
    pub notes: String,
    pub duration_minutes: i32,
    pub mode: LogMode,
    pub date: NaiveDate,
    pub time: String,
}

impl From<LogEntry> for LogItem {
    fn from(entry: LogEntry) -> Self {
        let place = entry.place_label().to_string();
        Self {
            id: entry.id,
            date: entry.timestamp.date_naive(),
            time: entry.timestamp.time().to_string(),
            timestamp: entry.timestamp,
            event: entry.event,
            lat: entry.lat,
            lon: entry.lon,
            place,
            notes: entry.notes,
            duration_minutes: entry.duration_minutes,
            mode: entry.mode,
        }
    }
}

/// Query parameters for `GET /api/logs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListLogsQuery {
    pub date: Option<String>,
    pub event: Option<String>,
    pub place: Option<String>,
    pub limit: Option<String>,
}

/// Parsed filters for listing log entries. Blank parameters are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogFilter {
    pub date: Option<NaiveDate>,
    pub event: Option<String>,
    /// Place name; `"unknown"` selects entries without a place.
    pub place: Option<String>,
    pub limit: Option<i64>,
}

impl ListLogsQuery {
    pub fn into_filter(self) -> Result<LogFilter, RequestError> {
        let date = non_blank(self.date)
            .map(|d| {
                NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
                    .map_err(|_| RequestError::invalid_value("date", "expected YYYY-MM-DD"))
            })
            .transpose()?;

        let limit = non_blank(self.limit)
            .map(|l| match l.trim().parse::<i64>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(RequestError::invalid_value("limit", "expected a positive integer")),
            })
            .transpose()?;

        Ok(LogFilter {
            date,
            event: non_blank(self.event),
            place: non_blank(self.place),
            limit,
        })
    }
}

/// Response for listing log entries.
#[derive(Debug, Clone, Serialize)]
pub struct ListLogsResponse {
    pub success: bool,
    pub logs: Vec<LogItem>,
    pub total: usize,
}
