//! Log entry entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::{LogEntry, LogMode};
use shared::time::to_ist;

/// A `logs` row joined with the name of its place, if any.
#[derive(Debug, Clone, FromRow)]
pub struct LogEntryEntity {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub event: String,
    pub lat: f64,
    pub lon: f64,
    pub place_id: Option<String>,
    pub place_name: Option<String>,
    pub notes: String,
    pub duration_minutes: i32,
    pub mode: String,
}

impl From<LogEntryEntity> for LogEntry {
    fn from(entity: LogEntryEntity) -> Self {
        Self {
            id: entity.id,
            timestamp: to_ist(entity.timestamp),
            event: entity.event,
            lat: entity.lat,
            lon: entity.lon,
            place_id: entity.place_id,
            place_name: entity.place_name,
            notes: entity.notes,
            duration_minutes: entity.duration_minutes,
            mode: LogMode::parse(&entity.mode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_entity() -> LogEntryEntity {
        LogEntryEntity {
            id: 7,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 3, 30, 0).unwrap(),
            event: "arrive".to_string(),
            lat: 12.9716,
            lon: 77.5946,
            place_id: Some("office".to_string()),
            place_name: Some("office".to_string()),
            notes: "Standup".to_string(),
            duration_minutes: 0,
            mode: "iPhone".to_string(),
        }
    }

    #[test]
    fn test_log_entry_entity_to_domain() {
        let entry: LogEntry = create_test_entity().into();

        assert_eq!(entry.id, 7);
        assert_eq!(entry.event, "arrive");
        assert_eq!(entry.place_label(), "office");
        assert_eq!(entry.mode, LogMode::IPhone);
        assert_eq!(entry.timestamp.to_rfc3339(), "2024-03-01T09:00:00+05:30");
    }

    #[test]
    fn test_unplaced_entry_maps_to_unknown() {
        let mut entity = create_test_entity();
        entity.place_id = None;
        entity.place_name = None;
        entity.mode = "Manual".to_string();

        let entry: LogEntry = entity.into();
        assert_eq!(entry.place_label(), "unknown");
        assert_eq!(entry.mode, LogMode::Manual);
    }
}
