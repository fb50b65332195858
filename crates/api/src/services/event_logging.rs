//! Event logging: place resolution, duration estimation and persistence for
//! both logging endpoints.

use chrono::{DateTime, FixedOffset};
use domain::models::log_entry::automation_notes;
use domain::models::{AutomationEvent, LogEntry, LogSubmission, NewLogEntry, Place};
use domain::services::{estimate_duration, find_enclosing_place};
use persistence::repositories::{LogRepository, PlaceRepository};
use shared::time::now_ist;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::middleware::metrics::record_event_logged;

/// Records arrival/exit style log entries.
pub struct EventLogger {
    places: PlaceRepository,
    logs: LogRepository,
}

impl EventLogger {
    pub fn new(pool: PgPool) -> Self {
        Self {
            places: PlaceRepository::new(pool.clone()),
            logs: LogRepository::new(pool),
        }
    }

    /// Resolve, estimate and insert. `automation` is set for the URL-parameter
    /// endpoint, whose notes are generated from the resolved place.
    ///
    /// Failures while resolving the place or looking up the last arrival are
    /// logged and degrade to "no place" and a zero duration. Only the insert
    /// itself can fail the request.
    pub async fn record(
        &self,
        submission: LogSubmission,
        automation: Option<AutomationEvent>,
    ) -> Result<LogEntry, sqlx::Error> {
        let timestamp = now_ist();
        let place = self.resolve_place(submission.lat, submission.lon).await;

        let duration_minutes = if submission.needs_duration_estimate() {
            self.estimate_exit_duration(&timestamp).await
        } else {
            submission.duration_minutes.unwrap_or(0)
        };

        let notes = match automation {
            Some(event) => automation_notes(
                event,
                place.as_ref().map(|p| p.name.as_str()),
                submission.lat,
                submission.lon,
            ),
            None => submission.notes,
        };

        let entry = NewLogEntry {
            timestamp,
            event: submission.event,
            lat: submission.lat,
            lon: submission.lon,
            place_id: place.map(|p| p.id),
            notes,
            duration_minutes,
            mode: submission.mode,
        };

        let entry = self.insert(entry).await?;
        record_event_logged(&entry.event, entry.mode.as_str());

        info!(
            log_id = entry.id,
            event = %entry.event,
            place = %entry.place_label(),
            duration_minutes = entry.duration_minutes,
            mode = entry.mode.as_str(),
            "Event logged"
        );

        Ok(entry)
    }

    /// Stores an entry. If its place was deleted after resolution, the entry
    /// is stored without a place instead of failing.
    pub async fn insert(&self, mut entry: NewLogEntry) -> Result<LogEntry, sqlx::Error> {
        match self.logs.create(&entry).await {
            Ok(entity) => Ok(entity.into()),
            Err(sqlx::Error::Database(e))
                if e.is_foreign_key_violation() && entry.place_id.is_some() =>
            {
                warn!(
                    place_id = ?entry.place_id,
                    "Resolved place no longer exists; logging without a place"
                );
                entry.place_id = None;
                Ok(self.logs.create(&entry).await?.into())
            }
            Err(e) => Err(e),
        }
    }

    async fn resolve_place(&self, lat: f64, lon: f64) -> Option<Place> {
        let places: Vec<Place> = match self.places.find_all_in_scan_order().await {
            Ok(entities) => entities.into_iter().map(Place::from).collect(),
            Err(e) => {
                warn!(error = %e, "Place lookup failed; logging without a place");
                return None;
            }
        };

        find_enclosing_place(lat, lon, &places).cloned()
    }

    async fn estimate_exit_duration(&self, exit: &DateTime<FixedOffset>) -> i32 {
        match self.logs.find_latest_arrival().await {
            Ok(last_arrival) => estimate_duration(exit, last_arrival.as_ref()),
            Err(e) => {
                warn!(error = %e, "Last arrival lookup failed; duration set to 0");
                0
            }
        }
    }
}
