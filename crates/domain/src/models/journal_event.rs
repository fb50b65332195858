//! Journal event domain model.
//!
//! Journal events are dated free-text notes. They are unrelated to the
//! arrive/exit events stored in the location log.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::lenient::double_option;
use validator::Validate;

use crate::error::{require, RequestError};

/// Represents a journal entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalEvent {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

/// Request payload for creating a journal entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateJournalEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

/// A validated journal entry ready to be stored.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewJournalEvent {
    pub id: String,
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

impl CreateJournalEventRequest {
    pub fn into_new_event(self, id: String) -> Result<NewJournalEvent, RequestError> {
        Ok(NewJournalEvent {
            id,
            title: require(self.title, "title")?,
            description: require(self.description, "description")?,
            date: require(self.date, "date")?,
        })
    }
}

/// Request payload for a partial journal entry update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateJournalEventRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub date: Option<NaiveDate>,
}

/// Field-by-field journal entry update. `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JournalEventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub date: Option<NaiveDate>,
}

impl UpdateJournalEventRequest {
    pub fn into_patch(self) -> Result<JournalEventPatch, RequestError> {
        if self.title.is_none() && self.description.is_none() && self.date.is_none() {
            return Err(RequestError::NoFieldsToUpdate);
        }
        if matches!(self.title.as_deref(), Some(t) if t.is_empty()) {
            return Err(RequestError::invalid_value("title", "must not be empty"));
        }
        Ok(JournalEventPatch {
            title: self.title,
            description: self.description,
            date: self.date,
        })
    }
}

/// Response for listing journal entries.
#[derive(Debug, Clone, Serialize)]
pub struct ListJournalEventsResponse {
    pub success: bool,
    pub events: Vec<JournalEvent>,
}

/// Response for a newly created journal entry.
#[derive(Debug, Clone, Serialize)]
pub struct JournalEventCreatedResponse {
    pub success: bool,
    pub message: String,
    pub event: JournalEvent,
}
