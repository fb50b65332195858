//! Journal event entity (database row mapping).

use chrono::NaiveDate;
use sqlx::FromRow;

use domain::models::JournalEvent;

/// Database row mapping for the events table.
#[derive(Debug, Clone, FromRow)]
pub struct JournalEventEntity {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
}

impl From<JournalEventEntity> for JournalEvent {
    fn from(entity: JournalEventEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            date: entity.date,
        }
    }
}
