//! Dashboard metrics domain models.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::models::task::TaskStatus;

/// Headline log metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub total_logs: i64,
    pub today_logs: i64,
    pub unique_events: i64,
    pub total_duration_hours: f64,
}

impl DashboardMetrics {
    pub fn new(total_logs: i64, today_logs: i64, unique_events: i64, total_duration_minutes: i64) -> Self {
        Self {
            total_logs,
            today_logs,
            unique_events,
            total_duration_hours: total_duration_minutes as f64 / 60.0,
        }
    }
}

/// Task counts normalized into fixed buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: i64,
    pub pending: i64,
    pub in_progress: i64,
    pub completed: i64,
}

impl TaskStats {
    /// Builds the buckets from raw `status -> count` rows.
    ///
    /// Missing buckets default to 0. Statuses outside the known set only
    /// count toward `total`.
    pub fn from_status_counts(total: i64, counts: &HashMap<String, i64>) -> Self {
        let bucket = |status: TaskStatus| counts.get(status.as_str()).copied().unwrap_or(0);
        Self {
            total,
            pending: bucket(TaskStatus::Pending),
            in_progress: bucket(TaskStatus::InProgress),
            completed: bucket(TaskStatus::Completed),
        }
    }
}

/// Aggregated view over logs and tasks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub metrics: DashboardMetrics,
    /// Entry count per event kind.
    pub event_distribution: BTreeMap<String, i64>,
    /// Entry count per place name; entries without a place count as "unknown".
    pub place_distribution: BTreeMap<String, i64>,
    pub task_stats: TaskStats,
}

/// Response for `GET /api/dashboard`.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub success: bool,
    #[serde(flatten)]
    pub dashboard: Dashboard,
}
